use crate::core::Runnable;

/// The only [`Runnable`]; running it does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRunner;

impl Runnable for NoopRunner {
    fn run(&self) {}
}
