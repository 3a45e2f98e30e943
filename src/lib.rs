pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{DemoConfig, LogFormat};
pub use crate::core::{demo::Demo, runner::NoopRunner};
pub use crate::domain::model::{Holder, Key, NumbersRef, PopOutcome};
pub use crate::domain::ports::{PopStack, Runnable};
pub use crate::utils::error::{DemoError, Result};
