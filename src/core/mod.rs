pub mod demo;
pub mod runner;

pub use crate::domain::model::{Holder, Key, PopOutcome};
pub use crate::domain::ports::{PopStack, Runnable};
pub use crate::utils::error::Result;
