use crate::utils::error::{DemoError, Result};
use std::sync::{Arc, Mutex};

/// A capability with a single operation.
pub trait Runnable {
    fn run(&self);
}

/// Last-in-first-out container that can hand back its top element.
pub trait PopStack {
    fn try_pop(&mut self) -> Result<String>;
}

impl PopStack for Vec<String> {
    fn try_pop(&mut self) -> Result<String> {
        self.pop().ok_or(DemoError::EmptyStack)
    }
}

impl PopStack for Mutex<Vec<String>> {
    fn try_pop(&mut self) -> Result<String> {
        let stack = self.get_mut().map_err(|e| DemoError::StackPoisoned {
            message: e.to_string(),
        })?;
        stack.pop().ok_or(DemoError::EmptyStack)
    }
}

/// Stack shared between threads; pops through the lock.
impl PopStack for Arc<Mutex<Vec<String>>> {
    fn try_pop(&mut self) -> Result<String> {
        let mut stack = self.lock().map_err(|e| DemoError::StackPoisoned {
            message: e.to_string(),
        })?;
        stack.pop().ok_or(DemoError::EmptyStack)
    }
}
