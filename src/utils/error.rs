use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Pop attempted on an empty stack")]
    EmptyStack,

    #[error("Stack is unusable: {message}")]
    StackPoisoned { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Stack,
    Configuration,
    System,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::EmptyStack | DemoError::StackPoisoned { .. } => ErrorCategory::Stack,
            DemoError::ConfigError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::TomlError(_) => ErrorCategory::Configuration,
            DemoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::EmptyStack => "There was nothing to remove".to_string(),
            DemoError::StackPoisoned { .. } => {
                "The stack was left in a broken state by another thread".to_string()
            }
            DemoError::IoError(e) => format!("Could not read a file: {}", e),
            DemoError::TomlError(e) => format!("The config file is not valid TOML: {}", e),
            DemoError::ConfigError { message } => format!("Bad configuration: {}", message),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
