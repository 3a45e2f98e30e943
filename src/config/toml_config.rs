use crate::core::demo::DEFAULT_URL;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_log_level, validate_non_empty_list, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub demo: DemoSection,
    #[serde(default)]
    pub run: RunSection,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoSection {
    #[serde(default = "default_url")]
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSection {
    #[serde(default = "default_inputs")]
    pub inputs: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

pub fn default_inputs() -> Vec<String> {
    vec!["a".to_string(), "b".to_string()]
}

impl Default for DemoSection {
    fn default() -> Self {
        Self { url: default_url() }
    }
}

impl Default for RunSection {
    fn default() -> Self {
        Self {
            inputs: default_inputs(),
        }
    }
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DemoError::ConfigError {
                message: format!("Config file not found: {}", path.display()),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DemoConfig = toml::from_str(content)?;
        Ok(config)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging.as_ref().map(|l| l.format).unwrap_or_default()
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("demo.url", &self.demo.url)?;
        validate_non_empty_list("run.inputs", &self.run.inputs)?;
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
