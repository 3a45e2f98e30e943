pub mod toml_config;

pub use toml_config::{DemoConfig, LogFormat};

#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "collection-demo")]
#[command(about = "Runs the collection demo: uppercases a list of strings")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Strings to uppercase; overrides run.inputs from the config file
    #[arg(long, value_delimiter = ',')]
    pub input: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入配置檔並套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::utils::error::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };

        if !self.input.is_empty() {
            config.run.inputs = self.input.clone();
        }
        if self.json_logs {
            config.logging.get_or_insert_with(Default::default).format = LogFormat::Json;
        }

        Ok(config)
    }

    /// Resolves and validates; the logger is configured from the result.
    pub fn load(&self) -> crate::utils::error::Result<DemoConfig> {
        let config = self.resolve()?;
        config.validate()?;
        Ok(config)
    }
}
