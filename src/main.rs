use clap::Parser;
use collection_demo::utils::logger;
use collection_demo::{CliConfig, Demo, LogFormat};

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置，日誌等級需先通過檢查
    let config = match cli.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(cli.verbose, config.log_level()),
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, config.log_level()),
    }

    tracing::info!("Starting collection-demo");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }
    tracing::debug!("Resolved config: {:?}", config);

    let demo = Demo::with_url(config.demo.url.as_str());
    let upper = demo.to_upper(&config.run.inputs);
    tracing::debug!("Uppercased {} values: {:?}", upper.len(), upper);
}
