use clap::Parser;
use demo_app::utils::logger;
use demo_app::{app, CliConfig, EnvConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting demo-app");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 連線設定只在啟動時讀取一次
    let env_config = EnvConfig::from_env();

    match app::run(&env_config).await {
        Ok(report) => {
            for line in &report.lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ demo-app failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
