use clap::Parser;
use demo_app::core::build;
use demo_app::utils::{logger, validation::Validate};
use demo_app::BuildConfig;
use std::path::Path;

fn main() {
    let config = BuildConfig::parse();

    logger::init_cli_logger(config.verbose);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match build::build(Path::new(&config.src), Path::new(&config.dist), &config.ext) {
        Ok(report) => {
            println!("✅ Build complete! {} file(s) copied", report.copied.len());
            println!("📦 Output: {}", config.dist);
        }
        Err(e) => {
            tracing::error!("❌ Build failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
