use clap::Parser;
use demo_app::core::json_patch;
use demo_app::utils::{logger, validation::Validate};
use demo_app::PatchConfig;
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let config = PatchConfig::parse();

    logger::init_cli_logger(config.verbose);

    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let updated = json_patch::patch_file(
        Path::new(&config.file),
        &config.field,
        config.index,
        &config.value,
    )?;

    println!("{}", updated);
    Ok(())
}
