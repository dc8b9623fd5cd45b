pub mod build;
pub mod env;
pub mod patch;

pub use build::BuildConfig;
pub use env::EnvConfig;
pub use patch::PatchConfig;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "demo-app")]
#[command(about = "Demo application for the CI pipeline")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
