use crate::utils::error::Result;
use crate::utils::validation::{validate_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "build-dist")]
#[command(about = "Copy source files into an output directory")]
pub struct BuildConfig {
    /// Source directory to copy from
    #[arg(long, default_value = "src")]
    pub src: String,

    /// Output directory, created if missing
    #[arg(long, default_value = "dist")]
    pub dist: String,

    /// Only files with this extension are copied
    #[arg(long, default_value = "rs")]
    pub ext: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for BuildConfig {
    fn validate(&self) -> Result<()> {
        validate_path("src", &self.src)?;
        validate_path("dist", &self.dist)?;
        validate_extension("ext", &self.ext)?;
        Ok(())
    }
}
