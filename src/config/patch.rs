use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "patch-json")]
#[command(about = "Rewrite one segment of a '/'-separated JSON string field in place")]
pub struct PatchConfig {
    /// JSON file to rewrite
    #[arg(long, default_value = "test.json")]
    pub file: String,

    #[arg(long, default_value = "monitoredResourceId")]
    pub field: String,

    /// Zero-based segment index
    #[arg(long, default_value = "1")]
    pub index: usize,

    #[arg(long, default_value = "987654321")]
    pub value: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for PatchConfig {
    fn validate(&self) -> Result<()> {
        validate_path("file", &self.file)?;
        validate_non_empty_string("field", &self.field)?;
        Ok(())
    }
}
