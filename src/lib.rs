pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{BuildConfig, CliConfig, EnvConfig, PatchConfig};
pub use crate::core::{ConnectionConfig, CopyReport, Nested, Record, ServiceStatus, StatusReport};
pub use utils::error::{DemoError, Result};
