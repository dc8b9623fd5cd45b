pub mod array;
pub mod build;
pub mod database;
pub mod date;
pub mod json_patch;
pub mod math;
pub mod number;
pub mod object;
pub mod string;
pub mod validators;

pub use crate::domain::model::{CopyReport, Nested, Record, ServiceStatus, StatusReport};
pub use crate::domain::ports::ConnectionConfig;
pub use crate::utils::error::Result;
