use crate::core::ConnectionConfig;
use serde::{Deserialize, Serialize};
use std::env;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const REDIS_URL: &str = "REDIS_URL";

/// Connection strings captured from the environment at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvConfig {
    pub database_url: Option<String>,
    pub redis_url: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup(DATABASE_URL).filter(|v| !v.is_empty()),
            redis_url: lookup(REDIS_URL).filter(|v| !v.is_empty()),
        }
    }
}

impl ConnectionConfig for EnvConfig {
    fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    fn redis_url(&self) -> Option<&str> {
        self.redis_url.as_deref()
    }
}
