//! Connectivity stub: reports whether connection strings are configured.
//! Nothing here opens a socket.

use crate::domain::ports::ConnectionConfig;

pub const POSTGRES: &str = "PostgreSQL";
pub const REDIS: &str = "Redis";

/// Set and non-empty; the value itself is never inspected.
pub fn is_configured(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub async fn check_connection<C: ConnectionConfig + ?Sized>(config: &C) -> bool {
    let connected = is_configured(config.database_url());
    if !connected {
        tracing::debug!("DATABASE_URL not configured, skipping {} check", POSTGRES);
    }
    connected
}

pub async fn check_redis<C: ConnectionConfig + ?Sized>(config: &C) -> bool {
    let connected = is_configured(config.redis_url());
    if !connected {
        tracing::debug!("REDIS_URL not configured, skipping {} check", REDIS);
    }
    connected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvConfig;

    #[tokio::test]
    async fn test_checks_follow_configuration() {
        let config = EnvConfig {
            database_url: Some("postgres://localhost:5432/demo".to_string()),
            redis_url: None,
        };
        assert!(check_connection(&config).await);
        assert!(!check_redis(&config).await);
    }

    #[tokio::test]
    async fn test_empty_values_count_as_missing() {
        let config = EnvConfig {
            database_url: Some(String::new()),
            redis_url: Some(String::new()),
        };
        assert!(!check_connection(&config).await);
        assert!(!check_redis(&config).await);
        assert!(!is_configured(None));
        assert!(is_configured(Some(" ")));
    }
}
