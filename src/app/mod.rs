use crate::core::database::{check_connection, check_redis, is_configured, POSTGRES, REDIS};
use crate::core::math;
use crate::core::{ConnectionConfig, Result, ServiceStatus, StatusReport};

fn status_line(status: &ServiceStatus) -> String {
    let state = if status.connected {
        "✅ Connected"
    } else {
        "❌ Disconnected"
    };
    format!("  {}: {}", status.name, state)
}

/// Runs the math demo and the connectivity checks for whatever is configured.
pub async fn run<C: ConnectionConfig + ?Sized>(config: &C) -> Result<StatusReport> {
    let mut report = StatusReport::default();

    report.lines.push("🚀 GitHub Actions SDLC Demo Application".to_string());
    report.lines.push("========================================".to_string());

    report.lines.push(String::new());
    report.lines.push("📊 Math Operations:".to_string());
    report.lines.push(format!("  Add: 5 + 3 = {}", math::add(5.0, 3.0)));
    report.lines.push(format!("  Multiply: 4 × 7 = {}", math::multiply(4.0, 7.0)));
    report.lines.push(format!("  Divide: 20 ÷ 4 = {}", math::divide(20.0, 4.0)?));

    if is_configured(config.database_url()) {
        let status = ServiceStatus {
            name: POSTGRES.to_string(),
            connected: check_connection(config).await,
        };
        report.lines.push(String::new());
        report.lines.push("🐘 Database Connection:".to_string());
        report.lines.push(status_line(&status));
        report.services.push(status);
    }

    if is_configured(config.redis_url()) {
        let status = ServiceStatus {
            name: REDIS.to_string(),
            connected: check_redis(config).await,
        };
        report.lines.push(String::new());
        report.lines.push("🧰 Cache Connection:".to_string());
        report.lines.push(status_line(&status));
        report.services.push(status);
    }

    report.lines.push(String::new());
    report.lines.push("✅ Application running successfully!".to_string());
    report.lines.push("📦 Built with GitHub Actions".to_string());

    tracing::debug!("Reported {} service(s)", report.services.len());
    Ok(report)
}
