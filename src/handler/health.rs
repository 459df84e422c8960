use tracing::debug;

pub const HEALTH_PATH: &str = "/v1/health";

/// Handler for GET /v1/health
pub async fn health_handler() -> &'static str {
    debug!("Health check requested");
    "Healthy"
}
