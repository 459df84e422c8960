use std::time::Duration;

use thiserror::Error;

use crate::handler::health::HEALTH_PATH;

/// Default HTTP port for health checks
const DEFAULT_HTTP_PORT: u16 = 8000;

/// Error type for healthcheck failures
#[derive(Debug, Error)]
pub enum HealthcheckError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Health endpoint returned status: {0}")]
    Status(reqwest::StatusCode),
}

/// Port the local server listens on: `HTTP_PORT`, or 8000 when unset or invalid.
fn local_port() -> u16 {
    std::env::var("HTTP_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}

/// Perform a health check against the configured local port
pub async fn healthcheck() -> Result<(), HealthcheckError> {
    healthcheck_with_port(local_port()).await
}

/// Perform a health check against a specific port
pub async fn healthcheck_with_port(port: u16) -> Result<(), HealthcheckError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()
        .map_err(HealthcheckError::Client)?;

    let url = format!("http://127.0.0.1:{port}{HEALTH_PATH}");

    let resp = client
        .get(&url)
        .send()
        .await
        .map_err(HealthcheckError::Request)?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(HealthcheckError::Status(resp.status()))
    }
}
