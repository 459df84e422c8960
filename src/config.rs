use std::env;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

const DEFAULT_HTTP_PORT: &str = "8000";
const DEFAULT_API_BASE_URL: &str = "https://solved.ac/api";
const DEFAULT_API_TIMEOUT_MS: &str = "5000";
const DEFAULT_HANDLE: &str = "ccoco";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {source}")]
    Invalid {
        name: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Validation(String),
}

#[derive(Debug, Clone)]
pub struct Settings {
    /// Port for the badge HTTP server
    pub http_port: u16,
    /// Root of the solved.ac API, e.g. `https://solved.ac/api`
    pub api_base_url: Url,
    /// Total timeout for a single rating API request
    pub api_timeout: Duration,
    /// Handle rendered when a request omits `boj`
    pub default_handle: String,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_port(self.http_port)?;
        validate_handle(&self.default_handle)?;
        validate_base_url(&self.api_base_url)?;
        if self.api_timeout.is_zero() {
            return Err(ConfigError::Validation("API timeout cannot be 0".into()));
        }
        Ok(())
    }
}

fn validate_port(port: u16) -> Result<(), ConfigError> {
    if port == 0 {
        return Err(ConfigError::Validation("Port cannot be 0".into()));
    }
    Ok(())
}

fn validate_handle(handle: &str) -> Result<(), ConfigError> {
    if handle.trim().is_empty() {
        return Err(ConfigError::Validation(
            "Default handle cannot be empty".into(),
        ));
    }
    Ok(())
}

fn validate_base_url(url: &Url) -> Result<(), ConfigError> {
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation(format!(
            "API base URL must be an http(s) URL: {url}"
        )));
    }
    Ok(())
}

/// Load settings from the process environment.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    from_lookup(|name| env::var(name).ok())
}

/// Load settings through `lookup`, falling back to defaults for unset keys.
pub fn from_lookup<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let http_port = var("HTTP_PORT", DEFAULT_HTTP_PORT)
        .parse::<u16>()
        .map_err(|e| invalid("HTTP_PORT", e))?;
    let api_base_url = Url::parse(&var("SOLVED_API_BASE_URL", DEFAULT_API_BASE_URL))
        .map_err(|e| invalid("SOLVED_API_BASE_URL", e))?;
    let api_timeout = var("SOLVED_API_TIMEOUT_MS", DEFAULT_API_TIMEOUT_MS)
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| invalid("SOLVED_API_TIMEOUT_MS", e))?;
    let default_handle = var("BADGE_DEFAULT_HANDLE", DEFAULT_HANDLE);

    let settings = Settings {
        http_port,
        api_base_url,
        api_timeout,
        default_handle,
    };

    settings.validate()?;

    Ok(settings)
}

fn invalid(
    name: &'static str,
    source: impl std::error::Error + Send + Sync + 'static,
) -> ConfigError {
    ConfigError::Invalid {
        name,
        source: Box::new(source),
    }
}
