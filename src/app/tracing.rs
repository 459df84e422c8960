use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    /// Reads `RUST_LOG_FORMAT`; anything other than `json` selects the
    /// human-readable format. Unset means JSON (production default).
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None | Some("json") => LogFormat::Json,
            Some(_) => LogFormat::Pretty,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// A second call is a no-op so tests and embedders can install their own
/// subscriber first.
pub fn init_tracing() {
    let format = LogFormat::from_env_value(std::env::var("RUST_LOG_FORMAT").ok().as_deref());
    let filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());

    let result = match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {e}");
    }
}
