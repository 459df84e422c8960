mod router;
pub mod server;
mod state;
pub mod tracing;

pub use router::main_router;
pub use state::AppState;

use crate::config;
use crate::error::BadgeError;

/// Application entry point. Initializes tracing, configuration, and starts the server.
pub async fn run() -> Result<(), BadgeError> {
    // Handle healthcheck subcommand (for Docker healthcheck in distroless image)
    if std::env::args().nth(1).as_deref() == Some("healthcheck") {
        match crate::healthcheck().await {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Healthcheck failed: {e}");
                std::process::exit(1)
            }
        }
    }

    tracing::init_tracing();

    let settings = config::get_configuration()?;
    ::tracing::info!(
        api_base_url = %settings.api_base_url,
        default_handle = %settings.default_handle,
        "Loaded settings"
    );

    let app_state = AppState::from_settings(&settings)?;
    let app = main_router(app_state.badge_state);

    server::serve(app, settings.http_port).await
}
