use crate::adapter::{SolvedAcClient, SolvedAcConfig};
use crate::config::Settings;
use crate::error::BadgeError;
use crate::handler::badge::BadgeState;
use crate::port::ProfileSource;
use crate::render::Renderer;
use std::sync::Arc;

/// Shared application state wired from configuration.
pub struct AppState {
    pub badge_state: BadgeState,
}

impl AppState {
    /// Create `AppState` from configuration settings.
    ///
    /// # Errors
    /// Returns [`BadgeError::Client`] if the rating API client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, BadgeError> {
        let client = SolvedAcClient::new(SolvedAcConfig {
            base_url: settings.api_base_url.clone(),
            timeout: settings.api_timeout,
        })
        .map_err(BadgeError::Client)?;
        let source: Arc<dyn ProfileSource> = Arc::new(client);

        Ok(Self {
            badge_state: BadgeState {
                source,
                renderer: Arc::new(Renderer::new()),
                default_handle: Arc::from(settings.default_handle.as_str()),
            },
        })
    }
}
