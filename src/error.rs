use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::RatingError;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to build rating API client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to bind to address {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Failure to obtain a usable profile from the rating API.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("rating API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("rating API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to decode rating API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("rating API returned an invalid rating: {0}")]
    InvalidRating(#[from] RatingError),
}
