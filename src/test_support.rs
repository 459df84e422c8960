//! Shared test support utilities
//!
//! Provides a `MockProfileSource` that answers every fetch with a canned
//! outcome and records which handles were requested.

use crate::domain::UserStats;
use crate::error::FetchError;
use crate::port::ProfileSource;
use reqwest::StatusCode;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

/// What the mock returns for each fetch.
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Stats(UserStats),
    /// Non-success HTTP status from the rating API.
    Status(u16),
    /// Body that is not the expected JSON.
    Malformed,
}

pub struct MockProfileSource {
    outcome: MockOutcome,
    requested: Mutex<Vec<String>>,
}

impl MockProfileSource {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested_handles(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }

    fn outcome(&self) -> Result<UserStats, FetchError> {
        match &self.outcome {
            MockOutcome::Stats(stats) => Ok(stats.clone()),
            MockOutcome::Status(code) => Err(FetchError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                body: "mock failure".to_string(),
            }),
            MockOutcome::Malformed => Err(FetchError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>").unwrap_err(),
            )),
        }
    }
}

impl ProfileSource for MockProfileSource {
    fn fetch<'a>(
        &'a self,
        handle: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<UserStats, FetchError>> + Send + 'a>> {
        Box::pin(async move {
            self.requested.lock().unwrap().push(handle.to_string());
            self.outcome()
        })
    }
}
