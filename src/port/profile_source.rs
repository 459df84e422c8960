use crate::domain::UserStats;
use crate::error::FetchError;
use std::future::Future;
use std::pin::Pin;

/// Source of user statistics keyed by handle (the solved.ac API in production).
///
/// This trait is dyn-compatible by using boxed futures instead of `impl Future`.
pub trait ProfileSource: Send + Sync {
    fn fetch<'a>(
        &'a self,
        handle: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<UserStats, FetchError>> + Send + 'a>>;
}
