//! Client for the solved.ac user API.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::{ClassDecoration, Rating, UserStats};
use crate::error::FetchError;
use crate::port::ProfileSource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Payload of `GET /v3/user/show`. Fields not needed for badges are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserShowResponse {
    rating: i64,
    solved_count: u64,
    #[serde(rename = "class")]
    class_level: u32,
    #[serde(default)]
    class_decoration: ClassDecoration,
}

impl TryFrom<UserShowResponse> for UserStats {
    type Error = FetchError;

    fn try_from(resp: UserShowResponse) -> Result<Self, Self::Error> {
        Ok(UserStats {
            rating: Rating::try_from(resp.rating)?,
            solved_count: resp.solved_count,
            class_level: resp.class_level,
            class_decoration: resp.class_decoration,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SolvedAcConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SolvedAcClient {
    client: Client,
    base_url: Url,
}

impl SolvedAcClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: SolvedAcConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    fn user_show_url(&self, handle: &str) -> Url {
        let mut url = self.base_url.clone();
        // base URLs are validated as hierarchical at startup
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["v3", "user", "show"]);
        }
        url.query_pairs_mut().append_pair("handle", handle);
        url
    }

    /// Fetches a single user's statistics.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses, malformed bodies and negative
    /// ratings are all reported as [`FetchError`].
    #[instrument(skip(self))]
    pub async fn user_stats(&self, handle: &str) -> Result<UserStats, FetchError> {
        let url = self.user_show_url(handle);
        debug!(%url, "requesting user profile");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let body = response.text().await?;
        let payload: UserShowResponse = serde_json::from_str(&body)?;
        UserStats::try_from(payload)
    }
}

impl ProfileSource for SolvedAcClient {
    fn fetch<'a>(
        &'a self,
        handle: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<UserStats, FetchError>> + Send + 'a>> {
        Box::pin(self.user_stats(handle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> SolvedAcClient {
        SolvedAcClient::new(SolvedAcConfig {
            base_url: Url::parse(base_url).expect("valid url"),
            timeout: Duration::from_secs(5),
        })
        .expect("client should build")
    }

    #[test]
    fn user_show_url_keeps_base_path() {
        let client = test_client("https://solved.ac/api");
        assert_eq!(
            client.user_show_url("ccoco").as_str(),
            "https://solved.ac/api/v3/user/show?handle=ccoco"
        );

        let client = test_client("https://solved.ac/api/");
        assert_eq!(
            client.user_show_url("a b&c").as_str(),
            "https://solved.ac/api/v3/user/show?handle=a+b%26c"
        );
    }

    #[tokio::test]
    async fn user_stats_decodes_profile() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "handle": "ccoco",
            "rating": 1843,
            "solvedCount": 1234,
            "class": 6,
            "classDecoration": "gold",
            "tier": 17
        });

        Mock::given(method("GET"))
            .and(path("/api/v3/user/show"))
            .and(query_param("handle", "ccoco"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = test_client(&format!("{}/api", server.uri()));
        let stats = client.user_stats("ccoco").await.expect("fetch should succeed");

        assert_eq!(stats.rating, Rating::new(1843));
        assert_eq!(stats.solved_count, 1234);
        assert_eq!(stats.class_level, 6);
        assert_eq!(stats.class_decoration, ClassDecoration::Gold);
    }

    #[tokio::test]
    async fn user_stats_defaults_missing_decoration() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "rating": 0, "solvedCount": 0, "class": 0 });

        Mock::given(method("GET"))
            .and(path("/v3/user/show"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let stats = test_client(&server.uri())
            .user_stats("newbie")
            .await
            .expect("fetch should succeed");
        assert_eq!(stats.class_decoration, ClassDecoration::None);
    }

    #[tokio::test]
    async fn user_stats_reports_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/user/show"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .user_stats("nobody")
            .await
            .expect_err("404 should fail");

        match err {
            FetchError::Status { status, body } => {
                assert_eq!(status.as_u16(), 404);
                assert_eq!(body, "Not Found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn user_stats_reports_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/user/show"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>challenge</html>"))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .user_stats("ccoco")
            .await
            .expect_err("html should fail");
        assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn user_stats_rejects_negative_rating() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "rating": -5,
            "solvedCount": 1,
            "class": 0,
            "classDecoration": "none"
        });
        Mock::given(method("GET"))
            .and(path("/v3/user/show"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let err = test_client(&server.uri())
            .user_stats("ccoco")
            .await
            .expect_err("negative rating should fail");
        assert!(matches!(err, FetchError::InvalidRating(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn user_stats_reports_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let err = test_client(&format!("http://{addr}"))
            .user_stats("ccoco")
            .await
            .expect_err("closed server should fail");
        assert!(matches!(err, FetchError::Transport(_)), "got {err:?}");
    }
}
