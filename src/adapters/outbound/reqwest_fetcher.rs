//! Reqwest HTTP Fetcher
//!
//! Implements HttpFetcher with reqwest, bounded by the race context.

use crate::domain::errors::LookupError;
use crate::domain::ports::HttpFetcher;
use crate::domain::race_context::RaceContext;
use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use url::Url;

/// Default per-request timeout, independent of any race deadline.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP fetcher backed by a shared `reqwest::Client`.
///
/// The request future is raced against the context; when the context
/// fires first, the future is dropped, which aborts the connection.
pub struct ReqwestHttpFetcher {
    client: reqwest::Client,
}

impl ReqwestHttpFetcher {
    pub fn new() -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .user_agent(concat!("cep-race/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch(&self, url: &Url) -> Result<Bytes, LookupError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| LookupError::Transport(format!("failed to read body: {}", e)))
    }
}

#[async_trait]
impl HttpFetcher for ReqwestHttpFetcher {
    async fn get(&self, url: &Url, ctx: &RaceContext) -> Result<Bytes, LookupError> {
        tokio::select! {
            biased;

            reason = ctx.done() => {
                tracing::debug!(%url, "request aborted: {}", reason);
                Err(reason.into())
            }
            result = self.fetch(url) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::LookupErrorKind;
    use tokio::time::Instant;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn url(server: &MockServer, p: &str) -> Url {
        Url::parse(&format!("{}{}", server.uri(), p)).unwrap()
    }

    #[tokio::test]
    async fn test_get_success_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ws/01153000/json/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"uf":"SP"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHttpFetcher::new().unwrap();
        let ctx = RaceContext::with_timeout(Duration::from_secs(5));
        let body = fetcher
            .get(&url(&mock_server, "/ws/01153000/json/"), &ctx)
            .await
            .unwrap();

        assert_eq!(&body[..], br#"{"uf":"SP"}"#);
    }

    #[tokio::test]
    async fn test_get_non_success_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHttpFetcher::new().unwrap();
        let ctx = RaceContext::with_timeout(Duration::from_secs(5));
        let err = fetcher
            .get(&url(&mock_server, "/api/cep/v1/00000000"), &ctx)
            .await
            .unwrap_err();

        assert_eq!(err, LookupError::UpstreamStatus { status: 404 });
    }

    #[tokio::test]
    async fn test_get_aborts_on_deadline() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHttpFetcher::new().unwrap();
        let ctx = RaceContext::with_timeout(Duration::from_millis(100));

        let started = Instant::now();
        let err = fetcher
            .get(&url(&mock_server, "/slow"), &ctx)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), LookupErrorKind::Transport);
        assert!(err.to_string().contains("deadline exceeded"));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn test_get_aborts_on_cancel() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHttpFetcher::new().unwrap();
        let ctx = RaceContext::with_timeout(Duration::from_secs(10));
        let canceller = ctx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            canceller.cancel();
        });

        let err = fetcher
            .get(&url(&mock_server, "/slow"), &ctx)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("cancelled"));
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        let fetcher = ReqwestHttpFetcher::new().unwrap();
        let ctx = RaceContext::with_timeout(Duration::from_secs(5));
        let err = fetcher
            .get(&Url::parse("http://127.0.0.1:1/").unwrap(), &ctx)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), LookupErrorKind::Transport);
    }

    #[tokio::test]
    async fn test_get_with_expired_context_skips_request() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let fetcher = ReqwestHttpFetcher::with_client(reqwest::Client::new());
        let ctx = RaceContext::with_timeout(Duration::from_secs(5));
        ctx.cancel();

        let err = fetcher.get(&url(&mock_server, "/"), &ctx).await.unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::Transport);
    }
}
