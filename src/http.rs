//! Article page fetching with optional exponential backoff retry.
//!
//! # Architecture
//!
//! - [`FetchHtml`]: Core trait for retrieving a page body as text
//! - [`HttpFetcher`]: Plain `GET` over `reqwest`, no authentication or custom headers
//! - [`RetryFetch`]: Decorator that retries transient failures of any `FetchHtml`
//!
//! # Retry Strategy
//!
//! - Retries only transient failures: transport errors, `429` and `5xx`
//! - Exponential backoff starting at the configured base delay
//! - Maximum delay capped at 30 seconds
//! - Random jitter (0-250ms) added to prevent thundering herd
//!
//! With `max_retries = 0` a failing link is attempted exactly once.

use crate::utils::truncate_for_log;
use rand::{Rng, rng};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Why a single article page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with HTTP {status}")]
    Status { status: u16 },

    #[error("fetch cancelled by shutdown")]
    Cancelled,
}

impl FetchError {
    /// Whether another attempt could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            FetchError::Transport(_) => true,
            FetchError::Status { status } => {
                *status == StatusCode::TOO_MANY_REQUESTS.as_u16() || *status >= 500
            }
            FetchError::Cancelled => false,
        }
    }
}

/// Retrieve an HTML page body as text.
///
/// The returned future is `Send` so fetches can run on spawned tasks.
pub trait FetchHtml {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetches pages with a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher. `timeout` of `None` leaves the transport default in place.
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl FetchHtml for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        debug!(
            bytes = body.len(),
            preview = %truncate_for_log(&body, 120),
            "Fetched page body"
        );
        Ok(body)
    }
}

/// Wrapper that adds exponential backoff retry logic to any [`FetchHtml`] implementation.
///
/// The delay between retries follows this formula:
/// ```text
/// delay = min(base_delay * 2^(attempt-1), max_delay) + random_jitter(0..250ms)
/// ```
pub struct RetryFetch<T> {
    inner: T,
    max_retries: usize,
    base_delay: Duration,
    max_delay: Duration,
}

impl<T> RetryFetch<T>
where
    T: FetchHtml,
{
    /// Wrap `inner`, allowing up to `max_retries` extra attempts per URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let fetcher = RetryFetch::new(HttpFetcher::new(None)?, 3, Duration::from_secs(1));
    /// ```
    pub fn new(inner: T, max_retries: usize, base_delay: Duration) -> Self {
        Self {
            inner,
            max_retries,
            base_delay,
            max_delay: Duration::from_secs(30),
        }
    }

    fn backoff(&self, attempt: usize) -> Duration {
        let shift = u32::try_from(attempt.saturating_sub(1)).unwrap_or(u32::MAX).min(16);
        let delay = self.base_delay.saturating_mul(1 << shift).min(self.max_delay);
        let jitter_ms: u64 = rng().random_range(0..=250);
        delay + Duration::from_millis(jitter_ms)
    }
}

impl<T> fmt::Debug for RetryFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryFetch")
            .field("max_retries", &self.max_retries)
            .field("base_delay", &self.base_delay)
            .field("max_delay", &self.max_delay)
            .finish()
    }
}

impl<T> FetchHtml for RetryFetch<T>
where
    T: FetchHtml + Sync,
{
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let total_t0 = Instant::now();
        let mut attempt = 0usize;

        loop {
            match self.inner.fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) => {
                    attempt += 1;
                    if attempt > self.max_retries || !e.is_transient() {
                        return Err(e);
                    }

                    let delay = self.backoff(attempt);
                    warn!(
                        attempt,
                        max = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        elapsed_ms_total = total_t0.elapsed().as_millis() as u64,
                        error = %e,
                        "fetch failed; backing off before retry"
                    );
                    sleep(delay).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(url_path: &str, status: u16, body: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(url_path))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&mock_server)
            .await;
        mock_server
    }

    #[test]
    fn test_transient_classification() {
        assert!(FetchError::Status { status: 503 }.is_transient());
        assert!(FetchError::Status { status: 429 }.is_transient());
        assert!(!FetchError::Status { status: 404 }.is_transient());
        assert!(!FetchError::Cancelled.is_transient());
    }

    #[test]
    fn test_backoff_is_capped() {
        let retry = RetryFetch::new(HttpFetcher::default(), 5, Duration::from_secs(10));
        let delay = retry.backoff(10);
        assert!(delay >= Duration::from_secs(30));
        assert!(delay <= Duration::from_millis(30_250));
    }

    #[tokio::test]
    async fn test_http_fetcher_returns_body() {
        let server = create_mock_server("/story", 200, "<html>ok</html>").await;
        let fetcher = HttpFetcher::new(None).unwrap();

        let body = fetcher
            .fetch(&format!("{}/story", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_http_fetcher_rejects_error_status() {
        let server = create_mock_server("/missing", 404, "not found").await;
        let fetcher = HttpFetcher::new(None).unwrap();

        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_http_fetcher_network_error() {
        let fetcher = HttpFetcher::new(Some(Duration::from_secs(5))).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:1/y").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(200).set_body_string("recovered"))
            .mount(&server)
            .await;

        let fetcher = RetryFetch::new(HttpFetcher::default(), 3, Duration::from_millis(1));
        let body = fetcher
            .fetch(&format!("{}/flaky", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "recovered");
    }

    #[tokio::test]
    async fn test_retry_gives_up_on_permanent_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/gone"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = RetryFetch::new(HttpFetcher::default(), 3, Duration::from_millis(1));
        let err = fetcher
            .fetch(&format!("{}/gone", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404 }));
    }

    #[tokio::test]
    async fn test_zero_retries_attempts_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = RetryFetch::new(HttpFetcher::default(), 0, Duration::from_millis(1));
        let result = fetcher.fetch(&format!("{}/down", server.uri())).await;
        assert!(matches!(result, Err(FetchError::Status { status: 503 })));
    }
}
