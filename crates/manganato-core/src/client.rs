//! HTTP client with rate limiting and retry logic for manganato
//!
//! Provides the page fetcher used by the scraper: a rate-limited HTTP
//! client that spaces requests out and retries transient errors with
//! exponential backoff.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::error::{MangaNatoError, Result};

/// Source of raw HTML pages
///
/// The scraper only ever asks for whole pages by absolute URL. Timeouts,
/// retries and pacing are the fetcher's business.
pub trait PageFetcher {
    /// Fetch `url` and return the response body
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum requests per second (default: 1.0)
    pub requests_per_second: f64,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
    /// Maximum retry attempts for transient errors (default: 3)
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            requests_per_second: 1.0,
            timeout_secs: 30,
            max_retries: 3,
        }
    }
}

/// Rate limiter to control request frequency
///
/// Ensures requests are spaced at least `min_interval` apart.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimiter {
    /// Create a new rate limiter with the specified requests per second
    ///
    /// # Arguments
    /// * `requests_per_second` - Maximum number of requests allowed per second
    pub fn new(requests_per_second: f64) -> Self {
        Self {
            min_interval: Duration::from_secs_f64(1.0 / requests_per_second),
            last_request: Arc::new(Mutex::new(None)),
        }
    }

    /// Acquire permission to make a request
    ///
    /// If called before the minimum interval has passed since the last request,
    /// this method will sleep until the interval has elapsed.
    pub async fn acquire(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }

    /// Get the minimum interval between requests
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// HTTP client wrapper with rate limiting and retry logic
///
/// Handles all HTTP communication with manganato, including:
/// - Rate limiting to avoid overwhelming the server
/// - Automatic retries with exponential backoff for transient errors
/// - Browser-like headers and a cookie store for challenge cookies
pub struct MangaNatoClient {
    client: reqwest::Client,
    rate_limiter: RateLimiter,
    max_retries: u32,
}

impl MangaNatoClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// `InvalidArgument` if `requests_per_second` is not positive,
    /// `HttpError` if the underlying client cannot be built
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        if config.requests_per_second.is_nan() || config.requests_per_second <= 0.0 {
            return Err(MangaNatoError::InvalidArgument(
                "requests_per_second must be positive".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(MangaNatoError::HttpError)?;

        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(config.requests_per_second),
            max_retries: config.max_retries,
        })
    }

    /// Fetch HTML content from an absolute URL
    ///
    /// # Errors
    /// - `HttpError` - Network or HTTP errors
    /// - `RateLimited` - Server returned 429 after all retries exhausted
    /// - `Blocked` - Server answered with an anti-bot challenge (403)
    /// - `NotFound` - Server returned 404
    pub async fn fetch_page(&self, url: &str) -> Result<String> {
        let mut attempt = 0;

        loop {
            self.rate_limiter.acquire().await;

            match self.do_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(e) if Self::is_retryable(&e) && attempt < self.max_retries => {
                    // Exponential backoff: 1s, 2s, 4s
                    let backoff = Duration::from_secs(1 << attempt);
                    log::warn!(
                        "Fetching {} failed ({}), retrying in {:?}",
                        url,
                        e,
                        backoff
                    );
                    sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Perform a single fetch attempt
    async fn do_fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MangaNatoError::HttpError)?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MangaNatoError::RateLimited);
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(MangaNatoError::Blocked(url.to_string()));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(MangaNatoError::NotFound(url.to_string()));
        }

        let response = response
            .error_for_status()
            .map_err(MangaNatoError::HttpError)?;

        response.text().await.map_err(MangaNatoError::HttpError)
    }

    /// Check if an error is retryable
    fn is_retryable(error: &MangaNatoError) -> bool {
        match error {
            MangaNatoError::RateLimited => true,
            MangaNatoError::HttpError(e) => {
                // Retry on timeout, connection errors, or 5xx status codes
                e.is_timeout()
                    || e.is_connect()
                    || e.status().is_some_and(|s| s.is_server_error())
            }
            _ => false,
        }
    }

    /// Get a reference to the rate limiter (for testing)
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }
}

impl PageFetcher for MangaNatoClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetch_page(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fast_config(max_retries: u32) -> ClientConfig {
        ClientConfig {
            requests_per_second: 100.0,
            timeout_secs: 5,
            max_retries,
        }
    }

    #[test]
    fn test_rate_limiter_creation() {
        let limiter = RateLimiter::new(2.0);
        assert_eq!(limiter.min_interval(), Duration::from_millis(500));
    }

    #[test]
    fn test_rate_limiter_interval_calculation() {
        let limiter = RateLimiter::new(4.0);
        assert_eq!(limiter.min_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.requests_per_second, 1.0);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_client_creation() {
        let client = MangaNatoClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_zero_rate() {
        let config = ClientConfig {
            requests_per_second: 0.0,
            ..ClientConfig::default()
        };
        assert!(matches!(
            MangaNatoClient::with_config(config),
            Err(MangaNatoError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_rate_limiter_acquire() {
        let limiter = RateLimiter::new(10.0); // 100ms interval

        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();

        // Second acquire should wait at least 100ms
        assert!(elapsed >= Duration::from_millis(90)); // Allow small tolerance
    }

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/genre-all/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let client = MangaNatoClient::with_config(fast_config(0)).unwrap();
        let body = client
            .fetch(&format!("{}/genre-all/1", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = MangaNatoClient::with_config(fast_config(0)).unwrap();
        let result = client.fetch(&format!("{}/manga-xx000000", server.uri())).await;
        assert!(matches!(result, Err(MangaNatoError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_fetch_blocked_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let client = MangaNatoClient::with_config(fast_config(3)).unwrap();
        let result = client.fetch(&format!("{}/genre-all/1", server.uri())).await;
        assert!(matches!(result, Err(MangaNatoError::Blocked(_))));
    }

    #[tokio::test]
    async fn test_fetch_retries_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("second try"))
            .mount(&server)
            .await;

        let client = MangaNatoClient::with_config(fast_config(1)).unwrap();
        let body = client
            .fetch(&format!("{}/genre-all/1", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "second try");
    }
}
