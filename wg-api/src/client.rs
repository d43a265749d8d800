//! HTTP client for the word service REST API.
//!
//! Handles authentication, custom headers, timeout management,
//! exponential backoff retry, and request/response lifecycle.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use wg_core::config::WordServiceConfig;
use wg_core::constants;
use wg_core::error::{WgError, WgResult};

use crate::response::ServerResponse;

/// Retry configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Base delay between retries (doubles each attempt).
    pub base_delay: Duration,
    /// Maximum delay cap.
    pub max_delay: Duration,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(4),
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

/// HTTP client for communicating with the word service.
///
/// Wraps reqwest::Client with API key authentication, header injection,
/// retry logic, and error handling.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Client,
    /// Base URL for the API (e.g. "https://words.example.com/api/v1").
    api_root: String,
    /// API key sent in the request header.
    api_key: String,
    /// Default request timeout.
    timeout: Duration,
    /// Custom headers from config.
    custom_headers: Vec<(String, String)>,
    /// Retry configuration.
    retry_config: RetryConfig,
}

impl ApiClient {
    /// Create a new ApiClient from word service configuration.
    pub fn new(config: &WordServiceConfig) -> WgResult<Self> {
        if config.address.is_empty() {
            return Err(WgError::MissingConfig("word_service.address".into()));
        }

        let sanitized_address =
            wg_core::config::AppConfig::sanitize_service_address(&config.address);

        let inner = Client::builder()
            .timeout(Duration::from_millis(config.api_timeout_ms))
            .connect_timeout(Duration::from_secs(15))
            .build()
            .map_err(|e| WgError::Http(format!("failed to build HTTP client: {e}")))?;

        let api_root = format!("{sanitized_address}/api/{}", constants::API_VERSION);
        let custom_headers = config
            .custom_headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            inner,
            api_root,
            api_key: config.api_key.clone(),
            timeout: Duration::from_millis(config.api_timeout_ms),
            custom_headers,
            retry_config: RetryConfig::default(),
        })
    }

    /// Set custom retry configuration.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Get the current API root URL.
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Build the full URL for an API path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    /// Apply the API key and custom headers to a request builder.
    fn apply_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        if !self.api_key.is_empty() {
            builder = builder.header("x-api-key", self.api_key.as_str());
        }
        for (key, value) in &self.custom_headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        builder
    }

    /// Execute a request with exponential backoff retry.
    async fn request_with_retry(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> WgResult<Response> {
        let url = self.url(path);
        debug!("{} {}", method, path);

        let mut last_error: Option<WgError> = None;

        for attempt in 0..=self.retry_config.max_retries {
            if attempt > 0 {
                let delay = self.calculate_retry_delay(attempt - 1);
                warn!(
                    "retrying {} {} (attempt {}/{}) after {:.1}s",
                    method,
                    path,
                    attempt + 1,
                    self.retry_config.max_retries + 1,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }

            let mut builder = self.inner.request(method.clone(), &url).timeout(self.timeout);
            if let Some(b) = body {
                builder = builder.json(b);
            }
            let builder = self.apply_headers(builder);

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();

                    if self
                        .retry_config
                        .retryable_statuses
                        .contains(&status.as_u16())
                        && attempt < self.retry_config.max_retries
                    {
                        warn!("retryable status {} from {}", status.as_u16(), path);
                        last_error = Some(WgError::ServerError {
                            status: status.as_u16(),
                            message: format!("retryable status {status}"),
                        });
                        continue;
                    }

                    return Self::check_status(response).await;
                }
                Err(e) => {
                    let is_retryable = e.is_timeout() || e.is_connect();
                    let err = Self::classify_error(e);

                    if is_retryable && attempt < self.retry_config.max_retries {
                        warn!("retryable error on {}: {}", path, err);
                        last_error = Some(err);
                        continue;
                    }

                    return Err(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| WgError::Http("max retries exceeded".into())))
    }

    /// Calculate retry delay with exponential backoff.
    fn calculate_retry_delay(&self, attempt: u32) -> Duration {
        let base_ms = self.retry_config.base_delay.as_millis() as u64;
        let delay_ms = base_ms.saturating_mul(1u64 << attempt);
        let max_ms = self.retry_config.max_delay.as_millis() as u64;
        Duration::from_millis(delay_ms.min(max_ms))
    }

    // --- Public HTTP methods ---

    /// Execute a GET request with automatic retry.
    pub async fn get(&self, path: &str) -> WgResult<Response> {
        self.request_with_retry(Method::GET, path, None).await
    }

    /// Execute a POST request with a JSON body.
    pub async fn post(&self, path: &str, body: &serde_json::Value) -> WgResult<Response> {
        self.request_with_retry(Method::POST, path, Some(body)).await
    }

    // --- Response helpers ---

    /// Ping the service to check health. Returns the round-trip latency.
    pub async fn health_check(&self) -> WgResult<Duration> {
        let start = std::time::Instant::now();
        let resp: ServerResponse = self.get_json("/ping").await?;
        if resp.is_success() {
            Ok(start.elapsed())
        } else {
            Err(WgError::Http("health check failed".into()))
        }
    }

    /// Deserialize a response body into a ServerResponse<T>.
    pub async fn parse_response<T: DeserializeOwned>(
        response: Response,
    ) -> WgResult<ServerResponse<T>> {
        response
            .json::<ServerResponse<T>>()
            .await
            .map_err(|e| WgError::Serialization(format!("failed to parse response: {e}")))
    }

    /// Convenience: GET + parse into ServerResponse<T>.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> WgResult<ServerResponse<T>> {
        let resp = self.get(path).await?;
        Self::parse_response(resp).await
    }

    /// Convenience: POST + parse into ServerResponse<T>.
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> WgResult<ServerResponse<T>> {
        let resp = self.post(path, body).await?;
        Self::parse_response(resp).await
    }

    /// Check the HTTP status code and convert to WgError if needed.
    async fn check_status(response: Response) -> WgResult<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(WgError::AuthFailed(format!("service returned {status}")));
        }

        if status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            return Err(WgError::ServerError {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response)
    }

    /// Classify a reqwest error into a WgError variant.
    fn classify_error(e: reqwest::Error) -> WgError {
        if e.is_timeout() {
            WgError::Timeout(e.to_string())
        } else if e.is_connect() {
            WgError::Http(format!("connection failed: {e}"))
        } else {
            WgError::Http(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WordServiceConfig {
        WordServiceConfig {
            address: "http://localhost:1234".into(),
            api_key: "test".into(),
            custom_headers: std::collections::HashMap::new(),
            api_timeout_ms: 30_000,
        }
    }

    #[test]
    fn test_api_root() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(client.api_root(), "http://localhost:1234/api/v1");
    }

    #[test]
    fn test_unconfigured_address_rejected() {
        let config = WordServiceConfig::default();
        let err = ApiClient::new(&config).unwrap_err();
        assert!(matches!(err, WgError::MissingConfig(_)));
    }

    #[test]
    fn test_retry_delay_calculation() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(client.calculate_retry_delay(0), Duration::from_secs(1));
        assert_eq!(client.calculate_retry_delay(1), Duration::from_secs(2));
        assert_eq!(client.calculate_retry_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn test_retry_delay_capped() {
        let client = ApiClient::new(&test_config()).unwrap();
        let d10 = client.calculate_retry_delay(10);
        assert!(d10 <= Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_health_check_unreachable_errors() {
        // Nothing listens on the discard port; the check must fail, not hang
        let config = WordServiceConfig {
            address: "http://127.0.0.1:9".into(),
            api_key: String::new(),
            custom_headers: std::collections::HashMap::new(),
            api_timeout_ms: 500,
        };
        let client = ApiClient::new(&config).unwrap().with_retry_config(RetryConfig {
            max_retries: 0,
            ..Default::default()
        });
        assert!(client.health_check().await.is_err());
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new(&test_config()).unwrap();
        assert_eq!(
            client.url("/words/generate"),
            "http://localhost:1234/api/v1/words/generate"
        );
    }
}
