//! HTTP client wrapper with status categorization and optional retry.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;

use super::api_types::ApiErrorResponse;
use super::config::{RetryConfig, StorefrontApiConfig};
use super::error::StorefrontApiError;
use crate::infrastructure::session::Session;

/// HTTP client for the storefront API.
#[derive(Debug, Clone)]
pub struct StorefrontHttpClient {
    client: Client,
    base_url: String,
    session: Arc<Session>,
    retry_config: RetryConfig,
}

impl StorefrontHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(
        config: &StorefrontApiConfig,
        session: Arc<Session>,
    ) -> Result<Self, StorefrontApiError> {
        let base_url = config.normalized_base_url();
        if base_url.is_empty() {
            return Err(StorefrontApiError::Http("base URL is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StorefrontApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            session,
            retry_config: config.retry.clone(),
        })
    }

    /// GET a JSON resource. Retried within the configured budget.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, StorefrontApiError> {
        self.request(Method::GET, path, true).await
    }

    /// PUT without a body. Never retried.
    pub async fn put<T: DeserializeOwned>(&self, path: &str) -> Result<T, StorefrontApiError> {
        self.request(Method::PUT, path, false).await
    }

    /// Internal request implementation.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        retryable: bool,
    ) -> Result<T, StorefrontApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut backoff = ExponentialBackoff::new(&self.retry_config);

        loop {
            let mut request = self.client.request(method.clone(), &url);
            if let Some(token) = self.session.token() {
                request = request.bearer_auth(token);
            }

            let response = match request.send().await {
                Ok(resp) => resp,
                Err(e) => {
                    if let Some(delay) = backoff.next_backoff().filter(|_| retryable) {
                        tracing::warn!(
                            error = %e,
                            delay_ms = delay.as_millis(),
                            attempt = backoff.attempt,
                            "Network error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(backoff.exhausted(StorefrontApiError::Network(e.to_string())));
                }
            };

            let status = response.status();

            if status.is_success() {
                let text = response
                    .text()
                    .await
                    .map_err(|e| StorefrontApiError::Network(e.to_string()))?;
                if text.trim().is_empty() {
                    return serde_json::from_str("null")
                        .map_err(|e| StorefrontApiError::JsonParse(e.to_string()));
                }
                return serde_json::from_str(&text)
                    .map_err(|e| StorefrontApiError::JsonParse(e.to_string()));
            }

            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok());

            let error_body = response.text().await.unwrap_or_default();
            let error_message = serde_json::from_str::<ApiErrorResponse>(&error_body)
                .ok()
                .and_then(ApiErrorResponse::into_message)
                .unwrap_or_else(|| {
                    if error_body.is_empty() {
                        status.canonical_reason().unwrap_or("unknown").to_string()
                    } else {
                        error_body
                    }
                });

            match categorize_status(status) {
                ErrorCategory::RateLimited => {
                    let delay = backoff
                        .next_backoff()
                        .filter(|_| retryable)
                        .map(|d| retry_after.map_or(d, Duration::from_secs));
                    if let Some(delay) = delay {
                        tracing::warn!(
                            status = status.as_u16(),
                            delay_ms = delay.as_millis(),
                            "Rate limited, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(StorefrontApiError::RateLimited {
                        retry_after_secs: retry_after.unwrap_or(60),
                    });
                }
                ErrorCategory::Retryable => {
                    if let Some(delay) = backoff.next_backoff().filter(|_| retryable) {
                        tracing::warn!(
                            status = status.as_u16(),
                            message = %error_message,
                            delay_ms = delay.as_millis(),
                            "Retryable error, retrying"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }
                    return Err(backoff.exhausted(StorefrontApiError::Api {
                        status: status.as_u16(),
                        message: error_message,
                    }));
                }
                ErrorCategory::NonRetryable => {
                    return Err(match status {
                        StatusCode::UNAUTHORIZED => {
                            if self.session.is_authenticated() {
                                tracing::warn!(path, "Token rejected, signing out");
                                self.session.logout();
                            }
                            StorefrontApiError::Unauthorized(error_message)
                        }
                        StatusCode::FORBIDDEN => StorefrontApiError::Unauthorized(error_message),
                        StatusCode::NOT_FOUND => StorefrontApiError::NotFound {
                            path: path.to_string(),
                        },
                        StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY => {
                            StorefrontApiError::Rejected(error_message)
                        }
                        _ => StorefrontApiError::Api {
                            status: status.as_u16(),
                            message: error_message,
                        },
                    });
                }
            }
        }
    }
}

/// Error category for determining retry behavior.
enum ErrorCategory {
    RateLimited,
    Retryable,
    NonRetryable,
}

/// Categorize HTTP status code for retry handling.
const fn categorize_status(status: StatusCode) -> ErrorCategory {
    match status.as_u16() {
        429 => ErrorCategory::RateLimited,
        408 | 500 | 502 | 503 | 504 => ErrorCategory::Retryable,
        _ => ErrorCategory::NonRetryable,
    }
}

/// Exponential backoff calculator.
struct ExponentialBackoff {
    attempt: u32,
    max_attempts: u32,
    current_backoff: Duration,
    max_backoff: Duration,
    multiplier: f64,
}

impl ExponentialBackoff {
    const fn new(config: &RetryConfig) -> Self {
        Self {
            attempt: 0,
            max_attempts: config.max_attempts,
            current_backoff: config.initial_backoff,
            max_backoff: config.max_backoff,
            multiplier: config.multiplier,
        }
    }

    fn next_backoff(&mut self) -> Option<Duration> {
        self.attempt += 1;
        if self.attempt >= self.max_attempts {
            return None;
        }

        let backoff = self.current_backoff;
        self.current_backoff = Duration::from_secs_f64(
            (self.current_backoff.as_secs_f64() * self.multiplier)
                .min(self.max_backoff.as_secs_f64()),
        );

        Some(backoff)
    }

    /// Final error once no attempt is left: the last error itself on a
    /// single-attempt budget, otherwise a retry-exhaustion error.
    fn exhausted(&self, last: StorefrontApiError) -> StorefrontApiError {
        if self.attempt > 1 {
            StorefrontApiError::MaxRetriesExceeded {
                attempts: self.attempt,
            }
        } else {
            last
        }
    }
}
