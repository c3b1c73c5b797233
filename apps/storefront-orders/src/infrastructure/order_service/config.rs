//! Order service adapter configuration.

use std::time::Duration;

/// Configuration for the HTTP order service adapter.
#[derive(Debug, Clone)]
pub struct StorefrontApiConfig {
    /// API root, e.g. `https://api.example.vn/api`. No trailing slash needed.
    pub base_url: String,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// Retry policy configuration.
    pub retry: RetryConfig,
}

impl StorefrontApiConfig {
    /// Create a new configuration with the default timeout and no retries.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(15),
            retry: RetryConfig::default(),
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry configuration.
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Retry configuration.
///
/// `max_attempts` counts the first attempt, so the default of 1 never
/// retries. Only idempotent reads are ever retried.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first.
    pub max_attempts: u32,
    /// Initial backoff duration.
    pub initial_backoff: Duration,
    /// Maximum backoff duration.
    pub max_backoff: Duration,
    /// Backoff multiplier.
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::from_millis(200),
            max_backoff: Duration::from_secs(5),
            multiplier: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn config_defaults() {
        let config = StorefrontApiConfig::new("https://api.example.vn/api");
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(config.retry.max_attempts, 1);
    }

    #[test]
    fn config_builders() {
        let config = StorefrontApiConfig::new("https://api.example.vn/api")
            .with_timeout(Duration::from_secs(3))
            .with_retry(RetryConfig {
                max_attempts: 4,
                ..RetryConfig::default()
            });
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.retry.max_attempts, 4);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = StorefrontApiConfig::new("https://api.example.vn/api//");
        assert_eq!(config.normalized_base_url(), "https://api.example.vn/api");
    }

    #[test]
    fn default_retry_is_single_attempt() {
        let retry = RetryConfig::default();
        assert_eq!(retry.max_attempts, 1);
        assert_eq!(retry.multiplier, 2.0);
    }
}
