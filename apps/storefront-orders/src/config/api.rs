//! Storefront API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::infrastructure::{RetryConfig, StorefrontApiConfig};

/// Storefront backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Attempts per read request, including the first. Writes are never retried.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Initial retry backoff in milliseconds.
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
        }
    }
}

impl ApiConfig {
    /// Build the HTTP adapter configuration.
    #[must_use]
    pub fn to_api_config(&self) -> StorefrontApiConfig {
        let retry = RetryConfig {
            max_attempts: self.max_attempts,
            initial_backoff: Duration::from_millis(self.initial_backoff_ms),
            ..RetryConfig::default()
        };
        StorefrontApiConfig::new(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_retry(retry)
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    15
}

const fn default_max_attempts() -> u32 {
    1
}

const fn default_initial_backoff_ms() -> u64 {
    200
}
