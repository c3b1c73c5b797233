//! Storefront API error types.

use thiserror::Error;

use crate::application::ports::OrderServiceError;
use crate::domain::order::OrderId;

/// Errors from the HTTP order service adapter.
#[derive(Debug, Error, Clone)]
pub enum StorefrontApiError {
    /// HTTP request could not be built or sent.
    #[error("HTTP error: {0}")]
    Http(String),

    /// API returned an unclassified error.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the API.
        message: String,
    },

    /// Request refused, e.g. order no longer cancellable.
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// Missing or expired session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Network error.
    #[error("Network error: {0}")]
    Network(String),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Max retries exceeded.
    #[error("Max retries exceeded after {attempts} attempts")]
    MaxRetriesExceeded {
        /// Number of attempts made before giving up.
        attempts: u32,
    },

    /// Resource not found.
    #[error("Not found: {path}")]
    NotFound {
        /// Request path that returned 404.
        path: String,
    },
}

impl StorefrontApiError {
    /// Convert to the port error, attributing not-found to `order_id`.
    #[must_use]
    pub fn into_port_error(self, order_id: OrderId) -> OrderServiceError {
        match self {
            Self::NotFound { .. } => OrderServiceError::NotFound { order_id },
            Self::Http(message) | Self::Network(message) => {
                OrderServiceError::Network { message }
            }
            Self::MaxRetriesExceeded { attempts } => OrderServiceError::Network {
                message: format!("Max retries exceeded after {attempts} attempts"),
            },
            Self::Rejected(reason) => OrderServiceError::Rejected { reason },
            Self::Unauthorized(message) => OrderServiceError::Unauthorized { message },
            Self::RateLimited { retry_after_secs } => OrderServiceError::Network {
                message: format!("Rate limited, retry after {retry_after_secs}s"),
            },
            Self::JsonParse(message) => OrderServiceError::Unknown {
                message: format!("Malformed response: {message}"),
            },
            Self::Api { status, message } => OrderServiceError::Unknown {
                message: format!("{status}: {message}"),
            },
        }
    }
}
