//! Structured logging setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured level directive applies.
//!
//! # Example
//!
//! ```ignore
//! use storefront_orders::config::LoggingConfig;
//! use storefront_orders::observability::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error type for tracing setup.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    /// Invalid filter directive.
    #[error("invalid log filter '{directive}': {message}")]
    FilterError {
        /// Offending directive.
        directive: String,
        /// Parser message.
        message: String,
    },
    /// Failed to initialize tracing subscriber.
    #[error("failed to initialize tracing subscriber: {0}")]
    SubscriberError(String),
}

/// Build the env filter for `config`.
///
/// # Errors
///
/// Returns `TracingError::FilterError` if the configured directive is invalid.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, TracingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| TracingError::FilterError {
        directive: config.level.clone(),
        message: e.to_string(),
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TracingError> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.format == "json" {
        builder.json().with_current_span(true).try_init()
    } else {
        builder.pretty().try_init()
    };

    result.map_err(|e| TracingError::SubscriberError(e.to_string()))
}
