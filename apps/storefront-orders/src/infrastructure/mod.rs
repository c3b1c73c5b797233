//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - `order_service/`: HTTP adapter for the storefront order API and an
//!   in-memory adapter for tests and offline runs
//! - `session`: Bearer token, shared with the HTTP adapter

pub mod order_service;
pub mod session;

pub use order_service::{
    HttpOrderService, InMemoryOrderService, RetryConfig, StorefrontApiConfig, StorefrontApiError,
};
pub use session::Session;
