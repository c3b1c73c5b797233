//! Order Service Adapters
//!
//! Implementations of `OrderServicePort`:
//! - [`HttpOrderService`]: JSON over HTTPS against the storefront backend,
//!   with status-code categorization and an opt-in retry budget
//! - [`InMemoryOrderService`]: seeded orders with failure injection

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;
mod in_memory;

pub use adapter::HttpOrderService;
pub use config::{RetryConfig, StorefrontApiConfig};
pub use error::StorefrontApiError;
pub use in_memory::InMemoryOrderService;
