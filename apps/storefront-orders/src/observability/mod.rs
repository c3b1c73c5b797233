//! Observability for the storefront order client.

mod tracing;

pub use self::tracing::{TracingError, build_filter, init_tracing};
