//! Domain Layer
//!
//! The innermost layer containing the storefront's business rules with zero
//! infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`order`]: Order read model, status vocabulary, route identifiers
//! - [`formatting`]: VND currency formatting and timestamp sanitizing

pub mod formatting;
pub mod order;
