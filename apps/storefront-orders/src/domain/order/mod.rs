//! Order Bounded Context
//!
//! Read-only view of a customer purchase as returned by the order service.
//!
//! # Key Concepts
//!
//! - **Order**: Transient snapshot held by a screen flow, never persisted
//! - **Order Status**: Backend status vocabulary; only `PENDING` is cancellable
//! - **Route Identifier**: The numeric path segment naming the order to load

mod identifiers;
mod model;
mod status;

pub use identifiers::{InvalidOrderId, OrderId};
pub use model::{Customer, Order};
pub use status::OrderStatus;
