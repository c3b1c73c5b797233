//! Order Service Port (Driven Port)
//!
//! Interface for the remote order API.

use async_trait::async_trait;

use crate::domain::order::{Order, OrderId};

/// Order service port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderServiceError {
    /// No order with this identifier is visible to the caller.
    #[error("Order not found: {order_id}")]
    NotFound {
        /// The missing order ID.
        order_id: OrderId,
    },

    /// Session missing, expired or lacking the required role.
    #[error("Not authorized: {message}")]
    Unauthorized {
        /// Error details.
        message: String,
    },

    /// Backend refused the request, e.g. the order is no longer cancellable.
    #[error("Request rejected: {reason}")]
    Rejected {
        /// Rejection reason.
        reason: String,
    },

    /// Transport failure or unreachable backend.
    #[error("Order service unreachable: {message}")]
    Network {
        /// Error details.
        message: String,
    },

    /// Unknown error.
    #[error("Order service error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for order service interactions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderServicePort: Send + Sync {
    /// Fetch the full detail of one order.
    async fn get_order_detail(&self, order_id: OrderId) -> Result<Order, OrderServiceError>;

    /// Ask the backend to cancel an order.
    async fn cancel_order(&self, order_id: OrderId) -> Result<(), OrderServiceError>;
}
