//! Storefront API response types.
//!
//! These types map directly to the backend's camelCase JSON.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::order::{Customer, Order, OrderId, OrderStatus};

// ============================================================================
// Envelope
// ============================================================================

/// Payload that may or may not be wrapped in `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    /// `{ "data": T }`.
    Wrapped {
        /// Inner payload.
        data: T,
    },
    /// Bare `T`.
    Bare(T),
}

impl<T> ApiPayload<T> {
    /// Unwrap the payload.
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

// ============================================================================
// Order Response Types
// ============================================================================

/// Customer block of an order response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCustomer {
    /// Display name.
    #[serde(default)]
    pub full_name: String,
}

/// Order detail response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrderResponse {
    /// Order identifier.
    pub id: i64,
    /// Customer who placed the order.
    #[serde(default)]
    pub customer: Option<ApiCustomer>,
    /// Status string, e.g. `PENDING`.
    pub order_status: String,
    /// Total in VND; number or numeric string.
    pub total_amount: Decimal,
    /// Customer notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Creation timestamp, format varies by endpoint.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ApiOrderResponse {
    /// Convert to the domain order.
    pub fn into_order(self) -> Order {
        let customer = self.customer.unwrap_or_default();
        let mut order = Order::new(
            OrderId::new(self.id),
            Customer::new(customer.full_name),
            OrderStatus::from(self.order_status),
            self.total_amount,
        );
        if let Some(notes) = self.notes {
            order = order.with_notes(notes);
        }
        if let Some(created_at) = self.created_at {
            order = order.with_created_at(created_at);
        }
        order
    }
}

// ============================================================================
// Error Response
// ============================================================================

/// Error body returned by the backend.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Short error name, sent by some endpoints instead of `message`.
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorResponse {
    /// Best available message.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}
