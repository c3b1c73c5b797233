//! Order status as reported by the order service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order status in the storefront lifecycle.
///
/// The backend sends a SCREAMING_SNAKE_CASE string, matched exactly. Values
/// this client does not know, including other spellings or casings, are kept
/// verbatim in [`OrderStatus::Other`] so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    /// Placed, awaiting shop confirmation. The only cancellable status.
    Pending,
    /// Accepted by the shop.
    Confirmed,
    /// Handed to the carrier.
    Shipping,
    /// Received by the customer.
    Delivered,
    /// Cancelled by the customer or the shop.
    Cancelled,
    /// Any status string this client does not recognize.
    Other(String),
}

impl OrderStatus {
    /// Wire representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Other(raw) => raw,
        }
    }

    /// Returns true if the customer may cancel an order in this status.
    #[must_use]
    pub const fn is_cancellable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Customer-facing Vietnamese label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Pending => "Chờ xác nhận",
            Self::Confirmed => "Đã xác nhận",
            Self::Shipping => "Đang giao hàng",
            Self::Delivered => "Đã giao hàng",
            Self::Cancelled => "Đã hủy",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PENDING" => Self::Pending,
            "CONFIRMED" => Self::Confirmed,
            "SHIPPING" => Self::Shipping,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
