//! Order read model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{OrderId, OrderStatus};

/// Customer who placed the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Display name.
    pub full_name: String,
}

impl Customer {
    /// Create a customer from a display name.
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
        }
    }
}

/// Snapshot of an order fetched from the order service.
///
/// Immutable once fetched. A fresh fetch is the only way to observe
/// server-side changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    status: OrderStatus,
    total_amount: Decimal,
    notes: Option<String>,
    created_at: Option<String>,
}

impl Order {
    /// Create an order snapshot without notes or creation timestamp.
    #[must_use]
    pub const fn new(
        id: OrderId,
        customer: Customer,
        status: OrderStatus,
        total_amount: Decimal,
    ) -> Self {
        Self {
            id,
            customer,
            status,
            total_amount,
            notes: None,
            created_at: None,
        }
    }

    /// Attach customer notes. Blank notes are dropped.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.trim().is_empty()).then_some(notes);
        self
    }

    /// Attach the raw creation timestamp as sent by the backend.
    #[must_use]
    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// Same snapshot with a different status.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Order identifier.
    #[must_use]
    pub const fn id(&self) -> OrderId {
        self.id
    }

    /// Customer who placed the order.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> &OrderStatus {
        &self.status
    }

    /// Order total in VND.
    #[must_use]
    pub const fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    /// Customer notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Raw creation timestamp, if any.
    #[must_use]
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Returns true if the customer may cancel this order.
    #[must_use]
    pub const fn can_cancel(&self) -> bool {
        self.status.is_cancellable()
    }
}
