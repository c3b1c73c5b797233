//! Order detail view model.

use serde::Serialize;

use crate::application::use_cases::CancelPhase;
use crate::domain::formatting::{PLACEHOLDER, format_amount_vnd, safe_date};
use crate::domain::order::{Order, OrderId};

/// Shown when the order could not be loaded.
pub const NOT_FOUND_MESSAGE: &str = "Không tìm thấy đơn hàng";

/// Formatted fields of a loaded order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderDetailDto {
    /// Order identifier.
    pub order_id: OrderId,
    /// Customer display name.
    pub customer_name: String,
    /// Wire status, e.g. `PENDING`.
    pub status: String,
    /// Customer-facing status label.
    pub status_label: String,
    /// Total, e.g. `500.000 ₫`.
    pub total: String,
    /// Customer notes, or the placeholder.
    pub notes: String,
    /// Creation date as `d/m/yyyy`, or the placeholder.
    pub created_at: String,
    /// Whether the cancel button is shown.
    pub can_cancel: bool,
    /// Whether the confirmation prompt is open.
    pub confirming_cancel: bool,
    /// Whether a cancel request is in flight.
    pub cancelling: bool,
    /// Whether the write-review button is shown.
    pub can_write_review: bool,
}

impl OrderDetailDto {
    /// Format an order for display in the given cancel phase.
    #[must_use]
    pub fn from_order(order: &Order, phase: CancelPhase) -> Self {
        Self {
            order_id: order.id(),
            customer_name: order.customer().full_name.clone(),
            status: order.status().as_str().to_string(),
            status_label: order.status().label().to_string(),
            total: format_amount_vnd(order.total_amount()),
            notes: order.notes().unwrap_or(PLACEHOLDER).to_string(),
            created_at: safe_date(order.created_at()),
            can_cancel: phase == CancelPhase::Idle && order.can_cancel(),
            confirming_cancel: phase == CancelPhase::ConfirmingCancel,
            cancelling: phase == CancelPhase::Cancelling,
            can_write_review: true,
        }
    }
}

/// What the order detail screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OrderDetailView {
    /// Fetch in flight.
    Loading,
    /// Fetch failed or the route id was malformed.
    NotFound {
        /// Message shown instead of the order.
        message: String,
    },
    /// Order available.
    Loaded(OrderDetailDto),
}

impl OrderDetailView {
    /// Not-found view with the standard message.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound {
            message: NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Loaded order fields, if any.
    #[must_use]
    pub const fn order(&self) -> Option<&OrderDetailDto> {
        match self {
            Self::Loaded(dto) => Some(dto),
            _ => None,
        }
    }
}

/// Two-option confirmation shown before cancelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPrompt {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the option that proceeds.
    pub accept_label: String,
    /// Label of the option that aborts.
    pub decline_label: String,
}

impl ConfirmPrompt {
    /// Prompt for cancelling the given order.
    #[must_use]
    pub fn cancel_order(order_id: OrderId) -> Self {
        Self {
            title: "Hủy đơn hàng".to_string(),
            message: format!("Bạn có chắc chắn muốn hủy đơn hàng #{order_id}?"),
            accept_label: "Hủy đơn".to_string(),
            decline_label: "Không".to_string(),
        }
    }
}
