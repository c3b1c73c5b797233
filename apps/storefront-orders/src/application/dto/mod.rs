//! Data Transfer Objects
//!
//! Render-ready view models. The UI shell draws these as-is; all formatting
//! happens here so every screen shows money and dates the same way.

mod order_detail_dto;

pub use order_detail_dto::{ConfirmPrompt, NOT_FOUND_MESSAGE, OrderDetailDto, OrderDetailView};
