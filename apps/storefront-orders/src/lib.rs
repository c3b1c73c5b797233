// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements,
        clippy::unreadable_literal
    )
)]

//! Storefront Orders - Order Detail Client Library
//!
//! Customer-side order detail screen logic for a Vietnamese storefront:
//! load one order, render it with VND amounts and localized dates, and run
//! the confirm-then-cancel sequence against the storefront backend.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Business rules with no I/O
//!   - `order`: Order read model, status vocabulary, route identifiers
//!   - `formatting`: Currency formatting/parsing, timestamp sanitizing
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `OrderServicePort`, `NotifierPort`, `NavigatorPort`
//!   - `use_cases`: `OrderDetailFlow`
//!   - `dto`: Render-ready view models
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `order_service`: HTTP and in-memory order services
//!   - `session`: Bearer token, cleared when the backend rejects it
//!
//! - **Config** / **Observability**: YAML configuration and log setup

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

/// Logging setup.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::formatting::{
    CurrencyParseError, format_amount_vnd, format_currency, format_currency_vnd, parse_currency,
    safe_date, safe_date_time,
};
pub use domain::order::{Customer, InvalidOrderId, Order, OrderId, OrderStatus};

// Application re-exports
pub use application::dto::{ConfirmPrompt, OrderDetailDto, OrderDetailView};
pub use application::ports::{
    NavigationEvent, NavigatorPort, Notice, NoticeKind, NotifierPort, OrderServiceError,
    OrderServicePort, RecordingNavigator, RecordingNotifier, Route,
};
pub use application::use_cases::{
    CancelOutcome, CancelPhase, FlowError, OrderDetailFlow, OrderDetailState,
};

// Infrastructure re-exports
pub use infrastructure::{
    HttpOrderService, InMemoryOrderService, RetryConfig, Session, StorefrontApiConfig,
    StorefrontApiError,
};
