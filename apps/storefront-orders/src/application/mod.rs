//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for the order service, user notices and navigation
//! - **Use Cases**: Screen-level flows (order detail, confirm-then-cancel)
//! - **DTOs**: Render-ready view models handed to the UI shell

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
