//! Application Use Cases
//!
//! Screen-level flows that drive the ports.

mod order_detail;

pub use order_detail::{CancelOutcome, CancelPhase, FlowError, OrderDetailFlow, OrderDetailState};
