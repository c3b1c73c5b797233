//! Application Ports (Driven)
//!
//! Ports define interfaces for the systems a flow drives:
//! - the remote order service
//! - the alert surface that shows notices
//! - the router that pushes and pops screens
//!
//! All three are injected at construction; there are no ambient singletons.

mod navigator_port;
mod notifier_port;
mod order_service_port;

pub use navigator_port::{NavigationEvent, NavigatorPort, RecordingNavigator, Route};
pub use notifier_port::{Notice, NoticeKind, NotifierPort, RecordingNotifier};
#[cfg(test)]
pub use order_service_port::MockOrderServicePort;
pub use order_service_port::{OrderServiceError, OrderServicePort};
