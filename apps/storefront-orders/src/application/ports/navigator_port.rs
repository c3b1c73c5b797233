//! Navigator Port (Driven Port)
//!
//! Interface to the UI shell's screen stack.

use parking_lot::Mutex;
use serde::Serialize;

use crate::domain::order::OrderId;

/// Screens a flow can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "order_id", rename_all = "snake_case")]
pub enum Route {
    /// Review form for an order.
    WriteReview(OrderId),
}

impl Route {
    /// Path as declared in the app's file-based router.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::WriteReview(id) => format!("/orders/{id}/review"),
        }
    }
}

/// A recorded navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationEvent {
    /// A screen was pushed.
    Push(Route),
    /// The top screen was popped.
    Pop,
}

/// Port for moving between screens.
pub trait NavigatorPort: Send + Sync {
    /// Open a screen on top of the current one.
    fn push(&self, route: Route);

    /// Return to the previous screen.
    fn pop(&self);
}

/// Navigator that records every action in memory.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavigationEvent>>,
}

impl RecordingNavigator {
    /// Create an empty navigator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All actions so far, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<NavigationEvent> {
        self.events.lock().clone()
    }

    /// Routes pushed so far.
    #[must_use]
    pub fn pushed(&self) -> Vec<Route> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                NavigationEvent::Push(route) => Some(*route),
                NavigationEvent::Pop => None,
            })
            .collect()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn push(&self, route: Route) {
        tracing::debug!(path = %route.path(), "Navigate push");
        self.events.lock().push(NavigationEvent::Push(route));
    }

    fn pop(&self) {
        tracing::debug!("Navigate pop");
        self.events.lock().push(NavigationEvent::Pop);
    }
}
