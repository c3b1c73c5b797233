//! Order Detail Use Case
//!
//! Controller behind the order detail screen. Loads one order by its route
//! identifier and runs the confirm-then-cancel sequence.
//!
//! ```text
//! Loading ─┬─> Loaded { Idle } ──request_cancel──> ConfirmingCancel
//!          │        ^    ^                            │         │
//!          │        │    └──────decline_cancel────────┘         │ accept_cancel
//!          │        │                                           v
//!          │        └─────────cancel failed or dropped─────── Cancelling
//!          │                                                    │ cancel ok
//!          └─> NotFound                                         v
//!                                                        CancelSucceeded (pop)
//! ```

use std::sync::Arc;

use crate::application::dto::{ConfirmPrompt, OrderDetailDto, OrderDetailView};
use crate::application::ports::{NavigatorPort, Notice, NotifierPort, OrderServicePort, Route};
use crate::domain::order::{Order, OrderId, OrderStatus};

/// Progress of the cancel action on a loaded order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelPhase {
    /// Nothing in progress.
    Idle,
    /// Confirmation prompt is open.
    ConfirmingCancel,
    /// Cancel request in flight.
    Cancelling,
    /// Backend accepted the cancel; the screen has been popped.
    CancelSucceeded,
}

impl CancelPhase {
    /// Name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ConfirmingCancel => "confirming_cancel",
            Self::Cancelling => "cancelling",
            Self::CancelSucceeded => "cancel_succeeded",
        }
    }
}

/// Screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDetailState {
    /// Fetch in flight.
    Loading,
    /// Fetch failed or the route id was malformed.
    NotFound,
    /// Order fetched.
    Loaded {
        /// The fetched snapshot. Never mutated locally.
        order: Order,
        /// Cancel action progress.
        phase: CancelPhase,
    },
}

impl OrderDetailState {
    /// Name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::NotFound => "not_found",
            Self::Loaded { phase, .. } => phase.name(),
        }
    }
}

/// How a confirm-then-cancel sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// Backend cancelled the order.
    Succeeded,
    /// Backend refused or was unreachable.
    Failed {
        /// Error shown to the user.
        reason: String,
    },
    /// User declined the confirmation.
    Aborted,
}

/// Operation not valid in the current state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// No order is loaded.
    #[error("no order loaded")]
    NotLoaded,

    /// Order status does not allow cancellation.
    #[error("order in status {status} cannot be cancelled")]
    CancelUnavailable {
        /// Status of the loaded order.
        status: OrderStatus,
    },

    /// Action not allowed from this state.
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        /// Current state name.
        from: &'static str,
        /// Attempted action.
        action: &'static str,
    },
}

/// Controller for the order detail screen.
///
/// Holds the fetched order for its own lifetime only. Operations take
/// `&mut self`; the UI shell owns one flow per screen instance.
pub struct OrderDetailFlow<S, N, V>
where
    S: OrderServicePort + ?Sized,
    N: NotifierPort + ?Sized,
    V: NavigatorPort + ?Sized,
{
    service: Arc<S>,
    notifier: Arc<N>,
    navigator: Arc<V>,
    state: OrderDetailState,
    route_id: Option<String>,
    last_outcome: Option<CancelOutcome>,
}

impl<S, N, V> OrderDetailFlow<S, N, V>
where
    S: OrderServicePort + ?Sized,
    N: NotifierPort + ?Sized,
    V: NavigatorPort + ?Sized,
{
    /// Create a flow in the `Loading` state.
    pub const fn new(service: Arc<S>, notifier: Arc<N>, navigator: Arc<V>) -> Self {
        Self {
            service,
            notifier,
            navigator,
            state: OrderDetailState::Loading,
            route_id: None,
            last_outcome: None,
        }
    }

    /// Current state.
    pub const fn state(&self) -> &OrderDetailState {
        &self.state
    }

    /// Loaded order, if any.
    pub const fn order(&self) -> Option<&Order> {
        match &self.state {
            OrderDetailState::Loaded { order, .. } => Some(order),
            _ => None,
        }
    }

    /// Outcome of the most recent confirm-then-cancel sequence.
    pub const fn last_outcome(&self) -> Option<&CancelOutcome> {
        self.last_outcome.as_ref()
    }

    /// Fetch the order named by a route segment.
    ///
    /// Any failure, including a malformed segment, is logged and ends in
    /// `NotFound`. There is no automatic retry.
    pub async fn load(&mut self, route_id: &str) -> &OrderDetailState {
        self.route_id = Some(route_id.to_string());
        self.last_outcome = None;
        self.state = OrderDetailState::Loading;

        let order_id = match OrderId::parse_route(route_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(route_id, error = %e, "Invalid order id in route");
                self.state = OrderDetailState::NotFound;
                return &self.state;
            }
        };

        match self.service.get_order_detail(order_id).await {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id(),
                    status = %order.status(),
                    "Order loaded"
                );
                self.state = OrderDetailState::Loaded {
                    order,
                    phase: CancelPhase::Idle,
                };
            }
            Err(e) => {
                tracing::error!(order_id = %order_id, error = %e, "Failed to load order");
                self.state = OrderDetailState::NotFound;
            }
        }

        &self.state
    }

    /// Fetch again using the last route segment.
    pub async fn reload(&mut self) -> Result<&OrderDetailState, FlowError> {
        let route_id = self.route_id.clone().ok_or(FlowError::NotLoaded)?;
        Ok(self.load(&route_id).await)
    }

    /// Returns true if the cancel button is available right now.
    pub const fn can_cancel(&self) -> bool {
        matches!(
            &self.state,
            OrderDetailState::Loaded { order, phase: CancelPhase::Idle } if order.can_cancel()
        )
    }

    /// Open the cancel confirmation.
    pub fn request_cancel(&mut self) -> Result<ConfirmPrompt, FlowError> {
        let OrderDetailState::Loaded { order, phase } = &mut self.state else {
            return Err(FlowError::NotLoaded);
        };

        if !order.can_cancel() {
            return Err(FlowError::CancelUnavailable {
                status: order.status().clone(),
            });
        }

        if *phase != CancelPhase::Idle {
            return Err(FlowError::InvalidTransition {
                from: phase.name(),
                action: "request cancel",
            });
        }

        *phase = CancelPhase::ConfirmingCancel;
        tracing::debug!(order_id = %order.id(), "Cancel confirmation opened");

        Ok(ConfirmPrompt::cancel_order(order.id()))
    }

    /// Close the confirmation without cancelling.
    pub fn decline_cancel(&mut self) -> Result<CancelOutcome, FlowError> {
        let OrderDetailState::Loaded { order, phase } = &mut self.state else {
            return Err(FlowError::NotLoaded);
        };

        if *phase != CancelPhase::ConfirmingCancel {
            return Err(FlowError::InvalidTransition {
                from: phase.name(),
                action: "decline cancel",
            });
        }

        *phase = CancelPhase::Idle;
        tracing::debug!(order_id = %order.id(), "Cancel declined");

        self.last_outcome = Some(CancelOutcome::Aborted);
        Ok(CancelOutcome::Aborted)
    }

    /// Confirm and send the cancel request.
    ///
    /// On success the user is notified and the screen is popped. On failure
    /// the user is notified and the flow returns to `Idle` with the order
    /// exactly as fetched.
    ///
    /// If the returned future is dropped before the backend answers, the flow
    /// silently returns to `Idle`. The request may still have reached the
    /// backend; [`Self::reload`] shows the server's status.
    pub async fn accept_cancel(&mut self) -> Result<CancelOutcome, FlowError> {
        let order_id = match &mut self.state {
            OrderDetailState::Loaded { order, phase }
                if *phase == CancelPhase::ConfirmingCancel =>
            {
                *phase = CancelPhase::Cancelling;
                order.id()
            }
            OrderDetailState::Loaded { phase, .. } => {
                return Err(FlowError::InvalidTransition {
                    from: phase.name(),
                    action: "accept cancel",
                });
            }
            _ => return Err(FlowError::NotLoaded),
        };

        tracing::info!(order_id = %order_id, "Cancelling order");

        let guard = CancellingGuard {
            state: &mut self.state,
        };
        let result = self.service.cancel_order(order_id).await;

        let outcome = match result {
            Ok(()) => {
                tracing::info!(order_id = %order_id, "Order cancelled");
                guard.settle(CancelPhase::CancelSucceeded);
                self.notifier.notify(Notice::success(
                    "Thành công",
                    format!("Đã hủy đơn hàng #{order_id}"),
                ));
                self.navigator.pop();
                CancelOutcome::Succeeded
            }
            Err(e) => {
                tracing::warn!(order_id = %order_id, error = %e, "Cancel failed");
                guard.settle(CancelPhase::Idle);
                self.notifier.notify(Notice::error(
                    "Lỗi",
                    format!("Không thể hủy đơn hàng #{order_id}: {e}"),
                ));
                CancelOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Open the review form for the loaded order, whatever its status.
    pub fn write_review(&self) -> Result<Route, FlowError> {
        let order = self.order().ok_or(FlowError::NotLoaded)?;
        let route = Route::WriteReview(order.id());
        self.navigator.push(route);
        Ok(route)
    }

    /// Render the current state.
    pub fn view(&self) -> OrderDetailView {
        match &self.state {
            OrderDetailState::Loading => OrderDetailView::Loading,
            OrderDetailState::NotFound => OrderDetailView::not_found(),
            OrderDetailState::Loaded { order, phase } => {
                OrderDetailView::Loaded(OrderDetailDto::from_order(order, *phase))
            }
        }
    }
}

/// Holds the flow in `Cancelling` while the cancel request is in flight.
///
/// Dropped without [`CancellingGuard::settle`], it puts the phase back to
/// `Idle` so an abandoned request cannot wedge the screen.
struct CancellingGuard<'a> {
    state: &'a mut OrderDetailState,
}

impl CancellingGuard<'_> {
    fn settle(self, next: CancelPhase) {
        if let OrderDetailState::Loaded { phase, .. } = &mut *self.state {
            *phase = next;
        }
    }
}

impl Drop for CancellingGuard<'_> {
    fn drop(&mut self) {
        if let OrderDetailState::Loaded {
            order,
            phase: phase @ CancelPhase::Cancelling,
        } = &mut *self.state
        {
            tracing::warn!(order_id = %order.id(), "Cancel request abandoned");
            *phase = CancelPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockOrderServicePort, NavigationEvent, NoticeKind, OrderServiceError, RecordingNavigator,
        RecordingNotifier,
    };
    use crate::domain::order::Customer;
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    type TestFlow = OrderDetailFlow<MockOrderServicePort, RecordingNotifier, RecordingNavigator>;

    fn order(id: i64, status: OrderStatus) -> Order {
        Order::new(
            OrderId::new(id),
            Customer::new("Lê Văn C"),
            status,
            Decimal::new(500_000, 0),
        )
    }

    fn flow(
        service: MockOrderServicePort,
    ) -> (TestFlow, Arc<RecordingNotifier>, Arc<RecordingNavigator>) {
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let flow = OrderDetailFlow::new(
            Arc::new(service),
            Arc::clone(&notifier),
            Arc::clone(&navigator),
        );
        (flow, notifier, navigator)
    }

    fn service_returning(o: Order) -> MockOrderServicePort {
        let mut service = MockOrderServicePort::new();
        let id = o.id();
        service
            .expect_get_order_detail()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(o.clone()));
        service
    }

    #[tokio::test]
    async fn starts_loading() {
        let (flow, _, _) = flow(MockOrderServicePort::new());
        assert_eq!(flow.state(), &OrderDetailState::Loading);
        assert_eq!(flow.view(), OrderDetailView::Loading);
        assert!(!flow.can_cancel());
    }

    #[tokio::test]
    async fn load_success() {
        let (mut flow, _, _) = flow(service_returning(order(5, OrderStatus::Pending)));

        flow.load("5").await;

        assert!(matches!(
            flow.state(),
            OrderDetailState::Loaded { phase: CancelPhase::Idle, .. }
        ));
        assert_eq!(flow.order().unwrap().id(), OrderId::new(5));
        assert!(flow.can_cancel());
    }

    #[tokio::test]
    async fn malformed_route_is_not_found_without_fetch() {
        let mut service = MockOrderServicePort::new();
        service.expect_get_order_detail().never();
        let (mut flow, _, _) = flow(service);

        flow.load("abc").await;

        assert_eq!(flow.state(), &OrderDetailState::NotFound);
        assert_eq!(flow.view(), OrderDetailView::not_found());
        assert!(!flow.can_cancel());
    }

    #[tokio::test]
    async fn fetch_failure_is_not_found() {
        let mut service = MockOrderServicePort::new();
        service.expect_get_order_detail().times(1).returning(|_| {
            Err(OrderServiceError::Network {
                message: "connection refused".to_string(),
            })
        });
        let (mut flow, notifier, _) = flow(service);

        flow.load("9").await;

        assert_eq!(flow.state(), &OrderDetailState::NotFound);
        assert_eq!(flow.request_cancel(), Err(FlowError::NotLoaded));
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn cancel_offered_only_for_pending() {
        for status in [
            OrderStatus::Confirmed,
            OrderStatus::Shipping,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
            OrderStatus::Other("ON_HOLD".to_string()),
        ] {
            let (mut flow, _, _) = flow(service_returning(order(1, status.clone())));
            flow.load("1").await;

            assert!(!flow.can_cancel(), "{status} must not offer cancel");
            assert_eq!(
                flow.request_cancel(),
                Err(FlowError::CancelUnavailable { status })
            );
        }
    }

    #[tokio::test]
    async fn confirm_and_cancel_pops_screen() {
        let mut service = service_returning(order(3, OrderStatus::Pending));
        service
            .expect_cancel_order()
            .with(eq(OrderId::new(3)))
            .times(1)
            .returning(|_| Ok(()));
        let (mut flow, notifier, navigator) = flow(service);

        flow.load("3").await;
        let prompt = flow.request_cancel().unwrap();
        assert!(prompt.message.contains("#3"));
        assert!(flow.view().order().unwrap().confirming_cancel);

        let outcome = flow.accept_cancel().await.unwrap();

        assert_eq!(outcome, CancelOutcome::Succeeded);
        assert_eq!(flow.last_outcome(), Some(&CancelOutcome::Succeeded));
        assert_eq!(navigator.events(), vec![NavigationEvent::Pop]);
        assert_eq!(notifier.last().unwrap().kind, NoticeKind::Success);
        assert!(matches!(
            flow.state(),
            OrderDetailState::Loaded { phase: CancelPhase::CancelSucceeded, .. }
        ));
        assert!(!flow.can_cancel());
    }

    #[tokio::test]
    async fn decline_has_no_side_effect() {
        let mut service = service_returning(order(4, OrderStatus::Pending));
        service.expect_cancel_order().never();
        let (mut flow, notifier, navigator) = flow(service);

        flow.load("4").await;
        flow.request_cancel().unwrap();
        let outcome = flow.decline_cancel().unwrap();

        assert_eq!(outcome, CancelOutcome::Aborted);
        assert!(flow.can_cancel());
        assert_eq!(flow.order().unwrap().status(), &OrderStatus::Pending);
        assert!(navigator.events().is_empty());
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn cancel_failure_keeps_order_and_screen() {
        let mut service = service_returning(order(6, OrderStatus::Pending));
        service.expect_cancel_order().times(1).returning(|_| {
            Err(OrderServiceError::Rejected {
                reason: "order already confirmed".to_string(),
            })
        });
        let (mut flow, notifier, navigator) = flow(service);

        flow.load("6").await;
        flow.request_cancel().unwrap();
        let outcome = flow.accept_cancel().await.unwrap();

        assert!(matches!(outcome, CancelOutcome::Failed { ref reason } if reason.contains("already confirmed")));
        assert_eq!(flow.order().unwrap().status(), &OrderStatus::Pending);
        assert!(matches!(
            flow.state(),
            OrderDetailState::Loaded { phase: CancelPhase::Idle, .. }
        ));
        assert!(navigator.events().is_empty());
        assert_eq!(notifier.last().unwrap().kind, NoticeKind::Error);
    }

    #[tokio::test]
    async fn accept_without_confirmation_is_rejected() {
        let mut service = service_returning(order(7, OrderStatus::Pending));
        service.expect_cancel_order().never();
        let (mut flow, _, _) = flow(service);

        flow.load("7").await;

        assert_eq!(
            flow.accept_cancel().await,
            Err(FlowError::InvalidTransition {
                from: "idle",
                action: "accept cancel"
            })
        );
    }

    #[tokio::test]
    async fn second_accept_after_success_is_rejected() {
        let mut service = service_returning(order(8, OrderStatus::Pending));
        service
            .expect_cancel_order()
            .times(1)
            .returning(|_| Ok(()));
        let (mut flow, _, _) = flow(service);

        flow.load("8").await;
        flow.request_cancel().unwrap();
        flow.accept_cancel().await.unwrap();

        assert!(matches!(
            flow.accept_cancel().await,
            Err(FlowError::InvalidTransition { from: "cancel_succeeded", .. })
        ));
        assert!(flow.request_cancel().is_err());
    }

    #[tokio::test]
    async fn double_request_is_rejected() {
        let (mut flow, _, _) = flow(service_returning(order(2, OrderStatus::Pending)));
        flow.load("2").await;

        flow.request_cancel().unwrap();
        assert!(matches!(
            flow.request_cancel(),
            Err(FlowError::InvalidTransition { from: "confirming_cancel", .. })
        ));
    }

    #[tokio::test]
    async fn decline_requires_open_prompt() {
        let (mut flow, _, _) = flow(service_returning(order(2, OrderStatus::Pending)));
        flow.load("2").await;

        assert!(matches!(
            flow.decline_cancel(),
            Err(FlowError::InvalidTransition { from: "idle", .. })
        ));
    }

    #[tokio::test]
    async fn write_review_ignores_status() {
        for status in [OrderStatus::Pending, OrderStatus::Shipping, OrderStatus::Cancelled] {
            let (mut flow, _, navigator) = flow(service_returning(order(11, status)));
            flow.load("11").await;

            let route = flow.write_review().unwrap();

            assert_eq!(route, Route::WriteReview(OrderId::new(11)));
            assert_eq!(navigator.pushed(), vec![route]);
        }
    }

    #[tokio::test]
    async fn write_review_needs_order() {
        let (flow, _, navigator) = flow(MockOrderServicePort::new());
        assert_eq!(flow.write_review(), Err(FlowError::NotLoaded));
        assert!(navigator.events().is_empty());
    }

    #[tokio::test]
    async fn reload_refetches_last_route() {
        let mut service = MockOrderServicePort::new();
        let mut seq = mockall::Sequence::new();
        service
            .expect_get_order_detail()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(order(id.value(), OrderStatus::Pending)));
        service
            .expect_get_order_detail()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| Ok(order(id.value(), OrderStatus::Confirmed)));
        let (mut flow, _, _) = flow(service);

        flow.load("10").await;
        assert!(flow.can_cancel());

        flow.reload().await.unwrap();
        assert_eq!(flow.order().unwrap().status(), &OrderStatus::Confirmed);
        assert!(!flow.can_cancel());
    }

    struct SlowCancelService;

    #[async_trait::async_trait]
    impl OrderServicePort for SlowCancelService {
        async fn get_order_detail(&self, order_id: OrderId) -> Result<Order, OrderServiceError> {
            Ok(order(order_id.value(), OrderStatus::Pending))
        }

        async fn cancel_order(&self, _order_id: OrderId) -> Result<(), OrderServiceError> {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            Ok(())
        }
    }

    #[tokio::test]
    async fn abandoned_cancel_returns_to_idle() {
        let notifier = Arc::new(RecordingNotifier::new());
        let navigator = Arc::new(RecordingNavigator::new());
        let mut flow = OrderDetailFlow::new(
            Arc::new(SlowCancelService),
            Arc::clone(&notifier),
            Arc::clone(&navigator),
        );
        flow.load("4").await;
        flow.request_cancel().unwrap();

        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(10), flow.accept_cancel()).await;

        assert!(timed_out.is_err());
        assert!(matches!(
            flow.state(),
            OrderDetailState::Loaded { phase: CancelPhase::Idle, .. }
        ));
        assert!(flow.can_cancel());
        assert!(flow.last_outcome().is_none());
        assert!(notifier.notices().is_empty());
        assert!(navigator.events().is_empty());
        assert!(flow.request_cancel().is_ok());
    }

    #[tokio::test]
    async fn reload_before_load_fails() {
        let (mut flow, _, _) = flow(MockOrderServicePort::new());
        assert_eq!(flow.reload().await.err(), Some(FlowError::NotLoaded));
    }
}
