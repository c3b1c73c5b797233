//! In-memory order service for tests and offline runs.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::application::ports::{OrderServiceError, OrderServicePort};
use crate::domain::order::{Order, OrderId, OrderStatus};

/// In-memory implementation of `OrderServicePort`.
///
/// Cancelling a `PENDING` order flips it to `CANCELLED`; anything else is
/// rejected, like the real backend. Failures can be injected per operation.
#[derive(Debug, Default)]
pub struct InMemoryOrderService {
    orders: RwLock<HashMap<OrderId, Order>>,
    fetch_failure: RwLock<Option<OrderServiceError>>,
    cancel_failure: RwLock<Option<OrderServiceError>>,
    fetch_calls: AtomicUsize,
    cancel_calls: AtomicUsize,
}

impl InMemoryOrderService {
    /// Create an empty service.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service seeded with orders.
    #[must_use]
    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let service = Self::new();
        for order in orders {
            service.add(order);
        }
        service
    }

    /// Add or replace an order.
    pub fn add(&self, order: Order) {
        self.orders.write().insert(order.id(), order);
    }

    /// Current server-side copy of an order.
    #[must_use]
    pub fn get(&self, order_id: OrderId) -> Option<Order> {
        self.orders.read().get(&order_id).cloned()
    }

    /// Make every fetch fail with `error` until cleared.
    pub fn fail_fetches_with(&self, error: OrderServiceError) {
        *self.fetch_failure.write() = Some(error);
    }

    /// Make every cancel fail with `error` until cleared.
    pub fn fail_cancels_with(&self, error: OrderServiceError) {
        *self.cancel_failure.write() = Some(error);
    }

    /// Remove injected failures.
    pub fn clear_failures(&self) {
        *self.fetch_failure.write() = None;
        *self.cancel_failure.write() = None;
    }

    /// Number of `get_order_detail` calls.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of `cancel_order` calls.
    #[must_use]
    pub fn cancel_calls(&self) -> usize {
        self.cancel_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OrderServicePort for InMemoryOrderService {
    async fn get_order_detail(&self, order_id: OrderId) -> Result<Order, OrderServiceError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.fetch_failure.read().clone() {
            return Err(error);
        }

        self.get(order_id)
            .ok_or(OrderServiceError::NotFound { order_id })
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        self.cancel_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.cancel_failure.read().clone() {
            return Err(error);
        }

        let mut orders = self.orders.write();
        let order = orders
            .get_mut(&order_id)
            .ok_or(OrderServiceError::NotFound { order_id })?;

        if !order.can_cancel() {
            return Err(OrderServiceError::Rejected {
                reason: format!("order in status {} cannot be cancelled", order.status()),
            });
        }

        *order = order.clone().with_status(OrderStatus::Cancelled);
        tracing::debug!(order_id = %order_id, "Order cancelled in memory");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::Customer;
    use rust_decimal::Decimal;

    fn order(id: i64, status: OrderStatus) -> Order {
        Order::new(
            OrderId::new(id),
            Customer::new("Hoàng E"),
            status,
            Decimal::new(200_000, 0),
        )
        .with_notes("ghi chú")
    }

    #[tokio::test]
    async fn fetch_seeded_order() {
        let service = InMemoryOrderService::with_orders([order(1, OrderStatus::Pending)]);
        let fetched = service.get_order_detail(OrderId::new(1)).await.unwrap();
        assert_eq!(fetched.id(), OrderId::new(1));
        assert_eq!(service.fetch_calls(), 1);
    }

    #[tokio::test]
    async fn fetch_missing_is_not_found() {
        let service = InMemoryOrderService::new();
        assert_eq!(
            service.get_order_detail(OrderId::new(3)).await,
            Err(OrderServiceError::NotFound {
                order_id: OrderId::new(3)
            })
        );
    }

    #[tokio::test]
    async fn cancel_pending_flips_status() {
        let service = InMemoryOrderService::with_orders([order(1, OrderStatus::Pending)]);
        service.cancel_order(OrderId::new(1)).await.unwrap();

        let stored = service.get(OrderId::new(1)).unwrap();
        assert_eq!(stored.status(), &OrderStatus::Cancelled);
        assert_eq!(stored.notes(), Some("ghi chú"));
        assert_eq!(service.cancel_calls(), 1);
    }

    #[tokio::test]
    async fn cancel_non_pending_rejected() {
        let service = InMemoryOrderService::with_orders([order(1, OrderStatus::Shipping)]);
        assert!(matches!(
            service.cancel_order(OrderId::new(1)).await,
            Err(OrderServiceError::Rejected { .. })
        ));
        assert_eq!(
            service.get(OrderId::new(1)).unwrap().status(),
            &OrderStatus::Shipping
        );
    }

    #[tokio::test]
    async fn injected_failures() {
        let service = InMemoryOrderService::with_orders([order(1, OrderStatus::Pending)]);
        service.fail_fetches_with(OrderServiceError::Network {
            message: "offline".to_string(),
        });
        service.fail_cancels_with(OrderServiceError::Network {
            message: "offline".to_string(),
        });

        assert!(service.get_order_detail(OrderId::new(1)).await.is_err());
        assert!(service.cancel_order(OrderId::new(1)).await.is_err());

        service.clear_failures();
        assert!(service.get_order_detail(OrderId::new(1)).await.is_ok());
    }
}
