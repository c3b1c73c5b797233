//! HTTP order service adapter implementing OrderServicePort.

use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{OrderServiceError, OrderServicePort};
use crate::domain::order::{Order, OrderId};
use crate::infrastructure::session::Session;

use super::api_types::{ApiOrderResponse, ApiPayload};
use super::config::StorefrontApiConfig;
use super::error::StorefrontApiError;
use super::http_client::StorefrontHttpClient;

/// Storefront backend order service.
///
/// Implements `OrderServicePort` over the storefront REST API.
#[derive(Debug, Clone)]
pub struct HttpOrderService {
    client: StorefrontHttpClient,
}

impl HttpOrderService {
    /// Create a new adapter. Requests carry the session's bearer token.
    pub fn new(
        config: &StorefrontApiConfig,
        session: Arc<Session>,
    ) -> Result<Self, StorefrontApiError> {
        let client = StorefrontHttpClient::new(config, session)?;
        Ok(Self { client })
    }

    fn order_path(order_id: OrderId) -> String {
        format!("/orders/{order_id}")
    }

    fn cancel_path(order_id: OrderId) -> String {
        format!("/orders/{order_id}/cancel")
    }
}

#[async_trait]
impl OrderServicePort for HttpOrderService {
    async fn get_order_detail(&self, order_id: OrderId) -> Result<Order, OrderServiceError> {
        tracing::debug!(order_id = %order_id, "Fetching order detail");

        let payload: ApiPayload<ApiOrderResponse> = self
            .client
            .get(&Self::order_path(order_id))
            .await
            .map_err(|e| e.into_port_error(order_id))?;

        Ok(payload.into_inner().into_order())
    }

    async fn cancel_order(&self, order_id: OrderId) -> Result<(), OrderServiceError> {
        tracing::info!(order_id = %order_id, "Requesting order cancellation");

        let _: serde_json::Value = self
            .client
            .put(&Self::cancel_path(order_id))
            .await
            .map_err(|e| e.into_port_error(order_id))?;

        Ok(())
    }
}
