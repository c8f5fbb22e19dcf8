use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::model::LineItem;
use crate::domain::order::value_objects::{OrderStatus, PaymentMethod};

/// Body of the order-creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    pub total: BigDecimal,
}

/// What the server reports back for an accepted order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedOrder {
    pub message: String,
    /// Server-assigned id, absent when the response did not carry one.
    pub order_id: Option<String>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a response (connect failure, timeout, ...).
    #[error("gateway.network: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("gateway.rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Port for the one synchronous request between client and server.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place_order(
        &self,
        credential: Option<String>,
        request: OrderRequest,
    ) -> Result<PlacedOrder, GatewayError>;
}
