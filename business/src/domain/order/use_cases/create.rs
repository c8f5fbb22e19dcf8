use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::cart::model::LineItem;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::PaymentMethod;

pub struct CreateOrderParams {
    /// Bearer credential as received; `None` when the header was absent.
    pub credential: Option<String>,
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    /// Total computed by the client. Advisory only.
    pub client_total: Option<BigDecimal>,
}

#[async_trait]
pub trait CreateOrderUseCase: Send + Sync {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
}
