use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::order::value_objects::{OrderStatus, PaymentMethod};

/// Result shown to the user after a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub message: String,
    /// Server-assigned id, absent when the response did not carry one.
    pub order_id: Option<String>,
    pub status: OrderStatus,
    pub total: BigDecimal,
}

#[async_trait]
pub trait CheckoutSubmitter: Send + Sync {
    async fn submit(&self, payment_method: PaymentMethod)
    -> Result<OrderConfirmation, CheckoutError>;
}
