use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::session::services::SessionAuthenticator;

pub struct CreateOrderUseCaseImpl {
    pub authenticator: Arc<dyn SessionAuthenticator>,
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateOrderUseCase for CreateOrderUseCaseImpl {
    async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError> {
        let credential = params.credential.ok_or(OrderError::Unauthorized)?;
        let user = self
            .authenticator
            .authenticate(&credential)
            .await
            .map_err(|e| {
                self.logger
                    .warn(&format!("Rejecting order request: {}", e));
                OrderError::Unauthorized
            })?;

        self.logger.info(&format!(
            "Creating order for user {} with {} lines",
            user.user_id,
            params.items.len()
        ));

        let order = Order::place(user.user_id, params.items, params.payment_method)?;

        // The stored total is always the recomputed one.
        if let Some(client_total) = params.client_total
            && client_total != order.total
        {
            self.logger.warn(&format!(
                "Client total {} differs from computed total {} for order {}",
                client_total, order.total, order.id
            ));
        }

        let stored = self.repository.insert(&order).await.map_err(|e| {
            self.logger
                .error(&format!("Failed to persist order {}: {}", order.id, e));
            OrderError::Repository(e)
        })?;

        self.logger.info(&format!("Order created: {}", stored.id));
        Ok(stored)
    }
}
