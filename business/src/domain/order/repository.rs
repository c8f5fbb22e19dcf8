use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Order;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Inserts the order and returns it as stored. All-or-nothing: on error
    /// no part of it is visible.
    async fn insert(&self, order: &Order) -> Result<Order, RepositoryError>;
}
