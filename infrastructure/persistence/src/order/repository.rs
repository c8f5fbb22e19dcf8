use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;

use super::entity::OrderEntity;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn insert(&self, order: &Order) -> Result<Order, RepositoryError> {
        // Single statement, so the insert is atomic without an explicit transaction.
        let entity = sqlx::query_as::<_, OrderEntity>(
            r#"INSERT INTO orders (id, user_id, items, payment_method, total, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, items, payment_method, total, status, created_at"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(Json(&order.items))
        .bind(order.payment_method.to_string())
        .bind(&order.total)
        .bind(order.status.to_string())
        .bind(order.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(order_id = %order.id, error = %e, "Order insert failed");
            RepositoryError::DatabaseError
        })?;

        entity.into_domain()
    }
}
