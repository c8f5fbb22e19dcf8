use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use business::domain::cart::model::LineItem;
use business::domain::errors::RepositoryError;
use business::domain::order::model::Order;
use business::domain::order::value_objects::{OrderStatus, PaymentMethod};
use business::domain::shared::value_objects::UserId;

/// Row of the `orders` table. Line items are stored by value as JSONB.
#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub items: Json<Vec<LineItem>>,
    pub payment_method: String,
    pub total: BigDecimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl OrderEntity {
    pub fn into_domain(self) -> Result<Order, RepositoryError> {
        let payment_method = self
            .payment_method
            .parse::<PaymentMethod>()
            .map_err(|_| RepositoryError::Serialization)?;
        let status = self
            .status
            .parse::<OrderStatus>()
            .map_err(|_| RepositoryError::Serialization)?;

        Ok(Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items.0,
            payment_method,
            self.total,
            status,
            self.created_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use business::domain::shared::value_objects::ProductId;

    use super::*;

    fn entity(payment_method: &str, status: &str) -> OrderEntity {
        OrderEntity {
            id: Uuid::new_v4(),
            user_id: "user-1".to_string(),
            items: Json(vec![LineItem {
                product_id: ProductId::new("p1"),
                name: "Widget".to_string(),
                unit_price: BigDecimal::from(100),
                quantity: 2,
            }]),
            payment_method: payment_method.to_string(),
            total: BigDecimal::from(200),
            status: status.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn should_map_row_to_domain_order() {
        let order = entity("UPI", "Pending").into_domain().unwrap();

        assert_eq!(order.payment_method, PaymentMethod::Upi);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.user_id.as_str(), "user-1");
    }

    #[test]
    fn should_reject_unknown_payment_method() {
        let result = entity("Bitcoin", "Pending").into_domain();

        assert!(matches!(result, Err(RepositoryError::Serialization)));
    }

    #[test]
    fn should_reject_unknown_status() {
        let result = entity("COD", "Lost").into_domain();

        assert!(matches!(result, Err(RepositoryError::Serialization)));
    }
}
