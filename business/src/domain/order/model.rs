use std::collections::HashSet;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::{OrderStatus, PaymentMethod};
use crate::domain::cart::errors::ValidationError;
use crate::domain::cart::model::{self, LineItem};
use crate::domain::shared::value_objects::UserId;

/// Durable record of one checkout. Immutable once placed.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    /// Copies of the submitted lines, never references to live catalog data.
    pub items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
    pub total: BigDecimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Validates the submitted lines and builds a new `Pending` order whose
    /// total is recomputed from them.
    pub fn place(
        user_id: UserId,
        items: Vec<LineItem>,
        payment_method: PaymentMethod,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let mut seen = HashSet::new();
        for item in &items {
            item.validate()?;
            if !seen.insert(&item.product_id) {
                return Err(ValidationError::DuplicateProduct.into());
            }
        }

        let total = model::total_price(&items);
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            items,
            payment_method,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        items: Vec<LineItem>,
        payment_method: PaymentMethod,
        total: BigDecimal,
        status: OrderStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            payment_method,
            total,
            status,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::domain::shared::value_objects::ProductId;

    fn line(id: &str, quantity: u32, unit_price: &str) -> LineItem {
        LineItem {
            product_id: ProductId::new(id),
            name: format!("Item {id}"),
            unit_price: BigDecimal::from_str(unit_price).unwrap(),
            quantity,
        }
    }

    #[test]
    fn should_place_pending_order_with_recomputed_total() {
        let order = Order::place(
            UserId::new("u1"),
            vec![line("p1", 2, "100"), line("p2", 1, "0.99")],
            PaymentMethod::Upi,
        )
        .unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, BigDecimal::from_str("200.99").unwrap());
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.user_id, UserId::new("u1"));
    }

    #[test]
    fn should_reject_empty_items() {
        let result = Order::place(UserId::new("u1"), vec![], PaymentMethod::Card);

        assert!(matches!(result.unwrap_err(), OrderError::EmptyCart));
    }

    #[test]
    fn should_reject_non_positive_quantity() {
        let result = Order::place(
            UserId::new("u1"),
            vec![line("p1", 0, "10")],
            PaymentMethod::Card,
        );

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Validation(ValidationError::QuantityNotPositive)
        ));
    }

    #[test]
    fn should_reject_negative_price() {
        let result = Order::place(
            UserId::new("u1"),
            vec![line("p1", 1, "-5")],
            PaymentMethod::CashOnDelivery,
        );

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Validation(ValidationError::NegativePrice)
        ));
    }

    #[test]
    fn should_reject_repeated_product() {
        let result = Order::place(
            UserId::new("u1"),
            vec![line("p1", 1, "10"), line("p1", 2, "10")],
            PaymentMethod::CashOnDelivery,
        );

        assert!(matches!(
            result.unwrap_err(),
            OrderError::Validation(ValidationError::DuplicateProduct)
        ));
    }
}
