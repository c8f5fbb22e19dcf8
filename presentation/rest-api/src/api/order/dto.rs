use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use uuid::Uuid;

use business::domain::cart::model::LineItem;
use business::domain::order::model::Order;
use business::domain::order::value_objects::PaymentMethod;
use business::domain::shared::money;
use business::domain::shared::value_objects::ProductId;

pub const ORDER_PLACED_MESSAGE: &str = "Order placed successfully";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum PaymentMethodDto {
    #[oai(rename = "COD")]
    CashOnDelivery,
    #[oai(rename = "UPI")]
    Upi,
    #[oai(rename = "Card")]
    Card,
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::CashOnDelivery => PaymentMethodDto::CashOnDelivery,
            PaymentMethod::Upi => PaymentMethodDto::Upi,
            PaymentMethod::Card => PaymentMethodDto::Card,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(dto: PaymentMethodDto) -> Self {
        match dto {
            PaymentMethodDto::CashOnDelivery => PaymentMethod::CashOnDelivery,
            PaymentMethodDto::Upi => PaymentMethod::Upi,
            PaymentMethodDto::Card => PaymentMethod::Card,
        }
    }
}

/// One line of the submitted cart
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LineItemDto {
    /// Catalog product identifier
    pub product_id: String,
    /// Product name at the time it was added to the cart
    pub name: String,
    /// Number of units (must be at least 1)
    pub quantity: i64,
    /// Unit price at the time it was added to the cart
    pub unit_price: f64,
}

/// Field mapping only; `Order::place` validates the result.
impl From<LineItemDto> for LineItem {
    fn from(dto: LineItemDto) -> Self {
        // A parsed JSON number is always finite.
        let unit_price = money::from_f64(dto.unit_price).unwrap_or_default();
        // Non-positive quantities collapse to 0 and fail domain validation.
        let quantity = dto.quantity.clamp(0, i64::from(u32::MAX)) as u32;

        LineItem {
            product_id: ProductId::new(dto.product_id),
            name: dto.name,
            unit_price,
            quantity,
        }
    }
}

impl From<LineItem> for LineItemDto {
    fn from(item: LineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name,
            quantity: i64::from(item.quantity),
            unit_price: money::to_f64(&item.unit_price),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Cart snapshot
    pub items: Vec<LineItemDto>,
    /// Chosen payment method
    pub payment_method: PaymentMethodDto,
    /// Client-computed total. Informational; the stored total is recomputed.
    #[oai(skip_serializing_if_is_none)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderResponse {
    /// Order unique identifier
    pub id: Uuid,
    /// Owner of the order
    pub user_id: String,
    /// Line items as submitted
    pub items: Vec<LineItemDto>,
    /// Chosen payment method
    pub payment_method: PaymentMethodDto,
    /// Order total
    pub total: f64,
    /// Order status
    pub status: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.to_string(),
            items: order.items.into_iter().map(LineItemDto::from).collect(),
            payment_method: order.payment_method.into(),
            total: money::to_f64(&order.total),
            status: order.status.to_string(),
            created_at: order.created_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderPlacedResponse {
    pub message: String,
    pub order: OrderResponse,
}

impl From<Order> for OrderPlacedResponse {
    fn from(order: Order) -> Self {
        Self {
            message: ORDER_PLACED_MESSAGE.to_string(),
            order: order.into(),
        }
    }
}
