use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::LineItem;
use business::domain::checkout::gateway::{GatewayError, OrderGateway, OrderRequest, PlacedOrder};
use business::domain::order::value_objects::{OrderStatus, PaymentMethod};
use business::domain::shared::money;

use crate::client::StorefrontClient;

const ORDER_PLACED_MESSAGE: &str = "Order placed successfully";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LineItemBody {
    product_id: String,
    name: String,
    quantity: u32,
    unit_price: f64,
}

impl From<&LineItem> for LineItemBody {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity,
            unit_price: money::to_f64(&item.unit_price),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OrderRequestBody {
    items: Vec<LineItemBody>,
    payment_method: PaymentMethod,
    total: f64,
}

/// Success body. Every field is optional: a 2xx means the order exists,
/// whatever shape the body has.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CreatedOrderBody {
    message: Option<String>,
    order: Option<OrderBody>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrderBody {
    #[serde(alias = "_id")]
    id: Option<serde_json::Value>,
    status: Option<String>,
    total: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// `OrderGateway` over HTTP: one POST, no retries.
pub struct OrderGatewayHttp {
    client: StorefrontClient,
}

impl OrderGatewayHttp {
    pub fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| status.canonical_reason().map(str::to_string))
            .unwrap_or_else(|| "Failed to place order".to_string())
    }

    /// Reads an accepted-order body, filling gaps from the request.
    fn parse_created(body: &str, request_total: BigDecimal) -> PlacedOrder {
        let created = serde_json::from_str::<CreatedOrderBody>(body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Order accepted but response body is unreadable");
            CreatedOrderBody::default()
        });
        let order = created.order.unwrap_or_default();

        let order_id = match order.id {
            Some(serde_json::Value::String(id)) if !id.is_empty() => Some(id),
            Some(serde_json::Value::Number(id)) => Some(id.to_string()),
            _ => None,
        };
        if order_id.is_none() {
            tracing::warn!("Order accepted without an order id in the response");
        }

        let status = order
            .status
            .and_then(|status| status.parse::<OrderStatus>().ok())
            .unwrap_or(OrderStatus::Pending);
        let total = order
            .total
            .and_then(money::from_f64)
            .unwrap_or(request_total);

        PlacedOrder {
            message: created
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| ORDER_PLACED_MESSAGE.to_string()),
            order_id,
            status,
            total,
        }
    }
}

#[async_trait]
impl OrderGateway for OrderGatewayHttp {
    async fn place_order(
        &self,
        credential: Option<String>,
        request: OrderRequest,
    ) -> Result<PlacedOrder, GatewayError> {
        let request_total = request.total.clone();
        let body = OrderRequestBody {
            items: request.items.iter().map(LineItemBody::from).collect(),
            payment_method: request.payment_method,
            total: money::to_f64(&request.total),
        };

        let mut builder = self.client.client.post(self.client.orders_url()).json(&body);
        if let Some(token) = credential.as_deref() {
            builder = builder.header("Authorization", StorefrontClient::auth_header(token));
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Order request failed before a response");
            GatewayError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: Self::rejection_message(status, &text),
            });
        }

        // 2xx means the order exists; an unreadable body is not a failure.
        let text = response.text().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Order accepted but response body was cut off");
            String::new()
        });

        Ok(Self::parse_created(&text, request_total))
    }
}
