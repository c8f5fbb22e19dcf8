use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::cart::model::LineItem;
use business::domain::order::errors::OrderError;
use business::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use business::domain::shared::money;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{CreateOrderRequest, OrderPlacedResponse};
use crate::api::security::SessionBearer;
use crate::api::tags::ApiTags;

pub struct OrderApi {
    create_use_case: Arc<dyn CreateOrderUseCase>,
}

impl OrderApi {
    pub fn new(create_use_case: Arc<dyn CreateOrderUseCase>) -> Self {
        Self { create_use_case }
    }
}

/// Order intake API
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Turns the submitted cart snapshot into a `Pending` order owned by the
    /// authenticated user. The stored total is recomputed from the items.
    #[oai(path = "/orders", method = "post", tag = "ApiTags::Orders")]
    async fn create_order(
        &self,
        auth: SessionBearer,
        body: Json<CreateOrderRequest>,
    ) -> CreateOrderResponse {
        let request = body.0;

        let params = CreateOrderParams {
            credential: Some(auth.0.token),
            items: request.items.into_iter().map(LineItem::from).collect(),
            payment_method: request.payment_method.into(),
            client_total: request.total.and_then(money::from_f64),
        };

        match self.create_use_case.execute(params).await {
            Ok(order) => CreateOrderResponse::Created(Json(order.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderPlacedResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<OrderError> for CreateOrderResponse {
    fn from(err: OrderError) -> Self {
        let (status, json) = err.into_error_response();
        match status.as_u16() {
            400 => CreateOrderResponse::BadRequest(json),
            401 => CreateOrderResponse::Unauthorized(json),
            _ => CreateOrderResponse::InternalError(json),
        }
    }
}
