use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "order.unauthorized".to_string(),
            ),
            OrderError::EmptyCart => (
                StatusCode::BAD_REQUEST,
                "EmptyCartError",
                "Cart is empty".to_string(),
            ),
            OrderError::Validation(e) => {
                (StatusCode::BAD_REQUEST, "ValidationError", e.to_string())
            }
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                "Failed to place order".to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use business::domain::cart::errors::ValidationError;
    use business::domain::errors::RepositoryError;

    use super::*;

    #[test]
    fn should_map_empty_cart_to_bad_request() {
        let (status, body) = OrderError::EmptyCart.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "EmptyCartError");
        assert_eq!(body.0.message, "Cart is empty");
    }

    #[test]
    fn should_map_validation_to_bad_request_with_code() {
        let (status, body) =
            OrderError::Validation(ValidationError::NegativePrice).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.name, "ValidationError");
        assert_eq!(body.0.message, "line_item.negative_price");
    }

    #[test]
    fn should_hide_storage_details() {
        let (status, body) =
            OrderError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.name, "StorageError");
        assert_eq!(body.0.message, "Failed to place order");
    }
}
