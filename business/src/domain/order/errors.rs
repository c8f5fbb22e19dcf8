use crate::domain::cart::errors::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.unauthorized")]
    Unauthorized,
    #[error("order.cart_empty")]
    EmptyCart,
    #[error("order.invalid_item: {0}")]
    Validation(#[from] ValidationError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
