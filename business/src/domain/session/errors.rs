#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_token")]
    InvalidToken,
    #[error("auth.token_expired")]
    Expired,
}
