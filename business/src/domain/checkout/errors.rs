#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.cart_empty")]
    EmptyCart,
    #[error("checkout.submission_in_progress")]
    SubmissionInProgress,
    #[error("checkout.network: {0}")]
    Network(String),
    #[error("checkout.rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
}
