use crate::domain::errors::RepositoryError;

/// Client-side holder of the session credential.
///
/// The role is kept only for UI gating; it is never a security boundary.
pub trait CredentialStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn role(&self) -> Option<String>;
    fn store(&self, token: &str, role: &str) -> Result<(), RepositoryError>;
    fn forget(&self) -> Result<(), RepositoryError>;
}

/// Moves the user away from the checkout view once an order is placed.
pub trait Navigator: Send + Sync {
    fn leave_checkout(&self);
}
