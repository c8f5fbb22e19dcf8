use crate::domain::errors::RepositoryError;

/// Key under which the serialized cart lives in client storage.
pub const CART_KEY: &str = "cart";
/// Key holding the opaque session credential.
pub const TOKEN_KEY: &str = "token";
/// Key holding the role tag used for client-side UI gating.
pub const ROLE_KEY: &str = "role";

/// Durable client-side key/value storage, read and written synchronously.
///
/// Values are whole documents: every `set` replaces the previous value of the
/// key wholesale.
pub trait LocalStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
    fn remove(&self, key: &str) -> Result<(), RepositoryError>;
}
