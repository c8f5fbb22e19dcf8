use async_trait::async_trait;

use super::errors::AuthError;
use super::model::AuthenticatedUser;

/// Service port that turns a bearer credential into an identity.
///
/// Signature checks and expiry are the implementation's business; callers
/// only see an identity or a rejection.
#[async_trait]
pub trait SessionAuthenticator: Send + Sync {
    async fn authenticate(&self, credential: &str) -> Result<AuthenticatedUser, AuthError>;
}
