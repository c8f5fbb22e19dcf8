use std::sync::Arc;

use crate::domain::cart::storage::{LocalStorage, ROLE_KEY, TOKEN_KEY};
use crate::domain::checkout::services::CredentialStore;
use crate::domain::errors::RepositoryError;

/// Keeps the session credential in client storage, next to the cart.
pub struct LocalCredentialStore {
    pub storage: Arc<dyn LocalStorage>,
}

impl CredentialStore for LocalCredentialStore {
    fn token(&self) -> Option<String> {
        self.storage
            .get(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    fn role(&self) -> Option<String> {
        self.storage.get(ROLE_KEY)
    }

    fn store(&self, token: &str, role: &str) -> Result<(), RepositoryError> {
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(ROLE_KEY, role)
    }

    fn forget(&self) -> Result<(), RepositoryError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(ROLE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStorage;

    #[test]
    fn should_return_none_when_no_token_stored() {
        let store = LocalCredentialStore {
            storage: Arc::new(MemoryStorage::new()),
        };

        assert!(store.token().is_none());
        assert!(store.role().is_none());
    }

    #[test]
    fn should_store_and_forget_credential() {
        let store = LocalCredentialStore {
            storage: Arc::new(MemoryStorage::new()),
        };

        store.store("jwt-token", "admin").unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-token"));
        assert_eq!(store.role().as_deref(), Some("admin"));

        store.forget().unwrap();
        assert!(store.token().is_none());
    }

    #[test]
    fn should_treat_blank_token_as_absent() {
        let store = LocalCredentialStore {
            storage: Arc::new(MemoryStorage::with(TOKEN_KEY, "  ")),
        };

        assert!(store.token().is_none());
    }
}
