use crate::domain::shared::value_objects::{Role, UserId};

/// Identity proven by a valid session credential.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: Role,
}
