use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem_openapi::SecurityScheme;
use poem_openapi::auth::Bearer;
use serde::{Deserialize, Serialize};

use business::domain::session::errors::AuthError;
use business::domain::session::model::AuthenticatedUser;
use business::domain::session::services::SessionAuthenticator;
use business::domain::shared::value_objects::{Role, UserId};

/// Claims carried by a storefront session token.
#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    id: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Verifies HS256 session tokens issued by the login service.
pub struct JwtSessionAuthenticator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtSessionAuthenticator {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                _ => {
                    tracing::debug!("auth.token_validation_failed: {e}");
                    AuthError::InvalidToken
                }
            },
        )?;

        let claims = data.claims;
        if claims.id.trim().is_empty() {
            return Err(AuthError::InvalidToken);
        }
        let role = claims
            .role
            .parse::<Role>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthenticatedUser {
            user_id: UserId::new(claims.id),
            role,
        })
    }
}

#[async_trait]
impl SessionAuthenticator for JwtSessionAuthenticator {
    async fn authenticate(&self, credential: &str) -> Result<AuthenticatedUser, AuthError> {
        self.verify(credential)
    }
}

/// Session bearer token. Verification happens in the order use case.
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT")]
pub struct SessionBearer(pub Bearer);

#[cfg(test)]
pub mod test_tokens {
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::SessionClaims;

    pub const SECRET: &str = "test-secret";

    /// Signs a token valid for `ttl_seconds` from now (negative for expired).
    pub fn issue(secret: &str, id: &str, role: &str, ttl_seconds: i64) -> String {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            id: id.to_string(),
            role: role.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }
}
