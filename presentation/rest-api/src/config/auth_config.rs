use anyhow::{Context, bail};
use std::env;

/// Settings for verifying session credentials.
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 secret shared with the token issuer (required)
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        Self::new(jwt_secret)
    }

    pub fn new(jwt_secret: String) -> anyhow::Result<Self> {
        if jwt_secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        Ok(Self { jwt_secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_reject_blank_secret() {
        assert!(AuthConfig::new("   ".to_string()).is_err());
    }

    #[test]
    fn should_keep_secret_verbatim() {
        let config = AuthConfig::new("s3cret".to_string()).unwrap();

        assert_eq!(config.jwt_secret, "s3cret");
    }
}
