use std::time::Duration;

use reqwest::Client;

/// Default bound on one order-creation round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared HTTP client configuration for the storefront API.
pub struct StorefrontClient {
    pub client: Client,
    pub base_url: String,
}

impl StorefrontClient {
    /// `base_url` is the API root, e.g. `http://127.0.0.1:8080/api`.
    ///
    /// Fails when the TLS backend cannot be initialised, rather than falling
    /// back to a client without the timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds the authorization header value.
    pub fn auth_header(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Returns the order-creation endpoint URL.
    pub fn orders_url(&self) -> String {
        format!("{}/orders", self.base_url)
    }
}
