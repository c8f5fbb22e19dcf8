use std::sync::Arc;

use logger::TracingLogger;
use persistence::order::repository::OrderRepositoryPostgres;

use business::application::order::create::CreateOrderUseCaseImpl;

use crate::api::security::JwtSessionAuthenticator;
use crate::config::auth_config::AuthConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub order_api: crate::api::order::routes::OrderApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, auth: &AuthConfig) -> Self {
        let logger = Arc::new(TracingLogger::new("order_intake"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let order_repository = Arc::new(OrderRepositoryPostgres::new(pool));
        let authenticator = Arc::new(JwtSessionAuthenticator::new(&auth.jwt_secret));

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            authenticator,
            repository: order_repository,
            logger,
        });

        let order_api = crate::api::order::routes::OrderApi::new(create_order_use_case);

        Self {
            health_api,
            order_api,
        }
    }
}
