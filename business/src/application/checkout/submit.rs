use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::cart::store::CartStore;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::gateway::{GatewayError, OrderGateway, OrderRequest};
use crate::domain::checkout::services::{CredentialStore, Navigator};
use crate::domain::checkout::use_cases::submit::{CheckoutSubmitter, OrderConfirmation};
use crate::domain::logger::Logger;
use crate::domain::order::value_objects::PaymentMethod;

/// Turns the current cart into exactly one order-creation attempt.
///
/// Only one submission may be outstanding at a time; the in-flight flag is
/// held across the network round trip.
pub struct CheckoutSubmitterImpl {
    pub cart: Arc<Mutex<CartStore>>,
    pub gateway: Arc<dyn OrderGateway>,
    pub credentials: Arc<dyn CredentialStore>,
    pub navigator: Arc<dyn Navigator>,
    pub logger: Arc<dyn Logger>,
    in_flight: AtomicBool,
}

impl CheckoutSubmitterImpl {
    pub fn new(
        cart: Arc<Mutex<CartStore>>,
        gateway: Arc<dyn OrderGateway>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            cart,
            gateway,
            credentials,
            navigator,
            logger,
            in_flight: AtomicBool::new(false),
        }
    }
}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[async_trait]
impl CheckoutSubmitter for CheckoutSubmitterImpl {
    async fn submit(
        &self,
        payment_method: PaymentMethod,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let _guard =
            InFlightGuard::acquire(&self.in_flight).ok_or(CheckoutError::SubmissionInProgress)?;

        let snapshot = self.cart.lock().await.snapshot();
        if snapshot.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // The server owns authentication; a missing token is its call to reject.
        let credential = self.credentials.token();
        if credential.is_none() {
            self.logger
                .debug("No session credential stored, submitting without one");
        }

        self.logger.info(&format!(
            "Submitting order: {} items, total {}, payment {}",
            snapshot.total_items, snapshot.total_price, payment_method
        ));

        let request = OrderRequest {
            items: snapshot.items,
            payment_method,
            total: snapshot.total_price,
        };

        match self.gateway.place_order(credential, request).await {
            Ok(placed) => {
                self.cart.lock().await.clear();
                self.logger.info(&format!(
                    "Order placed: {}",
                    placed.order_id.as_deref().unwrap_or("(no id returned)")
                ));
                self.navigator.leave_checkout();
                Ok(OrderConfirmation {
                    message: placed.message,
                    order_id: placed.order_id,
                    status: placed.status,
                    total: placed.total,
                })
            }
            Err(GatewayError::Network(message)) => {
                self.logger
                    .warn(&format!("Order request did not complete: {}", message));
                Err(CheckoutError::Network(message))
            }
            Err(GatewayError::Rejected { status, message }) => {
                self.logger.warn(&format!(
                    "Order rejected by server ({}): {}",
                    status, message
                ));
                Err(CheckoutError::Rejected { status, message })
            }
        }
    }
}
