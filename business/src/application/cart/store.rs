use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::domain::cart::model::{Cart, CartSnapshot, CatalogProduct, LineItem};
use crate::domain::cart::storage::{CART_KEY, LocalStorage};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

/// Sole owner of the client-resident cart.
///
/// Every mutation that changes the cart writes the full line list back to
/// storage before returning.
pub struct CartStore {
    cart: Cart,
    storage: Arc<dyn LocalStorage>,
    logger: Arc<dyn Logger>,
}

impl CartStore {
    /// Loads the cart saved in `storage`. Missing or unreadable data gives an
    /// empty cart.
    pub fn restore(storage: Arc<dyn LocalStorage>, logger: Arc<dyn Logger>) -> Self {
        let cart = match storage.get(CART_KEY) {
            None => Cart::new(),
            Some(raw) => match serde_json::from_str::<Vec<LineItem>>(&raw) {
                Ok(items) => Cart::from_items(items),
                Err(e) => {
                    logger.warn(&format!("Discarding unreadable cart snapshot: {}", e));
                    Cart::new()
                }
            },
        };

        logger.debug(&format!("Cart restored with {} lines", cart.items().len()));
        Self {
            cart,
            storage,
            logger,
        }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(self.cart.items()) {
            Ok(json) => json,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to serialize cart snapshot: {}", e));
                return;
            }
        };

        if let Err(e) = self.storage.set(CART_KEY, &json) {
            self.logger
                .error(&format!("Failed to write cart snapshot: {}", e));
        }
    }

    pub fn add_or_increment(&mut self, product: &CatalogProduct) {
        self.cart.add_or_increment(product);
        self.persist();
    }

    pub fn remove(&mut self, product_id: &ProductId) {
        if self.cart.remove(product_id) {
            self.persist();
        }
    }

    pub fn increment(&mut self, product_id: &ProductId) {
        if self.cart.increment(product_id) {
            self.persist();
        }
    }

    pub fn decrement(&mut self, product_id: &ProductId) {
        if self.cart.decrement(product_id) {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        self.persist();
    }

    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> BigDecimal {
        self.cart.total_price()
    }

    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use num_traits::Zero;

    use super::*;
    use crate::testing::{MemoryStorage, mock_logger};

    fn widget() -> CatalogProduct {
        CatalogProduct {
            product_id: ProductId::new("p1"),
            name: "Widget".to_string(),
            price: BigDecimal::from(100),
        }
    }

    #[test]
    fn should_start_empty_when_nothing_stored() {
        let store = CartStore::restore(Arc::new(MemoryStorage::new()), mock_logger());

        assert!(store.items().is_empty());
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), BigDecimal::zero());
    }

    #[test]
    fn should_start_empty_when_snapshot_is_corrupt() {
        let storage = Arc::new(MemoryStorage::with(CART_KEY, "{not json"));

        let store = CartStore::restore(storage, mock_logger());

        assert!(store.items().is_empty());
    }

    #[test]
    fn should_start_empty_when_snapshot_has_wrong_shape() {
        let storage = Arc::new(MemoryStorage::with(CART_KEY, r#"{"p1":2}"#));

        let store = CartStore::restore(storage, mock_logger());

        assert!(store.items().is_empty());
    }

    #[test]
    fn should_write_through_on_every_change() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::restore(storage.clone(), mock_logger());

        store.add_or_increment(&widget());
        store.increment(&ProductId::new("p1"));

        assert_eq!(storage.writes(), 2);
        let saved: Vec<LineItem> =
            serde_json::from_str(&storage.get(CART_KEY).unwrap()).unwrap();
        assert_eq!(saved, store.items());
        assert_eq!(saved[0].quantity, 2);
    }

    #[test]
    fn should_not_rewrite_on_no_op_mutation() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::restore(storage.clone(), mock_logger());
        let missing = ProductId::new("missing");

        store.remove(&missing);
        store.increment(&missing);
        store.decrement(&missing);

        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn should_survive_reload() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::restore(storage.clone(), mock_logger());
        store.add_or_increment(&widget());
        store.add_or_increment(&CatalogProduct {
            product_id: ProductId::new("p2"),
            name: "Gadget".to_string(),
            price: BigDecimal::from_str("9.95").unwrap(),
        });
        store.add_or_increment(&widget());

        let reloaded = CartStore::restore(storage, mock_logger());

        assert_eq!(reloaded.snapshot(), store.snapshot());
        assert_eq!(reloaded.total_price(), BigDecimal::from_str("209.95").unwrap());
    }

    #[test]
    fn should_rewrite_empty_snapshot_on_clear() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::restore(storage.clone(), mock_logger());
        store.add_or_increment(&widget());

        store.clear();

        assert!(store.items().is_empty());
        assert_eq!(storage.get(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn should_remove_line_when_decremented_to_zero() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = CartStore::restore(storage.clone(), mock_logger());
        store.add_or_increment(&widget());

        store.decrement(&ProductId::new("p1"));

        assert!(store.items().is_empty());
        assert_eq!(storage.get(CART_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn should_keep_in_memory_cart_when_storage_write_fails() {
        let storage = Arc::new(MemoryStorage::failing());
        let mut store = CartStore::restore(storage, mock_logger());

        store.add_or_increment(&widget());

        assert_eq!(store.total_items(), 1);
    }
}
