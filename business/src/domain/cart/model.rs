use bigdecimal::BigDecimal;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;
use crate::domain::shared::money;
use crate::domain::shared::value_objects::ProductId;

/// The catalog's current view of a product, as handed to the cart when the
/// product is first added.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: BigDecimal,
}

/// One product within a cart or an order.
///
/// `name` and `unit_price` are snapshots taken when the product was first
/// added; later catalog changes never touch them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(alias = "_id")]
    pub product_id: ProductId,
    pub name: String,
    #[serde(alias = "price", deserialize_with = "money::deserialize_amount")]
    pub unit_price: BigDecimal,
    #[serde(alias = "qty")]
    pub quantity: u32,
}

impl LineItem {
    pub fn from_catalog(product: &CatalogProduct) -> Self {
        Self {
            product_id: product.product_id.clone(),
            name: product.name.clone(),
            unit_price: product.price.clone(),
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id.is_blank() {
            return Err(ValidationError::ProductIdEmpty);
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameEmpty);
        }
        if self.quantity == 0 {
            return Err(ValidationError::QuantityNotPositive);
        }
        if self.unit_price < BigDecimal::zero() {
            return Err(ValidationError::NegativePrice);
        }
        Ok(())
    }
}

/// Sums `quantity × unit_price` over the given lines.
pub fn total_price(items: &[LineItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::zero(), |acc, item| acc + item.line_total())
}

pub fn total_items(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Ordered set of line items, at most one per product.
///
/// Invariants: no two lines share a `product_id`, and no line has a quantity
/// of zero. Every mutation preserves both.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from previously stored lines, repairing anything that
    /// would break the invariants: invalid or zero-quantity lines are dropped
    /// and repeated products are merged into the first occurrence.
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            if item.validate().is_err() {
                continue;
            }
            match cart.position(&item.product_id) {
                Some(index) => {
                    let existing = &mut cart.items[index];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.product_id == product_id)
    }

    fn position(&self, product_id: &ProductId) -> Option<usize> {
        self.items.iter().position(|i| &i.product_id == product_id)
    }

    /// Adds one unit of `product`. An existing line keeps its original
    /// name and price snapshot.
    pub fn add_or_increment(&mut self, product: &CatalogProduct) {
        match self.position(&product.product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::from_catalog(product)),
        }
    }

    /// Returns `false` when the product is not in the cart.
    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        match self.position(product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Removes the line instead of leaving it at zero.
    /// Returns `false` when the product is not in the cart.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        let Some(index) = self.position(product_id) else {
            return false;
        };
        if self.items[index].quantity <= 1 {
            self.items.remove(index);
        } else {
            self.items[index].quantity -= 1;
        }
        true
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        match self.position(product_id) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) -> bool {
        let had_items = !self.items.is_empty();
        self.items.clear();
        had_items
    }

    pub fn total_items(&self) -> u64 {
        total_items(&self.items)
    }

    pub fn total_price(&self) -> BigDecimal {
        total_price(&self.items)
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            items: self.items.clone(),
            total_items: self.total_items(),
            total_price: self.total_price(),
        }
    }
}

/// Immutable copy of the cart at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<LineItem>,
    pub total_items: u64,
    pub total_price: BigDecimal,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
