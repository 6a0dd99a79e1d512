use std::sync::Arc;

use chrono::{DateTime, Utc};

use tindahan_cart::Cart;
use tindahan_catalog::{Catalog, CatalogItem};
use tindahan_core::{DomainError, DomainResult, Quantity};
use tindahan_orders::{Order, OrderHistory};

use crate::config::ShellConfig;

/// Everything a shopping session owns: the catalog, the active cart and the
/// orders placed so far.
#[derive(Debug, Clone)]
pub struct Session {
    config: ShellConfig,
    catalog: Catalog,
    cart: Cart,
    history: OrderHistory,
}

impl Session {
    /// Start a session over the standard catalog.
    pub fn new(config: ShellConfig) -> DomainResult<Self> {
        Self::with_catalog(config, Catalog::standard()?)
    }

    pub fn with_catalog(config: ShellConfig, catalog: Catalog) -> DomainResult<Self> {
        if config.quantity.is_empty() || *config.quantity.start() == 0 {
            return Err(DomainError::validation(
                "quantity range must be non-empty and start at 1 or more",
            ));
        }
        let cart = Cart::new(config.cart_id);
        Ok(Self {
            config,
            catalog,
            cart,
            history: OrderHistory::new(),
        })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn history(&self) -> &OrderHistory {
        &self.history
    }

    pub fn lookup(&self, code: &str) -> Option<Arc<CatalogItem>> {
        self.catalog.lookup(code)
    }

    pub fn add_to_cart(&mut self, item: Arc<CatalogItem>, quantity: Quantity) -> DomainResult<()> {
        self.cart.add_line(item, quantity)
    }

    pub fn remove_from_cart(&mut self, code: &str, quantity: Quantity) {
        self.cart.remove_line(code, quantity);
    }

    /// Check out the active cart; on success the cart is empty again.
    pub fn place_order(&mut self, placed_at: DateTime<Utc>) -> DomainResult<&Order> {
        self.history.place_order(&mut self.cart, placed_at)
    }
}
