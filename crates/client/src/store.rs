//! In-memory application state.
//!
//! Field authority:
//! - `Product::stock_qty` is client-authoritative between a posted movement
//!   and the next product fetch (the backend has already applied the
//!   movement; the local value is a projection of it).
//! - Every other product field, the movement list contents, and all pricing
//!   data are server-authoritative and only ever replaced by fetched data.
//!
//! Transitions consume the store and return the next one, so a flow that
//! fails halfway never leaves a partially updated store behind.

use livraria_core::entity::{find_by_id, position_of};
use livraria_core::ProductId;
use livraria_inventory::{Movement, sort_most_recent_first};
use livraria_pricing::{CategoryPercent, PriceAdjustment, sort_history_most_recent_first};
use livraria_products::Product;

/// Server-side pricing state as last fetched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingSnapshot {
    pub categories: Vec<CategoryPercent>,
    /// Newest first.
    pub history: Vec<PriceAdjustment>,
    /// Decimal fraction.
    pub global_percent: f64,
}

impl PricingSnapshot {
    pub fn new(
        categories: Vec<CategoryPercent>,
        mut history: Vec<PriceAdjustment>,
        global_percent: f64,
    ) -> Self {
        sort_history_most_recent_first(&mut history);
        Self {
            categories,
            history,
            global_percent,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    products: Vec<Product>,
    movements: Vec<Movement>,
    pricing: PricingSnapshot,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        find_by_id(&self.products, &id)
    }

    /// Newest first.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn pricing(&self) -> &PricingSnapshot {
        &self.pricing
    }

    /// Replace products with a fresh fetch (drops any local stock projection).
    pub fn with_products(self, products: Vec<Product>) -> Self {
        Self { products, ..self }
    }

    pub fn with_movements(self, mut movements: Vec<Movement>) -> Self {
        sort_most_recent_first(&mut movements);
        Self { movements, ..self }
    }

    pub fn with_pricing(self, pricing: PricingSnapshot) -> Self {
        Self { pricing, ..self }
    }

    /// Record a movement the backend accepted: prepend it and project the
    /// product's new stock level.
    pub fn with_recorded_movement(
        mut self,
        product_id: ProductId,
        movement: Movement,
        new_stock: i64,
    ) -> Self {
        if let Some(idx) = position_of(&self.products, &product_id) {
            self.products[idx] = self.products[idx].with_stock(new_stock);
        }
        self.movements.insert(0, movement);
        self
    }

    /// Insert or replace a product returned by a create/update call.
    pub fn with_saved_product(mut self, product: Product) -> Self {
        match position_of(&self.products, &product.id) {
            Some(idx) => self.products[idx] = product,
            None => self.products.push(product),
        }
        self
    }

    pub fn without_product(mut self, id: ProductId) -> Self {
        self.products.retain(|p| p.id != id);
        self
    }
}
