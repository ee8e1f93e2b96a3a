use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog_item::{Product, ProductId};

/// One product line in the shopping cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

/// The shopping cart. Lines are private; callers read through accessors and
/// mutate through the defined operations so quantity bookkeeping stays in
/// one place.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Adds `quantity` units of the product, merging with an existing line.
    /// Adding zero units is a no-op.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine { product, quantity });
    }

    pub fn remove(&mut self, product_id: &ProductId) {
        self.lines.retain(|line| &line.product.id != product_id);
    }

    /// Sets the quantity for a product's line. Zero removes the line; an
    /// unknown product id is ignored.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|line| &line.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.product.price * Decimal::from(line.quantity))
            .sum()
    }
}
