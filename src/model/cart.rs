//! Shopping cart aggregate.
//!
//! A [`Cart`] is one entity in the cart actor's collection. Its items are value
//! snapshots of catalog products; changing the catalog afterwards never
//! reaches into a cart.

use crate::model::{OrderSummary, Product, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// A product snapshot plus the number of units the user wants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1 while the item is in a cart.
    pub cart_quantity: u32,
}

impl CartItem {
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// `price × cart_quantity`.
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.cart_quantity)
    }
}

/// The two observable cart states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartState {
    Empty,
    NonEmpty,
}

/// Payload for opening a cart. Carts always start empty.
#[derive(Debug, Clone, Default)]
pub struct CartCreate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    /// Items in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn item(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Number of distinct rows, one per product.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Adds `quantity` units of `product`, merging into an existing row.
    ///
    /// The existing row keeps its original snapshot; only its quantity grows.
    /// Returns the row's new cart quantity, or `None` when `quantity` is 0 and
    /// nothing was changed.
    pub fn add(&mut self, product: Product, quantity: u32) -> Option<u32> {
        if quantity == 0 {
            return None;
        }
        if let Some(existing) = self.items.iter_mut().find(|item| item.id() == product.id) {
            existing.cart_quantity = existing.cart_quantity.saturating_add(quantity);
            return Some(existing.cart_quantity);
        }
        self.items.push(CartItem {
            product,
            cart_quantity: quantity,
        });
        Some(quantity)
    }

    /// Removes the row for `id`. Returns whether a row was removed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Sets the cart quantity for `id`; 0 removes the row.
    ///
    /// Returns the quantity now stored, or `None` if the row was removed or
    /// was never there.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Option<u32> {
        if quantity == 0 {
            self.remove(id);
            return None;
        }
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        item.cart_quantity = quantity;
        Some(quantity)
    }

    /// Σ cart quantity across all rows.
    pub fn total_item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.cart_quantity))
            .sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn tax(&self) -> f64 {
        self.summary().tax
    }

    pub fn total(&self) -> f64 {
        self.summary().total
    }

    /// Subtotal per unit; 0 for an empty cart.
    pub fn average_item_price(&self) -> f64 {
        self.summary().average_price
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary::from_lines(
            self.items
                .iter()
                .map(|item| (item.product.price, item.cart_quantity)),
        )
    }
}
