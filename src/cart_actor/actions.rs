//! Custom actions for the cart actor.

use crate::model::{Product, ProductId};

/// Mutations of a [`Cart`](crate::model::Cart).
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Adds units of a product snapshot, merging with an existing row.
    Add { product: Product, quantity: u32 },
    /// Drops the row for a product. Absent rows are ignored.
    Remove(ProductId),
    /// Sets a row's cart quantity; ≤ 0 removes the row. Absent rows are ignored.
    UpdateQuantity { id: ProductId, quantity: i64 },
}

/// Results from CartActions - variants match 1:1 with CartAction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartActionResult {
    /// The row's cart quantity after the merge.
    Add(u32),
    /// Whether a row was removed.
    Remove(bool),
    /// The stored quantity, or `None` when the row is gone or never existed.
    UpdateQuantity(Option<u32>),
}
