//! Custom actions for the catalog actor.
//!
//! Quantity changes are actions rather than updates so the actor can apply the
//! refusal policy atomically: on-hand stock is never set to zero or below
//! through these paths.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Reads the current on-hand quantity without modifying it.
    CheckStock,
    /// Sets on-hand quantity. Values ≤ 0 are ignored.
    SetQuantity(i64),
    /// Moves on-hand quantity by a signed step. A result ≤ 0 is ignored; a
    /// result above `u32::MAX` is clamped.
    AdjustQuantity(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction.
///
/// Every variant carries the on-hand quantity after the action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    CheckStock(u32),
    SetQuantity(u32),
    AdjustQuantity(u32),
}
