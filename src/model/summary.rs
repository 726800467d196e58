use serde::{Deserialize, Serialize};

/// Fixed sales tax rate applied to every subtotal.
pub const TAX_RATE: f64 = 0.10;

/// Totals derived from a set of priced lines.
///
/// Computed fresh from a snapshot every time; nothing here is cached.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_items: u64,
    pub subtotal: f64,
    /// `subtotal / total_items`, or 0 when there are no items.
    pub average_price: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderSummary {
    /// Reduces `(unit price, quantity)` lines into a summary.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator<Item = (f64, u32)>,
    {
        let (total_items, subtotal) = lines
            .into_iter()
            .fold((0u64, 0.0f64), |(items, subtotal), (price, quantity)| {
                (
                    items + u64::from(quantity),
                    subtotal + price * f64::from(quantity),
                )
            });

        let average_price = if total_items == 0 {
            0.0
        } else {
            subtotal / total_items as f64
        };
        let tax = subtotal * TAX_RATE;

        Self {
            total_items,
            subtotal,
            average_price,
            tax,
            total: subtotal + tax,
        }
    }
}
