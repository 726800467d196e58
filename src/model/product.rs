//! Catalog product.
//!
//! [`Product`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//! See the [`catalog_actor`](crate::catalog_actor) module for the creation
//! checks and the quantity actions.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use validator::{Validate, ValidationError};

/// Products with fewer units on hand than this are flagged as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    pub price: f64,
    /// On-hand stock. Unrelated to any cart quantity.
    pub quantity: u32,
    pub category: String,
    pub description: String,
    pub specifications: String,
    pub rating: f64,
}

impl Product {
    /// Builds a product from its id and creation payload.
    pub fn new(id: ProductId, params: ProductCreate) -> Self {
        Self {
            id,
            name: params.name,
            image: params.image,
            price: params.price,
            quantity: params.quantity,
            category: params.category,
            description: params.description,
            specifications: params.specifications,
            rating: params.rating,
        }
    }

    /// Value of the stock on hand: `price × quantity`.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn is_low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// Payload for adding a product to the catalog: a [`Product`] without its id.
///
/// Field constraints are checked with [`Validate`] before the catalog accepts
/// the product; text fields are free-form at this layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub image: String,
    #[validate(range(min = 0.0), custom(function = "finite"))]
    pub price: f64,
    pub quantity: u32,
    pub category: String,
    pub description: String,
    pub specifications: String,
    #[validate(range(min = 0.0, max = 5.0), custom(function = "finite"))]
    pub rating: f64,
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lamp() -> ProductCreate {
        ProductCreate {
            name: "Desk Lamp".into(),
            image: "/modern-desk-lamp.png".into(),
            price: 29.99,
            quantity: 12,
            category: "Lighting".into(),
            description: "LED desk lamp".into(),
            specifications: "5 brightness levels".into(),
            rating: 4.7,
        }
    }

    #[test]
    fn stock_value_and_low_stock() {
        let mut product = Product::new(ProductId(3), lamp());
        assert!((product.stock_value() - 359.88).abs() < 1e-9);
        assert!(!product.is_low_stock());

        product.quantity = 4;
        assert!(product.is_low_stock());
        product.quantity = 5;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn create_payload_bounds() {
        assert!(lamp().validate().is_ok());

        let free = ProductCreate { price: 0.0, ..lamp() };
        assert!(free.validate().is_ok());

        let negative = ProductCreate { price: -1.0, ..lamp() };
        assert!(negative.validate().is_err());

        let too_good = ProductCreate { rating: 5.5, ..lamp() };
        assert!(too_good.validate().is_err());

        let nan = ProductCreate { price: f64::NAN, ..lamp() };
        assert!(nan.validate().is_err());

        let nan_rating = ProductCreate { rating: f64::NAN, ..lamp() };
        let errors = nan_rating.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn id_display() {
        assert_eq!(ProductId(12).to_string(), "product_12");
    }
}
