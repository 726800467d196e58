//! Add-product form input.
//!
//! The form is the only gate in front of the catalog's creation check. It works
//! on raw text the way a user types it and reports one message per offending
//! field; a form that fails never reaches the catalog.

use crate::model::ProductCreate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Categories offered by the add-product form.
pub const CATEGORY_OPTIONS: [&str; 5] = ["Electronics", "Appliances", "Lighting", "Accessories", "Other"];

/// Category preselected on a fresh form.
pub const DEFAULT_CATEGORY: &str = "Electronics";

/// Raw add-product form fields, all as entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub image: String,
    pub price: String,
    pub quantity: String,
    pub category: String,
    pub description: String,
    pub specifications: String,
    pub rating: String,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            image: String::new(),
            price: String::new(),
            quantity: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            description: String::new(),
            specifications: String::new(),
            rating: String::new(),
        }
    }
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormErrors(BTreeMap<&'static str, &'static str>);

impl FormErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

impl ProductForm {
    /// Checks every field and converts the form into a creation payload.
    ///
    /// Text fields must be non-blank, price must be a number above 0, quantity
    /// a whole number of at least 0, and rating a number between 0 and 5.
    /// Quantity keeps only its leading whole number, so `"2.5"` stores 2.
    /// Text is passed through untrimmed.
    pub fn validate(&self) -> Result<ProductCreate, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.insert("name", "Product name is required");
        }
        if self.image.trim().is_empty() {
            errors.insert("image", "Product image URL is required");
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            errors.insert("price", "Valid price is required");
        }

        let quantity = leading_whole_number(&self.quantity).and_then(|n| u32::try_from(n).ok());
        if quantity.is_none() {
            errors.insert("quantity", "Valid quantity is required");
        }

        if self.category.trim().is_empty() {
            errors.insert("category", "Category is required");
        }
        if self.description.trim().is_empty() {
            errors.insert("description", "Description is required");
        }
        if self.specifications.trim().is_empty() {
            errors.insert("specifications", "Specifications are required");
        }

        let rating = self
            .rating
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|r| (0.0..=5.0).contains(r));
        if rating.is_none() {
            errors.insert("rating", "Rating must be between 0 and 5");
        }

        match (price, quantity, rating) {
            (Some(price), Some(quantity), Some(rating)) if errors.is_empty() => Ok(ProductCreate {
                name: self.name.clone(),
                image: self.image.clone(),
                price,
                quantity,
                category: self.category.clone(),
                description: self.description.clone(),
                specifications: self.specifications.clone(),
                rating,
            }),
            _ => Err(errors),
        }
    }
}

/// Leading optionally-signed digits of `text`; the rest is ignored.
fn leading_whole_number(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value = rest[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            name: "Standing Desk".into(),
            image: "https://example.com/desk.jpg".into(),
            price: "299.50".into(),
            quantity: "0".into(),
            category: "Other".into(),
            description: "Height adjustable desk".into(),
            specifications: "Dual motor".into(),
            rating: "5".into(),
        }
    }

    #[test]
    fn valid_form_converts() {
        let created = filled().validate().unwrap();
        assert_eq!(created.name, "Standing Desk");
        assert_eq!(created.price, 299.5);
        assert_eq!(created.quantity, 0);
        assert_eq!(created.rating, 5.0);
    }

    #[test]
    fn blank_form_reports_every_field() {
        let mut form = ProductForm::default();
        assert_eq!(form.category, DEFAULT_CATEGORY);
        form.category = "  ".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 8);
        assert_eq!(errors.get("name"), Some("Product name is required"));
        assert_eq!(errors.get("image"), Some("Product image URL is required"));
        assert_eq!(errors.get("price"), Some("Valid price is required"));
        assert_eq!(errors.get("quantity"), Some("Valid quantity is required"));
        assert_eq!(errors.get("category"), Some("Category is required"));
        assert_eq!(errors.get("description"), Some("Description is required"));
        assert_eq!(errors.get("specifications"), Some("Specifications are required"));
        assert_eq!(errors.get("rating"), Some("Rating must be between 0 and 5"));
    }

    #[test]
    fn numeric_edges() {
        let zero_price = ProductForm { price: "0".into(), ..filled() };
        assert_eq!(
            zero_price.validate().unwrap_err().get("price"),
            Some("Valid price is required")
        );

        let negative_quantity = ProductForm { quantity: "-1".into(), ..filled() };
        assert!(negative_quantity.validate().unwrap_err().get("quantity").is_some());

        let word_quantity = ProductForm { quantity: "lots".into(), ..filled() };
        assert!(word_quantity.validate().unwrap_err().get("quantity").is_some());

        let bare_sign = ProductForm { quantity: "-".into(), ..filled() };
        assert!(bare_sign.validate().unwrap_err().get("quantity").is_some());

        let high_rating = ProductForm { rating: "5.01".into(), ..filled() };
        let errors = high_rating.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("rating"), Some("Rating must be between 0 and 5"));

        let zero_rating = ProductForm { rating: "0".into(), ..filled() };
        assert!(zero_rating.validate().is_ok());
    }

    #[test]
    fn quantity_keeps_leading_whole_number() {
        for (input, expected) in [("2.5", 2), ("3 units", 3), (" 7", 7), ("-0", 0)] {
            let form = ProductForm { quantity: input.into(), ..filled() };
            assert_eq!(form.validate().unwrap().quantity, expected, "input {input:?}");
        }

        let negative_fraction = ProductForm { quantity: "-1.5".into(), ..filled() };
        assert!(negative_fraction.validate().unwrap_err().get("quantity").is_some());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let form = ProductForm { name: String::new(), image: String::new(), ..filled() };
        let message = form.validate().unwrap_err().to_string();
        assert_eq!(
            message,
            "image: Product image URL is required; name: Product name is required"
        );
    }

    #[test]
    fn offered_categories_include_default() {
        assert!(CATEGORY_OPTIONS.contains(&DEFAULT_CATEGORY));
    }
}
