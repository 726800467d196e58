//! ActorEntity trait implementation for the Product domain type.
//!
//! Creation runs the field checks on [`ProductCreate`]; invalid payloads are
//! rejected and never stored. Quantity actions follow the refusal policy
//! documented on [`ProductAction`].

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId};
use tracing::debug;
use validator::Validate;

impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, Self::Error> {
        params
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;
        Ok(Self::new(id, params))
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity)),
            ProductAction::SetQuantity(quantity) => {
                self.apply_quantity(quantity)?;
                Ok(ProductActionResult::SetQuantity(self.quantity))
            }
            ProductAction::AdjustQuantity(step) => {
                let target = i64::from(self.quantity)
                    .saturating_add(step)
                    .min(i64::from(u32::MAX));
                self.apply_quantity(target)?;
                Ok(ProductActionResult::AdjustQuantity(self.quantity))
            }
        }
    }
}

impl Product {
    fn apply_quantity(&mut self, quantity: i64) -> Result<(), ProductError> {
        if quantity <= 0 {
            debug!(id = %self.id, quantity, "Ignoring non-positive quantity");
            return Ok(());
        }
        self.quantity = u32::try_from(quantity).map_err(|_| ProductError::InvalidQuantity(quantity))?;
        Ok(())
    }
}
