//! ActorEntity trait implementation for the Cart aggregate.
//!
//! The merge and removal rules live on [`Cart`] itself; this impl only turns
//! out-of-range quantities into errors before handing over.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate, CartId};

impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn from_create_params(id: CartId, _params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id))
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::Add { product, quantity } => self
                .add(product, quantity)
                .map(CartActionResult::Add)
                .ok_or(CartError::InvalidQuantity(i64::from(quantity))),
            CartAction::Remove(id) => Ok(CartActionResult::Remove(self.remove(id))),
            CartAction::UpdateQuantity { id, quantity } => {
                let quantity_to_store = u32::try_from(quantity.max(0))
                    .map_err(|_| CartError::InvalidQuantity(quantity))?;
                Ok(CartActionResult::UpdateQuantity(
                    self.update_quantity(id, quantity_to_store),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductCreate, ProductId};

    fn keyboard() -> Product {
        Product::new(
            ProductId(4),
            ProductCreate {
                name: "Mechanical Keyboard".into(),
                image: "/mechanical-keyboard.png".into(),
                price: 129.99,
                quantity: 2,
                category: "Electronics".into(),
                description: "RGB keyboard".into(),
                specifications: "Cherry MX".into(),
                rating: 4.8,
            },
        )
    }

    #[test]
    fn add_zero_is_invalid() {
        let mut cart = Cart::from_create_params(CartId(1), CartCreate).unwrap();
        let err = cart
            .handle_action(CartAction::Add {
                product: keyboard(),
                quantity: 0,
            })
            .unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(0));
        assert!(cart.is_empty());
    }

    #[test]
    fn negative_update_removes() {
        let mut cart = Cart::from_create_params(CartId(1), CartCreate).unwrap();
        cart.handle_action(CartAction::Add {
            product: keyboard(),
            quantity: 2,
        })
        .unwrap();

        let result = cart
            .handle_action(CartAction::UpdateQuantity {
                id: ProductId(4),
                quantity: -5,
            })
            .unwrap();
        assert_eq!(result, CartActionResult::UpdateQuantity(None));
        assert!(cart.is_empty());
    }

    #[test]
    fn oversized_update_is_rejected() {
        let mut cart = Cart::from_create_params(CartId(1), CartCreate).unwrap();
        cart.handle_action(CartAction::Add {
            product: keyboard(),
            quantity: 1,
        })
        .unwrap();

        let too_many = i64::from(u32::MAX) + 1;
        let err = cart
            .handle_action(CartAction::UpdateQuantity {
                id: ProductId(4),
                quantity: too_many,
            })
            .unwrap_err();
        assert_eq!(err, CartError::InvalidQuantity(too_many));
        assert_eq!(cart.total_item_count(), 1);
    }
}
