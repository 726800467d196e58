//! Error types for the cart actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The client points at a cart that was never opened.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// The quantity is zero on add, or too large to store.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The cart actor is not running.
    #[error("Cart store is not available")]
    StoreUnavailable,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                CartError::StoreUnavailable
            }
            FrameworkError::NotFound(id) => CartError::CartNotFound(id),
            other => match other.downcast_entity::<CartError>() {
                Ok(entity_error) => entity_error,
                Err(other) => CartError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
