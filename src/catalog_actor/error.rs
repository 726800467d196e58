//! Error types for the catalog actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The quantity cannot be represented as on-hand stock.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// The creation payload broke a field constraint.
    #[error("Product validation error: {0}")]
    Validation(String),

    /// The catalog actor is not running.
    #[error("Catalog store is not available")]
    StoreUnavailable,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                ProductError::StoreUnavailable
            }
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => match other.downcast_entity::<ProductError>() {
                Ok(entity_error) => entity_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
        }
    }
}
