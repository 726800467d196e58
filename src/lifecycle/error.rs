use crate::cart_actor::CartError;
use crate::catalog_actor::ProductError;
use thiserror::Error;

/// Errors raised while starting or stopping a storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Catalog(#[from] ProductError),

    #[error(transparent)]
    Cart(#[from] CartError),

    /// An actor task panicked or was cancelled before shutdown finished.
    #[error("Actor task failed: {0}")]
    ActorPanicked(String),
}
