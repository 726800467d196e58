//! # Lifecycle
//!
//! Start-up and shutdown of the storefront: configuration, the
//! [`Storefront`] container that owns both actors, and tracing setup.

pub mod config;
pub mod error;
pub mod storefront;
pub mod tracing;

pub use config::*;
pub use error::*;
pub use storefront::*;
pub use self::tracing::setup_tracing;
