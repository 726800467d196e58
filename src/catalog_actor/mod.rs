//! # Catalog Actor
//!
//! The product catalog store: the authoritative, insertion-ordered list of
//! products and their on-hand quantities.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`seed`] - the default catalog
//! - [`new()`] - factory that creates the actor and its raw client
//!
//! ## Usage
//!
//! ```rust
//! use storefront::catalog_actor;
//! use storefront::clients::CatalogClient;
//! use storefront::model::ProductCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = catalog_actor::new(32);
//!     let catalog = CatalogClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let lamp = catalog
//!         .add_product(ProductCreate {
//!             name: "Desk Lamp".to_string(),
//!             image: "/modern-desk-lamp.png".to_string(),
//!             price: 29.99,
//!             quantity: 12,
//!             category: "Lighting".to_string(),
//!             description: "LED desk lamp".to_string(),
//!             specifications: "USB charging".to_string(),
//!             rating: 4.7,
//!         })
//!         .await?;
//!
//!     catalog.set_quantity(lamp.id, 0).await?; // ignored
//!     assert_eq!(catalog.check_stock(lamp.id).await?, 12);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;
pub mod seed;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Product;

/// Creates a new catalog actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
