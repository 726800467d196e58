//! # Cart Actor
//!
//! The cart store. Each [`Cart`] is one entity; a storefront session opens one
//! cart at start-up and binds a [`CartClient`](crate::clients::CartClient) to it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`new()`] - factory that creates the actor and its raw client

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Cart;

/// Creates a new cart actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Cart>, ResourceClient<Cart>) {
    ResourceActor::new(buffer_size)
}
