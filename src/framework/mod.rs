//! Generic resource-actor framework.
//!
//! Each store in the crate is a [`ResourceActor`] owning a keyed, insertion
//! ordered collection of [`ActorEntity`] values, reached through a cloneable
//! [`ResourceClient`].
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns the collection
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
