//! # ActorEntity Trait
//!
//! The contract a resource type (Product, Cart, ...) implements to be owned by a
//! [`ResourceActor`](crate::framework::ResourceActor). It names the id type, the
//! creation payload, the custom actions and their results, and the error type.
//!
//! # Architecture Note
//! The actor loop is written once against this trait; every store in the crate
//! reuses it. Associated types keep payloads apart at compile time: a
//! `ProductCreate` can never be sent to the cart actor.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from `u32` so the actor can mint ids from its counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Enum of resource-specific operations (e.g. `SetQuantity`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum per actor rather than one per action; clients match on a
    /// single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from a freshly minted id and the payload.
    ///
    /// Returning an error rejects the create; nothing is stored and the id is
    /// not reused.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Handle a custom resource-specific action against this entity.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
