//! # Generic Messages
//!
//! The request envelope exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the lifecycle this crate needs: entities are created,
/// read (singly or as the whole ordered collection) and mutated through
/// custom actions. Nothing is ever deleted, so there is no delete request.
///
/// - **Create**: builds a new entity from [`ActorEntity::Create`] and returns it.
/// - **Get**: fetches one entity by id.
/// - **List**: returns every entity in insertion order.
/// - **Action**: runs an [`ActorEntity::Action`] against one entity.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
