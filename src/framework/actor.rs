//! # Generic Actor Server
//!
//! The `ResourceActor` owns one collection of entities and processes requests
//! against it sequentially, so the collection needs no lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the state (`store`)
/// and the receiver end of the channel. Every request runs to completion before
/// the next one is taken off the channel, which makes each operation atomic
/// from the caller's point of view.
///
/// The store is an [`IndexMap`] so listing returns entities in the order they
/// were created.
///
/// ## Operations
///
/// * **Create**: mints the next id from the `next_id` counter, builds the
///   entity with `T::from_create_params`, inserts it and returns a clone.
///   Ids are never reused, including after a rejected create. Once the
///   counter is spent every create answers [`FrameworkError::IdsExhausted`].
/// * **Get**: returns a clone of the entity, or `None`.
/// * **List**: returns clones of every entity in insertion order.
/// * **Action**: calls `handle_action` on the entity and returns its result.
///   An unknown id answers [`FrameworkError::NotFound`].
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when
    /// it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Product" instead of "storefront::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(following) = self.next_id.checked_add(1) else {
                        warn!(entity_type, "Id space exhausted");
                        let _ = respond_to.send(Err(FrameworkError::IdsExhausted));
                        continue;
                    };
                    let id = T::Id::from(self.next_id);
                    self.next_id = following;

                    match T::from_create_params(id.clone(), params) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action)
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        label: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        label: String,
    }

    #[derive(Debug)]
    enum TallyAction {
        Bump,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("empty label")]
    struct EmptyLabel;

    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyCreate;
        type Action = TallyAction;
        type ActionResult = u32;
        type Error = EmptyLabel;

        fn from_create_params(id: u32, params: TallyCreate) -> Result<Self, Self::Error> {
            if params.label.is_empty() {
                return Err(EmptyLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                count: 0,
            })
        }

        fn handle_action(&mut self, action: TallyAction) -> Result<u32, Self::Error> {
            match action {
                TallyAction::Bump => {
                    self.count += 1;
                    Ok(self.count)
                }
            }
        }
    }

    #[tokio::test]
    async fn test_create_list_and_action() {
        let (actor, client) = ResourceActor::<Tally>::new(8);
        let handle = tokio::spawn(actor.run());

        let first = client.create(TallyCreate { label: "b".into() }).await.unwrap();
        let second = client.create(TallyCreate { label: "a".into() }).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        assert_eq!(client.perform_action(1, TallyAction::Bump).await.unwrap(), 1);
        assert_eq!(client.perform_action(1, TallyAction::Bump).await.unwrap(), 2);

        // Insertion order, not key or label order
        let labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["b", "a"]);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_reuse_id() {
        let (actor, client) = ResourceActor::<Tally>::new(8);
        tokio::spawn(actor.run());

        let err = client.create(TallyCreate { label: String::new() }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let created = client.create(TallyCreate { label: "ok".into() }).await.unwrap();
        assert_eq!(created.id, 2);
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_exhausted_counter_refuses_create() {
        let (mut actor, client) = ResourceActor::<Tally>::new(8);
        actor.next_id = u32::MAX;
        tokio::spawn(actor.run());

        let err = client.create(TallyCreate { label: "late".into() }).await.unwrap_err();
        assert!(matches!(err, FrameworkError::IdsExhausted));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_action_on_unknown_id_is_not_found() {
        let (actor, client) = ResourceActor::<Tally>::new(8);
        tokio::spawn(actor.run());

        let err = client.perform_action(42, TallyAction::Bump).await.unwrap_err();
        assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));
        assert!(client.get(42).await.unwrap().is_none());
    }
}
