//! # Generic Actor Server
//!
//! The `ResourceActor` owns an in-memory collection of records and processes every
//! request sequentially in its own Tokio task, so the map needs no lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of records.
///
/// This is the "server" half: it owns the `store` and the receiving end of the channel.
/// Each record is kept with the sequence number it was created under so that `Query`
/// results come back in creation order.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// The loop exits once every client clone has been dropped.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, (u32, T)>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let seq = self.next_id;
                    let id = T::Id::from(seq);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), (seq, item));
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).map(|(_, item)| item.clone());
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Query { filter, respond_to } => {
                    let mut hits: Vec<&(u32, T)> = self
                        .store
                        .values()
                        .filter(|(_, item)| item.matches(&filter))
                        .collect();
                    hits.sort_by_key(|(seq, _)| *seq);
                    let items: Vec<T> = hits.into_iter().map(|(_, item)| item.clone()).collect();
                    debug!(entity_type, ?filter, count = items.len(), "Query");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some((_, item)) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some((_, item)) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some((_, item)) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
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
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u32,
        folder: String,
        body: String,
        pinned: bool,
    }

    #[derive(Debug)]
    struct NoteCreate {
        folder: String,
        body: String,
    }

    #[derive(Debug)]
    struct NoteUpdate {
        body: Option<String>,
    }

    #[derive(Debug)]
    struct InFolder(String);

    #[derive(Debug)]
    enum NoteAction {
        Pin,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("note body must not be empty")]
    struct EmptyBody;

    #[async_trait]
    impl ActorEntity for Note {
        type Id = u32;
        type Create = NoteCreate;
        type Update = NoteUpdate;
        type Filter = InFolder;
        type Action = NoteAction;
        type ActionResult = bool;
        type Context = ();
        type Error = EmptyBody;

        fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
            if params.body.is_empty() {
                return Err(EmptyBody);
            }
            Ok(Self {
                id,
                folder: params.folder,
                body: params.body,
                pinned: false,
            })
        }

        fn matches(&self, filter: &InFolder) -> bool {
            self.folder == filter.0
        }

        async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
            if let Some(body) = update.body {
                self.body = body;
            }
            Ok(())
        }

        async fn handle_action(
            &mut self,
            action: NoteAction,
            _ctx: &(),
        ) -> Result<bool, Self::Error> {
            match action {
                NoteAction::Pin => {
                    let changed = !self.pinned;
                    self.pinned = true;
                    Ok(changed)
                }
            }
        }
    }

    fn note(folder: &str, body: &str) -> NoteCreate {
        NoteCreate {
            folder: folder.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_query_returns_matches_in_creation_order() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let a = client.create(note("inbox", "first")).await.unwrap();
        client.create(note("archive", "elsewhere")).await.unwrap();
        let c = client.create(note("inbox", "second")).await.unwrap();
        let d = client.create(note("inbox", "third")).await.unwrap();

        let inbox = client.query(InFolder("inbox".into())).await.unwrap();
        let ids: Vec<u32> = inbox.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, c, d]);

        let empty = client.query(InFolder("drafts".into())).await.unwrap();
        assert!(empty.is_empty());
    }

    #[tokio::test]
    async fn test_update_action_and_delete() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(note("inbox", "draft")).await.unwrap();

        let updated = client
            .update(id, NoteUpdate { body: Some("final".into()) })
            .await
            .unwrap();
        assert_eq!(updated.body, "final");

        assert!(client.perform_action(id, NoteAction::Pin).await.unwrap());
        assert!(!client.perform_action(id, NoteAction::Pin).await.unwrap());

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());

        let again = client.delete(id).await;
        assert!(matches!(again, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejected_create_is_not_stored() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        tokio::spawn(actor.run(()));

        let result = client.create(note("inbox", "")).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let inbox = client.query(InFolder("inbox".into())).await.unwrap();
        assert!(inbox.is_empty());
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = ResourceActor::<Note>::new(10);
        let handle = tokio::spawn(actor.run(()));

        client.create(note("inbox", "bye")).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
