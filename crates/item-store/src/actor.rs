//! # Store Actor
//!
//! The server half of the store. [`ItemStore`] owns the item collection
//! and the identity sequence, and processes [`StoreRequest`] messages
//! sequentially in its own task.
//!
//! **Concurrency model**: one message at a time, exclusive ownership of
//! state within the task. No locks anywhere.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::item::{Item, ItemId};
use crate::message::StoreRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the item collection.
///
/// # Identity sequence
///
/// `next_id` starts at 1 and only ever increments. `Clear` empties the
/// collection but leaves the counter alone, so ids issued after a clear
/// are still strictly greater than every id issued before it. An item
/// only ever receives its id here, at save time; nothing else writes ids.
///
/// # Snapshot semantics
///
/// `Get` and `List` reply with clones. Callers never hold a reference
/// into the store's state, so a caller mutating its copy cannot corrupt
/// the collection. `List` iterates the underlying `HashMap`, so its order
/// is unspecified and in particular not insertion order.
pub struct ItemStore {
    receiver: mpsc::Receiver<StoreRequest>,
    items: HashMap<ItemId, Item>,
    next_id: u64,
}

impl ItemStore {
    /// Creates a new `ItemStore` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel
    ///   is full, calls on the client wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `ItemStore` instance (the server), which must be run via `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared freely.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            items: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes (i.e. until every client has been dropped).
    pub async fn run(mut self) {
        info!("Item store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Save { draft, respond_to } => {
                    debug!(?draft, "Save");
                    let id = ItemId::from(self.next_id);
                    self.next_id += 1;

                    let item = Item::from_draft(id, draft);
                    self.items.insert(id, item.clone());
                    info!(%id, size = self.items.len(), "Saved");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::Get { id, respond_to } => {
                    let item = self.items.get(&id).cloned();
                    let found = item.is_some();
                    debug!(%id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                StoreRequest::List { respond_to } => {
                    debug!(size = self.items.len(), "List");
                    let snapshot: Vec<Item> = self.items.values().cloned().collect();
                    let _ = respond_to.send(Ok(snapshot));
                }
                StoreRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(%id, ?patch, "Update");
                    if let Some(item) = self.items.get_mut(&id) {
                        item.apply_patch(patch);
                        info!(%id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(%id, "Not found");
                        let _ = respond_to.send(Err(StoreError::ItemNotFound(id)));
                    }
                }
                StoreRequest::Clear { respond_to } => {
                    // Empties the collection only. next_id survives so ids
                    // stay unique across resets.
                    let dropped = self.items.len();
                    self.items.clear();
                    info!(dropped, next_id = self.next_id, "Cleared");
                    let _ = respond_to.send(Ok(()));
                }
            }
        }

        info!(size = self.items.len(), "Item store shut down");
    }
}
