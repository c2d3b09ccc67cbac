//! # Store Client
//!
//! The caller-facing half of the store. Forwards requests to the
//! [`ItemStore`](crate::ItemStore) actor over a channel and awaits the
//! reply on a oneshot. Cheap to clone; holds only a sender.

use crate::error::StoreError;
use crate::item::{Item, ItemDraft, ItemId, ItemPatch};
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe async client for the item store.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Persists a draft, returning the stored item with its assigned id.
    ///
    /// Always succeeds at the domain level; the only failure modes are
    /// channel-lifecycle ones.
    pub async fn save(&self, draft: ItemDraft) -> Result<Item, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Save { draft, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Looks an item up by id. `None` means the id was never issued in
    /// this process lifetime, or the store has been cleared since.
    pub async fn find_by_id(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Returns a snapshot of every stored item. Order is unspecified.
    pub async fn find_all(&self) -> Result<Vec<Item>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Overwrites name/price/quantity on an existing item.
    ///
    /// # Errors
    ///
    /// [`StoreError::ItemNotFound`] when the id is absent from the store.
    pub async fn update(&self, id: ItemId, patch: ItemPatch) -> Result<Item, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Update {
                id,
                patch,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Removes every item. The identity sequence is deliberately left
    /// untouched so ids are never reused across resets.
    pub async fn clear(&self) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Clear { respond_to })
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }
}
