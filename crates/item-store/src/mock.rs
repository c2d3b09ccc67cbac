//! # Mock Store
//!
//! Test support for code that talks to the store through a
//! [`StoreClient`]. Instead of spawning a real [`ItemStore`](crate::ItemStore),
//! tests get a client whose requests land on a channel they control: they
//! inspect each message, assert it is the expected one, and reply through
//! the carried oneshot. This makes collaborator tests deterministic and
//! lets them assert which messages were — or were not — sent.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::item::{Item, ItemDraft, ItemId, ItemPatch};
use crate::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client(
    buffer_size: usize,
) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Asserts that the next message is a Save request.
pub async fn expect_save(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ItemDraft, oneshot::Sender<Result<Item, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Save { draft, respond_to }) => Some((draft, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is a Get request.
pub async fn expect_get(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ItemId, oneshot::Sender<Result<Option<Item>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Asserts that the next message is an Update request.
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(ItemId, ItemPatch, oneshot::Sender<Result<Item, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Update {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_save() {
        let (client, mut receiver) = create_mock_client(10);

        let save_task = tokio::spawn(async move {
            let draft = ItemDraft {
                name: "widget".to_string(),
                price: 250,
                quantity: 4,
            };
            client.save(draft).await
        });

        let (draft, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(draft.name, "widget");
        responder
            .send(Ok(Item::from_draft(ItemId::from(1), draft)))
            .unwrap();

        let saved = save_task.await.unwrap().unwrap();
        assert_eq!(saved.id, ItemId::from(1));
        assert_eq!(saved.price, 250);
    }

    #[tokio::test]
    async fn test_mock_client_reports_closed_store() {
        let (client, receiver) = create_mock_client(10);
        drop(receiver);

        let result = client.find_by_id(ItemId::from(1)).await;
        assert!(matches!(result, Err(StoreError::StoreClosed)));
    }
}
