//! # Store Messages
//!
//! Message types exchanged between the [`StoreClient`](crate::StoreClient)
//! and the [`ItemStore`](crate::ItemStore) actor. One variant per store
//! operation; each carries a oneshot channel for the reply.

use crate::error::StoreError;
use crate::item::{Item, ItemDraft, ItemId, ItemPatch};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal request type sent to the store actor.
///
/// `Save` has no domain failure mode: the store always accepts a draft and
/// answers with the stored item carrying its freshly assigned id. `Get`
/// answers `None` for unknown ids rather than erroring; `Update` is the
/// only operation that reports [`StoreError::ItemNotFound`].
#[derive(Debug)]
pub enum StoreRequest {
    Save {
        draft: ItemDraft,
        respond_to: Response<Item>,
    },
    Get {
        id: ItemId,
        respond_to: Response<Option<Item>>,
    },
    List {
        respond_to: Response<Vec<Item>>,
    },
    Update {
        id: ItemId,
        patch: ItemPatch,
        respond_to: Response<Item>,
    },
    Clear {
        respond_to: Response<()>,
    },
}
