//! # Store Errors
//!
//! The single error type shared by the store actor and its client.

use crate::item::ItemId;

/// Errors surfaced by store operations.
///
/// `ItemNotFound` is the only domain error the store produces; callers are
/// required to handle it (or the `None` from a lookup) before rendering
/// anything. The channel variants signal a dropped actor or response
/// channel and only occur during shutdown or after a task panic.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
}
