//! # Item Store
//!
//! In-memory catalog store built on the actor model. A single [`ItemStore`]
//! task owns the item collection and the identity sequence, processing
//! requests sequentially over a channel. Callers interact through the
//! cheaply-clonable [`StoreClient`].
//!
//! ## Concurrency Model
//!
//! The original design this replaces kept the collection as process-wide
//! shared mutable state with no locking. Here the collection is owned
//! exclusively by the actor task: messages are processed one at a time, so
//! no `Mutex` or `RwLock` is needed and there are no data races. This is a
//! deliberate hardening, not a behavioral parity choice.
//!
//! ## Identity
//!
//! Ids come from a monotonically increasing counter that is never reset,
//! not even by [`StoreClient::clear`]. An id identifies exactly one item
//! for the lifetime of the process.

pub mod actor;
pub mod client;
pub mod error;
pub mod item;
pub mod message;
pub mod mock;

pub use actor::ItemStore;
pub use client::StoreClient;
pub use error::StoreError;
pub use item::{Item, ItemDraft, ItemId, ItemPatch};
pub use message::{Response, StoreRequest};
