//! # Item Model
//!
//! Pure data structures for the catalog: the stored [`Item`], its
//! [`ItemId`], and the two DTOs that cross the store boundary.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for items.
///
/// Assigned exactly once, by the store, when a draft is saved. Ids are
/// never reused; the sequence outlives [`clear`](crate::StoreClient::clear).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u64);

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    // Bare number: the id appears verbatim in URL paths.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog item as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

impl Item {
    /// Builds the stored item from the id the store assigned and the
    /// submitted draft.
    pub fn from_draft(id: ItemId, draft: ItemDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            quantity: draft.quantity,
        }
    }

    /// Overwrites the mutable fields from a patch. The id is untouched.
    pub fn apply_patch(&mut self, patch: ItemPatch) {
        self.name = patch.name;
        self.price = patch.price;
        self.quantity = patch.quantity;
    }
}

/// Candidate item assembled from the create form. Carries no id; only the
/// store hands those out.
///
/// The store enforces no constraints on these fields. Anything that
/// decoded is accepted.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}

/// Full-overwrite update payload for an existing item.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemPatch {
    pub name: String,
    pub price: i64,
    pub quantity: i64,
}
