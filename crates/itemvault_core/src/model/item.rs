//! Item domain model.
//!
//! # Responsibility
//! - Define the persisted record managed by store and state layers.
//!
//! # Invariants
//! - `id` is assigned by the store, is unique, and is never reused.
//! - Items are immutable once created; rename is out of scope.

use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the store on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ItemId = i64;

/// A persisted named item.
///
/// The store assigns `id` on insert; callers never pick ids themselves.
/// `name` is expected to be non-empty by presentation-layer contract, but
/// the core does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned stable id, monotonically increasing.
    pub id: ItemId,
    /// Display name supplied at creation time.
    pub name: String,
}

impl Item {
    /// Builds an item from a store-assigned id and its name.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
