//! Domain model for persisted items.
//!
//! # Responsibility
//! - Define the canonical data structure shared by store and state layers.
//!
//! # Invariants
//! - Every item is identified by a stable store-assigned `id`.
//! - Deletion is a hard delete; ids are never reassigned afterwards.

pub mod item;
