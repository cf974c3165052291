//! Reactive in-memory synchronization layer.
//!
//! # Responsibility
//! - Own the authoritative in-process view of items.
//! - Keep that view consistent with durable storage and republish it to
//!   subscribers after every successful mutation.
//!
//! # Invariants
//! - The cached snapshot is only authoritative between reconciliations; the
//!   store owns the durable records.
//! - Mutations apply in issue order and never interleave.

pub mod item_state;
