//! Durable persistence layer for items.
//!
//! # Responsibility
//! - Define the use-case oriented storage contract for items.
//! - Isolate SQLite query details from state orchestration.
//!
//! # Invariants
//! - Every successful write is durable before the call returns.
//! - Removing a missing id is a no-op, not an error.

pub mod item_store;
