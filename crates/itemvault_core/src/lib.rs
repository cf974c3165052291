//! Core persistence and synchronization logic for ItemVault.
//! This crate is the single source of truth for item invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod state;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId};
pub use state::item_state::{ItemState, SubscriptionId, DEFAULT_SEED_NAMES};
pub use store::item_store::{ItemStore, SqliteItemStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
