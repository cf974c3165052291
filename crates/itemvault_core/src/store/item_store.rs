//! Item store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide durable CRUD over the canonical `items` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation is its own atomic unit; there is no batch API.
//! - `add` returns the store-assigned id; callers never pick ids.
//! - `remove` of an absent id succeeds without touching any row.

use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::item::{Item, ItemId};
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error for item persistence operations.
#[derive(Debug)]
pub enum StoreError {
    /// Backing medium could not be opened or bootstrapped. Fatal to the
    /// store instance.
    Unavailable(DbError),
    /// An insert or delete failed at the I/O level.
    Write(rusqlite::Error),
    /// A read-back of persisted items failed at the I/O level.
    Read(rusqlite::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::Write(err) => write!(f, "storage write failed: {err}"),
            Self::Read(err) => write!(f, "storage read failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Unavailable(err) => Some(err),
            Self::Write(err) => Some(err),
            Self::Read(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Unavailable(value)
    }
}

/// Storage interface for item CRUD operations.
///
/// There is deliberately no update operation and no `NotFound` error:
/// items are immutable once created, and deletion is idempotent.
pub trait ItemStore {
    /// Inserts a new item and returns its store-assigned id.
    fn add(&mut self, name: &str) -> StoreResult<ItemId>;
    /// Returns all current items in insertion order, fully materialized.
    fn list_all(&self) -> StoreResult<Vec<Item>>;
    /// Deletes the item with `id` if present; missing ids are a no-op.
    fn remove(&mut self, id: ItemId) -> StoreResult<()>;
}

/// SQLite-backed item store.
///
/// Owns its connection: the storage handle is acquired in the constructors
/// and released when the store is dropped.
#[derive(Debug)]
pub struct SqliteItemStore {
    conn: Connection,
}

impl SqliteItemStore {
    /// Opens (or creates) the database file at `path` and applies the schema.
    ///
    /// Repeated opens of the same file are idempotent; the schema is never
    /// duplicated.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = open_db(path)?;
        Ok(Self { conn })
    }

    /// Opens a fresh in-memory database. Used by tests and ephemeral hosts.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = open_db_in_memory()?;
        Ok(Self { conn })
    }
}

impl ItemStore for SqliteItemStore {
    fn add(&mut self, name: &str) -> StoreResult<ItemId> {
        match self
            .conn
            .execute("INSERT INTO items (name) VALUES (?1);", [name])
        {
            Ok(_) => {
                let id = self.conn.last_insert_rowid();
                info!(
                    "event=item_add module=store status=ok id={id} name_len={}",
                    name.len()
                );
                Ok(id)
            }
            Err(err) => {
                error!("event=item_add module=store status=error error={err}");
                Err(StoreError::Write(err))
            }
        }
    }

    fn list_all(&self) -> StoreResult<Vec<Item>> {
        match collect_items(&self.conn) {
            Ok(items) => {
                info!(
                    "event=item_list module=store status=ok count={}",
                    items.len()
                );
                Ok(items)
            }
            Err(err) => {
                error!("event=item_list module=store status=error error={err}");
                Err(StoreError::Read(err))
            }
        }
    }

    fn remove(&mut self, id: ItemId) -> StoreResult<()> {
        match self
            .conn
            .execute("DELETE FROM items WHERE id = ?1;", [id])
        {
            Ok(changed) => {
                info!("event=item_remove module=store status=ok id={id} changed={changed}");
                Ok(())
            }
            Err(err) => {
                error!("event=item_remove module=store status=error id={id} error={err}");
                Err(StoreError::Write(err))
            }
        }
    }
}

fn collect_items(conn: &Connection) -> rusqlite::Result<Vec<Item>> {
    let mut stmt = conn.prepare("SELECT id, name FROM items ORDER BY id ASC;")?;
    let mut rows = stmt.query([])?;
    let mut items = Vec::new();
    while let Some(row) = rows.next()? {
        items.push(Item {
            id: row.get("id")?,
            name: row.get("name")?,
        });
    }
    Ok(items)
}
