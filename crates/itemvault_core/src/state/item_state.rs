//! Reactive item state container.
//!
//! # Responsibility
//! - Mediate between the presentation layer and the item store.
//! - Seed default items exactly once into an empty store.
//! - Publish one snapshot per successful mutation to all subscribers.
//!
//! # Invariants
//! - Store writes happen before the snapshot is touched; a failed write
//!   leaves the snapshot unchanged and resurfaces the error.
//! - New ids always come from the store; the snapshot never guesses one.
//! - Seeding runs iff the store is empty at construction and never again
//!   once any item exists.

use crate::model::item::{Item, ItemId};
use crate::store::item_store::{ItemStore, StoreResult};
use log::info;
use std::collections::BTreeMap;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// Default names inserted into an empty store on first construction.
pub const DEFAULT_SEED_NAMES: [&str; 5] =
    ["Notebook", "Backpack", "Water Bottle", "Headphones", "Charger"];

/// Handle returned by [`ItemState::subscribe`], used to unsubscribe later.
pub type SubscriptionId = u64;

type SnapshotHandler = Box<dyn FnMut(&[Item]) + Send>;

struct Inner<S: ItemStore> {
    store: S,
    snapshot: Vec<Item>,
    subscribers: BTreeMap<SubscriptionId, SnapshotHandler>,
    next_subscription: SubscriptionId,
}

impl<S: ItemStore> Inner<S> {
    fn notify(&mut self) {
        for handler in self.subscribers.values_mut() {
            handler(&self.snapshot);
        }
    }
}

/// Single in-process source of truth for current items.
///
/// The whole inner state sits behind one mutex, so `add`, `remove` and
/// `refresh` apply strictly in the order callers acquire the lock. The
/// state container is the only caller of its store.
pub struct ItemState<S: ItemStore> {
    inner: Mutex<Inner<S>>,
}

impl<S: ItemStore> ItemState<S> {
    /// Constructs the state container with the default seed list.
    pub fn new(store: S) -> StoreResult<Self> {
        Self::with_seed(store, &DEFAULT_SEED_NAMES)
    }

    /// Constructs the state container with a caller-provided seed list.
    ///
    /// Seeds `seed` in order iff the store is empty, then loads the initial
    /// snapshot. Any store failure aborts construction; callers never get a
    /// container wrapping an unusable store.
    pub fn with_seed(mut store: S, seed: &[&str]) -> StoreResult<Self> {
        let existing = store.list_all()?;
        let snapshot = if existing.is_empty() {
            let mut seeded = Vec::with_capacity(seed.len());
            for name in seed {
                let id = store.add(name)?;
                seeded.push(Item::new(id, *name));
            }
            info!(
                "event=state_seed module=state status=ok count={}",
                seeded.len()
            );
            seeded
        } else {
            info!(
                "event=state_seed module=state status=skip existing={}",
                existing.len()
            );
            existing
        };

        Ok(Self {
            inner: Mutex::new(Inner {
                store,
                snapshot,
                subscribers: BTreeMap::new(),
                next_subscription: 0,
            }),
        })
    }

    /// Returns the latest reconciled snapshot without touching the store.
    pub fn current_items(&self) -> Vec<Item> {
        self.lock().snapshot.clone()
    }

    /// Persists a new item, appends it to the snapshot and notifies
    /// subscribers.
    ///
    /// The appended entry carries the id the store assigned, so the
    /// snapshot can never hold a guessed id that later collides.
    pub fn add(&self, name: &str) -> StoreResult<Item> {
        let mut inner = self.lock();
        let id = inner.store.add(name)?;
        let item = Item::new(id, name);
        inner.snapshot.push(item.clone());
        inner.notify();
        Ok(item)
    }

    /// Deletes an item by id, drops it from the snapshot and notifies
    /// subscribers.
    ///
    /// Removing an id that no longer exists is still a successful
    /// (idempotent) mutation. On store failure the snapshot is untouched
    /// and no notification is emitted.
    pub fn remove(&self, id: ItemId) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.store.remove(id)?;
        inner.snapshot.retain(|item| item.id != id);
        inner.notify();
        Ok(())
    }

    /// Re-reads the full list from the store, replaces the snapshot
    /// wholesale and notifies subscribers. Returns the reconciled count.
    ///
    /// This is the synchronous form; presentation layers normally call
    /// [`ItemState::refresh`] instead.
    pub fn refresh_blocking(&self) -> StoreResult<usize> {
        let mut inner = self.lock();
        let items = inner.store.list_all()?;
        let count = items.len();
        inner.snapshot = items;
        inner.notify();
        info!("event=state_refresh module=state status=ok count={count}");
        Ok(count)
    }

    /// Registers a handler invoked with the new snapshot after every
    /// successful mutation, in mutation-completion order.
    pub fn subscribe(&self, handler: impl FnMut(&[Item]) + Send + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = inner.next_subscription;
        inner.next_subscription += 1;
        inner.subscribers.insert(id, Box::new(handler));
        id
    }

    /// Removes a subscription. Returns whether it was still registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.lock().subscribers.remove(&id).is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Inner<S>> {
        // A subscriber panic can poison the lock mid-notify; the snapshot
        // is already consistent at that point, so recover the guard.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: ItemStore + Send + 'static> ItemState<S> {
    /// Reconciles against the store on a background thread.
    ///
    /// Never blocks the calling thread; completion (count or error) is
    /// signaled through the returned channel once the snapshot has been
    /// replaced and subscribers notified. Callers hold the state in an
    /// `Arc` and pass a clone here.
    pub fn refresh(self: Arc<Self>) -> Receiver<StoreResult<usize>> {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // Receiver may be dropped by a caller that does not wait.
            let _ = tx.send(self.refresh_blocking());
        });
        rx
    }
}
