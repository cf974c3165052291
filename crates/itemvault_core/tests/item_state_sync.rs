use itemvault_core::{Item, ItemState, SqliteItemStore, DEFAULT_SEED_NAMES};
use std::sync::{Arc, Mutex};

#[test]
fn full_lifecycle_scenario_over_empty_store() {
    let store = SqliteItemStore::open_in_memory().unwrap();
    let state = ItemState::new(store).unwrap();

    let seeded = state.current_items();
    assert_eq!(seeded.len(), 5);
    for (item, name) in seeded.iter().zip(DEFAULT_SEED_NAMES) {
        assert_eq!(item.name, name);
    }

    let added = state.add("X").unwrap();
    assert_eq!(added.id, 6);
    let items = state.current_items();
    assert_eq!(items.len(), 6);
    assert_eq!(items[5], Item::new(6, "X"));

    state.remove(6).unwrap();
    assert_eq!(state.current_items(), seeded);

    state.remove(6).unwrap();
    assert_eq!(state.current_items(), seeded);
}

#[test]
fn add_then_current_items_needs_no_refresh() {
    let state = ItemState::new(SqliteItemStore::open_in_memory().unwrap()).unwrap();

    let added = state.add("fresh").unwrap();

    let items = state.current_items();
    assert_eq!(items.last(), Some(&added));
}

#[test]
fn interleaved_adds_and_removes_keep_add_order() {
    let state = ItemState::with_seed(SqliteItemStore::open_in_memory().unwrap(), &[]).unwrap();

    let a = state.add("a").unwrap();
    let b = state.add("b").unwrap();
    state.remove(a.id).unwrap();
    let c = state.add("c").unwrap();
    state.remove(9999).unwrap();

    assert_eq!(state.current_items(), vec![b, c]);
}

#[test]
fn seeding_never_runs_twice_for_the_same_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.db");

    let first = ItemState::new(SqliteItemStore::open(&path).unwrap()).unwrap();
    let seeded = first.current_items();
    assert_eq!(seeded.len(), 5);
    first.remove(seeded[0].id).unwrap();
    drop(first);

    let second = ItemState::new(SqliteItemStore::open(&path).unwrap()).unwrap();
    let items = second.current_items();
    assert_eq!(items.len(), 4, "non-empty storage must not be reseeded");
    assert_eq!(items, seeded[1..].to_vec());
}

#[test]
fn refresh_reconciles_out_of_band_store_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.db");

    let state = Arc::new(ItemState::new(SqliteItemStore::open(&path).unwrap()).unwrap());
    let victim = state.current_items()[0].clone();

    // Delete behind the state container's back.
    let side_conn = rusqlite::Connection::open(&path).unwrap();
    side_conn
        .execute("DELETE FROM items WHERE id = ?1;", [victim.id])
        .unwrap();

    // Stale until reconciled.
    assert_eq!(state.current_items().len(), 5);

    let count = Arc::clone(&state)
        .refresh()
        .recv()
        .expect("refresh worker must signal completion")
        .unwrap();
    assert_eq!(count, 4);

    let items = state.current_items();
    assert_eq!(items.len(), 4);
    assert!(items.iter().all(|item| item.id != victim.id));
}

#[test]
fn every_successful_mutation_emits_one_snapshot_in_order() {
    let state = Arc::new(
        ItemState::with_seed(SqliteItemStore::open_in_memory().unwrap(), &["base"]).unwrap(),
    );

    let emissions: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&emissions);
    state.subscribe(move |snapshot| {
        let names = snapshot.iter().map(|item| item.name.clone()).collect();
        sink.lock().unwrap().push(names);
    });

    let added = state.add("second").unwrap();
    state.remove(added.id).unwrap();
    Arc::clone(&state).refresh().recv().unwrap().unwrap();

    let seen = emissions.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![
            vec!["base".to_string(), "second".to_string()],
            vec!["base".to_string()],
            vec!["base".to_string()],
        ]
    );
}
