use ticklist_core::{Filter, MemoryStorage, StoreConfig, TodoId, TodoStore, ValidationError};

const SLOT: &str = "todo-storage";

fn create_test_store() -> (TodoStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    let store = TodoStore::open(storage.clone(), SLOT, StoreConfig::default());
    (store, storage)
}

/// Builds a store holding `[active, completed, active]`.
fn create_mixed_store() -> (TodoStore<MemoryStorage>, [TodoId; 3]) {
    let (mut store, _storage) = create_test_store();
    let a = store.add_todo("Buy milk").unwrap();
    let b = store.add_todo("Walk dog").unwrap();
    let c = store.add_todo("Write report").unwrap();
    store.toggle_complete(b);
    (store, [a, b, c])
}

#[test]
fn test_add_todo() {
    let (mut store, _storage) = create_test_store();

    let id = store.add_todo("Buy milk").unwrap();

    assert_eq!(store.items().len(), 1);
    let item = &store.items()[0];
    assert_eq!(item.id, id);
    assert_eq!(item.text, "Buy milk");
    assert!(!item.completed);
}

#[test]
fn test_add_rejects_short_or_blank_text() {
    let (mut store, _storage) = create_test_store();

    assert_eq!(store.add_todo(""), Err(ValidationError::Empty));
    assert_eq!(store.add_todo("a"), Err(ValidationError::TooShort { min: 2 }));
    assert_eq!(store.add_todo("    "), Err(ValidationError::Empty));

    assert!(store.items().is_empty());
}

#[test]
fn test_min_text_chars_is_configurable() {
    let config = StoreConfig { min_text_chars: 5 };
    let mut store = TodoStore::open(MemoryStorage::new(), SLOT, config);

    assert!(store.add_todo("tea").is_err());
    assert!(store.add_todo("coffee").is_ok());
}

#[test]
fn test_add_appends_in_order() {
    let (store, ids) = create_mixed_store();

    let order: Vec<TodoId> = store.items().iter().map(|item| item.id).collect();
    assert_eq!(order, ids.to_vec());
}

#[test]
fn test_toggle_complete() {
    let (mut store, [a, b, c]) = create_mixed_store();

    assert!(store.toggle_complete(a));

    assert!(store.get(a).unwrap().completed);
    assert!(store.get(b).unwrap().completed);
    assert!(!store.get(c).unwrap().completed);
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let (mut store, _ids) = create_mixed_store();
    let before = store.state().clone();

    assert!(!store.toggle_complete(TodoId::new(0)));

    assert_eq!(store.state(), &before);
}

#[test]
fn test_delete_todo() {
    let (mut store, [a, b, c]) = create_mixed_store();

    assert!(store.delete_todo(b));
    assert!(!store.delete_todo(b));

    let order: Vec<TodoId> = store.items().iter().map(|item| item.id).collect();
    assert_eq!(order, vec![a, c]);
}

#[test]
fn test_edit_todo_allows_empty_text() {
    let (mut store, [a, _, _]) = create_mixed_store();

    assert!(store.edit_todo(a, ""));

    assert_eq!(store.items().len(), 3);
    assert_eq!(store.get(a).unwrap().text, "");
}

#[test]
fn test_edit_unknown_id_is_noop() {
    let (mut store, _ids) = create_mixed_store();
    let before = store.state().clone();

    assert!(!store.edit_todo(TodoId::new(0), "Ghost"));

    assert_eq!(store.state(), &before);
}

#[test]
fn test_clear_completed_preserves_order() {
    let (mut store, [a, b, c]) = create_mixed_store();
    store.toggle_complete(c);

    let removed = store.clear_completed();

    assert_eq!(removed, 2);
    assert_eq!(store.items().len(), 1);
    assert_eq!(store.items()[0].id, a);
    assert!(store.get(b).is_none());
}

#[test]
fn test_toggle_all_from_mixed() {
    let (mut store, _ids) = create_mixed_store();

    store.toggle_all();
    assert!(store.items().iter().all(|item| item.completed));

    store.toggle_all();
    assert!(store.items().iter().all(|item| !item.completed));
}

#[test]
fn test_toggle_all_ignores_filter() {
    let (mut store, _ids) = create_mixed_store();
    store.set_filter(Filter::Completed);

    store.toggle_all();

    assert_eq!(store.active_count(), 0);
    assert_eq!(store.visible_items().len(), 3);
}

#[test]
fn test_filters() {
    let (mut store, [a, b, c]) = create_mixed_store();

    store.set_filter(Filter::Active);
    let active: Vec<TodoId> = store.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(active, vec![a, c]);

    store.set_filter(Filter::Completed);
    let completed: Vec<TodoId> = store.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(completed, vec![b]);

    store.set_filter(Filter::All);
    let all: Vec<TodoId> = store.visible_items().iter().map(|item| item.id).collect();
    assert_eq!(all, vec![a, b, c]);

    // Filtering never drops stored items
    assert_eq!(store.items().len(), 3);
}

#[test]
fn test_counts() {
    let (store, _ids) = create_mixed_store();
    assert_eq!(store.active_count(), 2);
    assert_eq!(store.completed_count(), 1);
    assert!(!store.all_completed());
}

#[test]
fn test_state_survives_reopen() {
    let (mut store, storage) = create_test_store();
    let a = store.add_todo("Buy milk").unwrap();
    let b = store.add_todo("Walk dog").unwrap();
    store.toggle_complete(b);
    store.edit_todo(a, "Buy oat milk");
    store.set_filter(Filter::Active);

    let reopened = TodoStore::open(storage, SLOT, StoreConfig::default());

    assert_eq!(reopened.state(), store.state());
    assert_eq!(reopened.filter(), Filter::Active);
}

#[test]
fn test_every_mutation_is_saved() {
    let (mut store, storage) = create_test_store();
    let reopen = || TodoStore::open(storage.clone(), SLOT, StoreConfig::default());

    let a = store.add_todo("Buy milk").unwrap();
    assert_eq!(reopen().items().len(), 1);

    store.toggle_complete(a);
    assert!(reopen().get(a).unwrap().completed);

    store.clear_completed();
    assert!(reopen().items().is_empty());

    store.set_filter(Filter::Completed);
    assert_eq!(reopen().filter(), Filter::Completed);
}

#[test]
fn test_corrupt_slot_starts_empty() {
    use ticklist_core::Storage;

    let storage = MemoryStorage::new();
    storage.write_slot(SLOT, "{not json").unwrap();

    let mut store = TodoStore::open(storage.clone(), SLOT, StoreConfig::default());
    assert!(store.items().is_empty());
    assert_eq!(store.filter(), Filter::All);

    // The next change overwrites the corrupt snapshot
    store.add_todo("Fresh start").unwrap();
    let reopened = TodoStore::open(storage, SLOT, StoreConfig::default());
    assert_eq!(reopened.items().len(), 1);
}
