use std::sync::Once;

use ticklist_core::persist::{self, KeyValueStore, MemoryStorage, StorageKeys};
use ticklist_core::{Page, Session, Task, TaskStore, ViewFacts, WidgetConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn buy_milk_walk_dog_scenario() {
    init_tracing();
    let mut session = Session::new(&WidgetConfig::default());

    let milk = session.submit("Buy milk").expect("milk added");
    session.submit("Walk dog").expect("dog added");
    session.toggle(milk);

    let store = session.store();
    assert_eq!(store.active_count(), 1);
    assert!(store.has_complete());
    assert!(store.has_incomplete());

    assert_eq!(session.clear_completed(), 1);
    let store = session.store();
    assert_eq!(store.total_count(), 1);
    assert_eq!(
        store.iter().map(|(_, t)| t.text.as_str()).collect::<Vec<_>>(),
        vec!["Walk dog"]
    );

    let facts = session.view();
    assert_eq!(facts.active_label, "1 item left");
    assert!(!facts.show_clear_completed);
}

#[test]
fn whitespace_only_input_adds_nothing() {
    init_tracing();
    let mut session = Session::new(&WidgetConfig::default());
    session.submit("kept");
    let before = session.store().total_count();

    assert_eq!(session.submit("   "), None);
    assert_eq!(session.store().total_count(), before);
}

#[test]
fn storage_round_trip_preserves_tasks_and_page() {
    init_tracing();
    let keys = StorageKeys::default();
    let mut store = TaskStore::new();
    for text in ["one", "two", "three", "four"] {
        store.add(Task::new(text));
    }
    store.mark_complete(1).expect("mark two");
    store.remove(2);
    store.set_current_page(Page::Active);

    let mut storage = MemoryStorage::new();
    persist::save(&mut store, &mut storage, &keys).expect("save");
    let saved = store.clone();

    store.clear();
    store.set_current_page(Page::All);
    persist::load_into(&mut store, &storage, &keys);

    assert_eq!(store, saved);
    assert_eq!(store.current_page(), Page::Active);
    assert_eq!(
        store.iter().map(|(i, t)| (i, t.text.clone(), t.complete)).collect::<Vec<_>>(),
        vec![
            (0, "one".to_string(), false),
            (1, "two".to_string(), true),
            (2, "four".to_string(), false),
        ]
    );
}

#[test]
fn counts_stay_consistent_across_session_actions() {
    init_tracing();
    let mut session = Session::new(&WidgetConfig::default());
    for i in 0..12 {
        session.submit(&format!("task {i}"));
    }
    for position in (0..12).step_by(3) {
        session.toggle(position);
    }
    session.delete(4);
    assert!(session.begin_edit(5));
    session.commit_edit(5, "  ");
    session.toggle_all();
    session.toggle(7);
    session.clear_completed();

    let store = session.store();
    assert_eq!(
        store.active_count() + store.completed_count(),
        store.total_count()
    );
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.get(7).map(|t| t.text.as_str()), Some("task 7"));
}

#[test]
fn corrupt_storage_recovers_to_empty_list() {
    init_tracing();
    let mut storage = MemoryStorage::new();
    storage.set_item("taskListLength", "1").expect("set");
    storage.set_item("task0", "][").expect("set");
    storage.set_item("currentPagePosition", "abc").expect("set");

    let session = Session::open(&WidgetConfig::default(), &storage);
    assert_eq!(session.store().len(), 0);
    assert_eq!(session.store().current_page(), Page::All);
    assert_eq!(ViewFacts::derive(session.store()), session.view());
}
