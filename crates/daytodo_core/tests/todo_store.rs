use chrono::NaiveDate;
use daytodo_core::{
    decode_blob, encode_blob, BlobRepository, MemoryBlobRepository, RepoResult, TodoItem,
    TodoStore,
};
use uuid::Uuid;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn empty_store() -> TodoStore<MemoryBlobRepository> {
    TodoStore::initialize(MemoryBlobRepository::new())
}

/// Repository whose loads always fail.
struct BrokenRepository;

impl BlobRepository for BrokenRepository {
    fn load(&self) -> RepoResult<Option<String>> {
        Err(daytodo_core::RepoError::Unavailable("disk gone".to_string()))
    }

    fn save(&mut self, _blob: &str) -> RepoResult<()> {
        Ok(())
    }
}

#[test]
fn pay_rent_scenario() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);

    let id = store.add_todo(day, "Pay rent").unwrap();
    assert_eq!(
        store.todos_for_date(day),
        &[TodoItem {
            id,
            text: "Pay rent".to_string(),
            completed: false,
        }]
    );

    assert!(store.toggle_complete(day, id));
    assert!(store.todos_for_date(day)[0].completed);

    assert!(store.delete_todo(day, id));
    assert!(store.todos_for_date(day).is_empty());
    assert!(store.is_empty());
}

#[test]
fn add_appends_open_item_at_end_of_bucket() {
    let mut store = empty_store();
    let day = ymd(2024, 5, 10);
    store.add_todo(day, "first").unwrap();

    let id = store.add_todo(day, "buy milk").unwrap();

    let todos = store.todos_for_date(day);
    assert_eq!(todos.len(), 2);
    let last = todos.last().unwrap();
    assert_eq!(last.id, id);
    assert_eq!(last.text, "buy milk");
    assert!(!last.completed);
}

#[test]
fn add_keeps_text_as_entered() {
    let mut store = empty_store();
    let day = ymd(2024, 5, 10);

    store.add_todo(day, "  call mom ").unwrap();

    assert_eq!(store.todos_for_date(day)[0].text, "  call mom ");
}

#[test]
fn blank_text_is_ignored_without_writing() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);

    assert_eq!(store.add_todo(day, ""), None);
    assert_eq!(store.add_todo(day, "   "), None);
    assert_eq!(store.add_todo(day, "\t\n"), None);

    assert!(store.todos_for_date(day).is_empty());
    assert!(store.todos().is_empty());
    assert_eq!(store.persistence().writes(), 0);
    assert_eq!(store.persistence().blob(), None);
}

#[test]
fn todos_never_leak_between_dates() {
    let mut store = empty_store();
    let first = ymd(2024, 3, 1);
    let second = ymd(2024, 3, 2);

    let id = store.add_todo(first, "only on the first").unwrap();

    assert!(store.todos_for_date(second).is_empty());
    assert!(!store.toggle_complete(second, id));
    assert!(!store.delete_todo(second, id));
    assert_eq!(store.todos_for_date(first).len(), 1);
    assert!(!store.todos_for_date(first)[0].completed);
}

#[test]
fn reading_an_empty_date_does_not_create_a_bucket() {
    let store = empty_store();

    assert!(store.todos_for_date(ymd(2030, 1, 1)).is_empty());
    assert!(store.todos().is_empty());
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);
    let id = store.add_todo(day, "stretch").unwrap();
    let other = store.add_todo(day, "read").unwrap();

    assert!(store.toggle_complete(day, id));
    assert!(store.toggle_complete(day, id));

    let todos = store.todos_for_date(day);
    assert!(!todos[0].completed);
    assert!(!todos[1].completed);
    assert_eq!(todos[1].id, other);
}

#[test]
fn toggle_unknown_id_is_a_no_op() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);
    store.add_todo(day, "stretch").unwrap();
    let writes_before = store.persistence().writes();

    assert!(!store.toggle_complete(day, Uuid::new_v4()));
    assert!(!store.toggle_complete(ymd(2024, 3, 9), Uuid::new_v4()));

    assert_eq!(store.persistence().writes(), writes_before);
    assert!(store.todos_for_date(ymd(2024, 3, 9)).is_empty());
    assert_eq!(store.todos().len(), 1);
}

#[test]
fn delete_removes_exactly_the_matching_item() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);
    let a = store.add_todo(day, "a").unwrap();
    let b = store.add_todo(day, "b").unwrap();
    let c = store.add_todo(day, "c").unwrap();

    assert!(store.delete_todo(day, b));

    let ids = store
        .todos_for_date(day)
        .iter()
        .map(|item| item.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec![a, c]);

    let writes_before = store.persistence().writes();
    assert!(!store.delete_todo(day, b));
    assert_eq!(store.todos_for_date(day).len(), 2);
    assert_eq!(store.persistence().writes(), writes_before);
}

#[test]
fn deleting_last_item_drops_the_bucket() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);
    let id = store.add_todo(day, "only").unwrap();

    store.delete_todo(day, id);

    assert!(store.todos().is_empty());
    assert_eq!(store.persistence().blob(), Some("{}"));
}

#[test]
fn ids_are_unique_across_dates() {
    let mut store = empty_store();
    let mut day = ymd(2024, 1, 1);
    for _ in 0..20 {
        store.add_todo(day, "one").unwrap();
        store.add_todo(day, "two").unwrap();
        day = day.succ_opt().unwrap();
    }

    let mut ids = store
        .todos()
        .values()
        .flatten()
        .map(|item| item.id)
        .collect::<Vec<_>>();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
    assert_eq!(store.len(), 40);
}

#[test]
fn every_effective_mutation_writes_the_whole_mapping() {
    let mut store = empty_store();
    let first = ymd(2024, 3, 1);
    let second = ymd(2024, 3, 2);

    let a = store.add_todo(first, "a").unwrap();
    store.add_todo(second, "b").unwrap();
    store.toggle_complete(first, a);

    assert_eq!(store.persistence().writes(), 3);
    let saved = decode_blob(store.persistence().blob().unwrap()).unwrap();
    assert_eq!(&saved, store.todos());
}

#[test]
fn blob_round_trip_preserves_structure() {
    let mut store = empty_store();
    let march = ymd(2024, 3, 1);
    let april = ymd(2024, 4, 15);
    let a = store.add_todo(march, "a").unwrap();
    store.add_todo(march, "b").unwrap();
    let c = store.add_todo(april, "c").unwrap();
    store.add_todo(april, "d").unwrap();
    store.toggle_complete(march, a);
    store.delete_todo(april, c);

    let blob = encode_blob(store.todos()).unwrap();
    let decoded = decode_blob(&blob).unwrap();

    assert_eq!(&decoded, store.todos());
}

#[test]
fn far_dates_do_not_lose_other_days_on_reload() {
    let mut store = empty_store();
    let today = ymd(2024, 3, 1);
    let far_future = ymd(10000, 1, 1);
    let far_past = ymd(-1, 12, 31);
    store.add_todo(today, "keep me").unwrap();
    store.add_todo(far_future, "far").unwrap();
    store.add_todo(far_past, "ancient").unwrap();
    let snapshot = store.todos().clone();

    let reopened = TodoStore::initialize(store.into_persistence());

    assert_eq!(reopened.todos(), &snapshot);
    assert_eq!(reopened.todos_for_date(today)[0].text, "keep me");
    assert_eq!(reopened.todos_for_date(far_future)[0].text, "far");
}

#[test]
fn reinitializing_from_saved_blob_restores_state() {
    let mut store = empty_store();
    let day = ymd(2024, 3, 1);
    let id = store.add_todo(day, "persist me").unwrap();
    store.toggle_complete(day, id);
    let snapshot = store.todos().clone();

    let mut reopened = TodoStore::initialize(store.into_persistence());

    assert_eq!(reopened.todos(), &snapshot);
    assert!(reopened.todos_for_date(day)[0].completed);
    assert!(reopened.delete_todo(day, id));
}

#[test]
fn malformed_blobs_start_empty() {
    let id = Uuid::new_v4();
    let blobs = [
        "".to_string(),
        "not json".to_string(),
        "null".to_string(),
        r#"{"2024-03-01":"oops"}"#.to_string(),
        r#"{"2024-13-01":[]}"#.to_string(),
        format!(r#"{{"2024-03-01":[{{"id":"{id}","text":"","completed":false}}]}}"#),
        format!(
            r#"{{"2024-03-01":[{{"id":"{id}","text":"a","completed":false}},
                               {{"id":"{id}","text":"b","completed":false}}]}}"#
        ),
    ];

    for blob in blobs {
        let store = TodoStore::initialize(MemoryBlobRepository::with_blob(blob.clone()));
        assert!(store.todos().is_empty(), "blob should be rejected: {blob}");
        assert_eq!(store.persistence().blob(), Some(blob.as_str()));
    }
}

#[test]
fn load_failure_starts_empty() {
    let mut store = TodoStore::initialize(BrokenRepository);

    assert!(store.is_empty());
    assert!(store.add_todo(ymd(2024, 3, 1), "still works").is_some());
}

#[test]
fn save_failures_are_silent_and_keep_memory_state() {
    let mut repo = MemoryBlobRepository::new();
    repo.fail_saves(true);
    let mut store = TodoStore::initialize(repo);
    let day = ymd(2024, 3, 1);

    let id = store.add_todo(day, "unsaved").unwrap();
    assert!(store.toggle_complete(day, id));

    assert_eq!(store.todos_for_date(day).len(), 1);
    assert_eq!(store.persistence().writes(), 0);
    assert_eq!(store.persistence().blob(), None);
}
