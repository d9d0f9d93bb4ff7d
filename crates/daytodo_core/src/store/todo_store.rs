//! Date-keyed todo store.
//!
//! # Responsibility
//! - Provide add/toggle/delete/read over date buckets.
//! - Persist the whole mapping through a `BlobRepository` after each change.
//!
//! # Invariants
//! - Mutations only touch the bucket of the date they were called with.
//! - Ids are unique across the store; a fresh id never collides.
//! - No-op calls (blank text, unknown id) leave state and storage untouched.
//! - Startup and persistence failures never surface to callers.

use crate::model::date_key::{date_key, DateKey};
use crate::model::todo::{is_blank, TodoId, TodoItem};
use crate::repo::blob_repo::BlobRepository;
use crate::store::blob::{decode_blob, encode_blob, TodoMap};
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::HashSet;
use uuid::Uuid;

/// In-memory todo mapping bound to its persistence adapter.
pub struct TodoStore<R: BlobRepository> {
    repo: R,
    todos: TodoMap,
    ids: HashSet<TodoId>,
}

impl<R: BlobRepository> TodoStore<R> {
    /// Loads the persisted mapping, falling back to an empty one.
    ///
    /// Missing, unreadable, malformed or invariant-violating blobs all yield
    /// an empty store. The previous blob is left in storage until the first
    /// mutation overwrites it.
    pub fn initialize(repo: R) -> Self {
        let todos = match repo.load() {
            Ok(Some(blob)) => match decode_blob(&blob) {
                Ok(todos) => todos,
                Err(err) => {
                    warn!(
                        "event=store_init module=store status=fallback reason=decode_failed blob_len={} error={}",
                        blob.len(),
                        err
                    );
                    TodoMap::new()
                }
            },
            Ok(None) => TodoMap::new(),
            Err(err) => {
                warn!(
                    "event=store_init module=store status=fallback reason=load_failed error={err}"
                );
                TodoMap::new()
            }
        };

        let ids = todos.values().flatten().map(|item| item.id).collect();
        let store = Self { repo, todos, ids };
        debug!(
            "event=store_init module=store status=ok dates={} todos={}",
            store.todos.len(),
            store.len()
        );
        store
    }

    /// Appends a new open todo to the bucket of `date`.
    ///
    /// Returns the new id, or `None` when `text` is blank (no-op).
    pub fn add_todo(&mut self, date: NaiveDate, text: &str) -> Option<TodoId> {
        if is_blank(text) {
            debug!("event=todo_add module=store status=skip reason=blank_text");
            return None;
        }

        let key = date_key(date);
        let id = self.fresh_id();
        let item = TodoItem::with_id(id, text).ok()?;
        self.todos.entry(key).or_default().push(item);
        self.ids.insert(id);

        debug!("event=todo_add module=store status=ok date_key={key} todo_id={id}");
        self.persist();
        Some(id)
    }

    /// Flips completion of `id` within the bucket of `date`.
    ///
    /// Returns `false` (no-op) when the bucket has no such item.
    pub fn toggle_complete(&mut self, date: NaiveDate, id: TodoId) -> bool {
        let key = date_key(date);
        let Some(item) = self
            .todos
            .get_mut(&key)
            .and_then(|bucket| bucket.iter_mut().find(|item| item.id == id))
        else {
            debug!("event=todo_toggle module=store status=skip reason=not_found date_key={key} todo_id={id}");
            return false;
        };

        item.toggle();
        debug!(
            "event=todo_toggle module=store status=ok date_key={key} todo_id={id} completed={}",
            item.completed
        );
        self.persist();
        true
    }

    /// Removes `id` from the bucket of `date`.
    ///
    /// Returns `false` (no-op) when the bucket has no such item. Removing the
    /// last item drops the bucket.
    pub fn delete_todo(&mut self, date: NaiveDate, id: TodoId) -> bool {
        let key = date_key(date);
        let Some(bucket) = self.todos.get_mut(&key) else {
            debug!("event=todo_delete module=store status=skip reason=no_bucket date_key={key}");
            return false;
        };
        let Some(position) = bucket.iter().position(|item| item.id == id) else {
            debug!("event=todo_delete module=store status=skip reason=not_found date_key={key} todo_id={id}");
            return false;
        };

        bucket.remove(position);
        if bucket.is_empty() {
            self.todos.remove(&key);
        }
        self.ids.remove(&id);

        debug!("event=todo_delete module=store status=ok date_key={key} todo_id={id}");
        self.persist();
        true
    }

    /// Todos of `date` in insertion order; empty when the day has none.
    pub fn todos_for_date(&self, date: NaiveDate) -> &[TodoItem] {
        self.todos_for_key(&date_key(date))
    }

    fn todos_for_key(&self, key: &DateKey) -> &[TodoItem] {
        self.todos.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whole mapping, read-only.
    pub fn todos(&self) -> &TodoMap {
        &self.todos
    }

    /// Total number of todos across all dates.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn persistence(&self) -> &R {
        &self.repo
    }

    pub fn into_persistence(self) -> R {
        self.repo
    }

    fn fresh_id(&self) -> TodoId {
        loop {
            let id = Uuid::new_v4();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }

    fn persist(&mut self) {
        let blob = match encode_blob(&self.todos) {
            Ok(blob) => blob,
            Err(err) => {
                warn!("event=store_save module=store status=error error_code=encode_failed error={err}");
                return;
            }
        };

        match self.repo.save(&blob) {
            Ok(()) => debug!(
                "event=store_save module=store status=ok blob_len={}",
                blob.len()
            ),
            Err(err) => warn!(
                "event=store_save module=store status=error error_code=save_failed error={err}"
            ),
        }
    }
}
