//! Selected-day todo service.
//!
//! # Responsibility
//! - Track the date chosen by the user.
//! - Route view intents to the store with that date.
//!
//! # Invariants
//! - Every call acts on the date selected at call time.
//! - Changing the selection never mutates the store.

use crate::model::todo::{TodoId, TodoItem};
use crate::repo::blob_repo::BlobRepository;
use crate::store::todo_store::TodoStore;
use chrono::{Local, NaiveDate};

/// Text shown when the selected day has no todos.
pub const EMPTY_DAY_MESSAGE: &str = "No todos for this date.";

/// Currently selected calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelector {
    selected: NaiveDate,
}

impl DateSelector {
    pub fn new(selected: NaiveDate) -> Self {
        Self { selected }
    }

    /// Selects today on the local calendar.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Change handler for the calendar widget.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
    }
}

impl Default for DateSelector {
    fn default() -> Self {
        Self::today()
    }
}

/// Store plus selection, the single object a view talks to.
pub struct DayTodoService<R: BlobRepository> {
    store: TodoStore<R>,
    selector: DateSelector,
}

impl<R: BlobRepository> DayTodoService<R> {
    pub fn new(store: TodoStore<R>, selector: DateSelector) -> Self {
        Self { store, selector }
    }

    /// Loads the store from `repo` and selects `date`.
    pub fn open(repo: R, date: NaiveDate) -> Self {
        Self::new(TodoStore::initialize(repo), DateSelector::new(date))
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selector.select(date);
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selector.selected()
    }

    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        self.store.add_todo(self.selector.selected(), text)
    }

    pub fn toggle(&mut self, id: TodoId) -> bool {
        self.store.toggle_complete(self.selector.selected(), id)
    }

    pub fn delete(&mut self, id: TodoId) -> bool {
        self.store.delete_todo(self.selector.selected(), id)
    }

    pub fn todos(&self) -> &[TodoItem] {
        self.store.todos_for_date(self.selector.selected())
    }

    /// Title line for the selected day, e.g. `Todos for March 01, 2024`.
    pub fn heading(&self) -> String {
        day_heading(self.selector.selected())
    }

    pub fn store(&self) -> &TodoStore<R> {
        &self.store
    }
}

/// Formats the title line for `date`.
pub fn day_heading(date: NaiveDate) -> String {
    date.format("Todos for %B %d, %Y").to_string()
}
