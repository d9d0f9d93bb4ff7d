//! Todo item domain model.
//!
//! # Responsibility
//! - Define the record stored inside each date bucket.
//! - Provide validation shared by creation and blob decoding.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `text` is never empty or whitespace-only.
//! - `completed` starts as `false`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a todo item.
pub type TodoId = Uuid;

/// Validation errors for todo item invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoValidationError {
    NilId,
    EmptyText,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "todo id must not be nil"),
            Self::EmptyText => write!(f, "todo text must not be empty"),
        }
    }
}

impl Error for TodoValidationError {}

/// One entry of a date bucket.
///
/// Field names double as the persisted blob's wire names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    /// Text as entered by the user. Only the emptiness check trims.
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    /// Creates an open item with a generated id.
    ///
    /// Returns `None` when `text` is empty after trimming.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        Self::with_id(Uuid::new_v4(), text).ok()
    }

    /// Creates an open item with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is the nil UUID.
    /// - `EmptyText` when `text` is empty after trimming.
    pub fn with_id(id: TodoId, text: impl Into<String>) -> Result<Self, TodoValidationError> {
        let item = Self {
            id,
            text: text.into(),
            completed: false,
        };
        item.validate()?;
        Ok(item)
    }

    /// Checks item invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id.is_nil() {
            return Err(TodoValidationError::NilId);
        }
        if is_blank(&self.text) {
            return Err(TodoValidationError::EmptyText);
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Returns whether user input carries no todo text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
