//! Blob codec for the whole todo mapping.
//!
//! The blob is a JSON object keyed by date key, each value an array of
//! `{"id", "text", "completed"}` objects in bucket order.

use crate::model::date_key::DateKey;
use crate::model::todo::{TodoId, TodoItem, TodoValidationError};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Whole-store mapping from calendar day to its ordered bucket.
pub type TodoMap = BTreeMap<DateKey, Vec<TodoItem>>;

/// Errors raised while decoding a persisted blob.
#[derive(Debug)]
pub enum BlobError {
    /// Not JSON, or not the expected mapping shape (includes bad date keys).
    Json(serde_json::Error),
    /// An item violates todo invariants.
    InvalidItem {
        date_key: DateKey,
        source: TodoValidationError,
    },
    /// The same id appears more than once across the mapping.
    DuplicateId(TodoId),
}

impl Display for BlobError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "malformed todo blob: {err}"),
            Self::InvalidItem { date_key, source } => {
                write!(f, "invalid todo under {date_key}: {source}")
            }
            Self::DuplicateId(id) => write!(f, "duplicate todo id: {id}"),
        }
    }
}

impl Error for BlobError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::InvalidItem { source, .. } => Some(source),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<serde_json::Error> for BlobError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Serializes the whole mapping into one blob.
pub fn encode_blob(todos: &TodoMap) -> Result<String, serde_json::Error> {
    serde_json::to_string(todos)
}

/// Parses a blob and checks store invariants.
///
/// Empty buckets are dropped; they carry no todos and the store never
/// keeps them.
pub fn decode_blob(blob: &str) -> Result<TodoMap, BlobError> {
    let mut todos: TodoMap = serde_json::from_str(blob)?;
    todos.retain(|_, bucket| !bucket.is_empty());

    let mut seen = HashSet::new();
    for (date_key, bucket) in &todos {
        for item in bucket {
            item.validate().map_err(|source| BlobError::InvalidItem {
                date_key: *date_key,
                source,
            })?;
            if !seen.insert(item.id) {
                return Err(BlobError::DuplicateId(item.id));
            }
        }
    }

    Ok(todos)
}
