//! Core domain logic for the calendar-scoped todo list.
//! This crate is the single source of truth for store invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::date_key::{date_key, DateKey, DateKeyParseError};
pub use model::todo::{TodoId, TodoItem, TodoValidationError};
pub use repo::blob_repo::{
    BlobRepository, RepoError, RepoResult, SqliteBlobRepository, DEFAULT_STORAGE_KEY,
};
pub use repo::memory_repo::MemoryBlobRepository;
pub use service::day_service::{day_heading, DateSelector, DayTodoService, EMPTY_DAY_MESSAGE};
pub use store::blob::{decode_blob, encode_blob, BlobError, TodoMap};
pub use store::todo_store::TodoStore;
