//! Date-keyed todo store and its persisted blob format.
//!
//! # Responsibility
//! - Own the in-memory `DateKey -> Vec<TodoItem>` mapping.
//! - Keep the persisted blob in sync after every effective mutation.
//!
//! # Invariants
//! - Todo ids are unique across all buckets.
//! - Buckets are never empty and reads never create them.

pub mod blob;
pub mod todo_store;
