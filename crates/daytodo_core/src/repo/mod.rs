//! Persistence adapters for the serialized todo mapping.
//!
//! # Responsibility
//! - Define the load/save contract the todo store persists through.
//! - Keep SQLite details out of the store.
//!
//! # Invariants
//! - One repository instance reads and writes exactly one storage key.
//! - `save` replaces the whole blob; there are no partial writes.

pub mod blob_repo;
pub mod memory_repo;
