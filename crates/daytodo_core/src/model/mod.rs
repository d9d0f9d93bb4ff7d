//! Domain model for date-scoped todos.
//!
//! # Responsibility
//! - Define the todo record and the calendar-day key used to bucket it.
//!
//! # Invariants
//! - Every todo is identified by a stable `TodoId`.
//! - Every bucket is addressed by a `DateKey` derived through `date_key`.

pub mod date_key;
pub mod todo;
