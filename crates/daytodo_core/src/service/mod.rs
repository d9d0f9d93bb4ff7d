//! View-facing use-case services.
//!
//! # Responsibility
//! - Bind the todo store to the currently selected calendar date.
//! - Keep view layers decoupled from store and storage details.

pub mod day_service;
