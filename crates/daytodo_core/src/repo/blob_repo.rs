//! Blob repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Load and save one string blob under a fixed key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Storage keys are non-empty.
//! - A missing row loads as `None`, never as an empty string.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key the todo mapping is persisted under.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for blob persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
    /// Backend refused the operation (used by in-memory doubles).
    Unavailable(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence for a single serialized blob.
pub trait BlobRepository {
    /// Returns the stored blob, or `None` when nothing was saved yet.
    fn load(&self) -> RepoResult<Option<String>>;
    /// Replaces the stored blob.
    fn save(&mut self, blob: &str) -> RepoResult<()>;
}

/// SQLite-backed blob repository over the `kv_entries` table.
///
/// Borrows a connection returned by [`crate::db::open_db`], so migrations
/// are guaranteed to have run.
pub struct SqliteBlobRepository<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteBlobRepository<'conn> {
    /// Creates a repository bound to [`DEFAULT_STORAGE_KEY`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    /// Creates a repository bound to a custom storage key.
    ///
    /// # Errors
    /// - `InvalidKey` when `key` is empty after trimming.
    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> RepoResult<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(RepoError::InvalidKey(key));
        }
        Ok(Self { conn, key })
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }
}

impl BlobRepository for SqliteBlobRepository<'_> {
    fn load(&self) -> RepoResult<Option<String>> {
        let blob = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                params![self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob)
    }

    fn save(&mut self, blob: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.key.as_str(), blob],
        )?;
        Ok(())
    }
}
