//! In-memory blob repository.
//!
//! Test double for the SQLite repository. Counts writes and can be told to
//! reject saves so callers can exercise silent-failure paths.

use crate::repo::blob_repo::{BlobRepository, RepoError, RepoResult};

#[derive(Debug, Clone, Default)]
pub struct MemoryBlobRepository {
    blob: Option<String>,
    writes: usize,
    fail_saves: bool,
}

impl MemoryBlobRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a previously persisted blob.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Makes every following `save` fail with `RepoError::Unavailable`.
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    /// Last successfully saved (or seeded) blob.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    /// Number of successful saves.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobRepository for MemoryBlobRepository {
    fn load(&self) -> RepoResult<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> RepoResult<()> {
        if self.fail_saves {
            return Err(RepoError::Unavailable("saves disabled".to_string()));
        }
        self.blob = Some(blob.to_string());
        self.writes += 1;
        Ok(())
    }
}
