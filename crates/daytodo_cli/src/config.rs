//! Flag parsing and default locations.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use daytodo_core::{default_log_level, DateKey, TodoId};
use std::path::PathBuf;

const APP_DIR_NAME: &str = "daytodo";
const DB_FILE_NAME: &str = "daytodo.sqlite3";

/// Parses `--date`, accepting only canonical `YYYY-MM-DD` keys.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    DateKey::parse(value.trim())
        .map(|key| key.date())
        .map_err(|err| err.to_string())
}

pub fn parse_todo_id(value: &str) -> Result<TodoId, String> {
    TodoId::parse_str(value.trim()).map_err(|err| format!("invalid todo id `{value}`: {err}"))
}

pub fn log_level(flag: Option<&str>) -> &str {
    match flag {
        Some(level) if !level.trim().is_empty() => level,
        _ => default_log_level(),
    }
}

/// Uses `--db` when given, otherwise `<data dir>/daytodo/daytodo.sqlite3`.
///
/// Falls back to the temp directory when the platform has no data dir.
/// Creates the parent directory.
pub fn resolve_db_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    let path = flag.unwrap_or_else(|| {
        dirs::data_local_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR_NAME)
            .join(DB_FILE_NAME)
    });

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(path)
}
