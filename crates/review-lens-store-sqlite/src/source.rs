// crates/review-lens-store-sqlite/src/source.rs
// ============================================================================
// Module: SQLite Review Source
// Description: Read-only ReviewSource backed by SQLite.
// Purpose: Serve the filtered aggregate and text reads from a Reviews table.
// Dependencies: review-lens-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! This module implements a read-only [`ReviewSource`] using `SQLite`. The
//! `Reviews` table is consumed, not owned: the source never creates,
//! migrates, or writes it. The aggregate read pushes the count threshold into
//! the engine as a bound parameter; the text read returns the relation
//! unfiltered. Failures propagate to the caller without retries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use review_lens_core::ReviewQueryOutput;
use review_lens_core::ReviewRow;
use review_lens_core::ReviewSource;
use review_lens_core::SourceError;
use review_lens_core::UserId;
use review_lens_core::UserReviewCount;
use review_lens_core::runtime::query_data;
use rusqlite::Connection;
use rusqlite::OpenFlags;
use rusqlite::params;
use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default busy timeout (ms).
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;
/// Maximum length of a single path component.
const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
const MAX_TOTAL_PATH_LENGTH: usize = 4096;

/// Aggregate read: per-user counts above the bound threshold.
const COUNTS_SQL: &str = "SELECT UserId, COUNT(UserId) AS Count FROM Reviews GROUP BY UserId \
                          HAVING Count > ?1";
/// Unfiltered text read over the whole relation.
const TEXTS_SQL: &str = "SELECT UserId, Text FROM Reviews";

// ============================================================================
// SECTION: Config
// ============================================================================

/// Configuration for the `SQLite` review source.
///
/// # Invariants
/// - `path` must resolve to an existing database file (not a directory).
/// - `busy_timeout_ms` is interpreted as milliseconds.
#[derive(Debug, Clone, Deserialize)]
pub struct SqliteSourceConfig {
    /// Path to the `SQLite` database file.
    pub path: PathBuf,
    /// Busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

/// Returns the default busy timeout for `SQLite` connections.
const fn default_busy_timeout_ms() -> u64 {
    DEFAULT_BUSY_TIMEOUT_MS
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// `SQLite` review source errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Error messages avoid embedding review text payloads.
#[derive(Debug, Error)]
pub enum SqliteSourceError {
    /// Source I/O error.
    #[error("sqlite source io error: {0}")]
    Io(String),
    /// `SQLite` engine error.
    #[error("sqlite source db error: {0}")]
    Db(String),
    /// The `Reviews` table or one of its expected columns is absent.
    #[error("sqlite source missing schema: {0}")]
    MissingSchema(String),
    /// Invalid source data.
    #[error("sqlite source invalid data: {0}")]
    Invalid(String),
}

impl From<SqliteSourceError> for SourceError {
    fn from(error: SqliteSourceError) -> Self {
        match error {
            SqliteSourceError::Io(message) | SqliteSourceError::Db(message) => Self::Db(message),
            SqliteSourceError::MissingSchema(message) => Self::Schema(message),
            SqliteSourceError::Invalid(message) => Self::Invalid(message),
        }
    }
}

// ============================================================================
// SECTION: Source
// ============================================================================

/// `SQLite`-backed review source.
///
/// # Invariants
/// - All reads go through prepared statements with bound parameters.
/// - The source issues no writes against the database.
#[derive(Debug)]
pub struct SqliteReviewSource {
    /// The underlying `SQLite` connection.
    connection: Connection,
}

impl SqliteReviewSource {
    /// Opens a read-only source over an existing database file.
    ///
    /// The database is never created or migrated; opening a missing file
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns [`SqliteSourceError`] when the path is invalid or the database
    /// cannot be opened.
    pub fn new(config: &SqliteSourceConfig) -> Result<Self, SqliteSourceError> {
        validate_source_path(&config.path)?;
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_FULL_MUTEX;
        let connection = Connection::open_with_flags(&config.path, flags)
            .map_err(|err| SqliteSourceError::Db(err.to_string()))?;
        connection
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(|err| SqliteSourceError::Db(err.to_string()))?;
        Ok(Self {
            connection,
        })
    }

    /// Wraps a caller-owned connection.
    ///
    /// The caller scopes acquisition and release of the connection; this
    /// source applies no pragmas and issues no writes through it. Use
    /// [`Self::into_connection`] to take the connection back.
    #[must_use]
    pub const fn from_connection(connection: Connection) -> Self {
        Self {
            connection,
        }
    }

    /// Returns the underlying connection to the caller.
    #[must_use]
    pub fn into_connection(self) -> Connection {
        self.connection
    }

    /// Runs the filtered review query against this source.
    ///
    /// Convenience for [`query_data`] with `self` as the source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when either read fails.
    pub fn query_reviews(&self, min_count: i64) -> Result<ReviewQueryOutput, SourceError> {
        query_data(self, min_count)
    }

    /// Reads per-user counts above the threshold.
    fn fetch_counts(&self, min_count: i64) -> Result<Vec<UserReviewCount>, SqliteSourceError> {
        let mut stmt =
            self.connection.prepare(COUNTS_SQL).map_err(|err| classify_query_error(&err))?;
        let rows = stmt
            .query_map(params![min_count], |row| {
                let user_id: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((user_id, count))
            })
            .map_err(|err| classify_query_error(&err))?;
        let mut counts = Vec::new();
        for row in rows {
            let (user_id, count) = row.map_err(|err| classify_query_error(&err))?;
            let count = u64::try_from(count).map_err(|_| {
                SqliteSourceError::Invalid(format!("negative review count for user {user_id}"))
            })?;
            counts.push(UserReviewCount {
                user_id: UserId::new(user_id),
                count,
            });
        }
        Ok(counts)
    }

    /// Reads the whole `(UserId, Text)` relation.
    fn fetch_texts(&self) -> Result<Vec<ReviewRow>, SqliteSourceError> {
        let mut stmt =
            self.connection.prepare(TEXTS_SQL).map_err(|err| classify_query_error(&err))?;
        let rows = stmt
            .query_map(params![], |row| {
                let user_id: String = row.get(0)?;
                let text: String = row.get(1)?;
                Ok(ReviewRow::new(user_id, text))
            })
            .map_err(|err| classify_query_error(&err))?;
        let mut texts = Vec::new();
        for row in rows {
            texts.push(row.map_err(|err| classify_query_error(&err))?);
        }
        Ok(texts)
    }

    /// Verifies the connection can execute a trivial read.
    fn check_connection(&self) -> Result<(), SqliteSourceError> {
        self.connection
            .query_row("SELECT 1", params![], |_row| Ok(()))
            .map_err(|err| SqliteSourceError::Db(err.to_string()))
    }
}

impl ReviewSource for SqliteReviewSource {
    fn user_counts_above(&self, min_count: i64) -> Result<Vec<UserReviewCount>, SourceError> {
        self.fetch_counts(min_count).map_err(SourceError::from)
    }

    fn review_texts(&self) -> Result<Vec<ReviewRow>, SourceError> {
        self.fetch_texts().map_err(SourceError::from)
    }

    fn readiness(&self) -> Result<(), SourceError> {
        self.check_connection().map_err(SourceError::from)
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates source paths for safety limits.
fn validate_source_path(path: &Path) -> Result<(), SqliteSourceError> {
    let path_string = path.display().to_string();
    if path_string.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(SqliteSourceError::Invalid("source path exceeds length limit".to_string()));
    }
    for component in path.components() {
        let name = component.as_os_str().to_string_lossy();
        if name.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(SqliteSourceError::Invalid(
                "source path contains an overlong component".to_string(),
            ));
        }
    }
    if path.is_dir() {
        return Err(SqliteSourceError::Invalid(
            "source path must be a file, not a directory".to_string(),
        ));
    }
    Ok(())
}

/// Classifies an engine error as missing schema or a general DB failure.
fn classify_query_error(err: &rusqlite::Error) -> SqliteSourceError {
    let message = err.to_string();
    let lower = message.to_ascii_lowercase();
    if lower.contains("no such table") || lower.contains("no such column") {
        SqliteSourceError::MissingSchema(message)
    } else {
        SqliteSourceError::Db(message)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
