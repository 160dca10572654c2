// crates/review-lens-store-sqlite/src/lib.rs
// ============================================================================
// Module: Review Lens SQLite Source
// Description: SQLite-backed ReviewSource implementation.
// Purpose: Read the Reviews relation from a SQLite database.
// Dependencies: review-lens-core, rusqlite, serde, thiserror
// ============================================================================

//! ## Overview
//! `SQLite` backend for Review Lens. The source reads the `Reviews` relation
//! through two prepared statements (the threshold-filtered aggregate and the
//! unfiltered text read) and never mutates or migrates the database.

mod source;

pub use self::source::SqliteReviewSource;
pub use self::source::SqliteSourceConfig;
pub use self::source::SqliteSourceError;
