// demos/minimal/src/main.rs
// ============================================================================
// Module: Review Lens Minimal Demo
// Description: End-to-end filtered query and labeling over an in-memory database.
// Purpose: Demonstrate query_data and color-index assignment.
// Dependencies: review-lens-core, review-lens-store-sqlite, rusqlite, serde_json
// ============================================================================

//! ## Overview
//! Seeds an in-memory `SQLite` database with a small `Reviews` relation,
//! wraps the caller-owned connection in a [`SqliteReviewSource`], runs the
//! filtered query, and prints each joined row with its color index as a JSON
//! line.

use std::io::Write;

use review_lens_core::runtime::assign_color_indexes;
use review_lens_core::runtime::query_data;
use review_lens_store_sqlite::SqliteReviewSource;
use rusqlite::Connection;
use rusqlite::params;
use serde_json::json;

/// Sample rows seeded into the demo relation.
const SAMPLE_ROWS: [(&str, &str); 6] = [
    ("user-2", "arrived late but works"),
    ("user-1", "great coffee"),
    ("user-1", "would buy again"),
    ("user-3", "not for me"),
    ("user-2", "second order, still good"),
    ("user-1", "gift for a friend"),
];

/// Opens an in-memory database and seeds the `Reviews` relation.
fn seed_connection() -> Result<Connection, rusqlite::Error> {
    let connection = Connection::open_in_memory()?;
    connection.execute_batch(
        "CREATE TABLE Reviews (
            UserId TEXT NOT NULL,
            Text TEXT NOT NULL
        );",
    )?;
    for (user_id, text) in SAMPLE_ROWS {
        connection.execute(
            "INSERT INTO Reviews (UserId, Text) VALUES (?1, ?2)",
            params![user_id, text],
        )?;
    }
    Ok(connection)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = SqliteReviewSource::from_connection(seed_connection()?);
    let output = query_data(&source, 1)?;
    let labels = assign_color_indexes(&output.reviews);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for (review, color) in output.reviews.iter().zip(&labels.indexes) {
        let line = serde_json::to_string(&json!({
            "user_id": review.user_id.as_str(),
            "text": review.text,
            "count": review.count,
            "color": color,
        }))?;
        writeln!(handle, "{line}")?;
    }
    writeln!(
        handle,
        "total_rows={} qualifying_users={} palette_size={}",
        output.total_rows, output.qualifying_users, labels.palette_size
    )?;

    Ok(())
}
