// crates/review-lens-core/src/core/review.rs
// ============================================================================
// Module: Review Lens Review Model
// Description: Review rows, per-user aggregates, and joined query output.
// Purpose: Represent the relational review data consumed and produced by the pipeline.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! The review model mirrors the external `Reviews` relation: raw
//! `(UserId, Text)` rows, per-user aggregate counts, and the joined result
//! set produced by the filtered query. The source relation is immutable from
//! this system's perspective; everything here is an in-memory snapshot.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::UserId;

// ============================================================================
// SECTION: Review Rows
// ============================================================================

/// A single review row read from the source relation.
///
/// # Invariants
/// - `text` is stored verbatim; no trimming or normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRow {
    /// Author of the review.
    pub user_id: UserId,
    /// Review text.
    pub text: String,
}

impl ReviewRow {
    /// Creates a review row for the provided author and text.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, text: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            text: text.into(),
        }
    }
}

// ============================================================================
// SECTION: Aggregates
// ============================================================================

/// Per-user review count computed by the aggregate query.
///
/// # Invariants
/// - `count` is the user's total number of rows in the source relation.
/// - Computed per query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserReviewCount {
    /// Author the count belongs to.
    pub user_id: UserId,
    /// Total number of reviews authored by the user.
    pub count: u64,
}

// ============================================================================
// SECTION: Joined Output
// ============================================================================

/// A review row annotated with its author's total review count.
///
/// # Invariants
/// - `count` is replicated across all of the author's rows in one result set.
/// - Only rows of qualifying authors appear in a query output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedReview {
    /// Author of the review.
    pub user_id: UserId,
    /// Review text.
    pub text: String,
    /// Author's total review count.
    pub count: u64,
}

/// Result of the filtered review query.
///
/// # Invariants
/// - `total_rows == reviews.len()`.
/// - `qualifying_users` equals the number of distinct `user_id` values in
///   `reviews` whenever every qualifying user authored at least one row.
/// - Every row's author passed the count threshold the query was issued with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewQueryOutput {
    /// Joined review rows for qualifying users.
    pub reviews: Vec<QualifiedReview>,
    /// Number of rows in `reviews`.
    pub total_rows: usize,
    /// Number of distinct users that passed the threshold.
    pub qualifying_users: usize,
}
