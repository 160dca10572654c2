// crates/review-lens-core/src/runtime/pipeline.rs
// ============================================================================
// Module: Review Lens Query Pipeline
// Description: Filtered review query with an explicit in-memory inner join.
// Purpose: Combine the two source reads into the joined, annotated result set.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The pipeline issues exactly two reads against a [`ReviewSource`]: the
//! per-user aggregate filtered by the count threshold, and the unfiltered
//! `(user, text)` rows. The join is an explicit equality inner join keyed by
//! [`UserId`], performed in memory; filtering the aggregate before joining
//! bounds the join's right-hand side to already-qualifying users.
//!
//! Either read failing fails the whole call; no partial results are returned.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::core::identifiers::UserId;
use crate::core::review::QualifiedReview;
use crate::core::review::ReviewQueryOutput;
use crate::core::review::ReviewRow;
use crate::core::review::UserReviewCount;
use crate::interfaces::ReviewSource;
use crate::interfaces::SourceError;

// ============================================================================
// SECTION: Query
// ============================================================================

/// Runs the filtered review query against `source`.
///
/// Users qualify when their review count is strictly greater than
/// `min_count`. The output carries every review row authored by a qualifying
/// user, each annotated with that user's total count, plus the row and
/// distinct-user tallies. Row order follows whatever the source reads
/// produce; callers must treat it as unordered.
///
/// # Errors
///
/// Returns [`SourceError`] when either source read fails.
pub fn query_data<S: ReviewSource + ?Sized>(
    source: &S,
    min_count: i64,
) -> Result<ReviewQueryOutput, SourceError> {
    let counts = source.user_counts_above(min_count)?;
    let texts = source.review_texts()?;
    let qualifying_users = counts.len();
    let reviews = inner_join_counts(texts, &counts);
    let total_rows = reviews.len();
    Ok(ReviewQueryOutput {
        reviews,
        total_rows,
        qualifying_users,
    })
}

// ============================================================================
// SECTION: Join
// ============================================================================

/// Inner-joins unfiltered review rows against filtered per-user counts.
///
/// The join key is the author identifier: rows whose author has no entry in
/// `counts` are dropped, and surviving rows are annotated with the author's
/// total count. Input row order is preserved.
#[must_use]
pub fn inner_join_counts(
    texts: Vec<ReviewRow>,
    counts: &[UserReviewCount],
) -> Vec<QualifiedReview> {
    let count_by_user: HashMap<&UserId, u64> =
        counts.iter().map(|entry| (&entry.user_id, entry.count)).collect();
    let mut joined = Vec::new();
    for row in texts {
        let Some(count) = count_by_user.get(&row.user_id).copied() else {
            continue;
        };
        joined.push(QualifiedReview {
            user_id: row.user_id,
            text: row.text,
            count,
        });
    }
    joined
}
