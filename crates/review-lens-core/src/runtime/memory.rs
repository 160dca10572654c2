// crates/review-lens-core/src/runtime/memory.rs
// ============================================================================
// Module: Review Lens In-Memory Source
// Description: Reference ReviewSource over an owned vector of rows.
// Purpose: Back tests and demos without a database engine.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The in-memory source holds the review relation as a plain vector and
//! computes the per-user aggregate with an in-memory group-by. It is the
//! reference semantics for backends: any [`ReviewSource`] over the same rows
//! must produce the same aggregates.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::core::identifiers::UserId;
use crate::core::review::ReviewRow;
use crate::core::review::UserReviewCount;
use crate::interfaces::ReviewSource;
use crate::interfaces::SourceError;

// ============================================================================
// SECTION: In-Memory Source
// ============================================================================

/// In-memory review source over an owned row vector.
///
/// # Invariants
/// - Rows are immutable once the source is constructed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryReviewSource {
    /// The review relation, one entry per row.
    rows: Vec<ReviewRow>,
}

impl InMemoryReviewSource {
    /// Creates a source over the provided rows.
    #[must_use]
    pub fn new(rows: Vec<ReviewRow>) -> Self {
        Self {
            rows,
        }
    }

    /// Returns the number of rows in the relation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the relation has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ReviewSource for InMemoryReviewSource {
    fn user_counts_above(&self, min_count: i64) -> Result<Vec<UserReviewCount>, SourceError> {
        let mut totals: HashMap<&UserId, u64> = HashMap::new();
        for row in &self.rows {
            let slot = totals.entry(&row.user_id).or_insert(0);
            *slot = slot.saturating_add(1);
        }
        let counts = totals
            .into_iter()
            .filter(|&(_, count)| exceeds_threshold(count, min_count))
            .map(|(user_id, count)| UserReviewCount {
                user_id: user_id.clone(),
                count,
            })
            .collect();
        Ok(counts)
    }

    fn review_texts(&self) -> Result<Vec<ReviewRow>, SourceError> {
        Ok(self.rows.clone())
    }

    fn readiness(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns true when `count` is strictly greater than `min_count`.
///
/// A negative threshold admits every observed count, since counts are
/// non-negative by construction.
fn exceeds_threshold(count: u64, min_count: i64) -> bool {
    match u64::try_from(min_count) {
        Ok(threshold) => count > threshold,
        Err(_) => true,
    }
}
