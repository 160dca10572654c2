// crates/review-lens-core/src/runtime/labels.rs
// ============================================================================
// Module: Review Lens Label Assignment
// Description: Single-scan assignment of dense color indexes to authors.
// Purpose: Replace opaque author identifiers with palette-sized integers.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Label assignment scans the author column of a joined result set once,
//! assigning each distinct author the next unused integer starting at zero in
//! first-encountered order. Downstream plotting indexes a color palette with
//! the result, so the integer domain is dense rather than the identifier's
//! native range.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use crate::core::identifiers::UserId;
use crate::core::labels::ColorLabels;
use crate::core::review::QualifiedReview;

// ============================================================================
// SECTION: Assignment
// ============================================================================

/// Assigns a dense zero-based color index to every row of `reviews`.
///
/// Equal authors receive equal indexes within one call; the mapping is stable
/// only within a single invocation. Output length and positional order match
/// the input exactly.
#[must_use]
pub fn assign_color_indexes(reviews: &[QualifiedReview]) -> ColorLabels {
    let mut assigned: HashMap<&UserId, usize> = HashMap::new();
    let mut indexes = Vec::with_capacity(reviews.len());
    for review in reviews {
        let next_index = assigned.len();
        let index = *assigned.entry(&review.user_id).or_insert(next_index);
        indexes.push(index);
    }
    ColorLabels {
        indexes,
        palette_size: assigned.len(),
    }
}
