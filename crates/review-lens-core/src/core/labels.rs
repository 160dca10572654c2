// crates/review-lens-core/src/core/labels.rs
// ============================================================================
// Module: Review Lens Color Labels
// Description: Dense integer labels assigned to unique review authors.
// Purpose: Carry palette indexes for downstream plot colorization.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Color labels map each row of a joined result set to a small non-negative
//! integer, one per distinct author, assigned in first-encountered order.
//! The map is built fresh on each call and returned to the caller; it is
//! never cached, so two calls over differently-ordered inputs may assign
//! different integers to the same author.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Color Labels
// ============================================================================

/// Dense zero-based color indexes for a joined result set.
///
/// # Invariants
/// - `indexes.len()` equals the length of the labeled input.
/// - The set of values in `indexes` is exactly `{0, .., palette_size - 1}`.
/// - Equal authors receive equal indexes within one assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorLabels {
    /// One palette index per input row, in input order.
    pub indexes: Vec<usize>,
    /// Number of distinct authors observed (size of the palette domain).
    pub palette_size: usize,
}

impl ColorLabels {
    /// Returns true when no rows were labeled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexes.is_empty()
    }
}
