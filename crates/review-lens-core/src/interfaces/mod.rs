// crates/review-lens-core/src/interfaces/mod.rs
// ============================================================================
// Module: Review Lens Interfaces
// Description: Backend-agnostic interface for reading the review relation.
// Purpose: Define the contract surface used by the query pipeline.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Review Lens reads review data without embedding
//! backend-specific details. Implementations are read-only: the review
//! relation is consumed, never mutated. Failures are propagated unchanged to
//! the caller; no implementation retries or recovers locally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::review::ReviewRow;
use crate::core::review::UserReviewCount;

// ============================================================================
// SECTION: Source Errors
// ============================================================================

/// Review source errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Error messages avoid embedding review text payloads.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Data-access error reported by the backend engine.
    #[error("review source db error: {0}")]
    Db(String),
    /// The review relation or one of its expected columns is absent.
    #[error("review source schema error: {0}")]
    Schema(String),
    /// Stored data could not be represented in the domain model.
    #[error("review source invalid data: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Review Source
// ============================================================================

/// Read-only source of review rows and per-user aggregates.
///
/// Both reads observe the same underlying relation; the pipeline issues
/// exactly one call to each per query.
pub trait ReviewSource {
    /// Returns per-user review counts for users whose count is strictly
    /// greater than `min_count`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the aggregate read fails.
    fn user_counts_above(&self, min_count: i64) -> Result<Vec<UserReviewCount>, SourceError>;

    /// Returns all `(user, text)` rows of the review relation, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the read fails.
    fn review_texts(&self) -> Result<Vec<ReviewRow>, SourceError>;

    /// Verifies the source can execute a trivial read.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source is unreachable.
    fn readiness(&self) -> Result<(), SourceError>;
}
