// crates/review-lens-core/src/lib.rs
// ============================================================================
// Module: Review Lens Core
// Description: Domain model, source interface, and pure query pipeline.
// Purpose: Filter reviews by per-user count and label users for plotting.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core crate for Review Lens. It defines the review domain model, the
//! backend-agnostic [`ReviewSource`] interface, and the pure pipeline that
//! filters reviews by per-user count, inner-joins counts back onto review
//! text, and assigns dense color indexes to unique users for plotting.
//!
//! Backends (such as the `SQLite` source) implement [`ReviewSource`]; the
//! pipeline in [`runtime`] is independent of any storage engine.

pub mod core;
pub mod interfaces;
pub mod runtime;

pub use self::core::identifiers::UserId;
pub use self::core::labels::ColorLabels;
pub use self::core::review::QualifiedReview;
pub use self::core::review::ReviewQueryOutput;
pub use self::core::review::ReviewRow;
pub use self::core::review::UserReviewCount;
pub use self::interfaces::ReviewSource;
pub use self::interfaces::SourceError;
