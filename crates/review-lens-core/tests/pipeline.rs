// crates/review-lens-core/tests/pipeline.rs
// ============================================================================
// Module: Query Pipeline Tests
// Description: Unit tests for the filtered query and the explicit inner join.
// Purpose: Validate threshold strictness, result tallies, join semantics,
//          and error propagation.
// ============================================================================

//! ## Overview
//! Unit tests for the query stage against the in-memory reference source:
//! - Strict `>` threshold filtering and the documented scenario
//! - `total_rows`/`qualifying_users` tallies
//! - Explicit inner-join semantics (drop, annotate, preserve order)
//! - Monotonicity of the qualifying-user set across thresholds
//! - Unchanged propagation of source failures

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeSet;
use std::collections::HashMap;

use review_lens_core::ReviewRow;
use review_lens_core::ReviewSource;
use review_lens_core::SourceError;
use review_lens_core::UserId;
use review_lens_core::UserReviewCount;
use review_lens_core::runtime::InMemoryReviewSource;
use review_lens_core::runtime::inner_join_counts;
use review_lens_core::runtime::query_data;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn source_from(rows: &[(&str, &str)]) -> InMemoryReviewSource {
    InMemoryReviewSource::new(
        rows.iter().map(|&(user_id, text)| ReviewRow::new(user_id, text)).collect(),
    )
}

fn scenario_source() -> InMemoryReviewSource {
    source_from(&[("U1", "a"), ("U1", "b"), ("U2", "c")])
}

fn recomputed_counts(rows: &[(&str, &str)]) -> HashMap<String, u64> {
    let mut totals: HashMap<String, u64> = HashMap::new();
    for &(user_id, _) in rows {
        *totals.entry(user_id.to_string()).or_insert(0) += 1;
    }
    totals
}

fn qualifying_set(source: &InMemoryReviewSource, min_count: i64) -> BTreeSet<String> {
    query_data(source, min_count)
        .expect("query")
        .reviews
        .into_iter()
        .map(|review| review.user_id.as_str().to_string())
        .collect()
}

/// Source whose aggregate read always fails.
struct FailingCounts;

impl ReviewSource for FailingCounts {
    fn user_counts_above(&self, _min_count: i64) -> Result<Vec<UserReviewCount>, SourceError> {
        Err(SourceError::Db("counts read failed".to_string()))
    }

    fn review_texts(&self) -> Result<Vec<ReviewRow>, SourceError> {
        Ok(Vec::new())
    }

    fn readiness(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

/// Source whose text read always fails.
struct FailingTexts;

impl ReviewSource for FailingTexts {
    fn user_counts_above(&self, _min_count: i64) -> Result<Vec<UserReviewCount>, SourceError> {
        Ok(Vec::new())
    }

    fn review_texts(&self) -> Result<Vec<ReviewRow>, SourceError> {
        Err(SourceError::Schema("no such table: Reviews".to_string()))
    }

    fn readiness(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

// ============================================================================
// SECTION: Query Tests
// ============================================================================

#[test]
fn scenario_threshold_one_keeps_only_the_prolific_user() {
    let source = scenario_source();
    let output = query_data(&source, 1).expect("query");
    assert_eq!(output.total_rows, 2);
    assert_eq!(output.qualifying_users, 1);
    assert_eq!(output.reviews.len(), 2);
    for review in &output.reviews {
        assert_eq!(review.user_id, UserId::new("U1"));
        assert_eq!(review.count, 2);
    }
}

#[test]
fn threshold_is_strictly_greater() {
    let source = scenario_source();
    // U2 has exactly one review: count 1 is not > 1.
    let at_one = query_data(&source, 1).expect("query");
    assert!(at_one.reviews.iter().all(|review| review.user_id != UserId::new("U2")));
    // At threshold 0 the single review qualifies.
    let at_zero = query_data(&source, 0).expect("query");
    assert!(at_zero.reviews.iter().any(|review| review.user_id == UserId::new("U2")));
    assert_eq!(at_zero.qualifying_users, 2);
    assert_eq!(at_zero.total_rows, 3);
}

#[test]
fn negative_threshold_admits_every_user() {
    let source = scenario_source();
    let output = query_data(&source, -5).expect("query");
    assert_eq!(output.total_rows, 3);
    assert_eq!(output.qualifying_users, 2);
}

#[test]
fn tallies_match_returned_rows() {
    let rows = [("U1", "a"), ("U2", "b"), ("U1", "c"), ("U3", "d"), ("U1", "e"), ("U2", "f")];
    let source = source_from(&rows);
    let output = query_data(&source, 1).expect("query");
    assert_eq!(output.total_rows, output.reviews.len());
    let distinct: BTreeSet<&str> =
        output.reviews.iter().map(|review| review.user_id.as_str()).collect();
    assert_eq!(output.qualifying_users, distinct.len());
}

#[test]
fn returned_counts_match_independent_recomputation() {
    let rows = [("U1", "a"), ("U2", "b"), ("U1", "c"), ("U3", "d"), ("U1", "e"), ("U2", "f")];
    let source = source_from(&rows);
    let truth = recomputed_counts(&rows);
    let min_count = 1;
    let output = query_data(&source, min_count).expect("query");
    for review in &output.reviews {
        let true_count = truth[review.user_id.as_str()];
        assert_eq!(review.count, true_count);
        assert!(true_count > 1, "user {} failed the threshold", review.user_id);
    }
}

#[test]
fn qualifying_sets_shrink_monotonically() {
    let rows = [("U1", "a"), ("U2", "b"), ("U1", "c"), ("U3", "d"), ("U1", "e"), ("U2", "f")];
    let source = source_from(&rows);
    let mut previous = qualifying_set(&source, 0);
    for threshold in 1 .. 4 {
        let current = qualifying_set(&source, threshold);
        assert!(current.is_subset(&previous), "threshold {threshold} grew the qualifying set");
        previous = current;
    }
}

#[test]
fn empty_relation_yields_empty_output() {
    let source = InMemoryReviewSource::new(Vec::new());
    let output = query_data(&source, 0).expect("query");
    assert!(output.reviews.is_empty());
    assert_eq!(output.total_rows, 0);
    assert_eq!(output.qualifying_users, 0);
}

// ============================================================================
// SECTION: Join Tests
// ============================================================================

#[test]
fn join_drops_rows_without_a_matching_count() {
    let texts = vec![ReviewRow::new("U1", "a"), ReviewRow::new("U2", "b")];
    let counts = vec![UserReviewCount {
        user_id: UserId::new("U1"),
        count: 4,
    }];
    let joined = inner_join_counts(texts, &counts);
    assert_eq!(joined.len(), 1);
    assert_eq!(joined[0].user_id, UserId::new("U1"));
    assert_eq!(joined[0].text, "a");
    assert_eq!(joined[0].count, 4);
}

#[test]
fn join_replicates_a_count_across_all_author_rows() {
    let texts =
        vec![ReviewRow::new("U1", "a"), ReviewRow::new("U2", "b"), ReviewRow::new("U1", "c")];
    let counts = vec![
        UserReviewCount {
            user_id: UserId::new("U1"),
            count: 2,
        },
        UserReviewCount {
            user_id: UserId::new("U2"),
            count: 1,
        },
    ];
    let joined = inner_join_counts(texts, &counts);
    let texts_in_order: Vec<&str> = joined.iter().map(|review| review.text.as_str()).collect();
    assert_eq!(texts_in_order, vec!["a", "b", "c"]);
    assert_eq!(joined[0].count, 2);
    assert_eq!(joined[1].count, 1);
    assert_eq!(joined[2].count, 2);
}

#[test]
fn join_of_disjoint_inputs_is_empty() {
    let texts = vec![ReviewRow::new("U1", "a")];
    let counts = vec![UserReviewCount {
        user_id: UserId::new("U9"),
        count: 3,
    }];
    assert!(inner_join_counts(texts, &counts).is_empty());
}

// ============================================================================
// SECTION: Error Propagation Tests
// ============================================================================

#[test]
fn failing_aggregate_read_fails_the_whole_query() {
    let result = query_data(&FailingCounts, 1);
    assert!(matches!(result, Err(SourceError::Db(message)) if message.contains("counts")));
}

#[test]
fn failing_text_read_fails_the_whole_query() {
    let result = query_data(&FailingTexts, 1);
    assert!(matches!(result, Err(SourceError::Schema(message)) if message.contains("Reviews")));
}
