//! Brute-force cosine top-K ranking
//!
//! An O(N·D) scan over the candidate set. Catalog sizes are small enough
//! that no index structure is needed; the contract is a pure function over
//! a fetched snapshot, so an approximate index can replace the scan later
//! without changing callers.

use crate::candidate::Candidate;
use librix_core::{Embedding, Error};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// A candidate paired with its cosine similarity to the query.
///
/// Borrows the candidate: the ranker never retains or mutates input.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult<'a> {
    pub candidate: &'a Candidate,
    /// Cosine similarity in [-1, 1].
    pub score: f32,
}

/// Non-fatal, per-candidate condition reported alongside the ranking.
///
/// One malformed record must not break retrieval for the whole request:
/// the offending candidate is skipped, ranking continues, and the caller
/// decides whether the warning is worth surfacing.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum RankWarning {
    #[error("candidate '{id}' skipped: dimension mismatch (expected {expected}, got {actual})")]
    DimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },
}

/// Outcome of a ranking call: ordered results plus aggregated warnings.
#[derive(Debug, Clone, Serialize)]
pub struct Ranking<'a> {
    /// Sorted by descending score, ties broken by input order, at most `k` long.
    pub results: Vec<RankedResult<'a>>,
    pub warnings: Vec<RankWarning>,
}

impl<'a> Ranking<'a> {
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Candidate ids in ranked order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.candidate.id.as_str()).collect()
    }
}

/// Similarity ranker over an in-memory candidate snapshot.
///
/// Stateless apart from configuration; safe to share across concurrent
/// requests.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    min_score: Option<f32>,
}

impl Ranker {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate inclusion on a minimum similarity besides the top-K cutoff.
    ///
    /// Off by default: truncation alone decides inclusion, matching the
    /// behavior callers historically relied on.
    #[inline]
    #[must_use]
    pub fn with_min_score(mut self, floor: f32) -> Self {
        self.min_score = Some(floor);
        self
    }

    /// Rank `candidates` by cosine similarity to `query`, descending.
    ///
    /// Returns exactly `min(k, valid candidate count)` results. Candidates
    /// whose embedding length disagrees with the query are skipped and
    /// reported in [`Ranking::warnings`]; zero-magnitude embeddings (query
    /// included) are excluded silently since their similarity is undefined.
    /// An empty candidate set yields an empty ranking, not an error.
    pub fn rank<'a>(
        &self,
        query: &Embedding,
        candidates: &'a [Candidate],
        k: usize,
    ) -> Ranking<'a> {
        let mut results: Vec<RankedResult<'a>> = Vec::new();
        let mut warnings: Vec<RankWarning> = Vec::new();

        for candidate in candidates {
            match query.cosine_similarity(&candidate.embedding) {
                Ok(Some(score)) => {
                    if self.min_score.is_some_and(|floor| score < floor) {
                        debug!(id = %candidate.id, score, "below relevance floor");
                        continue;
                    }
                    results.push(RankedResult { candidate, score });
                }
                Ok(None) => {
                    debug!(id = %candidate.id, "excluded zero-magnitude embedding");
                }
                Err(Error::DimensionMismatch { expected, actual }) => {
                    warn!(id = %candidate.id, expected, actual, "dimension mismatch, candidate skipped");
                    warnings.push(RankWarning::DimensionMismatch {
                        id: candidate.id.clone(),
                        expected,
                        actual,
                    });
                }
                Err(err) => {
                    warn!(id = %candidate.id, %err, "candidate skipped");
                }
            }
        }

        // Stable sort: equal scores keep first-seen order, so identical
        // inputs always produce identical rankings.
        results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(k);

        Ranking { results, warnings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, vec: Vec<f32>) -> Candidate {
        Candidate::new(id, Embedding::new(vec))
    }

    #[test]
    fn test_scores_non_increasing() {
        let candidates = vec![
            candidate("a", vec![0.2, 0.9]),
            candidate("b", vec![1.0, 0.0]),
            candidate("c", vec![0.7, 0.7]),
            candidate("d", vec![-1.0, 0.0]),
        ];
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 10);
        assert_eq!(ranking.results.len(), 4);
        for pair in ranking.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert_eq!(ranking.results[0].candidate.id, "b");
        assert_eq!(ranking.results[3].candidate.id, "d");
    }

    #[test]
    fn test_truncates_to_k() {
        let candidates: Vec<Candidate> = (0..10)
            .map(|i| candidate(&format!("c{i}"), vec![1.0, i as f32]))
            .collect();
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 3);
        assert_eq!(ranking.results.len(), 3);
    }

    #[test]
    fn test_fewer_candidates_than_k() {
        let candidates = vec![candidate("only", vec![1.0, 0.0])];
        let query = Embedding::new(vec![0.5, 0.5]);

        let ranking = Ranker::new().rank(&query, &candidates, 5);
        assert_eq!(ranking.results.len(), 1);
        assert!(ranking.warnings.is_empty());
    }

    #[test]
    fn test_empty_candidates() {
        let query = Embedding::new(vec![1.0, 0.0]);
        let ranking = Ranker::new().rank(&query, &[], 3);
        assert!(ranking.is_empty());
        assert!(ranking.warnings.is_empty());
    }

    #[test]
    fn test_self_similarity() {
        let candidates = vec![candidate("self", vec![0.3, -1.2, 0.8])];
        let query = Embedding::new(vec![0.3, -1.2, 0.8]);

        let ranking = Ranker::new().rank(&query, &candidates, 1);
        assert!((ranking.results[0].score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_vector_candidate_excluded() {
        let candidates = vec![
            candidate("zero", vec![0.0, 0.0]),
            candidate("ok", vec![1.0, 0.0]),
        ];
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 10);
        assert_eq!(ranking.ids(), vec!["ok"]);
        // Degenerate vectors are a valid data state, not a warning.
        assert!(ranking.warnings.is_empty());
    }

    #[test]
    fn test_zero_query_excludes_everything() {
        let candidates = vec![candidate("a", vec![1.0, 0.0])];
        let query = Embedding::new(vec![0.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 10);
        assert!(ranking.is_empty());
    }

    #[test]
    fn test_dimension_mismatch_skips_and_continues() {
        let candidates = vec![
            candidate("short", vec![1.0]),
            candidate("ok", vec![1.0, 0.0]),
            candidate("long", vec![1.0, 0.0, 0.0]),
        ];
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 10);
        assert_eq!(ranking.ids(), vec!["ok"]);
        assert_eq!(
            ranking.warnings,
            vec![
                RankWarning::DimensionMismatch {
                    id: "short".to_string(),
                    expected: 2,
                    actual: 1
                },
                RankWarning::DimensionMismatch {
                    id: "long".to_string(),
                    expected: 2,
                    actual: 3
                },
            ]
        );
    }

    #[test]
    fn test_tie_break_keeps_input_order() {
        // X and Z are both exactly parallel to the query; X was seen first.
        let candidates = vec![
            candidate("X", vec![1.0, 0.0]),
            candidate("Y", vec![0.0, 1.0]),
            candidate("Z", vec![1.0, 0.0]),
        ];
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().rank(&query, &candidates, 2);
        assert_eq!(ranking.ids(), vec!["X", "Z"]);
        assert!((ranking.results[0].score - 1.0).abs() < 1e-6);
        assert!((ranking.results[1].score - 1.0).abs() < 1e-6);

        let full = Ranker::new().rank(&query, &candidates, 3);
        assert_eq!(full.ids(), vec!["X", "Z", "Y"]);
        assert!(full.results[2].score.abs() < 1e-6);
    }

    #[test]
    fn test_min_score_floor() {
        let candidates = vec![
            candidate("near", vec![1.0, 0.1]),
            candidate("far", vec![0.0, 1.0]),
        ];
        let query = Embedding::new(vec![1.0, 0.0]);

        let ranking = Ranker::new().with_min_score(0.5).rank(&query, &candidates, 10);
        assert_eq!(ranking.ids(), vec!["near"]);
    }
}
