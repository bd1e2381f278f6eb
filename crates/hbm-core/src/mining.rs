// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Selective Data-Mining Operator Φ
// ─────────────────────────────────────────────────────────────────────
//! Φ₁₂(D) = TopK(D, score, 12) after predicate filtering.
//!
//! The predicate is the conjunction f(d) = R(d) ∧ Q(d) ∧ C(d) of three
//! threshold checks; survivors are ranked by descending score with ties
//! kept in pool order (stable sort), then truncated to the basis
//! capacity bound.

use serde::{Deserialize, Serialize};

use hbm_types::{DataCandidate, K_MAX};

/// Threshold triple for the selection predicate. All default to 0.5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SelectionThresholds {
    pub relevance: f64,
    pub quality: f64,
    pub compliance: f64,
}

impl Default for SelectionThresholds {
    fn default() -> Self {
        Self {
            relevance: 0.5,
            quality: 0.5,
            compliance: 0.5,
        }
    }
}

/// f(d) = R(d) ∧ Q(d) ∧ C(d).
pub fn selection_predicate(candidate: &DataCandidate, thresholds: &SelectionThresholds) -> bool {
    candidate.relevance >= thresholds.relevance
        && candidate.quality >= thresholds.quality
        && candidate.compliance >= thresholds.compliance
}

/// Filter, rank by descending score (stable), truncate to [`K_MAX`].
///
/// Input records are never mutated; an empty pool yields an empty result.
pub fn selective_mining(
    pool: &[DataCandidate],
    thresholds: &SelectionThresholds,
) -> Vec<DataCandidate> {
    let mut selected: Vec<DataCandidate> = pool
        .iter()
        .filter(|d| selection_predicate(d, thresholds))
        .cloned()
        .collect();
    // Criteria are clamped to [0, 1] so scores are finite; total_cmp keeps
    // the sort well-defined regardless.
    selected.sort_by(|a, b| b.score().total_cmp(&a.score()));
    selected.truncate(K_MAX);
    selected
}
