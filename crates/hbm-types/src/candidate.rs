// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Selection Candidate Types
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// Clamp a criterion value to [lo, hi], mapping NaN to lo and Inf to the
/// nearest bound.
#[inline]
pub fn clamp_criterion(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_criterion: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_criterion: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// A candidate datum evaluated by the selection predicate.
///
/// Criterion values are clamped to [0, 1] at construction; the record is
/// immutable afterwards and selection never mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataCandidate {
    /// Caller-assigned identifier.
    pub id: String,
    /// Opaque payload carried through selection untouched.
    #[serde(default)]
    pub payload: serde_json::Value,
    /// Relevance criterion R(d) ∈ [0, 1].
    pub relevance: f64,
    /// Quality criterion Q(d) ∈ [0, 1].
    pub quality: f64,
    /// Compliance criterion C(d) ∈ [0, 1].
    pub compliance: f64,
}

impl DataCandidate {
    pub fn new(id: impl Into<String>, relevance: f64, quality: f64, compliance: f64) -> Self {
        Self {
            id: id.into(),
            payload: serde_json::Value::Null,
            relevance: clamp_criterion(relevance, 0.0, 1.0),
            quality: clamp_criterion(quality, 0.0, 1.0),
            compliance: clamp_criterion(compliance, 0.0, 1.0),
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Ranking score: R(d) · Q(d) · C(d).
    pub fn score(&self) -> f64 {
        self.relevance * self.quality * self.compliance
    }
}
