// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Bell-Bounded Correlation Envelope
// ─────────────────────────────────────────────────────────────────────
//! CHSH-style classical envelope check. Pure arithmetic, no state, no
//! failure mode: any real 4-tuple of correlators is a valid input.

use serde::{Deserialize, Serialize};

/// Classical CHSH limit: |B| must stay at or below 2.
pub const CHSH_CLASSICAL_LIMIT: f64 = 2.0;

/// Outcome of one CHSH bound evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BellCheck {
    /// The correlators (⟨A₁B₁⟩, ⟨A₁B₂⟩, ⟨A₂B₁⟩, ⟨A₂B₂⟩).
    pub correlators: [f64; 4],
    /// B = ⟨A₁B₁⟩ + ⟨A₁B₂⟩ + ⟨A₂B₁⟩ − ⟨A₂B₂⟩.
    pub b_value: f64,
    /// Whether |B| ≤ 2.
    pub passed: bool,
}

impl BellCheck {
    pub fn evaluate(correlators: [f64; 4]) -> Self {
        let [a1b1, a1b2, a2b1, a2b2] = correlators;
        let b_value = a1b1 + a1b2 + a2b1 - a2b2;
        Self {
            correlators,
            b_value,
            passed: b_value.abs() <= CHSH_CLASSICAL_LIMIT,
        }
    }
}

/// True when |B| ≤ 2 for the given correlators.
pub fn check_bell_bound(correlators: [f64; 4]) -> bool {
    BellCheck::evaluate(correlators).passed
}
