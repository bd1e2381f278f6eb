// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Coherence Reduction Map R(ρ)
// ─────────────────────────────────────────────────────────────────────
//! The quantum–classical boundary as an information-theoretic map, not a
//! geometric surface:
//!
//!   τ_decoherence ≪ τ_dynamics  ⟹  ρ → diagonal  ⟹  classical
//!   τ_decoherence ≥ τ_dynamics  ⟹  full quantum evolution required
//!
//! Plus the local projection P_i : H_i → R^k extracting classical
//! observables from the state diagonal.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use hbm_types::{ManifoldError, ManifoldResult, Regime};

/// Fraction of τ_dynamics below which a cell counts as classical.
pub const DECOHERENCE_RATIO: f64 = 0.01;

/// Coherence diagnostics for a single cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoherenceMetrics {
    pub cell_index: usize,
    /// ‖ρ − diag(ρ)‖_F.
    pub off_diagonal_norm: f64,
    pub tau_decoherence: f64,
    pub tau_dynamics: f64,
    pub regime: Regime,
}

/// R(ρ) — stateless classifier and projector at the quantum–classical
/// boundary. The classification is a pure three-way threshold: no
/// hysteresis, no memory of prior calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoherenceReductionMap;

impl CoherenceReductionMap {
    pub fn new() -> Self {
        Self
    }

    /// Three-way threshold classification.
    ///
    /// The off-diagonal magnitude is carried for diagnostics; the decision
    /// itself compares only the two timescales.
    pub fn classify(
        &self,
        _off_diagonal_norm: f64,
        tau_decoherence: f64,
        tau_dynamics: f64,
    ) -> Regime {
        if tau_decoherence < tau_dynamics * DECOHERENCE_RATIO {
            Regime::Classical
        } else if tau_decoherence >= tau_dynamics {
            Regime::Quantum
        } else {
            Regime::Hybrid
        }
    }

    /// Classify one cell and return the full diagnostic record.
    pub fn classify_regime(
        &self,
        cell_index: usize,
        off_diagonal_norm: f64,
        tau_decoherence: f64,
        tau_dynamics: f64,
    ) -> CoherenceMetrics {
        CoherenceMetrics {
            cell_index,
            off_diagonal_norm,
            tau_decoherence,
            tau_dynamics,
            regime: self.classify(off_diagonal_norm, tau_decoherence, tau_dynamics),
        }
    }

    /// ‖ρ − diag(ρ)‖_F for the pure state ρ = |ψ⟩⟨ψ|.
    ///
    /// Off-diagonal entries are α_i α_j*, so the Frobenius norm reduces to
    /// sqrt(Σ_{i≠j} |α_i|² |α_j|²).
    pub fn off_diagonal_norm(&self, amplitudes: &[Complex64]) -> f64 {
        let n = amplitudes.len();
        let mut sum = 0.0;
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    sum += amplitudes[i].norm_sqr() * amplitudes[j].norm_sqr();
                }
            }
        }
        sum.sqrt()
    }

    /// Full coherence reduction: extract the state diagonal |α_k|² and
    /// classify the regime from the off-diagonal coherence magnitude and
    /// the two timescales.
    pub fn reduce(
        &self,
        amplitudes: &[Complex64],
        tau_decoherence: f64,
        tau_dynamics: f64,
    ) -> (Vec<f64>, CoherenceMetrics) {
        let state_diagonal: Vec<f64> = amplitudes.iter().map(|a| a.norm_sqr()).collect();
        let off_diagonal_norm = self.off_diagonal_norm(amplitudes);
        let metrics = self.classify_regime(0, off_diagonal_norm, tau_decoherence, tau_dynamics);
        (state_diagonal, metrics)
    }

    /// P_i : H_i → R^k — the single-element classical observable
    /// extracted from the state diagonal at `cell_index`.
    pub fn project_to_classical(
        &self,
        probabilities: &[f64],
        cell_index: usize,
    ) -> ManifoldResult<Vec<f64>> {
        if cell_index >= probabilities.len() {
            return Err(ManifoldError::IndexOutOfRange {
                index: cell_index,
                dim: probabilities.len(),
            });
        }
        Ok(vec![probabilities[cell_index]])
    }
}
