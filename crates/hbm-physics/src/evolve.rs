// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Intentional Hamiltonian Evolver
// ─────────────────────────────────────────────────────────────────────
//! Discrete-time approximate evolution under H = H_0 + H_int + H_intent.
//!
//! First-order (Euler) update with post-step renormalisation:
//!
//!   α_k ← α_k + (0, -dt·bias_k)·α_k + (0, -dt)·Σ_{j≠k} T_kj α_j
//!
//! The update itself is not norm-preserving for nonzero dt; the system is
//! correct because every step ends in a renormalising
//! `replace_amplitudes`. Do not swap this for an exact unitary integrator
//! without flagging the behavioural change — the approximation is
//! intentional and sufficient for the bounded 12-dimensional subspace at
//! small dt. Step-size stability is the caller's responsibility; no error
//! is raised for large dt.

use num_complex::Complex64;

use hbm_types::{ManifoldError, ManifoldResult};

use crate::coupling::CouplingMatrix;
use crate::state::StateVector;

/// Single-transition, repeatable evolver: fixed bias vector and step
/// size, applied against a borrowed coupling matrix each step.
#[derive(Debug, Clone)]
pub struct HamiltonianEvolver {
    bias: Vec<f64>,
    dt: f64,
}

impl HamiltonianEvolver {
    /// `bias` length must equal `dim`; `None` means all-zero bias.
    pub fn new(dim: usize, bias: Option<Vec<f64>>, dt: f64) -> ManifoldResult<Self> {
        let bias = bias.unwrap_or_else(|| vec![0.0; dim]);
        if bias.len() != dim {
            return Err(ManifoldError::DimensionMismatch {
                expected: dim,
                actual: bias.len(),
            });
        }
        Ok(Self { bias, dt })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn bias(&self) -> &[f64] {
        &self.bias
    }

    /// One discrete evolution step followed by renormalisation.
    ///
    /// Every contribution is computed from the pre-step amplitude vector;
    /// all indices update simultaneously. The state dimension may be
    /// smaller than the coupling dimension (only the leading submatrix is
    /// read), never larger.
    pub fn step(&self, state: &mut StateVector, coupling: &CouplingMatrix) -> ManifoldResult<()> {
        let dim = state.dim();
        if dim > coupling.dim() || dim > self.bias.len() {
            return Err(ManifoldError::DimensionMismatch {
                expected: coupling.dim().min(self.bias.len()),
                actual: dim,
            });
        }
        let amps = state.amplitudes();
        let mut new_amps = Vec::with_capacity(dim);
        for k in 0..dim {
            // H_0 contribution: diagonal phase from the bias vector.
            let phase_k = Complex64::new(0.0, -self.dt * self.bias[k]);
            // H_int contribution: off-diagonal tunnelling.
            let row = coupling.row(k);
            let mut coupling_sum = Complex64::new(0.0, 0.0);
            for j in 0..dim {
                if j != k {
                    coupling_sum += row[j] * amps[j];
                }
            }
            let new_amp =
                amps[k] + phase_k * amps[k] + Complex64::new(0.0, -self.dt) * coupling_sum;
            new_amps.push(new_amp);
        }
        state.replace_amplitudes(new_amps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn coupled_pair() -> CouplingMatrix {
        let mut m = CouplingMatrix::new(2);
        m.set_coupling(0, 1, 0.5).unwrap();
        m
    }

    #[test]
    fn test_step_preserves_norm() {
        let mut state = StateVector::uniform(2).unwrap();
        let evolver = HamiltonianEvolver::new(2, None, 0.01).unwrap();
        let coupling = coupled_pair();
        for _ in 0..100 {
            evolver.step(&mut state, &coupling).unwrap();
            let total: f64 = state.probabilities().iter().sum();
            assert!((total - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_evolution_is_deterministic() {
        let coupling = coupled_pair();
        let evolver = HamiltonianEvolver::new(2, Some(vec![0.3, -0.1]), 0.01).unwrap();

        let run = || {
            let mut state = StateVector::new(
                vec![Complex64::new(0.8, 0.0), Complex64::new(0.0, 0.6)],
                2,
            )
            .unwrap();
            for _ in 0..50 {
                evolver.step(&mut state, &coupling).unwrap();
            }
            state.probabilities()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_uniform_bias_is_global_phase() {
        // With no coupling and equal bias everywhere, the update scales
        // every amplitude by the same complex factor; renormalisation
        // cancels it and probabilities stay put.
        let coupling = CouplingMatrix::new(2);
        let evolver = HamiltonianEvolver::new(2, Some(vec![1.5, 1.5]), 0.01).unwrap();
        let mut state = StateVector::new(
            vec![Complex64::new(0.6, 0.0), Complex64::new(0.8, 0.0)],
            2,
        )
        .unwrap();
        let before = state.probabilities();
        for _ in 0..10 {
            evolver.step(&mut state, &coupling).unwrap();
        }
        let after = state.probabilities();
        for (b, a) in before.iter().zip(&after) {
            assert!((b - a).abs() < TOL);
        }
    }

    #[test]
    fn test_coupling_transfers_population() {
        // |ψ⟩ = |S_1⟩ with a nonzero tunnelling weight must leak
        // probability into |S_2⟩.
        let coupling = coupled_pair();
        let evolver = HamiltonianEvolver::new(2, None, 0.05).unwrap();
        let mut state = StateVector::new(
            vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)],
            2,
        )
        .unwrap();
        for _ in 0..20 {
            evolver.step(&mut state, &coupling).unwrap();
        }
        let p = state.probabilities();
        assert!(p[1] > 0.0);
        assert!(p[0] < 1.0);
    }

    #[test]
    fn test_self_coupling_has_no_effect() {
        let mut plain = CouplingMatrix::new(2);
        plain.set_coupling(0, 1, 0.4).unwrap();
        let mut with_diag = plain.clone();
        with_diag.set_coupling(0, 0, 7.0).unwrap();
        with_diag.set_coupling(1, 1, -3.0).unwrap();

        let evolver = HamiltonianEvolver::new(2, None, 0.01).unwrap();
        let mut a = StateVector::uniform(2).unwrap();
        let mut b = StateVector::uniform(2).unwrap();
        for _ in 0..25 {
            evolver.step(&mut a, &plain).unwrap();
            evolver.step(&mut b, &with_diag).unwrap();
        }
        assert_eq!(a.probabilities(), b.probabilities());
    }

    #[test]
    fn test_bias_length_mismatch_rejected() {
        let err = HamiltonianEvolver::new(3, Some(vec![0.1, 0.2]), 0.01).unwrap_err();
        assert!(matches!(
            err,
            ManifoldError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_state_wider_than_coupling_rejected() {
        let coupling = CouplingMatrix::new(2);
        let evolver = HamiltonianEvolver::new(2, None, 0.01).unwrap();
        let mut state = StateVector::uniform(3).unwrap();
        assert!(evolver.step(&mut state, &coupling).is_err());
    }

    #[test]
    fn test_state_narrower_than_coupling_allowed() {
        // A 12-wide coupling matrix drives any basis of dim ≤ 12; only
        // the leading submatrix is read.
        let mut coupling = CouplingMatrix::new(12);
        coupling.set_coupling(0, 1, 0.3).unwrap();
        let evolver = HamiltonianEvolver::new(12, None, 0.01).unwrap();
        let mut state = StateVector::uniform(3).unwrap();
        evolver.step(&mut state, &coupling).unwrap();
        let total: f64 = state.probabilities().iter().sum();
        assert!((total - 1.0).abs() < TOL);
    }
}
