// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Entanglement Coupling Matrix
// ─────────────────────────────────────────────────────────────────────
//! T_ij — symmetric pairwise coupling weights between basis states.
//!
//! Symmetry is an invariant, not a convention: the single mutator writes
//! both (i, j) and (j, i) in one call, so the two cells can never drift
//! apart.

use hbm_types::{ManifoldError, ManifoldResult};

/// Symmetric dim×dim coupling matrix, all cells defaulting to 0.
#[derive(Debug, Clone)]
pub struct CouplingMatrix {
    dim: usize,
    weights: Vec<Vec<f64>>,
}

impl CouplingMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            weights: vec![vec![0.0; dim]; dim],
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Write `weight` into both (i, j) and (j, i).
    ///
    /// Self-coupling (i == j) is permitted but never read by the evolver;
    /// diagonal contributions come from the bias vector.
    pub fn set_coupling(&mut self, i: usize, j: usize, weight: f64) -> ManifoldResult<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.weights[i][j] = weight;
        self.weights[j][i] = weight;
        Ok(())
    }

    /// Coupling weight at (i, j); 0 for any unset pair.
    pub fn get(&self, i: usize, j: usize) -> ManifoldResult<f64> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.weights[i][j])
    }

    /// Row-copy of the full matrix.
    pub fn matrix(&self) -> Vec<Vec<f64>> {
        self.weights.clone()
    }

    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.weights[i]
    }

    fn check_index(&self, index: usize) -> ManifoldResult<()> {
        if index >= self.dim {
            return Err(ManifoldError::IndexOutOfRange {
                index,
                dim: self.dim,
            });
        }
        Ok(())
    }
}
