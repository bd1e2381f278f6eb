// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Normalised State Vector
// ─────────────────────────────────────────────────────────────────────
//! |ψ⟩ = Σ α_k |S_k⟩ — the central mutable entity of the engine.
//!
//! Invariant: Σ |α_k|² = 1 (within floating tolerance) after every
//! mutation. Validation runs before any amplitude is overwritten, so a
//! failed mutation leaves the previous state intact.

use num_complex::Complex64;

use hbm_types::{ManifoldError, ManifoldResult};

/// Normalised state vector living in the admissible subspace (dim ≤ 12).
#[derive(Debug, Clone)]
pub struct StateVector {
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Construct from raw amplitudes over a basis of `basis_size` states.
    ///
    /// Normalisation is global: every amplitude is divided by the
    /// Euclidean norm of the full vector.
    pub fn new(amplitudes: Vec<Complex64>, basis_size: usize) -> ManifoldResult<Self> {
        if amplitudes.len() != basis_size {
            return Err(ManifoldError::DimensionMismatch {
                expected: basis_size,
                actual: amplitudes.len(),
            });
        }
        let amplitudes = normalize(amplitudes)?;
        Ok(Self { amplitudes })
    }

    /// Equal superposition over `n` basis states: α_k = 1/√n.
    pub fn uniform(n: usize) -> ManifoldResult<Self> {
        if n == 0 {
            return Err(ManifoldError::DegenerateState);
        }
        let amp = Complex64::new(1.0 / (n as f64).sqrt(), 0.0);
        Ok(Self {
            amplitudes: vec![amp; n],
        })
    }

    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// |α_k|² per index; sums to 1 within floating tolerance.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    /// Replace all amplitudes at once, then renormalise.
    ///
    /// The only mutation path. Validation happens on the replacement
    /// vector before the swap, so the update is atomic from the caller's
    /// view: either the full new vector lands, or nothing changes.
    pub fn replace_amplitudes(&mut self, amplitudes: Vec<Complex64>) -> ManifoldResult<()> {
        if amplitudes.len() != self.amplitudes.len() {
            return Err(ManifoldError::DimensionMismatch {
                expected: self.amplitudes.len(),
                actual: amplitudes.len(),
            });
        }
        self.amplitudes = normalize(amplitudes)?;
        Ok(())
    }
}

/// Divide every amplitude by the Euclidean norm of the whole vector.
fn normalize(amplitudes: Vec<Complex64>) -> ManifoldResult<Vec<Complex64>> {
    let norm = amplitudes
        .iter()
        .map(|a| a.norm_sqr())
        .sum::<f64>()
        .sqrt();
    if norm == 0.0 {
        return Err(ManifoldError::DegenerateState);
    }
    Ok(amplitudes.into_iter().map(|a| a / norm).collect())
}
