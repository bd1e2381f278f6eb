// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Runtime Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{ManifoldError, ManifoldResult};
use crate::regime::Regime;
use crate::K_MAX;

/// One basis state of the admissible subspace, already parsed from the
/// declarative manifold description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisSpec {
    /// 0-based basis index.
    pub index: usize,
    pub label: String,
    #[serde(default)]
    pub description: String,
}

/// One symmetric coupling pair T_ij, already parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingSpec {
    pub i: usize,
    pub j: usize,
    pub weight: f64,
    #[serde(default)]
    pub label: String,
}

/// One spatial partition cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CellSpec {
    pub index: usize,
    #[serde(default)]
    pub label: String,
    pub regime: Regime,
}

/// Runtime configuration for one manifold instance.
///
/// Holds only already-parsed data: file access and format parsing happen
/// in the external driver, never here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifoldConfig {
    /// Basis states of the admissible subspace (at most [`K_MAX`]).
    #[serde(default)]
    pub basis_states: Vec<BasisSpec>,

    /// Symmetric entanglement couplings.
    #[serde(default)]
    pub couplings: Vec<CouplingSpec>,

    /// Spatial partition cells.
    #[serde(default)]
    pub cells: Vec<CellSpec>,

    /// Integration step size for the Hamiltonian evolver.
    /// Default: 0.01.
    pub dt: f64,

    /// Per-index intent (bias) weights; empty means all-zero.
    #[serde(default)]
    pub bias_weights: Vec<f64>,

    /// Relevance threshold for selective mining. Default: 0.5.
    pub relevance_threshold: f64,

    /// Quality threshold for selective mining. Default: 0.5.
    pub quality_threshold: f64,

    /// Compliance threshold for selective mining. Default: 0.5.
    pub compliance_threshold: f64,
}

impl Default for ManifoldConfig {
    fn default() -> Self {
        Self {
            basis_states: Vec::new(),
            couplings: Vec::new(),
            cells: Vec::new(),
            dt: 0.01,
            bias_weights: Vec::new(),
            relevance_threshold: 0.5,
            quality_threshold: 0.5,
            compliance_threshold: 0.5,
        }
    }
}

impl ManifoldConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> ManifoldResult<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ManifoldError::Config(format!(
                "dt must be finite and > 0, got {}",
                self.dt
            )));
        }
        if self.basis_states.len() > K_MAX {
            return Err(ManifoldError::Config(format!(
                "at most {K_MAX} basis states are admissible, got {}",
                self.basis_states.len()
            )));
        }
        for spec in &self.basis_states {
            if spec.index >= K_MAX {
                return Err(ManifoldError::Config(format!(
                    "basis index {} out of range (< {K_MAX})",
                    spec.index
                )));
            }
        }
        for cp in &self.couplings {
            if cp.i >= K_MAX || cp.j >= K_MAX {
                return Err(ManifoldError::Config(format!(
                    "coupling pair ({}, {}) out of range (< {K_MAX})",
                    cp.i, cp.j
                )));
            }
            if !cp.weight.is_finite() {
                return Err(ManifoldError::Config(format!(
                    "coupling T_{},{} must be finite",
                    cp.i, cp.j
                )));
            }
        }
        if !self.bias_weights.is_empty() && self.bias_weights.len() != K_MAX {
            return Err(ManifoldError::Config(format!(
                "bias_weights must be empty or length {K_MAX}, got {}",
                self.bias_weights.len()
            )));
        }
        for (name, t) in [
            ("relevance_threshold", self.relevance_threshold),
            ("quality_threshold", self.quality_threshold),
            ("compliance_threshold", self.compliance_threshold),
        ] {
            if !(0.0..=1.0).contains(&t) {
                return Err(ManifoldError::Config(format!(
                    "{name} must be in [0, 1], got {t}"
                )));
            }
        }
        Ok(())
    }

    /// Load from a JSON string.
    pub fn from_json(json: &str) -> ManifoldResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ManifoldError::Config(format!("JSON parse error: {e}")))
    }
}
