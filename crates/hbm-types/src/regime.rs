// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Regime Classification Label
// ─────────────────────────────────────────────────────────────────────

use std::fmt;

use serde::{Deserialize, Serialize};

/// Treatment regime of a cell or state, decided by comparing the
/// decoherence timescale against the dynamical timescale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Full quantum evolution required: τ_decoherence ≥ τ_dynamics.
    Quantum,
    /// Classical treatment admissible: τ_decoherence ≪ τ_dynamics.
    Classical,
    /// Neither threshold met; mixed treatment.
    Hybrid,
}

impl Regime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Quantum => "quantum",
            Regime::Classical => "classical",
            Regime::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
