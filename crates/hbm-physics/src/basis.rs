// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Basis Registry
// ─────────────────────────────────────────────────────────────────────
//! Ordered, capacity-bounded registry of the named basis vectors |S_k⟩
//! spanning the admissible subspace.

use serde::{Deserialize, Serialize};

use hbm_types::{ManifoldError, ManifoldResult, K_MAX};

/// One named basis vector |S_k⟩ of the admissible subspace.
///
/// Immutable once registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasisState {
    /// 0-based basis index (S1 ↔ index 0).
    pub index: usize,
    pub label: String,
    pub description: String,
}

impl BasisState {
    /// Render the ket label 1-based: index 0 → `|S_1⟩`.
    pub fn ket(&self) -> String {
        format!("|S_{}⟩", self.index + 1)
    }
}

/// Ordered set of basis states, capped at [`K_MAX`].
///
/// The capacity invariant is enforced at insertion; a rejected insertion
/// leaves the registry unchanged.
#[derive(Debug, Clone, Default)]
pub struct BasisRegistry {
    states: Vec<BasisState>,
}

impl BasisRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        index: usize,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> ManifoldResult<()> {
        if self.states.len() >= K_MAX {
            return Err(ManifoldError::CapacityExceeded { capacity: K_MAX });
        }
        self.states.push(BasisState {
            index,
            label: label.into(),
            description: description.into(),
        });
        Ok(())
    }

    pub fn states(&self) -> &[BasisState] {
        &self.states
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
