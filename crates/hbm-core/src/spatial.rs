// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Spatial Discretisation Layer
// ─────────────────────────────────────────────────────────────────────
//! Layer 1: discrete partition of the physical domain, Ω = ⋃ V_i.
//!
//! The partition induces a finite-dimensional state space but is not
//! identical to it: cells and basis states share indices only. A cell's
//! regime tag never restricts what the state vector contains.

use serde::{Deserialize, Serialize};

use hbm_types::Regime;

/// One cell V_i in the spatial partition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoxelCell {
    pub index: usize,
    pub label: String,
    pub regime: Regime,
}

/// Flat ordered collection of labelled cells.
#[derive(Debug, Clone, Default)]
pub struct SpatialPartition {
    cells: Vec<VoxelCell>,
}

impl SpatialPartition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self, index: usize, label: impl Into<String>, regime: Regime) {
        self.cells.push(VoxelCell {
            index,
            label: label.into(),
            regime,
        });
    }

    pub fn cells(&self) -> &[VoxelCell] {
        &self.cells
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells_in(&self, regime: Regime) -> impl Iterator<Item = &VoxelCell> {
        self.cells.iter().filter(move |c| c.regime == regime)
    }

    pub fn quantum_cells(&self) -> Vec<&VoxelCell> {
        self.cells_in(Regime::Quantum).collect()
    }

    pub fn classical_cells(&self) -> Vec<&VoxelCell> {
        self.cells_in(Regime::Classical).collect()
    }

    pub fn hybrid_cells(&self) -> Vec<&VoxelCell> {
        self.cells_in(Regime::Hybrid).collect()
    }
}
