// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Shared Types
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Hilbert–Bell Manifold — a bounded-dimension governed state-evolution
//! and classification engine.

pub mod candidate;
pub mod config;
pub mod error;
pub mod regime;

pub use candidate::{clamp_criterion, DataCandidate};
pub use config::{BasisSpec, CellSpec, CouplingSpec, ManifoldConfig};
pub use error::{ManifoldError, ManifoldResult};
pub use regime::Regime;

/// Capacity bound of the admissible subspace: at most 12 basis states,
/// and never more than 12 candidates survive selective mining.
pub const K_MAX: usize = 12;
