// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Hilbert-Space Layer
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Hilbert-space layer of the manifold engine: the normalised state
//! vector, the symmetric entanglement coupling matrix, the first-order
//! Hamiltonian evolver, the CHSH correlation envelope, and the coherence
//! reduction map at the quantum–classical boundary.
//!
//! # Invariants
//!
//! 1. **Unit norm**: a [`StateVector`] satisfies Σ |α_k|² = 1 after
//!    construction and after every `replace_amplitudes`. Renormalisation
//!    after the non-unitary Euler step is the correctness mechanism, not
//!    a patch.
//!
//! 2. **Symmetry**: a [`CouplingMatrix`] always has T_ij == T_ji; the
//!    single mutator writes both cells in one call.
//!
//! 3. **No partial mutation**: every fallible operation validates before
//!    it writes, so an error leaves the target unchanged.

pub mod basis;
pub mod bell;
pub mod coherence;
pub mod coupling;
pub mod evolve;
pub mod state;

pub use basis::{BasisRegistry, BasisState};
pub use bell::{check_bell_bound, BellCheck, CHSH_CLASSICAL_LIMIT};
pub use coherence::{CoherenceMetrics, CoherenceReductionMap, DECOHERENCE_RATIO};
pub use coupling::CouplingMatrix;
pub use evolve::HamiltonianEvolver;
pub use state::StateVector;
