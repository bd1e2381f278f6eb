// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Orchestration Layer
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Orchestration layer of the manifold engine: selective data mining,
//! the spatial partition, the append-only audit trail, and the
//! [`HilbertBellManifold`] orchestrator that composes them with the
//! Hilbert-space layer.
//!
//! # Invariants
//!
//! 1. **Append-only audit**: every state-affecting or state-inspecting
//!    operational call appends exactly one entry; entries are never
//!    edited or removed afterwards.
//!
//! 2. **No partial mutation**: a failing operation surfaces its error to
//!    the caller and leaves the manifold exactly as it was.
//!
//! 3. **Exclusive ownership**: one orchestrator owns its state vector,
//!    coupling matrix, and audit trail. Running several manifolds
//!    concurrently means independently owned instances; cross-instance
//!    isolation, not intra-instance locking, is the correctness
//!    mechanism.

pub mod audit;
pub mod manifold;
pub mod mining;
pub mod spatial;

pub use audit::{AuditEntry, AuditEvent, AuditTrail};
pub use manifold::HilbertBellManifold;
pub use mining::{selection_predicate, selective_mining, SelectionThresholds};
pub use spatial::{SpatialPartition, VoxelCell};
