// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Append-Only Audit Trail
// ─────────────────────────────────────────────────────────────────────
//! Structured, append-only event trail kept by the orchestrator.
//!
//! Each entry is one tagged variant under a shared timestamp/tag
//! envelope, so consumers can exhaustively match known event kinds while
//! unknown fields in future entries deserialise without breaking
//! (serde's default behaviour).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use hbm_types::Regime;

use crate::mining::SelectionThresholds;

/// Event-specific payload of one audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AuditEvent {
    /// A state vector was (re)initialised over the populated basis.
    StateInitialized { dim: usize, probabilities: Vec<f64> },
    /// One Hamiltonian evolution tick completed.
    EvolutionStep { step: u64, probabilities: Vec<f64> },
    /// A CHSH envelope check ran against external correlators.
    BellCheck {
        correlators: [f64; 4],
        b_value: f64,
        passed: bool,
    },
    /// Selective mining ran over an external candidate pool.
    DataMining {
        pool_size: usize,
        selected_count: usize,
        thresholds: SelectionThresholds,
    },
    /// The coherence reduction map classified the current state.
    CoherenceReduction {
        regime: Regime,
        tau_decoherence: f64,
        tau_dynamics: f64,
        off_diagonal_norm: f64,
    },
}

/// One audit record: a UTC timestamp envelope around the tagged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// RFC 3339 / ISO-8601 in the serialized form.
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub event: AuditEvent,
}

/// Append-only ordered sequence of audit entries.
///
/// Entries are never edited or removed after append.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, event: AuditEvent) {
        log::debug!("audit append: {event:?}");
        self.entries.push(AuditEntry {
            timestamp: Utc::now(),
            event,
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialise the whole trail as one JSON document.
    ///
    /// File I/O stays with the external driver; the core only produces
    /// the document.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.entries)
    }
}
