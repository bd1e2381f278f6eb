// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Manifold Orchestrator
// ─────────────────────────────────────────────────────────────────────
//! Top-level orchestrator integrating the three formally distinct
//! layers:
//!
//!   Layer 1 — [`SpatialPartition`]  : domain partition Ω = ⋃ V_i
//!   Layer 2 — basis + [`StateVector`] : induced Hilbert space ℂ^N
//!   Layer 3 — [`HamiltonianEvolver`]  : physical field acting on layer 2
//!
//! plus the quantum–classical boundary ([`CoherenceReductionMap`]) and
//! the append-only audit trail. One orchestrator owns one instance of
//! each collaborator; concurrent use requires independently owned
//! instances, never shared mutable access to one.

use num_complex::Complex64;

use hbm_physics::{
    BasisRegistry, BellCheck, CoherenceReductionMap, CouplingMatrix, HamiltonianEvolver,
    StateVector,
};
use hbm_types::{DataCandidate, ManifoldConfig, ManifoldError, ManifoldResult, Regime, K_MAX};

use crate::audit::{AuditEvent, AuditTrail};
use crate::mining::{selective_mining, SelectionThresholds};
use crate::spatial::SpatialPartition;

/// Orchestrator for one bounded-dimension governed manifold.
///
/// Explicitly constructed and explicitly owned: there is no process-wide
/// instance. Callers decide when it is created and discarded.
#[derive(Debug)]
pub struct HilbertBellManifold {
    domain: SpatialPartition,
    basis: BasisRegistry,
    state: Option<StateVector>,
    coupling: CouplingMatrix,
    evolver: Option<HamiltonianEvolver>,
    coherence_map: CoherenceReductionMap,
    audit: AuditTrail,
    step_count: u64,
}

impl Default for HilbertBellManifold {
    fn default() -> Self {
        Self::new()
    }
}

impl HilbertBellManifold {
    pub fn new() -> Self {
        Self {
            domain: SpatialPartition::new(),
            basis: BasisRegistry::new(),
            state: None,
            coupling: CouplingMatrix::new(K_MAX),
            evolver: None,
            coherence_map: CoherenceReductionMap::new(),
            audit: AuditTrail::new(),
            step_count: 0,
        }
    }

    /// Replay an already-parsed declarative description through the same
    /// checked setup operations. Operational calls (`initialize_state`,
    /// `evolve`, …) remain with the caller.
    pub fn from_config(config: &ManifoldConfig) -> ManifoldResult<Self> {
        config.validate()?;
        let mut manifold = Self::new();
        for cell in &config.cells {
            manifold.add_cell(cell.index, cell.label.clone(), cell.regime);
        }
        for spec in &config.basis_states {
            manifold.add_basis_state(spec.index, spec.label.clone(), spec.description.clone())?;
        }
        for cp in &config.couplings {
            manifold.set_coupling(cp.i, cp.j, cp.weight)?;
        }
        let bias = if config.bias_weights.is_empty() {
            None
        } else {
            Some(config.bias_weights.clone())
        };
        manifold.set_evolver(bias, config.dt)?;
        Ok(manifold)
    }

    // ── configuration-time ────────────────────────────────────────

    pub fn add_basis_state(
        &mut self,
        index: usize,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> ManifoldResult<()> {
        self.basis.add(index, label, description)
    }

    pub fn set_coupling(&mut self, i: usize, j: usize, weight: f64) -> ManifoldResult<()> {
        self.coupling.set_coupling(i, j, weight)
    }

    pub fn add_cell(&mut self, index: usize, label: impl Into<String>, regime: Regime) {
        self.domain.add_cell(index, label, regime);
    }

    // ── operational ───────────────────────────────────────────────

    /// Create the state vector over the populated basis; `None` means the
    /// equal superposition α_k = 1/√n.
    pub fn initialize_state(&mut self, amplitudes: Option<Vec<Complex64>>) -> ManifoldResult<()> {
        if self.basis.is_empty() {
            return Err(ManifoldError::EmptyBasis);
        }
        let n = self.basis.len();
        let state = match amplitudes {
            Some(amps) => StateVector::new(amps, n)?,
            None => StateVector::uniform(n)?,
        };
        self.audit.append(AuditEvent::StateInitialized {
            dim: n,
            probabilities: state.probabilities(),
        });
        self.state = Some(state);
        self.step_count = 0;
        Ok(())
    }

    /// Install the evolver: bias weights over the full coupling dimension
    /// (`None` means all-zero) and a fixed step size.
    pub fn set_evolver(&mut self, bias: Option<Vec<f64>>, dt: f64) -> ManifoldResult<()> {
        self.evolver = Some(HamiltonianEvolver::new(self.coupling.dim(), bias, dt)?);
        Ok(())
    }

    /// Run `steps` sequential evolution ticks, one audit entry per tick.
    ///
    /// Later ticks depend on the result of earlier ones; a failing tick
    /// stops the loop with the state as the last successful tick left it.
    pub fn evolve(&mut self, steps: u32) -> ManifoldResult<()> {
        let evolver = self
            .evolver
            .as_ref()
            .ok_or(ManifoldError::NotInitialized("evolver not set"))?;
        let state = self
            .state
            .as_mut()
            .ok_or(ManifoldError::NotInitialized("state not initialised"))?;
        for _ in 0..steps {
            evolver.step(state, &self.coupling)?;
            self.step_count += 1;
            self.audit.append(AuditEvent::EvolutionStep {
                step: self.step_count,
                probabilities: state.probabilities(),
            });
        }
        Ok(())
    }

    /// Check external correlators against the CHSH classical envelope.
    pub fn check_bell_bounds(&mut self, correlators: [f64; 4]) -> bool {
        let check = BellCheck::evaluate(correlators);
        self.audit.append(AuditEvent::BellCheck {
            correlators: check.correlators,
            b_value: check.b_value,
            passed: check.passed,
        });
        check.passed
    }

    /// Run selective mining over an external candidate pool.
    pub fn mine(
        &mut self,
        pool: &[DataCandidate],
        thresholds: SelectionThresholds,
    ) -> Vec<DataCandidate> {
        let selected = selective_mining(pool, &thresholds);
        self.audit.append(AuditEvent::DataMining {
            pool_size: pool.len(),
            selected_count: selected.len(),
            thresholds,
        });
        selected
    }

    /// Apply the coherence reduction map R(ρ) to the current state.
    ///
    /// Returns the state diagonal |α_k|² and the regime classification.
    pub fn reduce_to_classical(
        &mut self,
        tau_decoherence: f64,
        tau_dynamics: f64,
    ) -> ManifoldResult<(Vec<f64>, Regime)> {
        let state = self
            .state
            .as_ref()
            .ok_or(ManifoldError::NotInitialized("state not initialised"))?;
        let (state_diagonal, metrics) =
            self.coherence_map
                .reduce(state.amplitudes(), tau_decoherence, tau_dynamics);
        self.audit.append(AuditEvent::CoherenceReduction {
            regime: metrics.regime,
            tau_decoherence,
            tau_dynamics,
            off_diagonal_norm: metrics.off_diagonal_norm,
        });
        Ok((state_diagonal, metrics.regime))
    }

    // ── accessors ─────────────────────────────────────────────────

    pub fn domain(&self) -> &SpatialPartition {
        &self.domain
    }

    pub fn basis(&self) -> &BasisRegistry {
        &self.basis
    }

    pub fn coupling(&self) -> &CouplingMatrix {
        &self.coupling
    }

    pub fn state(&self) -> Option<&StateVector> {
        self.state.as_ref()
    }

    pub fn audit_trail(&self) -> &[crate::audit::AuditEntry] {
        self.audit.entries()
    }

    /// The audit trail as one JSON document.
    pub fn audit_json(&self) -> serde_json::Result<String> {
        self.audit.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEvent;

    const TOL: f64 = 1e-9;

    fn configured_manifold() -> HilbertBellManifold {
        let mut m = HilbertBellManifold::new();
        for i in 0..4 {
            m.add_cell(i, format!("V{}", i + 1), Regime::Quantum);
            m.add_basis_state(i, format!("S{}", i + 1), "").unwrap();
        }
        m.set_coupling(0, 1, 0.3).unwrap();
        m.set_coupling(2, 3, 0.2).unwrap();
        m
    }

    #[test]
    fn test_initialize_before_basis_fails() {
        let mut m = HilbertBellManifold::new();
        assert!(matches!(
            m.initialize_state(None),
            Err(ManifoldError::EmptyBasis)
        ));
        assert!(m.state().is_none());
        assert!(m.audit_trail().is_empty());
    }

    #[test]
    fn test_initialize_uniform_superposition() {
        let mut m = configured_manifold();
        m.initialize_state(None).unwrap();
        let p = m.state().unwrap().probabilities();
        for prob in &p {
            assert!((prob - 0.25).abs() < TOL);
        }
        assert!(matches!(
            m.audit_trail()[0].event,
            AuditEvent::StateInitialized { dim: 4, .. }
        ));
    }

    #[test]
    fn test_evolve_before_setup_fails() {
        let mut m = configured_manifold();
        assert!(matches!(
            m.evolve(1),
            Err(ManifoldError::NotInitialized(_))
        ));
        m.set_evolver(None, 0.01).unwrap();
        // Evolver alone is not enough: the state is still missing.
        assert!(matches!(
            m.evolve(1),
            Err(ManifoldError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_evolve_appends_one_entry_per_tick() {
        let mut m = configured_manifold();
        m.initialize_state(None).unwrap();
        m.set_evolver(None, 0.01).unwrap();
        m.evolve(10).unwrap();
        let steps: Vec<u64> = m
            .audit_trail()
            .iter()
            .filter_map(|e| match &e.event {
                AuditEvent::EvolutionStep { step, .. } => Some(*step),
                _ => None,
            })
            .collect();
        assert_eq!(steps, (1..=10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_evolve_preserves_norm() {
        let mut m = configured_manifold();
        m.initialize_state(None).unwrap();
        m.set_evolver(Some(vec![0.1; K_MAX]), 0.01).unwrap();
        m.evolve(100).unwrap();
        let total: f64 = m.state().unwrap().probabilities().iter().sum();
        assert!((total - 1.0).abs() < TOL);
    }

    #[test]
    fn test_bell_check_audited() {
        let mut m = HilbertBellManifold::new();
        assert!(m.check_bell_bounds([0.5, 0.5, 0.5, -0.5]));
        assert!(!m.check_bell_bounds([1.0, 1.0, 1.0, -1.0]));
        assert_eq!(m.audit_trail().len(), 2);
        assert!(matches!(
            m.audit_trail()[1].event,
            AuditEvent::BellCheck {
                passed: false,
                b_value,
                ..
            } if b_value == 4.0
        ));
    }

    #[test]
    fn test_mine_audited() {
        let mut m = HilbertBellManifold::new();
        let pool = vec![
            DataCandidate::new("d1", 0.9, 0.8, 0.95),
            DataCandidate::new("d2", 0.3, 0.9, 0.7),
            DataCandidate::new("d3", 0.7, 0.7, 0.8),
        ];
        let selected = m.mine(&pool, SelectionThresholds::default());
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].id, "d1");
        assert!(matches!(
            m.audit_trail()[0].event,
            AuditEvent::DataMining {
                pool_size: 3,
                selected_count: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_reduce_to_classical_regimes() {
        let mut m = configured_manifold();
        m.initialize_state(None).unwrap();
        let (_, classical) = m.reduce_to_classical(0.001, 1.0).unwrap();
        assert_eq!(classical, Regime::Classical);
        let (_, quantum) = m.reduce_to_classical(1.0, 1.0).unwrap();
        assert_eq!(quantum, Regime::Quantum);
        let (diag, hybrid) = m.reduce_to_classical(0.5, 1.0).unwrap();
        assert_eq!(hybrid, Regime::Hybrid);
        let total: f64 = diag.iter().sum();
        assert!((total - 1.0).abs() < TOL);
    }

    #[test]
    fn test_reduce_without_state_fails() {
        let mut m = configured_manifold();
        assert!(matches!(
            m.reduce_to_classical(0.5, 1.0),
            Err(ManifoldError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_thirteenth_basis_state_rejected() {
        let mut m = HilbertBellManifold::new();
        for i in 0..K_MAX {
            m.add_basis_state(i, format!("S{}", i + 1), "").unwrap();
        }
        assert!(matches!(
            m.add_basis_state(12, "S13", ""),
            Err(ManifoldError::CapacityExceeded { capacity: 12 })
        ));
        assert_eq!(m.basis().len(), K_MAX);
    }

    #[test]
    fn test_repeated_evolution_is_deterministic() {
        let run = || {
            let mut m = configured_manifold();
            m.initialize_state(None).unwrap();
            m.set_evolver(Some(vec![0.2; K_MAX]), 0.01).unwrap();
            m.evolve(25).unwrap();
            m.state().unwrap().probabilities()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_from_config_replays_setup() {
        let config = ManifoldConfig::from_json(
            r#"{
                "basis_states": [
                    {"index": 0, "label": "S1", "description": "first"},
                    {"index": 1, "label": "S2"}
                ],
                "couplings": [{"i": 0, "j": 1, "weight": 0.3, "label": "tunnel"}],
                "cells": [
                    {"index": 0, "label": "V1", "regime": "quantum"},
                    {"index": 1, "label": "V2", "regime": "classical"}
                ],
                "dt": 0.02,
                "relevance_threshold": 0.5,
                "quality_threshold": 0.5,
                "compliance_threshold": 0.5
            }"#,
        )
        .unwrap();
        let mut m = HilbertBellManifold::from_config(&config).unwrap();
        assert_eq!(m.basis().len(), 2);
        assert_eq!(m.domain().size(), 2);
        assert_eq!(m.coupling().get(1, 0).unwrap(), 0.3);
        m.initialize_state(None).unwrap();
        m.evolve(5).unwrap();
        assert_eq!(m.audit_trail().len(), 6); // init + 5 ticks
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let config = ManifoldConfig {
            dt: -1.0,
            ..Default::default()
        };
        assert!(HilbertBellManifold::from_config(&config).is_err());
    }

    #[test]
    fn test_audit_json_is_one_document() {
        let mut m = configured_manifold();
        m.initialize_state(None).unwrap();
        m.check_bell_bounds([0.5, 0.5, 0.5, -0.4]);
        let json = m.audit_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[1]["event"], "bell_check");
    }

    #[test]
    fn test_custom_amplitudes_validated_against_basis() {
        let mut m = configured_manifold();
        let err = m
            .initialize_state(Some(vec![Complex64::new(1.0, 0.0); 3]))
            .unwrap_err();
        assert!(matches!(
            err,
            ManifoldError::DimensionMismatch {
                expected: 4,
                actual: 3
            }
        ));
        // Failed initialisation leaves no state and no audit entry.
        assert!(m.state().is_none());
        assert!(m.audit_trail().is_empty());
    }
}
