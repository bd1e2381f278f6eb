// ─────────────────────────────────────────────────────────────────────
// Hilbert–Bell Manifold — Error Hierarchy
// ─────────────────────────────────────────────────────────────────────

use thiserror::Error;

/// Root error type for all manifold failures.
///
/// Every variant is local, synchronous, and non-retryable: it signals a
/// programming or configuration error, never a transient condition. No
/// operation mutates its target before validation passes, so a returned
/// error always leaves the manifold in its prior state.
#[derive(Error, Debug)]
pub enum ManifoldError {
    /// Amplitude/bias vector length disagrees with the expected dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A zero-norm amplitude vector was supplied; it cannot be normalised.
    #[error("zero-norm state is not physical")]
    DegenerateState,

    /// The admissible-subspace capacity bound would be exceeded.
    #[error("cannot exceed {capacity} basis states")]
    CapacityExceeded { capacity: usize },

    /// A coupling or cell index lies outside the valid range.
    #[error("index {index} out of range for dimension {dim}")]
    IndexOutOfRange { index: usize, dim: usize },

    /// State initialisation was requested before any basis state exists.
    #[error("basis must be populated before state initialisation")]
    EmptyBasis,

    /// An operational call arrived before its required setup.
    #[error("not initialised: {0}")]
    NotInitialized(&'static str),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),
}

pub type ManifoldResult<T> = Result<T, ManifoldError>;
