//! Engine error types.

use thiserror::Error;

/// Arithmetic failures inside the numerics layer.
///
/// These are recoverable per-point conditions, not fatal errors: a render
/// consumes them immediately and classifies the affected point instead of
/// aborting.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by the zero complex number")]
    DivisionByZero,
}

/// Rejected parameter mutations.
///
/// Raised at the mutation boundary only; the previous valid value is always
/// retained when one of these is returned.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("iteration limit must be positive")]
    ZeroIterationMax,

    #[error("epsilon must be positive and finite (got {0})")]
    InvalidEpsilon(f64),

    #[error("viewport extent must be positive and finite (got {0})")]
    InvalidExtent(f64),
}
