//! # Errors
use thiserror::Error;

/// Reasons an exact operation on a fraction can't produce a value.
#[derive(Error, Eq, PartialEq, Copy, Clone, Debug)]
pub enum FractionError {
    /// A zero denominator was requested, either directly or by dividing by (or inverting) zero.
    #[error("Denominator cannot be zero.")]
    DivisionByZero,
}
