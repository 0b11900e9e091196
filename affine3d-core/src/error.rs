//! Error types for the math crate

use thiserror::Error;

/// Math-related errors
///
/// The arithmetic operators are total; only inversion and text parsing can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MathError {
    /// Matrix has no inverse
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,

    /// Text literal did not parse as the requested type
    #[error("Failed to parse {kind} from {input:?}")]
    Parse { kind: &'static str, input: String },
}

/// Result type for math operations
pub type MathResult<T> = Result<T, MathError>;
