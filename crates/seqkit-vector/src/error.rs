//! Error types for vector operations

use seqkit_collections::SequenceError;
use thiserror::Error;

/// Errors from vector operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Vectors combined component-wise have different lengths
    #[error("dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch {
        /// Length of the accumulated vector
        expected: usize,
        /// Length of the vector being folded in
        actual: usize,
    },

    /// Normalizing a vector whose length is zero
    #[error("cannot normalize a zero-length vector")]
    DivideByZero,

    /// Underlying sequence operation rejected its input
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl VectorError {
    /// Returns true if the caller passed vectors of the wrong shape.
    ///
    /// Shape errors (no vectors, unequal lengths) are fixed by the caller.
    /// `DivideByZero` is a property of the values, not their shape.
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::DimensionMismatch { .. } | Self::Sequence(_) => true,
            Self::DivideByZero => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_errors_are_input_errors() {
        assert!(VectorError::DimensionMismatch { expected: 2, actual: 3 }.is_input_error());
        assert!(VectorError::from(SequenceError::empty_without_seed()).is_input_error());
    }

    #[test]
    fn divide_by_zero_is_not_input_error() {
        assert!(!VectorError::DivideByZero.is_input_error());
    }

    #[test]
    fn error_display() {
        let err = VectorError::DimensionMismatch { expected: 2, actual: 3 };
        assert_eq!(err.to_string(), "dimension mismatch: expected 2 components, got 3");

        let err = VectorError::from(SequenceError::empty_without_seed());
        assert_eq!(
            err.to_string(),
            "invalid argument: cannot reduce an empty sequence without a seed"
        );
    }
}
