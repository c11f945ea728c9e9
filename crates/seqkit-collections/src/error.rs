//! Error types for sequence operations

use thiserror::Error;

/// Errors from sequence operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// Input is malformed for the requested operation
    ///
    /// Raised by a seedless `reduce` over an empty sequence, which has no
    /// first element to start folding from.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input
        reason: &'static str,
    },
}

impl SequenceError {
    /// Seedless fold over an empty sequence.
    pub fn empty_without_seed() -> Self {
        Self::InvalidArgument { reason: "cannot reduce an empty sequence without a seed" }
    }
}
