//! Component-wise arithmetic over two or more vectors
//!
//! Every operation folds left to right: `v0 op v1 op v2 …`. Each step zips
//! the accumulator with the next vector and combines the pairs.
//!
//! # Invariants
//!
//! - No vectors: the seedless fold has nothing to start from and fails with
//!   [`SequenceError::InvalidArgument`]
//! - One vector: returned as a copy
//! - All vectors must share the accumulator's length. A shorter vector shows
//!   up as an absent marker from `zip`; a longer one is caught before zipping.
//!   Both fail with [`VectorError::DimensionMismatch`]
//! - Division by a zero component follows IEEE-754 (infinity or NaN)

use num_traits::Float;
use seqkit_collections::{SequenceError, fold, zip_with};

use crate::error::VectorError;

/// Component-wise sum.
pub fn add<T: Float>(vectors: &[&[T]]) -> Result<Vec<T>, VectorError> {
    fold_componentwise(|a, b| a + b, vectors)
}

/// Component-wise difference, `v0 - v1 - v2 …`.
pub fn subtract<T: Float>(vectors: &[&[T]]) -> Result<Vec<T>, VectorError> {
    fold_componentwise(|a, b| a - b, vectors)
}

/// Component-wise (Hadamard) product.
pub fn multiply<T: Float>(vectors: &[&[T]]) -> Result<Vec<T>, VectorError> {
    fold_componentwise(|a, b| a * b, vectors)
}

/// Component-wise quotient, `v0 / v1 / v2 …`.
pub fn divide<T: Float>(vectors: &[&[T]]) -> Result<Vec<T>, VectorError> {
    fold_componentwise(|a, b| a / b, vectors)
}

/// Seedless reduce over `vectors`: the first vector seeds the accumulator
/// and folding starts at the second.
fn fold_componentwise<T: Float>(op: fn(T, T) -> T, vectors: &[&[T]]) -> Result<Vec<T>, VectorError> {
    let Some((head, tail)) = vectors.split_first() else {
        tracing::debug!("component-wise fold over zero vectors");
        return Err(SequenceError::empty_without_seed().into());
    };

    fold(
        |acc: Result<Vec<T>, VectorError>, next: &&[T], _, _| {
            acc.and_then(|acc| combine_pair(op, &acc, next))
        },
        Ok(head.to_vec()),
        tail,
    )
}

fn combine_pair<T: Float>(op: fn(T, T) -> T, acc: &[T], next: &[T]) -> Result<Vec<T>, VectorError> {
    if next.len() > acc.len() {
        return Err(dimension_mismatch(acc.len(), next.len()));
    }

    let combined = zip_with(
        |row: &[Option<T>]| match row {
            [Some(a), Some(b)] => Some(op(*a, *b)),
            _ => None,
        },
        &[acc, next],
    );

    combined
        .into_iter()
        .flatten()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| dimension_mismatch(acc.len(), next.len()))
}

fn dimension_mismatch(expected: usize, actual: usize) -> VectorError {
    tracing::debug!(expected, actual, "vector dimension mismatch");
    VectorError::DimensionMismatch { expected, actual }
}
