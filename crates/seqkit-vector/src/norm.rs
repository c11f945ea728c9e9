//! Euclidean norm and normalization

use num_traits::Float;
use seqkit_collections::{map, reduce};

use crate::{
    arithmetic::{divide, multiply},
    error::VectorError,
};

/// Dot product: the seedless sum of [`multiply`]`(a, b)`.
///
/// # Errors
///
/// - [`VectorError::DimensionMismatch`] if the lengths differ
/// - [`VectorError::Sequence`] if both vectors are empty
pub fn dot<T: Float>(a: &[T], b: &[T]) -> Result<T, VectorError> {
    let products = multiply(&[a, b])?;
    Ok(reduce(|sum, &product, _, _| sum + product, None, &products)?)
}

/// Euclidean length, folded pairwise with [`Float::hypot`].
///
/// Equal to `sqrt(v · v)`, but no component is squared on its own, so a
/// finite non-zero vector never overflows to infinity or underflows to zero.
/// An empty vector has no components to fold and fails with
/// [`VectorError::Sequence`].
pub fn length<T: Float>(vector: &[T]) -> Result<T, VectorError> {
    let magnitudes = map(|component: &T, _, _| component.abs(), vector);
    Ok(reduce(|sum, &magnitude, _, _| sum.hypot(magnitude), None, &magnitudes)?)
}

/// Scale `vector` to unit length.
///
/// The length is broadcast across every component and divided out with
/// [`divide`].
///
/// # Errors
///
/// [`VectorError::DivideByZero`] if the vector's length is zero.
pub fn normalize<T: Float>(vector: &[T]) -> Result<Vec<T>, VectorError> {
    let magnitude = length(vector)?;
    if magnitude.is_zero() {
        tracing::debug!(dimensions = vector.len(), "normalize of a zero-length vector");
        return Err(VectorError::DivideByZero);
    }

    let divisor = vec![magnitude; vector.len()];
    divide(&[vector, &divisor])
}
