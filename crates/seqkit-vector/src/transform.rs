//! Single-vector construction and transforms

use num_traits::Float;
use seqkit_collections::map;

/// Build a vector from its components.
///
/// Accepts an array of components (`create([1.0, 2.0])`) or an existing
/// sequence (`create(&existing)`); either way the result is a fresh copy.
pub fn create<T: Clone>(components: impl AsRef<[T]>) -> Vec<T> {
    components.as_ref().to_vec()
}

/// Multiply every component by `scalar`.
pub fn scale<T: Float>(vector: &[T], scalar: T) -> Vec<T> {
    map(|&component, _, _| component * scalar, vector)
}

/// Negate every component.
pub fn inverse<T: Float>(vector: &[T]) -> Vec<T> {
    map(|&component: &T, _, _| -component, vector)
}
