//! Left folds over sequences
//!
//! `reduce` follows "array reduce" semantics rather than a fold with an
//! identity: without a seed, the first element becomes the accumulator and
//! folding starts at index 1.
//!
//! The combining function receives the accumulator, the element, the
//! element's index in the original sequence and the whole sequence.

use crate::error::SequenceError;

/// Fold `sequence` left to right with `combine`.
///
/// - `initial == Some(seed)`: folding starts at index 0 with `seed`
/// - `initial == None`: a clone of `sequence[0]` is the seed and folding
///   starts at index 1
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] when `initial` is `None` and
/// `sequence` is empty.
pub fn reduce<T, F>(combine: F, initial: Option<T>, sequence: &[T]) -> Result<T, SequenceError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    match initial {
        Some(seed) => Ok(fold_from(0, combine, seed, sequence)),
        None => {
            let Some(first) = sequence.first() else {
                tracing::debug!("seedless reduce over an empty sequence");
                return Err(SequenceError::empty_without_seed());
            };
            Ok(fold_from(1, combine, first.clone(), sequence))
        },
    }
}

/// Seeded fold with an accumulator type independent of the element type.
///
/// Equivalent to `reduce(combine, Some(initial), sequence)` when the types
/// line up, but never fails.
pub fn fold<T, A, F>(combine: F, initial: A, sequence: &[T]) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    fold_from(0, combine, initial, sequence)
}

fn fold_from<T, A, F>(start: usize, mut combine: F, seed: A, sequence: &[T]) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    sequence
        .iter()
        .enumerate()
        .skip(start)
        .fold(seed, |acc, (index, element)| combine(acc, element, index, sequence))
}
