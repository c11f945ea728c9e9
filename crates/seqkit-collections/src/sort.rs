//! Stable multi-key sorting
//!
//! Criteria are extracted once per element, then the (criteria, element)
//! pairs are stably sorted. Elements with equal criteria keep their input
//! order, so re-sorting a sorted sequence by the same keys is a no-op.

use crate::criteria::{Criteria, Criterion};

/// A runtime key function producing a dynamically-typed [`Criterion`].
pub type KeyFn<'a, T> = &'a dyn Fn(&T) -> Criterion;

/// Stably sort a copy of `sequence` by the criteria `key` extracts.
///
/// Several keys in declared order are expressed as a tuple:
///
/// ```
/// use seqkit_collections::sort_by;
///
/// let cameras = [("sec", "b"), ("eng", "z"), ("sec", "a")];
/// let sorted = sort_by(|(area, name)| (*area, *name), &cameras);
/// assert_eq!(sorted, vec![("eng", "z"), ("sec", "a"), ("sec", "b")]);
/// ```
pub fn sort_by<T, K, F>(key: F, sequence: &[T]) -> Vec<T>
where
    T: Clone,
    K: Criteria,
    F: Fn(&T) -> K,
{
    let mut keyed: Vec<(K, &T)> = sequence.iter().map(|element| (key(element), element)).collect();
    keyed.sort_by(|(a, _), (b, _)| a.compare(b));

    tracing::trace!(len = sequence.len(), "sorted sequence by criteria");

    keyed.into_iter().map(|(_, element)| element.clone()).collect()
}

/// Stably sort by a runtime list of key functions, applied in order.
///
/// With no keys every element compares equal and the order is unchanged.
pub fn sort_by_keys<T: Clone>(keys: &[KeyFn<'_, T>], sequence: &[T]) -> Vec<T> {
    sort_by(|element| keys.iter().map(|key| key(element)).collect::<Vec<_>>(), sequence)
}

/// Stably sort a copy of `sequence` by the elements themselves.
pub fn sort<T: Clone + Criteria>(sequence: &[T]) -> Vec<T> {
    sort_by(T::clone, sequence)
}
