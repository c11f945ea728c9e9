//! Element-wise selection and mapping
//!
//! Predicates and mappers see `(element, index, collection)`, the same
//! context [`reduce`](crate::reduce()) hands its combining function.

use std::{collections::HashSet, hash::Hash};

/// Keep the elements for which `predicate` returns true, in their original
/// order.
pub fn filter<T, P>(mut predicate: P, collection: &[T]) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    collection
        .iter()
        .enumerate()
        .filter(|&(index, element)| predicate(element, index, collection))
        .map(|(_, element)| element.clone())
        .collect()
}

/// [`filter`] over a collection that may be missing.
///
/// A missing collection short-circuits: `None` comes back as `None` and the
/// predicate never runs.
pub fn filter_nullable<T, P>(predicate: P, collection: Option<&[T]>) -> Option<Vec<T>>
where
    T: Clone,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    collection.map(|items| filter(predicate, items))
}

/// Apply `mapper` to every element.
pub fn map<T, U, M>(mut mapper: M, collection: &[T]) -> Vec<U>
where
    M: FnMut(&T, usize, &[T]) -> U,
{
    collection.iter().enumerate().map(|(index, element)| mapper(element, index, collection)).collect()
}

/// Drop elements whose key was already produced by an earlier element.
///
/// The first occurrence of each key wins; survivors keep their order.
pub fn uniq_by<T, K, F>(key: F, collection: &[T]) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(collection.len());
    filter(|element, _, _| seen.insert(key(element)), collection)
}

/// Integers in the half-open range `[start, end)`.
///
/// Empty when `end <= start`.
pub fn range(start: i64, end: i64) -> Vec<i64> {
    (start..end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_keeps_matching_in_order() {
        let kept = filter(|n: &i32, _, _| n % 2 == 0, &[5, 4, 3, 2, 1, 0]);
        assert_eq!(kept, vec![4, 2, 0]);
    }

    #[test]
    fn filter_sees_index_and_collection() {
        let items = ['a', 'b', 'c', 'd'];
        let kept = filter(|el, index, whole| index % 2 == 1 && whole[index] == *el, &items);
        assert_eq!(kept, vec!['b', 'd']);
    }

    #[test]
    fn filter_does_not_touch_input() {
        let items = vec![1, 2, 3];
        let _ = filter(|_, _, _| false, &items);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn filter_nullable_short_circuits_missing_collection() {
        let mut calls = 0;
        let result = filter_nullable(
            |_: &i32, _, _| {
                calls += 1;
                true
            },
            None,
        );
        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn filter_nullable_delegates_when_present() {
        let items = [1, 2, 3, 4];
        let result = filter_nullable(|n, _, _| *n > 2, Some(&items[..]));
        assert_eq!(result, Some(vec![3, 4]));
    }

    #[test]
    fn map_passes_index() {
        let labels = map(|s: &&str, index, _| format!("{index}:{s}"), &["x", "y"]);
        assert_eq!(labels, vec!["0:x".to_string(), "1:y".to_string()]);
    }

    #[test]
    fn uniq_by_keeps_first_occurrence() {
        let cameras = [("sec", 1), ("med", 2), ("sec", 3), ("eng", 4), ("med", 5)];
        let unique = uniq_by(|(area, _)| *area, &cameras);
        assert_eq!(unique, vec![("sec", 1), ("med", 2), ("eng", 4)]);
    }

    #[test]
    fn range_is_half_open() {
        assert_eq!(range(2, 5), vec![2, 3, 4]);
        assert_eq!(range(-1, 1), vec![-1, 0]);
    }

    #[test]
    fn range_empty_when_reversed() {
        assert!(range(5, 5).is_empty());
        assert!(range(5, 2).is_empty());
    }
}
