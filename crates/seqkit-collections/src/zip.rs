//! N-ary zip
//!
//! Rows follow the first sequence: there is one row per element of
//! `sequences[0]`. A later sequence that runs out early contributes the
//! absent marker (`None`) instead of failing; a longer one is truncated.

/// One row of [`zip`]: the `i`-th element of every input, `None` where an
/// input has no `i`-th element.
pub type ZipRow<T> = Vec<Option<T>>;

/// Group the `i`-th elements of every sequence into row `i`.
///
/// Returns `None` when no sequences are given. The first component of every
/// row is always present.
pub fn zip<T: Clone>(sequences: &[&[T]]) -> Option<Vec<ZipRow<T>>> {
    let (first, rest) = sequences.split_first()?;

    if rest.iter().any(|other| other.len() != first.len()) {
        tracing::trace!(
            rows = first.len(),
            sequences = sequences.len(),
            "zipping sequences of unequal length"
        );
    }

    let rows = first
        .iter()
        .enumerate()
        .map(|(index, head)| {
            std::iter::once(Some(head.clone()))
                .chain(rest.iter().map(|other| other.get(index).cloned()))
                .collect()
        })
        .collect();

    Some(rows)
}

/// [`zip`], then `combine` each row.
///
/// Returns `None` when no sequences are given.
pub fn zip_with<T, R, F>(mut combine: F, sequences: &[&[T]]) -> Option<Vec<R>>
where
    T: Clone,
    F: FnMut(&[Option<T>]) -> R,
{
    zip(sequences).map(|rows| rows.iter().map(|row| combine(row)).collect())
}

/// Split rows back into one sequence per column.
///
/// Absent markers are skipped. Since they only ever trail a column, this
/// recovers every input of `zip` that was no longer than the first.
pub fn unzip<T: Clone>(rows: &[ZipRow<T>]) -> Vec<Vec<T>> {
    let arity = rows.iter().map(Vec::len).max().unwrap_or(0);

    (0..arity)
        .map(|column| rows.iter().filter_map(|row| row.get(column).cloned().flatten()).collect())
        .collect()
}
