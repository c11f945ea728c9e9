//! Fuzz target for stable multi-key sorting
//!
//! # Strategy
//!
//! - Keys: small integers (many ties), floats including NaN, short strings
//! - Key shapes: single key, two-component tuple, runtime key list
//!
//! # Invariants
//!
//! - Output is a permutation of the input
//! - Criteria are non-decreasing along the output
//! - Elements with equal criteria keep input order
//! - Sorting the output again changes nothing

#![no_main]

use std::cmp::Ordering;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqkit_collections::{sort_by, sort_by_keys, Criteria, Criterion, KeyFn};

#[derive(Debug, Clone, Arbitrary)]
struct Item {
    rank: u8,
    weight: f64,
    label: String,
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum KeyShape {
    Rank,
    WeightThenRank,
    RuntimeLabelThenWeight,
}

fuzz_target!(|input: (KeyShape, Vec<Item>)| {
    let (shape, items) = input;

    // Tag with input position to observe stability
    let tagged: Vec<(usize, Item)> = items.into_iter().enumerate().collect();

    match shape {
        KeyShape::Rank => check(&tagged, |(_, item)| item.rank % 4),
        KeyShape::WeightThenRank => check(&tagged, |(_, item)| (item.weight, item.rank % 2)),
        KeyShape::RuntimeLabelThenWeight => {
            let by_label = |(_, item): &(usize, Item)| Criterion::from(item.label.as_str());
            let by_weight = |(_, item): &(usize, Item)| Criterion::Number(item.weight);
            let keys: [KeyFn<'_, (usize, Item)>; 2] = [&by_label, &by_weight];

            let sorted = sort_by_keys(&keys, &tagged);
            let criteria = |entry: &(usize, Item)| vec![by_label(entry), by_weight(entry)];
            assert_sorted_and_stable(&tagged, &sorted, criteria);
        },
    }
});

fn check<K: Criteria>(tagged: &[(usize, Item)], key: impl Fn(&(usize, Item)) -> K + Copy) {
    let sorted = sort_by(key, tagged);
    assert_sorted_and_stable(tagged, &sorted, key);
}

fn assert_sorted_and_stable<K: Criteria>(
    input: &[(usize, Item)],
    sorted: &[(usize, Item)],
    key: impl Fn(&(usize, Item)) -> K,
) {
    assert_eq!(sorted.len(), input.len(), "sort changed the number of elements");

    let mut positions: Vec<usize> = sorted.iter().map(|(position, _)| *position).collect();
    positions.sort_unstable();
    assert!(positions.iter().copied().eq(0..input.len()), "sort output is not a permutation");

    for pair in sorted.windows(2) {
        match key(&pair[0]).compare(&key(&pair[1])) {
            Ordering::Less => {},
            Ordering::Equal => assert!(pair[0].0 < pair[1].0, "equal criteria were reordered"),
            Ordering::Greater => panic!("criteria out of order at input positions {} and {}", pair[0].0, pair[1].0),
        }
    }

    let resorted = sort_by(&key, sorted);
    let before: Vec<usize> = sorted.iter().map(|(position, _)| *position).collect();
    let after: Vec<usize> = resorted.iter().map(|(position, _)| *position).collect();
    assert_eq!(before, after, "sorting a sorted sequence changed it");
}
