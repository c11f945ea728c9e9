//! Fuzz target for component-wise vector folds
//!
//! # Strategy
//!
//! - Vector counts: zero, one, many
//! - Dimensions: equal and unequal, including empty vectors
//! - Components: arbitrary f64 (NaN, infinities, subnormals)
//!
//! # Invariants
//!
//! - No vectors MUST fail with a sequence error
//! - Any length difference MUST fail with DimensionMismatch
//! - Equal lengths MUST succeed with the shared length
//! - normalize MUST fail with DivideByZero only when every component is zero

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seqkit_vector::{add, divide, multiply, normalize, subtract, VectorError};

#[derive(Debug, Clone, Copy, Arbitrary)]
enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

fuzz_target!(|input: (Op, Vec<Vec<f64>>)| {
    let (op, vectors) = input;
    let slices: Vec<&[f64]> = vectors.iter().map(Vec::as_slice).collect();

    let result = match op {
        Op::Add => add(&slices),
        Op::Subtract => subtract(&slices),
        Op::Multiply => multiply(&slices),
        Op::Divide => divide(&slices),
    };

    match slices.split_first() {
        None => assert!(matches!(result, Err(VectorError::Sequence(_)))),
        Some((first, rest)) => {
            if rest.iter().all(|v| v.len() == first.len()) {
                let combined = result.unwrap_or_else(|e| panic!("equal lengths rejected: {e}"));
                assert_eq!(combined.len(), first.len());
            } else {
                assert!(matches!(result, Err(VectorError::DimensionMismatch { .. })));
            }

            match normalize(first) {
                Ok(unit) => assert_eq!(unit.len(), first.len()),
                Err(VectorError::DivideByZero) => assert!(first.iter().all(|c| *c == 0.0)),
                Err(VectorError::Sequence(_)) => assert!(first.is_empty()),
                Err(other) => panic!("unexpected normalize error: {other}"),
            }
        },
    }
});
