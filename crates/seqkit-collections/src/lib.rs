//! Sequence Primitives
//!
//! Pure functions over in-memory ordered sequences. Inputs are borrowed
//! slices and are never mutated; every operation returns a new `Vec` or a
//! scalar, so callers on different threads can share the same input.
//!
//! # Calling Convention
//!
//! Configuration first, data last: `reduce(combine, seed, sequence)`,
//! `sort_by(key, sequence)`, `zip_with(combine, sequences)`.
//!
//! # Operations
//!
//! - [`reduce()`]: array-style reduce, seedless starts from the first element
//! - [`fold`]: seeded reduce with its own accumulator type
//! - [`filter()`], [`filter_nullable`], [`map`], [`uniq_by`], [`range`]
//! - [`sort_by`], [`sort_by_keys`], [`sort()`]: stable, lexicographic over
//!   [`Criteria`]
//! - [`zip()`], [`zip_with`], [`unzip`]: rows follow the first sequence, with
//!   `None` as the absent marker for shorter inputs
//! - [`create_search`]: case-insensitive text predicate
//!
//! # Logging
//!
//! Emits `tracing` events at `debug` (failures) and `trace` (shape
//! summaries). No subscriber is installed here.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod criteria;
pub mod error;
pub mod filter;
pub mod reduce;
pub mod search;
pub mod sort;
pub mod zip;

pub use criteria::{Criteria, Criterion};
pub use error::SequenceError;
pub use filter::{filter, filter_nullable, map, range, uniq_by};
pub use reduce::{fold, reduce};
pub use search::create_search;
pub use sort::{KeyFn, sort, sort_by, sort_by_keys};
pub use zip::{ZipRow, unzip, zip, zip_with};
