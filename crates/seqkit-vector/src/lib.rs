//! Vector Algebra
//!
//! Numeric vectors of any dimension, expressed as plain slices of
//! floating-point components. Every operation is built from the sequence
//! primitives in `seqkit-collections`:
//!
//! ```text
//! add / subtract / multiply / divide
//!        │
//!        ▼  seedless fold over the vectors
//! zip_with(op, [acc, next])
//!        │
//!        ▼
//! dot  = reduce(+, multiply(a, b))
//! length    = hypot fold over |v|
//! normalize = divide(v, [length; n])
//! ```
//!
//! # Failure Modes
//!
//! - Unequal lengths: [`VectorError::DimensionMismatch`], never silent NaN
//! - Nothing to fold (no vectors, empty vector length):
//!   [`VectorError::Sequence`]
//! - Zero-length normalize: [`VectorError::DivideByZero`]
//!
//! Component division by zero is left to IEEE-754.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod arithmetic;
pub mod error;
pub mod norm;
pub mod transform;

pub use arithmetic::{add, divide, multiply, subtract};
pub use error::VectorError;
pub use norm::{dot, length, normalize};
pub use transform::{create, inverse, scale};
