//! Criteria: comparable sort keys
//!
//! A criteria tuple is what a key function extracts from an element. Tuples
//! compare lexicographically: component 0 first, then component 1, and so on.
//! The first non-equal pair decides.
//!
//! # Floating-point keys
//!
//! `PartialOrd` on floats is not a total order, and a stable sort needs one.
//! Float criteria therefore use a total order where NaN equals NaN and sorts
//! after every number, while `-0.0` and `0.0` stay equal.

use std::cmp::Ordering;

/// A value usable as (part of) a sort criteria tuple.
///
/// Implementations must form a total order.
pub trait Criteria {
    /// Compare two criteria.
    fn compare(&self, other: &Self) -> Ordering;
}

/// Dynamically-typed sort key for key lists assembled at runtime.
///
/// Keys of the same kind compare by value. `Number` and `Integer` compare
/// with each other by exact numeric value, so integers above 2^53 stay
/// distinct. Otherwise kinds rank `Bool < numbers < Text`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criterion {
    /// Boolean key
    Bool(bool),
    /// Floating-point key
    Number(f64),
    /// Integer key
    Integer(i64),
    /// Text key, compared by code point
    Text(String),
}

impl Criterion {
    fn rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Number(_) | Self::Integer(_) => 1,
            Self::Text(_) => 2,
        }
    }
}

impl Criteria for Criterion {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.compare(b),
            (Self::Number(a), Self::Integer(b)) => compare_number_to_integer(*a, *b),
            (Self::Integer(a), Self::Number(b)) => compare_number_to_integer(*b, *a).reverse(),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Exact comparison of a float against an integer.
///
/// Converting the integer to `f64` rounds above 2^53, which would make
/// distinct integers equal to the same float. The integral part is compared
/// as `i64` instead, then the fraction breaks the tie. NaN sorts last.
fn compare_number_to_integer(number: f64, integer: i64) -> Ordering {
    // 2^63, exactly representable
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if number.is_nan() || number >= BOUND {
        return Ordering::Greater;
    }
    if number < -BOUND {
        return Ordering::Less;
    }

    let whole = number.trunc();
    (whole as i64).cmp(&integer).then_with(|| {
        let fraction = number - whole;
        if fraction > 0.0 {
            Ordering::Greater
        } else if fraction < 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

impl From<bool> for Criterion {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Criterion {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Criterion {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! impl_criteria_for_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Criteria for $ty {
                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )*
    };
}

impl_criteria_for_ord!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, str, String,
);

macro_rules! impl_criteria_for_float {
    ($($ty:ty),*) => {
        $(
            impl Criteria for $ty {
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        (false, false) => self.partial_cmp(other).unwrap_or(Ordering::Equal),
                    }
                }
            }
        )*
    };
}

impl_criteria_for_float!(f32, f64);

impl<C: Criteria + ?Sized> Criteria for &C {
    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

/// Lexicographic; a shorter list that is a prefix of a longer one sorts first.
impl<C: Criteria> Criteria for Vec<C> {
    fn compare(&self, other: &Self) -> Ordering {
        self.iter()
            .zip(other)
            .map(|(a, b)| a.compare(b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| self.len().cmp(&other.len()))
    }
}

macro_rules! impl_criteria_for_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Criteria),+> Criteria for ($($name,)+) {
            fn compare(&self, other: &Self) -> Ordering {
                Ordering::Equal $(.then_with(|| self.$idx.compare(&other.$idx)))+
            }
        }
    };
}

impl_criteria_for_tuple!(A: 0);
impl_criteria_for_tuple!(A: 0, B: 1);
impl_criteria_for_tuple!(A: 0, B: 1, C: 2);
impl_criteria_for_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_criteria_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_criteria_for_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_unequal_component_decides() {
        assert_eq!((1, "b").compare(&(2, "a")), Ordering::Less);
        assert_eq!((2, "a").compare(&(2, "b")), Ordering::Less);
        assert_eq!((2, "b").compare(&(2, "b")), Ordering::Equal);
    }

    #[test]
    fn nan_sorts_after_numbers() {
        assert_eq!(f64::NAN.compare(&f64::INFINITY), Ordering::Greater);
        assert_eq!(1.0_f64.compare(&f64::NAN), Ordering::Less);
        assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!((-0.0_f64).compare(&0.0), Ordering::Equal);
    }

    #[test]
    fn nan_in_first_component_still_consults_second() {
        let a = (f64::NAN, 1);
        let b = (f64::NAN, 2);
        assert_eq!(a.compare(&b), Ordering::Less);
    }

    #[test]
    fn mixed_numeric_criteria_compare_by_value() {
        assert_eq!(Criterion::Integer(2).compare(&Criterion::Number(2.5)), Ordering::Less);
        assert_eq!(Criterion::Number(3.0).compare(&Criterion::Integer(3)), Ordering::Equal);
        assert_eq!(Criterion::Number(-2.5).compare(&Criterion::Integer(-2)), Ordering::Less);
        assert_eq!(Criterion::Integer(-3).compare(&Criterion::Number(-2.5)), Ordering::Less);
    }

    #[test]
    fn integers_beyond_f64_precision_stay_distinct() {
        let exact = 1_i64 << 53;
        let float = Criterion::Number(exact as f64);
        let low = Criterion::Integer(exact);
        let high = Criterion::Integer(exact + 1);

        assert_eq!(low.compare(&high), Ordering::Less);
        assert_eq!(float.compare(&low), Ordering::Equal);
        assert_eq!(float.compare(&high), Ordering::Less);
        assert_eq!(high.compare(&float), Ordering::Greater);
    }

    #[test]
    fn numbers_outside_integer_range_compare_at_the_ends() {
        assert_eq!(Criterion::Number(1e19).compare(&Criterion::Integer(i64::MAX)), Ordering::Greater);
        assert_eq!(Criterion::Number(-1e19).compare(&Criterion::Integer(i64::MIN)), Ordering::Less);
        assert_eq!(
            Criterion::Number(i64::MIN as f64).compare(&Criterion::Integer(i64::MIN)),
            Ordering::Equal
        );
        assert_eq!(Criterion::Number(f64::NAN).compare(&Criterion::Integer(i64::MAX)), Ordering::Greater);
        assert_eq!(
            Criterion::Integer(0).compare(&Criterion::Number(f64::NEG_INFINITY)),
            Ordering::Greater
        );
    }

    #[test]
    fn criterion_kinds_rank() {
        assert_eq!(Criterion::Bool(true).compare(&Criterion::Integer(0)), Ordering::Less);
        assert_eq!(Criterion::from("a").compare(&Criterion::Number(1e9)), Ordering::Greater);
    }

    #[test]
    fn vec_criteria_are_lexicographic() {
        let short = vec![Criterion::from("a")];
        let long = vec![Criterion::from("a"), Criterion::Integer(0)];
        assert_eq!(short.compare(&long), Ordering::Less);
        assert_eq!(long.compare(&short), Ordering::Greater);
    }
}
