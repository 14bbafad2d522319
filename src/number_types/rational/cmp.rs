//! # Comparison
//!
//! Ordering and equality are decided on the integer parts only. The integer parts of both values
//! are compared first; when they tie, the proper fractions that remain are compared through their
//! reciprocals, swapping sides. This is a continued fraction expansion of both values in lockstep
//! and, unlike cross multiplication, it can't overflow.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::number_types::rational::Rational;
use crate::number_types::traits::Integer;

/// Division rounding towards negative infinity.
///
/// # Return value
///
/// Quotient and a remainder that lies in `[0, divisor)`.
fn floor_div_rem<T: Integer>(dividend: T, divisor: T) -> (T, T) {
    debug_assert!(divisor > T::zero());

    let quotient = dividend / divisor;
    let remainder = dividend % divisor;
    if remainder < T::zero() {
        (quotient - T::one(), remainder + divisor)
    } else {
        (quotient, remainder)
    }
}

impl<T: Integer> Ord for Rational<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        let (mut left, mut right) = (*self, *other);

        loop {
            let (left_floor, left_remainder) = floor_div_rem(left.cardinal, left.ordinal);
            let (right_floor, right_remainder) = floor_div_rem(right.cardinal, right.ordinal);

            match left_floor.cmp(&right_floor) {
                Ordering::Equal => {},
                unequal => return unequal,
            }

            match (left_remainder.is_zero(), right_remainder.is_zero()) {
                (true, true) => return Ordering::Equal,
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                (false, false) => {
                    // a/b < c/d  <=>  d/c < b/a  for proper positive fractions
                    let next_left = Self::raw(right.ordinal, right_remainder);
                    let next_right = Self::raw(left.ordinal, left_remainder);
                    left = next_left;
                    right = next_right;
                },
            }
        }
    }
}

impl<T: Integer> PartialOrd for Rational<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Integer> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.strictly_equals(other) {
            return true;
        }

        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Integer> Eq for Rational<T> {
}

/// Hashes the reduced form, consistent with `==`.
impl<T: Integer> Hash for Rational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let reduced = self.simplified();
        reduced.cardinal.hash(state);
        reduced.ordinal.hash(state);
    }
}
