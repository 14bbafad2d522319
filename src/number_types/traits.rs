//! # Traits
//!
//! The integer types a rational can be built from, and operations that follow from the ordering of
//! a number type.
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::Neg;

use num_traits::{PrimInt, Signed, Zero};

/// Fixed-width signed primitive integers that can serve as the numerator and denominator of a
/// `Rational`.
///
/// Automatically implemented for all types satisfying the trait's bounds, which are `i8` up to
/// `i128` and `isize`.
pub trait Integer: PrimInt + Signed + From<i8> + Hash + Debug + Display {
    /// The constant one hundred, used for percentages.
    fn hundred() -> Self {
        <Self as From<i8>>::from(100)
    }
}
impl<T: PrimInt + Signed + From<i8> + Hash + Debug + Display> Integer for T {
}

/// Absolute value of a number.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Abs: Neg<Output=Self> + Ord + Zero {
    /// The absolute value of a number.
    ///
    /// Compute the additive inverse if the number is smaller than the additive identity.
    fn abs(self) -> Self {
        if self < Self::zero() {
            -self
        } else {
            self
        }
    }
}
impl<T: Neg<Output=Self> + Ord + Zero> Abs for T {
}
