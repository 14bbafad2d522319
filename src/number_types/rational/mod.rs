//! # Rational numbers
//!
//! Exact fractions of two fixed-width signed integers. Used wherever a quantity such as a clock
//! rate or a screen ratio should survive repeated computation without accumulating rounding
//! errors.
//!
//! The sign is carried by the numerator (the "cardinal"); the denominator (the "ordinal") is
//! always positive. Construction never reduces the fraction, arithmetic always does.
use num_traits::Signed;

use crate::error::{Error, Result};
use crate::number_types::traits::Integer;

mod cmp;
mod convert;
mod macros;
mod ops;

/// Rational number with 32 bit numerator and denominator.
pub type Rational32 = Rational<i32>;
/// Rational number with 64 bit numerator and denominator.
pub type Rational64 = Rational<i64>;
/// Rational number with 128 bit numerator and denominator.
pub type Rational128 = Rational<i128>;

/// An exact fraction `cardinal / ordinal`.
///
/// The ordinal is positive at all times. Two values are equal when they represent the same number,
/// see `strictly_equals` to compare representations.
#[derive(Copy, Clone, Debug)]
pub struct Rational<T> {
    cardinal: T,
    ordinal: T,
}

impl<T: Integer> Rational<T> {
    /// Create a new rational number.
    ///
    /// The fraction is stored as given, it is not simplified.
    ///
    /// # Arguments
    ///
    /// * `cardinal`: Numerator, carries the sign of the number.
    /// * `ordinal`: Denominator. Values that are zero or negative are replaced by `1`.
    pub fn new(cardinal: T, ordinal: T) -> Self {
        let ordinal = if ordinal > T::zero() { ordinal } else { T::one() };

        Self::raw(cardinal, ordinal)
    }

    /// Create a rational number with denominator `1`.
    pub fn from_integer(value: T) -> Self {
        Self::raw(value, T::one())
    }

    /// Create an instance from parts that are already known to satisfy the invariants.
    pub(crate) fn raw(cardinal: T, ordinal: T) -> Self {
        debug_assert!(ordinal > T::zero());

        Self { cardinal, ordinal }
    }

    /// Numerator of the fraction.
    pub fn cardinal(&self) -> T {
        self.cardinal
    }

    /// Denominator of the fraction, always positive.
    pub fn ordinal(&self) -> T {
        self.ordinal
    }

    /// Greatest common divisor of the numerator and denominator.
    ///
    /// When the numerator is zero, this is the denominator, such that `0/n` simplifies to `0/1`.
    ///
    /// # Return value
    ///
    /// A positive value.
    pub fn gcd(&self) -> T {
        gcd(self.cardinal, self.ordinal)
    }

    /// Reduce the fraction by the greatest common divisor of its parts.
    pub fn simplify(&mut self) -> &mut Self {
        let gcd = self.gcd();
        if gcd > T::one() {
            self.cardinal = self.cardinal / gcd;
            self.ordinal = self.ordinal / gcd;
        }

        self
    }

    /// A reduced copy of this fraction.
    pub fn simplified(mut self) -> Self {
        self.simplify();
        self
    }

    /// Whether the fraction can't be reduced any further.
    pub fn is_simplified(&self) -> bool {
        self.gcd().is_one()
    }

    /// Replace this number by its multiplicative inverse.
    ///
    /// The sign stays with the numerator: `-a/b` becomes `-b/a`.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the number is zero, `Overflow` if the numerator is `T::MIN` and its
    /// negation can't be represented.
    pub fn invert(&mut self) -> Result<&mut Self> {
        if self.cardinal.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.cardinal.is_negative() {
            let ordinal = negate(self.cardinal, "inverse")?;
            self.cardinal = negate(self.ordinal, "inverse")?;
            self.ordinal = ordinal;
        } else {
            std::mem::swap(&mut self.cardinal, &mut self.ordinal);
        }

        Ok(self)
    }

    /// The multiplicative inverse of this number.
    ///
    /// # Errors
    ///
    /// See `invert`.
    pub fn inverse(mut self) -> Result<Self> {
        self.invert()?;
        Ok(self)
    }

    /// Whether the two values have the same numerator and denominator.
    ///
    /// Unlike `==`, this distinguishes between `1/2` and `2/4`.
    pub fn strictly_equals(&self, other: &Self) -> bool {
        self.cardinal == other.cardinal && self.ordinal == other.ordinal
    }

    /// Whether the value differs from zero.
    pub fn is_nonzero(&self) -> bool {
        !self.cardinal.is_zero()
    }

    /// Add exactly one.
    ///
    /// The denominator is kept as it is and the result is not simplified.
    pub fn increment(&mut self) -> &mut Self {
        self.cardinal = self.cardinal + self.ordinal;
        self
    }

    /// Subtract exactly one.
    ///
    /// The denominator is kept as it is and the result is not simplified.
    pub fn decrement(&mut self) -> &mut Self {
        self.cardinal = self.cardinal - self.ordinal;
        self
    }
}

impl<T: Integer> Default for Rational<T> {
    fn default() -> Self {
        Self::raw(T::zero(), T::one())
    }
}

/// Greatest common divisor by Euclid's algorithm.
///
/// # Arguments
///
/// * `left`: Any value, `T::MIN` included.
/// * `right`: Positive.
///
/// # Return value
///
/// A positive value, `right` when `left` is zero.
pub(crate) fn gcd<T: Integer>(left: T, right: T) -> T {
    debug_assert!(right > T::zero());

    // Remainders stay smaller in magnitude than `right`, so `T::MIN` can't overflow here.
    let (mut left, mut right) = (left, right);
    while !right.is_zero() {
        let remainder = left % right;
        left = right;
        right = remainder;
    }

    Signed::abs(&left)
}

/// Negate an integer, failing instead of wrapping for `T::MIN`.
pub(crate) fn negate<T: Integer>(value: T, operation: &'static str) -> Result<T> {
    T::zero().checked_sub(&value).ok_or_else(|| Error::overflow(operation))
}

/// Multiply two integers, failing instead of wrapping.
pub(crate) fn multiply<T: Integer>(left: T, right: T, operation: &'static str) -> Result<T> {
    left.checked_mul(&right).ok_or_else(|| Error::overflow(operation))
}
