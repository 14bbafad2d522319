//! # Conversions
//!
//! Conversions into and out of rational numbers. Conversions to floating point lose precision and
//! are meant for display and interoperability only.
use num_traits::{Signed, ToPrimitive};

use crate::number_types::rational::{Rational, Rational128, Rational32, Rational64};
use crate::number_types::traits::Integer;

impl<T: Integer> Rational<T> {
    /// Value as a double precision float.
    pub fn as_f64(&self) -> f64 {
        match (self.cardinal.to_f64(), self.ordinal.to_f64()) {
            (Some(cardinal), Some(ordinal)) => cardinal / ordinal,
            _ => f64::NAN,
        }
    }

    /// Value as a single precision float.
    pub fn as_f32(&self) -> f32 {
        self.as_f64() as f32
    }

    /// Integer part of the value, truncated towards zero.
    pub fn to_integer(&self) -> T {
        self.cardinal / self.ordinal
    }

    /// The value in percent, truncated towards zero.
    ///
    /// Computed in two steps, the integer part and the fractional part, such that neither the
    /// numerator nor the remainder is ever multiplied by a hundred as a whole.
    pub fn to_percent(&self) -> T {
        let remainder = self.cardinal % self.ordinal;
        let (fraction, _) = scale_remainder(Signed::abs(&remainder), PERCENT, self.ordinal);

        self.to_integer() * T::hundred() + fraction * remainder.signum()
    }

    /// The value in percent, rounded to the nearest integer.
    ///
    /// Halves are rounded away from zero: up for positive values, down for negative values.
    pub fn to_round_percent(&self) -> T {
        let remainder = self.cardinal % self.ordinal;
        let (mut fraction, left) = scale_remainder(Signed::abs(&remainder), PERCENT, self.ordinal);
        // 2 * left >= ordinal, without the doubling
        if !left.is_zero() && left >= self.ordinal - left {
            fraction = fraction + T::one();
        }

        self.to_integer() * T::hundred() + fraction * remainder.signum()
    }
}

const PERCENT: u32 = 100;

/// Quotient and remainder of `value * factor / divisor`, without computing the product.
///
/// Binary long multiplication, reducing modulo the divisor after every doubling and every
/// addition. Intermediate values stay below the divisor, the quotient stays below the factor.
///
/// # Arguments
///
/// * `value`: Satisfies `0 <= value < divisor`.
/// * `factor`: Small multiplier that fits in `T`.
/// * `divisor`: Positive.
fn scale_remainder<T: Integer>(value: T, factor: u32, divisor: T) -> (T, T) {
    debug_assert!(T::zero() <= value && value < divisor);

    // Add `addend < divisor` to `remainder < divisor`, carrying into the quotient.
    let add = |(quotient, remainder): (T, T), addend: T| {
        if remainder >= divisor - addend {
            (quotient + T::one(), remainder - (divisor - addend))
        } else {
            (quotient, remainder + addend)
        }
    };

    let mut state = (T::zero(), T::zero());
    for bit in (0..u32::BITS - factor.leading_zeros()).rev() {
        let (quotient, remainder) = state;
        state = add((quotient + quotient, remainder), remainder);
        if (factor >> bit) & 1 == 1 {
            state = add(state, value);
        }
    }

    state
}

impl<T: Integer> From<T> for Rational<T> {
    fn from(value: T) -> Self {
        Self::from_integer(value)
    }
}

impl<T: Integer> From<(T, T)> for Rational<T> {
    fn from((cardinal, ordinal): (T, T)) -> Self {
        Self::new(cardinal, ordinal)
    }
}

impl<T: Integer> From<Rational<T>> for (T, T) {
    fn from(value: Rational<T>) -> Self {
        (value.cardinal, value.ordinal)
    }
}

impl From<Rational32> for Rational64 {
    fn from(value: Rational32) -> Self {
        Self::raw(value.cardinal.into(), value.ordinal.into())
    }
}

impl From<Rational32> for Rational128 {
    fn from(value: Rational32) -> Self {
        Self::raw(value.cardinal.into(), value.ordinal.into())
    }
}

impl From<Rational64> for Rational128 {
    fn from(value: Rational64) -> Self {
        Self::raw(value.cardinal.into(), value.ordinal.into())
    }
}

impl<T: Integer> From<Rational<T>> for f64 {
    fn from(value: Rational<T>) -> Self {
        value.as_f64()
    }
}

impl<T: Integer> From<Rational<T>> for f32 {
    fn from(value: Rational<T>) -> Self {
        value.as_f32()
    }
}

/// Integer conversions truncate towards zero.
impl<T: Integer> ToPrimitive for Rational<T> {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().to_i64()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_integer().to_i128()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_integer().to_u128()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}
