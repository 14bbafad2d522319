//! # Arithmetic
//!
//! The four field operations by cross multiplication. The fallible named methods are the primary
//! interface; the operator traits are implemented on top of them and panic on failure, like
//! integer division by zero does.
//!
//! Common factors are divided out before multiplying where that is cheap, so that an operation
//! only fails when its intermediate values are large after reduction. Every result is simplified.
use std::iter::{Product, Sum};
use std::ops::Neg;

use num_traits::{One, Zero};

use crate::error::{Error, Result};
use crate::number_types::rational::{gcd, multiply, negate, Rational};
use crate::number_types::traits::Integer;

impl<T: Integer> Rational<T> {
    /// Sum of two values.
    ///
    /// # Arguments
    ///
    /// * `rhs`: Another rational, an integer or a `(cardinal, ordinal)` pair.
    ///
    /// # Errors
    ///
    /// `Overflow` when an intermediate product doesn't fit.
    pub fn checked_add(self, rhs: impl Into<Self>) -> Result<Self> {
        let rhs = rhs.into();

        let common = gcd(self.ordinal, rhs.ordinal);
        let (left_factor, right_factor) = (rhs.ordinal / common, self.ordinal / common);

        let left = multiply(self.cardinal, left_factor, "addition")?;
        let right = multiply(rhs.cardinal, right_factor, "addition")?;
        let cardinal = left.checked_add(&right).ok_or_else(|| Error::overflow("addition"))?;
        let ordinal = multiply(self.ordinal, left_factor, "addition")?;

        Ok(Self::raw(cardinal, ordinal).simplified())
    }

    /// Difference of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` when an intermediate product doesn't fit.
    pub fn checked_sub(self, rhs: impl Into<Self>) -> Result<Self> {
        let rhs = rhs.into();

        let common = gcd(self.ordinal, rhs.ordinal);
        let (left_factor, right_factor) = (rhs.ordinal / common, self.ordinal / common);

        let left = multiply(self.cardinal, left_factor, "subtraction")?;
        let right = multiply(rhs.cardinal, right_factor, "subtraction")?;
        let cardinal = left.checked_sub(&right).ok_or_else(|| Error::overflow("subtraction"))?;
        let ordinal = multiply(self.ordinal, left_factor, "subtraction")?;

        Ok(Self::raw(cardinal, ordinal).simplified())
    }

    /// Product of two values.
    ///
    /// # Errors
    ///
    /// `Overflow` when an intermediate product doesn't fit.
    pub fn checked_mul(self, rhs: impl Into<Self>) -> Result<Self> {
        let rhs = rhs.into();

        // Cross reduce, each numerator against the other denominator.
        let left_common = gcd(self.cardinal, rhs.ordinal);
        let right_common = gcd(rhs.cardinal, self.ordinal);

        let cardinal = multiply(
            self.cardinal / left_common,
            rhs.cardinal / right_common,
            "multiplication",
        )?;
        let ordinal = multiply(
            self.ordinal / right_common,
            rhs.ordinal / left_common,
            "multiplication",
        )?;

        Ok(Self::raw(cardinal, ordinal).simplified())
    }

    /// Negation of this value.
    ///
    /// # Errors
    ///
    /// `Overflow` if the numerator is `T::MIN`.
    pub fn checked_neg(self) -> Result<Self> {
        Ok(Self::raw(negate(self.cardinal, "negation")?, self.ordinal))
    }

    /// Quotient of two values.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `rhs` is zero, `Overflow` when an intermediate product doesn't fit.
    pub fn checked_div(self, rhs: impl Into<Self>) -> Result<Self> {
        let rhs = rhs.into();
        if rhs.cardinal.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let mut cardinal = multiply(self.cardinal, rhs.ordinal, "division")?;
        let mut ordinal = multiply(self.ordinal, rhs.cardinal, "division")?;
        if ordinal < T::zero() {
            cardinal = negate(cardinal, "division")?;
            ordinal = negate(ordinal, "division")?;
        }

        Ok(Self::raw(cardinal, ordinal).simplified())
    }
}

/// Implement an operator, its assigning variant and the variants on references in terms of one of
/// the checked methods.
macro_rules! impl_operation {
    ($op_trait:ident, $op:ident, $assign_trait:ident, $assign:ident, $checked:ident, $verb:literal) => {
        mod $op {
            use std::ops::{$op_trait, $assign_trait};

            use crate::number_types::rational::Rational;
            use crate::number_types::traits::Integer;

            impl<T: Integer> $op_trait for Rational<T> {
                type Output = Self;

                fn $op(self, rhs: Self) -> Self::Output {
                    match self.$checked(rhs) {
                        Ok(value) => value,
                        Err(error) => panic!(concat!("attempt to ", $verb, " rationals: {}"), error),
                    }
                }
            }

            impl<T: Integer> $op_trait<&Rational<T>> for Rational<T> {
                type Output = Self;

                fn $op(self, rhs: &Self) -> Self::Output {
                    $op_trait::$op(self, *rhs)
                }
            }

            impl<T: Integer> $op_trait<Rational<T>> for &Rational<T> {
                type Output = Rational<T>;

                fn $op(self, rhs: Rational<T>) -> Self::Output {
                    $op_trait::$op(*self, rhs)
                }
            }

            impl<T: Integer> $op_trait for &Rational<T> {
                type Output = Rational<T>;

                fn $op(self, rhs: Self) -> Self::Output {
                    $op_trait::$op(*self, *rhs)
                }
            }

            impl<T: Integer> $op_trait<T> for Rational<T> {
                type Output = Self;

                fn $op(self, rhs: T) -> Self::Output {
                    $op_trait::$op(self, Rational::from_integer(rhs))
                }
            }

            impl<T: Integer> $assign_trait for Rational<T> {
                fn $assign(&mut self, rhs: Self) {
                    *self = $op_trait::$op(*self, rhs);
                }
            }

            impl<T: Integer> $assign_trait<&Rational<T>> for Rational<T> {
                fn $assign(&mut self, rhs: &Self) {
                    *self = $op_trait::$op(*self, *rhs);
                }
            }

            impl<T: Integer> $assign_trait<T> for Rational<T> {
                fn $assign(&mut self, rhs: T) {
                    *self = $op_trait::$op(*self, Rational::from_integer(rhs));
                }
            }
        }
    };
}

impl_operation!(Add, add, AddAssign, add_assign, checked_add, "add");
impl_operation!(Sub, sub, SubAssign, sub_assign, checked_sub, "subtract");
impl_operation!(Mul, mul, MulAssign, mul_assign, checked_mul, "multiply");
impl_operation!(Div, div, DivAssign, div_assign, checked_div, "divide");

/// # Panics
///
/// When the numerator is `T::MIN`, see `checked_neg`.
impl<T: Integer> Neg for Rational<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.checked_neg() {
            Ok(value) => value,
            Err(error) => panic!("attempt to negate rational: {}", error),
        }
    }
}

impl<T: Integer> Neg for &Rational<T> {
    type Output = Rational<T>;

    fn neg(self) -> Self::Output {
        Neg::neg(*self)
    }
}

impl<T: Integer> Zero for Rational<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.cardinal.is_zero()
    }
}

impl<T: Integer> One for Rational<T> {
    fn one() -> Self {
        Self::from_integer(T::one())
    }
}

impl<T: Integer> Sum for Rational<T> {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

impl<'a, T: Integer> Sum<&'a Rational<T>> for Rational<T> {
    fn sum<I: Iterator<Item=&'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, item| total + item)
    }
}

impl<T: Integer> Product for Rational<T> {
    fn product<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, item| total * item)
    }
}
