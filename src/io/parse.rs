//! # Parsing
//!
//! Reading rational numbers from text. The text is first split into its parts, which are then
//! converted into integers of the requested width.
use std::str::FromStr;

use crate::error::{Error, ParseFailure, Result};
use crate::number_types::rational::Rational;
use crate::number_types::traits::Integer;

impl<T: Integer> Rational<T> {
    /// Read a rational number from text like `"30000/1001"`, `"-3:4"` or `"25"`.
    ///
    /// Any non-digit character directly after the numerator acts as the separator. The fraction is
    /// not simplified.
    ///
    /// # Errors
    ///
    /// An `InvalidArgument` error when the text is malformed, a part is out of range or the
    /// denominator is zero.
    pub fn parse(text: &str) -> Result<Self> {
        Raw::try_from(text)?.into_rational()
    }
}

impl<T: Integer> FromStr for Rational<T> {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

/// Intermediate form of a read number.
///
/// Only the shape of the text has been checked, the digits have not been converted yet.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) struct Raw<'a> {
    /// Text as it was given, kept for error messages.
    text: &'a str,
    /// Optional sign followed by at least one digit.
    numerator: &'a str,
    /// Separator and the digits following it.
    denominator: Option<(char, &'a str)>,
}

impl<'a> TryFrom<&'a str> for Raw<'a> {
    type Error = Error;

    fn try_from(text: &'a str) -> Result<Self> {
        let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
        if trimmed.is_empty() {
            return Err(Error::invalid_argument(text, ParseFailure::Empty));
        }

        let sign_length = match trimmed.as_bytes()[0] {
            b'+' | b'-' => 1,
            _ => 0,
        };
        let digit_count = trimmed[sign_length..].bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digit_count == 0 {
            return Err(Error::invalid_argument(text, ParseFailure::MissingNumerator));
        }

        let (numerator, rest) = trimmed.split_at(sign_length + digit_count);
        let denominator = match rest.chars().next() {
            None => None,
            Some(separator) => {
                let digits = &rest[separator.len_utf8()..];
                if digits.is_empty() {
                    return Err(Error::invalid_argument(text, ParseFailure::MissingDenominator));
                }
                if let Some(invalid) = digits.chars().find(|c| !c.is_ascii_digit()) {
                    return Err(Error::invalid_argument(text, ParseFailure::InvalidDigit(invalid)));
                }

                Some((separator, digits))
            },
        };

        Ok(Self { text, numerator, denominator })
    }
}

impl Raw<'_> {
    /// Convert the parts into integers of the requested width.
    ///
    /// # Errors
    ///
    /// When a part doesn't fit in `T`, or the denominator is zero.
    pub(crate) fn into_rational<T: Integer>(self) -> Result<Rational<T>> {
        let Raw { text, numerator, denominator } = self;

        let parse = |digits: &str| {
            T::from_str_radix(digits, 10)
                .map_err(|_| Error::invalid_argument(text, ParseFailure::OutOfRange))
        };

        let cardinal = parse(numerator)?;
        let ordinal = match denominator {
            None => T::one(),
            Some((_separator, digits)) => {
                let ordinal = parse(digits)?;
                if ordinal.is_zero() {
                    return Err(Error::invalid_argument(text, ParseFailure::ZeroDenominator));
                }
                ordinal
            },
        };

        Ok(Rational::raw(cardinal, ordinal))
    }
}
