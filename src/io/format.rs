//! # Formatting
//!
//! Writing rational numbers as text: `"<cardinal><separator><ordinal>"`, or just the cardinal when
//! the ordinal is one.
use std::fmt;

use crate::number_types::rational::Rational;
use crate::number_types::traits::Integer;

/// Separator used by `Display` and substituted for unusable separators.
pub const DEFAULT_SEPARATOR: char = '/';

/// The separator to actually write.
///
/// Digits would make the text ambiguous to read back and a null character would terminate it early
/// for C consumers; both are replaced by the default.
pub fn effective_separator(separator: char) -> char {
    if separator.is_ascii_digit() || separator == '\0' {
        DEFAULT_SEPARATOR
    } else {
        separator
    }
}

impl<T: Integer> Rational<T> {
    /// Render as text with a chosen separator, such as `':'` for ratios.
    ///
    /// # Arguments
    ///
    /// * `separator`: Character between numerator and denominator. ASCII digits and `'\0'` are
    /// replaced by `'/'`.
    pub fn to_string_with_separator(&self, separator: char) -> String {
        if self.ordinal().is_one() {
            self.cardinal().to_string()
        } else {
            format!("{}{}{}", self.cardinal(), effective_separator(separator), self.ordinal())
        }
    }
}

impl<T: Integer> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ordinal().is_one() {
            write!(f, "{}", self.cardinal())
        } else {
            write!(f, "{}{}{}", self.cardinal(), DEFAULT_SEPARATOR, self.ordinal())
        }
    }
}
