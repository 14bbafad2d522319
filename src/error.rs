//! # Errors
//!
//! Failures of rational number operations come in two classes. Domain errors are raised by
//! computations that have no value in the representable rationals, such as a division by zero.
//! Invalid argument errors are raised when text could not be read as a rational number.
use thiserror::Error;

/// A convenience type with the `Err` variant set to the `Error` type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for the fallible operations on rational numbers.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The operation would divide by an exact zero.
    ///
    /// Raised by inverting a zero valued rational or dividing by a zero valued operand.
    #[error("division by zero")]
    DivisionByZero,
    /// An intermediate or final value does not fit in the integer type of the rational.
    #[error("overflow while computing {operation}")]
    Overflow {
        /// The operation that was being computed.
        operation: &'static str,
    },
    /// Text could not be parsed into a rational number.
    #[error("invalid rational {text:?}: {reason}")]
    InvalidArgument {
        /// The text as it was offered to the parser.
        text: String,
        /// What was wrong with it.
        reason: ParseFailure,
    },
}

/// Reason why text could not be read as a rational number.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("no text to parse")]
    /// Nothing but whitespace was provided.
    Empty,
    #[error("expected numerator digits")]
    /// No digits were found after the optional sign.
    MissingNumerator,
    #[error("expected denominator digits after the separator")]
    /// A separator was found, but nothing followed it.
    MissingDenominator,
    #[error("unexpected character {0:?} in the denominator")]
    /// The denominator contains something other than decimal digits.
    InvalidDigit(char),
    #[error("value out of range")]
    /// A part does not fit in the integer type of the rational.
    OutOfRange,
    #[error("division by zero")]
    /// The denominator was explicitly given as zero.
    ZeroDenominator,
}

/// Class of an `Error`, for callers that only care about the category of the failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The computation has no representable result.
    Domain,
    /// The input could not be interpreted.
    InvalidArgument,
}

impl Error {
    /// Create an `InvalidArgument` error for the given text.
    pub(crate) fn invalid_argument(text: impl Into<String>, reason: ParseFailure) -> Self {
        Self::InvalidArgument { text: text.into(), reason }
    }

    /// Create an `Overflow` error.
    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DivisionByZero | Error::Overflow { .. } => ErrorKind::Domain,
            Error::InvalidArgument { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Whether this error is a domain error.
    pub fn is_domain_error(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// Whether this error is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}
