//! # Exact rational numbers
//!
//! Fractions of fixed-width integers for quantities that should not drift under repeated
//! computation, such as video frame rates (`30000/1001` Hz) and screen aspect ratios (`16/9`).
//!
//! Arithmetic and comparison are done on the integer parts only. Floating point values can be
//! requested for display, but are never used to compute with.
#![warn(missing_docs)]

pub mod error;
pub mod io;
pub mod media;
pub mod number_types;

pub use error::{Error, ErrorKind, ParseFailure, Result};
pub use number_types::rational::{Rational, Rational128, Rational32, Rational64};
pub use number_types::traits::{Abs, Integer};
