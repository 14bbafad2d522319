//! # Reading and writing rational numbers
//!
//! The text form of a rational number is `"<integer>"` when the denominator is one, and
//! `"<integer><separator><positive integer>"` otherwise, for example `"30000/1001"` or `"16:9"`.
pub mod format;
pub mod parse;
