//! # Number types
//!
//! Exact number types and the traits they are defined over. Arithmetic is done on integers only;
//! floating point values are produced on request for display, never used to compute with.
pub mod rational;
pub mod traits;
