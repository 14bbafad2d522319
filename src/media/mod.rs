//! # Named rates and ratios
//!
//! Lookup tables from well-known names to exact values. Lookups by name or id that don't match any
//! entry fall back to `1/1` rather than failing, such that a stale configuration value still yields
//! a usable number.
pub mod rate;
pub mod ratio;

pub use rate::{FrameRate, Rate, rate_by_id, rate_by_name, rate_table};
pub use ratio::{AspectRatio, Ratio, ratio_by_id, ratio_by_name, ratio_table};
