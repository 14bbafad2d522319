/// Shorthand for creating a rational number.
///
/// With a single argument, the value is an integer. The denominator is clamped like in
/// `Rational::new`.
#[macro_export]
macro_rules! R32 {
    ($value:expr) => {
        Rational32::from_integer($value)
    };
    ($cardinal:expr, $ordinal:expr) => {
        Rational32::new($cardinal, $ordinal)
    };
}

/// Shorthand for creating a rational number.
///
/// With a single argument, the value is an integer. The denominator is clamped like in
/// `Rational::new`.
#[macro_export]
macro_rules! R64 {
    ($value:expr) => {
        Rational64::from_integer($value)
    };
    ($cardinal:expr, $ordinal:expr) => {
        Rational64::new($cardinal, $ordinal)
    };
}

/// Shorthand for creating a rational number.
///
/// With a single argument, the value is an integer. The denominator is clamped like in
/// `Rational::new`.
#[macro_export]
macro_rules! R128 {
    ($value:expr) => {
        Rational128::from_integer($value)
    };
    ($cardinal:expr, $ordinal:expr) => {
        Rational128::new($cardinal, $ordinal)
    };
}
