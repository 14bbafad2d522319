//! Algebraic properties, checked against exact computations in a wider integer type.
use std::cmp::Ordering;

use itertools::iproduct;
use num_traits::Zero;
use proptest::prelude::*;

use rational_rate::{Abs, ErrorKind, Rational32, Rational64};
use rational_rate::{R32, R64};

/// Exact comparison of `a/b` and `c/d` by cross multiplication in 64 bits.
fn oracle_cmp((a, b): (i32, i32), (c, d): (i32, i32)) -> Ordering {
    (a as i64 * d as i64).cmp(&(c as i64 * b as i64))
}

#[test]
fn small_grid_order() {
    let values = iproduct!(-12..=12, 1..=12).collect::<Vec<(i32, i32)>>();

    for (&left, &right) in iproduct!(values.iter(), values.iter()) {
        let x = R32!(left.0, left.1);
        let y = R32!(right.0, right.1);
        assert_eq!(x.cmp(&y), oracle_cmp(left, right), "{} vs {}", x, y);
        assert_eq!(x == y, oracle_cmp(left, right) == Ordering::Equal);
    }
}

#[test]
fn small_grid_arithmetic_is_reduced() {
    for (a, b, c, d) in iproduct!(-6..=6, 1..=6, -6..=6, 1..=6) {
        let x = R32!(a, b);
        let y = R32!(c, d);
        assert!((x + y).is_simplified());
        assert!((x - y).is_simplified());
        assert!((x * y).is_simplified());
        if c != 0 {
            let quotient = x / y;
            assert!(quotient.is_simplified());
            assert!(quotient.ordinal() > 0);
        }
    }
}

proptest! {
    #[test]
    fn construction_keeps_parts(cardinal in any::<i32>(), ordinal in 1..=i32::MAX) {
        let value = R32!(cardinal, ordinal);
        prop_assert_eq!(value.cardinal(), cardinal);
        prop_assert_eq!(value.ordinal(), ordinal);
    }

    #[test]
    fn construction_clamps(cardinal in any::<i64>(), ordinal in i64::MIN..=0) {
        let value = R64!(cardinal, ordinal);
        prop_assert_eq!(value.cardinal(), cardinal);
        prop_assert_eq!(value.ordinal(), 1);
    }

    #[test]
    fn simplify_is_idempotent(cardinal in any::<i64>(), ordinal in 1..=i64::MAX) {
        let once = R64!(cardinal, ordinal).simplified();
        let twice = once.simplified();
        prop_assert!(once.strictly_equals(&twice));
        prop_assert!(once.is_simplified());
        prop_assert_eq!(once, R64!(cardinal, ordinal));
    }

    #[test]
    fn text_round_trip(cardinal in any::<i64>(), ordinal in 1..=i64::MAX, separator in "[^0-9\\x00]") {
        let value = R64!(cardinal, ordinal);
        let separator = separator.chars().next().unwrap();

        let parsed = value.to_string().parse::<Rational64>().unwrap();
        prop_assert!(parsed.strictly_equals(&value));

        let text = value.to_string_with_separator(separator);
        let parsed = Rational64::parse(&text).unwrap();
        prop_assert!(parsed.strictly_equals(&value));
    }

    #[test]
    fn order_is_exact(a in any::<i32>(), b in 1..=i32::MAX, c in any::<i32>(), d in 1..=i32::MAX) {
        prop_assert_eq!(R32!(a, b).cmp(&R32!(c, d)), oracle_cmp((a, b), (c, d)));
    }

    #[test]
    fn arithmetic_matches_wide_computation(
        a in -10_000..10_000i32,
        b in 1..10_000i32,
        c in -10_000..10_000i32,
        d in 1..10_000i32,
    ) {
        let (x, y) = (R32!(a, b), R32!(c, d));
        let (a, b, c, d) = (a as i64, b as i64, c as i64, d as i64);

        prop_assert_eq!(Rational64::from(x + y), R64!(a * d + c * b, b * d));
        prop_assert_eq!(Rational64::from(x - y), R64!(a * d - c * b, b * d));
        prop_assert_eq!(Rational64::from(x * y), R64!(a * c, b * d));
        if c != 0 {
            let expected = if c > 0 { R64!(a * d, b * c) } else { R64!(-a * d, -b * c) };
            prop_assert_eq!(Rational64::from(x / y), expected);
        }
    }

    #[test]
    fn division_by_zero_is_domain_error(a in any::<i32>(), b in 1..=i32::MAX, zero_ordinal in 1..=i32::MAX) {
        let error = R32!(a, b).checked_div(R32!(0, zero_ordinal)).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::Domain);
        prop_assert_eq!(R32!(0, zero_ordinal).inverse().unwrap_err().kind(), ErrorKind::Domain);
    }

    #[test]
    fn inverse_is_involution(a in -1_000_000..1_000_000i64, b in 1..1_000_000i64) {
        prop_assume!(a != 0);
        let value = R64!(a, b);
        let inverse = value.inverse().unwrap();
        prop_assert!(inverse.ordinal() > 0);
        prop_assert_eq!(inverse * value, R64!(1));
        prop_assert!(inverse.inverse().unwrap().strictly_equals(&value));
    }

    #[test]
    fn percent_truncates(a in 0..1_000_000i64, b in 1..1_000_000i64) {
        prop_assert_eq!(R64!(a, b).to_percent(), a * 100 / b);
        prop_assert_eq!(R64!(-a, b).to_percent(), -(a * 100 / b));
    }

    #[test]
    fn round_percent_is_nearest(a in 0..1_000_000i64, b in 1..1_000_000i64) {
        let rounded = R64!(a, b).to_round_percent();
        // |100a/b - rounded| <= 1/2
        prop_assert!((a * 200 - rounded * 2 * b).abs() <= b);
        prop_assert_eq!(R64!(-a, b).to_round_percent(), -rounded);
    }

    #[test]
    fn percent_with_large_denominators(a in any::<i64>(), b in (i64::MAX / 100)..=i64::MAX) {
        let (wide_a, wide_b) = (a as i128, b as i128);
        let percent = R64!(a, b).to_percent() as i128;
        prop_assert_eq!(percent, wide_a * 100 / wide_b);

        let rounded = R64!(a, b).to_round_percent() as i128;
        prop_assert!((wide_a * 200 - rounded * 2 * wide_b).abs() <= wide_b);
    }

    #[test]
    fn sum_with_shared_denominator(a in -(1 << 30)..(1 << 30), c in -(1 << 30)..(1 << 30), b in 1..=i32::MAX) {
        prop_assert_eq!(R32!(a, b).checked_add(R32!(c, b)), Ok(R32!(a + c, b)));
        prop_assert_eq!(R32!(a, b).checked_sub(R32!(c, b)), Ok(R32!(a - c, b)));
    }

    #[test]
    fn abs_is_non_negative(a in (i64::MIN + 1)..=i64::MAX, b in 1..=i64::MAX) {
        let value = R64!(a, b);
        let absolute = value.abs();
        prop_assert!(absolute >= Rational64::zero());
        prop_assert_eq!(absolute.ordinal(), b);
        prop_assert_eq!(absolute.cardinal(), a.abs());
    }

    #[test]
    fn increment_adds_one(a in -1_000_000..1_000_000i64, b in 1..1_000_000i64) {
        let mut value = R64!(a, b);
        value.increment();
        prop_assert_eq!(value.ordinal(), b);
        prop_assert_eq!(value, R64!(a, b) + R64!(1));
        value.decrement();
        prop_assert!(value.strictly_equals(&R64!(a, b)));
    }
}
