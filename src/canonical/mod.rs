//! # Numeric Canonicalization Module
//!
//! This module suppresses floating-point representation noise so that
//! mathematically "nice" results (integers, short decimals) display as
//! such. Every scalar produced by the vector layer passes through
//! [`canonicalize`] before being stored or displayed.
//!
//! ## Design Philosophy
//!
//! Two complementary heuristics are combined:
//!
//! - [`snap_to_integer`] handles values a hair away from a whole number,
//!   the typical outcome of square roots and inverse trigonometric
//!   functions (`acos(1.0 - eps)`, `sqrt(25.000000001)`).
//! - [`trim_float_noise`] handles values whose decimal rendering carries
//!   a long run of `9`s or `0`s, the typical outcome of binary rounding
//!   (`0.1 + 0.2 == 0.30000000000000004`).
//!
//! The trimming rule is deliberately textual: it operates on the decimal
//! string a value renders as, not on its binary representation. A run of
//! at least six `9`s truncates the string before the run and bumps the
//! preceding digit; a run of at least six `0`s truncates before the run.
//! Substituting an analytic rounding scheme would change observable
//! output, so the string contract is preserved as-is.
//!
//! ## Examples
//!
//! ```rust
//! use exactvec::canonical::canonicalize;
//!
//! assert_eq!(canonicalize(10.000000001), 10.0);
//! assert_eq!(canonicalize(0.1 + 0.2), 0.3);
//! // Outside tolerance: returned unchanged
//! assert_eq!(canonicalize(1.0000122), 1.0000122);
//! ```

use log::{debug, trace};

/// Default distance from a whole number within which a value snaps.
pub const SNAP_TOLERANCE: f64 = 1e-9;

/// Minimum run length of repeated `9`s or `0`s that counts as noise.
const NOISE_RUN: usize = 6;

/// Snaps a value to the nearest integer using the default tolerance.
///
/// The floor is checked before the ceiling; with a sane tolerance
/// (below 0.5) at most one of the two can match.
///
/// # Examples
///
/// ```rust
/// use exactvec::canonical::snap_to_integer;
///
/// assert_eq!(snap_to_integer(10.0000000001), 10.0);
/// assert_eq!(snap_to_integer(4.9999999996), 5.0);
/// assert_eq!(snap_to_integer(1.0000122), 1.0000122);
/// ```
pub fn snap_to_integer(x: f64) -> f64 {
    snap_to_integer_with(x, SNAP_TOLERANCE)
}

/// Snaps a value to the nearest integer using an explicit tolerance.
pub fn snap_to_integer_with(x: f64, tolerance: f64) -> f64 {
    let floor = x.floor();
    if (x - floor).abs() <= tolerance {
        return normalize_zero(floor);
    }

    let ceil = x.ceil();
    if (x - ceil).abs() <= tolerance {
        return normalize_zero(ceil);
    }

    x
}

// Keeps snapped results from displaying as "-0".
fn normalize_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

/// Suppresses float noise by inspecting the decimal string rendering.
///
/// If the rendering contains a run of at least six consecutive `9`s, the
/// string is truncated immediately before the run, a trailing decimal
/// point is dropped, and the preceding digit is incremented by one (a
/// single-digit increment; no carry propagation). If it instead contains
/// a run of at least six consecutive `0`s, the string is truncated
/// immediately before the run. The truncated string is parsed back into
/// a float.
///
/// When a nine-run starts at the leading digit there is no digit left to
/// increment and the input is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use exactvec::canonical::trim_float_noise;
///
/// assert_eq!(trim_float_noise(1.2000000000000002), 1.2);
/// assert_eq!(trim_float_noise(1.2999999999999999), 1.3);
/// assert_eq!(trim_float_noise(1.25), 1.25);
/// ```
pub fn trim_float_noise(x: f64) -> f64 {
    let rendered = format!("{}", x);

    let nine_run = "9".repeat(NOISE_RUN);
    if let Some(at) = rendered.find(&nine_run) {
        let mut head = rendered[..at].to_string();
        if head.ends_with('.') {
            head.pop();
        }
        match head.pop() {
            Some(digit) if digit.is_ascii_digit() => {
                // Single-digit increment, no carry propagation.
                let bumped = (digit as u8 - b'0') + 1;
                head.push_str(&bumped.to_string());
                return head.parse().unwrap_or(x);
            }
            _ => {
                debug!("nine-run at leading digit of {}, leaving unchanged", x);
                return x;
            }
        }
    }

    let zero_run = "0".repeat(NOISE_RUN);
    if let Some(at) = rendered.find(&zero_run) {
        let head = &rendered[..at];
        return head.parse().unwrap_or(x);
    }

    x
}

/// Applies [`trim_float_noise`] then [`snap_to_integer`].
///
/// This is the function every other component calls before returning or
/// displaying a scalar. It is total over finite inputs and idempotent
/// over its own outputs.
pub fn canonicalize(x: f64) -> f64 {
    let cleaned = snap_to_integer(trim_float_noise(x));
    if cleaned != x {
        trace!("canonicalized {} -> {}", x, cleaned);
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_snap_within_tolerance() {
        assert_eq!(snap_to_integer(10.0000000001), 10.0);
        assert_eq!(snap_to_integer(9.9999999996), 10.0);
        assert_eq!(snap_to_integer(-2.0000000004), -2.0);
        assert_eq!(snap_to_integer(0.0), 0.0);
    }

    #[test]
    fn test_snap_outside_tolerance() {
        assert_eq!(snap_to_integer(1.0000122), 1.0000122);
        assert_eq!(snap_to_integer(2.5), 2.5);
        assert_eq!(snap_to_integer(-0.4), -0.4);
    }

    #[test]
    fn test_snap_explicit_tolerance() {
        assert_eq!(snap_to_integer_with(1.01, 0.1), 1.0);
        assert_eq!(snap_to_integer_with(1.01, 1e-9), 1.01);
    }

    #[test]
    fn test_snap_never_shows_negative_zero() {
        let snapped = snap_to_integer(-1e-12);
        assert_eq!(snapped, 0.0);
        assert_eq!(format!("{}", snapped), "0");
    }

    #[rstest]
    #[case(1.2000000000000002, 1.2)]
    #[case(0.30000000000000004, 0.3)]
    #[case(2.0000000000000004, 2.0)]
    #[case(0.9999999, 1.0)]
    #[case(0.19999999999999998, 0.2)]
    #[case(1.0999999999999999, 1.1)]
    fn test_trim_noise_runs(#[case] noisy: f64, #[case] expected: f64) {
        assert_eq!(trim_float_noise(noisy), expected);
    }

    #[rstest]
    #[case(1.25)]
    #[case(0.123456)]
    #[case(-7.5)]
    #[case(42.0)]
    fn test_trim_leaves_clean_values(#[case] clean: f64) {
        assert_eq!(trim_float_noise(clean), clean);
    }

    #[test]
    fn test_trim_negative_noise() {
        assert_eq!(trim_float_noise(-1.2000000000000002), -1.2);
        assert_eq!(trim_float_noise(-0.9999999), -1.0);
    }

    #[test]
    fn test_trim_leading_nine_run_unchanged() {
        // No digit precedes the run, so the textual rule cannot apply.
        assert_eq!(trim_float_noise(999999.5), 999999.5);
    }

    #[test]
    fn test_canonicalize_reference_values() {
        assert_eq!(canonicalize(10.000000001), 10.0);
        assert_eq!(canonicalize(1.0000122), 1.0000122);
        assert_eq!(canonicalize(0.1 + 0.2), 0.3);
    }

    #[test]
    fn test_canonicalize_trig_residue() {
        // cos(pi/2) leaves ~6.1e-17, which must vanish entirely.
        let residue = (std::f64::consts::PI / 2.0).cos();
        assert_eq!(canonicalize(residue), 0.0);
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let samples = [
            10.000000001,
            1.0000122,
            0.1 + 0.2,
            1.2999999999999999,
            -3.75,
            0.0,
            5.0,
            2.0943951023931953,
        ];
        for &x in &samples {
            let once = canonicalize(x);
            assert_eq!(canonicalize(once), once, "not idempotent for {}", x);
        }
    }
}
