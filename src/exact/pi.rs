//! # Pi-Multiple Angle Rendering
//!
//! Detects when an angle is (numerically close to) a rational multiple
//! of pi and renders it as `"<fraction> pi"`, `"pi"`, or `"0"`, falling
//! back to the canonicalized decimal otherwise.
//!
//! ## Rational Approximation Strategy
//!
//! The angle is reduced into `[0, 2*pi)`, canonicalized, and divided by
//! pi. The quotient is expanded into its *exact* binary fraction (every
//! finite `f64` is a dyadic rational) and the best rational
//! approximation with bounded denominator is found by the classic
//! continued-fraction bound construction. Only if that fraction lands
//! within tolerance of the quotient is the symbolic form used; the
//! stored angle is never altered, only its displayed form.
//!
//! ## Examples
//!
//! ```rust
//! use exactvec::exact::render_pi_multiple;
//! use std::f64::consts::PI;
//!
//! assert_eq!(render_pi_multiple(2.0 / 3.0 * PI), "2/3 pi");
//! assert_eq!(render_pi_multiple(PI), "pi");
//! assert_eq!(render_pi_multiple(0.0), "0");
//! // 1 radian is not a recognizable multiple of pi
//! assert_eq!(render_pi_multiple(1.0), "1");
//! ```

use std::f64::consts::{PI, TAU};

use num::integer::gcd;
use num::rational::Ratio;
use num::One;

use crate::canonical::canonicalize;

/// Default distance from a fraction within which the symbolic form wins.
pub const PI_TOLERANCE: f64 = 1e-7;

/// Default denominator bound for the rational approximation.
pub const MAX_DENOMINATOR: i64 = 200;

/// Reduces an angle into `[0, 2*pi)`.
///
/// # Examples
///
/// ```rust
/// use exactvec::exact::reduce_angle;
/// use std::f64::consts::PI;
///
/// assert_eq!(reduce_angle(5.0 * PI), PI);
/// assert_eq!(reduce_angle(-PI / 2.0), 3.0 * PI / 2.0);
/// ```
pub fn reduce_angle(theta: f64) -> f64 {
    theta.rem_euclid(TAU)
}

/// Renders an angle as a rational multiple of pi, using the default
/// tolerance and denominator bound.
pub fn render_pi_multiple(theta: f64) -> String {
    render_pi_multiple_with(theta, PI_TOLERANCE, MAX_DENOMINATOR)
}

/// Renders an angle as a rational multiple of pi.
///
/// The angle is reduced into `[0, 2*pi)` and canonicalized; an exact
/// zero renders as `"0"`. Otherwise the best fraction `p/q` with
/// `q <= max_denominator` approximating `theta / pi` is computed, and if
/// it lands within `tolerance` the result is `"pi"` (for `p/q == 1`) or
/// `"<p/q> pi"` in lowest terms. Angles that are no such multiple render
/// as their canonicalized decimal.
pub fn render_pi_multiple_with(theta: f64, tolerance: f64, max_denominator: i64) -> String {
    let reduced = canonicalize(reduce_angle(theta));
    if reduced == 0.0 {
        return "0".to_string();
    }

    let multiple = reduced / PI;
    let fraction = best_rational(multiple, max_denominator);
    let approximated = *fraction.numer() as f64 / *fraction.denom() as f64;

    if (approximated - multiple).abs() <= tolerance {
        if fraction.is_one() {
            return "pi".to_string();
        }
        return format!("{} pi", fraction);
    }

    format!("{}", reduced)
}

/// Best rational approximation to `x` with denominator bounded by
/// `max_denominator` (standard limit-denominator semantics).
///
/// `x` is non-negative and small here (a reduced angle over pi, so below
/// 2 plus rounding), which keeps all intermediate products well inside
/// `i128`.
fn best_rational(x: f64, max_denominator: i64) -> Ratio<i64> {
    let (numer, denom) = exact_fraction(x);
    let (p, q) = limit_denominator(numer, denom, i128::from(max_denominator));
    Ratio::new(p as i64, q as i64)
}

/// Expands a finite `f64` into its exact fraction `n / d` in lowest
/// terms, with `d > 0`.
///
/// Values below `2^-80` map to `0/1`: they cannot survive
/// canonicalization, and their exact denominators would not fit the
/// integer width used downstream.
fn exact_fraction(x: f64) -> (i128, i128) {
    let bits = x.to_bits();
    let negative = bits >> 63 == 1;
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = (bits & ((1u64 << 52) - 1)) as i128;

    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074i64)
    } else {
        (fraction | (1i128 << 52), biased - 1075)
    };

    if mantissa == 0 || exponent < -80 {
        return (0, 1);
    }

    let mut numer = if negative { -mantissa } else { mantissa };
    let mut denom: i128 = 1;
    if exponent >= 0 {
        numer <<= exponent;
    } else {
        denom <<= -exponent;
    }

    let common = gcd(numer.abs(), denom);
    (numer / common, denom / common)
}

/// Closest fraction to `n / d` with denominator at most
/// `max_denominator`.
///
/// Walks the continued-fraction expansion until the next convergent's
/// denominator would exceed the bound, then picks the closer of the last
/// convergent and the best semiconvergent below the bound (ties go to
/// the convergent).
fn limit_denominator(n: i128, d: i128, max_denominator: i128) -> (i128, i128) {
    if d <= max_denominator {
        return (n, d);
    }

    let (orig_n, orig_d) = (n, d);
    let (mut p0, mut q0, mut p1, mut q1) = (0i128, 1i128, 1i128, 0i128);
    let (mut n, mut d) = (n, d);
    loop {
        let a = n / d;
        let q2 = q0 + a * q1;
        if q2 > max_denominator {
            break;
        }
        let p2 = p0 + a * p1;
        p0 = p1;
        q0 = q1;
        p1 = p2;
        q1 = q2;
        let r = n - a * d;
        n = d;
        d = r;
    }

    let steps = (max_denominator - q0) / q1;
    let semi = (p0 + steps * p1, q0 + steps * q1);
    let conv = (p1, q1);

    // |conv - x| <= |semi - x| with the shared denominator cancelled.
    let conv_err = (conv.0 * orig_d - orig_n * conv.1).abs() * semi.1;
    let semi_err = (semi.0 * orig_d - orig_n * semi.1).abs() * conv.1;
    if conv_err <= semi_err {
        conv
    } else {
        semi
    }
}
