//! # Simplified Radical Rendering
//!
//! Renders the square root of a non-negative integer in simplified
//! radical form: paired prime factors move outside the root, unpaired
//! ones stay inside. `sqrt(18)` becomes `3 sqrt(2)`, `sqrt(4)` becomes
//! `2`, `sqrt(7)` stays `sqrt(7)`.
//!
//! Factorization is plain trial division, the only non-constant-time
//! path in the crate: bounded by `sqrt(n)` divisions.

/// Prime factors of `n` in non-decreasing order.
///
/// Twos are divided out first, then odd trial divisors; whatever prime
/// remains above 2 is appended last. Values below 2 have no factors.
///
/// # Examples
///
/// ```rust
/// use exactvec::exact::factorize;
///
/// assert_eq!(factorize(18), vec![2, 3, 3]);
/// assert_eq!(factorize(97), vec![97]);
/// assert!(factorize(1).is_empty());
/// ```
pub fn factorize(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if n < 2 {
        return factors;
    }

    let mut remaining = n;
    while remaining % 2 == 0 {
        factors.push(2);
        remaining /= 2;
    }

    let mut divisor = 3;
    while divisor * divisor <= remaining {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 2;
    }

    if remaining > 2 {
        factors.push(remaining);
    }

    factors
}

/// Renders `sqrt(n)` in simplified radical form.
///
/// Non-integer input is returned as its decimal string; no radical
/// simplification is attempted. For integer input the sorted factor
/// list is scanned left to right: adjacent equal factors are removed in
/// pairs and multiplied into the `outside` coefficient, unpaired
/// factors into the `inside` remainder. Both accumulators start at 1,
/// so `n == 0` and `n == 1` (empty factor lists) both render `"1"`,
/// a documented boundary callers must special-case when a zero radius
/// is meaningful.
///
/// # Examples
///
/// ```rust
/// use exactvec::exact::simplify_radical;
///
/// assert_eq!(simplify_radical(18.0), "3 sqrt(2)");
/// assert_eq!(simplify_radical(4.0), "2");
/// assert_eq!(simplify_radical(7.0), "sqrt(7)");
/// assert_eq!(simplify_radical(2.25), "2.25");
/// ```
pub fn simplify_radical(n: f64) -> String {
    if n.fract() != 0.0 || n < 0.0 {
        return format!("{}", n);
    }

    let factors = factorize(n as u64);
    let mut outside: u64 = 1;
    let mut inside: u64 = 1;

    let mut i = 0;
    while i < factors.len() {
        if i + 1 < factors.len() && factors[i] == factors[i + 1] {
            outside *= factors[i];
            i += 2;
        } else {
            inside *= factors[i];
            i += 1;
        }
    }

    if inside == 1 {
        format!("{}", outside)
    } else if outside == 1 {
        format!("sqrt({})", inside)
    } else {
        format!("{} sqrt({})", outside, inside)
    }
}
