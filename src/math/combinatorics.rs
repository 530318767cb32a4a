//! Exact combination counting with interleaved GCD reduction
//!
//! `C(n, r)` is built as a running fraction `top / bottom`, where `top` collects
//! `n · (n-1) · … · (n-r+1)` and `bottom` collects `r!`. Both are divided by their
//! greatest common divisor after every factor pair, so the fraction never grows
//! much past the final count.

use num::BigUint;
use num::Integer;
use num_traits::{One, PrimInt, Unsigned, Zero};

/// Greatest common divisor by the Euclidean algorithm
///
/// `gcd(0, x) == x`, `gcd(x, 0) == x` and `gcd(0, 0) == 0`.
pub fn gcd<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// Exact combination count `C(n, r)` in a fixed-width unsigned integer
///
/// Returns `None` when an intermediate product does not fit in `T`.
/// `r > n` yields zero.
pub fn ncr<T: PrimInt + Unsigned>(n: T, r: T) -> Option<T> {
    if r > n {
        return Some(T::zero());
    }

    let mut r = r.min(n - r);
    let mut n = n;
    let mut top = T::one();
    let mut bottom = T::one();

    while !r.is_zero() {
        top = top.checked_mul(&n)?;
        bottom = bottom.checked_mul(&r)?;

        // bottom >= 1 throughout, so the divisor is never zero
        let divisor = gcd(top, bottom);
        top = top / divisor;
        bottom = bottom / divisor;

        n = n - T::one();
        r = r - T::one();
    }

    debug_assert!(bottom.is_one());
    Some(top)
}

/// Exact combination count `C(n, r)` without an upper bound
pub fn ncr_big(n: u64, r: u64) -> BigUint {
    if r > n {
        return BigUint::zero();
    }

    let steps = r.min(n - r);
    let mut top = BigUint::one();
    let mut bottom = BigUint::one();

    for step in 0..steps {
        top *= n - step;
        bottom *= steps - step;

        let divisor = top.gcd(&bottom);
        top /= &divisor;
        bottom /= &divisor;
    }

    top
}

/// Natural logarithm of `C(n, r)`
///
/// Returns negative infinity when `r > n`, matching `ln 0`.
pub fn ln_ncr(n: u64, r: u64) -> f64 {
    if r > n {
        return f64::NEG_INFINITY;
    }

    let steps = r.min(n - r);
    let offset = (n - steps) as f64;
    (1..=steps)
        .map(|i| {
            let i = i as f64;
            ((offset + i) / i).ln()
        })
        .sum()
}
