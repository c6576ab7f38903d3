//! The integrand `4 / (1 + x^2)` and the midpoint summation loop.
//!
//! `sum_range` is the only summation loop in the crate. The serial path and
//! every parallel worker go through it, which keeps a one-worker run
//! bit-identical to the serial run.

/// `f(x) = 4 / (1 + x^2)`; its integral over `[0, 1]` is π.
#[inline]
#[must_use]
pub fn integrand(x: f64) -> f64 {
    4.0 / (1.0 + x * x)
}

/// Midpoint of sample `i` for interval width `h`.
#[inline]
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn midpoint(i: u64, h: f64) -> f64 {
    h * (i as f64 + 0.5)
}

/// Sum of `f(x_i)` for `i` in `[start, end)`, accumulated in ascending order.
#[must_use]
pub fn sum_range(start: u64, end: u64, h: f64) -> f64 {
    let mut sum = 0.0;
    for i in start..end {
        sum += integrand(midpoint(i, h));
    }
    sum
}
