//! Tolerance checks for converted magnitudes.
//!
//! Chained unit conversions accumulate floating-point rounding (a value sent
//! through a converter and back rarely returns bit-identical), so round-trip
//! assertions compare within a tolerance instead of exactly.

use crate::Real;

/// `true` if `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn close(a: Real, b: Real, epsilon: Real) -> bool {
    (a - b).abs() <= epsilon
}

/// `true` if `a` and `b` agree to within `tolerance`, scaled by the larger
/// magnitude. Below magnitude one the comparison degrades to absolute, so a
/// converted value near zero is not held to an impossible relative bound.
#[inline]
pub fn relative_close(a: Real, b: Real, tolerance: Real) -> bool {
    close(a, b, tolerance * a.abs().max(b.abs()).max(1.0))
}
