//! Bounded rational numbers for dimension exponents.
//!
//! Dimension exponents are ratios of small integers (a square root of an
//! area has exponent 2/2 = 1, a cube root of a volume 3/3, and so on).
//! [`Rational`] keeps them as a gcd-reduced `i32` numerator over a positive
//! `i32` denominator.  Every combining operation has a checked variant that
//! reports [`Error::ExponentOverflow`] instead of wrapping or truncating, so
//! pathological chains of roots and powers fail loudly.

use crate::errors::{Error, Result};
use num_traits::{One, PrimInt, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Greatest common divisor of two integers (always non-negative).
///
/// Runs Euclid on the signed values and only normalizes the sign at the end,
/// so `T::MIN` operands shrink below the negation boundary before any
/// negation happens (callers reject the one unrepresentable case, a result
/// of exactly `T::MIN`, at their own boundaries).
pub fn gcd<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    if a < T::zero() {
        T::zero() - a
    } else {
        a
    }
}

/// A reduced fraction `num / den` with `den > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rational {
    num: i32,
    den: i32,
}

impl Rational {
    /// The rational zero.
    pub const ZERO: Rational = Rational { num: 0, den: 1 };

    /// The rational one.
    pub const ONE: Rational = Rational { num: 1, den: 1 };

    /// Create a reduced rational. Fails if `den` is zero or either operand
    /// is `i32::MIN`, whose magnitude has no positive counterpart.
    pub fn new(num: i32, den: i32) -> Result<Self> {
        crate::ensure!(den != 0, "rational denominator must be non-zero");
        crate::ensure!(
            num != i32::MIN && den != i32::MIN,
            "rational component magnitude too large to normalize"
        );
        Ok(Self::reduced(num, den))
    }

    /// Create a whole-number rational.
    pub const fn integer(n: i32) -> Self {
        Rational { num: n, den: 1 }
    }

    fn reduced(num: i32, den: i32) -> Self {
        debug_assert!(den != 0);
        if num == 0 {
            return Rational::ZERO;
        }
        let g = gcd(num, den);
        let sign = if den < 0 { -1 } else { 1 };
        Rational {
            num: sign * (num / g),
            den: sign * (den / g),
        }
    }

    /// The reduced numerator (sign carrier).
    pub const fn numerator(&self) -> i32 {
        self.num
    }

    /// The reduced denominator (always positive).
    pub const fn denominator(&self) -> i32 {
        self.den
    }

    /// `true` iff the value is a whole number.
    pub const fn is_integer(&self) -> bool {
        self.den == 1
    }

    /// Checked addition.
    pub fn checked_add(&self, other: &Rational) -> Result<Rational> {
        let num = (self.num as i64) * (other.den as i64) + (other.num as i64) * (self.den as i64);
        let den = (self.den as i64) * (other.den as i64);
        Self::from_i64(num, den, "rational addition")
    }

    /// Checked subtraction.
    pub fn checked_sub(&self, other: &Rational) -> Result<Rational> {
        self.checked_add(&-*other)
    }

    /// Checked multiplication.
    pub fn checked_mul(&self, other: &Rational) -> Result<Rational> {
        let num = (self.num as i64) * (other.num as i64);
        let den = (self.den as i64) * (other.den as i64);
        Self::from_i64(num, den, "rational multiplication")
    }

    /// Checked multiplication by an integer.
    pub fn checked_mul_int(&self, n: i32) -> Result<Rational> {
        self.checked_mul(&Rational::integer(n))
    }

    /// Checked division by a non-zero integer.
    pub fn checked_div_int(&self, n: i32) -> Result<Rational> {
        crate::ensure!(n != 0, "cannot divide a rational exponent by zero");
        crate::ensure!(
            n != i32::MIN,
            "rational component magnitude too large to normalize"
        );
        self.checked_mul(&Self::reduced(1, n))
    }

    fn from_i64(num: i64, den: i64, context: &'static str) -> Result<Rational> {
        debug_assert!(den != 0);
        if num == 0 {
            return Ok(Rational::ZERO);
        }
        let g = gcd(num, den);
        let sign: i64 = if den < 0 { -1 } else { 1 };
        let (num, den) = (sign * (num / g), sign * (den / g));
        // Stored numerators stay strictly above i32::MIN so negation
        // (`recip`, `Neg`) is always representable.
        let num = i32::try_from(num)
            .ok()
            .filter(|n| *n != i32::MIN)
            .ok_or(Error::ExponentOverflow(context))?;
        let den = i32::try_from(den).map_err(|_| Error::ExponentOverflow(context))?;
        Ok(Rational { num, den })
    }

    /// The value as a double, for display and tolerance-based tests.
    pub fn to_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplication preserves order.
        let lhs = (self.num as i64) * (other.den as i64);
        let rhs = (other.num as i64) * (self.den as i64);
        lhs.cmp(&rhs)
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

// The operator impls panic on overflow, matching the behavior of the
// primitive integer operators; fallible callers use the checked_* methods.

impl Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        match self.checked_add(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        match self.checked_sub(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        match self.checked_mul(&rhs) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::ZERO
    }

    fn is_zero(&self) -> bool {
        self.num == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::ONE
    }

    fn is_one(&self) -> bool {
        self.num == 1 && self.den == 1
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::integer(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduction_and_sign() {
        let r = Rational::new(4, -6).unwrap();
        assert_eq!(r.numerator(), -2);
        assert_eq!(r.denominator(), 3);
        assert_eq!(Rational::new(0, 5).unwrap(), Rational::ZERO);
    }

    #[test]
    fn zero_denominator_rejected() {
        assert!(Rational::new(1, 0).is_err());
    }

    #[test]
    fn arithmetic() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        assert_eq!(half + third, Rational::new(5, 6).unwrap());
        assert_eq!(half - third, Rational::new(1, 6).unwrap());
        assert_eq!(half * third, Rational::new(1, 6).unwrap());
        assert_eq!(-half, Rational::new(-1, 2).unwrap());
    }

    #[test]
    fn root_then_power_round_trips() {
        let two = Rational::integer(2);
        let back = two.checked_div_int(3).unwrap().checked_mul_int(3).unwrap();
        assert_eq!(back, two);
    }

    #[test]
    fn overflow_is_reported() {
        let big = Rational::integer(i32::MAX);
        let err = big.checked_mul_int(2).unwrap_err();
        assert!(matches!(err, Error::ExponentOverflow(_)));
    }

    #[test]
    fn ordering() {
        let half = Rational::new(1, 2).unwrap();
        let third = Rational::new(1, 3).unwrap();
        assert!(third < half);
        assert!(-half < third);
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(0, 7), 7);
    }

    #[test]
    fn gcd_survives_extreme_operands() {
        assert_eq!(gcd(i32::MIN, 2), 2);
        assert_eq!(gcd(i32::MIN, 3), 1);
        assert_eq!(gcd(i64::MIN, 4), 4);
    }

    #[test]
    fn extreme_magnitudes_are_rejected() {
        assert!(Rational::new(i32::MIN, 3).is_err());
        assert!(Rational::new(3, i32::MIN).is_err());
        assert!(Rational::integer(2).checked_div_int(i32::MIN).is_err());
        // One step inside the boundary is representable.
        assert!(Rational::new(i32::MIN + 1, 3).is_ok());
    }
}
