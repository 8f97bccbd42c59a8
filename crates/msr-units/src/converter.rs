//! Composable, invertible numeric transforms between unit scales.
//!
//! A [`UnitConverter`] maps numeric values expressed in one unit to values
//! expressed in another unit of the same dimension.  Converters are immutable
//! values; composition goes through [`UnitConverter::concatenate`], which
//! collapses identities and merges same-variant neighbours so converter trees
//! stay flat under repeated unit arithmetic.
//!
//! Constructors reject parameters that would make a non-identity variant
//! behave as the identity (a zero offset, a scale factor of one, a rational
//! whose dividend equals its divisor): downstream short-circuits rely on
//! [`UnitConverter::is_identity`] never lying.

use msr_core::{gcd, Decimal, Error, Real, Result};
use rust_decimal::prelude::FromPrimitive;
use std::fmt;

/// An immutable numeric transform attached to a unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitConverter {
    /// The identity transform, `x ↦ x`.
    Identity,
    /// An additive shift, `x ↦ x + offset` with `offset ≠ 0`.
    Offset {
        /// The additive constant.
        offset: Real,
    },
    /// A linear scale, `x ↦ factor · x` with `factor ∉ {0, 1}`.
    Scale {
        /// The multiplicative factor.
        factor: Real,
    },
    /// An exact rational scale, `x ↦ (dividend / divisor) · x`.
    ///
    /// Kept in integer form so that concatenation can combine exactly via
    /// gcd reduction. `divisor > 0` and `dividend/divisor ≠ 1` by
    /// construction.
    Rational {
        /// Numerator of the scale ratio (carries the sign).
        dividend: i64,
        /// Denominator of the scale ratio, always positive.
        divisor: i64,
    },
    /// A logarithm, `x ↦ log_base(x)`.
    Logarithmic {
        /// The logarithm base, positive and ≠ 1.
        base: Real,
    },
    /// An exponential, `x ↦ base^x`; the inverse of [`Logarithmic`].
    ///
    /// [`Logarithmic`]: UnitConverter::Logarithmic
    Exponential {
        /// The exponentiation base, positive and ≠ 1.
        base: Real,
    },
    /// Function composition: `x ↦ second(first(x))`.
    Compound {
        /// Applied first.
        first: Box<UnitConverter>,
        /// Applied to the result of `first`.
        second: Box<UnitConverter>,
    },
}

impl UnitConverter {
    /// The identity converter.
    pub const IDENTITY: UnitConverter = UnitConverter::Identity;

    /// An additive shift. Fails for a zero or non-finite offset.
    pub fn offset(offset: Real) -> Result<Self> {
        msr_core::ensure!(offset.is_finite(), "offset must be finite, got {offset}");
        msr_core::ensure!(
            offset != 0.0,
            "an offset of zero is the identity; use UnitConverter::IDENTITY"
        );
        Ok(UnitConverter::Offset { offset })
    }

    /// A linear scale. Fails for a factor of one (identity), zero
    /// (non-invertible), or a non-finite factor.
    pub fn scale(factor: Real) -> Result<Self> {
        msr_core::ensure!(factor.is_finite(), "scale factor must be finite, got {factor}");
        msr_core::ensure!(
            factor != 1.0,
            "a scale factor of one is the identity; use UnitConverter::IDENTITY"
        );
        msr_core::ensure!(factor != 0.0, "a scale factor of zero is not invertible");
        Ok(UnitConverter::Scale { factor })
    }

    /// An exact rational scale `dividend / divisor`.
    ///
    /// Fails for a zero divisor, a zero dividend (non-invertible), or a
    /// ratio that reduces to one (identity). The stored pair is gcd-reduced
    /// with a positive divisor.
    pub fn rational(dividend: i64, divisor: i64) -> Result<Self> {
        msr_core::ensure!(divisor != 0, "rational converter divisor must be non-zero");
        msr_core::ensure!(dividend != 0, "a rational scale of zero is not invertible");
        // i64::MIN has no positive counterpart, so sign normalization (and
        // inversion) could not represent it.
        msr_core::ensure!(
            dividend != i64::MIN && divisor != i64::MIN,
            "rational converter component magnitude too large"
        );
        msr_core::ensure!(
            dividend != divisor,
            "dividend equals divisor; this is the identity converter"
        );
        match Self::reduced_rational(dividend, divisor) {
            UnitConverter::Identity => {
                msr_core::fail!("rational {dividend}/{divisor} reduces to the identity")
            }
            c => Ok(c),
        }
    }

    /// A base-`base` logarithm. Fails unless `base` is positive and ≠ 1.
    pub fn logarithmic(base: Real) -> Result<Self> {
        msr_core::ensure!(
            base.is_finite() && base > 0.0 && base != 1.0,
            "logarithm base must be positive and not one, got {base}"
        );
        Ok(UnitConverter::Logarithmic { base })
    }

    /// A base-`base` exponential. Fails unless `base` is positive and ≠ 1.
    pub fn exponential(base: Real) -> Result<Self> {
        msr_core::ensure!(
            base.is_finite() && base > 0.0 && base != 1.0,
            "exponential base must be positive and not one, got {base}"
        );
        Ok(UnitConverter::Exponential { base })
    }

    // Reduce and sign-normalize; collapses 1/1 to Identity. Callers keep
    // i64::MIN out (constructor guard, concatenation overflow check).
    fn reduced_rational(dividend: i64, divisor: i64) -> UnitConverter {
        if dividend == divisor {
            return UnitConverter::Identity;
        }
        let g = gcd(dividend, divisor);
        let sign = if divisor < 0 { -1 } else { 1 };
        let (dividend, divisor) = (sign * (dividend / g), sign * (divisor / g));
        if dividend == divisor {
            UnitConverter::Identity
        } else {
            UnitConverter::Rational { dividend, divisor }
        }
    }

    /// `true` iff this is the identity converter.
    pub fn is_identity(&self) -> bool {
        matches!(self, UnitConverter::Identity)
    }

    /// `true` for affine transforms: identity, offset, (rational) scale, and
    /// compounds thereof. `false` for logarithmic/exponential converters.
    pub fn is_linear(&self) -> bool {
        match self {
            UnitConverter::Identity
            | UnitConverter::Offset { .. }
            | UnitConverter::Scale { .. }
            | UnitConverter::Rational { .. } => true,
            UnitConverter::Logarithmic { .. } | UnitConverter::Exponential { .. } => false,
            UnitConverter::Compound { first, second } => first.is_linear() && second.is_linear(),
        }
    }

    /// `true` for pure scalings (linear with zero offset).
    pub fn is_proportional(&self) -> bool {
        match self {
            UnitConverter::Identity
            | UnitConverter::Scale { .. }
            | UnitConverter::Rational { .. } => true,
            UnitConverter::Offset { .. }
            | UnitConverter::Logarithmic { .. }
            | UnitConverter::Exponential { .. } => false,
            UnitConverter::Compound { first, second } => {
                first.is_proportional() && second.is_proportional()
            }
        }
    }

    /// Apply the forward transform to a double-precision value.
    pub fn convert(&self, value: Real) -> Real {
        match self {
            UnitConverter::Identity => value,
            UnitConverter::Offset { offset } => value + offset,
            UnitConverter::Scale { factor } => value * factor,
            UnitConverter::Rational { dividend, divisor } => {
                value * (*dividend as Real) / (*divisor as Real)
            }
            UnitConverter::Logarithmic { base } => value.ln() / base.ln(),
            UnitConverter::Exponential { base } => base.powf(value),
            UnitConverter::Compound { first, second } => second.convert(first.convert(value)),
        }
    }

    /// Apply the forward transform on the exact decimal path.
    ///
    /// Offset, scale, and rational conversions stay in decimal arithmetic
    /// throughout; logarithmic and exponential converters have no exact
    /// decimal form and report [`Error::InexactDecimal`] instead of silently
    /// rounding through binary floating point.
    pub fn convert_decimal(&self, value: Decimal) -> Result<Decimal> {
        match self {
            UnitConverter::Identity => Ok(value),
            UnitConverter::Offset { offset } => {
                let offset = Decimal::from_f64(*offset)
                    .ok_or_else(|| Error::InexactDecimal(format!("offset {offset}")))?;
                value
                    .checked_add(offset)
                    .ok_or_else(|| Error::InexactDecimal("decimal offset overflow".into()))
            }
            UnitConverter::Scale { factor } => {
                let factor = Decimal::from_f64(*factor)
                    .ok_or_else(|| Error::InexactDecimal(format!("scale factor {factor}")))?;
                value
                    .checked_mul(factor)
                    .ok_or_else(|| Error::InexactDecimal("decimal scale overflow".into()))
            }
            UnitConverter::Rational { dividend, divisor } => value
                .checked_mul(Decimal::from(*dividend))
                .and_then(|v| v.checked_div(Decimal::from(*divisor)))
                .ok_or_else(|| Error::InexactDecimal("decimal rational overflow".into())),
            UnitConverter::Logarithmic { base } | UnitConverter::Exponential { base } => Err(
                Error::InexactDecimal(format!("base-{base} transform is not exact in decimal")),
            ),
            UnitConverter::Compound { first, second } => {
                second.convert_decimal(first.convert_decimal(value)?)
            }
        }
    }

    /// The converter that undoes this one.
    ///
    /// For every converter `c` and value `x`,
    /// `c.inverse().convert(c.convert(x))` equals `x` within floating-point
    /// tolerance.
    pub fn inverse(&self) -> UnitConverter {
        match self {
            UnitConverter::Identity => UnitConverter::Identity,
            UnitConverter::Offset { offset } => UnitConverter::Offset { offset: -offset },
            UnitConverter::Scale { factor } => UnitConverter::Scale {
                factor: 1.0 / factor,
            },
            UnitConverter::Rational { dividend, divisor } => {
                // Keep the sign on the dividend so the divisor stays positive.
                let sign = dividend.signum();
                UnitConverter::Rational {
                    dividend: sign * divisor,
                    divisor: sign * dividend,
                }
            }
            UnitConverter::Logarithmic { base } => UnitConverter::Exponential { base: *base },
            UnitConverter::Exponential { base } => UnitConverter::Logarithmic { base: *base },
            UnitConverter::Compound { first, second } => UnitConverter::Compound {
                first: Box::new(second.inverse()),
                second: Box::new(first.inverse()),
            },
        }
    }

    /// A converter equivalent to applying `self`, then `next`.
    ///
    /// Identity operands vanish; same-variant neighbours merge (offsets sum,
    /// scales multiply, rationals combine with gcd reduction) and collapse to
    /// the identity when the net effect is neutral. Anything else wraps in a
    /// [`Compound`].
    ///
    /// [`Compound`]: UnitConverter::Compound
    pub fn concatenate(&self, next: &UnitConverter) -> UnitConverter {
        if self.is_identity() {
            return next.clone();
        }
        if next.is_identity() {
            return self.clone();
        }
        match (self, next) {
            (UnitConverter::Offset { offset: a }, UnitConverter::Offset { offset: b }) => {
                let sum = a + b;
                if sum == 0.0 {
                    UnitConverter::Identity
                } else {
                    UnitConverter::Offset { offset: sum }
                }
            }
            (UnitConverter::Scale { factor: a }, UnitConverter::Scale { factor: b }) => {
                let product = a * b;
                if product == 1.0 {
                    UnitConverter::Identity
                } else {
                    UnitConverter::Scale { factor: product }
                }
            }
            (
                UnitConverter::Rational {
                    dividend: p1,
                    divisor: q1,
                },
                UnitConverter::Rational {
                    dividend: p2,
                    divisor: q2,
                },
            ) => {
                // Combine exactly when the products fit in i64 (a product of
                // exactly i64::MIN counts as out of range); otherwise keep
                // both halves so neither loses exactness.
                match (p1.checked_mul(*p2), q1.checked_mul(*q2)) {
                    (Some(p), Some(q)) if p != i64::MIN => Self::reduced_rational(p, q),
                    _ => self.compound_with(next),
                }
            }
            _ => self.compound_with(next),
        }
    }

    fn compound_with(&self, next: &UnitConverter) -> UnitConverter {
        UnitConverter::Compound {
            first: Box::new(self.clone()),
            second: Box::new(next.clone()),
        }
    }
}

impl fmt::Display for UnitConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitConverter::Identity => write!(f, "x"),
            UnitConverter::Offset { offset } if *offset < 0.0 => write!(f, "x - {}", -offset),
            UnitConverter::Offset { offset } => write!(f, "x + {offset}"),
            UnitConverter::Scale { factor } => write!(f, "{factor}·x"),
            UnitConverter::Rational { dividend, divisor } => {
                write!(f, "({dividend}/{divisor})·x")
            }
            UnitConverter::Logarithmic { base } => write!(f, "log{base}(x)"),
            UnitConverter::Exponential { base } => write!(f, "{base}^x"),
            UnitConverter::Compound { first, second } => write!(f, "{second} ∘ {first}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn degenerate_constructors_fail() {
        assert!(UnitConverter::offset(0.0).is_err());
        assert!(UnitConverter::scale(1.0).is_err());
        assert!(UnitConverter::scale(0.0).is_err());
        assert!(UnitConverter::rational(5, 0).is_err());
        assert!(UnitConverter::rational(7, 7).is_err());
        assert!(UnitConverter::rational(4, 4).is_err());
        assert!(UnitConverter::rational(0, 3).is_err());
        assert!(UnitConverter::logarithmic(1.0).is_err());
        assert!(UnitConverter::logarithmic(-2.0).is_err());
    }

    #[test]
    fn rational_is_reduced_and_sign_normalized() {
        let c = UnitConverter::rational(4, -6).unwrap();
        assert_eq!(
            c,
            UnitConverter::Rational {
                dividend: -2,
                divisor: 3
            }
        );
        assert!(UnitConverter::rational(6, 6).is_err());
    }

    #[test]
    fn forward_conversions() {
        assert_eq!(UnitConverter::IDENTITY.convert(3.5), 3.5);
        assert_eq!(UnitConverter::offset(273.15).unwrap().convert(0.0), 273.15);
        assert_eq!(UnitConverter::scale(2.5).unwrap().convert(4.0), 10.0);
        assert_eq!(UnitConverter::rational(5, 9).unwrap().convert(9.0), 5.0);
        assert_relative_eq!(
            UnitConverter::logarithmic(10.0).unwrap().convert(1000.0),
            3.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            UnitConverter::exponential(2.0).unwrap().convert(10.0),
            1024.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn inverse_round_trips() {
        let converters = [
            UnitConverter::IDENTITY,
            UnitConverter::offset(-40.0).unwrap(),
            UnitConverter::scale(0.3048).unwrap(),
            UnitConverter::rational(9, 5).unwrap(),
            UnitConverter::logarithmic(10.0).unwrap(),
            UnitConverter::rational(9, 5)
                .unwrap()
                .concatenate(&UnitConverter::offset(32.0).unwrap()),
        ];
        for c in &converters {
            for x in [0.5, 1.0, 37.0, 12345.678] {
                assert_relative_eq!(
                    c.inverse().convert(c.convert(x)),
                    x,
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn rational_inverse_keeps_divisor_positive() {
        let c = UnitConverter::rational(-2, 3).unwrap();
        assert_eq!(
            c.inverse(),
            UnitConverter::Rational {
                dividend: -3,
                divisor: 2
            }
        );
    }

    #[test]
    fn compound_inverse_reverses_order() {
        let scale = UnitConverter::scale(2.0).unwrap();
        let shift = UnitConverter::offset(1.0).unwrap();
        let c = scale.concatenate(&shift); // x ↦ 2x + 1
        assert_eq!(c.convert(3.0), 7.0);
        assert_eq!(c.inverse().convert(7.0), 3.0);
    }

    #[test]
    fn identity_concatenation_short_circuits() {
        let scale = UnitConverter::scale(3.0).unwrap();
        assert_eq!(UnitConverter::IDENTITY.concatenate(&scale), scale);
        assert_eq!(scale.concatenate(&UnitConverter::IDENTITY), scale);
    }

    #[test]
    fn same_variant_concatenation_merges() {
        let a = UnitConverter::offset(10.0).unwrap();
        let b = UnitConverter::offset(-4.0).unwrap();
        assert_eq!(a.concatenate(&b), UnitConverter::Offset { offset: 6.0 });
        assert!(a.concatenate(&a.inverse()).is_identity());

        let s = UnitConverter::scale(4.0).unwrap();
        assert_eq!(
            s.concatenate(&s),
            UnitConverter::Scale { factor: 16.0 }
        );
        assert!(s.concatenate(&s.inverse()).is_identity());

        let r1 = UnitConverter::rational(2, 3).unwrap();
        let r2 = UnitConverter::rational(9, 4).unwrap();
        assert_eq!(
            r1.concatenate(&r2),
            UnitConverter::Rational {
                dividend: 3,
                divisor: 2
            }
        );
        assert!(r1.concatenate(&r1.inverse()).is_identity());
    }

    #[test]
    fn mixed_variants_stay_compound() {
        let r = UnitConverter::rational(2, 1).unwrap();
        let s = UnitConverter::scale(0.5).unwrap();
        let c = r.concatenate(&s);
        assert!(matches!(c, UnitConverter::Compound { .. }));
        assert_relative_eq!(c.convert(21.0), 21.0, max_relative = 1e-12);
        assert!(!c.is_identity());
    }

    #[test]
    fn linearity_predicates() {
        let offset = UnitConverter::offset(5.0).unwrap();
        let scale = UnitConverter::scale(2.0).unwrap();
        let log = UnitConverter::logarithmic(10.0).unwrap();
        assert!(offset.is_linear() && !offset.is_proportional());
        assert!(scale.is_linear() && scale.is_proportional());
        assert!(!log.is_linear() && !log.is_proportional());
        let affine = scale.concatenate(&offset);
        assert!(affine.is_linear() && !affine.is_proportional());
        let mixed = scale.concatenate(&log);
        assert!(!mixed.is_linear());
    }

    #[test]
    fn decimal_path_is_exact() {
        let celsius_to_kelvin = UnitConverter::offset(273.15).unwrap();
        let z = celsius_to_kelvin
            .convert_decimal(Decimal::ZERO)
            .unwrap();
        assert_eq!(z, Decimal::from_str("273.15").unwrap());

        let ratio = UnitConverter::rational(1, 8).unwrap();
        assert_eq!(
            ratio.convert_decimal(Decimal::from(1)).unwrap(),
            Decimal::from_str("0.125").unwrap()
        );

        let log = UnitConverter::logarithmic(10.0).unwrap();
        assert!(matches!(
            log.convert_decimal(Decimal::from(100)),
            Err(Error::InexactDecimal(_))
        ));
    }

    #[test]
    fn rational_overflow_falls_back_to_compound() {
        let huge = UnitConverter::rational(i64::MAX, 2).unwrap();
        let c = huge.concatenate(&huge);
        assert!(matches!(c, UnitConverter::Compound { .. }));

        // A product of exactly i64::MIN is out of range too.
        let a = UnitConverter::rational(1 << 62, 1).unwrap();
        let b = UnitConverter::rational(-2, 1).unwrap();
        assert!(matches!(a.concatenate(&b), UnitConverter::Compound { .. }));
    }

    #[test]
    fn extreme_rational_components_are_rejected() {
        assert!(UnitConverter::rational(i64::MIN, 3).is_err());
        assert!(UnitConverter::rational(3, i64::MIN).is_err());
        assert!(UnitConverter::rational(i64::MIN + 1, 3).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_preserves_variant_and_parameters() {
        let converters = [
            UnitConverter::IDENTITY,
            UnitConverter::offset(273.15).unwrap(),
            UnitConverter::scale(0.3048).unwrap(),
            UnitConverter::rational(5, 9).unwrap(),
            UnitConverter::logarithmic(10.0).unwrap(),
            UnitConverter::exponential(2.0).unwrap(),
            UnitConverter::offset(459.67)
                .unwrap()
                .concatenate(&UnitConverter::rational(5, 9).unwrap()),
        ];
        for c in &converters {
            let json = serde_json::to_string(c).unwrap();
            let back: UnitConverter = serde_json::from_str(&json).unwrap();
            assert_eq!(&back, c, "variant changed through {json}");
        }
    }
}
