//! Physical dimensions as products of base dimensions raised to rational
//! powers.
//!
//! A [`Dimension`] is the abstract quantity-kind of a unit (length, mass,
//! velocity = length/time, ...), independent of any particular unit.  Two
//! dimensions are equal iff their exponent maps are equal; the bracket
//! notation produced by `Display` (`[L][T]^-2`) is derived from the map and
//! is for debugging only.

use msr_core::{Error, Rational, Result};
use std::collections::BTreeMap;
use std::fmt;

/// One of the seven SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseDimension {
    /// Length, `[L]`.
    Length,
    /// Mass, `[M]`.
    Mass,
    /// Time, `[T]`.
    Time,
    /// Electric current, `[I]`.
    ElectricCurrent,
    /// Thermodynamic temperature, `[Θ]`.
    Temperature,
    /// Amount of substance, `[N]`.
    AmountOfSubstance,
    /// Luminous intensity, `[J]`.
    LuminousIntensity,
}

impl BaseDimension {
    /// The conventional single-letter bracket symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::ElectricCurrent => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::AmountOfSubstance => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }
}

/// An immutable product of base dimensions raised to rational exponents.
///
/// The dimensionless dimension (the multiplicative identity) is the empty
/// product returned by [`Dimension::none`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension {
    // Zero exponents are never stored, so map equality is dimension equality.
    exponents: BTreeMap<BaseDimension, Rational>,
}

impl Dimension {
    /// The dimensionless dimension.
    pub fn none() -> Self {
        Dimension::default()
    }

    /// The dimension of a single base quantity.
    pub fn base(base: BaseDimension) -> Self {
        let mut exponents = BTreeMap::new();
        exponents.insert(base, Rational::ONE);
        Dimension { exponents }
    }

    /// `true` iff this is the dimensionless dimension.
    pub fn is_none(&self) -> bool {
        self.exponents.is_empty()
    }

    /// The exponent of `base` in this dimension (zero if absent).
    pub fn exponent(&self, base: BaseDimension) -> Rational {
        self.exponents.get(&base).copied().unwrap_or(Rational::ZERO)
    }

    /// The product of two dimensions: per-base exponents are summed.
    pub fn multiply(&self, other: &Dimension) -> Result<Dimension> {
        let mut exponents = self.exponents.clone();
        for (&base, exp) in &other.exponents {
            let combined = self.exponent(base).checked_add(exp)?;
            if combined == Rational::ZERO {
                exponents.remove(&base);
            } else {
                exponents.insert(base, combined);
            }
        }
        Ok(Dimension { exponents })
    }

    /// This dimension raised to an integer power. `pow(0)` is dimensionless.
    pub fn pow(&self, n: i32) -> Result<Dimension> {
        self.pow_rational(&Rational::integer(n))
    }

    /// The `n`-th root of this dimension. Fails for `n = 0` and when a
    /// resulting exponent leaves the representable range.
    pub fn root(&self, n: i32) -> Result<Dimension> {
        if n == 0 {
            return Err(Error::Construction(
                "cannot take the zeroth root of a dimension".into(),
            ));
        }
        let mut exponents = BTreeMap::new();
        for (&base, exp) in &self.exponents {
            exponents.insert(base, exp.checked_div_int(n)?);
        }
        Ok(Dimension { exponents })
    }

    /// This dimension raised to an arbitrary rational power.
    pub fn pow_rational(&self, r: &Rational) -> Result<Dimension> {
        if *r == Rational::ZERO {
            return Ok(Dimension::none());
        }
        let mut exponents = BTreeMap::new();
        for (&base, exp) in &self.exponents {
            let scaled = exp.checked_mul(r)?;
            if scaled != Rational::ZERO {
                exponents.insert(base, scaled);
            }
        }
        Ok(Dimension { exponents })
    }

    /// The multiplicative inverse (all exponents negated).
    pub fn recip(&self) -> Dimension {
        let exponents = self
            .exponents
            .iter()
            .map(|(&base, &exp)| (base, -exp))
            .collect();
        Dimension { exponents }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.exponents.is_empty() {
            return write!(f, "[1]");
        }
        for (base, exp) in &self.exponents {
            if *exp == Rational::ONE {
                write!(f, "[{}]", base.symbol())?;
            } else {
                write!(f, "[{}]^{}", base.symbol(), exp)?;
            }
        }
        Ok(())
    }
}
