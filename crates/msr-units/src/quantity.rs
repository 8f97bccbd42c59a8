//! Quantities: a magnitude paired with the unit it is measured in.
//!
//! Comparisons convert both operands to their units' coherent representation
//! first, so `5000 m` equals `5 km`.  Cross-dimension comparisons are a
//! caller error surfaced as [`Error::IncompatibleDimensions`]; the
//! `PartialEq`/`PartialOrd` impls answer `false`/`None` in that case.

use crate::unit::Unit;
use msr_core::{Error, Real, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul, Neg};

/// An immutable value expressed in a unit.
#[derive(Debug, Clone)]
pub struct Quantity {
    value: Real,
    unit: Unit,
}

impl Quantity {
    /// Create a quantity.
    pub fn new(value: Real, unit: Unit) -> Quantity {
        Quantity { value, unit }
    }

    /// The magnitude.
    pub fn value(&self) -> Real {
        self.value
    }

    /// The unit the magnitude is expressed in.
    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    /// This quantity re-expressed in `unit`.
    ///
    /// Fails when the dimensions differ or a coherent converter cannot be
    /// derived for either unit.
    pub fn to(&self, unit: &Unit) -> Result<Quantity> {
        let converter = self.unit.converter_to(unit)?;
        Ok(Quantity::new(converter.convert(self.value), unit.clone()))
    }

    /// The magnitude re-expressed in the unit's coherent representative.
    pub fn coherent_value(&self) -> Result<Real> {
        Ok(self.unit.converter_to_coherent()?.convert(self.value))
    }

    /// Three-way comparison against a quantity of the same dimension.
    pub fn compare(&self, other: &Quantity) -> Result<Ordering> {
        if self.unit.dimension() != other.unit.dimension() {
            return Err(Error::IncompatibleDimensions {
                left: self.unit.dimension().to_string(),
                right: other.unit.dimension().to_string(),
            });
        }
        Ok(self
            .coherent_value()?
            .total_cmp(&other.coherent_value()?))
    }

    /// The sum of two quantities of the same dimension, expressed in the
    /// left operand's unit.
    pub fn try_add(&self, other: &Quantity) -> Result<Quantity> {
        let rhs = other.to(&self.unit)?;
        Ok(Quantity::new(self.value + rhs.value, self.unit.clone()))
    }

    /// The difference of two quantities of the same dimension, expressed in
    /// the left operand's unit.
    pub fn try_sub(&self, other: &Quantity) -> Result<Quantity> {
        let rhs = other.to(&self.unit)?;
        Ok(Quantity::new(self.value - rhs.value, self.unit.clone()))
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Quantity) -> bool {
        matches!(self.compare(other), Ok(Ordering::Equal))
    }
}

impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Quantity) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Neg for Quantity {
    type Output = Quantity;

    fn neg(self) -> Quantity {
        Quantity::new(-self.value, self.unit)
    }
}

impl Mul<Real> for Quantity {
    type Output = Quantity;

    fn mul(self, factor: Real) -> Quantity {
        Quantity::new(self.value * factor, self.unit)
    }
}

impl Div<Real> for Quantity {
    type Output = Quantity;

    fn div(self, divisor: Real) -> Quantity {
        Quantity::new(self.value / divisor, self.unit)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
