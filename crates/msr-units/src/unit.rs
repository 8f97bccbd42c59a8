//! Units of measure.
//!
//! A [`Unit`] is an immutable, cheaply-cloneable handle (an `Arc` around the
//! actual data) carrying a symbol, a display name, the [`Dimension`] it
//! measures, and a [`UnitConverter`] to the coherent representative of that
//! dimension.  Five variants exist:
//!
//! - **base** units, one per SI base quantity, coherent by construction;
//! - **alternate** units, a coherent unit under a new symbol (newton for
//!   kg·m/s²);
//! - **converted** units, a named unit reached from a parent through a
//!   dimension-preserving converter (foot = 12 in);
//! - **transformed** units, anonymous results of offset/scale arithmetic;
//! - **product** units, merged and simplified factor lists built by the
//!   [`product`](crate::product) module.
//!
//! The dimension, the coherent representative, and the converter to it are
//! all computed at construction; units hold no lazily-mutated state.

use crate::converter::UnitConverter;
use crate::dimension::{BaseDimension, Dimension};
use crate::product::{self, Factor};
use msr_core::{Error, Real, Result};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};
use std::sync::{Arc, LazyLock};

/// The dimensionless unit, the identity of unit multiplication.
static ONE: LazyLock<Unit> = LazyLock::new(|| {
    Unit::from_parts(
        "1",
        "one",
        UnitKind::Product {
            factors: Vec::new(),
        },
        Dimension::none(),
        None,
        Ok(UnitConverter::Identity),
    )
});

/// An immutable unit of measure.
#[derive(Debug, Clone)]
pub struct Unit(Arc<UnitInner>);

#[derive(Debug)]
struct UnitInner {
    symbol: String,
    name: String,
    kind: UnitKind,
    dimension: Dimension,
    // None ⇒ this unit is its own coherent form.
    coherent: Option<Unit>,
    // Err only for product units whose coherent converter cannot be derived
    // (logarithmic or fractionally-rooted factors).
    to_coherent: Result<UnitConverter>,
}

#[derive(Debug)]
enum UnitKind {
    Base,
    Alternate {
        #[allow(dead_code)] // kept for Debug output; semantics live in the precomputed fields
        parent: Unit,
    },
    Converted {
        parent: Unit,
        #[allow(dead_code)]
        converter: UnitConverter,
    },
    Transformed {
        #[allow(dead_code)]
        parent: Unit,
        #[allow(dead_code)]
        converter: UnitConverter,
    },
    Product {
        factors: Vec<Factor>,
    },
}

impl Unit {
    /// The dimensionless unit.
    pub fn one() -> Unit {
        ONE.clone()
    }

    fn from_parts(
        symbol: impl Into<String>,
        name: impl Into<String>,
        kind: UnitKind,
        dimension: Dimension,
        coherent: Option<Unit>,
        to_coherent: Result<UnitConverter>,
    ) -> Unit {
        Unit(Arc::new(UnitInner {
            symbol: symbol.into(),
            name: name.into(),
            kind,
            dimension,
            coherent,
            to_coherent,
        }))
    }

    /// A base unit for one SI base quantity. Base units are coherent by
    /// construction.
    pub fn base(symbol: impl Into<String>, name: impl Into<String>, base: BaseDimension) -> Unit {
        Unit::from_parts(
            symbol,
            name,
            UnitKind::Base,
            Dimension::base(base),
            None,
            Ok(UnitConverter::Identity),
        )
    }

    /// A coherent unit under a different symbol (e.g. `N` for kg·m/s²).
    ///
    /// Fails if `parent` is not coherent. An alternate parent is unwrapped
    /// so alternates never stack.
    pub fn alternate(
        symbol: impl Into<String>,
        name: impl Into<String>,
        parent: &Unit,
    ) -> Result<Unit> {
        let symbol = symbol.into();
        let parent = match &parent.0.kind {
            UnitKind::Alternate { parent: inner } => inner,
            _ => parent,
        };
        if !parent.is_coherent() {
            return Err(Error::Construction(format!(
                "alternate unit {symbol:?} requires a coherent parent, but {} is not coherent",
                parent.symbol()
            )));
        }
        Ok(Unit::from_parts(
            symbol,
            name,
            UnitKind::Alternate {
                parent: parent.clone(),
            },
            parent.0.dimension.clone(),
            None,
            Ok(UnitConverter::Identity),
        ))
    }

    /// A named unit defined as `converter` applied towards `parent`
    /// (e.g. `ft` = 12 in, `°C` = K − 273.15 on the way in).
    ///
    /// Only dimension-preserving converters are accepted: the converter must
    /// be linear (identity, offset, scale, rational, or a compound of
    /// those). A logarithmic converter here would corrupt the coherence
    /// invariants, so it is rejected at construction.
    pub fn converted(
        symbol: impl Into<String>,
        name: impl Into<String>,
        parent: &Unit,
        converter: UnitConverter,
    ) -> Result<Unit> {
        if !converter.is_linear() {
            return Err(Error::Construction(format!(
                "converted unit requires a dimension-preserving converter, got {converter}"
            )));
        }
        let to_coherent = converter.concatenate(&parent.converter_to_coherent()?);
        let coherent = if to_coherent.is_identity() {
            None
        } else {
            Some(parent.coherent_unit())
        };
        Ok(Unit::from_parts(
            symbol,
            name,
            UnitKind::Converted {
                parent: parent.clone(),
                converter,
            },
            parent.0.dimension.clone(),
            coherent,
            Ok(to_coherent),
        ))
    }

    pub(crate) fn product(
        symbol: String,
        factors: Vec<Factor>,
        dimension: Dimension,
        coherent: Option<Unit>,
        to_coherent: Result<UnitConverter>,
    ) -> Unit {
        Unit::from_parts(
            symbol,
            String::new(),
            UnitKind::Product { factors },
            dimension,
            coherent,
            to_coherent,
        )
    }

    /// Apply `converter` on top of this unit.
    ///
    /// The converter is concatenated with this unit's converter to coherent
    /// form; when the combination is the identity the coherent unit itself is
    /// returned, otherwise an anonymous transformed unit wrapping the
    /// coherent unit. All offset/scale unit arithmetic bottoms out here.
    pub fn transform(&self, converter: &UnitConverter) -> Result<Unit> {
        if converter.is_identity() {
            return Ok(self.clone());
        }
        let combined = converter.concatenate(&self.converter_to_coherent()?);
        if combined.is_identity() {
            return Ok(self.coherent_unit());
        }
        let parent = self.coherent_unit();
        let symbol = derived_symbol(parent.symbol(), &combined);
        Ok(Unit::from_parts(
            symbol,
            String::new(),
            UnitKind::Transformed {
                parent: parent.clone(),
                converter: combined.clone(),
            },
            parent.0.dimension.clone(),
            Some(parent),
            Ok(combined),
        ))
    }

    /// The unit shifted by an additive constant: `K.shifted(273.15)` is the
    /// unit whose values map to kelvin by adding 273.15, i.e. celsius.
    /// A zero offset returns the unit unchanged.
    pub fn shifted(&self, offset: Real) -> Result<Unit> {
        if offset == 0.0 {
            return Ok(self.clone());
        }
        self.transform(&UnitConverter::offset(offset)?)
    }

    /// The unit scaled by a factor. A factor of one returns the unit
    /// unchanged; a factor of zero is a construction error.
    pub fn scaled(&self, factor: Real) -> Result<Unit> {
        if factor == 1.0 {
            return Ok(self.clone());
        }
        self.transform(&UnitConverter::scale(factor)?)
    }

    /// The unit scaled by an exact ratio. A ratio of one returns the unit
    /// unchanged.
    pub fn scaled_rational(&self, dividend: i64, divisor: i64) -> Result<Unit> {
        if dividend == divisor && dividend != 0 {
            return Ok(self.clone());
        }
        self.transform(&UnitConverter::rational(dividend, divisor)?)
    }

    /// This unit raised to an integer power, with product flattening and
    /// exponent reduction.
    ///
    /// # Panics
    ///
    /// Panics if the resulting exponents leave the representable range; use
    /// [`product::from_power`] for a checked variant.
    pub fn pow(&self, n: i32) -> Unit {
        match product::from_power(self, n) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }

    /// The `n`-th root of this unit. Fails for `n = 0` and on exponent
    /// overflow.
    pub fn root(&self, n: i32) -> Result<Unit> {
        product::from_root(self, n)
    }

    /// The reciprocal unit, `1 / self`.
    ///
    /// # Panics
    ///
    /// Panics if negating an exponent overflows; use
    /// [`product::from_division`] for a checked variant.
    pub fn recip(&self) -> Unit {
        match product::from_division(&Unit::one(), self) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked unit multiplication.
    pub fn checked_mul(&self, other: &Unit) -> Result<Unit> {
        product::from_product(self, other)
    }

    /// Checked unit division.
    pub fn checked_div(&self, other: &Unit) -> Result<Unit> {
        product::from_division(self, other)
    }

    /// The converter taking values expressed in this unit to values
    /// expressed in `other`.
    ///
    /// Fails with [`Error::IncompatibleDimensions`] when the two units do
    /// not measure the same dimension.
    pub fn converter_to(&self, other: &Unit) -> Result<UnitConverter> {
        if self.0.dimension != other.0.dimension {
            return Err(Error::IncompatibleDimensions {
                left: self.0.dimension.to_string(),
                right: other.0.dimension.to_string(),
            });
        }
        Ok(self
            .converter_to_coherent()?
            .concatenate(&other.converter_to_coherent()?.inverse()))
    }

    /// The unit's symbol.
    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    /// The unit's display name (falls back to the symbol when unnamed).
    pub fn name(&self) -> &str {
        if self.0.name.is_empty() {
            &self.0.symbol
        } else {
            &self.0.name
        }
    }

    /// The dimension this unit measures.
    pub fn dimension(&self) -> &Dimension {
        &self.0.dimension
    }

    /// The coherent representative of this unit's dimension.
    pub fn coherent_unit(&self) -> Unit {
        match &self.0.coherent {
            Some(u) => u.clone(),
            None => self.clone(),
        }
    }

    /// The converter from this unit to its coherent representative.
    ///
    /// Fails only for product units whose factors carry a logarithmic or
    /// fractionally-rooted converter.
    pub fn converter_to_coherent(&self) -> Result<UnitConverter> {
        self.0.to_coherent.clone()
    }

    /// `true` iff this unit's converter to coherent form is the identity.
    pub fn is_coherent(&self) -> bool {
        matches!(self.0.to_coherent, Ok(UnitConverter::Identity))
    }

    /// The factor list of a product unit, `None` for any other variant.
    pub fn factors(&self) -> Option<&[Factor]> {
        match &self.0.kind {
            UnitKind::Product { factors } => Some(factors),
            _ => None,
        }
    }

    /// The parent of a converted unit, `None` for any other variant.
    pub fn parent(&self) -> Option<&Unit> {
        match &self.0.kind {
            UnitKind::Converted { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

// A transformed unit needs a symbol of its own: equality defaults to symbol
// comparison, so "1000·m" must not collide with "m".
fn derived_symbol(parent: &str, converter: &UnitConverter) -> String {
    match converter {
        UnitConverter::Identity => parent.to_string(),
        UnitConverter::Offset { offset } if *offset < 0.0 => format!("({parent}-{})", -offset),
        UnitConverter::Offset { offset } => format!("({parent}+{offset})"),
        UnitConverter::Scale { factor } => format!("{factor}·{parent}"),
        UnitConverter::Rational {
            dividend,
            divisor: 1,
        } => format!("{dividend}·{parent}"),
        UnitConverter::Rational { dividend, divisor } => {
            format!("({dividend}/{divisor})·{parent}")
        }
        UnitConverter::Logarithmic { base } => format!("log{base}({parent})"),
        UnitConverter::Exponential { base } => format!("{base}^({parent})"),
        UnitConverter::Compound { first, second } => {
            derived_symbol(&derived_symbol(parent, first), second)
        }
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        if Arc::ptr_eq(&self.0, &other.0) {
            return true;
        }
        match (&self.0.kind, &other.0.kind) {
            // Product equality is over the canonical factor lists; symbols
            // are derived and play no part.
            (UnitKind::Product { factors: a }, UnitKind::Product { factors: b }) => a == b,
            (UnitKind::Product { .. }, _) | (_, UnitKind::Product { .. }) => false,
            _ => self.0.symbol == other.0.symbol,
        }
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.0.kind {
            UnitKind::Product { factors } => {
                state.write_u8(1);
                factors.hash(state);
            }
            _ => {
                state.write_u8(0);
                self.0.symbol.hash(state);
            }
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.symbol)
    }
}

// ── Operators ────────────────────────────────────────────────────────────────
//
// The operator overloads route through the checked factories and panic only
// on exponent overflow or a degenerate scalar (scaling a unit by zero).

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        match product::from_product(self, rhs) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        match product::from_division(self, rhs) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        &self * &rhs
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        &self / &rhs
    }
}

impl Mul<&Unit> for Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        &self * rhs
    }
}

impl Div<&Unit> for Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        &self / rhs
    }
}

impl Mul<Unit> for &Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        self * &rhs
    }
}

impl Div<Unit> for &Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        self / &rhs
    }
}

impl Mul<Real> for &Unit {
    type Output = Unit;

    fn mul(self, factor: Real) -> Unit {
        match self.scaled(factor) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<&Unit> for Real {
    type Output = Unit;

    fn mul(self, unit: &Unit) -> Unit {
        unit * self
    }
}

impl Mul<Unit> for Real {
    type Output = Unit;

    fn mul(self, unit: Unit) -> Unit {
        &unit * self
    }
}

impl Div<Real> for &Unit {
    type Output = Unit;

    fn div(self, divisor: Real) -> Unit {
        self * (1.0 / divisor)
    }
}

impl Add<Real> for &Unit {
    type Output = Unit;

    fn add(self, offset: Real) -> Unit {
        match self.shifted(offset) {
            Ok(u) => u,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Sub<Real> for &Unit {
    type Output = Unit;

    fn sub(self, offset: Real) -> Unit {
        self + (-offset)
    }
}
