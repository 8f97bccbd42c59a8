//! SI decimal prefixes.

use super::table;
use crate::converter::UnitConverter;
use crate::unit::Unit;
use msr_core::{Real, Result};

/// An SI prefix: a named power of ten applied to a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiPrefix {
    name: &'static str,
    symbol: &'static str,
    exponent: i32,
}

/// Quetta, 10^30.
pub const QUETTA: SiPrefix = SiPrefix::new("quetta", "Q", 30);
/// Ronna, 10^27.
pub const RONNA: SiPrefix = SiPrefix::new("ronna", "R", 27);
/// Yotta, 10^24.
pub const YOTTA: SiPrefix = SiPrefix::new("yotta", "Y", 24);
/// Zetta, 10^21.
pub const ZETTA: SiPrefix = SiPrefix::new("zetta", "Z", 21);
/// Exa, 10^18.
pub const EXA: SiPrefix = SiPrefix::new("exa", "E", 18);
/// Peta, 10^15.
pub const PETA: SiPrefix = SiPrefix::new("peta", "P", 15);
/// Tera, 10^12.
pub const TERA: SiPrefix = SiPrefix::new("tera", "T", 12);
/// Giga, 10^9.
pub const GIGA: SiPrefix = SiPrefix::new("giga", "G", 9);
/// Mega, 10^6.
pub const MEGA: SiPrefix = SiPrefix::new("mega", "M", 6);
/// Kilo, 10^3.
pub const KILO: SiPrefix = SiPrefix::new("kilo", "k", 3);
/// Hecto, 10^2.
pub const HECTO: SiPrefix = SiPrefix::new("hecto", "h", 2);
/// Deca, 10^1.
pub const DECA: SiPrefix = SiPrefix::new("deca", "da", 1);
/// Deci, 10^-1.
pub const DECI: SiPrefix = SiPrefix::new("deci", "d", -1);
/// Centi, 10^-2.
pub const CENTI: SiPrefix = SiPrefix::new("centi", "c", -2);
/// Milli, 10^-3.
pub const MILLI: SiPrefix = SiPrefix::new("milli", "m", -3);
/// Micro, 10^-6.
pub const MICRO: SiPrefix = SiPrefix::new("micro", "µ", -6);
/// Nano, 10^-9.
pub const NANO: SiPrefix = SiPrefix::new("nano", "n", -9);
/// Pico, 10^-12.
pub const PICO: SiPrefix = SiPrefix::new("pico", "p", -12);
/// Femto, 10^-15.
pub const FEMTO: SiPrefix = SiPrefix::new("femto", "f", -15);
/// Atto, 10^-18.
pub const ATTO: SiPrefix = SiPrefix::new("atto", "a", -18);
/// Zepto, 10^-21.
pub const ZEPTO: SiPrefix = SiPrefix::new("zepto", "z", -21);
/// Yocto, 10^-24.
pub const YOCTO: SiPrefix = SiPrefix::new("yocto", "y", -24);
/// Ronto, 10^-27.
pub const RONTO: SiPrefix = SiPrefix::new("ronto", "r", -27);
/// Quecto, 10^-30.
pub const QUECTO: SiPrefix = SiPrefix::new("quecto", "q", -30);

/// Every prefix, largest first.
pub const ALL: [SiPrefix; 24] = [
    QUETTA, RONNA, YOTTA, ZETTA, EXA, PETA, TERA, GIGA, MEGA, KILO, HECTO, DECA, DECI, CENTI,
    MILLI, MICRO, NANO, PICO, FEMTO, ATTO, ZEPTO, YOCTO, RONTO, QUECTO,
];

impl SiPrefix {
    const fn new(name: &'static str, symbol: &'static str, exponent: i32) -> SiPrefix {
        SiPrefix {
            name,
            symbol,
            exponent,
        }
    }

    /// The prefix name ("kilo").
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The prefix symbol ("k").
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// The power of ten.
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// The multiplier as a double (`1000.0` for kilo).
    pub fn factor(&self) -> Real {
        10f64.powi(self.exponent)
    }

    /// Apply the prefix to a unit, concatenating symbols and names:
    /// `KILO.apply(&METRE)` is `km`, the kilometre.
    ///
    /// Exponents within ±18 use an exact rational converter; beyond that the
    /// multiplier no longer fits an `i64` and a floating-point scale is used.
    pub fn apply(&self, unit: &Unit) -> Result<Unit> {
        let symbol = format!("{}{}", self.symbol, unit.symbol());
        let name = format!("{}{}", self.name, unit.name());
        let converter = if (1..=18).contains(&self.exponent) {
            UnitConverter::rational(10i64.pow(self.exponent as u32), 1)?
        } else if (-18..=-1).contains(&self.exponent) {
            UnitConverter::rational(1, 10i64.pow(self.exponent.unsigned_abs()))?
        } else {
            UnitConverter::scale(self.factor())?
        };
        Unit::converted(symbol, name, unit, converter)
    }
}

/// A unit scaled by a prefix, panicking on table-level misuse; convenience
/// for the definition tables.
pub(crate) fn prefixed(prefix: SiPrefix, unit: &Unit) -> Unit {
    table(prefix.apply(unit))
}
