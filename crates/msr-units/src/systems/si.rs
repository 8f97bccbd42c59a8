//! SI base units, named derived units, and the SI registry.

use super::table;
use crate::dimension::BaseDimension;
use crate::system::UnitSystem;
use crate::unit::Unit;
use std::sync::LazyLock;

// ── Base units ───────────────────────────────────────────────────────────────

/// Metre, the SI unit of length.
pub static METRE: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("m", "metre", BaseDimension::Length));

/// Kilogram, the SI unit of mass.
pub static KILOGRAM: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("kg", "kilogram", BaseDimension::Mass));

/// Second, the SI unit of time.
pub static SECOND: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("s", "second", BaseDimension::Time));

/// Ampere, the SI unit of electric current.
pub static AMPERE: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("A", "ampere", BaseDimension::ElectricCurrent));

/// Kelvin, the SI unit of thermodynamic temperature.
pub static KELVIN: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("K", "kelvin", BaseDimension::Temperature));

/// Mole, the SI unit of amount of substance.
pub static MOLE: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("mol", "mole", BaseDimension::AmountOfSubstance));

/// Candela, the SI unit of luminous intensity.
pub static CANDELA: LazyLock<Unit> =
    LazyLock::new(|| Unit::base("cd", "candela", BaseDimension::LuminousIntensity));

/// The dimensionless unit.
pub static ONE: LazyLock<Unit> = LazyLock::new(Unit::one);

// ── Named derived units ──────────────────────────────────────────────────────

/// Radian, plane angle (dimensionless).
pub static RADIAN: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("rad", "radian", &ONE)));

/// Steradian, solid angle (dimensionless).
pub static STERADIAN: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("sr", "steradian", &ONE)));

/// Hertz, frequency (1/s).
pub static HERTZ: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Hz", "hertz", &SECOND.pow(-1))));

/// Newton, force (kg·m/s²).
pub static NEWTON: LazyLock<Unit> = LazyLock::new(|| {
    let kg_m_per_s2 = &(&*KILOGRAM * &*METRE) / &SECOND.pow(2);
    table(Unit::alternate("N", "newton", &kg_m_per_s2))
});

/// Pascal, pressure (N/m²).
pub static PASCAL: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Pa", "pascal", &(&*NEWTON / &METRE.pow(2)))));

/// Joule, energy (N·m).
pub static JOULE: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("J", "joule", &(&*NEWTON * &*METRE))));

/// Watt, power (J/s).
pub static WATT: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("W", "watt", &(&*JOULE / &*SECOND))));

/// Coulomb, electric charge (A·s).
pub static COULOMB: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("C", "coulomb", &(&*AMPERE * &*SECOND))));

/// Volt, electric potential (W/A).
pub static VOLT: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("V", "volt", &(&*WATT / &*AMPERE))));

/// Farad, capacitance (C/V).
pub static FARAD: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("F", "farad", &(&*COULOMB / &*VOLT))));

/// Ohm, electric resistance (V/A).
pub static OHM: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Ω", "ohm", &(&*VOLT / &*AMPERE))));

/// Siemens, electric conductance (A/V).
pub static SIEMENS: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("S", "siemens", &(&*AMPERE / &*VOLT))));

/// Weber, magnetic flux (V·s).
pub static WEBER: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Wb", "weber", &(&*VOLT * &*SECOND))));

/// Tesla, magnetic flux density (Wb/m²).
pub static TESLA: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("T", "tesla", &(&*WEBER / &METRE.pow(2)))));

/// Henry, inductance (Wb/A).
pub static HENRY: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("H", "henry", &(&*WEBER / &*AMPERE))));

/// Lumen, luminous flux (cd·sr).
pub static LUMEN: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("lm", "lumen", &(&*CANDELA * &*STERADIAN))));

/// Lux, illuminance (lm/m²).
pub static LUX: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("lx", "lux", &(&*LUMEN / &METRE.pow(2)))));

/// Becquerel, radioactivity (1/s).
pub static BECQUEREL: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Bq", "becquerel", &SECOND.pow(-1))));

/// Gray, absorbed dose (J/kg).
pub static GRAY: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Gy", "gray", &(&*JOULE / &*KILOGRAM))));

/// Sievert, equivalent dose (J/kg).
pub static SIEVERT: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("Sv", "sievert", &(&*JOULE / &*KILOGRAM))));

/// Katal, catalytic activity (mol/s).
pub static KATAL: LazyLock<Unit> =
    LazyLock::new(|| table(Unit::alternate("kat", "katal", &(&*MOLE / &*SECOND))));

/// The SI registry: every unit above, keyed by symbol.
pub static SI: LazyLock<UnitSystem> = LazyLock::new(|| {
    let mut sys = UnitSystem::new("SI");
    let units = [
        &METRE, &KILOGRAM, &SECOND, &AMPERE, &KELVIN, &MOLE, &CANDELA, &ONE, &RADIAN, &STERADIAN,
        &HERTZ, &NEWTON, &PASCAL, &JOULE, &WATT, &COULOMB, &VOLT, &FARAD, &OHM, &SIEMENS, &WEBER,
        &TESLA, &HENRY, &LUMEN, &LUX, &BECQUEREL, &GRAY, &SIEVERT, &KATAL,
    ];
    for unit in units {
        table(sys.register(unit));
    }
    sys
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_units_are_coherent() {
        for u in [
            &*METRE, &*KILOGRAM, &*SECOND, &*AMPERE, &*KELVIN, &*MOLE, &*CANDELA,
        ] {
            assert!(u.is_coherent(), "{} should be coherent", u.symbol());
            assert_eq!(u.converter_to_coherent().unwrap().convert(1.0), 1.0);
        }
    }

    #[test]
    fn derived_units_are_coherent_alternates() {
        assert!(NEWTON.is_coherent());
        assert!(PASCAL.is_coherent());
        assert_eq!(NEWTON.coherent_unit(), *NEWTON);
    }

    #[test]
    fn newton_dimension() {
        let expected = KILOGRAM
            .dimension()
            .multiply(METRE.dimension())
            .unwrap()
            .multiply(&SECOND.dimension().pow(-2).unwrap())
            .unwrap();
        assert_eq!(NEWTON.dimension(), &expected);
        assert_eq!(JOULE.dimension(), &expected.multiply(METRE.dimension()).unwrap());
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(SI.from_symbol("m"), Some(&*METRE));
        assert_eq!(SI.from_symbol("Ω"), Some(&*OHM));
        assert!(SI.from_symbol("furlong").is_none());
        assert!(SI.contains(&NEWTON));
        assert_eq!(SI.len(), 29);
    }

    #[test]
    fn dimensionless_units() {
        assert!(RADIAN.dimension().is_none());
        assert!(ONE.dimension().is_none());
        assert_eq!(&*METRE * &METRE.recip(), *ONE);
    }
}
