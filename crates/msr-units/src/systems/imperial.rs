//! Imperial units, anchored to SI through exact rational definitions
//! wherever the legal definitions allow.

use super::metric::HOUR;
use super::si::{KELVIN, KILOGRAM, METRE};
use super::table;
use crate::converter::UnitConverter;
use crate::system::UnitSystem;
use crate::unit::Unit;
use std::sync::LazyLock;

/// Inch, 0.02539998 m.
pub static INCH: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(2_539_998, 100_000_000)
            .and_then(|c| Unit::converted("in", "inch", &METRE, c)),
    )
});

/// Foot, 12 in.
pub static FOOT: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(12, 1).and_then(|c| Unit::converted("ft", "foot", &INCH, c)))
});

/// Yard, 3 ft.
pub static YARD: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(3, 1).and_then(|c| Unit::converted("yd", "yard", &FOOT, c)))
});

/// Mile, 1760 yd.
pub static MILE: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(1760, 1).and_then(|c| Unit::converted("mi", "mile", &YARD, c)))
});

/// Pound (avoirdupois), 0.45359237 kg exactly.
pub static POUND: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(45_359_237, 100_000_000)
            .and_then(|c| Unit::converted("lb", "pound", &KILOGRAM, c)),
    )
});

/// Ounce, 1/16 lb.
pub static OUNCE: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(1, 16).and_then(|c| Unit::converted("oz", "ounce", &POUND, c)))
});

/// Stone, 14 lb.
pub static STONE: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(14, 1).and_then(|c| Unit::converted("st", "stone", &POUND, c)))
});

/// Imperial gallon, 4.54609 L exactly.
pub static GALLON: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(454_609, 100_000_000)
            .and_then(|c| Unit::converted("gal", "gallon", &METRE.pow(3), c)),
    )
});

/// Pint, 1/8 gal.
pub static PINT: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(1, 8).and_then(|c| Unit::converted("pt", "pint", &GALLON, c)))
});

/// Fluid ounce, 1/20 pt.
pub static FLUID_OUNCE: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(1, 20)
            .and_then(|c| Unit::converted("fl oz", "fluid ounce", &PINT, c)),
    )
});

/// Acre, 4840 yd².
pub static ACRE: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(4840, 1).and_then(|c| Unit::converted("ac", "acre", &YARD.pow(2), c)))
});

/// Degree Fahrenheit: x °F = (x + 459.67) · 5/9 K.
pub static FAHRENHEIT: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::offset(459.67)
            .and_then(|shift| Ok(shift.concatenate(&UnitConverter::rational(5, 9)?)))
            .and_then(|c| Unit::converted("°F", "degree Fahrenheit", &KELVIN, c)),
    )
});

/// Mile per hour.
pub static MILES_PER_HOUR: LazyLock<Unit> = LazyLock::new(|| {
    table(Unit::converted(
        "mph",
        "mile per hour",
        &(&*MILE / &*HOUR),
        UnitConverter::Identity,
    ))
});

/// The imperial registry.
pub static IMPERIAL: LazyLock<UnitSystem> = LazyLock::new(|| {
    let mut sys = UnitSystem::new("imperial");
    let units = [
        &INCH,
        &FOOT,
        &YARD,
        &MILE,
        &POUND,
        &OUNCE,
        &STONE,
        &GALLON,
        &PINT,
        &FLUID_OUNCE,
        &ACRE,
        &FAHRENHEIT,
        &MILES_PER_HOUR,
    ];
    for unit in units {
        table(sys.register(unit));
    }
    sys
});

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn foot_is_twelve_inches() {
        let c = FOOT.converter_to_coherent().unwrap();
        assert_relative_eq!(c.convert(1.0), 0.30479976, max_relative = 1e-12);
        assert_eq!(FOOT.coherent_unit(), *METRE);
        assert_eq!(FOOT.parent(), Some(&*INCH));
    }

    #[test]
    fn length_chain_is_exact() {
        // The whole chain stays rational: 1 mi = 1760·3·12 in.
        let c = MILE.converter_to(&INCH).unwrap();
        assert_eq!(c.convert(1.0), 63_360.0);
    }

    #[test]
    fn mass_chain() {
        assert_relative_eq!(
            POUND.converter_to_coherent().unwrap().convert(1.0),
            0.45359237,
            max_relative = 1e-12
        );
        let c = STONE.converter_to(&OUNCE).unwrap();
        assert_eq!(c.convert(1.0), 224.0);
    }

    #[test]
    fn fahrenheit_fixed_points() {
        let c = FAHRENHEIT.converter_to_coherent().unwrap();
        assert_relative_eq!(c.convert(32.0), 273.15, max_relative = 1e-12);
        assert_relative_eq!(c.convert(212.0), 373.15, max_relative = 1e-12);
        assert_relative_eq!(c.inverse().convert(273.15), 32.0, max_relative = 1e-9);
    }

    #[test]
    fn volume_chain() {
        let c = GALLON.converter_to_coherent().unwrap();
        assert_relative_eq!(c.convert(1.0), 0.00454609, max_relative = 1e-12);
        let pints = GALLON.converter_to(&PINT).unwrap();
        assert_eq!(pints.convert(1.0), 8.0);
    }

    #[test]
    fn registry_lookup() {
        assert_eq!(IMPERIAL.from_symbol("ft"), Some(&*FOOT));
        assert_eq!(IMPERIAL.from_symbol("°F"), Some(&*FAHRENHEIT));
        assert!(IMPERIAL.from_symbol("°C").is_none());
        assert_eq!(IMPERIAL.len(), 13);
    }
}
