//! Metric units in everyday use outside the strict SI core.

use super::prefix::{prefixed, KILO};
use super::si::{KELVIN, KILOGRAM, METRE, ONE, PASCAL, SECOND};
use super::table;
use crate::converter::UnitConverter;
use crate::system::UnitSystem;
use crate::unit::Unit;
use std::sync::LazyLock;

/// Gram, 1/1000 kg.
pub static GRAM: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(1, 1000).and_then(|c| Unit::converted("g", "gram", &KILOGRAM, c)))
});

/// Tonne, 1000 kg.
pub static TONNE: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(1000, 1).and_then(|c| Unit::converted("t", "tonne", &KILOGRAM, c)),
    )
});

/// Litre, 1/1000 m³.
pub static LITRE: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(1, 1000)
            .and_then(|c| Unit::converted("L", "litre", &METRE.pow(3), c)),
    )
});

/// Degree Celsius, kelvin shifted by 273.15.
pub static CELSIUS: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::offset(273.15)
            .and_then(|c| Unit::converted("°C", "degree Celsius", &KELVIN, c)),
    )
});

/// Minute, 60 s.
pub static MINUTE: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(60, 1).and_then(|c| Unit::converted("min", "minute", &SECOND, c)))
});

/// Hour, 3600 s.
pub static HOUR: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(3600, 1).and_then(|c| Unit::converted("h", "hour", &SECOND, c)))
});

/// Day, 86 400 s.
pub static DAY: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(86_400, 1).and_then(|c| Unit::converted("d", "day", &SECOND, c)))
});

/// Kilometre.
pub static KILOMETRE: LazyLock<Unit> = LazyLock::new(|| prefixed(KILO, &METRE));

/// Bar, 100 000 Pa.
pub static BAR: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(100_000, 1).and_then(|c| Unit::converted("bar", "bar", &PASCAL, c)))
});

/// Hectare, 10 000 m².
pub static HECTARE: LazyLock<Unit> = LazyLock::new(|| {
    table(
        UnitConverter::rational(10_000, 1)
            .and_then(|c| Unit::converted("ha", "hectare", &METRE.pow(2), c)),
    )
});

/// Percent, the dimensionless 1/100.
pub static PERCENT: LazyLock<Unit> = LazyLock::new(|| {
    table(UnitConverter::rational(1, 100).and_then(|c| Unit::converted("%", "percent", &ONE, c)))
});

/// Kilometre per hour.
pub static KILOMETRES_PER_HOUR: LazyLock<Unit> = LazyLock::new(|| {
    table(Unit::converted(
        "km/h",
        "kilometre per hour",
        &(&*KILOMETRE / &*HOUR),
        UnitConverter::Identity,
    ))
});

/// The metric registry.
pub static METRIC: LazyLock<UnitSystem> = LazyLock::new(|| {
    let mut sys = UnitSystem::new("metric");
    let units = [
        &GRAM,
        &TONNE,
        &LITRE,
        &CELSIUS,
        &MINUTE,
        &HOUR,
        &DAY,
        &KILOMETRE,
        &BAR,
        &HECTARE,
        &PERCENT,
        &KILOMETRES_PER_HOUR,
    ];
    for unit in units {
        table(sys.register(unit));
    }
    sys
});
