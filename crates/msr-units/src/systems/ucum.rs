//! UCUM compatibility registry.
//!
//! The Unified Code for Units of Measure assigns case-sensitive ASCII codes
//! to units; this registry maps those codes onto the units defined by the
//! SI, metric, and imperial tables via alternate-symbol registration.

use super::imperial::{FAHRENHEIT, FOOT, GALLON, INCH, MILE, OUNCE, PINT, POUND, YARD};
use super::metric::{BAR, CELSIUS, DAY, GRAM, HOUR, LITRE, MINUTE, PERCENT, TONNE};
use super::si::{
    AMPERE, BECQUEREL, CANDELA, COULOMB, FARAD, GRAY, HENRY, HERTZ, JOULE, KELVIN, LUMEN, LUX,
    METRE, MOLE, NEWTON, OHM, ONE, PASCAL, RADIAN, SECOND, SIEMENS, SIEVERT, STERADIAN, TESLA,
    VOLT, WATT, WEBER,
};
use super::table;
use crate::system::UnitSystem;
use std::sync::LazyLock;

/// The UCUM registry, keyed by UCUM case-sensitive code.
pub static UCUM: LazyLock<UnitSystem> = LazyLock::new(|| {
    let mut sys = UnitSystem::new("UCUM");
    let codes = [
        ("1", &*ONE),
        ("%", &*PERCENT),
        ("m", &*METRE),
        ("s", &*SECOND),
        ("A", &*AMPERE),
        ("K", &*KELVIN),
        ("mol", &*MOLE),
        ("cd", &*CANDELA),
        ("g", &*GRAM),
        ("t", &*TONNE),
        ("L", &*LITRE),
        ("l", &*LITRE),
        ("min", &*MINUTE),
        ("h", &*HOUR),
        ("d", &*DAY),
        ("bar", &*BAR),
        ("Cel", &*CELSIUS),
        ("[degF]", &*FAHRENHEIT),
        ("rad", &*RADIAN),
        ("sr", &*STERADIAN),
        ("Hz", &*HERTZ),
        ("N", &*NEWTON),
        ("Pa", &*PASCAL),
        ("J", &*JOULE),
        ("W", &*WATT),
        ("C", &*COULOMB),
        ("V", &*VOLT),
        ("F", &*FARAD),
        ("Ohm", &*OHM),
        ("S", &*SIEMENS),
        ("Wb", &*WEBER),
        ("T", &*TESLA),
        ("H", &*HENRY),
        ("lm", &*LUMEN),
        ("lx", &*LUX),
        ("Bq", &*BECQUEREL),
        ("Gy", &*GRAY),
        ("Sv", &*SIEVERT),
        ("[in_i]", &*INCH),
        ("[ft_i]", &*FOOT),
        ("[yd_i]", &*YARD),
        ("[mi_i]", &*MILE),
        ("[lb_av]", &*POUND),
        ("[oz_av]", &*OUNCE),
        ("[gal_br]", &*GALLON),
        ("[pt_br]", &*PINT),
    ];
    for (code, unit) in codes {
        table(sys.register_as(code, unit));
    }
    sys
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_resolve_to_shared_units() {
        assert_eq!(UCUM.from_symbol("Cel"), Some(&*CELSIUS));
        assert_eq!(UCUM.from_symbol("[ft_i]"), Some(&*FOOT));
        assert_eq!(UCUM.from_symbol("Ohm"), Some(&*OHM));
        // Codes are case-sensitive: litre is both "L" and "l", but "HZ" is
        // nothing.
        assert_eq!(UCUM.from_symbol("l"), Some(&*LITRE));
        assert!(UCUM.from_symbol("HZ").is_none());
    }

    #[test]
    fn lookup_misses_are_not_errors() {
        assert!(UCUM.from_symbol("furlong").is_none());
    }
}
