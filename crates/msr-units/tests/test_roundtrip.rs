//! Property tests: converter inverses undo conversion, concatenation agrees
//! with sequential application, and quantity conversion round-trips through
//! any compatible unit.

use msr_units::converter::UnitConverter;
use msr_units::systems::imperial::{FAHRENHEIT, FOOT, MILE};
use msr_units::systems::metric::{CELSIUS, KILOMETRE};
use msr_units::systems::si::{KELVIN, METRE};
use msr_units::Quantity;
use proptest::prelude::*;

fn relative_close(a: f64, b: f64) -> bool {
    msr_core::comparison::relative_close(a, b, 1e-9)
}

// Affine converters, valid over the whole real line.
fn linear_converter() -> impl Strategy<Value = UnitConverter> {
    let leaf = prop_oneof![
        Just(UnitConverter::IDENTITY),
        (-1e6..1e6f64)
            .prop_filter("offset of zero is the identity", |v| *v != 0.0)
            .prop_map(|v| UnitConverter::offset(v).unwrap()),
        (1e-3..1e3f64)
            .prop_filter("scale of one is the identity", |v| *v != 1.0)
            .prop_map(|v| UnitConverter::scale(v).unwrap()),
        (-1000i64..1000, 1i64..1000)
            .prop_filter("degenerate ratio", |(p, q)| *p != 0 && p != q)
            .prop_map(|(p, q)| UnitConverter::rational(p, q).unwrap()),
    ];
    (leaf.clone(), leaf).prop_map(|(a, b)| a.concatenate(&b))
}

proptest! {
    #[test]
    fn linear_round_trip(c in linear_converter(), x in -1e6..1e6f64) {
        let y = c.convert(x);
        prop_assert!(
            relative_close(c.inverse().convert(y), x),
            "round trip through {c} moved {x} to {}",
            c.inverse().convert(y)
        );
    }

    #[test]
    fn logarithmic_round_trip(base in 1.5..20.0f64, x in 1e-3..1e6f64) {
        let c = UnitConverter::logarithmic(base).unwrap();
        prop_assert!(relative_close(c.inverse().convert(c.convert(x)), x));
    }

    #[test]
    fn concatenation_matches_sequential_application(
        a in linear_converter(),
        b in linear_converter(),
        x in -1e6..1e6f64,
    ) {
        let combined = a.concatenate(&b);
        prop_assert!(relative_close(combined.convert(x), b.convert(a.convert(x))));
    }

    #[test]
    fn inverse_is_involutive(c in linear_converter(), x in -1e6..1e6f64) {
        prop_assert!(relative_close(c.inverse().inverse().convert(x), c.convert(x)));
    }

    #[test]
    fn length_conversion_round_trips(km in 0.001..1e6f64) {
        let q = Quantity::new(km, KILOMETRE.clone());
        for unit in [&*METRE, &*FOOT, &*MILE] {
            let there = q.to(unit).unwrap();
            let back = there.to(&KILOMETRE).unwrap();
            prop_assert!(
                relative_close(back.value(), km),
                "{km} km went to {} and came back as {}",
                there,
                back.value()
            );
        }
    }

    #[test]
    fn temperature_conversion_round_trips(celsius in -273.0..1e4f64) {
        let q = Quantity::new(celsius, CELSIUS.clone());
        for unit in [&*KELVIN, &*FAHRENHEIT] {
            let back = q.to(unit).unwrap().to(&CELSIUS).unwrap();
            prop_assert!((back.value() - celsius).abs() <= 1e-6);
        }
    }
}
