//! Integration tests for the unit algebra: product simplification,
//! commutativity/associativity, dimension consistency, and coherence
//! idempotence across the predefined tables.

use msr_units::product::{from_factors, from_division, from_power, Factor};
use msr_units::systems::imperial::{FAHRENHEIT, FOOT};
use msr_units::systems::metric::{CELSIUS, KILOMETRE, LITRE};
use msr_units::systems::si::{
    AMPERE, CANDELA, JOULE, KELVIN, KILOGRAM, METRE, MOLE, NEWTON, ONE, PASCAL, SECOND, WATT,
};
use msr_units::Unit;

#[test]
fn unit_times_its_inverse_is_one() {
    let all: Vec<Unit> = vec![
        METRE.clone(),
        KILOGRAM.clone(),
        SECOND.clone(),
        NEWTON.clone(),
        KILOMETRE.clone(),
        FOOT.clone(),
        &*JOULE / &*SECOND,
        METRE.pow(3),
    ];
    for u in all {
        assert_eq!(
            &u * &u.recip(),
            *ONE,
            "{} times its inverse did not cancel",
            u.symbol()
        );
    }
}

#[test]
fn product_commutes_and_associates() {
    let a = &*METRE;
    let b = &*KILOGRAM;
    let c = &*SECOND;

    let left = &(a * b) * c;
    let right = a * &(b * c);
    assert_eq!(left, right);

    let flat = from_factors(vec![
        Factor::new(a.clone(), 1, 1).unwrap(),
        Factor::new(b.clone(), 1, 1).unwrap(),
        Factor::new(c.clone(), 1, 1).unwrap(),
    ])
    .unwrap();
    assert_eq!(left, flat);
    assert_eq!(a * b, b * a);
}

#[test]
fn dimension_tracks_unit_combinations() {
    let square_metre = METRE.pow(2);
    assert_eq!(
        square_metre.dimension(),
        &METRE.dimension().pow(2).unwrap()
    );

    let speed = &*METRE / &*SECOND;
    assert_eq!(
        speed.dimension(),
        &METRE
            .dimension()
            .multiply(&SECOND.dimension().pow(-1).unwrap())
            .unwrap()
    );

    let sqrt_area = square_metre.root(2).unwrap();
    assert_eq!(sqrt_area.dimension(), METRE.dimension());
    assert_eq!(sqrt_area, *METRE);
}

#[test]
fn coherence_is_idempotent() {
    let units: Vec<Unit> = vec![
        METRE.clone(),
        AMPERE.clone(),
        MOLE.clone(),
        CANDELA.clone(),
        NEWTON.clone(),
        PASCAL.clone(),
        WATT.clone(),
        CELSIUS.clone(),
        FAHRENHEIT.clone(),
        KILOMETRE.clone(),
        FOOT.clone(),
        LITRE.clone(),
        &*NEWTON / &METRE.pow(2),
        KILOMETRE.pow(2),
    ];
    for u in units {
        let coherent = u.coherent_unit();
        assert!(
            coherent.is_coherent(),
            "coherent form of {} is not coherent",
            u.symbol()
        );
        assert_eq!(
            coherent.coherent_unit(),
            coherent,
            "coherent form of {} is not a fixed point",
            u.symbol()
        );
    }
}

#[test]
fn pascal_definition_matches_pressure_dimension() {
    let derived = from_division(&NEWTON, &METRE.pow(2)).unwrap();
    assert_eq!(derived.dimension(), PASCAL.dimension());

    // Pressure spelled out from base dimensions: M·L⁻¹·T⁻².
    let spelled = KILOGRAM
        .dimension()
        .multiply(&METRE.dimension().pow(-1).unwrap())
        .unwrap()
        .multiply(&SECOND.dimension().pow(-2).unwrap())
        .unwrap();
    assert_eq!(derived.dimension(), &spelled);
}

#[test]
fn powers_of_powers_flatten() {
    let speed = &*METRE / &*SECOND;
    let via_power = from_power(&speed, 6).unwrap();
    let via_nesting = from_power(&from_power(&speed, 2).unwrap(), 3).unwrap();
    assert_eq!(via_power, via_nesting);
}

#[test]
fn division_round_trips() {
    let a = &*JOULE / &*KELVIN;
    let back = &(&a * &*KELVIN) / &*JOULE;
    assert_eq!(back, *ONE);
}

#[test]
fn kilometre_squared_scales_by_a_million() {
    let km2 = KILOMETRE.pow(2);
    assert_eq!(km2.converter_to_coherent().unwrap().convert(1.0), 1e6);
    assert_eq!(km2.coherent_unit(), METRE.pow(2));
}
