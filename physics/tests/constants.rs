/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use physics::constants::{
    AVOGADRO, BOLTZMANN, FINE_STRUCTURE, GAS_CONSTANT, PLANCK,
    REDUCED_PLANCK, SPEED_OF_LIGHT, STANDARD_GRAVITY, VACUUM_PERMEABILITY,
    VACUUM_PERMITTIVITY,
};
use physics::units::{KILOMETER, SECOND};
use physics::{Quantity, Unit, NEUTRAL_UNIT};

fn assert_rel(a: f64, b: f64, tolerance: f64) {
    assert!((a - b).abs() <= tolerance * b.abs(), "{} != {}", a, b);
}

#[test]
fn fine_structure_constant() {
    assert!(FINE_STRUCTURE.unit().is_dimensionless());
    let alpha = FINE_STRUCTURE.convert_to(&NEUTRAL_UNIT).unwrap().value();
    assert_rel(1.0 / alpha, 137.035999, 1e-6);
}

#[test]
fn speed_of_light() {
    let c = SPEED_OF_LIGHT.convert_to(&(&*KILOMETER / &*SECOND)).unwrap();
    assert_rel(c.value(), 299792.458, 1e-12);

    /* c² = 1 / (ε₀·μ₀) */
    let c2 = Quantity::from_value(1.0)
        / (&*VACUUM_PERMITTIVITY * &*VACUUM_PERMEABILITY);
    let c2 = c2.convert_to(&Unit::parse("m^2/s^2").unwrap()).unwrap();
    assert_rel(c2.value(), SPEED_OF_LIGHT.value().powi(2), 1e-8);
}

#[test]
fn related_constants() {
    let r = (&*AVOGADRO * &*BOLTZMANN).convert_to(GAS_CONSTANT.unit()).unwrap();
    assert_rel(r.value(), GAS_CONSTANT.value(), 1e-6);

    let hbar = (&*PLANCK / (2.0 * std::f64::consts::PI))
        .convert_to(REDUCED_PLANCK.unit())
        .unwrap();
    assert_rel(hbar.value(), REDUCED_PLANCK.value(), 1e-8);
}

#[test]
fn standard_gravity() {
    let g: Quantity = "9.80665 m/s^2".parse().unwrap();
    assert_eq!(*STANDARD_GRAVITY, g);
}
