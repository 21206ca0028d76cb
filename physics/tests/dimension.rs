/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;

use physics::units::{JOULE, KILOGRAM, METER, NEWTON, PASCAL, SECOND};
use physics::{
    Dimension, Dimensions, Energy, Force, Length, Mass, Pressure, Quantity,
    Speed, Time, Unit, UnitError,
};

#[test]
fn dimensions_of_derived_units() {
    let force = NEWTON.dimension().unwrap();
    assert_eq!(force.get(Dimension::Length), 1);
    assert_eq!(force.get(Dimension::Mass), 1);
    assert_eq!(force.get(Dimension::Time), -2);
    assert_eq!(force.get(Dimension::Current), 0);
    assert_eq!(force.to_string(), "L·M·T⁻²");

    assert_eq!(
        Unit::parse("V").unwrap().dimension().unwrap().to_string(),
        "L²·M·T⁻³·I⁻¹"
    );
    assert!(Unit::parse("rad").unwrap().dimension().unwrap().is_dimensionless());
}

#[test]
fn dimensions_parse_display() {
    for text in ["L·M·T⁻²", "Θ", "N⁻¹", "L²·M·T⁻³·I⁻¹", "1"] {
        let d: Dimensions = text.parse().unwrap();
        assert_eq!(d.to_string(), text);
    }
    assert_eq!(
        "M*L^2/1".parse::<Dimensions>().map_err(|_| ()),
        Err(())
    );
    assert_eq!(
        "L*L*T^-1".parse::<Dimensions>().unwrap(),
        METER.powi(2).dimension().unwrap()
            / SECOND.dimension().unwrap()
    );
}

#[test]
fn dimension_algebra() {
    let energy = JOULE.dimension().unwrap();
    let length = METER.dimension().unwrap();
    assert_eq!(&energy / &length, NEWTON.dimension().unwrap());
    assert_eq!(
        PASCAL.dimension().unwrap() * length.clone() * length.clone(),
        NEWTON.dimension().unwrap()
    );
    assert_eq!(
        energy.reference_unit(),
        &*KILOGRAM * METER.powi(2) * SECOND.powi(-2)
    );
}

#[test]
fn reference_units() {
    for d in Dimension::LIST {
        let unit = d.reference_unit();
        let dims = unit.dimension().unwrap();
        assert_eq!(dims.get(d), 1);
        assert_eq!(dims.iter().count(), 1);
    }
    assert_eq!(Dimension::Mass.reference_unit(), *KILOGRAM);
}

#[test]
fn checked_wrappers() {
    let length = Length::try_from(Quantity::parse("5 km").unwrap()).unwrap();
    assert_eq!(length.value(), 5000.0);
    assert_eq!(length.quantity().unit(), &*METER);
    assert_eq!(length.to_string(), "5000m");

    assert_eq!(
        Length::try_from(Quantity::parse("1 kg").unwrap()),
        Err(UnitError::Incompatible(KILOGRAM.clone(), METER.clone()))
    );

    let mass = Mass::try_from(Quantity::parse("2500 g").unwrap()).unwrap();
    assert_eq!(mass.value(), 2.5);

    let force = Force::try_from(Quantity::parse("2 kg*m/s^2").unwrap()).unwrap();
    assert_eq!(force.value(), 2.0);

    let time = Time::try_from(Quantity::parse("2 h").unwrap()).unwrap();
    assert_eq!(time.value(), 7200.0);

    let energy = Energy::try_from(Quantity::parse("3 kJ").unwrap()).unwrap();
    assert_eq!(energy.value(), 3000.0);

    let pressure = Pressure::try_from(Quantity::parse("1 bar").unwrap()).unwrap();
    assert_eq!(pressure.value(), 1e5);

    let speed = Speed::try_from(Quantity::parse("36 km/h").unwrap()).unwrap();
    assert!((speed.value() - 10.0).abs() < 1e-9);
    assert!(Speed::try_from(Quantity::parse("36 km").unwrap()).is_err());

    let q: Quantity = Force::new(3.0).into();
    assert_eq!(q, 3.0 * &*NEWTON);
    assert_eq!(Energy::new(1.0).into_quantity().unit(), &*JOULE);
}
