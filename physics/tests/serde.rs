/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use serde_json::json;

use physics::units::{KILOMETER, METER, SECOND};
use physics::{Dimensions, Quantity, SiPrefix, Unit, UnitError};

#[test]
fn unit_round_trip() {
    let unit = Unit::parse("kg*m/s^2").unwrap();
    let value = serde_json::to_value(&unit).unwrap();
    assert_eq!(serde_json::from_value::<Unit>(value).unwrap(), unit);
}

#[cfg(feature = "serialize_as_string")]
#[test]
fn unit_as_string() {
    assert_eq!(serde_json::to_value(&*KILOMETER).unwrap(), json!("km"));
    assert_eq!(
        serde_json::from_value::<Unit>(json!("m/s")).unwrap(),
        &*METER / &*SECOND
    );
    assert!(serde_json::from_value::<Unit>(json!("xyz")).is_err());
}

#[cfg(not(feature = "serialize_as_string"))]
#[test]
fn unit_as_object() {
    assert_eq!(
        serde_json::to_value(&*KILOMETER).unwrap(),
        json!({
            "factor": 1.0,
            "terms": [{ "prefix": "Kilo", "symbol": "m", "power": 1 }]
        })
    );

    /* Repeated symbols are combined on the way in. */
    let unit: Unit = serde_json::from_value(json!({
        "factor": 1.0,
        "terms": [
            { "prefix": "Unit", "symbol": "m", "power": 1 },
            { "prefix": "Unit", "symbol": "m", "power": -1 },
            { "prefix": "Unit", "symbol": "s", "power": -1 }
        ]
    }))
    .unwrap();
    assert_eq!(unit, SECOND.invert());
}

#[test]
fn quantity_round_trip() {
    let q = Quantity::with_uncertainty(5.0, KILOMETER.clone(), 0.25);
    let value = serde_json::to_value(&q).unwrap();
    assert_eq!(value["value"], json!(5.0));
    assert_eq!(value["lower_bound"], json!(4.75));
    assert_eq!(serde_json::from_value::<Quantity>(value).unwrap(), q);
}

#[test]
fn quantity_bounds_default_to_value() {
    let mut value = serde_json::to_value(Quantity::new(2.0, METER.clone())).unwrap();
    let object = value.as_object_mut().unwrap();
    object.remove("lower_bound");
    object.remove("higher_bound");

    let q: Quantity = serde_json::from_value(value).unwrap();
    assert_eq!(q.lower_bound(), 2.0);
    assert_eq!(q.higher_bound(), 2.0);
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Measurement {
    name: String,
    #[serde(with = "physics::quantity_as_string")]
    quantity: Quantity,
}

#[test]
fn quantity_as_string() {
    let m = Measurement {
        name: String::from("distance"),
        quantity: Quantity::new(5.0, KILOMETER.clone()),
    };
    let value = serde_json::to_value(&m).unwrap();
    assert_eq!(value, json!({ "name": "distance", "quantity": "5km" }));
    assert_eq!(serde_json::from_value::<Measurement>(value).unwrap(), m);

    let m: Measurement =
        serde_json::from_value(json!({ "name": "g", "quantity": "9.81 m/s^2" }))
            .unwrap();
    assert_eq!(m.quantity.value(), 9.81);

    let m: Measurement =
        serde_json::from_value(json!({ "name": "n", "quantity": 3 })).unwrap();
    assert_eq!(m.quantity, Quantity::from_value(3.0));

    assert!(serde_json::from_value::<Measurement>(
        json!({ "name": "x", "quantity": "abc" })
    )
    .is_err());
}

#[test]
fn dimensions_as_map() {
    let d = Unit::parse("N").unwrap().dimension().unwrap();
    assert_eq!(
        serde_json::to_value(&d).unwrap(),
        json!({ "length": 1, "mass": 1, "time": -2 })
    );
    assert_eq!(
        serde_json::from_value::<Dimensions>(json!({ "time": -1 })).unwrap(),
        SECOND.invert().dimension().unwrap()
    );
}

#[test]
fn error_round_trip() {
    let err = UnitError::Incompatible(
        Unit::prefixed(SiPrefix::Kilo, "g", 1),
        METER.clone(),
    );
    let value = serde_json::to_value(&err).unwrap();
    assert_eq!(serde_json::from_value::<UnitError>(value).unwrap(), err);
    assert_eq!(err.to_string(), "Incompatible units: kg <-> m");
}
