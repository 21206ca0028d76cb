/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn unit_schema() {
    use physics::Unit;
    use schemars::schema_for;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Unit)).unwrap(),
    )
    .unwrap();

    for text in ["km/s", "kg·m²·s⁻²", "60·s"] {
        let example = serde_json::to_value(Unit::parse(text).unwrap()).unwrap();
        schema.validate(&example).expect("schema validation failed");
    }
}

#[cfg(feature = "schemars")]
#[test]
fn quantity_schema() {
    use physics::{Dimensions, Quantity};
    use schemars::schema_for;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Quantity)).unwrap(),
    )
    .unwrap();
    let example =
        serde_json::to_value(Quantity::parse("9.81 m/s^2").unwrap()).unwrap();
    schema.validate(&example).expect("schema validation failed");

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Dimensions)).unwrap(),
    )
    .unwrap();
    let example = serde_json::to_value(
        physics::Unit::parse("N").unwrap().dimension().unwrap(),
    )
    .unwrap();
    schema.validate(&example).expect("schema validation failed");
}
