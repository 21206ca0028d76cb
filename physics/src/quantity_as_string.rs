/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Serialize a quantity as its display string (eg. `"5km"`). Use with
//! `#[serde(with = "physics::quantity_as_string")]`. Plain numbers
//! are accepted on input as dimensionless quantities.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::Deserialize;

use crate::Quantity;

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityEnum {
    Number(f64),
    Text(String),
}

pub fn serialize<S: Serializer>(
    quantity: &Quantity,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(quantity)
}

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Quantity, D::Error> {
    match QuantityEnum::deserialize(deserializer)? {
        QuantityEnum::Number(v) => Ok(Quantity::from_value(v)),
        QuantityEnum::Text(s) => Quantity::parse(&s).map_err(de::Error::custom),
    }
}
