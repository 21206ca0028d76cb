/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::unit::Unit;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum UnitError {
    #[error("Incompatible units: {0} <-> {1}")]
    Incompatible(Unit, Unit),
    #[error("Unit parse error: {0}")]
    UnitFormat(String),
    #[error("Number parse error: {0}")]
    NumberFormat(NumberError),
    #[error("Unknown unit symbol: {0}")]
    UnknownSymbol(String),
}

/// Failure to read the numeric part of a quantity.
#[derive(Serialize, Deserialize, Error, PartialEq, Eq, Clone, Debug)]
pub enum NumberError {
    #[error("invalid number: {0:?}")]
    Syntax(String),
    #[error("number out of range: {0}")]
    Overflow(String),
}

impl From<NumberError> for UnitError {
    fn from(err: NumberError) -> Self {
        UnitError::NumberFormat(err)
    }
}
