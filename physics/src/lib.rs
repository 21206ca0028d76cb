/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

/* Implement a binary operator for the owned and mixed owned/borrowed
 * operand combinations by delegating to the `&T op &T` implementation. */
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $t:ty, $out:ty) => {
        impl std::ops::$imp<$t> for $t {
            type Output = $out;
            fn $method(self, rhs: $t) -> $out {
                std::ops::$imp::$method(&self, &rhs)
            }
        }

        impl std::ops::$imp<&$t> for $t {
            type Output = $out;
            fn $method(self, rhs: &$t) -> $out {
                std::ops::$imp::$method(&self, rhs)
            }
        }

        impl std::ops::$imp<$t> for &$t {
            type Output = $out;
            fn $method(self, rhs: $t) -> $out {
                std::ops::$imp::$method(self, &rhs)
            }
        }
    };
}

pub mod constants;
pub mod dimension;
pub mod error;
pub mod parser;
pub mod prefix;
pub mod quantity;
pub mod quantity_as_string;
pub mod registry;
pub mod unit;
pub mod units;

pub use crate::unit::{Unit, UnitTerm, NEUTRAL_UNIT};
pub use dimension::{
    Dimension, Dimensions, Energy, Force, Length, Mass, Power, Pressure,
    Speed, Time,
};
pub use error::{NumberError, UnitError};
pub use prefix::SiPrefix;
pub use quantity::Quantity;
