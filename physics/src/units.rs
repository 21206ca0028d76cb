/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Named units, for building quantities in code (`5.0 * &*KILOMETER`).
//! Each of these equals the registry entry for its symbol.

use lazy_static::lazy_static;

use crate::{SiPrefix, Unit};

lazy_static! {
    /* SI base units. */
    pub static ref METER: Unit = Unit::new("m", 1);
    pub static ref GRAM: Unit = Unit::new("g", 1);
    pub static ref SECOND: Unit = Unit::new("s", 1);
    pub static ref AMPERE: Unit = Unit::new("A", 1);
    pub static ref KELVIN: Unit = Unit::new("K", 1);
    pub static ref MOLE: Unit = Unit::new("mol", 1);
    pub static ref CANDELA: Unit = Unit::new("cd", 1);

    /* SI derived units. */
    pub static ref RADIAN: Unit = Unit::new("rad", 1);
    pub static ref STERADIAN: Unit = Unit::new("sr", 1);
    pub static ref HERTZ: Unit = Unit::new("Hz", 1);
    pub static ref NEWTON: Unit = Unit::new("N", 1);
    pub static ref PASCAL: Unit = Unit::new("Pa", 1);
    pub static ref JOULE: Unit = Unit::new("J", 1);
    pub static ref WATT: Unit = Unit::new("W", 1);
    pub static ref COULOMB: Unit = Unit::new("C", 1);
    pub static ref VOLT: Unit = Unit::new("V", 1);
    pub static ref FARAD: Unit = Unit::new("F", 1);
    pub static ref OHM: Unit = Unit::new("Ω", 1);
    pub static ref SIEMENS: Unit = Unit::new("S", 1);
    pub static ref WEBER: Unit = Unit::new("Wb", 1);
    pub static ref TESLA: Unit = Unit::new("T", 1);
    pub static ref HENRY: Unit = Unit::new("H", 1);
    pub static ref LUMEN: Unit = Unit::new("lm", 1);
    pub static ref LUX: Unit = Unit::new("lx", 1);
    pub static ref BECQUEREL: Unit = Unit::new("Bq", 1);
    pub static ref GRAY: Unit = Unit::new("Gy", 1);
    pub static ref SIEVERT: Unit = Unit::new("Sv", 1);
    pub static ref KATAL: Unit = Unit::new("kat", 1);

    /* Prefixed. */
    pub static ref KILOGRAM: Unit = Unit::prefixed(SiPrefix::Kilo, "g", 1);
    pub static ref KILOMETER: Unit = Unit::prefixed(SiPrefix::Kilo, "m", 1);
    pub static ref CENTIMETER: Unit = Unit::prefixed(SiPrefix::Centi, "m", 1);
    pub static ref MILLIMETER: Unit = Unit::prefixed(SiPrefix::Milli, "m", 1);
    pub static ref MILLISECOND: Unit = Unit::prefixed(SiPrefix::Milli, "s", 1);
    pub static ref KILOJOULE: Unit = Unit::prefixed(SiPrefix::Kilo, "J", 1);
    pub static ref KILOWATT: Unit = Unit::prefixed(SiPrefix::Kilo, "W", 1);

    /* Non-SI. */
    pub static ref MINUTE: Unit = Unit::new("min", 1);
    pub static ref HOUR: Unit = Unit::new("h", 1);
    pub static ref DAY: Unit = Unit::new("d", 1);
    pub static ref WEEK: Unit = Unit::new("week", 1);
    pub static ref LITRE: Unit = Unit::new("L", 1);
    pub static ref TONNE: Unit = Unit::new("t", 1);
    pub static ref ELECTRONVOLT: Unit = Unit::new("eV", 1);
    pub static ref LIGHT_YEAR: Unit = Unit::new("ly", 1);
    pub static ref ASTRONOMICAL_UNIT: Unit = Unit::new("au", 1);
    pub static ref PARSEC: Unit = Unit::new("pc", 1);
    pub static ref BAR: Unit = Unit::new("bar", 1);
    pub static ref ANGSTROM: Unit = Unit::new("Å", 1);
}
