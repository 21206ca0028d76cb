/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::UnitError;

/// Metric (base 10) prefixes.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
    Default,
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum SiPrefix {
    Yocto,
    Zepto,
    Atto,
    Femto,
    Pico,
    Nano,
    Micro,
    Milli,
    Centi,
    Deci,
    #[default]
    Unit,
    Deca,
    Hecto,
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
}

static SI_PREFIXES: [SiPrefix; 21] = [
    SiPrefix::Yocto,
    SiPrefix::Zepto,
    SiPrefix::Atto,
    SiPrefix::Femto,
    SiPrefix::Pico,
    SiPrefix::Nano,
    SiPrefix::Micro,
    SiPrefix::Milli,
    SiPrefix::Centi,
    SiPrefix::Deci,
    SiPrefix::Unit,
    SiPrefix::Deca,
    SiPrefix::Hecto,
    SiPrefix::Kilo,
    SiPrefix::Mega,
    SiPrefix::Giga,
    SiPrefix::Tera,
    SiPrefix::Peta,
    SiPrefix::Exa,
    SiPrefix::Zetta,
    SiPrefix::Yotta,
];

impl SiPrefix {
    pub const LIST: &'static [Self] = &SI_PREFIXES;

    /// Signed power of ten.
    pub const fn power(&self) -> i32 {
        match self {
            SiPrefix::Yocto => -24,
            SiPrefix::Zepto => -21,
            SiPrefix::Atto => -18,
            SiPrefix::Femto => -15,
            SiPrefix::Pico => -12,
            SiPrefix::Nano => -9,
            SiPrefix::Micro => -6,
            SiPrefix::Milli => -3,
            SiPrefix::Centi => -2,
            SiPrefix::Deci => -1,
            SiPrefix::Unit => 0,
            SiPrefix::Deca => 1,
            SiPrefix::Hecto => 2,
            SiPrefix::Kilo => 3,
            SiPrefix::Mega => 6,
            SiPrefix::Giga => 9,
            SiPrefix::Tera => 12,
            SiPrefix::Peta => 15,
            SiPrefix::Exa => 18,
            SiPrefix::Zetta => 21,
            SiPrefix::Yotta => 24,
        }
    }

    /// Magnitude of the power of ten, see `multiplies` for its direction.
    pub const fn power_of_ten(&self) -> u32 {
        self.power().unsigned_abs()
    }

    pub const fn multiplies(&self) -> bool {
        self.power() >= 0
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "y",
            SiPrefix::Zepto => "z",
            SiPrefix::Atto => "a",
            SiPrefix::Femto => "f",
            SiPrefix::Pico => "p",
            SiPrefix::Nano => "n",
            SiPrefix::Micro => "µ",
            SiPrefix::Milli => "m",
            SiPrefix::Centi => "c",
            SiPrefix::Deci => "d",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "da",
            SiPrefix::Hecto => "h",
            SiPrefix::Kilo => "k",
            SiPrefix::Mega => "M",
            SiPrefix::Giga => "G",
            SiPrefix::Tera => "T",
            SiPrefix::Peta => "P",
            SiPrefix::Exa => "E",
            SiPrefix::Zetta => "Z",
            SiPrefix::Yotta => "Y",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SiPrefix::Yocto => "yocto",
            SiPrefix::Zepto => "zepto",
            SiPrefix::Atto => "atto",
            SiPrefix::Femto => "femto",
            SiPrefix::Pico => "pico",
            SiPrefix::Nano => "nano",
            SiPrefix::Micro => "micro",
            SiPrefix::Milli => "milli",
            SiPrefix::Centi => "centi",
            SiPrefix::Deci => "deci",
            SiPrefix::Unit => "",
            SiPrefix::Deca => "deca",
            SiPrefix::Hecto => "hecto",
            SiPrefix::Kilo => "kilo",
            SiPrefix::Mega => "mega",
            SiPrefix::Giga => "giga",
            SiPrefix::Tera => "tera",
            SiPrefix::Peta => "peta",
            SiPrefix::Exa => "exa",
            SiPrefix::Zetta => "zetta",
            SiPrefix::Yotta => "yotta",
        }
    }

    /// Look up a prefix by its symbol. Both the micro sign (U+00B5)
    /// and the greek mu (U+03BC) are accepted for micro.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "μ" => Some(SiPrefix::Micro),
            _ => Self::LIST.iter().copied().find(|p| p.symbol() == symbol),
        }
    }

    pub fn multiplier(&self) -> f64 {
        10f64.powi(self.power())
    }

    /// Scale a value expressed with this prefix to the unprefixed unit.
    pub fn apply(&self, x: f64) -> f64 {
        match (self.power_of_ten(), self.multiplies()) {
            (0, _) => x,
            (n, true) => x * 10f64.powi(n as i32),
            (n, false) => x / 10f64.powi(n as i32),
        }
    }
}

/// Scale factor of a prefix symbol, eg. 1000 for "k".
pub fn factor_of(symbol: &str) -> Option<f64> {
    SiPrefix::from_symbol(symbol).map(|p| p.multiplier())
}

impl Display for SiPrefix {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for SiPrefix {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| {
            UnitError::UnitFormat(format!("unknown prefix: {}", s))
        })
    }
}
