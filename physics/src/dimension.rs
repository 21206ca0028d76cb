/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::ops::{Div, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::parser::parse_dimensions;
use super::unit::superscript;
use super::{Quantity, SiPrefix, Unit};

/// SI base dimensions. Every registered unit reduces to a product
/// of these.
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
)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Amount,
    LuminousIntensity,
}

impl Dimension {
    pub const LIST: [Dimension; 7] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Time,
        Dimension::Current,
        Dimension::Temperature,
        Dimension::Amount,
        Dimension::LuminousIntensity,
    ];

    /// Conventional dimension symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Dimension::Length => "L",
            Dimension::Mass => "M",
            Dimension::Time => "T",
            Dimension::Current => "I",
            Dimension::Temperature => "Θ",
            Dimension::Amount => "N",
            Dimension::LuminousIntensity => "J",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Time => "time",
            Dimension::Current => "current",
            Dimension::Temperature => "temperature",
            Dimension::Amount => "amount",
            Dimension::LuminousIntensity => "luminous_intensity",
        }
    }

    /// The registry symbol of the base unit measuring this dimension.
    pub const fn base_symbol(&self) -> &'static str {
        match self {
            Dimension::Length => "m",
            Dimension::Mass => "g",
            Dimension::Time => "s",
            Dimension::Current => "A",
            Dimension::Temperature => "K",
            Dimension::Amount => "mol",
            Dimension::LuminousIntensity => "cd",
        }
    }

    pub fn from_base_symbol(symbol: &str) -> Option<Self> {
        Self::LIST.into_iter().find(|d| d.base_symbol() == symbol)
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::LIST.into_iter().find(|d| d.symbol() == symbol)
    }

    /// The SI unit for this dimension (the kilogram for mass).
    pub fn reference_unit(&self) -> Unit {
        match self {
            Dimension::Mass => Unit::prefixed(SiPrefix::Kilo, "g", 1),
            _ => Unit::new(self.base_symbol(), 1),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::LIST
            .into_iter()
            .find(|d| d.symbol() == s || d.name() == s)
            .ok_or_else(|| {
                UnitError::UnitFormat(format!("Unknown dimension: {}", s))
            })
    }
}

/// Exponents of the base dimensions; zero exponents are not stored.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Dimensions(BTreeMap<Dimension, i32>);

impl Dimensions {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(unit: &Unit) -> Result<Self, UnitError> {
        unit.to_fundamental()
            .terms()
            .iter()
            .map(|t| match Dimension::from_base_symbol(&t.symbol) {
                Some(d) => Ok(Self::from_iter([(d, t.power)])),
                None => Err(UnitError::UnknownSymbol(t.symbol.clone())),
            })
            .try_fold(Self::none(), |acc, d| Ok(acc * d?))
    }

    pub fn get(&self, dimension: Dimension) -> i32 {
        self.0.get(&dimension).copied().unwrap_or(0)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, i32)> + '_ {
        self.0.iter().map(|(d, n)| (*d, *n))
    }

    /// The product of reference units with these exponents
    /// (eg. kg·m·s⁻² for force).
    pub fn reference_unit(&self) -> Unit {
        self.iter().fold(Unit::none(), |unit, (d, n)| {
            unit * d.reference_unit().powi(n)
        })
    }
}

impl FromIterator<(Dimension, i32)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (Dimension, i32)>>(iter: I) -> Self {
        let mut map = BTreeMap::new();
        for (d, n) in iter {
            let sum: &mut i32 = map.entry(d).or_insert(0);
            *sum = sum.saturating_add(n);
        }
        map.retain(|_, n| *n != 0);
        Dimensions(map)
    }
}

impl Mul<&Dimensions> for &Dimensions {
    type Output = Dimensions;
    fn mul(self, rhs: &Dimensions) -> Dimensions {
        self.iter().chain(rhs.iter()).collect()
    }
}

impl Div<&Dimensions> for &Dimensions {
    type Output = Dimensions;
    fn div(self, rhs: &Dimensions) -> Dimensions {
        self.iter()
            .chain(rhs.iter().map(|(d, n)| (d, n.saturating_neg())))
            .collect()
    }
}

forward_binop!(Mul, mul, Dimensions, Dimensions);
forward_binop!(Div, div, Dimensions, Dimensions);

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        let mut sep = "";
        for (d, n) in self.iter() {
            write!(f, "{}{}{}", sep, d.symbol(), superscript(n))?;
            sep = "·";
        }
        Ok(())
    }
}

impl FromStr for Dimensions {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_dimensions(s)
    }
}

/* Dimension-checked quantities. The wrapped quantity is always
 * expressed in the reference unit. */

macro_rules! quantity_type {
    ($name:ident, $doc:literal, $unit:expr) => {
        #[doc = $doc]
        #[derive(Serialize, PartialEq, Clone, Debug)]
        pub struct $name(Quantity);

        impl $name {
            pub fn reference_unit() -> Unit {
                $unit
            }

            pub fn new(value: f64) -> Self {
                $name(Quantity::new(value, Self::reference_unit()))
            }

            pub fn value(&self) -> f64 {
                self.0.value()
            }

            pub fn quantity(&self) -> &Quantity {
                &self.0
            }

            pub fn into_quantity(self) -> Quantity {
                self.0
            }
        }

        impl TryFrom<Quantity> for $name {
            type Error = UnitError;
            fn try_from(q: Quantity) -> Result<Self, Self::Error> {
                Ok($name(q.convert_to(&Self::reference_unit())?))
            }
        }

        impl From<$name> for Quantity {
            fn from(val: $name) -> Self {
                val.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
                Display::fmt(&self.0, f)
            }
        }
    };
}

quantity_type!(Length, "A length, in metres.", Unit::new("m", 1));
quantity_type!(
    Mass,
    "A mass, in kilograms.",
    Unit::prefixed(SiPrefix::Kilo, "g", 1)
);
quantity_type!(Time, "A duration, in seconds.", Unit::new("s", 1));
quantity_type!(Force, "A force, in newtons.", Unit::new("N", 1));
quantity_type!(Energy, "An energy, in joules.", Unit::new("J", 1));
quantity_type!(Power, "A power, in watts.", Unit::new("W", 1));
quantity_type!(Pressure, "A pressure, in pascals.", Unit::new("Pa", 1));
quantity_type!(
    Speed,
    "A speed, in metres per second.",
    Unit::new("m", 1) / Unit::new("s", 1)
);

#[cfg(test)]
mod tests {
    use super::{Dimension, Dimensions};

    #[test]
    fn zero_exponents_dropped() {
        let d: Dimensions =
            [(Dimension::Length, 2), (Dimension::Length, -2)].into_iter().collect();
        assert!(d.is_dimensionless());
        assert_eq!(d.to_string(), "1");
    }

    #[test]
    fn dimension_names() {
        assert_eq!("Θ".parse::<Dimension>(), Ok(Dimension::Temperature));
        assert_eq!("amount".parse::<Dimension>(), Ok(Dimension::Amount));
        assert!("X".parse::<Dimension>().is_err());
    }
}
