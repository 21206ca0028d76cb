/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::ops::{Div, Mul};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::dimension::Dimensions;
use super::parser::parse_unit;
use super::{registry, SiPrefix, UnitError};

/// One factor of a unit: a (possibly prefixed) symbol raised to an
/// integer power.
#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct UnitTerm {
    pub prefix: SiPrefix,
    pub symbol: String,
    pub power: i32,
}

impl UnitTerm {
    pub fn new<S: Into<String>>(prefix: SiPrefix, symbol: S, power: i32) -> Self {
        UnitTerm {
            prefix,
            symbol: symbol.into(),
            power,
        }
    }

    /// Scale contributed by the prefix, taking the power into account.
    pub fn scale(&self) -> f64 {
        10f64.powi(self.prefix.power().saturating_mul(self.power))
    }

    fn to_fundamental(&self) -> Unit {
        match registry::definition(&self.symbol) {
            Some(def) => def
                .to_fundamental()
                .powi(self.power)
                .scaled(self.scale()),
            None => Unit::from(self.clone()),
        }
    }
}

impl Display for UnitTerm {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}{}{}", self.prefix, self.symbol, superscript(self.power))
    }
}

/// A physical unit: a scalar factor times a product of unit terms.
///
/// Every symbol appears at most once in `terms`; terms with a zero
/// power are dropped. Construction order is kept for display, but
/// equality and hashing do not depend on it.
#[derive(Clone, Debug)]
#[cfg_attr(not(feature = "serialize_as_string"), derive(Serialize))]
#[cfg_attr(
    feature = "serialize_as_string",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[cfg_attr(
    all(feature = "schemars", not(feature = "serialize_as_string")),
    derive(schemars::JsonSchema)
)]
pub struct Unit {
    factor: f64,
    terms: Vec<UnitTerm>,
}

pub const NEUTRAL_UNIT: Unit = Unit::none();

impl Unit {
    /// The dimensionless unit with factor 1.
    pub const fn none() -> Self {
        Unit {
            factor: 1.0,
            terms: Vec::new(),
        }
    }

    pub fn new<S: Into<String>>(symbol: S, power: i32) -> Self {
        Self::prefixed(SiPrefix::Unit, symbol, power)
    }

    pub fn prefixed<S: Into<String>>(
        prefix: SiPrefix,
        symbol: S,
        power: i32,
    ) -> Self {
        Unit::from(UnitTerm::new(prefix, symbol, power))
    }

    /// Build a unit from arbitrary terms, combining repeated symbols.
    pub fn from_terms<I>(factor: f64, terms: I) -> Self
    where
        I: IntoIterator<Item = UnitTerm>,
    {
        terms
            .into_iter()
            .fold(Unit::none().scaled(factor), |unit, term| {
                unit * Unit::from(term)
            })
    }

    /// Look up a registered unit by symbol.
    pub fn named(symbol: &str) -> Result<Self, UnitError> {
        registry::lookup(symbol)
            .ok_or_else(|| UnitError::UnknownSymbol(symbol.to_string()))
    }

    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_unit(input)
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        parse_unit(input).ok()
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn terms(&self) -> &[UnitTerm] {
        &self.terms
    }

    pub fn is_dimensionless(&self) -> bool {
        self.to_fundamental().terms.is_empty()
    }

    /// Multiply the scalar factor.
    pub fn scaled(mut self, factor: f64) -> Self {
        self.factor *= factor;
        self
    }

    /// Exponents saturate at the bounds of `i32`; see `checked_invert`.
    pub fn invert(&self) -> Self {
        Unit {
            factor: 1.0 / self.factor,
            terms: self
                .terms
                .iter()
                .map(|t| {
                    let power = t.power.saturating_neg();
                    UnitTerm::new(t.prefix, t.symbol.clone(), power)
                })
                .collect(),
        }
    }

    /// Raise to an integer power. The factor is raised as well,
    /// so that `u.powi(n)` equals `u * u * ...` n times. Exponents
    /// saturate at the bounds of `i32`; see `checked_powi`.
    pub fn powi(&self, n: i32) -> Self {
        if n == 0 {
            return Unit::none();
        }
        Unit {
            factor: self.factor.powi(n),
            terms: self
                .terms
                .iter()
                .map(|t| {
                    let power = t.power.saturating_mul(n);
                    UnitTerm::new(t.prefix, t.symbol.clone(), power)
                })
                .collect(),
        }
    }

    /* Variants returning None when an exponent leaves the i32 range. */

    pub fn checked_invert(&self) -> Option<Self> {
        self.terms
            .iter()
            .all(|t| t.power.checked_neg().is_some())
            .then(|| self.invert())
    }

    pub fn checked_powi(&self, n: i32) -> Option<Self> {
        self.terms
            .iter()
            .all(|t| t.power.checked_mul(n).is_some())
            .then(|| self.powi(n))
    }

    pub fn checked_mul(&self, rhs: &Unit) -> Option<Self> {
        self.terms
            .iter()
            .all(|t| {
                rhs.terms
                    .iter()
                    .filter(|r| r.symbol == t.symbol)
                    .all(|r| t.power.checked_add(r.power).is_some())
            })
            .then(|| self * rhs)
    }

    pub fn checked_div(&self, rhs: &Unit) -> Option<Self> {
        self.checked_mul(&rhs.checked_invert()?)
    }

    /// Rewrite the unit in terms of base symbols only, accumulating
    /// the factors and prefixes of the substituted definitions.
    pub fn to_fundamental(&self) -> Self {
        self.terms
            .iter()
            .fold(Unit::none().scaled(self.factor), |unit, term| {
                unit * term.to_fundamental()
            })
    }

    /// Magnitude of the unit relative to the unprefixed base units.
    pub fn fundamental_factor(&self) -> f64 {
        self.to_fundamental().magnitude()
    }

    pub fn is_same_dimension_as(&self, other: &Unit) -> bool {
        self.to_fundamental().shape() == other.to_fundamental().shape()
    }

    /// Factor by which a value in this unit is multiplied to express
    /// it in `target`.
    pub fn conversion_factor(&self, target: &Unit) -> Result<f64, UnitError> {
        let source = self.to_fundamental();
        let dest = target.to_fundamental();
        match source.shape() == dest.shape() {
            true => Ok(source.magnitude() / dest.magnitude()),
            false => {
                log::debug!("cannot convert {} to {}", self, target);
                Err(UnitError::Incompatible(self.clone(), target.clone()))
            }
        }
    }

    pub fn dimension(&self) -> Result<Dimensions, UnitError> {
        Dimensions::of(self)
    }

    fn magnitude(&self) -> f64 {
        self.terms.iter().fold(self.factor, |f, t| f * t.scale())
    }

    fn shape(&self) -> Vec<(&str, i32)> {
        self.sorted_terms()
            .into_iter()
            .map(|t| (t.symbol.as_str(), t.power))
            .collect()
    }

    fn sorted_terms(&self) -> Vec<&UnitTerm> {
        let mut terms: Vec<&UnitTerm> = self.terms.iter().collect();
        terms.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        terms
    }
}

impl From<UnitTerm> for Unit {
    fn from(term: UnitTerm) -> Self {
        match term.power {
            0 => Unit::none(),
            _ => Unit {
                factor: 1.0,
                terms: vec![term],
            },
        }
    }
}

/* Combination. Terms sharing a symbol are merged; when their prefixes
 * differ, both are reduced to the unprefixed symbol and the prefix
 * scales move into the factor. Exponents saturate; see `checked_mul`. */

impl Mul<&Unit> for &Unit {
    type Output = Unit;
    fn mul(self, rhs: &Unit) -> Unit {
        let mut factor = self.factor * rhs.factor;
        let mut terms = Vec::with_capacity(self.terms.len() + rhs.terms.len());

        for term in &self.terms {
            match rhs.terms.iter().find(|t| t.symbol == term.symbol) {
                None => terms.push(term.clone()),
                Some(other) => {
                    let power = term.power.saturating_add(other.power);
                    let prefix = match term.prefix == other.prefix {
                        true => term.prefix,
                        false => {
                            let exp = |t: &UnitTerm| {
                                t.prefix.power().saturating_mul(t.power)
                            };
                            factor *= 10f64.powi(
                                exp(term).saturating_add(exp(other)),
                            );
                            SiPrefix::Unit
                        }
                    };
                    if power != 0 {
                        terms.push(UnitTerm::new(
                            prefix,
                            term.symbol.clone(),
                            power,
                        ));
                    }
                }
            }
        }

        terms.extend(
            rhs.terms
                .iter()
                .filter(|t| self.terms.iter().all(|s| s.symbol != t.symbol))
                .cloned(),
        );

        Unit { factor, terms }
    }
}

impl Div<&Unit> for &Unit {
    type Output = Unit;
    fn div(self, rhs: &Unit) -> Unit {
        self * &rhs.invert()
    }
}

forward_binop!(Mul, mul, Unit, Unit);
forward_binop!(Div, div, Unit, Unit);

/* Equality and hashing ignore term order. */

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.factor == other.factor
            && self.sorted_terms() == other.sorted_terms()
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        /* 0.0 == -0.0 */
        let factor = match self.factor == 0.0 {
            true => 0.0,
            false => self.factor,
        };
        factor.to_bits().hash(state);
        self.sorted_terms().hash(state);
    }
}

/* Display. */

impl Display for Unit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut sep = "";
        if self.factor != 1.0 {
            write!(f, "{}", self.factor)?;
            sep = "·";
        }
        for term in &self.terms {
            write!(f, "{}{}", sep, term)?;
            sep = "·";
        }
        Ok(())
    }
}

impl FromStr for Unit {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit(s)
    }
}

impl From<Unit> for String {
    fn from(val: Unit) -> Self {
        format!("{}", val)
    }
}

impl TryFrom<String> for Unit {
    type Error = UnitError;
    fn try_from(val: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&val)
    }
}

#[cfg(not(feature = "serialize_as_string"))]
impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct UnitRepr {
            factor: f64,
            terms: Vec<UnitTerm>,
        }

        let repr = UnitRepr::deserialize(deserializer)?;
        Ok(Unit::from_terms(repr.factor, repr.terms))
    }
}

#[cfg(all(feature = "schemars", feature = "serialize_as_string"))]
impl schemars::JsonSchema for Unit {
    fn schema_name() -> String {
        String::from("Unit")
    }

    fn json_schema(
        gen: &mut schemars::gen::SchemaGenerator,
    ) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

static SS: [char; 10] = [
    '\u{2070}', '\u{00b9}', '\u{00b2}', '\u{00b3}', '\u{2074}', '\u{2075}',
    '\u{2076}', '\u{2077}', '\u{2078}', '\u{2079}',
];

/// Render a power as superscript digits; a power of one is omitted.
pub(crate) fn superscript(val: i32) -> String {
    match val {
        1 => String::new(),
        _ => val
            .to_string()
            .chars()
            .map(|c| match c.to_digit(10) {
                Some(n) => SS[n as usize],
                None => '\u{207b}',
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::superscript;

    #[test]
    fn superscript_powers() {
        assert_eq!(superscript(1), "");
        assert_eq!(superscript(2), "²");
        assert_eq!(superscript(-2), "⁻²");
        assert_eq!(superscript(10), "¹⁰");
        assert_eq!(superscript(0), "⁰");
    }
}
