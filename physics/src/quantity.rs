/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::parser::parse_quantity;

use super::error::UnitError;
use super::{Unit, NEUTRAL_UNIT};

/// A value in some unit, with an uncertainty interval.
///
/// The interval is kept ordered (`lower_bound <= higher_bound`); it
/// is not required to contain the value.
#[derive(Serialize, PartialEq, Clone, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Quantity {
    value: f64,
    unit: Unit,
    lower_bound: f64,
    higher_bound: f64,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self::with_bounds(value, unit, value, value)
    }

    /// A value with a symmetric uncertainty of `delta`.
    pub fn with_uncertainty(value: f64, unit: Unit, delta: f64) -> Self {
        Self::with_bounds(value, unit, value - delta, value + delta)
    }

    /// A value with explicit bounds, swapped if given in reverse.
    pub fn with_bounds(value: f64, unit: Unit, lower: f64, higher: f64) -> Self {
        let (lower_bound, higher_bound) = match lower <= higher {
            true => (lower, higher),
            false => (higher, lower),
        };
        Quantity {
            value,
            unit,
            lower_bound,
            higher_bound,
        }
    }

    pub fn from_unit(unit: Unit) -> Self {
        Self::new(1.0, unit)
    }

    pub fn from_value(value: f64) -> Self {
        Self::new(value, NEUTRAL_UNIT)
    }

    pub fn parse(input: &str) -> Result<Self, UnitError> {
        parse_quantity(input)
    }

    pub fn try_parse(input: &str) -> Option<Self> {
        parse_quantity(input).ok()
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn higher_bound(&self) -> f64 {
        self.higher_bound
    }

    /// Half the width of the uncertainty interval.
    pub fn uncertainty(&self) -> f64 {
        (self.higher_bound - self.lower_bound) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value <= self.higher_bound
    }

    pub fn is_same_dimension_as(&self, other: &Quantity) -> bool {
        self.unit.is_same_dimension_as(&other.unit)
    }

    pub fn convert_to(&self, unit: &Unit) -> Result<Self, UnitError> {
        let factor = self.unit.conversion_factor(unit)?;
        Ok(Self::with_bounds(
            self.value * factor,
            unit.clone(),
            self.lower_bound * factor,
            self.higher_bound * factor,
        ))
    }

    pub fn powi(&self, n: i32) -> Self {
        let (lower, higher) = interval_powi(self.bounds(), n);
        Self::with_bounds(self.value.powi(n), self.unit.powi(n), lower, higher)
    }

    /* Not `PartialOrd`: fails on incompatible units. */
    pub fn partial_cmp(
        &self,
        rhs: &Self,
    ) -> Result<Option<Ordering>, UnitError> {
        Ok(self.value.partial_cmp(&rhs.convert_to(&self.unit)?.value))
    }

    fn bounds(&self) -> (f64, f64) {
        (self.lower_bound, self.higher_bound)
    }

    fn scale(&self, factor: f64) -> Self {
        Self::with_bounds(
            self.value * factor,
            self.unit.clone(),
            self.lower_bound * factor,
            self.higher_bound * factor,
        )
    }
}

/* Interval arithmetic on (lower, higher) bounds. */

fn hull<I: IntoIterator<Item = f64>>(vals: I) -> (f64, f64) {
    vals.into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

fn interval_mul((a, b): (f64, f64), (c, d): (f64, f64)) -> (f64, f64) {
    hull([a * c, a * d, b * c, b * d])
}

fn interval_div((a, b): (f64, f64), (c, d): (f64, f64)) -> (f64, f64) {
    match c <= 0.0 && d >= 0.0 {
        true => (f64::NEG_INFINITY, f64::INFINITY),
        false => hull([a / c, a / d, b / c, b / d]),
    }
}

fn interval_powi((a, b): (f64, f64), n: i32) -> (f64, f64) {
    match n {
        0 => (1.0, 1.0),
        n if n < 0 => interval_div((1.0, 1.0), interval_powi((a, b), n.saturating_neg())),
        n if n % 2 == 0 && a < 0.0 && b > 0.0 => (0.0, a.powi(n).max(b.powi(n))),
        n => hull([a.powi(n), b.powi(n)]),
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match f.precision() {
            Some(p) => write!(f, "{:.*}", p, self.value)?,
            None => write!(f, "{}", self.value)?,
        }
        /* A unit with a numeric factor must not run into the value. */
        match self.unit.factor() == 1.0 {
            true => write!(f, "{}", self.unit),
            false => write!(f, " {}", self.unit),
        }
    }
}

impl FromStr for Quantity {
    type Err = UnitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct QuantityRepr {
            value: f64,
            unit: Unit,
            lower_bound: Option<f64>,
            higher_bound: Option<f64>,
        }

        let q = QuantityRepr::deserialize(deserializer)?;
        Ok(Quantity::with_bounds(
            q.value,
            q.unit,
            q.lower_bound.unwrap_or(q.value),
            q.higher_bound.unwrap_or(q.value),
        ))
    }
}

/* Arithmetic. */

impl Add<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn add(self, rhs: &Quantity) -> Self::Output {
        let lhs = self.convert_to(&rhs.unit)?;
        Ok(Quantity::with_bounds(
            lhs.value + rhs.value,
            rhs.unit.clone(),
            lhs.lower_bound + rhs.lower_bound,
            lhs.higher_bound + rhs.higher_bound,
        ))
    }
}

impl Sub<&Quantity> for &Quantity {
    type Output = Result<Quantity, UnitError>;
    fn sub(self, rhs: &Quantity) -> Self::Output {
        self + &(-rhs)
    }
}

impl Mul<&Quantity> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: &Quantity) -> Quantity {
        let (lower, higher) = interval_mul(self.bounds(), rhs.bounds());
        Quantity::with_bounds(
            self.value * rhs.value,
            &self.unit * &rhs.unit,
            lower,
            higher,
        )
    }
}

impl Div<&Quantity> for &Quantity {
    type Output = Quantity;
    fn div(self, rhs: &Quantity) -> Quantity {
        let (lower, higher) = interval_div(self.bounds(), rhs.bounds());
        Quantity::with_bounds(
            self.value / rhs.value,
            &self.unit / &rhs.unit,
            lower,
            higher,
        )
    }
}

forward_binop!(Add, add, Quantity, Result<Quantity, UnitError>);
forward_binop!(Sub, sub, Quantity, Result<Quantity, UnitError>);
forward_binop!(Mul, mul, Quantity, Quantity);
forward_binop!(Div, div, Quantity, Quantity);

impl Neg for &Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        Quantity {
            value: -self.value,
            unit: self.unit.clone(),
            lower_bound: -self.higher_bound,
            higher_bound: -self.lower_bound,
        }
    }
}

impl Neg for Quantity {
    type Output = Quantity;
    fn neg(self) -> Quantity {
        -&self
    }
}

/* Scalars. */

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}

impl Mul<f64> for &Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        self.scale(rhs)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        self.scale(1.0 / rhs)
    }
}

impl Div<f64> for &Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        self.scale(1.0 / rhs)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs.scale(self)
    }
}

impl Mul<&Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: &Quantity) -> Quantity {
        rhs.scale(self)
    }
}

impl Div<&Quantity> for f64 {
    type Output = Quantity;
    fn div(self, rhs: &Quantity) -> Quantity {
        &Quantity::from_value(self) / rhs
    }
}

/* `5.0 * &*METER` */

impl Mul<Unit> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Unit) -> Quantity {
        Quantity::new(self, rhs)
    }
}

impl Mul<&Unit> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: &Unit) -> Quantity {
        Quantity::new(self, rhs.clone())
    }
}

impl Div<&Unit> for f64 {
    type Output = Quantity;
    fn div(self, rhs: &Unit) -> Quantity {
        Quantity::new(self, rhs.invert())
    }
}

impl Mul<&Unit> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: &Unit) -> Quantity {
        Quantity {
            unit: &self.unit * rhs,
            ..self
        }
    }
}

impl Div<&Unit> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: &Unit) -> Quantity {
        Quantity {
            unit: &self.unit / rhs,
            ..self
        }
    }
}
