/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::collections::BTreeMap;

use nom::{
    self,
    branch::alt,
    bytes::complete::take_while1,
    character::complete::{digit0, digit1, one_of, space0},
    combinator::{opt, recognize, value},
    multi::{fold_many1, many0, separated_list1},
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

use crate::error::NumberError;
use crate::{Dimension, Dimensions, Quantity};

use super::{registry, SiPrefix, Unit, UnitError, NEUTRAL_UNIT};

/// Parse a string to a quantity: a number, immediately (or after
/// whitespace) followed by a unit expression.
pub fn parse_quantity(input: &str) -> Result<Quantity, UnitError> {
    let input = input.trim();
    let (rest, literal) = number(input)
        .map_err(|_| NumberError::Syntax(input.to_string()))?;
    let value = parse_number(literal)?;
    Ok(Quantity::new(value, parse_unit(rest)?))
}

/// Parse a unit expression, eg. "kg*m/s^2" or "kg·m·s⁻²".
pub fn parse_unit(input: &str) -> Result<Unit, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(NEUTRAL_UNIT);
    }

    match unit_expr(input) {
        Ok(("", u)) => u,
        Ok((r, _)) => {
            Err(UnitError::UnitFormat(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::UnitFormat(format!("{}", err))),
    }
}

/// Resolve a single (possibly prefixed) unit symbol. The whole token
/// is tried first, then a one-character prefix, then "da".
pub fn resolve_symbol(token: &str) -> Result<Unit, UnitError> {
    if let Some(unit) = registry::lookup(token) {
        return Ok(unit);
    }

    let split = token.chars().next().map(|c| token.split_at(c.len_utf8()));
    if let Some(unit) = split.and_then(|(p, s)| prefixed(p, s)) {
        return Ok(unit);
    }

    if let Some(unit) = token.strip_prefix("da").and_then(|s| prefixed("da", s))
    {
        return Ok(unit);
    }

    log::debug!("unresolved unit symbol: {}", token);
    Err(UnitError::UnitFormat(format!("Unknown unit: {}", token)))
}

/// Parse a dimension vector as displayed, eg. "L·M·T⁻²" or "1".
pub fn parse_dimensions(input: &str) -> Result<Dimensions, UnitError> {
    let input = input.trim();
    if input == "1" {
        return Ok(Dimensions::none());
    }

    let sep = delimited(space0, one_of("*·⋅"), space0);
    match separated_list1(sep, dimension_factor)(input) {
        Ok(("", factors)) => factors
            .into_iter()
            .try_fold(BTreeMap::new(), |mut map, factor| {
                let (d, n) = factor?;
                let sum: &mut i32 = map.entry(d).or_insert(0);
                *sum = sum.checked_add(n).ok_or_else(exponent_out_of_range)?;
                Ok(map)
            })
            .map(Dimensions::from_iter),
        Ok((r, _)) => {
            Err(UnitError::UnitFormat(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(UnitError::UnitFormat(format!("{}", err))),
    }
}

fn dimension_factor(
    input: &str,
) -> IResult<&str, Result<(Dimension, i32), UnitError>> {
    let (input, (symbol, power)) =
        pair(one_of("LMTIΘNJ"), opt(power))(input)?;
    let dimension = Dimension::from_symbol(symbol.encode_utf8(&mut [0; 4]))
        .ok_or_else(|| {
            UnitError::UnitFormat(format!("Unknown dimension: {}", symbol))
        });
    Ok((
        input,
        dimension.and_then(|d| Ok((d, power.unwrap_or(Ok(1))?))),
    ))
}

fn prefixed(prefix: &str, symbol: &str) -> Option<Unit> {
    let prefix = SiPrefix::from_symbol(prefix)?;
    let entry = registry::entry(symbol).filter(|e| e.accepts_prefix())?;
    Some(Unit::prefixed(prefix, entry.symbol, 1))
}

fn parse_number(literal: &str) -> Result<f64, NumberError> {
    match literal.parse::<f64>() {
        Ok(v) if v.is_infinite() => {
            Err(NumberError::Overflow(literal.to_string()))
        }
        Ok(v) => Ok(v),
        Err(_) => Err(NumberError::Syntax(literal.to_string())),
    }
}

#[derive(Clone, Copy)]
enum Op {
    Mul,
    Div,
}

/// Parser for unit expressions. A division applies to the
/// following term only.
fn unit_expr(input: &str) -> IResult<&str, Result<Unit, UnitError>> {
    let (input, (first, rest)) =
        pair(term, many0(pair(operator, term)))(input)?;
    Ok((
        input,
        first.and_then(|first| {
            rest.into_iter().try_fold(first, |acc, (op, unit)| {
                let unit = unit?;
                match op {
                    Op::Mul => acc.checked_mul(&unit),
                    Op::Div => acc.checked_div(&unit),
                }
                .ok_or_else(exponent_out_of_range)
            })
        }),
    ))
}

fn operator(input: &str) -> IResult<&str, Op> {
    delimited(
        space0,
        alt((value(Op::Mul, one_of("*·⋅")), value(Op::Div, char('/')))),
        space0,
    )(input)
}

fn term(input: &str) -> IResult<&str, Result<Unit, UnitError>> {
    alt((factor_term, symbol_term))(input)
}

/// A bare number, multiplying the unit's factor (eg. "60*s").
fn factor_term(input: &str) -> IResult<&str, Result<Unit, UnitError>> {
    let (input, literal) = number(input)?;
    Ok((
        input,
        parse_number(literal)
            .map(|f| Unit::none().scaled(f))
            .map_err(UnitError::from),
    ))
}

fn symbol_term(input: &str) -> IResult<&str, Result<Unit, UnitError>> {
    let (input, (token, power)) =
        pair(take_while1(|c: char| c.is_alphabetic()), opt(power))(input)?;
    Ok((
        input,
        match power.unwrap_or(Ok(1)) {
            Ok(n) => resolve_symbol(token).and_then(|u| {
                u.checked_powi(n).ok_or_else(exponent_out_of_range)
            }),
            Err(e) => Err(e),
        },
    ))
}

fn power(input: &str) -> IResult<&str, Result<i32, UnitError>> {
    alt((hat_power, superscript_power))(input)
}

fn hat_power(input: &str) -> IResult<&str, Result<i32, UnitError>> {
    let (input, n) = preceded(
        char('^'),
        take_while1(|c: char| c.is_ascii_digit() || c == '-' || c == '+'),
    )(input)?;
    Ok((
        input,
        n.parse::<i32>().map_err(|_| {
            UnitError::UnitFormat(format!("Invalid exponent: {}", n))
        }),
    ))
}

fn superscript_power(input: &str) -> IResult<&str, Result<i32, UnitError>> {
    let (input, (s, n)) =
        tuple((opt(superscript_sign), superscript_digit1))(input)?;
    Ok((
        input,
        n.and_then(|n| n.checked_mul(s.unwrap_or(1)))
            .ok_or_else(exponent_out_of_range),
    ))
}

fn superscript_sign(input: &str) -> IResult<&str, i32> {
    alt((value(-1, char('⁻')), value(1, char('⁺'))))(input)
}

fn superscript_digit1(input: &str) -> IResult<&str, Option<i32>> {
    fold_many1(
        superscript_digit,
        || Some(0),
        |n: Option<i32>, i| n?.checked_mul(10)?.checked_add(i),
    )(input)
}

fn superscript_digit(input: &str) -> IResult<&str, i32> {
    alt((
        value(0, char('⁰')),
        value(1, char('¹')),
        value(2, char('²')),
        value(3, char('³')),
        value(4, char('⁴')),
        value(5, char('⁵')),
        value(6, char('⁶')),
        value(7, char('⁷')),
        value(8, char('⁸')),
        value(9, char('⁹')),
    ))(input)
}

/// Numeric literal with optional sign, fraction and exponent. An
/// exponent marker not followed by digits is left for the unit
/// parser (eg. "5Em" is five exametre).
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

/* Monomorphised version of char. */

fn char<'r>(t: char) -> impl Fn(&'r str) -> IResult<&'r str, char> {
    nom::character::complete::char(t)
}

fn exponent_out_of_range() -> UnitError {
    UnitError::UnitFormat(String::from("Exponent out of range"))
}

#[cfg(test)]
mod tests {
    use super::number;

    #[test]
    fn number_boundary() {
        assert_eq!(number("5km"), Ok(("km", "5")));
        assert_eq!(number("1.5E3m"), Ok(("m", "1.5E3")));
        assert_eq!(number("2e-3s"), Ok(("s", "2e-3")));
        assert_eq!(number("5Em"), Ok(("Em", "5")));
        assert_eq!(number("-.25 m"), Ok((" m", "-.25")));
        assert!(number("abc").is_err());
    }
}
