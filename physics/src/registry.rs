/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

//! Process-wide table of unit symbols.
//!
//! The table is built once, bottom-up: SI base units, SI derived
//! units (defined in terms of previously registered symbols), some
//! common prefixed units and non-SI multiples. It is never modified
//! afterwards.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use lazy_static::lazy_static;

use super::{SiPrefix, Unit};

#[derive(Clone, Debug)]
pub enum UnitKind {
    /// One of the seven SI base units.
    Base,
    /// Defined as a combination of other registered units.
    Derived(Unit),
    /// Shorthand for a prefixed unit (eg. "kg"). Does not take
    /// a further prefix.
    Alias,
}

#[derive(Clone, Debug)]
pub struct UnitEntry {
    pub symbol: &'static str,
    pub name: &'static str,
    pub unit: Unit,
    pub kind: UnitKind,
}

impl UnitEntry {
    pub fn accepts_prefix(&self) -> bool {
        !matches!(self.kind, UnitKind::Alias)
    }
}

struct Registry(BTreeMap<&'static str, UnitEntry>);

lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

pub fn entry(symbol: &str) -> Option<&'static UnitEntry> {
    REGISTRY.0.get(symbol)
}

/// The registered unit for a symbol.
pub fn lookup(symbol: &str) -> Option<Unit> {
    entry(symbol).map(|e| e.unit.clone())
}

/// What a symbol expands to: the definition of a derived or non-SI
/// unit, or the prefixed unit behind an alias (`kg` is `k·g`). Base
/// units and unknown symbols have none.
pub fn definition(symbol: &str) -> Option<&'static Unit> {
    entry(symbol).and_then(|e| match &e.kind {
        UnitKind::Derived(def) => Some(def),
        UnitKind::Alias => Some(&e.unit),
        UnitKind::Base => None,
    })
}

pub fn is_base(symbol: &str) -> bool {
    entry(symbol).map_or(false, |e| matches!(e.kind, UnitKind::Base))
}

pub fn symbols() -> impl Iterator<Item = &'static str> {
    REGISTRY.0.keys().copied()
}

pub fn entries() -> impl Iterator<Item = &'static UnitEntry> {
    REGISTRY.0.values()
}

static BASE_UNITS: [(&str, &str); 7] = [
    ("m", "metre"),
    ("g", "gram"),
    ("s", "second"),
    ("A", "ampere"),
    ("K", "kelvin"),
    ("mol", "mole"),
    ("cd", "candela"),
];

static ALIASES: [(&str, &str, SiPrefix, &str); 21] = [
    ("kg", "kilogram", SiPrefix::Kilo, "g"),
    ("km", "kilometre", SiPrefix::Kilo, "m"),
    ("cm", "centimetre", SiPrefix::Centi, "m"),
    ("mm", "millimetre", SiPrefix::Milli, "m"),
    ("µm", "micrometre", SiPrefix::Micro, "m"),
    ("nm", "nanometre", SiPrefix::Nano, "m"),
    ("ms", "millisecond", SiPrefix::Milli, "s"),
    ("µs", "microsecond", SiPrefix::Micro, "s"),
    ("ns", "nanosecond", SiPrefix::Nano, "s"),
    ("mA", "milliampere", SiPrefix::Milli, "A"),
    ("kN", "kilonewton", SiPrefix::Kilo, "N"),
    ("kJ", "kilojoule", SiPrefix::Kilo, "J"),
    ("kW", "kilowatt", SiPrefix::Kilo, "W"),
    ("MW", "megawatt", SiPrefix::Mega, "W"),
    ("kPa", "kilopascal", SiPrefix::Kilo, "Pa"),
    ("kV", "kilovolt", SiPrefix::Kilo, "V"),
    ("mV", "millivolt", SiPrefix::Milli, "V"),
    ("kHz", "kilohertz", SiPrefix::Kilo, "Hz"),
    ("MHz", "megahertz", SiPrefix::Mega, "Hz"),
    ("GHz", "gigahertz", SiPrefix::Giga, "Hz"),
    ("mmol", "millimole", SiPrefix::Milli, "mol"),
];

impl Registry {
    fn build() -> Self {
        let mut reg = Registry(BTreeMap::new());
        let u = |symbol: &str| Unit::new(symbol, 1);
        let kg = Unit::prefixed(SiPrefix::Kilo, "g", 1);

        for (symbol, name) in BASE_UNITS {
            reg.insert(symbol, name, UnitKind::Base);
        }

        /* SI derived units. */
        reg.derived("rad", "radian", u("m") / u("m"));
        reg.derived("sr", "steradian", u("m").powi(2) / u("m").powi(2));
        reg.derived("Hz", "hertz", u("s").powi(-1));
        reg.derived("N", "newton", &kg * u("m") / u("s").powi(2));
        reg.derived("Pa", "pascal", u("N") / u("m").powi(2));
        reg.derived("J", "joule", u("N") * u("m"));
        reg.derived("W", "watt", u("J") / u("s"));
        reg.derived("C", "coulomb", u("s") * u("A"));
        reg.derived("V", "volt", u("W") / u("A"));
        reg.derived("F", "farad", u("C") / u("V"));
        reg.derived("Ω", "ohm", u("V") / u("A"));
        reg.derived("S", "siemens", u("A") / u("V"));
        reg.derived("Wb", "weber", u("V") * u("s"));
        reg.derived("T", "tesla", u("Wb") / u("m").powi(2));
        reg.derived("H", "henry", u("Wb") / u("A"));
        reg.derived("lm", "lumen", u("cd") * u("sr"));
        reg.derived("lx", "lux", u("lm") / u("m").powi(2));
        reg.derived("Bq", "becquerel", u("s").powi(-1));
        reg.derived("Gy", "gray", u("J") / &kg);
        reg.derived("Sv", "sievert", u("J") / &kg);
        reg.derived("kat", "katal", u("mol") / u("s"));

        /* Prefixed units. */
        for (symbol, name, prefix, base) in ALIASES {
            reg.alias(symbol, name, Unit::prefixed(prefix, base, 1));
        }

        /* Non-SI multiples. */
        reg.derived("min", "minute", u("s").scaled(60.0));
        reg.derived("h", "hour", u("min").scaled(60.0));
        reg.derived("d", "day", u("h").scaled(24.0));
        reg.derived("week", "week", u("d").scaled(7.0));
        reg.derived("L", "litre", Unit::prefixed(SiPrefix::Deci, "m", 3));
        reg.derived("t", "tonne", kg.clone().scaled(1000.0));
        reg.derived("eV", "electronvolt", u("J").scaled(1.602176634e-19));
        reg.derived("ly", "light-year", u("m").scaled(9460730472580800.0));
        reg.derived("au", "astronomical unit", u("m").scaled(149597870700.0));
        reg.derived("pc", "parsec", u("au").scaled(648000.0 / PI));
        reg.derived("bar", "bar", u("Pa").scaled(1e5));
        reg.derived("Å", "ångström", u("m").scaled(1e-10));

        log::trace!("unit registry initialized with {} symbols", reg.0.len());
        reg
    }

    fn insert(&mut self, symbol: &'static str, name: &'static str, kind: UnitKind) {
        let unit = Unit::new(symbol, 1);
        self.0.insert(
            symbol,
            UnitEntry {
                symbol,
                name,
                unit,
                kind,
            },
        );
    }

    fn derived(&mut self, symbol: &'static str, name: &'static str, def: Unit) {
        self.insert(symbol, name, UnitKind::Derived(def))
    }

    fn alias(&mut self, symbol: &'static str, name: &'static str, unit: Unit) {
        self.0.insert(
            symbol,
            UnitEntry {
                symbol,
                name,
                unit,
                kind: UnitKind::Alias,
            },
        );
    }
}
