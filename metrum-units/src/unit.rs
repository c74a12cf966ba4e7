//! Unit representation with conversion to the SI unit of its kind

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::Arc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use metrum_core::{SymbolFormat, UnitParseError};
use crate::{parse, Conversion, PaddedFormat, QuantityKind};

/// A named scale for measuring quantities of kind `Q`
///
/// Units are plain constants. Equality and hashing only look at the symbol,
/// so two units with the same symbol are the same unit.
pub struct Unit<Q> {
    symbol: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    conversion: Conversion,
    kind: PhantomData<fn() -> Q>,
}

impl<Q> Unit<Q> {
    /// The SI unit of a kind (identity conversion)
    pub const fn si(symbol: &'static str, name: &'static str) -> Self {
        Self::new(symbol, name, Conversion::IDENTITY)
    }

    /// A unit with proportional conversion: `si = value * factor`
    pub const fn linear(symbol: &'static str, name: &'static str, factor: f64) -> Self {
        Self::new(symbol, name, Conversion::Linear { factor })
    }

    /// A unit with offset conversion: `si = (value - offset) / factor`
    pub const fn affine(symbol: &'static str, name: &'static str, factor: f64, offset: f64) -> Self {
        Self::new(symbol, name, Conversion::Affine { factor, offset })
    }

    pub const fn new(symbol: &'static str, name: &'static str, conversion: Conversion) -> Self {
        Unit {
            symbol,
            name,
            aliases: &[],
            conversion,
            kind: PhantomData,
        }
    }

    /// Extra texts that parse to this unit (e.g. "um" for "µm")
    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    pub fn conversion(&self) -> Conversion {
        self.conversion
    }

    /// Convert a value from this unit to the SI unit
    pub fn to_si(&self, value: f64) -> f64 {
        self.conversion.to_si(value)
    }

    /// Convert a value from the SI unit to this unit
    pub fn from_si(&self, si_value: f64) -> f64 {
        self.conversion.from_si(si_value)
    }

    /// Convert a value from this unit to another unit of the same kind
    pub fn convert_to(&self, value: f64, target: Unit<Q>) -> f64 {
        target.from_si(self.to_si(value))
    }

    /// True when values in this unit are already SI values (identity conversion).
    /// Coherent aliases such as N/m² for Pa count as well.
    pub fn is_si(&self) -> bool {
        self.conversion.is_identity()
    }
}

impl<Q: QuantityKind> Unit<Q> {
    /// All units of this kind
    pub fn all() -> &'static [Unit<Q>] {
        Q::UNITS
    }

    /// The SI unit of this kind
    pub fn si_unit() -> Unit<Q> {
        Q::SI_UNIT
    }

    /// Parse a unit symbol, alias, name or composite symbol
    pub fn parse(text: &str) -> Result<Unit<Q>, UnitParseError> {
        parse::parse_unit(text)
    }

    /// Like [`Unit::parse`] but returns `None` instead of an error
    pub fn try_parse(text: &str) -> Option<Unit<Q>> {
        parse::try_parse_unit(text)
    }

    /// The cached rendering of this unit's symbol in a style
    pub fn padded_format(&self, style: SymbolFormat) -> Arc<PaddedFormat> {
        Q::format_cache().get_or_create(*self, style)
    }

    /// The symbol rendered in a style, e.g. "N/mm²" as "N*mm^-2"
    pub fn symbol_in(&self, style: SymbolFormat) -> String {
        self.padded_format(style).format.clone()
    }

    /// Render a caller-supplied unit template such as " mm ".
    ///
    /// When the template names this unit, the padding written around it is
    /// kept. Otherwise the template is returned unchanged.
    pub fn to_string_with(&self, format: &str) -> String {
        let (padded, unit) = Q::format_cache().get_or_create_from(format);
        match unit {
            Some(unit) if unit == *self => padded.to_string(),
            _ => format.to_string(),
        }
    }
}

impl<Q> Clone for Unit<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Unit<Q> {}

impl<Q> Default for Unit<Q> {
    /// A unit with no symbol, only useful as a placeholder
    fn default() -> Self {
        Unit::new("", "", Conversion::IDENTITY)
    }
}

impl<Q> PartialEq for Unit<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl<Q> Eq for Unit<Q> {}

impl<Q> Hash for Unit<Q> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.symbol.is_empty() {
            0u64.hash(state);
        } else {
            self.symbol.hash(state);
        }
    }
}

impl<Q: QuantityKind> fmt::Debug for Unit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unit")
            .field("kind", &Q::NAME)
            .field("symbol", &self.symbol)
            .field("conversion", &self.conversion)
            .finish()
    }
}

impl<Q> fmt::Display for Unit<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol)
    }
}

impl<Q: QuantityKind> FromStr for Unit<Q> {
    type Err = UnitParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::parse(s)
    }
}

impl<Q> Serialize for Unit<Q> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol)
    }
}

impl<'de, Q: QuantityKind> Deserialize<'de> for Unit<Q> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Unit::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use crate::{Length, Speed, Temperature};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_si_unit() {
        assert!(Unit::<Length>::METRES.is_si());
        assert!(!Unit::<Length>::KILOMETRES.is_si());
        assert_eq!(Unit::<Length>::si_unit(), Unit::<Length>::METRES);
    }

    #[test]
    fn test_to_from_si() {
        let km = Unit::<Length>::KILOMETRES;
        assert_eq!(km.to_si(5.0), 5000.0);
        assert_eq!(km.from_si(5000.0), 5.0);
    }

    #[test]
    fn test_convert_to() {
        let converted = Unit::<Length>::METRES.convert_to(5000.0, Unit::<Length>::KILOMETRES);
        assert_eq!(converted, 5.0);

        let boiling = Unit::<Temperature>::DEGREES_CELSIUS.convert_to(100.0, Unit::<Temperature>::DEGREES_FAHRENHEIT);
        assert!((boiling - 212.0).abs() < 1e-9);
    }

    #[test]
    fn test_equality_by_symbol() {
        let impostor: Unit<Length> = Unit::linear("m", "not a metre", 2.0);
        assert_eq!(impostor, Unit::<Length>::METRES);
        assert_eq!(hash_of(&impostor), hash_of(&Unit::<Length>::METRES));
        assert_ne!(Unit::<Length>::METRES, Unit::<Length>::MILLIMETRES);
    }

    #[test]
    fn test_default_hashes_to_sentinel() {
        let unit = Unit::<Length>::default();
        assert_eq!(unit.symbol(), "");
        assert_eq!(hash_of(&unit), hash_of(&0u64));
        assert_eq!(hash_of(&unit), hash_of(&Unit::<Speed>::default()));
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Unit::<Speed>::KILOMETRES_PER_HOUR.to_string(), "km/h");
        let parsed: Unit<Speed> = "km/h".parse().unwrap();
        assert_eq!(parsed, Unit::<Speed>::KILOMETRES_PER_HOUR);
    }

    #[test]
    fn test_symbol_in() {
        let unit = Unit::<Speed>::METRES_PER_SECOND;
        assert_eq!(unit.symbol_in(SymbolFormat::Default), "m/s");
        assert_eq!(unit.symbol_in(SymbolFormat::SignedHatPowers), "m*s^-1");
        assert_eq!(unit.symbol_in(SymbolFormat::SignedSuperScript), "m⋅s⁻¹");
    }

    #[test]
    fn test_to_string_with_template() {
        let mm = Unit::<Length>::MILLIMETRES;
        assert_eq!(mm.to_string_with(" mm "), " mm ");
        assert_eq!(mm.to_string_with("mm"), "mm");
        // Template names another unit: passed through unchanged
        assert_eq!(mm.to_string_with(" km"), " km");
        assert_eq!(mm.to_string_with("[not a unit]"), "[not a unit]");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Unit::<Length>::MILLIMETRES).unwrap();
        assert_eq!(json, "\"mm\"");
        let back: Unit<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Unit::<Length>::MILLIMETRES);
        assert!(serde_json::from_str::<Unit<Length>>("\"xyz\"").is_err());
    }
}
