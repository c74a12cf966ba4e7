//! Quantity type - a value of some kind, stored in SI

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use metrum_core::{Locale, QuantityParseError, SymbolFormat, ValueFormat};
use crate::{parse, QuantityFormat, QuantityKind, Unit};

/// A physical quantity of kind `Q`
///
/// Only the SI value is stored; the unit a quantity was created from is not
/// remembered.
pub struct Quantity<Q> {
    si_value: f64,
    kind: PhantomData<fn() -> Q>,
}

impl<Q> Quantity<Q> {
    /// Create from a value in the SI unit
    pub const fn from_si(si_value: f64) -> Self {
        Quantity { si_value, kind: PhantomData }
    }

    pub const fn zero() -> Self {
        Self::from_si(0.0)
    }

    /// Create from a value in any unit of this kind
    pub fn from_value(value: f64, unit: Unit<Q>) -> Self {
        Self::from_si(unit.to_si(value))
    }

    /// The value in the SI unit
    pub fn si_value(&self) -> f64 {
        self.si_value
    }

    /// The value expressed in `unit`
    pub fn value_in(&self, unit: Unit<Q>) -> f64 {
        unit.from_si(self.si_value)
    }

    pub fn abs(self) -> Self {
        Self::from_si(self.si_value.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self::from_si(self.si_value.min(other.si_value))
    }

    pub fn max(self, other: Self) -> Self {
        Self::from_si(self.si_value.max(other.si_value))
    }

    pub fn is_finite(&self) -> bool {
        self.si_value.is_finite()
    }
}

impl<Q: QuantityKind> Quantity<Q> {
    /// Parse "<number> <unit>" with '.' as decimal separator
    pub fn parse(text: &str) -> Result<Self, QuantityParseError> {
        Self::parse_with(text, &Locale::INVARIANT)
    }

    /// Parse "<number> <unit>" using the locale's decimal separator
    pub fn parse_with(text: &str, locale: &Locale) -> Result<Self, QuantityParseError> {
        let (value, unit) = parse::parse_quantity::<Q>(text, locale)?;
        Ok(Self::from_value(value, unit))
    }

    /// Like [`Quantity::parse_with`] but returns `None` instead of an error
    pub fn try_parse_with(text: &str, locale: &Locale) -> Option<Self> {
        Self::parse_with(text, locale).ok()
    }

    /// Write the value in `unit`, with the symbol in `style`
    pub fn to_string_in(&self, unit: Unit<Q>, style: SymbolFormat) -> String {
        QuantityFormat::with_unit(ValueFormat::General, unit, style).render(self.si_value, &Locale::INVARIANT)
    }

    /// Write with a format such as "F2 mm", "km", "E3" (see [`QuantityFormat::create`])
    pub fn to_string_with(&self, format: &str, locale: &Locale) -> String {
        QuantityFormat::<Q>::create(format).render(self.si_value, locale)
    }
}

impl<Q> Clone for Quantity<Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Q> Copy for Quantity<Q> {}

impl<Q> Default for Quantity<Q> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<Q> PartialEq for Quantity<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.si_value == other.si_value
    }
}

impl<Q> PartialOrd for Quantity<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si_value.partial_cmp(&other.si_value)
    }
}

impl<Q: QuantityKind> fmt::Debug for Quantity<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity<{}>({} {})", Q::NAME, self.si_value, Q::SI_UNIT.symbol())
    }
}

/// Writes the SI value and symbol; `{:.2}` limits the decimals
impl<Q: QuantityKind> fmt::Display for Quantity<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.si_value, Q::SI_UNIT.symbol()),
            None => write!(f, "{} {}", self.si_value, Q::SI_UNIT.symbol()),
        }
    }
}

impl<Q: QuantityKind> FromStr for Quantity<Q> {
    type Err = QuantityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<Q> Add for Quantity<Q> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_si(self.si_value + rhs.si_value)
    }
}

impl<Q> Sub for Quantity<Q> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_si(self.si_value - rhs.si_value)
    }
}

impl<Q> AddAssign for Quantity<Q> {
    fn add_assign(&mut self, rhs: Self) {
        self.si_value += rhs.si_value;
    }
}

impl<Q> SubAssign for Quantity<Q> {
    fn sub_assign(&mut self, rhs: Self) {
        self.si_value -= rhs.si_value;
    }
}

impl<Q> Neg for Quantity<Q> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_si(-self.si_value)
    }
}

impl<Q> Mul<f64> for Quantity<Q> {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_si(self.si_value * rhs)
    }
}

impl<Q> Mul<Quantity<Q>> for f64 {
    type Output = Quantity<Q>;

    fn mul(self, rhs: Quantity<Q>) -> Quantity<Q> {
        Quantity::from_si(self * rhs.si_value)
    }
}

impl<Q> Div<f64> for Quantity<Q> {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_si(self.si_value / rhs)
    }
}

/// Ratio of two quantities of the same kind
impl<Q> Div for Quantity<Q> {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.si_value / rhs.si_value
    }
}

impl<Q> Sum for Quantity<Q> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, Q> Sum<&'a Quantity<Q>> for Quantity<Q> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Serialized as "<si value> <si symbol>", e.g. "1500 m"
impl<Q: QuantityKind> Serialize for Quantity<Q> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepts any quantity text in any unit of the kind
impl<'de, Q: QuantityKind> Deserialize<'de> for Quantity<Q> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Length, Speed, Temperature};

    #[test]
    fn test_quantity_creation() {
        let q = Quantity::from_value(5.0, Unit::<Length>::KILOMETRES);
        assert_eq!(q.si_value(), 5000.0);
        assert_eq!(q.value_in(Unit::<Length>::KILOMETRES), 5.0);
        assert_eq!(q.value_in(Unit::<Length>::METRES), 5000.0);
    }

    #[test]
    fn test_named_constructors() {
        let q = Quantity::<Length>::from_millimetres(1500.0);
        assert_eq!(q.metres(), 1.5);
        assert_eq!(q, Quantity::<Length>::from_metres(1.5));
    }

    #[test]
    fn test_parse_speed() {
        let q: Quantity<Speed> = Quantity::parse("1.5 km/h").unwrap();
        assert!((q.si_value() - 1.5 / 3.6).abs() < 1e-12);
        assert!((q.kilometres_per_hour() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_parse_with_locale() {
        let q = Quantity::<Length>::parse_with("2,5 km", &Locale::DE_DE).unwrap();
        assert_eq!(q.si_value(), 2500.0);
        assert!(Quantity::<Length>::try_parse_with("2,5 km", &Locale::INVARIANT).is_none());
    }

    #[test]
    fn test_affine_temperature() {
        let q = Quantity::from_value(0.0, Unit::<Temperature>::DEGREES_CELSIUS);
        assert_eq!(q.si_value(), 273.15);
        assert_eq!(Quantity::<Temperature>::from_kelvin(273.15).degrees_celsius(), 0.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Quantity::<Length>::from_kilometres(1.0);
        let b = Quantity::<Length>::from_metres(500.0);
        assert_eq!((a + b).kilometres(), 1.5);
        assert_eq!((a - b).metres(), 500.0);
        assert_eq!((-b).metres(), -500.0);
        assert_eq!((b * 2.0).metres(), 1000.0);
        assert_eq!((2.0 * b).metres(), 1000.0);
        assert_eq!((a / 4.0).metres(), 250.0);
        assert_eq!(a / b, 2.0);
        assert!(b < a);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);

        let total: Quantity<Length> = [a, b, b].iter().sum();
        assert_eq!(total.kilometres(), 2.0);
        assert_eq!(a.min(b), b);
        assert_eq!((-a).abs(), a);
    }

    #[test]
    fn test_display() {
        let q = Quantity::<Length>::from_kilometres(1.5);
        assert_eq!(q.to_string(), "1500 m");
        assert_eq!(format!("{:.2}", Quantity::<Length>::from_metres(2.5)), "2.50 m");
        assert_eq!(format!("{:?}", q), "Quantity<Length>(1500 m)");
    }

    #[test]
    fn test_to_string_in() {
        let q = Quantity::<Speed>::from_metres_per_second(2.0);
        assert_eq!(q.to_string_in(Unit::<Speed>::METRES_PER_SECOND, SymbolFormat::SignedSuperScript), "2 m⋅s⁻¹");
        let q = Quantity::<Length>::from_metres(1500.0);
        assert_eq!(q.to_string_in(Unit::<Length>::KILOMETRES, SymbolFormat::Default), "1.5 km");
    }

    #[test]
    fn test_to_string_with() {
        let q = Quantity::<Length>::from_metres(0.0123456);
        assert_eq!(q.to_string_with("F2 mm", &Locale::INVARIANT), "12.35 mm");
        assert_eq!(q.to_string_with("F1\tmm\n", &Locale::SV_SE), "12,3\tmm\n");
        assert_eq!(q.to_string_with("", &Locale::INVARIANT), "0.0123456 m");
    }

    #[test]
    fn test_serde() {
        let q = Quantity::<Length>::from_kilometres(1.5);
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, "\"1500 m\"");
        let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
        let other: Quantity<Length> = serde_json::from_str("\"1.5 km\"").unwrap();
        assert_eq!(other, q);
    }

    #[test]
    fn test_serde_non_finite() {
        for si in [f64::INFINITY, f64::NEG_INFINITY] {
            let q = Quantity::<Length>::from_si(si);
            let json = serde_json::to_string(&q).unwrap();
            let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
            assert_eq!(back.si_value(), si, "{}", json);
        }

        let nan = Quantity::<Temperature>::from_si(f64::NAN);
        let back: Quantity<Temperature> = serde_json::from_str(&serde_json::to_string(&nan).unwrap()).unwrap();
        assert!(back.si_value().is_nan());

        assert_eq!(Quantity::<Length>::parse("-inf m").unwrap().si_value(), f64::NEG_INFINITY);
        assert_eq!(Quantity::<Length>::parse("inf mm").unwrap().si_value(), f64::INFINITY);
    }
}
