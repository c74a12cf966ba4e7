//! Composite symbol algebra - decompose symbols like "N/mm²" or "kg⋅m^-2"
//!
//! A composite symbol is a sequence of base symbols with integer powers:
//! - Products: "N⋅m", "N·m", "N*m", "N m"
//! - Quotients: "m/s", "J/kg⋅K" (every factor after '/' is in the denominator)
//! - Powers: "m²", "m⁻²", "m^2", "m^-2", "m2"
//! - Reciprocals: "1/s"

use std::fmt::Write;
use metrum_core::SymbolFormat;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUPERSCRIPT_MINUS: char = '⁻';
const SUPERSCRIPT_PLUS: char = '⁺';
const MULTIPLY_SIGNS: [char; 3] = ['⋅', '·', '*'];

/// One factor of a composite symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolAndPower {
    pub symbol: String,
    pub power: i32,
}

impl SymbolAndPower {
    pub fn new(symbol: impl Into<String>, power: i32) -> Self {
        SymbolAndPower { symbol: symbol.into(), power }
    }
}

/// Decompose a symbol into its factors, in order of appearance.
///
/// Returns `None` when the text is not a well-formed composite symbol: empty
/// input, a dangling or repeated operator, a second '/', a power of zero, a
/// signed power in the denominator, or characters left over.
pub fn decompose(text: &str) -> Option<Vec<SymbolAndPower>> {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut factors = Vec::new();
    let mut i = 0;
    let mut denominator = false;
    let mut need_factor = false;

    // "1/s" has an empty numerator
    if chars.first() == Some(&'1') {
        let mut j = 1;
        skip_whitespace(&chars, &mut j);
        if chars.get(j) == Some(&'/') {
            denominator = true;
            need_factor = true;
            i = j + 1;
        }
    }

    loop {
        skip_whitespace(&chars, &mut i);
        let Some(&c) = chars.get(i) else { break };

        if c == '/' {
            if denominator || need_factor || factors.is_empty() {
                return None;
            }
            denominator = true;
            need_factor = true;
            i += 1;
            continue;
        }

        if MULTIPLY_SIGNS.contains(&c) {
            if need_factor || factors.is_empty() {
                return None;
            }
            need_factor = true;
            i += 1;
            continue;
        }

        let start = i;
        while i < chars.len() && is_symbol_char(chars[i]) {
            i += 1;
        }
        if start == i {
            return None;
        }
        let symbol: String = chars[start..i].iter().collect();

        let (power, signed) = read_power(&chars, &mut i)?;
        if power == 0 || (denominator && signed) {
            return None;
        }

        let power = if denominator { -power } else { power };
        factors.push(SymbolAndPower::new(symbol, power));
        need_factor = false;
    }

    if need_factor || factors.is_empty() {
        return None;
    }
    Some(factors)
}

/// Normalized form used for matching: equal bases merged, zero powers
/// dropped, factors sorted.
pub fn signature(factors: &[SymbolAndPower]) -> Vec<SymbolAndPower> {
    let mut merged = merge(factors);
    merged.sort();
    merged
}

/// Merge equal bases by summing powers, keeping first-appearance order
pub fn merge(factors: &[SymbolAndPower]) -> Vec<SymbolAndPower> {
    let mut merged: Vec<SymbolAndPower> = Vec::with_capacity(factors.len());
    for factor in factors {
        match merged.iter_mut().find(|m| m.symbol == factor.symbol) {
            Some(existing) => existing.power += factor.power,
            None => merged.push(factor.clone()),
        }
    }
    merged.retain(|f| f.power != 0);
    merged
}

/// Render a symbol in the given style.
///
/// `Default` returns the symbol unchanged, as does any symbol that does not
/// decompose (e.g. "°C" renders as itself in every style).
pub fn render_symbol(symbol: &str, style: SymbolFormat) -> String {
    if style == SymbolFormat::Default {
        return symbol.to_string();
    }
    match decompose(symbol) {
        Some(factors) => render(&merge(&factors), style),
        None => symbol.to_string(),
    }
}

/// Render factors in the given style. `Default` is rendered like
/// `SignedHatPowers` here since the declared text is not available.
pub fn render(factors: &[SymbolAndPower], style: SymbolFormat) -> String {
    let superscript = style.is_superscript();
    let separator = if superscript { "⋅" } else { "*" };

    if !style.is_fraction() || factors.iter().all(|f| f.power > 0) {
        return join(factors.iter(), separator, superscript, false);
    }

    let numerator: Vec<&SymbolAndPower> = factors.iter().filter(|f| f.power > 0).collect();
    let denominator: Vec<&SymbolAndPower> = factors.iter().filter(|f| f.power < 0).collect();

    let mut out = if numerator.is_empty() {
        "1".to_string()
    } else {
        join(numerator.into_iter(), separator, superscript, false)
    };
    out.push('/');
    out.push_str(&join(denominator.into_iter(), separator, superscript, true));
    out
}

fn join<'a>(
    factors: impl Iterator<Item = &'a SymbolAndPower>,
    separator: &str,
    superscript: bool,
    absolute: bool,
) -> String {
    let mut out = String::new();
    for (i, factor) in factors.enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(&factor.symbol);
        let power = if absolute { factor.power.abs() } else { factor.power };
        if power != 1 {
            if superscript {
                out.push_str(&to_superscript(power));
            } else {
                let _ = write!(out, "^{}", power);
            }
        }
    }
    out
}

/// Write an integer with superscript digits, e.g. -2 -> "⁻²"
pub fn to_superscript(value: i32) -> String {
    let mut out = String::new();
    if value < 0 {
        out.push(SUPERSCRIPT_MINUS);
    }
    for digit in value.unsigned_abs().to_string().chars() {
        if let Some(d) = digit.to_digit(10) {
            out.push(SUPERSCRIPT_DIGITS[d as usize]);
        }
    }
    out
}

fn superscript_value(c: char) -> Option<u32> {
    SUPERSCRIPT_DIGITS.iter().position(|&d| d == c).map(|p| p as u32)
}

fn is_symbol_char(c: char) -> bool {
    !(c.is_whitespace()
        || c.is_ascii_digit()
        || c == '/'
        || c == '^'
        || c == SUPERSCRIPT_MINUS
        || c == SUPERSCRIPT_PLUS
        || MULTIPLY_SIGNS.contains(&c)
        || superscript_value(c).is_some())
}

fn skip_whitespace(chars: &[char], i: &mut usize) {
    while *i < chars.len() && chars[*i].is_whitespace() {
        *i += 1;
    }
}

/// Read an optional power after a base symbol.
/// Returns the power and whether it carried an explicit sign.
fn read_power(chars: &[char], i: &mut usize) -> Option<(i32, bool)> {
    match chars.get(*i) {
        Some('^') => {
            *i += 1;
            let (negative, signed) = match chars.get(*i) {
                Some('-' | '\u{2212}') => {
                    *i += 1;
                    (true, true)
                }
                Some('+') => {
                    *i += 1;
                    (false, true)
                }
                _ => (false, false),
            };
            let value = read_digits(chars, i, |c| c.to_digit(10))?;
            Some((if negative { -value } else { value }, signed))
        }
        Some(&c) if c == SUPERSCRIPT_MINUS || c == SUPERSCRIPT_PLUS || superscript_value(c).is_some() => {
            let negative = c == SUPERSCRIPT_MINUS;
            let signed = c == SUPERSCRIPT_MINUS || c == SUPERSCRIPT_PLUS;
            if signed {
                *i += 1;
            }
            let value = read_digits(chars, i, superscript_value)?;
            Some((if negative { -value } else { value }, signed))
        }
        Some(c) if c.is_ascii_digit() => {
            let value = read_digits(chars, i, |c| c.to_digit(10))?;
            Some((value, false))
        }
        _ => Some((1, false)),
    }
}

/// Read one or more digits using `digit` to map characters; `None` if no
/// digit is present or the value overflows.
fn read_digits(chars: &[char], i: &mut usize, digit: impl Fn(char) -> Option<u32>) -> Option<i32> {
    let mut value: i32 = 0;
    let mut count = 0;
    while let Some(d) = chars.get(*i).and_then(|&c| digit(c)) {
        value = value.checked_mul(10)?.checked_add(d as i32)?;
        *i += 1;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(pairs: &[(&str, i32)]) -> Vec<SymbolAndPower> {
        pairs.iter().map(|&(s, p)| SymbolAndPower::new(s, p)).collect()
    }

    #[test]
    fn test_decompose_simple() {
        assert_eq!(decompose("m"), Some(factors(&[("m", 1)])));
        assert_eq!(decompose("  km "), Some(factors(&[("km", 1)])));
        assert_eq!(decompose("°C"), Some(factors(&[("°C", 1)])));
    }

    #[test]
    fn test_decompose_powers() {
        assert_eq!(decompose("m²"), Some(factors(&[("m", 2)])));
        assert_eq!(decompose("m^2"), Some(factors(&[("m", 2)])));
        assert_eq!(decompose("m2"), Some(factors(&[("m", 2)])));
        assert_eq!(decompose("s⁻¹"), Some(factors(&[("s", -1)])));
        assert_eq!(decompose("s^-1"), Some(factors(&[("s", -1)])));
        assert_eq!(decompose("m^+3"), Some(factors(&[("m", 3)])));
        assert_eq!(decompose("m¹²"), Some(factors(&[("m", 12)])));
    }

    #[test]
    fn test_decompose_composites() {
        let expected = factors(&[("N", 1), ("mm", -2)]);
        assert_eq!(decompose("N/mm²").as_ref(), Some(&expected));
        assert_eq!(decompose("N⋅mm⁻²").as_ref(), Some(&expected));
        assert_eq!(decompose("N*mm^-2").as_ref(), Some(&expected));
        assert_eq!(decompose("N mm^-2").as_ref(), Some(&expected));
        assert_eq!(decompose("N / mm2").as_ref(), Some(&expected));
        assert_eq!(decompose("J/kg⋅K"), Some(factors(&[("J", 1), ("kg", -1), ("K", -1)])));
        assert_eq!(decompose("kg·m⁻²"), Some(factors(&[("kg", 1), ("m", -2)])));
    }

    #[test]
    fn test_decompose_reciprocal() {
        assert_eq!(decompose("1/s"), Some(factors(&[("s", -1)])));
        assert_eq!(decompose("1 / s²"), Some(factors(&[("s", -2)])));
    }

    #[test]
    fn test_decompose_rejects_malformed() {
        for text in ["", "  ", "/s", "m/", "m//s", "m/s/s", "*m", "m*", "m**s", "m^", "m^0", "m0", "²", "m/s^-2", "m/s⁻²", "m^99999999999"] {
            assert_eq!(decompose(text), None, "{:?} should not decompose", text);
        }
    }

    #[test]
    fn test_signature_is_order_independent() {
        let a = signature(&decompose("N/mm²").unwrap());
        let b = signature(&decompose("mm^-2 N").unwrap());
        assert_eq!(a, b);
    }

    #[test]
    fn test_merge() {
        assert_eq!(merge(&decompose("m⋅m").unwrap()), factors(&[("m", 2)]));
        assert!(merge(&decompose("m/m").unwrap()).is_empty());
    }

    #[test]
    fn test_render_styles() {
        let f = decompose("N/mm²").unwrap();
        assert_eq!(render(&f, SymbolFormat::SignedHatPowers), "N*mm^-2");
        assert_eq!(render(&f, SymbolFormat::FractionHatPowers), "N/mm^2");
        assert_eq!(render(&f, SymbolFormat::SignedSuperScript), "N⋅mm⁻²");
        assert_eq!(render(&f, SymbolFormat::FractionSuperScript), "N/mm²");
    }

    #[test]
    fn test_render_reciprocal_and_positive() {
        let hz = decompose("1/s").unwrap();
        assert_eq!(render(&hz, SymbolFormat::FractionHatPowers), "1/s");
        assert_eq!(render(&hz, SymbolFormat::SignedSuperScript), "s⁻¹");

        let area = decompose("m²").unwrap();
        assert_eq!(render(&area, SymbolFormat::FractionHatPowers), "m^2");
        assert_eq!(render(&area, SymbolFormat::FractionSuperScript), "m²");
    }

    #[test]
    fn test_render_symbol() {
        assert_eq!(render_symbol("kg⋅m²", SymbolFormat::Default), "kg⋅m²");
        assert_eq!(render_symbol("kg⋅m²", SymbolFormat::SignedHatPowers), "kg*m^2");
        assert_eq!(render_symbol("J/kg⋅K", SymbolFormat::SignedSuperScript), "J⋅kg⁻¹⋅K⁻¹");
        assert_eq!(render_symbol("°C", SymbolFormat::FractionHatPowers), "°C");
    }

    #[test]
    fn test_to_superscript() {
        assert_eq!(to_superscript(2), "²");
        assert_eq!(to_superscript(-10), "⁻¹⁰");
    }
}
