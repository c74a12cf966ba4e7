//! Numeric literals and value formats
//!
//! Reads a floating-point literal from the start of a text using a locale's
//! decimal separator, and renders values with short format specifiers
//! ("F2", "E3", "G", "0.00").

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::{Locale, NumberError};

const MINUS_SIGN: char = '\u{2212}';

/// Read a floating-point literal starting at byte offset `start`.
///
/// Grammar: `[sign] digits [sep digits] [(e|E) [sign] digits]`, or
/// `[sign] sep digits`, where `sign` is one of `+ - −` and `sep` the locale's
/// decimal separator. `NaN`, `Infinity`, `inf` and `∞` are accepted, ignoring
/// ASCII case (all but `NaN` with an optional sign). Returns the value and the byte offset just past
/// the literal, or `None` if no literal starts at `start`.
pub fn read_number(text: &str, start: usize, locale: &Locale) -> Option<(f64, usize)> {
    let rest = text.get(start..)?;
    let separator = locale.decimal_separator();
    let mut literal = String::new();
    let mut i = 0;

    match peek(rest, i) {
        Some('+') => i += 1,
        Some(c @ ('-' | MINUS_SIGN)) => {
            literal.push('-');
            i += c.len_utf8();
        }
        _ => {}
    }

    if literal.is_empty() && starts_with_word(&rest[i..], "NaN") {
        return Some((f64::NAN, start + i + "NaN".len()));
    }
    // "inf" is how `Display` writes an infinite f64
    for symbol in ["Infinity", "inf", "∞"] {
        if starts_with_word(&rest[i..], symbol) {
            let value = if literal.is_empty() { f64::INFINITY } else { f64::NEG_INFINITY };
            return Some((value, start + i + symbol.len()));
        }
    }

    let int_digits = take_digits(rest, &mut i, &mut literal);

    let mut frac_digits = 0;
    if peek(rest, i) == Some(separator) {
        let after = i + separator.len_utf8();
        let digit_follows = peek(rest, after).is_some_and(|c| c.is_ascii_digit());
        if int_digits > 0 || digit_follows {
            literal.push('.');
            i = after;
            frac_digits = take_digits(rest, &mut i, &mut literal);
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // The exponent is only consumed when digits follow, so "5eV" reads as 5.
    if let Some(e @ ('e' | 'E')) = peek(rest, i) {
        let mut j = i + e.len_utf8();
        let mut exponent = String::from("e");
        match peek(rest, j) {
            Some('+') => j += 1,
            Some(c @ ('-' | MINUS_SIGN)) => {
                exponent.push('-');
                j += c.len_utf8();
            }
            _ => {}
        }
        if take_digits(rest, &mut j, &mut exponent) > 0 {
            literal.push_str(&exponent);
            i = j;
        }
    }

    let value = literal.parse::<f64>().ok()?;
    Some((value, start + i))
}

/// Parse a whole text (surrounding whitespace ignored) as a number
pub fn parse_number(text: &str, locale: &Locale) -> Result<f64, NumberError> {
    let trimmed = text.trim();
    match read_number(trimmed, 0, locale) {
        Some((value, end)) if end == trimmed.len() => Ok(value),
        _ => Err(NumberError::Invalid(text.to_string())),
    }
}

/// Render a value using the locale's decimal separator
pub fn format_number(value: f64, format: ValueFormat, locale: &Locale) -> String {
    let rendered = match format {
        ValueFormat::General => format!("{}", value),
        ValueFormat::Fixed(decimals) => format!("{:.*}", decimals as usize, value),
        ValueFormat::Exponential(decimals) => format!("{:.*e}", decimals as usize, value),
    };
    localize(rendered, locale)
}

fn localize(rendered: String, locale: &Locale) -> String {
    let separator = locale.decimal_separator();
    if separator == '.' {
        rendered
    } else {
        rendered.replace('.', separator.encode_utf8(&mut [0; 4]))
    }
}

fn starts_with_word(text: &str, word: &str) -> bool {
    text.get(..word.len()).is_some_and(|head| head.eq_ignore_ascii_case(word))
}

fn peek(text: &str, at: usize) -> Option<char> {
    text.get(at..).and_then(|s| s.chars().next())
}

fn take_digits(text: &str, at: &mut usize, out: &mut String) -> usize {
    let mut count = 0;
    while let Some(c) = peek(text, *at) {
        if !c.is_ascii_digit() {
            break;
        }
        out.push(c);
        *at += 1;
        count += 1;
    }
    count
}

/// How the numeric part of a quantity is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Shortest text that round-trips ("G" or "R")
    #[default]
    General,
    /// Fixed number of decimals ("F2", "N2", "0.00")
    Fixed(u8),
    /// Scientific notation with a fixed number of decimals ("E3")
    Exponential(u8),
}

impl ValueFormat {
    /// Read a value format specifier at the start of `text`.
    ///
    /// Returns the format and the number of bytes consumed. A letter specifier
    /// without digits must not be followed by another letter, so unit symbols
    /// such as "ft" or "Gm" are not mistaken for formats.
    pub fn read(text: &str) -> Option<(ValueFormat, usize)> {
        let first = text.chars().next()?;
        match first {
            '0' | '#' => return Some(Self::read_custom(text)),
            'G' | 'g' | 'R' | 'r' | 'F' | 'f' | 'N' | 'n' | 'E' | 'e' => {}
            _ => return None,
        }

        let mut end = 1;
        let mut digits = String::new();
        take_digits(text, &mut end, &mut digits);
        if digits.is_empty() && peek(text, end).is_some_and(|c| c.is_alphabetic()) {
            return None;
        }
        let precision = if digits.is_empty() { None } else { digits.parse::<u8>().ok() };
        if !digits.is_empty() && precision.is_none() {
            return None;
        }

        let format = match first {
            'G' | 'g' | 'R' | 'r' => {
                if precision.is_some() {
                    return None;
                }
                ValueFormat::General
            }
            'F' | 'f' | 'N' | 'n' => ValueFormat::Fixed(precision.unwrap_or(2)),
            _ => ValueFormat::Exponential(precision.unwrap_or(6)),
        };
        Some((format, end))
    }

    /// Custom pattern made of '0' and '#' with at most one '.'
    fn read_custom(text: &str) -> (ValueFormat, usize) {
        let mut end = 0;
        let mut decimals: Option<u8> = None;
        for c in text.chars() {
            match c {
                '0' | '#' => {
                    if let Some(d) = decimals.as_mut() {
                        *d = d.saturating_add(1);
                    }
                }
                '.' if decimals.is_none() => decimals = Some(0),
                _ => break,
            }
            end += 1;
        }
        (ValueFormat::Fixed(decimals.unwrap_or(0)), end)
    }

    /// Parse a complete value format specifier; empty text means `General`
    pub fn parse(text: &str) -> Result<ValueFormat, NumberError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(ValueFormat::General);
        }
        match Self::read(trimmed) {
            Some((format, end)) if end == trimmed.len() => Ok(format),
            _ => Err(NumberError::InvalidFormat(text.to_string())),
        }
    }

    pub fn format(&self, value: f64, locale: &Locale) -> String {
        format_number(value, *self, locale)
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueFormat::General => write!(f, "G"),
            ValueFormat::Fixed(d) => write!(f, "F{}", d),
            ValueFormat::Exponential(d) => write!(f, "E{}", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Option<(f64, usize)> {
        read_number(text, 0, &Locale::INVARIANT)
    }

    #[test]
    fn test_read_integer_and_decimal() {
        assert_eq!(read("42"), Some((42.0, 2)));
        assert_eq!(read("1.5 km/h"), Some((1.5, 3)));
        assert_eq!(read(".5m"), Some((0.5, 2)));
        assert_eq!(read("-3.25 rad"), Some((-3.25, 5)));
        assert_eq!(read("+7"), Some((7.0, 2)));
    }

    #[test]
    fn test_read_unicode_minus() {
        let (value, end) = read("\u{2212}2 m").unwrap();
        assert_eq!(value, -2.0);
        assert_eq!(end, '\u{2212}'.len_utf8() + 1);
    }

    #[test]
    fn test_read_exponent() {
        assert_eq!(read("1.5e3 m"), Some((1500.0, 5)));
        assert_eq!(read("2E-2"), Some((0.02, 4)));
        // Exponent marker without digits belongs to the unit
        assert_eq!(read("5eV"), Some((5.0, 1)));
        assert_eq!(read("5e+"), Some((5.0, 1)));
    }

    #[test]
    fn test_read_special_values() {
        assert!(read("NaN m").unwrap().0.is_nan());
        assert_eq!(read("Infinity"), Some((f64::INFINITY, 8)));
        assert_eq!(read("-∞ K").unwrap().0, f64::NEG_INFINITY);
    }

    #[test]
    fn test_read_displayed_special_values() {
        for value in [f64::INFINITY, f64::NEG_INFINITY] {
            let text = format_number(value, ValueFormat::General, &Locale::INVARIANT);
            assert_eq!(read(&text), Some((value, text.len())), "{}", text);
        }
        assert_eq!(read("-inf mm"), Some((f64::NEG_INFINITY, 4)));
        assert_eq!(read("INFINITY"), Some((f64::INFINITY, 8)));
        assert!(read("nan").unwrap().0.is_nan());
        assert!(parse_number(&format!("{}", f64::NAN), &Locale::INVARIANT).unwrap().is_nan());
    }

    #[test]
    fn test_read_rejects_non_numbers() {
        assert_eq!(read("m"), None);
        assert_eq!(read(""), None);
        assert_eq!(read("-"), None);
        assert_eq!(read("."), None);
        assert_eq!(read("-.e5"), None);
    }

    #[test]
    fn test_read_with_offset() {
        assert_eq!(read_number("x = 12 m", 4, &Locale::INVARIANT), Some((12.0, 6)));
        assert_eq!(read_number("12", 10, &Locale::INVARIANT), None);
    }

    #[test]
    fn test_locale_separator() {
        assert_eq!(read_number("1,5 m", 0, &Locale::SV_SE), Some((1.5, 3)));
        // '.' is not a separator for sv-SE, so only the integer part is read
        assert_eq!(read_number("1.5 m", 0, &Locale::SV_SE), Some((1.0, 1)));
        assert_eq!(read_number("1,5 m", 0, &Locale::INVARIANT), Some((1.0, 1)));
    }

    #[test]
    fn test_parse_number_whole_text() {
        assert_eq!(parse_number(" 2.5 ", &Locale::INVARIANT), Ok(2.5));
        assert!(parse_number("2.5m", &Locale::INVARIANT).is_err());
        assert_eq!(parse_number("2,5", &Locale::DE_DE), Ok(2.5));
    }

    #[test]
    fn test_value_format_read() {
        assert_eq!(ValueFormat::read("F2 mm"), Some((ValueFormat::Fixed(2), 2)));
        assert_eq!(ValueFormat::read("E3"), Some((ValueFormat::Exponential(3), 2)));
        assert_eq!(ValueFormat::read("F"), Some((ValueFormat::Fixed(2), 1)));
        assert_eq!(ValueFormat::read("G m"), Some((ValueFormat::General, 1)));
        assert_eq!(ValueFormat::read("0.000 m"), Some((ValueFormat::Fixed(3), 5)));
        assert_eq!(ValueFormat::read("#.# m"), Some((ValueFormat::Fixed(1), 3)));
        assert_eq!(ValueFormat::read("ft"), None);
        assert_eq!(ValueFormat::read("Gm"), None);
        assert_eq!(ValueFormat::read("m"), None);
    }

    #[test]
    fn test_value_format_parse() {
        assert_eq!(ValueFormat::parse(""), Ok(ValueFormat::General));
        assert_eq!(ValueFormat::parse("f1"), Ok(ValueFormat::Fixed(1)));
        assert!(ValueFormat::parse("F2 mm").is_err());
        assert!(ValueFormat::parse("G3").is_err());
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.23456, ValueFormat::Fixed(2), &Locale::INVARIANT), "1.23");
        assert_eq!(format_number(1.5, ValueFormat::General, &Locale::SV_SE), "1,5");
        assert_eq!(format_number(1500.0, ValueFormat::Exponential(2), &Locale::INVARIANT), "1.50e3");
        assert_eq!(ValueFormat::Fixed(3).to_string(), "F3");
    }
}
