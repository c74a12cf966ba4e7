//! Unit and quantity text parsing - "km/h", "N/mm²", "1.5 km/h"

use metrum_core::{read_number, Locale, QuantityParseError, UnitParseError};
use crate::{PaddedFormat, QuantityKind, Unit};

/// Parse a unit of kind `Q`
///
/// Surrounding whitespace is ignored. Matching order:
/// - Exact symbol: "mm", "km/h"
/// - Alias or name: "um", "millimetre"
/// - Composite symbol with the same factors: "N⋅mm⁻²" for "N/mm²"
pub fn parse_unit<Q: QuantityKind>(text: &str) -> Result<Unit<Q>, UnitParseError> {
    try_parse_unit(text).ok_or_else(|| UnitParseError::new(text, Q::NAME))
}

/// Like [`parse_unit`] but returns `None` instead of an error
pub fn try_parse_unit<Q: QuantityKind>(text: &str) -> Option<Unit<Q>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Q::registry().resolve(trimmed)
}

/// Parse a quantity string like "5 m", "1.5km/h" or "-3,2 °C" (sv-SE)
///
/// Returns the number as written and the unit it was written in.
pub fn parse_quantity<Q: QuantityKind>(
    text: &str,
    locale: &Locale,
) -> Result<(f64, Unit<Q>), QuantityParseError> {
    let trimmed = text.trim();

    let (value, end) = read_number(trimmed, 0, locale)
        .ok_or_else(|| QuantityParseError::InvalidNumber { text: text.to_string() })?;

    let rest = &trimmed[end..];
    if continues_literal(rest, locale) {
        return Err(QuantityParseError::InvalidNumber { text: text.to_string() });
    }

    let unit_text = rest.trim();
    if unit_text.is_empty() {
        return Err(QuantityParseError::MissingUnit {
            text: text.to_string(),
            quantity: Q::NAME,
        });
    }

    let unit = parse_unit::<Q>(unit_text)?;
    Ok((value, unit))
}

/// Whether the text after a number still looks like part of it: "1.2.3 m",
/// "1e5e3 m" or "2e+ m". A bare 'e' is a unit ("5eV").
fn continues_literal(rest: &str, locale: &Locale) -> bool {
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_ascii_digit() || c == locale.decimal_separator() => true,
        Some('e' | 'E') => matches!(chars.next(), Some(c) if c.is_ascii_digit() || matches!(c, '+' | '-' | '\u{2212}')),
        _ => false,
    }
}

/// Like [`parse_quantity`] but returns `None` instead of an error
pub fn try_parse_quantity<Q: QuantityKind>(text: &str, locale: &Locale) -> Option<(f64, Unit<Q>)> {
    parse_quantity(text, locale).ok()
}

/// Split a unit template like " mm " into padding and unit token.
///
/// Returns `None` when the text between the paddings is not a unit of `Q`.
pub(crate) fn decode_template<Q: QuantityKind>(format: &str) -> Option<(PaddedFormat, Unit<Q>)> {
    let token = format.trim();
    if token.is_empty() {
        return None;
    }
    let unit = Q::registry().resolve(token)?;

    let start = format.len() - format.trim_start().len();
    let end = start + token.len();
    let padded = PaddedFormat::new(&format[..start], token, &format[end..]);
    Some((padded, unit))
}
