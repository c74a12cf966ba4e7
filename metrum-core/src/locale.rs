//! Number formatting conventions
//!
//! Only the decimal separator varies between locales here; digit grouping is
//! neither read nor written.

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Culture-specific number conventions used when reading and writing values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    tag: &'static str,
    decimal_separator: char,
}

/// Known culture tags and their decimal separators
const KNOWN: &[(&str, char)] = &[
    ("en-US", '.'),
    ("en-GB", '.'),
    ("sv-SE", ','),
    ("de-DE", ','),
    ("fr-FR", ','),
    ("nl-NL", ','),
    ("es-ES", ','),
    ("it-IT", ','),
    ("pt-BR", ','),
    ("ru-RU", ','),
];

impl Locale {
    /// Culture-independent conventions ('.' as decimal separator)
    pub const INVARIANT: Locale = Locale { tag: "invariant", decimal_separator: '.' };

    pub const EN_US: Locale = Locale { tag: "en-US", decimal_separator: '.' };
    pub const SV_SE: Locale = Locale { tag: "sv-SE", decimal_separator: ',' };
    pub const DE_DE: Locale = Locale { tag: "de-DE", decimal_separator: ',' };

    /// Look up a locale by culture tag (case-insensitive, '_' accepted for '-').
    /// Returns `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("invariant") {
            return Some(Locale::INVARIANT);
        }
        let normalized = tag.replace('_', "-");
        KNOWN
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(&normalized))
            .map(|&(tag, decimal_separator)| Locale { tag, decimal_separator })
    }

    /// Like [`Locale::from_tag`] but falls back to the invariant locale
    pub fn from_tag_or_invariant(tag: &str) -> Locale {
        Self::from_tag(tag).unwrap_or(Locale::INVARIANT)
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    /// All locales with a culture tag
    pub fn known() -> impl Iterator<Item = Locale> {
        KNOWN
            .iter()
            .map(|&(tag, decimal_separator)| Locale { tag, decimal_separator })
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::INVARIANT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Locale::from_tag(&tag)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown locale '{}'", tag)))
    }
}
