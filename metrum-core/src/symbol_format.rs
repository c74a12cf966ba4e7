//! Unit symbol rendering styles

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::SymbolFormatError;

/// Style used when rendering a unit symbol
///
/// | style                 | example   |
/// |-----------------------|-----------|
/// | `Default`             | as declared |
/// | `SignedHatPowers`     | `N*mm^-2` |
/// | `FractionHatPowers`   | `N/mm^2`  |
/// | `SignedSuperScript`   | `N⋅mm⁻²`  |
/// | `FractionSuperScript` | `N/mm²`   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolFormat {
    #[default]
    Default,
    SignedHatPowers,
    FractionHatPowers,
    SignedSuperScript,
    FractionSuperScript,
}

impl SymbolFormat {
    pub const ALL: [SymbolFormat; 5] = [
        SymbolFormat::Default,
        SymbolFormat::SignedHatPowers,
        SymbolFormat::FractionHatPowers,
        SymbolFormat::SignedSuperScript,
        SymbolFormat::FractionSuperScript,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SymbolFormat::Default => "default",
            SymbolFormat::SignedHatPowers => "signed-hat",
            SymbolFormat::FractionHatPowers => "fraction-hat",
            SymbolFormat::SignedSuperScript => "signed-superscript",
            SymbolFormat::FractionSuperScript => "fraction-superscript",
        }
    }

    /// Whether negative powers are written as a denominator
    pub fn is_fraction(&self) -> bool {
        matches!(self, SymbolFormat::FractionHatPowers | SymbolFormat::FractionSuperScript)
    }

    /// Whether powers are written with superscript digits
    pub fn is_superscript(&self) -> bool {
        matches!(self, SymbolFormat::SignedSuperScript | SymbolFormat::FractionSuperScript)
    }
}

impl fmt::Display for SymbolFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SymbolFormat {
    type Err = SymbolFormatError;

    /// Accepts the kebab-case names and the enum variant names, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "default" => Ok(SymbolFormat::Default),
            "signedhat" | "signedhatpowers" => Ok(SymbolFormat::SignedHatPowers),
            "fractionhat" | "fractionhatpowers" => Ok(SymbolFormat::FractionHatPowers),
            "signedsuperscript" => Ok(SymbolFormat::SignedSuperScript),
            "fractionsuperscript" => Ok(SymbolFormat::FractionSuperScript),
            _ => Err(SymbolFormatError(s.to_string())),
        }
    }
}
