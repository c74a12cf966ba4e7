//! Parse errors shared by every quantity kind
//!
//! Errors carry enough context for a caller to build a user-facing message:
//! the offending text and the name of the quantity kind that was targeted.

use thiserror::Error;

/// Machine-readable error codes
pub mod codes {
    pub const UNIT_PARSE_ERROR: &str = "UNIT_PARSE_ERROR";
    pub const INVALID_NUMBER: &str = "INVALID_NUMBER";
    pub const MISSING_UNIT: &str = "MISSING_UNIT";
    pub const INVALID_STYLE: &str = "INVALID_STYLE";
    pub const INVALID_VALUE_FORMAT: &str = "INVALID_VALUE_FORMAT";
    pub const UNKNOWN_KIND: &str = "UNKNOWN_KIND";
    pub const UNKNOWN_LOCALE: &str = "UNKNOWN_LOCALE";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
}

/// Text did not match, exactly or compositionally, any unit of a quantity kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse '{text}' as a unit of {quantity}")]
pub struct UnitParseError {
    /// The text that failed to parse, as given by the caller
    pub text: String,
    /// Name of the quantity kind parsed against (e.g. "Length")
    pub quantity: &'static str,
}

impl UnitParseError {
    pub fn new(text: impl Into<String>, quantity: &'static str) -> Self {
        Self {
            text: text.into(),
            quantity,
        }
    }

    pub fn code(&self) -> &'static str {
        codes::UNIT_PARSE_ERROR
    }
}

/// Failure to parse `<number> <unit>` text into a quantity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuantityParseError {
    /// No valid numeric literal at the start of the text
    #[error("expected a number at the start of '{text}'")]
    InvalidNumber { text: String },

    /// A number was read but nothing follows it
    #[error("missing unit of {quantity} after the number in '{text}'")]
    MissingUnit { text: String, quantity: &'static str },

    /// The text after the number is not a unit of the quantity kind
    #[error(transparent)]
    Unit(#[from] UnitParseError),
}

impl QuantityParseError {
    pub fn code(&self) -> &'static str {
        match self {
            QuantityParseError::InvalidNumber { .. } => codes::INVALID_NUMBER,
            QuantityParseError::MissingUnit { .. } => codes::MISSING_UNIT,
            QuantityParseError::Unit(e) => e.code(),
        }
    }
}

/// Error type for numeric literal and value format parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumberError {
    #[error("invalid number format: {0}")]
    Invalid(String),

    #[error("invalid value format: {0}")]
    InvalidFormat(String),
}

impl NumberError {
    pub fn code(&self) -> &'static str {
        match self {
            NumberError::Invalid(_) => codes::INVALID_NUMBER,
            NumberError::InvalidFormat(_) => codes::INVALID_VALUE_FORMAT,
        }
    }
}

impl From<NumberError> for QuantityParseError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::Invalid(text) | NumberError::InvalidFormat(text) => {
                QuantityParseError::InvalidNumber { text }
            }
        }
    }
}

/// A symbol style name was not one of the known styles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown symbol format '{0}', expected one of: default, signed-hat, fraction-hat, signed-superscript, fraction-superscript")]
pub struct SymbolFormatError(pub String);

impl SymbolFormatError {
    pub fn code(&self) -> &'static str {
        codes::INVALID_STYLE
    }
}
