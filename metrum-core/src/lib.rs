//! Metrum Core - Shared types
//!
//! This crate provides the types used by every quantity kind:
//! - `UnitParseError` / `QuantityParseError`: parse failures
//! - `Locale`: decimal separator conventions
//! - `read_number` / `ValueFormat`: numeric literals in and out
//! - `SymbolFormat`: unit symbol rendering styles

mod error;
mod locale;
mod number;
mod symbol_format;

pub use error::{codes, NumberError, QuantityParseError, SymbolFormatError, UnitParseError};
pub use locale::Locale;
pub use number::{format_number, parse_number, read_number, ValueFormat};
pub use symbol_format::SymbolFormat;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Locale, QuantityParseError, SymbolFormat, UnitParseError, ValueFormat,
    };
    pub use crate::error::codes;
}
