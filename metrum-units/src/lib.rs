//! Metrum Units - Typed quantities and units of measure
//!
//! Every quantity kind (Length, Pressure, ...) is a zero-sized tag type. Its
//! units are constants on `Unit<Kind>` and its values are `Quantity<Kind>`,
//! stored in SI. The engine shared by all kinds:
//! - Conversion (linear, or affine for temperature scales)
//! - Unit parsing: exact symbol, alias, or composite symbols ("N⋅mm⁻²")
//! - Symbol formatting in five styles, with a per-kind format cache
//!
//! Kinds:
//! - Base (m, kg, s, A, K, mol, cd)
//! - Geometry (rad, sr, m², m³, 1/m)
//! - Kinematics (m/s, m/s², Hz, rad/s, m³/s)
//! - Mechanics (N, Pa, J, W, N⋅m, kg/m³)
//! - Electromagnetism (C, V, Ω, S, F, Wb, T, H)
//! - Photometry and chemistry (lm, lx, kg/mol, mol/m³)

#[macro_use]
mod kinds;

mod dimension;
mod conversion;
mod kind;
mod unit;
mod registry;
mod parse;
mod format;
mod quantity;
mod products;
mod converter;
pub mod symbol;

pub use dimension::Dimension;
pub use conversion::Conversion;
pub use kind::QuantityKind;
pub use unit::Unit;
pub use registry::UnitRegistry;
pub use format::{FormatCache, PaddedFormat, QuantityFormat};
pub use quantity::Quantity;
pub use kinds::*;
pub use parse::{parse_quantity, parse_unit, try_parse_quantity, try_parse_unit};
pub use converter::{ConverterRegistry, InstanceDescriptor, KindConverter, ParsedQuantity, QuantityConverter, UnitInfo};

pub use metrum_core::{Locale, QuantityParseError, SymbolFormat, UnitParseError, ValueFormat};
