//! Quantity kinds - the type-level tag shared by a unit set and its quantity

use std::fmt;
use crate::{Dimension, FormatCache, Unit, UnitRegistry};

/// A physical quantity kind (Length, Mass, ...), implemented by zero-sized tags.
///
/// Implementations are generated by `quantity_kind!`, which also provides the
/// process-wide registry and format cache statics.
pub trait QuantityKind: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Display name used in diagnostics, e.g. "Length"
    const NAME: &'static str;

    /// SI dimensional signature
    const DIMENSION: Dimension;

    /// Every known unit, SI unit first
    const UNITS: &'static [Unit<Self>];

    /// Named constructors, parallel to `UNITS` (e.g. "from_metres")
    const CONSTRUCTORS: &'static [&'static str];

    /// The unit whose conversion is the identity
    const SI_UNIT: Unit<Self>;

    /// Symbol lookup tables, built on first use
    fn registry() -> &'static UnitRegistry<Self>;

    /// Memoized symbol layouts
    fn format_cache() -> &'static FormatCache<Self>;
}
