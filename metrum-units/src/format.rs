//! Symbol layouts and the per-kind format cache
//!
//! A `PaddedFormat` is computed once per (unit, style) or per template string
//! and then shared. The cache is never cleared; its keys come from a small set
//! of styles and the literal templates an application uses.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};
use serde::{Deserialize, Serialize};
use metrum_core::{Locale, SymbolFormat, ValueFormat};
use crate::parse::decode_template;
use crate::symbol::render_symbol;
use crate::{QuantityKind, Unit};

/// A rendered unit symbol with the padding written around it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PaddedFormat {
    pub pre_padding: String,
    pub format: String,
    pub post_padding: String,
}

impl PaddedFormat {
    pub fn new(pre_padding: &str, format: &str, post_padding: &str) -> Self {
        PaddedFormat {
            pre_padding: pre_padding.to_string(),
            format: format.to_string(),
            post_padding: post_padding.to_string(),
        }
    }

    pub fn unpadded(format: impl Into<String>) -> Self {
        PaddedFormat {
            format: format.into(),
            ..Default::default()
        }
    }
}

impl fmt::Display for PaddedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.pre_padding, self.format, self.post_padding)
    }
}

/// Memoized symbol layouts for one quantity kind
pub struct FormatCache<Q> {
    styled: RwLock<HashMap<(Unit<Q>, SymbolFormat), Arc<PaddedFormat>>>,
    templates: RwLock<HashMap<String, (Arc<PaddedFormat>, Option<Unit<Q>>)>>,
}

impl<Q: QuantityKind> FormatCache<Q> {
    pub fn new() -> Self {
        FormatCache {
            styled: RwLock::new(HashMap::new()),
            templates: RwLock::new(HashMap::new()),
        }
    }

    /// The symbol of `unit` rendered in `style`, without padding
    pub fn get_or_create(&self, unit: Unit<Q>, style: SymbolFormat) -> Arc<PaddedFormat> {
        get_or_insert_with(&self.styled, (unit, style), || {
            tracing::trace!(kind = Q::NAME, symbol = unit.symbol(), %style, "caching symbol format");
            Arc::new(PaddedFormat::unpadded(render_symbol(unit.symbol(), style)))
        })
    }

    /// Decode a template such as " mm " into padding and unit token.
    ///
    /// Also returns the unit the token names, so callers can check it is the
    /// one they meant. When no unit is recognized the whole template is the
    /// `format` and the unit is `None`.
    pub fn get_or_create_from(&self, format: &str) -> (Arc<PaddedFormat>, Option<Unit<Q>>) {
        {
            let read_guard = self.templates.read().unwrap_or_else(PoisonError::into_inner);
            if let Some((padded, unit)) = read_guard.get(format) {
                return (Arc::clone(padded), *unit);
            }
        }

        let entry = match decode_template::<Q>(format) {
            Some((padded, unit)) => (Arc::new(padded), Some(unit)),
            None => {
                tracing::debug!(kind = Q::NAME, format, "no unit in format, using it verbatim");
                (Arc::new(PaddedFormat::unpadded(format)), None)
            }
        };

        let mut write_guard = self.templates.write().unwrap_or_else(PoisonError::into_inner);
        let (padded, unit) = write_guard.entry(format.to_string()).or_insert(entry);
        (Arc::clone(padded), *unit)
    }

    /// Number of cached layouts
    pub fn len(&self) -> usize {
        let styled = self.styled.read().unwrap_or_else(PoisonError::into_inner).len();
        let templates = self.templates.read().unwrap_or_else(PoisonError::into_inner).len();
        styled + templates
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Q: QuantityKind> Default for FormatCache<Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Check under a read lock, compute outside any lock, insert under the write
/// lock. Concurrent first callers may all compute, but every caller gets the
/// value that ended up in the map.
fn get_or_insert_with<K: Eq + Hash, V>(
    lock: &RwLock<HashMap<K, Arc<V>>>,
    key: K,
    compute: impl FnOnce() -> Arc<V>,
) -> Arc<V> {
    {
        let read_guard = lock.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = read_guard.get(&key) {
            return Arc::clone(value);
        }
    }

    let value = compute();
    let mut write_guard = lock.write().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(write_guard.entry(key).or_insert(value))
}

/// How a quantity is written: value format, then the unit with its padding
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityFormat<Q: QuantityKind> {
    pub value_format: ValueFormat,
    pub unit_format: Arc<PaddedFormat>,
    pub unit: Unit<Q>,
}

impl<Q: QuantityKind> QuantityFormat<Q> {
    /// A unit in a symbol style, separated from the value by one space
    pub fn with_unit(value_format: ValueFormat, unit: Unit<Q>, style: SymbolFormat) -> Self {
        let symbol = Q::format_cache().get_or_create(unit, style);
        QuantityFormat {
            value_format,
            unit_format: Arc::new(PaddedFormat::new(" ", &symbol.format, "")),
            unit,
        }
    }

    /// Interpret a format such as "F2 mm", " km", "E3" or "0.00 m/s".
    ///
    /// The whole text is tried as a unit template first, so "N" is newtons
    /// rather than a value format. An unknown unit falls back to the SI unit.
    pub fn create(format: &str) -> Self {
        let cache = Q::format_cache();

        if let (padded, Some(unit)) = cache.get_or_create_from(format) {
            return Self::from_template(ValueFormat::General, padded, unit);
        }

        let Some((value_format, consumed)) = ValueFormat::read(format) else {
            return Self::si(ValueFormat::General);
        };
        let rest = &format[consumed..];
        if rest.trim().is_empty() {
            return Self::si(value_format);
        }
        match cache.get_or_create_from(rest) {
            (padded, Some(unit)) => Self::from_template(value_format, padded, unit),
            (_, None) => Self::si(value_format),
        }
    }

    fn si(value_format: ValueFormat) -> Self {
        Self::with_unit(value_format, Q::SI_UNIT, SymbolFormat::Default)
    }

    // No padding before the unit means one space
    fn from_template(value_format: ValueFormat, padded: Arc<PaddedFormat>, unit: Unit<Q>) -> Self {
        let unit_format = if padded.pre_padding.is_empty() {
            Arc::new(PaddedFormat::new(" ", &padded.format, &padded.post_padding))
        } else {
            padded
        };
        QuantityFormat { value_format, unit_format, unit }
    }

    /// Write an SI value in this format
    pub fn render(&self, si_value: f64, locale: &Locale) -> String {
        let value = self.value_format.format(self.unit.from_si(si_value), locale);
        format!("{}{}", value, self.unit_format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Force, Length, Pressure};

    #[test]
    fn test_styled_formats() {
        let cache = Pressure::format_cache();
        let unit = Unit::<Pressure>::NEWTONS_PER_SQUARE_MILLIMETRE;
        assert_eq!(cache.get_or_create(unit, SymbolFormat::Default).format, "N/mm²");
        assert_eq!(cache.get_or_create(unit, SymbolFormat::SignedHatPowers).format, "N*mm^-2");
        assert_eq!(cache.get_or_create(unit, SymbolFormat::FractionHatPowers).format, "N/mm^2");
        assert_eq!(cache.get_or_create(unit, SymbolFormat::SignedSuperScript).format, "N⋅mm⁻²");
        assert_eq!(cache.get_or_create(unit, SymbolFormat::FractionSuperScript).format, "N/mm²");

        let padded = cache.get_or_create(unit, SymbolFormat::SignedSuperScript);
        assert!(padded.pre_padding.is_empty() && padded.post_padding.is_empty());
    }

    #[test]
    fn test_cache_returns_same_instance() {
        let cache = Length::format_cache();
        let a = cache.get_or_create(Unit::<Length>::KILOMETRES, SymbolFormat::SignedHatPowers);
        let b = cache.get_or_create(Unit::<Length>::KILOMETRES, SymbolFormat::SignedHatPowers);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);

        let (c, _) = cache.get_or_create_from(" km ");
        let (d, _) = cache.get_or_create_from(" km ");
        assert!(Arc::ptr_eq(&c, &d));
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_concurrent_first_population() {
        let cache: FormatCache<Pressure> = FormatCache::new();
        let cache = &cache;
        let unit = Unit::<Pressure>::KILOPASCALS;
        let results: Vec<Arc<PaddedFormat>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || cache.get_or_create(unit, SymbolFormat::SignedHatPowers)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for result in &results {
            assert!(Arc::ptr_eq(result, &results[0]));
            assert_eq!(result.format, "kPa");
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_concurrent_templates() {
        let cache: FormatCache<Length> = FormatCache::new();
        let cache = &cache;
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(move || cache.get_or_create_from(" mm")))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (padded, unit) in &results {
            assert!(Arc::ptr_eq(padded, &results[0].0));
            assert_eq!(*unit, Some(Unit::<Length>::MILLIMETRES));
        }
    }

    #[test]
    fn test_template_split() {
        let cache: FormatCache<Length> = FormatCache::new();
        let (padded, unit) = cache.get_or_create_from(" mm\t");
        assert_eq!(*padded, PaddedFormat::new(" ", "mm", "\t"));
        assert_eq!(unit, Some(Unit::<Length>::MILLIMETRES));

        let (padded, unit) = cache.get_or_create_from("apples");
        assert_eq!(*padded, PaddedFormat::unpadded("apples"));
        assert_eq!(unit, None);
    }

    #[test]
    fn test_quantity_format_create() {
        let format = QuantityFormat::<Length>::create("F2 mm");
        assert_eq!(format.value_format, ValueFormat::Fixed(2));
        assert_eq!(format.unit, Unit::<Length>::MILLIMETRES);
        assert_eq!(format.render(0.0123456, &Locale::INVARIANT), "12.35 mm");

        let format = QuantityFormat::<Length>::create("km");
        assert_eq!(format.value_format, ValueFormat::General);
        assert_eq!(format.render(1500.0, &Locale::INVARIANT), "1.5 km");

        let format = QuantityFormat::<Length>::create("E2");
        assert_eq!(format.unit, Unit::<Length>::METRES);
        assert_eq!(format.render(1500.0, &Locale::INVARIANT), "1.50e3 m");
    }

    #[test]
    fn test_quantity_format_prefers_unit() {
        // "N" is a unit of force, not the "N" number format
        let format = QuantityFormat::<Force>::create("N");
        assert_eq!(format.value_format, ValueFormat::General);
        assert_eq!(format.unit, Unit::<Force>::NEWTONS);
    }

    #[test]
    fn test_quantity_format_fallback() {
        let format = QuantityFormat::<Length>::create("F1 furlongs-ish");
        assert_eq!(format.value_format, ValueFormat::Fixed(1));
        assert_eq!(format.unit, Unit::<Length>::METRES);
        assert_eq!(format.render(2.26, &Locale::SV_SE), "2,3 m");
    }
}
