//! Converters - kind-erased access to parsing and formatting by kind name
//!
//! `QuantityConverter` is object safe so that front ends (the CLI, a batch
//! protocol) can pick a kind from a string and work with SI values.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use metrum_core::{Locale, QuantityParseError, SymbolFormat, UnitParseError};
use crate::kinds::*;
use crate::{parse, Conversion, Dimension, QuantityFormat, QuantityKind, Unit};

/// One unit of a kind, as listed by a converter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitInfo {
    pub symbol: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub conversion: Conversion,
    pub is_si: bool,
}

/// Result of parsing quantity text through a converter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedQuantity {
    /// The number as written
    pub value: f64,
    /// Symbol of the unit it was written in
    pub unit: &'static str,
    pub si_value: f64,
    pub si_symbol: &'static str,
}

/// How to rebuild a quantity in code: a named constructor and its argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceDescriptor {
    pub kind: String,
    /// e.g. "Quantity::<Length>::from_metres"
    pub constructor: String,
    pub argument: f64,
}

/// Parse and format quantities of one kind without naming its type
pub trait QuantityConverter: Send + Sync {
    /// Kind name, e.g. "Length"
    fn kind(&self) -> &'static str;

    fn dimension(&self) -> Dimension;

    fn si_symbol(&self) -> &'static str;

    fn units(&self) -> Vec<UnitInfo>;

    /// Parse "<number> <unit>" text
    fn parse(&self, text: &str, locale: &Locale) -> Result<ParsedQuantity, QuantityParseError>;

    fn try_parse(&self, text: &str, locale: &Locale) -> Option<ParsedQuantity> {
        self.parse(text, locale).ok()
    }

    fn parse_unit(&self, text: &str) -> Result<UnitInfo, UnitParseError>;

    /// Write an SI value with a quantity format such as "F2 mm"
    fn format(&self, si_value: f64, format: &str, locale: &Locale) -> String;

    /// The symbol of a unit (given as any parseable text) in a style
    fn symbol_in(&self, unit: &str, style: SymbolFormat) -> Result<String, UnitParseError>;

    fn descriptor(&self, si_value: f64) -> InstanceDescriptor;
}

/// The converter for kind `Q`
pub struct KindConverter<Q> {
    kind: PhantomData<fn() -> Q>,
}

impl<Q: QuantityKind> KindConverter<Q> {
    pub fn new() -> Self {
        KindConverter { kind: PhantomData }
    }

    fn info(unit: Unit<Q>) -> UnitInfo {
        UnitInfo {
            symbol: unit.symbol(),
            name: unit.name(),
            aliases: unit.aliases(),
            conversion: unit.conversion(),
            is_si: unit == Q::SI_UNIT,
        }
    }
}

impl<Q: QuantityKind> Default for KindConverter<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: QuantityKind> QuantityConverter for KindConverter<Q> {
    fn kind(&self) -> &'static str {
        Q::NAME
    }

    fn dimension(&self) -> Dimension {
        Q::DIMENSION
    }

    fn si_symbol(&self) -> &'static str {
        Q::SI_UNIT.symbol()
    }

    fn units(&self) -> Vec<UnitInfo> {
        Q::UNITS.iter().map(|&unit| Self::info(unit)).collect()
    }

    fn parse(&self, text: &str, locale: &Locale) -> Result<ParsedQuantity, QuantityParseError> {
        let (value, unit) = parse::parse_quantity::<Q>(text, locale)?;
        Ok(ParsedQuantity {
            value,
            unit: unit.symbol(),
            si_value: unit.to_si(value),
            si_symbol: Q::SI_UNIT.symbol(),
        })
    }

    fn parse_unit(&self, text: &str) -> Result<UnitInfo, UnitParseError> {
        Unit::<Q>::parse(text).map(Self::info)
    }

    fn format(&self, si_value: f64, format: &str, locale: &Locale) -> String {
        QuantityFormat::<Q>::create(format).render(si_value, locale)
    }

    fn symbol_in(&self, unit: &str, style: SymbolFormat) -> Result<String, UnitParseError> {
        Ok(Unit::<Q>::parse(unit)?.symbol_in(style))
    }

    fn descriptor(&self, si_value: f64) -> InstanceDescriptor {
        let constructor = Q::UNITS
            .iter()
            .position(|&unit| unit == Q::SI_UNIT)
            .and_then(|index| Q::CONSTRUCTORS.get(index))
            .map(|name| format!("Quantity::<{}>::{}", Q::NAME, name))
            .unwrap_or_else(|| format!("Quantity::<{}>::from_si", Q::NAME));

        InstanceDescriptor {
            kind: Q::NAME.to_string(),
            constructor,
            argument: si_value,
        }
    }
}

/// Converters by kind name
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn QuantityConverter>>,
    by_name: HashMap<String, usize>,
}

impl ConverterRegistry {
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Every kind in the catalog
    pub fn standard() -> Self {
        macro_rules! register_all {
            ($($kind:ident),+ $(,)?) => {
                ConverterRegistry::new()$(.with_kind::<$kind>())+
            };
        }

        let registry = all_kinds!(register_all);
        tracing::debug!(kinds = registry.len(), "converter registry loaded");
        registry
    }

    pub fn with_kind<Q: QuantityKind>(self) -> Self {
        self.with_converter(KindConverter::<Q>::new())
    }

    pub fn with_converter<C: QuantityConverter + 'static>(mut self, converter: C) -> Self {
        let name = normalize(converter.kind());
        if self.by_name.contains_key(&name) {
            tracing::warn!(kind = converter.kind(), "converter already registered");
            return self;
        }
        self.by_name.insert(name, self.converters.len());
        self.converters.push(Arc::new(converter));
        self
    }

    /// Look up a kind; case, '-', '_' and spaces are ignored
    pub fn get(&self, kind: &str) -> Option<&dyn QuantityConverter> {
        self.by_name
            .get(&normalize(kind))
            .map(|&index| self.converters[index].as_ref())
    }

    /// Shared handle to a converter
    pub fn get_shared(&self, kind: &str) -> Option<Arc<dyn QuantityConverter>> {
        self.by_name.get(&normalize(kind)).map(|&index| Arc::clone(&self.converters[index]))
    }

    /// Kind names in registration order
    pub fn list(&self) -> Vec<&'static str> {
        self.converters.iter().map(|c| c.kind()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn QuantityConverter> {
        self.converters.iter().map(|c| c.as_ref())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
