//! Per-kind unit registry
//!
//! Built once per quantity kind on first use, then only read.

use std::collections::HashMap;
use crate::symbol::{decompose, signature, SymbolAndPower};
use crate::{QuantityKind, Unit};

/// Lookup tables over the units of one quantity kind
pub struct UnitRegistry<Q> {
    by_symbol: HashMap<&'static str, Unit<Q>>,
    by_alias: HashMap<&'static str, Unit<Q>>,
    signatures: Vec<(Vec<SymbolAndPower>, Unit<Q>)>,
}

impl<Q: QuantityKind> UnitRegistry<Q> {
    /// Build the tables from `Q::UNITS`
    pub fn build() -> Self {
        let mut registry = UnitRegistry {
            by_symbol: HashMap::with_capacity(Q::UNITS.len()),
            by_alias: HashMap::new(),
            signatures: Vec::with_capacity(Q::UNITS.len()),
        };

        for &unit in Q::UNITS {
            registry.register(unit);
        }
        for &unit in Q::UNITS {
            for &alias in unit.aliases() {
                registry.alias(alias, unit);
            }
            registry.alias(unit.name(), unit);
        }

        tracing::debug!(
            kind = Q::NAME,
            units = registry.by_symbol.len(),
            aliases = registry.by_alias.len(),
            "unit registry built"
        );
        registry
    }

    fn register(&mut self, unit: Unit<Q>) {
        if self.by_symbol.contains_key(unit.symbol()) {
            tracing::warn!(kind = Q::NAME, symbol = unit.symbol(), "duplicate unit symbol ignored");
            return;
        }
        self.by_symbol.insert(unit.symbol(), unit);

        if let Some(factors) = decompose(unit.symbol()) {
            let signature = signature(&factors);
            match self.signatures.iter().find(|(s, _)| *s == signature) {
                Some((_, existing)) => {
                    tracing::warn!(
                        kind = Q::NAME,
                        symbol = unit.symbol(),
                        existing = existing.symbol(),
                        "composite symbol already claimed"
                    );
                }
                None => self.signatures.push((signature, unit)),
            }
        }
    }

    fn alias(&mut self, alias: &'static str, unit: Unit<Q>) {
        if alias.is_empty() || self.by_symbol.contains_key(alias) {
            return;
        }
        if let Some(existing) = self.by_alias.get(alias) {
            if *existing != unit {
                tracing::warn!(kind = Q::NAME, alias, existing = existing.symbol(), "ambiguous alias ignored");
            }
            return;
        }
        self.by_alias.insert(alias, unit);
    }

    /// Exact symbol lookup
    pub fn get(&self, symbol: &str) -> Option<Unit<Q>> {
        self.by_symbol.get(symbol).copied()
    }

    /// Alias or unit name lookup
    pub fn get_alias(&self, alias: &str) -> Option<Unit<Q>> {
        self.by_alias.get(alias).copied()
    }

    /// Find the unit whose symbol has the same normalized factors
    pub fn match_signature(&self, signature: &[SymbolAndPower]) -> Option<Unit<Q>> {
        self.signatures
            .iter()
            .find(|(s, _)| s.as_slice() == signature)
            .map(|&(_, unit)| unit)
    }

    /// Resolve already-trimmed text: exact symbol, then alias or name, then
    /// composite symbol algebra.
    pub fn resolve(&self, text: &str) -> Option<Unit<Q>> {
        if let Some(unit) = self.get(text) {
            return Some(unit);
        }
        if let Some(unit) = self.get_alias(text) {
            return Some(unit);
        }
        let factors = decompose(text)?;
        self.match_signature(&signature(&factors))
    }

    /// All unit symbols
    pub fn symbols(&self) -> Vec<&'static str> {
        Q::UNITS.iter().map(|u| u.symbol()).collect()
    }

    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }
}
