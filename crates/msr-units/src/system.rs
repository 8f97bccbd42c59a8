//! Symbol registries for named systems of units.
//!
//! A [`UnitSystem`] maps symbols to units.  Each predefined system (SI,
//! metric, imperial, UCUM) is populated exactly once inside a `LazyLock`
//! initializer by explicit `register` calls, and is read-only afterwards;
//! concurrent lookups need no further synchronization.  Registering two
//! distinct units under one symbol signals a bug in a definition table and
//! fails fast.

use crate::unit::Unit;
use msr_core::{Error, Result};
use std::collections::HashMap;

/// A per-system registry of units keyed by symbol.
#[derive(Debug, Clone)]
pub struct UnitSystem {
    name: &'static str,
    units: HashMap<String, Unit>,
}

impl UnitSystem {
    /// Create an empty registry.
    pub fn new(name: &'static str) -> UnitSystem {
        UnitSystem {
            name,
            units: HashMap::new(),
        }
    }

    /// The system's name ("SI", "imperial", ...).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register `unit` under its own symbol.
    pub fn register(&mut self, unit: &Unit) -> Result<()> {
        let symbol = unit.symbol().to_owned();
        self.register_as(symbol, unit)
    }

    /// Register `unit` under an alternate case-sensitive symbol (used for
    /// UCUM compatibility codes).
    ///
    /// Re-registering an equal unit is a no-op; a different unit under an
    /// occupied symbol is [`Error::DuplicateSymbol`].
    pub fn register_as(&mut self, symbol: impl Into<String>, unit: &Unit) -> Result<()> {
        let symbol = symbol.into();
        match self.units.get(&symbol) {
            Some(existing) if existing == unit => Ok(()),
            Some(_) => Err(Error::DuplicateSymbol {
                symbol,
                system: self.name.to_owned(),
            }),
            None => {
                self.units.insert(symbol, unit.clone());
                Ok(())
            }
        }
    }

    /// `true` if a unit equal to `unit` is registered under its symbol.
    pub fn contains(&self, unit: &Unit) -> bool {
        self.units.get(unit.symbol()) == Some(unit)
    }

    /// Look up a unit by exact symbol. A miss is not an error; callers
    /// routinely probe alternate names.
    pub fn from_symbol(&self, symbol: &str) -> Option<&Unit> {
        self.units.get(symbol)
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Iterate over `(symbol, unit)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Unit)> {
        self.units.iter().map(|(s, u)| (s.as_str(), u))
    }
}
