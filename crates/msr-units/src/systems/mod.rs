//! Predefined unit tables: SI, metric, imperial, and UCUM.
//!
//! Each system exposes its units as `LazyLock` statics plus a registry
//! populated by explicit `register` calls. A malformed definition (a
//! duplicate symbol, a degenerate converter) panics at first access to the
//! table, before any application logic can run on a corrupted registry.

/// Imperial units (inch, foot, pound, gallon, Fahrenheit, ...).
pub mod imperial;

/// Metric units outside the strict SI core (litre, gram, Celsius, hour, ...).
pub mod metric;

/// SI prefixes (kilo, milli, ...).
pub mod prefix;

/// SI base and named derived units.
pub mod si;

/// UCUM compatibility registry (case-sensitive codes).
pub mod ucum;

// Definition tables are data; an error constructing one is a bug in the
// table itself, so the initializers fail fast.
pub(crate) fn table<T>(res: msr_core::Result<T>) -> T {
    res.unwrap_or_else(|e| panic!("unit definition table error: {e}"))
}
