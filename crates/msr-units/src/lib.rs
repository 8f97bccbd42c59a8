//! # msr-units
//!
//! Dimensional analysis and units of measure: dimensions, composable unit
//! converters, an algebraic unit type with product simplification, symbol
//! registries, quantities, and the predefined SI/metric/imperial/UCUM
//! tables.
//!
//! ## Quick start
//!
//! ```rust
//! use msr_units::systems::metric::KILOMETRE;
//! use msr_units::systems::si::METRE;
//! use msr_units::Quantity;
//!
//! let five_km = Quantity::new(5.0, KILOMETRE.clone());
//! let metres = Quantity::new(5000.0, METRE.clone());
//! assert_eq!(five_km, metres);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Composable numeric transforms between unit scales.
pub mod converter;

/// Physical dimensions with rational exponents.
pub mod dimension;

/// Product units and the factor-merging simplification core.
pub mod product;

/// Values paired with units.
pub mod quantity;

/// Per-system symbol registries.
pub mod system;

/// Predefined unit tables (SI, metric, imperial, UCUM) and SI prefixes.
pub mod systems;

/// The unit type and its variants.
pub mod unit;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use converter::UnitConverter;
pub use dimension::{BaseDimension, Dimension};
pub use product::Factor;
pub use quantity::Quantity;
pub use system::UnitSystem;
pub use unit::Unit;
