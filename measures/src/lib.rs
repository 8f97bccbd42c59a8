//! # measures
//!
//! A dimensional-analysis and units-of-measure library.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `msr-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! measures = "0.1"
//! ```
//!
//! ```rust
//! use measures::units::systems::si::{METRE, SECOND};
//! use measures::units::Quantity;
//!
//! let speed = &*METRE / &*SECOND;
//! let q = Quantity::new(3.0, speed);
//! assert_eq!(q.to_string(), "3 m·s^-1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, the rational exponent type, and error definitions.
pub use msr_core as core;

/// Dimensions, converters, units, registries, quantities, and tables.
pub use msr_units as units;

pub use msr_core::{Error, Result};
pub use msr_units::{BaseDimension, Dimension, Quantity, Unit, UnitConverter, UnitSystem};
