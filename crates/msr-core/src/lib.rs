//! # msr-core
//!
//! Foundation crate for measures-rs: primitive type aliases, the error
//! hierarchy, the bounded rational type used for dimension exponents, and
//! floating-point comparison helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Floating-point comparison helpers.
pub mod comparison;

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Bounded rational numbers (dimension exponents).
pub mod rational;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for converter dividends/divisors and unit powers.
pub type Integer = i64;

/// Exact decimal type, for conversions that must not round through binary
/// floating point.
pub type Decimal = rust_decimal::Decimal;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rational::{gcd, Rational};
