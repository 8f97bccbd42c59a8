//! Error types for measures-rs.
//!
//! The library distinguishes three families of failure that warrant
//! different caller responses: malformed constructor input (reject the
//! input), dimensional incompatibility (reject the operation), and
//! registry-table corruption (a definition bug, fatal at initialization).
//! Symbol-not-found is *not* an error; lookups return `Option`.

use thiserror::Error;

/// The top-level error type used throughout measures-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid arguments to a constructor or factory: a zero offset, a unit
    /// scale factor, a degenerate rational, a zero factor root, and so on.
    #[error("invalid construction: {0}")]
    Construction(String),

    /// Two distinct units were registered under the same symbol.
    ///
    /// This indicates a bug in a unit definition table, not a runtime
    /// condition to recover from.
    #[error("symbol {symbol:?} already registered in system {system:?} for a different unit")]
    DuplicateSymbol {
        /// The contested symbol.
        symbol: String,
        /// The registry the collision occurred in.
        system: String,
    },

    /// An operation required two units of the same dimension but received
    /// units whose coherent forms differ.
    #[error("incompatible dimensions: {left} vs {right}")]
    IncompatibleDimensions {
        /// Dimension of the left operand, in bracket notation.
        left: String,
        /// Dimension of the right operand, in bracket notation.
        right: String,
    },

    /// A coherent converter was requested for a unit whose factors include a
    /// non-linear (logarithmic) or fractionally-rooted converter.
    #[error("cannot derive a coherent converter: {0}")]
    NonLinearConverter(String),

    /// Rational-exponent arithmetic left the representable `i32` range.
    ///
    /// Repeated rooting or raising can produce exponents that no longer fit
    /// the bounded numerator/denominator representation; this is reported
    /// explicitly rather than truncated.
    #[error("dimension exponent overflow in {0}")]
    ExponentOverflow(&'static str),

    /// A conversion was requested on the exact decimal path for a converter
    /// that is only defined in floating point (logarithmic/exponential).
    #[error("no exact decimal form: {0}")]
    InexactDecimal(String),
}

/// Shorthand `Result` type used throughout measures-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Construction(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use msr_core::ensure;
/// fn positive(x: f64) -> msr_core::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Construction(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Construction(...))` immediately.
///
/// # Example
/// ```
/// use msr_core::fail;
/// fn always_err() -> msr_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Construction(format!($($msg)*)))
    };
}
