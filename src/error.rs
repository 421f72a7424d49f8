/*
    Errors
*/

use thiserror::Error;

/// Errors raised while constructing or operating on a fixed-point value.
///
/// Overflow is only reported under the `Throw` policy. The other
/// overflow policies substitute a value instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixedError {
    /// The input could not be read as a number.
    #[error("invalid number format: {0}")]
    InvalidFormat(String),

    /// The value exceeded the largest representable value.
    #[error("positive overflow")]
    PositiveOverflow,

    /// The value fell below the smallest representable value.
    #[error("negative overflow")]
    NegativeOverflow,

    /// The divisor was zero.
    #[error("division by zero")]
    DivisionByZero,
}
