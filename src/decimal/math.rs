/*
    Arithmetic on decimal strings
*/

use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::One;

use super::*;

/// Returns true if the decimal `a` is less than the decimal `b`.
pub fn less(a: &str, b: &str) -> Result<bool, FixedError> {
    Ok(Decimal::from_str(a)? < Decimal::from_str(b)?)
}

/// Returns true if the decimal `a` is greater than the decimal `b`.
pub fn greater(a: &str, b: &str) -> Result<bool, FixedError> {
    Ok(Decimal::from_str(a)? > Decimal::from_str(b)?)
}

/// Returns true if the decimals `a` and `b` have the same value,
/// regardless of how they are written.
pub fn equal(a: &str, b: &str) -> Result<bool, FixedError> {
    Ok(Decimal::from_str(a)? == Decimal::from_str(b)?)
}

/// Adds one to a signed decimal integer.
///
/// Overflow detection does not use this; its limits come from
/// `to_decimal` of the raw values just past `MIN` and `MAX`.
pub fn plus_one(a: &str) -> Result<String, FixedError> {
    let n = BigInt::from_str(a).map_err(|e| FixedError::InvalidFormat(format!("{:?}: {}", a, e)))?;
    Ok((n + BigInt::one()).to_string())
}
