/*
    Exact decimal numbers
*/

mod convert;
mod math;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::FixedError;

pub use convert::*;
pub use math::*;

/** An exact decimal number.
 *
 * Every value of a fixed-point format has a terminating decimal
 * expansion, so a `Decimal` can hold any of them without loss. The
 * representation is canonical: the integer digits have no leading
 * zeros, the fraction digits have no trailing zeros, either part is
 * `"0"` when empty, and zero is never negative.
 *
 */
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

// Parser states
#[derive(Copy, Clone, PartialEq, Eq)]
enum State {
    Integer,
    Fraction,
}

// Constructors and getters
impl Decimal {
    /// Creates a decimal from its sign and digit strings,
    /// normalizing it to canonical form.
    pub(crate) fn from_parts(negative: bool, integer: &str, fraction: &str) -> Self {
        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            s => s,
        };
        let fraction = match fraction.trim_end_matches('0') {
            "" => "0",
            s => s,
        };
        let zero = integer == "0" && fraction == "0";
        Self {
            negative: negative && !zero,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        }
    }

    /// Parses a decimal string of the form `[+|-][digits][.digits]`.
    ///
    /// An empty string reads as zero. A minus sign is rejected unless
    /// `signed` is set.
    pub fn parse(text: &str, signed: bool) -> Result<Self, FixedError> {
        let (sign, integer, fraction) = Self::parts(text, signed)?;
        Ok(Self::from_parts(sign < 0, &integer, &fraction))
    }

    /// Splits a decimal string into its sign, integer digits and fraction digits.
    ///
    /// Unlike [`Decimal::parse`], the digit strings are returned as written,
    /// only with leading integer zeros and trailing fraction zeros removed.
    /// The sign of zero is preserved. Missing parts read as `"0"`.
    ///
    /// ```
    /// use fixed_sim::Decimal;
    ///
    /// assert_eq!(Decimal::parts("-.9123", true).unwrap(), (-1, "0".to_string(), "9123".to_string()));
    /// ```
    pub fn parts(text: &str, signed: bool) -> Result<(i32, String, String), FixedError> {
        let bytes = text.as_bytes();
        let mut sign = 1;
        let mut start = 0;
        match bytes.first() {
            Some(b'-') if signed => {
                sign = -1;
                start = 1;
            }
            Some(b'-') => {
                return Err(FixedError::InvalidFormat(
                    "an unsigned number cannot have a negative sign".to_string(),
                ))
            }
            Some(b'+') => start = 1,
            _ => {}
        }

        if text.is_empty() {
            return Ok((1, "0".to_string(), "0".to_string()));
        }

        let mut state = State::Integer;
        let mut integer = String::new();
        let mut fraction = String::new();
        for &b in &bytes[start..] {
            match (state, b) {
                (_, b'0'..=b'9') => {
                    if state == State::Integer {
                        integer.push(b as char)
                    } else {
                        fraction.push(b as char)
                    }
                }
                (State::Integer, b'.') => state = State::Fraction,
                _ => {
                    return Err(FixedError::InvalidFormat(format!(
                        "unexpected character {:?} in {:?}",
                        b as char, text
                    )))
                }
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return Err(FixedError::InvalidFormat(format!("no digits in {:?}", text)));
        }

        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            s => s,
        };
        let fraction = match fraction.trim_end_matches('0') {
            "" => "0",
            s => s,
        };
        Ok((sign, integer.to_string(), fraction.to_string()))
    }

    /// Returns true if this number is below zero.
    #[inline(always)]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns true if this number is zero.
    pub fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction == "0"
    }

    /// Returns the digits before the decimal point.
    #[inline(always)]
    pub fn integer(&self) -> &str {
        &self.integer
    }

    /// Returns the digits after the decimal point.
    #[inline(always)]
    pub fn fraction(&self) -> &str {
        &self.fraction
    }
}

// Compares two fraction digit strings as if both were zero-padded
// to the same length.
pub(crate) fn cmp_fraction(a: &str, b: &str) -> Ordering {
    let len = usize::max(a.len(), b.len());
    let pad = |s: &str| {
        s.bytes()
            .chain(std::iter::repeat(b'0'))
            .take(len)
            .collect::<Vec<u8>>()
    };
    pad(a).cmp(&pad(b))
}

// Compares the magnitudes of two decimals.
fn cmp_magnitude(a: &Decimal, b: &Decimal) -> Ordering {
    a.integer
        .len()
        .cmp(&b.integer.len())
        .then_with(|| a.integer.cmp(&b.integer))
        .then_with(|| cmp_fraction(&a.fraction, &b.fraction))
}

// Implementing `Ord` for `Decimal`
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => cmp_magnitude(self, other),
            (true, true) => cmp_magnitude(other, self),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Implementing `Display` for `Decimal`
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.negative { "-" } else { "" };
        f.pad(&format!("{}{}.{}", sign, self.integer, self.fraction))
    }
}

// Implementing `FromStr` for `Decimal`
impl FromStr for Decimal {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, true)
    }
}
