/*
    Conversions to and from `Fixed<W, F, S, O, R>`
*/

use std::str::FromStr;

use bitvec::prelude::*;

use super::*;
use crate::{convert, double, FixedError};

// Fallible constructors
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Fixed<W, F, S, O, R> {
    /// Creates a `Fixed` from a double, rounding with `R`
    /// and handling overflow with `O`.
    pub fn from_f64(x: f64) -> Result<Self, FixedError> {
        convert::from_f64::<R, O>(x, &Self::FORMAT).map(Self::from_raw)
    }

    /// Creates a `Fixed` from a decimal string, rounding with `R`
    /// and handling overflow with `O`.
    ///
    /// The string is read exactly, so no digit is lost however long it is.
    ///
    /// ```
    /// use fixed_sim::{Fixed, Signed, Saturate};
    ///
    /// type Fi = Fixed<8, 4, Signed, Saturate>;
    /// assert_eq!(Fi::from_decimal("4.123").unwrap().to_string(), "4.0625");
    /// assert_eq!(Fi::from_decimal("1e3").is_err(), true);
    /// ```
    pub fn from_decimal(text: &str) -> Result<Self, FixedError> {
        convert::from_decimal::<R, O>(text, &Self::FORMAT).map(Self::from_raw)
    }

    /// Creates a `Fixed` from a value of another format,
    /// rounding with `R` and handling overflow with `O`.
    pub fn from_fixed<const W2: usize, const F2: usize, S2: Signedness, O2: Overflow, R2: Rounding>(
        other: &Fixed<W2, F2, S2, O2, R2>,
    ) -> Result<Self, FixedError> {
        let src = Fixed::<W2, F2, S2, O2, R2>::FORMAT;
        convert::convert_raw::<R, O>(other.raw() as i128, &src, &Self::FORMAT).map(Self::from_raw)
    }
}

// Accessors
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Fixed<W, F, S, O, R> {
    /// Returns this value as a double.
    /// Values wider than the double mantissa are rounded.
    pub fn to_f64(&self) -> f64 {
        double::to_f64(self.raw as i128, F)
    }

    /// Returns this value as a float.
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }

    /// Returns the decimal rendering of this value with about
    /// `digits` significant digits, truncating the fraction.
    pub fn to_string_digits(&self, digits: usize) -> String {
        decimal::to_string_digits(self.raw as i128, &Self::FORMAT, digits)
    }

    /// Returns the `W` bits of this value, most significant first.
    pub fn to_binary_string(&self) -> String {
        let mut bits = bitvec![u64, Lsb0; 0; W];
        bits.store_le(self.to_binary(false) as u64);
        bits.iter().rev().map(|b| if *b { '1' } else { '0' }).collect()
    }

    /// Returns the integer digits of this value,
    /// with a minus sign for negative values.
    pub fn integer(&self) -> String {
        decimal::integer_string(self.raw as i128, &Self::FORMAT)
    }

    /// Returns the fraction digits of this value.
    pub fn fraction(&self) -> String {
        decimal::fractional_string(self.raw as i128, &Self::FORMAT)
    }
}

// Implementing `FromStr` for `Fixed`
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> FromStr for Fixed<W, F, S, O, R> {
    type Err = FixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal(s)
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> TryFrom<&str> for Fixed<W, F, S, O, R> {
    type Error = FixedError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::from_decimal(s)
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> TryFrom<f64> for Fixed<W, F, S, O, R> {
    type Error = FixedError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Self::from_f64(x)
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> TryFrom<f32> for Fixed<W, F, S, O, R> {
    type Error = FixedError;

    fn try_from(x: f32) -> Result<Self, Self::Error> {
        Self::from_f64(x as f64)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fixed, Saturate, Signed, Unsigned};

    #[test]
    fn binary_string() {
        type Fi = Fixed<15, 5, Signed, Saturate>;
        assert_eq!(Fi::from_f64(0.9375).unwrap().to_binary_string(), "000000000011110");
        assert_eq!(Fi::from_f64(-1.0).unwrap().to_binary_string(), "111111111100000");

        type Fu = Fixed<15, 1, Unsigned, Saturate>;
        assert_eq!(Fu::from_f64(0.9375).unwrap().to_binary_string(), "000000000000001");
        assert_eq!(Fu::from_f64(1.0).unwrap().to_binary_string(), "000000000000010");
    }

    #[test]
    fn parts() {
        type Fi = Fixed<8, 4, Signed>;
        let x = Fi::from_decimal("-2.5").unwrap();
        assert_eq!(x.integer(), "-2");
        assert_eq!(x.fraction(), "5");
        assert_eq!(x.to_string_digits(3), "-2.50");
    }
}
