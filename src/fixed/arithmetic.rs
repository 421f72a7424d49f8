/*
    Arithmetic on `Fixed<W, F, S, O, R>`
*/

use std::ops::*;

use num_integer::Integer;
use num_traits::{Bounded, Zero};

use super::*;
use crate::{convert, Detector, FixedError, Split};

// Checked arithmetic
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Fixed<W, F, S, O, R> {
    // Runs overflow detection on an exact raw result.
    fn detect(raw: i128) -> Result<Self, FixedError> {
        Detector::<O>::from_fixed_point(raw, &Self::FORMAT).map(Self::from_raw)
    }

    /// Adds two values. Only fails under the `Throw` policy.
    pub fn try_add(self, rhs: Self) -> Result<Self, FixedError> {
        Self::detect(self.raw as i128 + rhs.raw as i128)
    }

    /// Subtracts `rhs` from this value. Only fails under the `Throw` policy.
    pub fn try_sub(self, rhs: Self) -> Result<Self, FixedError> {
        Self::detect(self.raw as i128 - rhs.raw as i128)
    }

    /// Multiplies two values.
    ///
    /// The exact product has `2F` fraction bits and is rounded back
    /// to `F` with `R` before overflow detection.
    pub fn try_mul(self, rhs: Self) -> Result<Self, FixedError> {
        let (raw, _) = R::round(self.raw as i128 * rhs.raw as i128, F);
        Self::detect(raw)
    }

    /// Divides this value by `rhs`.
    ///
    /// The quotient is computed with one guard bit and a sticky bit for
    /// the remainder, which is enough to round it exactly with `R`.
    /// Dividing by zero fails under every policy.
    pub fn try_div(self, rhs: Self) -> Result<Self, FixedError> {
        if rhs.raw == 0 {
            return Err(FixedError::DivisionByZero);
        }

        let num = (self.raw as i128) << (F + 1);
        let (q, r) = num.div_mod_floor(&(rhs.raw as i128));
        let (raw, _) = R::round_split(&Split::new(q, 1, r != 0));
        Self::detect(raw)
    }

    /// Negates this value. Fails under the `Throw` policy for `MIN` of
    /// a signed format and for any nonzero unsigned value.
    pub fn try_neg(self) -> Result<Self, FixedError> {
        Self::detect(-(self.raw as i128))
    }

    /// Returns the absolute value. Fails under the `Throw` policy
    /// for `MIN` of a signed format.
    pub fn try_abs(self) -> Result<Self, FixedError> {
        if self.raw < 0 {
            self.try_neg()
        } else {
            Ok(self)
        }
    }

    /// Shifts the raw bits left by `n`, multiplying by `2^n`.
    pub fn try_shl(self, n: u32) -> Result<Self, FixedError> {
        let raw = self.raw as i128;
        if n < 64 {
            Self::detect(raw << n)
        } else {
            // every bit of a 32-bit value is shifted out
            Self::detect(raw.signum() << 96)
        }
    }

    /// Shifts the raw bits right by `n`, dividing by `2^n`.
    /// The bits shifted out are rounded with `R`.
    pub fn try_shr(self, n: u32) -> Result<Self, FixedError> {
        let (raw, _) = R::round(self.raw as i128, usize::min(n as usize, 64));
        Self::detect(raw)
    }

    /// Multiplies by a value of another format with the same signedness.
    ///
    /// The exact product is formed in a working format of `W + W2` bits
    /// with `F + F2` fraction bits, then converted into this format with
    /// `R` and `O` as if by [`Fixed::from_fixed`].
    pub fn try_mul_fixed<const W2: usize, const F2: usize, O2: Overflow, R2: Rounding>(
        self,
        rhs: &Fixed<W2, F2, S, O2, R2>,
    ) -> Result<Self, FixedError> {
        let working = Format::new(W + W2, F + F2, S::SIGNED);
        let product = self.raw as i128 * rhs.raw() as i128;
        convert::convert_raw::<R, O>(product, &working, &Self::FORMAT).map(Self::from_raw)
    }

    /// Multiplies by a value of another format with the same signedness.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows under the `Throw` policy.
    pub fn mul_fixed<const W2: usize, const F2: usize, O2: Overflow, R2: Rounding>(
        self,
        rhs: &Fixed<W2, F2, S, O2, R2>,
    ) -> Self {
        match self.try_mul_fixed(rhs) {
            Ok(x) => x,
            Err(e) => panic!("fixed-point multiplication failed: {}", e),
        }
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics on `MIN` of a signed format under the `Throw` policy.
    pub fn abs(self) -> Self {
        match self.try_abs() {
            Ok(x) => x,
            Err(e) => panic!("fixed-point absolute value failed: {}", e),
        }
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:ident, $rhs:ty, $name:literal) => {
        impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> $trait<$rhs>
            for Fixed<W, F, S, O, R>
        {
            type Output = Self;

            #[doc = concat!("Performs fixed-point ", $name, ".")]
            ///
            /// # Panics
            ///
            /// Panics if the result overflows under the `Throw` policy,
            /// or on division by zero.
            fn $method(self, rhs: $rhs) -> Self {
                match self.$checked(rhs) {
                    Ok(x) => x,
                    Err(e) => panic!("fixed-point {} failed: {}", $name, e),
                }
            }
        }

        impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> $assign_trait<$rhs>
            for Fixed<W, F, S, O, R>
        {
            fn $assign_method(&mut self, rhs: $rhs) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign, try_add, Fixed<W, F, S, O, R>, "addition");
impl_binary_op!(Sub, sub, SubAssign, sub_assign, try_sub, Fixed<W, F, S, O, R>, "subtraction");
impl_binary_op!(Mul, mul, MulAssign, mul_assign, try_mul, Fixed<W, F, S, O, R>, "multiplication");
impl_binary_op!(Div, div, DivAssign, div_assign, try_div, Fixed<W, F, S, O, R>, "division");
impl_binary_op!(Shl, shl, ShlAssign, shl_assign, try_shl, u32, "left shift");
impl_binary_op!(Shr, shr, ShrAssign, shr_assign, try_shr, u32, "right shift");

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Neg for Fixed<W, F, S, O, R> {
    type Output = Self;

    /// # Panics
    ///
    /// Panics if the result overflows under the `Throw` policy.
    fn neg(self) -> Self {
        match self.try_neg() {
            Ok(x) => x,
            Err(e) => panic!("fixed-point negation failed: {}", e),
        }
    }
}

// Bitwise operators act on the raw bits and never overflow
macro_rules! impl_bitwise_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> $trait
            for Fixed<W, F, S, O, R>
        {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::from_raw(self.raw as i128 $op rhs.raw as i128)
            }
        }

        impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> $assign_trait
            for Fixed<W, F, S, O, R>
        {
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

impl_bitwise_op!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_bitwise_op!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_bitwise_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Not for Fixed<W, F, S, O, R> {
    type Output = Self;

    fn not(self) -> Self {
        Self::from_binary(!self.raw)
    }
}

// Implementing `num_traits` for `Fixed`
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Zero for Fixed<W, F, S, O, R> {
    fn zero() -> Self {
        Self::new()
    }

    fn is_zero(&self) -> bool {
        self.raw == 0
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Bounded for Fixed<W, F, S, O, R> {
    fn min_value() -> Self {
        Self::MIN
    }

    fn max_value() -> Self {
        Self::MAX
    }
}
