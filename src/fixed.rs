/*
    Fixed-point numbers
*/

mod arithmetic;
mod convert;
#[cfg(feature = "serde")]
mod serialize;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::decimal;
use crate::{Fix, Format, Overflow, Rounding, Signed, Signedness, Throw};

/** A fixed-point number with compile-time format and policies.
 *
 * The const generics `W` and `F` give the total number of bits and the
 * number of fraction bits, with `1 <= W <= 32` and `F <= W`. `S` selects
 * two's-complement or unsigned storage. The overflow policy `O` and the
 * rounding mode `R` decide what every constructor and arithmetic
 * operation does with results that do not fit.
 *
 * The value is `raw / 2^F`, where `raw` always lies in `[MIN, MAX]`
 * and is stored sign-extended. Values are plain data: copying one
 * copies the number and two values compare by their raw bits.
 *
 */
pub struct Fixed<const W: usize, const F: usize, S: Signedness, O: Overflow = Throw, R: Rounding = Fix> {
    raw: i64,
    _policies: PhantomData<(S, O, R)>,
}

// Format parameters
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Fixed<W, F, S, O, R> {
    /// Total bitwidth `W`.
    pub const WORD_LENGTH: usize = W;
    /// Number of fraction bits `F`.
    pub const FRACTION_LENGTH: usize = F;
    /// True if the format has a sign bit.
    pub const SIGNED: bool = S::SIGNED;
    /// Runtime description of this format.
    pub const FORMAT: Format = Format::fixed(W, F, S::SIGNED);

    /// Smallest representable value.
    pub const MIN: Self = Self::from_raw_unchecked(Self::FORMAT.min_raw());
    /// Largest representable value.
    pub const MAX: Self = Self::from_raw_unchecked(Self::FORMAT.max_raw());

    /// Returns the smallest representable value.
    #[inline(always)]
    pub const fn min_val() -> Self {
        Self::MIN
    }

    /// Returns the largest representable value.
    #[inline(always)]
    pub const fn max_val() -> Self {
        Self::MAX
    }
}

// Constructors and getters
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Fixed<W, F, S, O, R> {
    // Wraps a raw value already known to be in range.
    const fn from_raw_unchecked(raw: i128) -> Self {
        Self {
            raw: raw as i64,
            _policies: PhantomData,
        }
    }

    // Wraps a raw value produced by overflow detection.
    pub(crate) fn from_raw(raw: i128) -> Self {
        debug_assert!(Self::FORMAT.contains(raw), "{} escaped {:?}", raw, Self::FORMAT);
        Self::from_raw_unchecked(raw)
    }

    /// Creates a new `Fixed` initialized to zero.
    pub const fn new() -> Self {
        Self::from_raw_unchecked(Self::FORMAT.wrap(0))
    }

    /// Creates a `Fixed` from a bit pattern.
    ///
    /// Bits beyond `W` are ignored and, for signed formats,
    /// bit `W - 1` is re-extended as the sign.
    pub const fn from_binary(bits: i64) -> Self {
        Self::from_raw_unchecked(Self::FORMAT.wrap(bits as i128))
    }

    /// Returns the raw sign-extended value, i.e. the value times `2^F`.
    #[inline(always)]
    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// Returns the bit pattern of this `Fixed`.
    ///
    /// With `extend_sign`, negative values keep their sign extension.
    /// Without it, the result is masked to the low `W` bits.
    pub const fn to_binary(&self, extend_sign: bool) -> i64 {
        if extend_sign {
            self.raw
        } else {
            (self.raw as i128 & Self::FORMAT.total_mask()) as i64
        }
    }

    /// Returns true if this value is zero.
    #[inline(always)]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// Returns true if this value is below zero.
    #[inline(always)]
    pub const fn is_negative(&self) -> bool {
        self.raw < 0
    }
}

// Implementing `Default`
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Default for Fixed<W, F, S, O, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Clone for Fixed<W, F, S, O, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Copy for Fixed<W, F, S, O, R> {}

// Comparisons
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> PartialEq for Fixed<W, F, S, O, R> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Eq for Fixed<W, F, S, O, R> {}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> PartialOrd for Fixed<W, F, S, O, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Ord for Fixed<W, F, S, O, R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> Hash for Fixed<W, F, S, O, R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

// Formatting
impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> fmt::Display
    for Fixed<W, F, S, O, R>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&decimal::to_string(self.raw as i128, &Self::FORMAT))
    }
}

impl<const W: usize, const F: usize, S: Signedness, O: Overflow, R: Rounding> fmt::Debug for Fixed<W, F, S, O, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fixed")
            .field("format", &Self::FORMAT)
            .field("overflow", &O::NAME)
            .field("rounding", &R::NAME)
            .field("storage", &Format::storage_bits(W))
            .field("working_storage", &Self::FORMAT.working_storage_bits())
            .field("raw", &self.raw)
            .field("value", &format_args!("{}", self))
            .finish()
    }
}

/// Alias for `Fixed<8, 7, Signed>`
pub type Q7 = Fixed<8, 7, Signed>;
/// Alias for `Fixed<16, 15, Signed>`
pub type Q15 = Fixed<16, 15, Signed>;
/// Alias for `Fixed<32, 31, Signed>`
pub type Q31 = Fixed<32, 31, Signed>;
