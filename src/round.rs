/*
    Traits relevant to rounding
*/

use std::cmp::Ordering;
use std::fmt::Debug;

use crate::decimal::{unsigned_fractional_string, Decimal};
use crate::Format;

/// The direction a rounding step moved its input.
///
/// The direction is reported by every rounding mode alongside the
/// rounded value. Overflow detection uses it to decide whether an
/// input just outside the representable range was pulled back in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The result was rounded toward negative infinity.
    Down,
    /// No adjustment was made.
    Exact,
    /// The result was rounded toward positive infinity.
    Up,
}

impl Direction {
    /// Returns `-1`, `0` or `+1` for `Down`, `Exact` and `Up`.
    #[inline(always)]
    pub const fn signum(self) -> i32 {
        match self {
            Direction::Down => -1,
            Direction::Exact => 0,
            Direction::Up => 1,
        }
    }
}

/** A value about to lose its lowest bits.
 *
 * The value being rounded is `floor + ε`, where `floor` is an integer
 * number of working units and `ε` is strictly between 0 and 1 when the
 * `sticky` bit is set. Rounding drops the lowest `bits` bits: `kept`
 * is what remains after an arithmetic right shift and `discarded`
 * holds the bits shifted off, always non-negative. Together they
 * describe the value exactly, whatever produced it.
 *
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Split {
    kept: i128,
    discarded: i128,
    bits: usize,
    sticky: bool,
}

// Constructors and getters
impl Split {
    /// Splits `floor` (plus a sticky remainder) into kept and discarded parts.
    pub fn new(floor: i128, bits: usize, sticky: bool) -> Self {
        debug_assert!(bits > 0 || !sticky, "a sticky remainder needs a discarded bit");
        debug_assert!(bits < 127, "cannot discard {} bits", bits);
        let mask = (1_i128 << bits) - 1;
        Self {
            kept: floor >> bits,
            discarded: floor & mask,
            bits,
            sticky,
        }
    }

    /// Returns the value truncated toward negative infinity.
    #[inline(always)]
    pub const fn kept(&self) -> i128 {
        self.kept
    }

    /// Returns the bits shifted off the kept part.
    #[inline(always)]
    pub const fn discarded(&self) -> i128 {
        self.discarded
    }

    /// Returns the number of bits being dropped.
    #[inline(always)]
    pub const fn bits(&self) -> usize {
        self.bits
    }

    /// Returns true if a remainder exists below the last discarded bit.
    #[inline(always)]
    pub const fn sticky(&self) -> bool {
        self.sticky
    }

    /// Returns true if the value is exactly zero.
    pub const fn is_zero(&self) -> bool {
        self.kept == 0 && !self.is_inexact()
    }

    /// Returns true if the value lies below zero.
    pub const fn is_negative(&self) -> bool {
        self.kept < 0
    }

    /// Returns true if any nonzero bits are dropped.
    pub const fn is_inexact(&self) -> bool {
        self.discarded != 0 || self.sticky
    }

    /// Returns true if the kept part is odd.
    pub const fn is_odd(&self) -> bool {
        self.kept & 1 == 1
    }

    /// Compares the dropped part against one half of a kept unit.
    pub fn cmp_half(&self) -> Ordering {
        if self.bits == 0 {
            return Ordering::Less;
        }

        let half = 1_i128 << (self.bits - 1);
        match self.discarded.cmp(&half) {
            Ordering::Equal if self.sticky => Ordering::Greater,
            ord => ord,
        }
    }
}

/// A rounding mode.
///
/// Implementors decide, given a [`Split`], which neighboring
/// representable value the input lands on. The provided methods build
/// the split from the various kinds of working values: bare raw
/// integers, doubles and exact decimal strings.
pub trait Rounding: Copy + Default + Debug + Send + Sync + 'static {
    /// Human-readable name of the mode.
    const NAME: &'static str;

    /// Rounds a split value, returning the kept part after rounding
    /// and the direction it moved.
    fn round_split(split: &Split) -> (i128, Direction);

    /// Drops the lowest `bits` bits of an exact raw value.
    fn round(raw: i128, bits: usize) -> (i128, Direction) {
        Self::round_split(&Split::new(raw, bits, false))
    }

    /// Rounds a working value converted from the double `source`.
    ///
    /// `raw` is `source` scaled by the working bits of `fmt` and truncated
    /// toward zero. Whatever truncation discarded is recovered from `source`.
    fn round_f64(source: f64, raw: i128, fmt: &Format) -> (i128, Direction) {
        let scaled = source * 2_f64.powi(fmt.working_bits() as i32);
        let sticky = scaled.fract() != 0.0;
        let floor = if sticky && source < 0.0 { raw - 1 } else { raw };
        Self::round_split(&Split::new(floor, fmt.excess_bits(), sticky))
    }

    /// Rounds a working value parsed from the decimal `source`.
    ///
    /// `raw` carries the magnitude of `source` truncated to the working
    /// bits of `fmt`. A truncated fraction that no longer renders as the
    /// fraction of `source` means bits were lost.
    fn round_decimal(source: &Decimal, raw: i128, fmt: &Format) -> (i128, Direction) {
        let bits = fmt.working_bits();
        let mask = (1_u128 << bits) - 1;
        let rendered = unsigned_fractional_string(raw.unsigned_abs() & mask, bits);
        let sticky = source.fraction() != rendered;
        let floor = if sticky && source.is_negative() { raw - 1 } else { raw };
        Self::round_split(&Split::new(floor, fmt.excess_bits(), sticky))
    }
}
