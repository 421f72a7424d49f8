/*
    Format parameters of a fixed-point number
*/

use std::fmt::Debug;
use std::hash::Hash;

use crate::double;

/// Type-level signedness of a fixed-point number.
pub trait Signedness: Copy + Default + Debug + Eq + Hash + Send + Sync + 'static {
    /// True if the format has a sign bit.
    const SIGNED: bool;
}

/// Marker for two's-complement formats.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Signed;

/// Marker for formats without a sign bit.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Unsigned;

impl Signedness for Signed {
    const SIGNED: bool = true;
}

impl Signedness for Unsigned {
    const SIGNED: bool = false;
}

/** Shape of a fixed-point number.
 *
 * A `Format` describes `W` total bits of which `F` are fraction bits,
 * optionally with a sign bit. All masks and limits of the representation
 * are derived from these three parameters. Raw values are carried as
 * sign-extended `i128` so that doubled working shapes (up to 64 bits)
 * can be described with the same type.
 *
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Format {
    width: usize,
    frac: usize,
    signed: bool,
}

// Constructors and getters
impl Format {
    /// Creates a format with `width` total bits and `frac` fraction bits.
    /// Working formats may be as wide as 64 bits.
    pub const fn new(width: usize, frac: usize, signed: bool) -> Self {
        assert!(1 <= width && width <= 64, "invalid word length, must be 1 <= W <= 64");
        assert!(frac <= width, "invalid fraction length, must be F <= W");
        Self { width, frac, signed }
    }

    /// Creates the format of a storable value.
    /// Storable values are at most 32 bits wide so that products fit in 64 bits.
    pub const fn fixed(width: usize, frac: usize, signed: bool) -> Self {
        assert!(width <= 32, "invalid word length, must be 1 <= W <= 32");
        Self::new(width, frac, signed)
    }

    /// Returns the total bitwidth `W`.
    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of fraction bits `F`.
    #[inline(always)]
    pub const fn frac(&self) -> usize {
        self.frac
    }

    /// Returns true if the format has a sign bit.
    #[inline(always)]
    pub const fn is_signed(&self) -> bool {
        self.signed
    }

    /// Returns the number of integer bits, excluding the sign bit.
    /// This is negative only for signed formats with `W == F`.
    #[inline(always)]
    pub const fn integer_bits(&self) -> isize {
        self.width as isize - self.frac as isize - if self.signed { 1 } else { 0 }
    }

    /// Returns the number of fraction bits carried by values before rounding.
    /// This is `2F`, with a single guard bit when `F` is zero.
    #[inline(always)]
    pub const fn working_bits(&self) -> usize {
        self.frac + if self.frac == 0 { 1 } else { self.frac }
    }

    /// Returns the number of working bits dropped when rounding back to `F`.
    #[inline(always)]
    pub const fn excess_bits(&self) -> usize {
        self.working_bits() - self.frac
    }
}

// Storage
//
// Raw values are held in `i64`/`i128` regardless of width; the buckets
// below are the native widths a hardware implementation would pick,
// and are reported by `Fixed`'s `Debug` output.
impl Format {
    /// Returns the width of the smallest native integer that
    /// holds at least `utl` bits: 8, 16, 32 or 64.
    pub const fn storage_bits(utl: usize) -> usize {
        assert!(utl <= 64, "no native integer holds more than 64 bits");
        if utl <= 8 {
            8
        } else if utl <= 16 {
            16
        } else if utl <= 32 {
            32
        } else {
            64
        }
    }

    /// Returns the native storage width of this format's
    /// double-width working values.
    pub const fn working_storage_bits(&self) -> usize {
        Self::storage_bits(2 * self.width)
    }
}

// Masks and limits
impl Format {
    /// Mask of the low `W` bits.
    pub const fn total_mask(&self) -> i128 {
        (1_i128 << self.width) - 1
    }

    /// Mask of the sign bit and every bit above it.
    /// Zero for unsigned formats.
    pub const fn sign_mask(&self) -> i128 {
        if self.signed {
            !((1_i128 << (self.width - 1)) - 1)
        } else {
            0
        }
    }

    /// Mask of the low `F` bits.
    pub const fn frac_mask(&self) -> i128 {
        (1_i128 << self.frac) - 1
    }

    /// Mask of the integer bits, excluding the sign bit.
    pub const fn int_mask(&self) -> i128 {
        self.total_mask() & !self.sign_mask() & !self.frac_mask()
    }

    /// Smallest raw value.
    pub const fn min_raw(&self) -> i128 {
        if self.signed {
            -(1_i128 << (self.width - 1))
        } else {
            0
        }
    }

    /// Largest raw value.
    pub const fn max_raw(&self) -> i128 {
        if self.signed {
            (1_i128 << (self.width - 1)) - 1
        } else {
            (1_i128 << self.width) - 1
        }
    }

    /// Smallest representable value as a double.
    pub fn min_f64(&self) -> f64 {
        double::to_f64(self.min_raw(), self.frac)
    }

    /// Largest representable value as a double.
    pub fn max_f64(&self) -> f64 {
        double::to_f64(self.max_raw(), self.frac)
    }

    /// Distance between neighboring values as a double.
    pub fn ulp_f64(&self) -> f64 {
        double::to_f64(1, self.frac)
    }

    /// Returns true if `raw` lies within `[MIN, MAX]`.
    pub const fn contains(&self, raw: i128) -> bool {
        self.min_raw() <= raw && raw <= self.max_raw()
    }

    /// Reduces `raw` modulo `2^W`, re-extending the sign bit for signed formats.
    pub const fn wrap(&self, raw: i128) -> i128 {
        let masked = raw & self.total_mask();
        if self.signed && (masked >> (self.width - 1)) & 1 == 1 {
            masked | self.sign_mask()
        } else {
            masked
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masks() {
        let fmt = Format::fixed(8, 4, true);
        assert_eq!(fmt.total_mask(), 0xFF);
        assert_eq!(fmt.sign_mask() & 0xFFFF, 0xFF80);
        assert_eq!(fmt.frac_mask(), 0x0F);
        assert_eq!(fmt.int_mask(), 0x70);

        let fmt = Format::fixed(8, 4, false);
        assert_eq!(fmt.sign_mask(), 0);
        assert_eq!(fmt.int_mask(), 0xF0);

        let fmt = Format::fixed(4, 4, true);
        assert_eq!(fmt.int_mask(), 0);
        assert_eq!(fmt.integer_bits(), -1);
    }

    #[test]
    fn limits() {
        let fmt = Format::fixed(8, 4, true);
        assert_eq!(fmt.min_raw(), -128);
        assert_eq!(fmt.max_raw(), 127);
        assert_eq!(fmt.min_f64(), -8.0);
        assert_eq!(fmt.max_f64(), 7.9375);

        let fmt = Format::fixed(8, 4, false);
        assert_eq!(fmt.min_raw(), 0);
        assert_eq!(fmt.max_raw(), 255);
        assert_eq!(fmt.max_f64(), 15.9375);

        let fmt = Format::fixed(1, 0, true);
        assert_eq!(fmt.min_raw(), -1);
        assert_eq!(fmt.max_raw(), 0);
    }

    #[test]
    fn storage() {
        assert_eq!(Format::storage_bits(1), 8);
        assert_eq!(Format::storage_bits(8), 8);
        assert_eq!(Format::storage_bits(9), 16);
        assert_eq!(Format::storage_bits(17), 32);
        assert_eq!(Format::storage_bits(33), 64);
        assert_eq!(Format::fixed(7, 3, true).working_storage_bits(), 16);
        assert_eq!(Format::fixed(32, 16, true).working_storage_bits(), 64);
    }

    #[test]
    fn wrap() {
        let fmt = Format::fixed(8, 4, true);
        assert_eq!(fmt.wrap(128), -128);
        assert_eq!(fmt.wrap(255), -1);
        assert_eq!(fmt.wrap(256), 0);
        assert_eq!(fmt.wrap(-129), 127);

        let fmt = Format::fixed(8, 4, false);
        assert_eq!(fmt.wrap(-1), 255);
        assert_eq!(fmt.wrap(256), 0);
    }

    #[test]
    fn working_bits() {
        assert_eq!(Format::fixed(8, 4, true).working_bits(), 8);
        assert_eq!(Format::fixed(8, 0, true).working_bits(), 1);
        assert_eq!(Format::fixed(32, 32, false).working_bits(), 64);
    }
}
