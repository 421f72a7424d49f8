/*
    Overflow detection
*/

use std::marker::PhantomData;

use tracing::trace;

use crate::decimal::{to_decimal, Decimal};
use crate::{Direction, FixedError, Format, Overflow};

/** Overflow detection for a given policy.
 *
 * Each constructor of a fixed-point value ends with a detection step:
 * the rounded raw result is checked against `[MIN, MAX]` and handed to
 * the overflow policy `O` if it escaped. Results of integer arithmetic
 * are checked directly. Results converted from doubles or decimal
 * strings are checked against their source, since rounding may pull an
 * input just outside the range back onto `MIN` or `MAX`.
 *
 */
#[derive(Copy, Clone, Default, Debug)]
pub struct Detector<O: Overflow>(PhantomData<O>);

impl<O: Overflow> Detector<O> {
    /// Checks an exact raw result.
    pub fn from_fixed_point(raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        if raw > fmt.max_raw() {
            trace!(raw, policy = O::NAME, "positive overflow");
            O::positive_overflow(raw, fmt)
        } else if raw < fmt.min_raw() {
            trace!(raw, policy = O::NAME, "negative overflow");
            O::negative_overflow(raw, fmt)
        } else {
            Ok(raw)
        }
    }

    /// Checks a raw result rounded from the double `source`.
    ///
    /// An input above `MAX` is accepted only if rounding moved it down by
    /// less than one ulp. An input below `MIN` is accepted only if
    /// rounding moved it up by less than one ulp.
    pub fn from_f64(source: f64, raw: i128, dir: Direction, fmt: &Format) -> Result<i128, FixedError> {
        let max_round_change = dir.signum() as f64 * fmt.ulp_f64();
        let min = fmt.min_f64();
        let max = fmt.max_f64();

        if source < min && min - source >= max_round_change {
            trace!(source, raw, ?dir, policy = O::NAME, "negative overflow");
            O::negative_overflow(raw, fmt)
        } else if source > max && source - max >= -max_round_change {
            trace!(source, raw, ?dir, policy = O::NAME, "positive overflow");
            O::positive_overflow(raw, fmt)
        } else {
            debug_assert!(fmt.contains(raw), "{} escaped {:?}", raw, fmt);
            Ok(raw)
        }
    }

    /// Checks a raw result rounded from the decimal `source`.
    ///
    /// The bounds are the exact neighbors just past `MAX` and `MIN`,
    /// so the check holds for every format, including `W == F`.
    /// A nonzero result whose sign differs from `source` has wrapped
    /// and is always an overflow.
    pub fn from_decimal(source: &Decimal, raw: i128, dir: Direction, fmt: &Format) -> Result<i128, FixedError> {
        let flipped = raw != 0 && (raw < 0) != source.is_negative();
        let overflow = if flipped {
            true
        } else if *source > to_decimal(fmt.max_raw(), fmt) {
            dir != Direction::Down || *source >= to_decimal(fmt.max_raw() + 1, fmt)
        } else if *source < to_decimal(fmt.min_raw(), fmt) {
            dir != Direction::Up || *source <= to_decimal(fmt.min_raw() - 1, fmt)
        } else {
            false
        };

        if !overflow {
            debug_assert!(fmt.contains(raw), "{} escaped {:?}", raw, fmt);
            Ok(raw)
        } else if source.is_negative() {
            trace!(%source, raw, ?dir, policy = O::NAME, "negative overflow");
            O::negative_overflow(raw, fmt)
        } else {
            trace!(%source, raw, ?dir, policy = O::NAME, "positive overflow");
            O::positive_overflow(raw, fmt)
        }
    }
}
