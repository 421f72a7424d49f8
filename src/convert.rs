/*
    Conversions into raw values of a format
*/

use tracing::trace;

use crate::decimal::{from_string, to_decimal, working_value, Decimal};
use crate::{double, Detector, FixedError, Format, Overflow, Rounding};

/// Converts a double into a raw value of `fmt`.
///
/// The double is rounded with `R` and checked against the range of
/// `fmt` with `O`. NaN is rejected. Infinities always overflow, and
/// their substitute under `Wrap` is zero.
pub fn from_f64<R: Rounding, O: Overflow>(x: f64, fmt: &Format) -> Result<i128, FixedError> {
    if x.is_nan() {
        return Err(FixedError::InvalidFormat("NaN".to_string()));
    } else if x == f64::INFINITY {
        return O::positive_overflow(0, fmt);
    } else if x == f64::NEG_INFINITY {
        return O::negative_overflow(0, fmt);
    }

    let (reduced, working) = double::to_working(x, fmt);
    let (raw, dir) = R::round_f64(reduced, working, fmt);
    Detector::<O>::from_f64(x, raw, dir, fmt)
}

/// Converts a decimal string into a raw value of `fmt`.
///
/// The conversion is exact: the rounding decision sees every digit
/// of `text`, however long.
pub fn from_decimal<R: Rounding, O: Overflow>(text: &str, fmt: &Format) -> Result<i128, FixedError> {
    let (working, source) = from_string(text, fmt)?;
    round_decimal::<R, O>(&source, working, fmt)
}

// Rounds the working value of `source` and checks it for overflow.
fn round_decimal<R: Rounding, O: Overflow>(source: &Decimal, working: i128, fmt: &Format) -> Result<i128, FixedError> {
    let (raw, dir) = R::round_decimal(source, working, fmt);
    Detector::<O>::from_decimal(source, raw, dir, fmt)
}

/// Converts a raw value of `src` into a raw value of `dst`.
///
/// Two cases are handled on raw bits. When `dst` holds every value of
/// `src`, the value is shifted into place. When only fraction bits are
/// lost between formats of equal signedness and no fewer integer bits,
/// the value is rounded with `R`. Both cases gain integer bits, so they
/// cannot overflow. Every other case goes through the exact decimal
/// rendering of the value.
pub fn convert_raw<R: Rounding, O: Overflow>(raw: i128, src: &Format, dst: &Format) -> Result<i128, FixedError> {
    let widens = dst.width() >= src.width()
        && dst.is_signed() == src.is_signed()
        && dst.integer_bits() >= src.integer_bits();

    if widens && dst.frac() >= src.frac() {
        Ok(raw << (dst.frac() - src.frac()))
    } else if widens {
        let (rounded, _) = R::round(raw, src.frac() - dst.frac());
        Ok(rounded)
    } else {
        convert_raw_via_decimal::<R, O>(raw, src, dst)
    }
}

/// Converts a raw value of `src` into a raw value of `dst`
/// through its exact decimal value.
///
/// Negative values headed for an unsigned format are handed to the
/// overflow policy rather than rejected as malformed.
pub fn convert_raw_via_decimal<R: Rounding, O: Overflow>(
    raw: i128,
    src: &Format,
    dst: &Format,
) -> Result<i128, FixedError> {
    let source = to_decimal(raw, src);
    trace!(%source, ?src, ?dst, "converting through decimal");
    let working = working_value(&source, dst)?;
    round_decimal::<R, O>(&source, working, dst)
}
