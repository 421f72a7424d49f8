/*
    Conversions between raw values and decimal strings
*/

use num_bigint::BigUint;
use num_traits::ToPrimitive;
use tracing::trace;

use super::*;
use crate::Format;

/// Renders the integer part of `raw`, with a minus sign for negative values.
///
/// The integer part is the magnitude truncated toward zero, so
/// negative values above `-1` render as `"-0"`.
pub fn integer_string(raw: i128, fmt: &Format) -> String {
    let magnitude = raw.unsigned_abs() >> fmt.frac();
    if raw < 0 {
        format!("-{}", magnitude)
    } else {
        magnitude.to_string()
    }
}

/// Renders every fraction digit of `|raw|`.
pub fn fractional_string(raw: i128, fmt: &Format) -> String {
    let mask = fmt.frac_mask() as u128;
    unsigned_fractional_string(raw.unsigned_abs() & mask, fmt.frac())
}

/// Renders `bits / 2^frac` as decimal fraction digits.
///
/// `bits` must be below `2^frac`. The expansion always terminates
/// after at most `frac` digits. Zero renders as `"0"`.
pub fn unsigned_fractional_string(bits: u128, frac: usize) -> String {
    if frac == 0 || bits == 0 {
        return "0".to_string();
    }

    let mask = (1_u128 << frac) - 1;
    let mut rem = bits & mask;
    let mut digits = String::with_capacity(frac);
    while rem != 0 {
        rem *= 10;
        digits.push(char::from(b'0' + (rem >> frac) as u8));
        rem &= mask;
    }
    digits
}

/// Renders exactly `len` fraction digits of `|raw|`,
/// truncating or zero-padding as needed.
pub fn fractional_string_len(raw: i128, fmt: &Format, len: usize) -> String {
    let mut digits = fractional_string(raw, fmt);
    digits.truncate(len);
    while digits.len() < len {
        digits.push('0');
    }
    digits
}

/// Renders `raw` exactly as `[-]integer.fraction`.
pub fn to_string(raw: i128, fmt: &Format) -> String {
    format!("{}.{}", integer_string(raw, fmt), fractional_string(raw, fmt))
}

/// Returns the exact decimal value of `raw`.
pub fn to_decimal(raw: i128, fmt: &Format) -> Decimal {
    let magnitude = raw.unsigned_abs() >> fmt.frac();
    Decimal::from_parts(raw < 0, &magnitude.to_string(), &fractional_string(raw, fmt))
}

/// Renders `raw` with about `digits` significant digits.
///
/// The integer part is never shortened. The fraction is truncated to
/// the remaining digits, keeping at least one.
pub fn to_string_digits(raw: i128, fmt: &Format, digits: usize) -> String {
    let integer = integer_string(raw, fmt);
    let int_digits = integer.trim_start_matches('-').len();
    let len = usize::max(digits.saturating_sub(int_digits), 1);
    format!("{}.{}", integer, fractional_string_len(raw, fmt, len))
}

/// Parses `text` into a working value of `fmt`.
///
/// Returns the parsed decimal along with its working value, see
/// [`working_value`]. A minus sign is rejected for unsigned formats.
pub fn from_string(text: &str, fmt: &Format) -> Result<(i128, Decimal), FixedError> {
    let decimal = Decimal::parse(text, fmt.is_signed())?;
    let raw = working_value(&decimal, fmt)?;
    trace!(text, raw, "parsed decimal");
    Ok((raw, decimal))
}

/// Returns the magnitude of `decimal` truncated to the working bits
/// of `fmt`, negated for negative inputs.
///
/// Integer parts too large for the format are reduced modulo `2^(W+1)`
/// and offset by `2^(W+1)`, which preserves their wrapped value while
/// keeping them out of range.
pub fn working_value(decimal: &Decimal, fmt: &Format) -> Result<i128, FixedError> {
    let bits = fmt.working_bits();

    let mut integer = BigUint::parse_bytes(decimal.integer().as_bytes(), 10)
        .ok_or_else(|| FixedError::InvalidFormat(format!("not an integer: {:?}", decimal.integer())))?;
    let period = BigUint::from(1_u8) << (fmt.width() + 1);
    if integer >= period {
        integer = (integer % &period) + &period;
    }
    let integer = integer
        .to_u128()
        .ok_or_else(|| FixedError::InvalidFormat(format!("integer part out of range: {}", decimal)))?;

    let target = decimal.fraction();
    let mut fraction: u128 = 0;
    for i in (0..bits).rev() {
        let candidate = fraction | (1_u128 << i);
        match cmp_fraction(&unsigned_fractional_string(candidate, bits), target) {
            Ordering::Less => fraction = candidate,
            Ordering::Equal => {
                fraction = candidate;
                break;
            }
            Ordering::Greater => {}
        }
    }

    let magnitude = ((integer << bits) | fraction) as i128;
    Ok(if decimal.is_negative() { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions() {
        let fmt = Format::fixed(8, 8, false);
        assert_eq!(fractional_string(0xFF, &fmt), "99609375");
        assert_eq!(fractional_string(0x80, &fmt), "5");
        assert_eq!(fractional_string(0, &fmt), "0");

        let fmt = Format::fixed(8, 8, true);
        assert_eq!(fractional_string(-1, &fmt), "00390625");
        assert_eq!(fractional_string(-128, &fmt), "5");

        assert_eq!(unsigned_fractional_string(1, 1), "5");
        assert_eq!(unsigned_fractional_string(3, 2), "75");
        assert_eq!(unsigned_fractional_string(5, 0), "0");
    }

    #[test]
    fn strings() {
        let fmt = Format::fixed(8, 4, true);
        assert_eq!(to_string(-128, &fmt), "-8.0");
        assert_eq!(to_string(-1, &fmt), "-0.0625");
        assert_eq!(to_string(127, &fmt), "7.9375");
        assert_eq!(to_string(0, &fmt), "0.0");

        let fmt = Format::fixed(4, 4, true);
        assert_eq!(integer_string(-8, &fmt), "-0");
        assert_eq!(to_string(-8, &fmt), "-0.5");

        let fmt = Format::fixed(8, 0, false);
        assert_eq!(to_string(255, &fmt), "255.0");
    }

    #[test]
    fn digits() {
        let fmt = Format::fixed(16, 8, true);
        // 0x1234 / 256 = 18.203125
        assert_eq!(to_string_digits(0x1234, &fmt, 4), "18.20");
        assert_eq!(to_string_digits(0x1234, &fmt, 2), "18.2");
        assert_eq!(to_string_digits(-0x1234, &fmt, 10), "-18.20312500");
    }

    #[test]
    fn parse() {
        let fmt = Format::fixed(8, 8, true);
        let (raw, dec) = from_string("-0.5", &fmt).unwrap();
        assert_eq!(raw, -(1 << 15));
        assert_eq!(dec.to_string(), "-0.5");

        let fmt = Format::fixed(8, 4, true);
        // 1.1 truncated to 8 fraction bits is 281/256
        let (raw, _) = from_string("1.1", &fmt).unwrap();
        assert_eq!(raw, 281);
        let (raw, _) = from_string("-1.1", &fmt).unwrap();
        assert_eq!(raw, -281);

        // huge integers keep their residue modulo 2^W
        let (raw, _) = from_string("1000000000000000000000000", &fmt).unwrap();
        assert!(raw >> 8 >= 512);
        assert_eq!((raw >> 8) % 256, 1000000000000000000000000_u128.rem_euclid(256) as i128);

        assert!(from_string("-1.0", &Format::fixed(8, 4, false)).is_err());
        let dec: Decimal = "-1.0".parse().unwrap();
        assert_eq!(working_value(&dec, &Format::fixed(8, 4, false)), Ok(-256));
        assert!(from_string("1.2.3", &fmt).is_err());
    }
}
