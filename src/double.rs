/*
    Conversions between doubles and raw values
*/

use crate::Format;

/// Interprets `raw` as a number with `frac` fraction bits
/// and returns it as a double, i.e. `raw / 2^frac`.
/// Precision is lost once `raw` exceeds the double mantissa.
pub fn to_f64(raw: i128, frac: usize) -> f64 {
    raw as f64 / 2_f64.powi(frac as i32)
}

/// Reduces `x` into the window `[lower, upper)` modulo `upper - lower`.
///
/// Values already inside the window are returned unchanged. Values
/// outside are reduced with two remainder operations: the first yields
/// a positive residue, the second folds it into a window that need
/// not start at zero. This handles inputs arbitrarily far out of
/// range, e.g. `1e40`.
pub fn limit_to_range(x: f64, lower: f64, upper: f64) -> f64 {
    if x < lower || x >= upper {
        let range = upper - lower;
        let small = x % range + range;
        (small - lower) % range + lower
    } else {
        x
    }
}

/// Converts a double into a working value of `fmt`.
///
/// The double is first reduced into twice the representable range,
/// `[2 * MIN, 2 * (MAX + ulp))`, which is exactly one wrap period
/// of the doubled working shape. The reduced value is then scaled by
/// `2^working_bits` and truncated toward zero. Returns the reduced
/// double along with the working raw value, since rounding needs the
/// former to recover the bits lost by truncation.
pub fn to_working(x: f64, fmt: &Format) -> (f64, i128) {
    let lower = 2.0 * fmt.min_f64();
    let upper = 2.0 * (fmt.max_f64() + fmt.ulp_f64());
    let g = limit_to_range(x, lower, upper);
    let scaled = g * 2_f64.powi(fmt.working_bits() as i32);
    (g, scaled.trunc() as i128)
}
