/*
    Overflow policies
*/

use std::fmt::Debug;

use tracing::debug;

use crate::{FixedError, Format};

/// An overflow policy.
///
/// When a result falls outside `[MIN, MAX]` of its format, the
/// policy either substitutes a representable value or reports the
/// overflow as an error. `raw` is the out-of-range result in units
/// of the format's ulp.
pub trait Overflow: Copy + Default + Debug + Send + Sync + 'static {
    /// Human-readable name of the policy.
    const NAME: &'static str;

    /// Handles a result above `MAX`.
    fn positive_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError>;

    /// Handles a result below `MIN`.
    fn negative_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError>;
}

/// Keeps the low `W` bits of the result.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Wrap;

/// Clamps the result to `MIN` or `MAX`.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Saturate;

/// Reports the overflow as an error.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Throw;

/// Makes no promise about the result.
///
/// The result currently matches `Wrap`, and the overflow is logged
/// at debug level.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Undefined;

impl Overflow for Wrap {
    const NAME: &'static str = "wrap";

    fn positive_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        Ok(fmt.wrap(raw))
    }

    fn negative_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        Ok(fmt.wrap(raw))
    }
}

impl Overflow for Saturate {
    const NAME: &'static str = "saturate";

    fn positive_overflow(_raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        Ok(fmt.max_raw())
    }

    fn negative_overflow(_raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        Ok(fmt.min_raw())
    }
}

impl Overflow for Throw {
    const NAME: &'static str = "throw";

    fn positive_overflow(_raw: i128, _fmt: &Format) -> Result<i128, FixedError> {
        Err(FixedError::PositiveOverflow)
    }

    fn negative_overflow(_raw: i128, _fmt: &Format) -> Result<i128, FixedError> {
        Err(FixedError::NegativeOverflow)
    }
}

impl Overflow for Undefined {
    const NAME: &'static str = "undefined";

    fn positive_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        debug!(raw, ?fmt, "positive overflow with undefined behavior");
        Ok(fmt.wrap(raw))
    }

    fn negative_overflow(raw: i128, fmt: &Format) -> Result<i128, FixedError> {
        debug!(raw, ?fmt, "negative overflow with undefined behavior");
        Ok(fmt.wrap(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policies() {
        let fmt = Format::fixed(8, 4, true);
        assert_eq!(Wrap::positive_overflow(128, &fmt), Ok(-128));
        assert_eq!(Wrap::negative_overflow(-129, &fmt), Ok(127));
        assert_eq!(Saturate::positive_overflow(128, &fmt), Ok(127));
        assert_eq!(Saturate::negative_overflow(-129, &fmt), Ok(-128));
        assert_eq!(Throw::positive_overflow(128, &fmt), Err(FixedError::PositiveOverflow));
        assert_eq!(Throw::negative_overflow(-129, &fmt), Err(FixedError::NegativeOverflow));
        assert_eq!(Undefined::positive_overflow(128, &fmt), Ok(-128));

        let fmt = Format::fixed(8, 4, false);
        assert_eq!(Wrap::negative_overflow(-16, &fmt), Ok(240));
        assert_eq!(Saturate::negative_overflow(-16, &fmt), Ok(0));
        assert_eq!(Saturate::positive_overflow(256, &fmt), Ok(255));
    }
}
