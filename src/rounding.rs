/*
    Rounding modes
*/

use std::cmp::Ordering;

use crate::{Direction, Rounding, Split};

/// Rounds toward zero.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Fix;

/// Rounds toward negative infinity.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Floor;

/// Rounds toward positive infinity.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Ceil;

/// Rounds to nearest, ties away from zero.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct Classic;

/// Rounds to nearest, ties to the even neighbor.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct NearEven;

/// Rounds to nearest, ties to the odd neighbor.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct NearOdd;

impl Rounding for Fix {
    const NAME: &'static str = "fix";

    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            (0, Direction::Exact)
        } else if split.is_negative() {
            (split.kept() + split.is_inexact() as i128, Direction::Up)
        } else {
            (split.kept(), Direction::Down)
        }
    }
}

impl Rounding for Floor {
    const NAME: &'static str = "floor";

    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            (0, Direction::Exact)
        } else {
            (split.kept(), Direction::Down)
        }
    }
}

impl Rounding for Ceil {
    const NAME: &'static str = "ceil";

    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            (0, Direction::Exact)
        } else {
            (split.kept() + split.is_inexact() as i128, Direction::Up)
        }
    }
}

impl Rounding for Classic {
    const NAME: &'static str = "classic";

    // Negative inputs only report `Down` when they move toward zero and
    // `Exact` otherwise, so any negative input below MIN overflows.
    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            return (0, Direction::Exact);
        }

        let kept = split.kept();
        match (split.is_negative(), split.cmp_half()) {
            (true, Ordering::Greater) => (kept + 1, Direction::Down),
            (true, _) => (kept, Direction::Exact),
            (false, Ordering::Less) => (kept, Direction::Down),
            (false, _) => (kept + 1, Direction::Up),
        }
    }
}

impl Rounding for NearEven {
    const NAME: &'static str = "near-even";

    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            return (0, Direction::Exact);
        }

        let kept = split.kept();
        match split.cmp_half() {
            Ordering::Less => (kept, Direction::Down),
            Ordering::Greater => (kept + 1, Direction::Up),
            Ordering::Equal if split.is_odd() => (kept + 1, Direction::Up),
            Ordering::Equal => (kept, Direction::Down),
        }
    }
}

impl Rounding for NearOdd {
    const NAME: &'static str = "near-odd";

    fn round_split(split: &Split) -> (i128, Direction) {
        if split.is_zero() {
            return (0, Direction::Exact);
        }

        let kept = split.kept();
        match split.cmp_half() {
            Ordering::Less => (kept, Direction::Down),
            Ordering::Greater => (kept + 1, Direction::Up),
            Ordering::Equal if split.is_odd() => (kept, Direction::Down),
            Ordering::Equal => (kept + 1, Direction::Up),
        }
    }
}
