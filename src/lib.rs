/*
    Top-level
*/

//! Bit-accurate simulation of fixed-point arithmetic.
//!
//! A [`Fixed`] value carries its word length, fraction length,
//! signedness, overflow policy and rounding mode in its type:
//!
//! ```
//! use fixed_sim::{Fixed, Signed, Wrap};
//!
//! type Fi = Fixed<7, 3, Signed, Wrap>;
//! let x = Fi::from_decimal("6.0").unwrap() + Fi::from_decimal("3.0").unwrap();
//! assert_eq!(x.to_string(), "-7.0");
//! ```

mod detect;
mod error;
mod fixed;
mod format;
mod overflow;
mod round;
mod rounding;

pub mod convert;
pub mod decimal;
pub mod double;

pub use decimal::Decimal;
pub use detect::*;
pub use error::*;
pub use fixed::*;
pub use format::*;
pub use overflow::*;
pub use round::*;
pub use rounding::*;
