use fixed_sim::convert::{convert_raw, convert_raw_via_decimal};
use fixed_sim::*;
use proptest::prelude::*;

macro_rules! convert {
    ($src:ty => $dst:ty: $($input:expr => $expected:expr),* $(,)?) => {
        $(
            let x: $src = $input.parse().unwrap();
            let y = <$dst>::from_fixed(&x).unwrap();
            assert_eq!(y.to_string(), $expected, "conversion of {} into {}", $input, stringify!($dst));
        )*
    };
}

#[test]
fn unsigned_up() {
    convert!(Fixed<8, 4, Unsigned> => Fixed<9, 4, Unsigned>:
        "15.9375" => "15.9375",
        "0.0625" => "0.0625",
        "0" => "0.0",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<12, 6, Unsigned>:
        "15.9375" => "15.9375",
        "7.25" => "7.25",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<9, 4, Signed>:
        "15.9375" => "15.9375",
        "8.5" => "8.5",
    );
}

#[test]
fn unsigned_down() {
    convert!(Fixed<8, 4, Unsigned> => Fixed<7, 4, Unsigned, Saturate>:
        "15.9375" => "7.9375",
        "15.0" => "7.9375",
        "7.95" => "7.9375",
        "3.5" => "3.5",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<7, 4, Unsigned, Wrap>:
        "15.9375" => "7.9375",
        "15.0" => "7.0",
        "8.0" => "0.0",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<8, 3, Unsigned, Throw, Ceil>:
        "15.1875" => "15.25",
        "7.95" => "8.0",
        "0.0625" => "0.125",
        "15.9375" => "16.0",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<8, 3, Unsigned, Throw, Classic>:
        "15.1875" => "15.25",
        "7.95" => "8.0",
        "0.0625" => "0.125",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<8, 3, Unsigned, Throw, Fix>:
        "15.9375" => "15.875",
        "0.0625" => "0.0",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<8, 3, Unsigned, Throw, Floor>:
        "15.9375" => "15.875",
        "0.0625" => "0.0",
    );
}

#[test]
fn signed_up() {
    convert!(Fixed<8, 4, Signed> => Fixed<9, 4, Signed>:
        "7.9375" => "7.9375",
        "-8.0" => "-8.0",
        "-0.0625" => "-0.0625",
    );
    convert!(Fixed<9, 5, Signed, Wrap> => Fixed<10, 5, Signed>:
        "-0.15625" => "-0.15625",
        "7.96875" => "7.96875",
    );
    convert!(Fixed<8, 4, Signed> => Fixed<16, 12, Signed>:
        "-7.1875" => "-7.1875",
    );
}

#[test]
fn signed_down() {
    convert!(Fixed<9, 4, Signed> => Fixed<8, 4, Signed, Saturate>:
        "15.9375" => "7.9375",
        "-15.0" => "-8.0",
        "-8.0" => "-8.0",
        "-7.5" => "-7.5",
    );
    convert!(Fixed<9, 4, Signed> => Fixed<8, 4, Signed, Wrap>:
        "15.9375" => "-0.0625",
        "15.0" => "-1.0",
        "-15.0" => "1.0",
        "-15.9375" => "0.0625",
    );
    convert!(Fixed<9, 4, Signed> => Fixed<9, 3, Signed, Throw, Ceil>:
        "-0.0625" => "0.0",
        "-7.95" => "-7.875",
        "-15.1875" => "-15.125",
        "0.0625" => "0.125",
    );
    convert!(Fixed<9, 4, Signed> => Fixed<9, 3, Signed, Throw, Classic>:
        "-0.0625" => "-0.125",
        "-7.95" => "-8.0",
        "0.0625" => "0.125",
    );
    convert!(Fixed<9, 4, Signed> => Fixed<9, 3, Signed, Throw, Floor>:
        "-0.0625" => "-0.125",
        "-15.1875" => "-15.25",
        "0.0625" => "0.0",
    );
    convert!(Fixed<9, 4, Signed> => Fixed<9, 3, Signed, Throw, Fix>:
        "-0.0625" => "0.0",
        "-15.1875" => "-15.125",
    );
}

#[test]
fn signedness_change() {
    convert!(Fixed<8, 4, Signed> => Fixed<8, 4, Unsigned, Saturate>:
        "-1.0" => "0.0",
        "7.5" => "7.5",
    );
    convert!(Fixed<8, 4, Signed> => Fixed<8, 4, Unsigned, Wrap>:
        "-1.0" => "15.0",
        "-0.0625" => "15.9375",
    );
    convert!(Fixed<8, 4, Unsigned> => Fixed<8, 4, Signed, Wrap>:
        "15.0" => "-1.0",
        "7.9375" => "7.9375",
    );

    type U84 = Fixed<8, 4, Unsigned>;
    type S84 = Fixed<8, 4, Signed>;
    assert_eq!(U84::from_fixed(&"-1.0".parse::<S84>().unwrap()), Err(FixedError::NegativeOverflow));
    assert_eq!(S84::from_fixed(&"8.0".parse::<U84>().unwrap()), Err(FixedError::PositiveOverflow));
}

#[test]
fn conversion_overflow() {
    type S94 = Fixed<9, 4, Signed>;
    type S84 = Fixed<8, 4, Signed>;
    assert_eq!(S84::from_fixed(&"8.0".parse::<S94>().unwrap()), Err(FixedError::PositiveOverflow));
    assert_eq!(S84::from_fixed(&"-8.0625".parse::<S94>().unwrap()), Err(FixedError::NegativeOverflow));
    assert_eq!(S84::from_fixed(&"-8.0".parse::<S94>().unwrap()).unwrap().to_string(), "-8.0");

    // a value that only overflows once rounded
    type S83c = Fixed<8, 3, Signed, Throw, Ceil>;
    type S84x = Fixed<8, 4, Signed>;
    assert_eq!(
        S83c::from_fixed(&"7.9375".parse::<S84x>().unwrap()).unwrap().to_string(),
        "8.0"
    );
    type S73c = Fixed<7, 3, Signed, Throw, Ceil>;
    assert_eq!(
        S73c::from_fixed(&"7.9375".parse::<S84x>().unwrap()),
        Err(FixedError::PositiveOverflow)
    );
}

// Every case the raw paths take must agree with the exact decimal path.
fn oracle<R: Rounding, O: Overflow>(src: Format, dst: Format, seed: u64) -> Result<(), TestCaseError> {
    let span = (src.max_raw() - src.min_raw() + 1) as u64;
    let raw = src.min_raw() + (seed % span) as i128;
    let fast = convert_raw::<R, O>(raw, &src, &dst);
    let slow = convert_raw_via_decimal::<R, O>(raw, &src, &dst);
    prop_assert_eq!(
        fast.clone(),
        slow,
        "{} / {} of raw {} from {:?} into {:?}",
        R::NAME,
        O::NAME,
        raw,
        src,
        dst
    );
    if let Ok(converted) = fast {
        prop_assert!(dst.contains(converted), "{} escaped {:?}", converted, dst);
    }
    Ok(())
}

fn formats() -> impl Strategy<Value = Format> {
    (1_usize..=32, any::<bool>())
        .prop_flat_map(|(width, signed)| (Just(width), 0..=width, Just(signed)))
        .prop_map(|(width, frac, signed)| Format::fixed(width, frac, signed))
}

proptest! {
    #[test]
    fn raw_paths_match_decimal(src in formats(), dst in formats(), seed in any::<u64>()) {
        oracle::<Fix, Saturate>(src, dst, seed)?;
        oracle::<Floor, Wrap>(src, dst, seed)?;
        oracle::<Ceil, Saturate>(src, dst, seed)?;
        oracle::<Classic, Wrap>(src, dst, seed)?;
        oracle::<NearEven, Saturate>(src, dst, seed)?;
        oracle::<NearOdd, Wrap>(src, dst, seed)?;
    }

    #[test]
    fn widening_is_lossless(src in formats(), seed in any::<u64>(), extra_int in 0_usize..4, extra_frac in 0_usize..4) {
        let width = usize::min(src.width() + extra_int + extra_frac, 32);
        let frac = usize::min(src.frac() + extra_frac, width);
        let dst = Format::fixed(width, frac, src.is_signed());
        prop_assume!(dst.integer_bits() >= src.integer_bits() && frac >= src.frac());

        let span = (src.max_raw() - src.min_raw() + 1) as u64;
        let raw = src.min_raw() + (seed % span) as i128;
        let converted = convert_raw::<Fix, Throw>(raw, &src, &dst).unwrap();
        prop_assert_eq!(
            fixed_sim::decimal::to_string(converted, &dst),
            fixed_sim::decimal::to_string(raw, &src)
        );
    }
}
