//! Precision abstraction over the scalar types the demonstrations compare.
//!
//! A [`Precision`] is a capability set: additive identity, the standard
//! limits (epsilon, largest finite value, smallest normal and subnormal),
//! the special values, ordinary arithmetic and a fixed-point renderer. The
//! reduction routines are written once against this trait and instantiated
//! for:
//!
//! * `f32` and `f64`, implemented through [`num_traits::Float`],
//! * [`DoubleDouble`], the portable stand-in for compiler-specific extended
//!   types such as `long double` or `__float128`.
//!
//! Nothing here raises errors. Degenerate operations (`1/0`, `0/0`, `ln(0)`,
//! `sqrt(-1)`) produce the IEEE-754 special values for every implementation.
//!
//! [`DoubleDouble`]: crate::engine::double_double::DoubleDouble

use std::fmt;
use std::num::FpCategory;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use num_traits::{AsPrimitive, Float};


/// Scalar type usable by every reduction and report in this crate.
///
/// ## Associated constants
/// * `NAME`: label printed by the programs.
/// * `BITS`: storage size in bits (`size_of::<Self>() * 8`).
/// * `MANTISSA_DIGITS` / `DECIMAL_DIGITS`: significand width in binary and
///   guaranteed decimal digits.
/// * `MIN_EXP` / `MAX_EXP`: binary exponent range of normal values.

pub trait Precision:
    Copy
    + Send
    + Sync
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + 'static
{
    /// Label printed by the programs.
    const NAME: &'static str;

    /// Storage size in bits.
    const BITS: u32;

    /// Significand width in bits, including the implicit bit.
    const MANTISSA_DIGITS: u32;

    /// Decimal digits that survive a round trip.
    const DECIMAL_DIGITS: u32;

    /// Smallest binary exponent of a normal value.
    const MIN_EXP: i32;

    /// Largest binary exponent of a finite value.
    const MAX_EXP: i32;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Converts from `f64`, rounding to nearest where the type is narrower.
    fn from_f64(value: f64) -> Self;

    /// Converts to `f64`, rounding to nearest where the type is wider.
    fn to_f64(self) -> f64;

    /// Gap between `1` and the next representable value.
    fn epsilon() -> Self;

    /// Largest finite value.
    fn max_value() -> Self;

    /// Smallest positive normal value.
    fn min_positive() -> Self;

    /// Smallest positive subnormal value.
    fn min_subnormal() -> Self;

    /// Positive infinity.
    fn infinity() -> Self;

    /// Negative infinity.
    fn neg_infinity() -> Self;

    /// A quiet NaN.
    fn nan() -> Self;

    /// Negative zero.
    fn neg_zero() -> Self;

    /// Square root; `NaN` for negative input.
    fn sqrt(self) -> Self;

    /// Natural logarithm; `-∞` at zero, `NaN` for negative input.
    fn ln(self) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// `true` for any NaN.
    fn is_nan(self) -> bool;

    /// `true` for `±∞`.
    fn is_infinite(self) -> bool;

    /// `true` when the sign bit is set (including `-0` and negative NaN).
    fn is_sign_negative(self) -> bool;

    /// `true` for non-zero values below the normal range.
    fn is_subnormal(self) -> bool;

    /// Fixed-point text with exactly `digits` fractional digits.
    fn to_fixed(self, digits: usize) -> String;

    /// Scientific text with `digits` fractional digits in the mantissa.
    fn to_sci(self, digits: usize) -> String;
}

macro_rules! impl_native_precision {
    ($t:ty, $name:expr) => {
        impl Precision for $t {
            const NAME: &'static str = $name;
            const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;
            const MANTISSA_DIGITS: u32 = <$t>::MANTISSA_DIGITS;
            const DECIMAL_DIGITS: u32 = <$t>::DIGITS;
            const MIN_EXP: i32 = <$t>::MIN_EXP;
            const MAX_EXP: i32 = <$t>::MAX_EXP;

            #[inline]
            fn zero() -> Self { 0.0 }

            #[inline]
            fn one() -> Self { 1.0 }

            #[inline]
            fn from_f64(value: f64) -> Self { value.as_() }

            #[inline]
            fn to_f64(self) -> f64 { self.as_() }

            fn epsilon() -> Self { <$t as Float>::epsilon() }

            fn max_value() -> Self { <$t as Float>::max_value() }

            fn min_positive() -> Self { <$t as Float>::min_positive_value() }

            fn min_subnormal() -> Self { <$t>::from_bits(1) }

            fn infinity() -> Self { <$t as Float>::infinity() }

            fn neg_infinity() -> Self { <$t as Float>::neg_infinity() }

            fn nan() -> Self { <$t as Float>::nan() }

            fn neg_zero() -> Self { <$t as Float>::neg_zero() }

            #[inline]
            fn sqrt(self) -> Self { Float::sqrt(self) }

            #[inline]
            fn ln(self) -> Self { Float::ln(self) }

            #[inline]
            fn abs(self) -> Self { Float::abs(self) }

            #[inline]
            fn is_nan(self) -> bool { Float::is_nan(self) }

            #[inline]
            fn is_infinite(self) -> bool { Float::is_infinite(self) }

            #[inline]
            fn is_sign_negative(self) -> bool { Float::is_sign_negative(self) }

            #[inline]
            fn is_subnormal(self) -> bool { Float::classify(self) == FpCategory::Subnormal }

            fn to_fixed(self, digits: usize) -> String { format!("{:.*}", digits, self) }

            fn to_sci(self, digits: usize) -> String { format!("{:.*e}", digits, self) }
        }
    };
}

impl_native_precision!(f32, "float");
impl_native_precision!(f64, "double");
