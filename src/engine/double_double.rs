//! Double-double arithmetic: extended precision built from two `f64`.
//!
//! A [`DoubleDouble`] stores a value as the unevaluated sum `hi + lo` with
//! `|lo| <= ulp(hi) / 2`, giving about 106 significand bits (roughly 31
//! decimal digits) on any target. It stands in for the compiler-specific
//! extended types (`long double`, `__float80`, `__float128`) so the
//! demonstrations can compare three precisions portably.
//!
//! # Key operations
//!
//! - [`two_sum`]: error-free addition `a + b = s + e`
//! - [`quick_two_sum`]: the same when `|a| >= |b|`, three flops cheaper
//! - [`two_prod`]: error-free multiplication via fused multiply-add
//! - `Add`, `Sub`, `Mul`, `Div`, `Neg` on double-double pairs
//!
//! # Special values
//!
//! Non-finite results are carried by `hi` alone (`lo = 0`), so `1/0 = +∞`,
//! `0/0 = NaN`, `sqrt(-1) = NaN`, `ln(0) = -∞` and `ln(-1) = NaN` exactly as
//! for the native types.
//!
//! # References
//!
//! - Dekker, "A floating-point technique for extending the available precision"
//! - Hida, Li, Bailey, "Library for double-double and quad-double arithmetic"

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::engine::precision::Precision;


/// 2^-104, the relative spacing of double-double values near one.
const DD_EPSILON: f64 = 4.930_380_657_631_324e-32;

/// Smallest normal double-double: keeps `lo` inside the normal f64 range.
const DD_MIN_POSITIVE: f64 = 2.004_168_360_008_972_8e-292;

/// 2^-54, scales `f64::MAX` to the largest `lo` that still rounds into `hi`.
const HALF_ULP_SCALE: f64 = 5.551_115_123_125_783e-17;

/// Error-free transformation of a sum: returns `(s, e)` with `s = fl(a + b)`
/// and `a + b = s + e` exactly.
#[inline]
pub fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let bb = s - a;
    let e = (a - (s - bb)) + (b - bb);
    (s, e)
}

/// [`two_sum`] for `|a| >= |b|`.
#[inline]
pub fn quick_two_sum(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    let e = b - (s - a);
    (s, e)
}

/// Error-free transformation of a product: returns `(p, e)` with
/// `p = fl(a * b)` and `a * b = p + e` exactly (barring underflow).
#[inline]
pub fn two_prod(a: f64, b: f64) -> (f64, f64) {
    let p = a * b;
    let e = a.mul_add(b, -p);
    (p, e)
}

/// Extended-precision scalar represented as `hi + lo`.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DoubleDouble {
    hi: f64,
    lo: f64,
}

impl DoubleDouble {
    /// Zero.
    pub const ZERO: Self = Self { hi: 0.0, lo: 0.0 };

    /// One.
    pub const ONE: Self = Self { hi: 1.0, lo: 0.0 };

    /// Builds a value from its components, renormalising them.
    pub fn new(hi: f64, lo: f64) -> Self {
        let (s, e) = two_sum(hi, lo);
        if !s.is_finite() {
            return Self::from_f64(s);
        }
        Self { hi: s, lo: e }
    }

    /// Exact conversion from `f64`.
    #[inline]
    pub const fn from_f64(value: f64) -> Self {
        Self { hi: value, lo: 0.0 }
    }

    /// Leading component.
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Trailing component.
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Nearest `f64`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.hi + self.lo
    }

    /// `true` when neither component is infinite or NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.hi.is_finite()
    }

    /// Largest integer not greater than `self`.
    pub fn floor(self) -> Self {
        let hi = self.hi.floor();
        if hi == self.hi {
            let (hi, lo) = quick_two_sum(hi, self.lo.floor());
            Self { hi, lo }
        } else {
            Self { hi, lo: 0.0 }
        }
    }

    /// Multiplies by a single `f64`.
    pub fn mul_f64(self, rhs: f64) -> Self {
        let (p, e) = two_prod(self.hi, rhs);
        if !p.is_finite() {
            return Self::from_f64(p);
        }
        let (hi, lo) = quick_two_sum(p, e + self.lo * rhs);
        Self { hi, lo }
    }

    /// Square root, one Newton step on top of the `f64` estimate.
    pub fn sqrt(self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() {
            return Self::from_f64(self.hi.sqrt());
        }
        let x = self.hi.sqrt();
        let residual = self - Self::from_f64(x) * Self::from_f64(x);
        let (hi, lo) = quick_two_sum(x, residual.hi / (2.0 * x));
        Self { hi, lo }
    }

    /// Natural logarithm.
    ///
    /// Accurate to about one `f64` ulp of the result: the leading term comes
    /// from `f64::ln` and `lo` contributes its first-order correction.
    pub fn ln(self) -> Self {
        if self.hi <= 0.0 || !self.hi.is_finite() {
            return Self::from_f64(self.hi.ln());
        }
        let (hi, lo) = two_sum(self.hi.ln(), self.lo / self.hi);
        Self { hi, lo }
    }

    /// Fixed-point decimal text with exactly `digits` fractional digits.
    ///
    /// Digits are produced by repeated multiply-by-ten on the fractional part
    /// and truncated, not rounded. Digits beyond the ~31 the type carries are
    /// whatever the representation holds, which is the point of printing them.
    pub fn to_fixed(self, digits: usize) -> String {
        if !self.hi.is_finite() {
            return format!("{}", self.hi);
        }

        let negative = self.hi.is_sign_negative();
        let magnitude = if negative { -self } else { self };
        let integer = magnitude.floor();
        let mut fraction = magnitude - integer;

        let mut out = String::with_capacity(digits + 24);
        if negative {
            out.push('-');
        }
        out.push_str(&integer_text(integer));

        if digits > 0 {
            out.push('.');
            for _ in 0..digits {
                fraction = fraction.mul_f64(10.0);
                let digit = fraction.floor();
                fraction = fraction - digit;
                let d = digit.hi.clamp(0.0, 9.0) as u8;
                out.push(char::from(b'0' + d));
            }
        }
        out
    }
}

fn integer_text(integer: DoubleDouble) -> String {
    // Both components are integral after `floor`; i128 covers them below 1e38.
    if integer.hi < 1.0e38 {
        ((integer.hi as i128) + (integer.lo as i128)).to_string()
    } else {
        format!("{:.0}", integer.hi)
    }
}

impl Add for DoubleDouble {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (s, e) = two_sum(self.hi, rhs.hi);
        if !s.is_finite() {
            return Self::from_f64(s);
        }
        let (t, f) = two_sum(self.lo, rhs.lo);
        let (s, e) = quick_two_sum(s, e + t);
        let (hi, lo) = quick_two_sum(s, e + f);
        Self { hi, lo }
    }
}

impl Sub for DoubleDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for DoubleDouble {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (p, e) = two_prod(self.hi, rhs.hi);
        if !p.is_finite() {
            return Self::from_f64(p);
        }
        let e = e + (self.hi * rhs.lo + self.lo * rhs.hi);
        let (hi, lo) = quick_two_sum(p, e);
        Self { hi, lo }
    }
}

impl Div for DoubleDouble {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        if !q1.is_finite() || rhs.hi.is_infinite() {
            return Self::from_f64(q1);
        }
        let r = self - rhs.mul_f64(q1);
        let q2 = r.hi / rhs.hi;
        let r = r - rhs.mul_f64(q2);
        let q3 = r.hi / rhs.hi;

        let (hi, lo) = quick_two_sum(q1, q2);
        Self { hi, lo } + Self::from_f64(q3)
    }
}

impl Neg for DoubleDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { hi: -self.hi, lo: -self.lo }
    }
}

impl AddAssign for DoubleDouble {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for DoubleDouble {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl PartialOrd for DoubleDouble {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.hi.partial_cmp(&other.hi)? {
            Ordering::Equal => self.lo.partial_cmp(&other.lo),
            ord => Some(ord),
        }
    }
}

impl From<f64> for DoubleDouble {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<DoubleDouble> for f64 {
    fn from(value: DoubleDouble) -> Self {
        value.to_f64()
    }
}

/// Fixed-point output; `{:.N}` selects `N` fractional digits (default 32).
impl fmt::Display for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fixed(f.precision().unwrap_or(32)))
    }
}

/// Scientific output of the leading component.
impl fmt::LowerExp for DoubleDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerExp::fmt(&self.hi, f)
    }
}

impl Precision for DoubleDouble {
    const NAME: &'static str = "double-double";
    const BITS: u32 = (std::mem::size_of::<DoubleDouble>() * 8) as u32;
    const MANTISSA_DIGITS: u32 = 106;
    const DECIMAL_DIGITS: u32 = 31;
    const MIN_EXP: i32 = f64::MIN_EXP + 53;
    const MAX_EXP: i32 = f64::MAX_EXP;

    #[inline]
    fn zero() -> Self { Self::ZERO }

    #[inline]
    fn one() -> Self { Self::ONE }

    #[inline]
    fn from_f64(value: f64) -> Self { DoubleDouble::from_f64(value) }

    #[inline]
    fn to_f64(self) -> f64 { DoubleDouble::to_f64(self) }

    fn epsilon() -> Self { Self::from_f64(DD_EPSILON) }

    fn max_value() -> Self {
        Self { hi: f64::MAX, lo: f64::MAX * HALF_ULP_SCALE }
    }

    fn min_positive() -> Self { Self::from_f64(DD_MIN_POSITIVE) }

    fn min_subnormal() -> Self { Self::from_f64(f64::from_bits(1)) }

    fn infinity() -> Self { Self::from_f64(f64::INFINITY) }

    fn neg_infinity() -> Self { Self::from_f64(f64::NEG_INFINITY) }

    fn nan() -> Self { Self::from_f64(f64::NAN) }

    fn neg_zero() -> Self { Self::from_f64(-0.0) }

    #[inline]
    fn sqrt(self) -> Self { DoubleDouble::sqrt(self) }

    #[inline]
    fn ln(self) -> Self { DoubleDouble::ln(self) }

    #[inline]
    fn abs(self) -> Self {
        if self.hi.is_sign_negative() { -self } else { self }
    }

    #[inline]
    fn is_nan(self) -> bool { self.hi.is_nan() }

    #[inline]
    fn is_infinite(self) -> bool { self.hi.is_infinite() }

    #[inline]
    fn is_sign_negative(self) -> bool { self.hi.is_sign_negative() }

    #[inline]
    fn is_subnormal(self) -> bool { self.hi.is_subnormal() }

    fn to_fixed(self, digits: usize) -> String { DoubleDouble::to_fixed(self, digits) }

    fn to_sci(self, digits: usize) -> String { format!("{:.*e}", digits, self.hi) }
}
