//! Scalar-precision introspection.
//!
//! [`PrecisionReport`] gathers the standard limits of a [`Precision`] and the
//! results of the classic degenerate operations. Nothing is computed beyond
//! what IEEE-754 already defines; the report exists so the programs can print
//! the environment facts (digit count, exponent range, epsilon) that every
//! summation error bound depends on.
//!
//! The NaN bit-pattern helpers are specific to the native binary formats and
//! are exposed as free functions for `f32` and `f64`.

use std::fmt;

use crate::engine::precision::Precision;


/// Limits and special-value behaviour of one precision.

#[derive(Clone, Copy, Debug)]
pub struct PrecisionReport<T> {
    /// Label of the precision.
    pub name: &'static str,

    /// Storage bits.
    pub bits: u32,

    /// Significand bits.
    pub mantissa_digits: u32,

    /// Guaranteed decimal digits.
    pub decimal_digits: u32,

    /// Smallest normal binary exponent.
    pub min_exp: i32,

    /// Largest binary exponent.
    pub max_exp: i32,

    /// Gap between `1` and the next value.
    pub epsilon: T,

    /// Largest finite value.
    pub max: T,

    /// Smallest positive normal value.
    pub min_normal: T,

    /// Smallest positive subnormal value.
    pub min_subnormal: T,

    /// `min_subnormal` is classified as subnormal.
    pub min_subnormal_is_subnormal: bool,

    /// `min_subnormal / 2` underflows to zero.
    pub half_min_subnormal: T,

    /// `+0`.
    pub pos_zero: T,

    /// `-0`.
    pub neg_zero: T,

    /// `+0 == -0`.
    pub zeros_compare_equal: bool,

    /// `1 / +0`.
    pub one_over_pos_zero: T,

    /// `1 / -0`.
    pub one_over_neg_zero: T,

    /// `0 / 0`.
    pub zero_over_zero: T,

    /// `ln(0)`.
    pub ln_zero: T,

    /// `ln(-1)`.
    pub ln_negative: T,

    /// `sqrt(-1)`.
    pub sqrt_negative: T,

    /// `+∞`.
    pub infinity: T,

    /// `-∞`.
    pub neg_infinity: T,

    /// `+∞ - +∞`.
    pub inf_minus_inf: T,

    /// `max * 2`, overflowing to `+∞`.
    pub max_doubled: T,

    /// `NaN == NaN`, always `false`.
    pub nan_equals_itself: bool,
}

impl<T: Precision> PrecisionReport<T> {
    /// Collects the report for `T`.
    pub fn of() -> Self {
        let zero = T::zero();
        let one = T::one();
        let two = T::from_f64(2.0);
        let nan = T::nan();
        #[allow(clippy::eq_op)]
        let nan_equals_itself = nan == nan;

        Self {
            name: T::NAME,
            bits: T::BITS,
            mantissa_digits: T::MANTISSA_DIGITS,
            decimal_digits: T::DECIMAL_DIGITS,
            min_exp: T::MIN_EXP,
            max_exp: T::MAX_EXP,
            epsilon: T::epsilon(),
            max: T::max_value(),
            min_normal: T::min_positive(),
            min_subnormal: T::min_subnormal(),
            min_subnormal_is_subnormal: T::min_subnormal().is_subnormal(),
            half_min_subnormal: T::min_subnormal() / two,
            pos_zero: zero,
            neg_zero: T::neg_zero(),
            zeros_compare_equal: zero == T::neg_zero(),
            one_over_pos_zero: one / zero,
            one_over_neg_zero: one / T::neg_zero(),
            zero_over_zero: zero / zero,
            ln_zero: zero.ln(),
            ln_negative: (-one).ln(),
            sqrt_negative: (-one).sqrt(),
            infinity: T::infinity(),
            neg_infinity: T::neg_infinity(),
            inf_minus_inf: T::infinity() - T::infinity(),
            max_doubled: T::max_value() * two,
            nan_equals_itself,
        }
    }
}

impl<T: Precision> fmt::Display for PrecisionReport<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({} bits)", self.name, self.bits)?;
        writeln!(f, "  mantissa digits:        {}", self.mantissa_digits)?;
        writeln!(f, "  decimal digits:         {}", self.decimal_digits)?;
        writeln!(f, "  exponent range:         [{}, {}]", self.min_exp, self.max_exp)?;
        writeln!(f, "  epsilon:                {}", self.epsilon.to_sci(16))?;
        writeln!(f, "  max:                    {}", self.max.to_sci(16))?;
        writeln!(f, "  min normal:             {}", self.min_normal.to_sci(16))?;
        writeln!(f, "  min subnormal:          {}", self.min_subnormal.to_sci(16))?;
        writeln!(f, "  min subnormal is subn.: {}", self.min_subnormal_is_subnormal)?;
        writeln!(f, "  min subnormal / 2:      {}", self.half_min_subnormal.to_sci(1))?;
        writeln!(f, "  +0, -0:                 {}, {}", self.pos_zero.to_sci(1), self.neg_zero.to_sci(1))?;
        writeln!(f, "  +0 == -0:               {}", self.zeros_compare_equal)?;
        writeln!(f, "  1 / +0:                 {}", self.one_over_pos_zero.to_sci(1))?;
        writeln!(f, "  1 / -0:                 {}", self.one_over_neg_zero.to_sci(1))?;
        writeln!(f, "  0 / 0:                  {}", self.zero_over_zero.to_sci(1))?;
        writeln!(f, "  ln(0):                  {}", self.ln_zero.to_sci(1))?;
        writeln!(f, "  ln(-1):                 {}", self.ln_negative.to_sci(1))?;
        writeln!(f, "  sqrt(-1):               {}", self.sqrt_negative.to_sci(1))?;
        writeln!(f, "  +inf, -inf:             {}, {}", self.infinity.to_sci(1), self.neg_infinity.to_sci(1))?;
        writeln!(f, "  inf - inf:              {}", self.inf_minus_inf.to_sci(1))?;
        writeln!(f, "  max * 2:                {}", self.max_doubled.to_sci(1))?;
        write!(f, "  NaN == NaN:             {}", self.nan_equals_itself)
    }
}

/// Bit patterns of the quiet and signalling NaNs of one binary format.
///
/// `quiet` has the most significant fraction bit set; `signaling` has it clear
/// with a non-zero payload. `after_arithmetic` is what the signalling pattern
/// becomes after passing through an addition on this machine (most hardware
/// quiets it).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NanBits {
    /// Canonical quiet NaN.
    pub quiet: u64,

    /// A signalling NaN.
    pub signaling: u64,

    /// Signalling NaN after `x + 0`.
    pub after_arithmetic: u64,
}

/// Quiet/signalling NaN patterns of `f32`.
pub fn nan_bits_f32() -> NanBits {
    let signaling: u32 = 0x7FA0_0000;
    let passed = std::hint::black_box(f32::from_bits(signaling)) + 0.0;
    NanBits {
        quiet: u64::from(f32::NAN.to_bits()),
        signaling: u64::from(signaling),
        after_arithmetic: u64::from(passed.to_bits()),
    }
}

/// Quiet/signalling NaN patterns of `f64`.
pub fn nan_bits_f64() -> NanBits {
    let signaling: u64 = 0x7FF4_0000_0000_0000;
    let passed = std::hint::black_box(f64::from_bits(signaling)) + 0.0;
    NanBits {
        quiet: f64::NAN.to_bits(),
        signaling,
        after_arithmetic: passed.to_bits(),
    }
}

impl fmt::Display for NanBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quiet NaN 0x{:X}, signaling NaN 0x{:X} (0x{:X} after x + 0)",
            self.quiet, self.signaling, self.after_arithmetic
        )
    }
}
