//! Sequential summation and the per-worker accumulators.
//!
//! This module defines **pure, thread-local accumulator types** used both by
//! the single-threaded reductions here and by the partitioned reductions in
//! [`crate::engine::team`].
//!
//! ## Execution model
//! A partitioned reduction proceeds in two phases:
//!
//! 1. **Local accumulation**
//!    * Each worker folds the indices of the chunks it claimed into its own
//!      accumulator.
//!    * Accumulators are never shared.
//!
//! 2. **Combination**
//!    * Each worker hands [`Accumulator::partial`] to the aggregate inside a
//!      critical section.
//!    * The combine is a plain addition in whatever order workers finish.
//!
//! ## Provided accumulators
//!
//! * [`PlainAccumulator`]: ordinary left-to-right addition.
//! * [`KahanAccumulator`]: Kahan's error-feedback step.
//! * [`NeumaierAccumulator`]: the Kahan–Babuška–Neumaier variant, which also
//!   recovers the low part when the incoming value dominates the running sum.
//!
//! Compensation never crosses a worker boundary: only `partial()` leaves the
//! worker, and the cross-worker add is uncompensated.

use crate::engine::double_double::DoubleDouble;
use crate::engine::precision::Precision;


/// Thread-local running sum folded one value at a time.
///
/// ## Contract
/// * `Default` is the additive identity state.
/// * `fold` consumes values in the order the worker visits them.
/// * `partial` is what the worker contributes to the aggregate.

pub trait Accumulator<T: Precision>: Default + Send {
    /// Incorporates one value.
    fn fold(&mut self, value: T);

    /// The value this accumulator contributes to a combine step.
    fn partial(&self) -> T;
}

/// Accumulator using ordinary floating-point addition.

#[derive(Clone, Copy, Debug)]
pub struct PlainAccumulator<T: Precision>(pub T);

impl<T: Precision> Default for PlainAccumulator<T> {
    fn default() -> Self {
        Self(T::zero())
    }
}

impl<T: Precision> Accumulator<T> for PlainAccumulator<T> {
    #[inline]
    fn fold(&mut self, value: T) {
        self.0 = self.0 + value;
    }

    #[inline]
    fn partial(&self) -> T {
        self.0
    }
}

/// Accumulator implementing Kahan's compensated summation.
///
/// ## Semantics
/// For each value `v`:
/// 1. `y = v - compensation`
/// 2. `t = sum + y`
/// 3. `compensation = (t - sum) - y`
/// 4. `sum = t`
///
/// The compensation captures the low-order bits lost when rounding step 2 and
/// feeds them into the next addition, so the worst-case error no longer grows
/// with the number of terms. [`partial`](Accumulator::partial) returns `sum`;
/// whatever is still held in `compensation` at the end is dropped.
///
/// ## Limitation
/// When an incoming value is much larger than the running sum the correction
/// itself is rounded away. `[1e16, 1.0, -1e16]` sums to `0.0` here; use
/// [`NeumaierAccumulator`] for that pattern.

#[derive(Clone, Copy, Debug)]
pub struct KahanAccumulator<T: Precision> {
    sum: T,
    compensation: T,
}

impl<T: Precision> Default for KahanAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Precision> KahanAccumulator<T> {
    /// Creates an accumulator at the additive identity.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            compensation: T::zero(),
        }
    }

    /// Adds one value with error feedback.
    #[inline]
    pub fn add(&mut self, value: T) {
        let y = value - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Current compensated sum.
    #[inline]
    pub fn total(&self) -> T {
        self.sum
    }

    /// Low-order error not yet folded back into the sum.
    #[inline]
    pub fn compensation(&self) -> T {
        self.compensation
    }
}

impl<T: Precision> Accumulator<T> for KahanAccumulator<T> {
    #[inline]
    fn fold(&mut self, value: T) {
        self.add(value);
    }

    #[inline]
    fn partial(&self) -> T {
        self.sum
    }
}

/// Kahan–Babuška–Neumaier accumulator.
///
/// ## Semantics
/// Keeps the rounded sum and a separate correction. On every addition the
/// error of `sum + v` is computed from whichever operand is larger in
/// magnitude, so the lost bits of the *smaller* operand are always kept.
/// [`partial`](Accumulator::partial) returns `sum + correction`.

#[derive(Clone, Copy, Debug)]
pub struct NeumaierAccumulator<T: Precision> {
    sum: T,
    correction: T,
}

impl<T: Precision> Default for NeumaierAccumulator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Precision> NeumaierAccumulator<T> {
    /// Creates an accumulator at the additive identity.
    pub fn new() -> Self {
        Self {
            sum: T::zero(),
            correction: T::zero(),
        }
    }

    /// Adds one value.
    #[inline]
    pub fn add(&mut self, value: T) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.correction += (self.sum - t) + value;
        } else {
            self.correction += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Sum with the correction applied.
    #[inline]
    pub fn total(&self) -> T {
        self.sum + self.correction
    }
}

impl<T: Precision> Accumulator<T> for NeumaierAccumulator<T> {
    #[inline]
    fn fold(&mut self, value: T) {
        self.add(value);
    }

    #[inline]
    fn partial(&self) -> T {
        self.total()
    }
}

/// Left-to-right sum `((0 + v0) + v1) + ...` computed entirely in `T`.
///
/// Deterministic: the order is fixed, so identical input always yields an
/// identical bit pattern. An empty slice returns `T::zero()`.

pub fn sequential_sum<T: Precision>(values: &[T]) -> T {
    values.iter().fold(T::zero(), |acc, &v| acc + v)
}

/// [`sequential_sum`] over `value_at(0..len)` without materialising the values.
pub fn sequential_sum_by<T, F>(len: usize, value_at: F) -> T
where
    T: Precision,
    F: Fn(usize) -> T,
{
    (0..len).fold(T::zero(), |acc, i| acc + value_at(i))
}

/// Adds `value` to an accumulator starting at zero, `count` times.
///
/// The canonical demonstration of drift: `0.1` added ten million times
/// lands visibly away from `1_000_000` in single precision.

pub fn repeated_sum<T: Precision>(value: T, count: usize) -> T {
    let mut result = T::zero();
    for _ in 0..count {
        result += value;
    }
    result
}

/// Single-threaded Kahan sum of `values`.
pub fn kahan_sequential<T: Precision>(values: &[T]) -> T {
    let mut acc = KahanAccumulator::new();
    for &v in values {
        acc.add(v);
    }
    acc.total()
}

/// Single-threaded Kahan–Babuška–Neumaier sum of `values`.
pub fn neumaier_sequential<T: Precision>(values: &[T]) -> T {
    let mut acc = NeumaierAccumulator::new();
    for &v in values {
        acc.add(v);
    }
    acc.total()
}

/// Reference sum of `f64` values accumulated in double-double.
///
/// Each term is exact in double-double and every addition keeps about 106
/// bits, so for the sequence sizes used in tests the result is accurate far
/// below one `f64` ulp of the total.

pub fn exact_reference_sum(values: &[f64]) -> DoubleDouble {
    values
        .iter()
        .fold(DoubleDouble::ZERO, |acc, &v| acc + DoubleDouble::from_f64(v))
}
