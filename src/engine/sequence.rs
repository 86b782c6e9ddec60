//! Value sequences fed to the reductions.
//!
//! Sequences are built once and only read afterwards. [`random_sequence`] is
//! reproducible for a given [`SequenceConfig`]: the same seed gives the same
//! values on every run of the same build, so any run-to-run variation seen in
//! a reduction comes from the reduction itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::config::SequenceConfig;
use crate::engine::precision::Precision;


/// Generates `config.len` values uniformly distributed in `[0, 1)`.
///
/// ## Behavior
/// Draws are taken as `f64` from a [`StdRng`] seeded with `config.seed` and
/// converted with [`Precision::from_f64`], so narrower types see the nearest
/// representable value of the same draw.

pub fn random_sequence<T: Precision>(config: &SequenceConfig) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.len)
        .map(|_| T::from_f64(rng.random::<f64>()))
        .collect()
}

/// A sequence of `len` copies of `value`.
pub fn constant_sequence<T: Precision>(value: T, len: usize) -> Vec<T> {
    vec![value; len]
}

/// The value one tenth, correctly rounded in `T`.
///
/// Computed as `1 / 10` in `T` itself rather than converted from the `f64`
/// literal, so the extended type gets its own, closer approximation.
pub fn tenth<T: Precision>() -> T {
    T::one() / T::from_f64(10.0)
}
