//! Wall-clock timing of a computation.
//!
//! Uses the monotonic high-resolution clock behind [`Instant`]. Timing is for
//! reporting only and never feeds back into a result.

use std::time::{Duration, Instant};


/// A value together with the wall time it took to produce.

#[derive(Clone, Copy, Debug)]
pub struct Timed<T> {
    /// Result of the computation.
    pub value: T,

    /// Elapsed wall time.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Runs `f` and measures how long it took.
pub fn timed<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = f();
    Timed { value, elapsed: start.elapsed() }
}
