//! # Float Pitfalls
//!
//! Small, self-contained demonstrations of floating-point behaviour that
//! surprises people in practice:
//!
//! - precision loss under repeated summation,
//! - extended precision (a portable double-double stands in for
//!   `long double` / `__float128`),
//! - subnormals, signed zeros, NaN and infinity,
//! - run-to-run variation of parallel reductions,
//! - memory footprint of scalar buffers.
//!
//! ## Layout
//! - [`engine`] holds the summation strategies, the worker team that runs the
//!   partitioned reductions, the precision abstraction and the small helpers
//!   the demonstration programs share.
//! - [`logging`] starts the `log` backend used by the programs.
//! - [`profiling`] is a feature-gated Chrome Trace recorder for worker spans.
//!
//! The five programs live under `src/bin/` and take no arguments; every
//! parameter they use is a constant from [`engine::types`] passed through the
//! typed configuration in [`engine::config`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod logging;
pub mod profiling;

pub use profiling::profiler;

// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (Public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use engine::precision::Precision;
pub use engine::double_double::DoubleDouble;

pub use engine::reduce::{
    Accumulator,
    PlainAccumulator,
    KahanAccumulator,
    NeumaierAccumulator,
    sequential_sum,
    sequential_sum_by,
    repeated_sum,
    kahan_sequential,
    neumaier_sequential,
    exact_reference_sum,
};

pub use engine::team::{
    WorkerTeam,
    Reduction,
    CriticalSection,
};

pub use engine::config::{ReduceConfig, SequenceConfig};

pub use engine::error::{
    ConfigError,
    TeamError,
    DemoError,
    SumResult,
    DemoResult,
};

pub use engine::sequence::{random_sequence, constant_sequence, tenth};
pub use engine::special::{PrecisionReport, NanBits, nan_bits_f32, nan_bits_f64};
pub use engine::footprint::{Footprint, FootprintStats};
pub use engine::timing::{timed, Timed};

// ─────────────────────────────────────────────────────────────────────────────
// Prelude
// ─────────────────────────────────────────────────────────────────────────────

/// Commonly used items for the demonstration programs.
///
/// Import with:
/// ```rust
/// use float_pitfalls::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Precision,
        DoubleDouble,
        WorkerTeam,
        Reduction,
        ReduceConfig,
        SequenceConfig,
        DemoError,
        DemoResult,
        sequential_sum,
        repeated_sum,
        random_sequence,
        tenth,
        timed,
    };
    pub use crate::engine::types::*;
}
