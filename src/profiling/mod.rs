//! # Profiling
//!
//! Feature-gated Chrome Trace output for the worker team.
//!
//! With `--features profiling`, every worker of a team reduction records one
//! span covering its whole share of the dynamic schedule, tagged with the
//! number of chunks it claimed. Load the file in `chrome://tracing` or
//! <https://ui.perfetto.dev> to see how unevenly the chunks were spread.
//!
//! ```bash
//! cargo run --release --features profiling --bin kahan_summation
//! ```
//!
//! Without the feature all calls compile to nothing.
//!
//! ```no_run
//! use float_pitfalls::profiler;
//!
//! profiler::init("profile/trace.json");
//! {
//!     let _g = profiler::span("reduction").arg("workers", 10);
//!     // run a team reduction
//! }
//! profiler::shutdown();
//! ```

pub mod profiler;
