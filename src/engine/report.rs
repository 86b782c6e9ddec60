//! Text lines printed by the demonstration programs.
//!
//! Kept separate from the binaries so the exact output format is testable.

use crate::engine::footprint::FootprintStats;
use crate::engine::precision::Precision;


/// `"Floating point bits=<bits>"`.
pub fn bits_line<T: Precision>() -> String {
    format!("Floating point bits={}", T::BITS)
}

/// `"Completed in <seconds> s."`.
pub fn completed_line(seconds: f64) -> String {
    format!("Completed in {seconds} s.")
}

/// `"Using <workers> threads"`.
pub fn workers_line(workers: usize) -> String {
    format!("Using {workers} threads")
}

/// `` "`-> Run <run>: <value>" `` with `digits` fractional digits.
pub fn sweep_run_line<T: Precision>(run: usize, value: T, digits: usize) -> String {
    format!("`-> Run {run}: {}", value.to_fixed(digits))
}

/// `"Run <run>: <parallel>, <compensated>"` with `digits` fractional digits.
pub fn comparison_run_line<T: Precision>(
    run: usize,
    parallel: T,
    compensated: T,
    digits: usize,
) -> String {
    format!(
        "Run {run}: {}, {}",
        parallel.to_fixed(digits),
        compensated.to_fixed(digits)
    )
}

/// The four lines describing one buffer's footprint.
pub fn footprint_lines(stats: &FootprintStats) -> [String; 4] {
    [
        format!("Address of first element: {:#x}", stats.first),
        format!("Address of last element: {:#x}", stats.end),
        format!("Size of each element (bytes): {}", stats.element_size),
        format!("Bytes allocated: {} ({} MB)", stats.bytes, stats.megabytes()),
    ]
}
