//! Demonstration constants and small identifier types.
//!
//! Every literal the programs use lives here. The reduction routines never read
//! these directly; they receive them through [`ReduceConfig`] and
//! [`SequenceConfig`] so tests can run the same code paths with small inputs.
//!
//! [`ReduceConfig`]: crate::engine::config::ReduceConfig
//! [`SequenceConfig`]: crate::engine::config::SequenceConfig

/// Index of a worker inside a [`WorkerTeam`](crate::engine::team::WorkerTeam).
pub type WorkerID = usize;

/// Number of chunks a worker claimed during one reduction.
pub type ChunkCount = usize;

/// Length of the value sequences used by the programs.
pub const DEFAULT_SEQUENCE_LEN: usize = 10_000_000;

/// Indices handed to a worker per claim (dynamic schedule grain).
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Worker count of the compensated-summation program.
pub const DEFAULT_WORKERS: usize = 10;

/// Largest worker count in the parallel sweep (the sweep runs `1..=7`).
pub const MAX_SWEEP_WORKERS: usize = 7;

/// Repetitions per worker count in the parallel sweep.
pub const PARALLEL_RUNS: usize = 10;

/// Repetitions of the parallel / compensated comparison.
pub const KAHAN_RUNS: usize = 15;

/// Seed of the value-sequence generator.
pub const DEFAULT_SEED: u64 = 0;

/// Fractional digits printed for the repeated-addition results.
pub const REPEATED_DIGITS: usize = 50;

/// Fractional digits printed in the parallel sweep.
pub const SWEEP_DIGITS: usize = 25;

/// Fractional digits printed in the compensated comparison.
pub const KAHAN_DIGITS: usize = 40;

/// Bytes in one megabyte (2^20) for footprint reporting.
pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;
