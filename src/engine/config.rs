//! Typed parameters for reductions and value sequences.
//!
//! The programs use the defaults, which reproduce the classic setup
//! (ten million values, ten workers, a grain of fifty indices, seed zero).
//! Tests shrink them freely.

use crate::engine::error::ConfigError;
use crate::engine::types::{
    DEFAULT_CHUNK_SIZE,
    DEFAULT_SEED,
    DEFAULT_SEQUENCE_LEN,
    DEFAULT_WORKERS,
};


/// Shape of a partitioned reduction.
///
/// ## Fields
/// * `workers`: size of the thread team; every worker enters the critical
///   section exactly once per reduction.
/// * `chunk_size`: indices handed out per claim of the dynamic schedule.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Number of worker threads.
    pub workers: usize,

    /// Grain of the dynamic schedule.
    pub chunk_size: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ReduceConfig {
    /// Creates a configuration with explicit values.
    pub fn new(workers: usize, chunk_size: usize) -> Self {
        Self { workers, chunk_size }
    }

    /// Replaces the worker count.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Replaces the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Rejects configurations that cannot drive a reduction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 {
            return Err(ConfigError::ZeroWorkers);
        }
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(())
    }

    /// Number of chunks the schedule hands out for `len` indices.
    ///
    /// Returns `0` for an invalid (zero) chunk size.
    pub fn chunk_count(&self, len: usize) -> usize {
        if self.chunk_size == 0 {
            return 0;
        }
        len.div_ceil(self.chunk_size)
    }
}

/// Shape of a generated value sequence.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceConfig {
    /// Number of values.
    pub len: usize,

    /// Generator seed; the same seed always yields the same sequence.
    pub seed: u64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_SEQUENCE_LEN,
            seed: DEFAULT_SEED,
        }
    }
}

impl SequenceConfig {
    /// Creates a configuration with explicit values.
    pub fn new(len: usize, seed: u64) -> Self {
        Self { len, seed }
    }

    /// Replaces the length.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Replaces the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
