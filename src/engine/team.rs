//! Fixed-size worker team running partitioned reductions.
//!
//! A [`WorkerTeam`] owns a Rayon thread pool with exactly `workers` threads and
//! runs the reduction body once on each of them. The index range is handed
//! out with a **dynamic schedule**: workers claim fixed-size chunks from a
//! shared atomic cursor until it is exhausted, so faster workers end up with
//! more chunks. Each worker folds its chunks into a thread-local
//! [`Accumulator`] and then adds its partial into the shared aggregate inside a
//! [`CriticalSection`], exactly once.
//!
//! ## Ordering
//! Neither the chunk-to-worker assignment nor the order in which workers enter
//! the critical section is fixed. With more than one worker the bit pattern of
//! the result can change from run to run on identical input. That variation is
//! what the demonstrations show; nothing here tries to remove it.
//!
//! ## Sharing
//! * The value sequence is shared read-only.
//! * Partials and compensation terms live on each worker's stack.
//! * The aggregate is the only mutable shared state and is guarded by one
//!   mutex.
//!
//! ## Example
//! ```
//! use float_pitfalls::{ReduceConfig, WorkerTeam};
//!
//! let team = WorkerTeam::new(ReduceConfig::new(4, 50)).unwrap();
//! let values = vec![0.5f64; 1_000];
//! let reduction = team.parallel_sum(&values);
//! assert_eq!(reduction.total, 500.0);
//! assert_eq!(reduction.combines, 4);
//! ```

use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace};
use parking_lot::Mutex;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::engine::config::ReduceConfig;
use crate::engine::error::SumResult;
use crate::engine::precision::Precision;
use crate::engine::reduce::{
    Accumulator,
    KahanAccumulator,
    NeumaierAccumulator,
    PlainAccumulator,
};
use crate::engine::types::{ChunkCount, WorkerID};
use crate::profiler;


/// Outcome of one partitioned reduction.
///
/// ## Fields
/// * `total`: the aggregate result.
/// * `combines`: critical-section entries; always equals the worker count.
/// * `chunks`: chunks handed out; always `ceil(len / chunk_size)`.
/// * `combine_order`: worker indices in the order they entered the critical
///   section.
/// * `worker_chunks`: chunks claimed by each worker, aligned with
///   `combine_order`.

#[derive(Clone, Debug, PartialEq)]
pub struct Reduction<T> {
    /// Aggregate result.
    pub total: T,

    /// Number of critical-section entries.
    pub combines: usize,

    /// Number of chunks handed out by the schedule.
    pub chunks: usize,

    /// Worker indices in combine order.
    pub combine_order: Vec<WorkerID>,

    /// Chunks claimed per worker, in combine order.
    pub worker_chunks: Vec<ChunkCount>,
}

/// Aggregate state guarded by a [`CriticalSection`].
#[derive(Debug)]
struct Aggregate<T> {
    total: T,
    combine_order: Vec<WorkerID>,
    worker_chunks: Vec<ChunkCount>,
}

/// Shared aggregate updated by one worker at a time.
///
/// ## Semantics
/// [`combine`](Self::combine) adds a worker's partial with ordinary addition
/// and records who entered and how many chunks it processed. Entries are
/// serialized by the mutex; their order is whatever order workers arrive in.

#[derive(Debug)]
pub struct CriticalSection<T> {
    inner: Mutex<Aggregate<T>>,
}

impl<T: Precision> CriticalSection<T> {
    /// Creates a section whose aggregate starts at `initial`.
    pub fn new(initial: T, workers: usize) -> Self {
        Self {
            inner: Mutex::new(Aggregate {
                total: initial,
                combine_order: Vec::with_capacity(workers),
                worker_chunks: Vec::with_capacity(workers),
            }),
        }
    }

    /// Adds `partial` into the aggregate under the lock.
    pub fn combine(&self, worker: WorkerID, partial: T, chunks: ChunkCount) {
        let mut guard = self.inner.lock();
        guard.total = guard.total + partial;
        guard.combine_order.push(worker);
        guard.worker_chunks.push(chunks);
    }

    /// Number of combines so far.
    pub fn entries(&self) -> usize {
        self.inner.lock().combine_order.len()
    }

    /// Current aggregate value.
    pub fn total(&self) -> T {
        self.inner.lock().total
    }

    /// Consumes the section and reports the reduction.
    fn finish(self) -> Reduction<T> {
        let aggregate = self.inner.into_inner();
        Reduction {
            total: aggregate.total,
            combines: aggregate.combine_order.len(),
            chunks: aggregate.worker_chunks.iter().sum(),
            combine_order: aggregate.combine_order,
            worker_chunks: aggregate.worker_chunks,
        }
    }
}

/// Shared cursor of the dynamic schedule.
struct ChunkCursor {
    next: AtomicUsize,
    len: usize,
    chunk_size: usize,
}

impl ChunkCursor {
    fn new(len: usize, chunk_size: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            len,
            chunk_size,
        }
    }

    /// Claims the next unprocessed chunk, or `None` once the range is exhausted.
    #[inline]
    fn claim(&self) -> Option<Range<usize>> {
        let start = self.next.fetch_add(self.chunk_size, Ordering::Relaxed);
        if start >= self.len {
            return None;
        }
        Some(start..(start + self.chunk_size).min(self.len))
    }
}

/// Fixed-size thread team with a dynamic chunk schedule.
///
/// ## Construction
/// [`WorkerTeam::new`] validates the configuration and spawns the pool once;
/// the same team can then run any number of reductions.
///
/// ## Guarantees
/// * The reduction body runs exactly once per worker.
/// * Every index in `0..len` is visited exactly once.
/// * The aggregate receives exactly `workers` additions, even for `len == 0`.

pub struct WorkerTeam {
    pool: ThreadPool,
    config: ReduceConfig,
}

impl WorkerTeam {
    /// Builds a team of `config.workers` threads.
    ///
    /// ## Errors
    /// * `TeamError::Config` if the configuration fails validation.
    /// * `TeamError::PoolBuild` if the thread pool cannot be created.
    pub fn new(config: ReduceConfig) -> SumResult<Self> {
        config.validate()?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|index| format!("sum-worker-{index}"))
            .build()?;

        debug!(
            "worker team ready: {} workers, chunk size {}",
            config.workers, config.chunk_size
        );

        Ok(Self { pool, config })
    }

    /// Number of workers in the team.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Configuration the team was built with.
    pub fn config(&self) -> ReduceConfig {
        self.config
    }

    /// Runs a partitioned reduction over `value_at(0..len)` with accumulator `A`.
    ///
    /// ## Execution
    /// Every worker repeatedly claims `chunk_size` indices from the shared
    /// cursor, folds them into a fresh `A`, and once the cursor is exhausted
    /// adds `A::partial()` into the aggregate under the critical section.

    pub fn reduce_by<T, A, F>(&self, len: usize, value_at: F) -> Reduction<T>
    where
        T: Precision,
        A: Accumulator<T>,
        F: Fn(usize) -> T + Sync,
    {
        let workers = self.workers();
        debug!(
            "{} reduction over {} values: {} workers, chunk size {}",
            T::NAME, len, workers, self.config.chunk_size
        );

        let cursor = ChunkCursor::new(len, self.config.chunk_size);
        let section = CriticalSection::new(T::zero(), workers);

        self.pool.broadcast(|ctx| {
            let worker = ctx.index();
            let span = profiler::span_fmt(format_args!("worker {worker}"));

            let mut acc = A::default();
            let mut chunks: ChunkCount = 0;
            while let Some(range) = cursor.claim() {
                for i in range {
                    acc.fold(value_at(i));
                }
                chunks += 1;
            }

            let _span = span.arg("chunks", chunks as u64);
            let partial = acc.partial();
            trace!("worker {worker} combining after {chunks} chunks");
            section.combine(worker, partial, chunks);
        });

        section.finish()
    }

    /// Partitioned sum with plain addition inside each worker.
    pub fn parallel_sum<T: Precision>(&self, values: &[T]) -> Reduction<T> {
        self.reduce_by::<T, PlainAccumulator<T>, _>(values.len(), |i| values[i])
    }

    /// [`parallel_sum`](Self::parallel_sum) over `value_at(0..len)`.
    pub fn parallel_sum_by<T, F>(&self, len: usize, value_at: F) -> Reduction<T>
    where
        T: Precision,
        F: Fn(usize) -> T + Sync,
    {
        self.reduce_by::<T, PlainAccumulator<T>, _>(len, value_at)
    }

    /// Partitioned sum with Kahan compensation inside each worker.
    ///
    /// The cross-worker combine stays an uncompensated add.
    pub fn kahan_sum<T: Precision>(&self, values: &[T]) -> Reduction<T> {
        self.reduce_by::<T, KahanAccumulator<T>, _>(values.len(), |i| values[i])
    }

    /// [`kahan_sum`](Self::kahan_sum) over `value_at(0..len)`.
    pub fn kahan_sum_by<T, F>(&self, len: usize, value_at: F) -> Reduction<T>
    where
        T: Precision,
        F: Fn(usize) -> T + Sync,
    {
        self.reduce_by::<T, KahanAccumulator<T>, _>(len, value_at)
    }

    /// Partitioned sum with Kahan–Babuška–Neumaier compensation inside each
    /// worker; the cross-worker combine stays an uncompensated add.
    pub fn neumaier_sum<T: Precision>(&self, values: &[T]) -> Reduction<T> {
        self.reduce_by::<T, NeumaierAccumulator<T>, _>(values.len(), |i| values[i])
    }
}
