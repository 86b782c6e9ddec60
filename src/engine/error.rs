//! Error types for configuration, team setup and the demonstration programs.
//!
//! Floating-point special values are **not** errors anywhere in this crate:
//! `NaN` and `±∞` are ordinary results and propagate as values. The types here
//! only cover the few things that can actually go wrong around the numeric
//! core:
//!
//! * a configuration that cannot describe a reduction (zero workers, zero
//!   chunk size),
//! * the thread pool refusing to start,
//! * the logger refusing to start.
//!
//! ## Typical flow
//! Configuration checks return [`ConfigError`]. [`WorkerTeam::new`] converts it
//! into [`TeamError`] with `?`, and program entry points lift either into
//! [`DemoError`]:
//! ```ignore
//! fn main() -> DemoResult<()> {
//!     let _logger = logging::init("warn")?;                 // -> DemoError::Logging
//!     let team = WorkerTeam::new(ReduceConfig::default())?;  // -> DemoError::Team
//!     let total = team.parallel_sum(&values).total;
//!     Ok(())
//! }
//! ```
//!
//! ## Display vs. Debug
//! * [`fmt::Display`] gives short, log-friendly messages.
//! * [`fmt::Debug`] (derived) keeps the full structure.
//!
//! [`WorkerTeam::new`]: crate::engine::team::WorkerTeam::new

use std::fmt;


/// Returned when a [`ReduceConfig`](crate::engine::config::ReduceConfig)
/// cannot describe a valid reduction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {

    /// A reduction needs at least one worker.
    ZeroWorkers,

    /// The dynamic schedule needs a grain of at least one index.
    ZeroChunkSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroWorkers => f.write_str("worker count must be at least 1"),
            ConfigError::ZeroChunkSize => f.write_str("chunk size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors raised while assembling a [`WorkerTeam`](crate::engine::team::WorkerTeam).
///
/// ### Variants
/// * `Config(ConfigError)`: the supplied configuration was rejected.
/// * `PoolBuild(String)`: Rayon could not create the thread pool; the message
///   is the pool builder's own.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {

    /// Configuration was rejected before any thread was spawned.
    Config(ConfigError),

    /// The thread pool could not be built.
    PoolBuild(String),
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::Config(e) => write!(f, "invalid team configuration: {e}"),
            TeamError::PoolBuild(msg) => write!(f, "failed to build worker pool: {msg}"),
        }
    }
}

impl std::error::Error for TeamError {}

impl From<ConfigError> for TeamError {
    fn from(e: ConfigError) -> Self { TeamError::Config(e) }
}

impl From<rayon::ThreadPoolBuildError> for TeamError {
    fn from(e: rayon::ThreadPoolBuildError) -> Self { TeamError::PoolBuild(e.to_string()) }
}

/// Top-level error of the demonstration programs.
///
/// `main` returns `DemoResult<()>`; any variant terminates the program with a
/// non-zero exit status after Rust prints it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {

    /// Configuration was rejected.
    Config(ConfigError),

    /// The worker team could not be assembled.
    Team(TeamError),

    /// The logger could not be started.
    Logging(String),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoError::Config(e) => write!(f, "{e}"),
            DemoError::Team(e) => write!(f, "{e}"),
            DemoError::Logging(msg) => write!(f, "logger initialization failed: {msg}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<ConfigError> for DemoError {
    fn from(e: ConfigError) -> Self { DemoError::Config(e) }
}
impl From<TeamError> for DemoError {
    fn from(e: TeamError) -> Self { DemoError::Team(e) }
}
impl From<flexi_logger::FlexiLoggerError> for DemoError {
    fn from(e: flexi_logger::FlexiLoggerError) -> Self { DemoError::Logging(e.to_string()) }
}

/// Result of building or running a worker team.
pub type SumResult<T> = Result<T, TeamError>;

/// Result of a demonstration program.
pub type DemoResult<T> = Result<T, DemoError>;
