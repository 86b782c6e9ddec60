//! Logger bootstrap for the demonstration programs.
//!
//! Log records go to **stderr** so stdout carries only the report a reader is
//! meant to study. The filter comes from `RUST_LOG` when set, otherwise from
//! the filter passed by the program (for example `"warn"` or
//! `"float_pitfalls=debug"`).

use flexi_logger::{LogSpecification, Logger, LoggerHandle};

use crate::engine::error::DemoResult;


/// Starts the global logger.
///
/// The returned handle must stay alive for as long as records should be
/// written; bind it in `main`.
///
/// ## Errors
/// `DemoError::Logging` if the filter cannot be parsed or a logger is already
/// installed.
pub fn init(default_spec: &str) -> DemoResult<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(default_spec)?
        .log_to_stderr()
        .start()?;
    Ok(handle)
}

/// Parses a log filter without installing anything.
pub fn parse_spec(spec: &str) -> DemoResult<LogSpecification> {
    Ok(LogSpecification::parse(spec)?)
}
