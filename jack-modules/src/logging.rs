//! # Logging
//!
//! Terminal logger shared by module binaries. Verbosity is the number of `-v` flags.
//! Nothing is logged from process callbacks.
use slog::Logger;
use slog_scope::GlobalLoggerGuard;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};
use sloggers::types::Severity;
use sloggers::{Build, Error};

pub fn severity(verbosity: u64) -> Severity {
    match verbosity {
        0 => Severity::Error,
        1 => Severity::Warning,
        2 => Severity::Info,
        3 => Severity::Debug,
        _ => Severity::Trace,
    }
}

pub fn logger(verbosity: u64) -> Result<Logger, Error> {
    let mut builder = TerminalLoggerBuilder::new();
    builder.level(severity(verbosity));
    builder.destination(Destination::Stderr);
    builder.build()
}

/// Install terminal logger as the global one.
/// The logger stays installed even after the guard is dropped, so helper threads which outlive
/// `main` by a few moments still have somewhere to log to.
pub fn init(verbosity: u64) -> Result<GlobalLoggerGuard, Error> {
    let logger = logger(verbosity)?;
    Ok(slog_scope::set_global_logger(logger).cancel_reset())
}
