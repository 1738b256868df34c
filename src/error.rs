//! Unified error types for the shell core.
//!
//! Two layers share the work. Individual command handlers use anyhow for
//! flexible failure reporting in a no_std environment:
//!
//! ```ignore
//! anyhow::bail!("Operation failed");
//! some_operation().context("Failed to read configuration")?;
//! ```
//!
//! The dispatcher itself has a closed set of failure kinds, one variant per
//! way a line can fail between the console and a handler. Handler errors are
//! carried inside [`ShellError::HandlerFailed`] unchanged.

use alloc::string::String;
use core::fmt;

/// Result type for dispatcher-level operations.
pub type ShellResult<T> = Result<T, ShellError>;

/// Everything that can go wrong between reading a line and finishing a
/// command.
#[derive(Debug)]
pub enum ShellError {
    /// The input line was empty or whitespace-only. The shell loop treats
    /// this as a no-op and reprompts without printing anything.
    EmptyLine,
    /// No handler is registered under the given name (case-sensitive).
    UnknownCommand(String),
    /// Setup-time only: a handler name or alias is already taken.
    DuplicateCommand(String),
    /// The handler ran and reported a failure of its own.
    HandlerFailed(anyhow::Error),
    /// Setup-time only: a global logger is already installed.
    LoggerInitFailed,
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLine => write!(f, "Empty command line"),
            Self::UnknownCommand(name) => write!(f, "Unknown command: {name}"),
            Self::DuplicateCommand(name) => write!(f, "Duplicate command: {name}"),
            // Alternate formatting flattens the anyhow context chain into
            // one line, which is all the console reporting path may print.
            Self::HandlerFailed(inner) => write!(f, "Command failed: {inner:#}"),
            Self::LoggerInitFailed => write!(f, "Logger initialization failed"),
        }
    }
}

impl core::error::Error for ShellError {}
