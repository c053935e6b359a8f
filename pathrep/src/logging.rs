//! Logging infrastructure for the pathrep library.
//!
//! A small stderr-based logger with three verbosity levels, initialized
//! from CLI flags or the `PATHREP_LOG_MODE` environment variable.
//! Library internals additionally emit through the `log` facade.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Logging level, ordered from least verbose to most verbose.
///
/// # Examples
///
/// ```
/// use pathrep::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info, and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A stderr-based logger honoring the configured level.
///
/// # Examples
///
/// ```
/// use pathrep::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("decode failed");
/// logger.info("not printed at Normal");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Create a logger at the given level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Log an error message (suppressed only at Quiet).
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Log a warning message (Normal and Verbose).
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Log an informational message (Verbose only).
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Log a debug message (Verbose only).
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initialize a logger from CLI flags and the environment.
///
/// Priority: `verbose`/`quiet` flags, then `PATHREP_LOG_MODE`, then
/// Normal. If both flags are set, `verbose` wins.
///
/// # Examples
///
/// ```
/// use pathrep::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }
    if let Ok(value) = env::var("PATHREP_LOG_MODE") {
        if let Ok(level) = value.parse() {
            return Logger::new(level);
        }
    }
    Logger::new(LogLevel::Normal)
}
