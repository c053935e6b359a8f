//! CLI-specific error types with exit codes.
//!
//! This module wraps library errors and maps them to stable exit codes
//! so scripts can distinguish representation failures from plumbing
//! failures.

use std::fmt;

use pathrep::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// I/O error writing output.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Representation failure (unsupported input, constraint
    ///   violation, malformed escape, codec error)
    /// - 2: Other library error
    /// - 3: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Library(lib_err) => match lib_err {
                LibError::UnsupportedInputType { .. }
                | LibError::ConstraintViolation { .. }
                | LibError::MalformedEscapeSequence { .. }
                | LibError::UndecodableBytes { .. }
                | LibError::UnencodableText { .. } => 1,
                _ => 2,
            },
            CliError::Io(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(err) => write!(f, "{err}"),
            CliError::Io(err) => write!(f, "output error: {err}"),
        }
    }
}

impl From<LibError> for CliError {
    fn from(err: LibError) -> Self {
        CliError::Library(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}
