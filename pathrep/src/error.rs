//! Error types for the pathrep library.
//!
//! This module provides the error hierarchy for path representation
//! handling, using `thiserror` for ergonomic error handling. Nothing is
//! retried, recovered, or defaulted: every failure is a caller-visible,
//! typed result. The resolver in particular replaces silent, approximate
//! coercions ("just stringify it") with explicit failure when an input's
//! intent is ambiguous.

use thiserror::Error;

use crate::codec::Encoding;
use crate::value::{KindSet, PathKind};

/// Result type alias for operations that may fail with a pathrep error.
///
/// # Examples
///
/// ```
/// use pathrep::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathrep library.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied value is neither an acceptable path value nor a valid
    /// path-capable object. Callers must not fall back to a generic
    /// textual conversion on this error.
    #[error("unsupported input type {type_name}: expected a {accepted} path value or a path-capable value")]
    UnsupportedInputType {
        /// Descriptive name of the rejected value's type.
        type_name: String,
        /// The constraint set the caller declared.
        accepted: KindSet,
    },

    /// The value was path-capable but produced the wrong variant for the
    /// caller's declared constraint set. Distinct from
    /// [`Error::UnsupportedInputType`]: here the value *was* path-shaped,
    /// it simply returned the wrong concrete kind.
    #[error("constraint violation: got a {actual} path value where {accepted} is required")]
    ConstraintViolation {
        /// The variant the value actually produced.
        actual: PathKind,
        /// The constraint set the caller declared.
        accepted: KindSet,
    },

    /// A capability produced something other than a path value.
    ///
    /// This is a programmer error in the capability's implementation; the
    /// resolver surfaces it to its caller as
    /// [`Error::UnsupportedInputType`].
    #[error("capability produced a non-path result: {type_name}")]
    InvalidCapabilityResult {
        /// Descriptive name of the offending result's type.
        type_name: String,
    },

    /// Encoding encountered a reserved escape code point that was not
    /// produced by this library's own decoding and cannot be mapped back
    /// to a single original byte. Never silently dropped or substituted.
    #[error("malformed escape sequence: U+{code_point:04X} at byte offset {position} was not produced by decoding")]
    MalformedEscapeSequence {
        /// The offending code point.
        code_point: u32,
        /// Byte offset of the code point in the textual input.
        position: usize,
    },

    /// Decoding under the strict policy hit a byte that is not valid
    /// under the configured encoding.
    #[error("undecodable byte 0x{byte:02X} at offset {position} under {encoding}")]
    UndecodableBytes {
        /// The first offending byte.
        byte: u8,
        /// Offset of the byte in the raw input.
        position: usize,
        /// The encoding in effect.
        encoding: Encoding,
    },

    /// Encoding hit a character that the configured encoding cannot
    /// represent.
    #[error("unencodable character {character:?} at byte offset {position} under {encoding}")]
    UnencodableText {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the textual input.
        position: usize,
        /// The encoding in effect.
        encoding: Encoding,
    },

    /// An encoding name was not recognized.
    #[error("unknown encoding: {name}")]
    UnknownEncoding {
        /// The unrecognized name.
        name: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An externally supplied capability failed when invoked.
    ///
    /// The failure propagates unchanged; the dispatcher never masks or
    /// retries it.
    #[error("capability invocation failed: {source}")]
    Capability {
        /// The underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error indicates an input with no path-producing capability.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrep::{Error, KindSet};
    ///
    /// let err = Error::UnsupportedInputType {
    ///     type_name: "i32".to_string(),
    ///     accepted: KindSet::ANY,
    /// };
    /// assert!(err.is_unsupported());
    /// ```
    #[must_use]
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::UnsupportedInputType { .. })
    }

    /// Check if error indicates a capability producing the wrong variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrep::{Error, KindSet, PathKind};
    ///
    /// let err = Error::ConstraintViolation {
    ///     actual: PathKind::Bytes,
    ///     accepted: KindSet::TEXT,
    /// };
    /// assert!(err.is_constraint_violation());
    /// ```
    #[must_use]
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Check if error indicates misuse of the reserved escape block.
    #[must_use]
    pub fn is_malformed_escape(&self) -> bool {
        matches!(self, Self::MalformedEscapeSequence { .. })
    }
}
