#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathrep
//!
//! A library for normalizing heterogeneous representations of a
//! filesystem path — a capability object, a textual sequence, or a raw
//! byte sequence — into the single representation a system call
//! actually requires, without ever silently discarding information.
//!
//! ## Core Types
//!
//! - [`PathValue`], [`PathKind`] and [`KindSet`]: the two-variant path
//!   representation and the caller-declared constraint set
//! - [`PathCapable`] and [`PathInput`]: the path-producing capability
//!   protocol
//! - [`EncodingContext`]: process-wide transcoding configuration with
//!   reversible escaping
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Entry points
//!
//! [`resolve`] obtains a path value of an acceptable kind from an
//! arbitrary input, and never coerces across variants. [`decode`] and
//! [`encode`] transcode explicitly, with the round-trip guarantee that
//! encoding a decoded byte sequence reproduces it exactly.
//!
//! ## Examples
//!
//! ```
//! use pathrep::{resolve, EncodingContext, KindSet, PathValue};
//!
//! // A concrete value of an acceptable kind passes through unchanged.
//! let value = resolve(PathValue::text("/etc/hosts"), KindSet::TEXT).unwrap();
//! assert_eq!(value.as_text(), Some("/etc/hosts"));
//!
//! // Raw bytes that are not valid UTF-8 still have a textual form,
//! // and the original bytes are recoverable exactly.
//! let ctx = EncodingContext::default();
//! let raw = b"backup\xFF2026";
//! let text = ctx.decode(raw).unwrap();
//! assert_eq!(ctx.encode(&text).unwrap(), raw);
//! ```

pub mod codec;
pub mod error;
pub mod logging;
pub mod resolve;
pub mod scan;
pub mod value;

// Re-export key types at crate root for convenience
pub use codec::{decode, encode, Encoding, EncodingContext, EscapePolicy, ESCAPE_BASE};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use resolve::{resolve, resolve_any, DynSource, PathCapable, PathInput};
pub use scan::{scan_dir, DirEntry};
pub use value::{KindSet, PathKind, PathValue};
