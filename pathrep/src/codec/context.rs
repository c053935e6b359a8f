//! Process-wide encoding configuration.
//!
//! The encoding context pairs a named textual encoding with the policy
//! for undecodable bytes. It is established once at process start (from
//! `PATHREP_*` environment variables, or explicitly via
//! [`EncodingContext::install`]) and never mutated afterwards: one
//! encoding epoch per process. Path values produced under one epoch are
//! only transcode-compatible with another epoch's raw bytes if the
//! encoding itself is unchanged.
//!
//! Every codec operation also accepts an explicit context, so multiple
//! encodings stay testable inside one process.

use std::env;
use std::fmt;
use std::sync::OnceLock;

use crate::codec::{decode, encode};
use crate::error::{Error, Result};
use crate::value::PathValue;

/// Environment variable naming the textual encoding.
pub const ENCODING_ENV: &str = "PATHREP_ENCODING";

/// Environment variable naming the undecodable-byte policy.
pub const ESCAPE_POLICY_ENV: &str = "PATHREP_ESCAPE_POLICY";

static GLOBAL: OnceLock<EncodingContext> = OnceLock::new();

/// A named textual encoding for path transcoding.
///
/// # Examples
///
/// ```
/// use pathrep::Encoding;
///
/// assert_eq!(Encoding::parse("UTF-8").unwrap(), Encoding::Utf8);
/// assert_eq!(Encoding::parse("us-ascii").unwrap(), Encoding::Ascii);
/// assert!(Encoding::parse("latin-7").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Encoding {
    /// UTF-8 (the default).
    #[default]
    Utf8,
    /// 7-bit ASCII; every byte above 0x7F is undecodable.
    Ascii,
}

impl Encoding {
    /// Parse an encoding name.
    ///
    /// Recognizes "utf-8"/"utf8" and "ascii"/"us-ascii",
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            _ => Err(Error::UnknownEncoding {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf-8"),
            Self::Ascii => write!(f, "ascii"),
        }
    }
}

/// Policy for bytes that are not valid under the configured encoding.
///
/// # Examples
///
/// ```
/// use pathrep::EscapePolicy;
///
/// assert_eq!(EscapePolicy::parse("escape").unwrap(), EscapePolicy::Escape);
/// assert_eq!(EscapePolicy::parse("STRICT").unwrap(), EscapePolicy::Strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapePolicy {
    /// Substitute each undecodable byte with a reserved escape code
    /// point, making decoding total and reversible (the default).
    #[default]
    Escape,
    /// Fail on the first undecodable byte.
    Strict,
}

impl EscapePolicy {
    /// Parse a policy name ("escape" or "strict", case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for any other name.
    pub fn parse(name: &str) -> Result<Self> {
        match name.to_lowercase().as_str() {
            "escape" => Ok(Self::Escape),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::Validation {
                field: ESCAPE_POLICY_ENV.to_string(),
                message: format!("unrecognized escape policy: {name}"),
            }),
        }
    }
}

impl fmt::Display for EscapePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Escape => write!(f, "escape"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Process-wide encoding configuration: encoding name plus
/// undecodable-byte policy.
///
/// # Examples
///
/// ```
/// use pathrep::{Encoding, EncodingContext, EscapePolicy};
///
/// let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
/// assert_eq!(ctx.decode(b"/tmp").unwrap(), "/tmp");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodingContext {
    encoding: Encoding,
    policy: EscapePolicy,
}

impl EncodingContext {
    /// Create a context with an explicit encoding and policy.
    #[must_use]
    pub const fn new(encoding: Encoding, policy: EscapePolicy) -> Self {
        Self { encoding, policy }
    }

    /// Read the context from `PATHREP_ENCODING` and
    /// `PATHREP_ESCAPE_POLICY`. Unset variables fall back to the
    /// defaults (UTF-8, escape).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEncoding`] or [`Error::Validation`] if a
    /// variable is set to an unrecognized value.
    pub fn from_env() -> Result<Self> {
        let encoding = match env::var(ENCODING_ENV) {
            Ok(name) => Encoding::parse(&name)?,
            Err(_) => Encoding::default(),
        };
        let policy = match env::var(ESCAPE_POLICY_ENV) {
            Ok(name) => EscapePolicy::parse(&name)?,
            Err(_) => EscapePolicy::default(),
        };
        Ok(Self { encoding, policy })
    }

    /// The process-wide context.
    ///
    /// The first call establishes the epoch from the environment; an
    /// invalid environment value logs a warning and falls back to the
    /// defaults. Subsequent calls return the same context.
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(|| match Self::from_env() {
            Ok(ctx) => ctx,
            Err(err) => {
                log::warn!("invalid encoding configuration in environment: {err}; using defaults");
                Self::default()
            }
        })
    }

    /// Install the process-wide context explicitly, before first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the global context was already
    /// established, either by a prior install or by a
    /// [`EncodingContext::global`] call.
    pub fn install(ctx: Self) -> Result<()> {
        GLOBAL.set(ctx).map_err(|_| Error::Validation {
            field: "encoding context".to_string(),
            message: "process-wide encoding context already established".to_string(),
        })
    }

    /// The configured encoding.
    #[must_use]
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The configured undecodable-byte policy.
    #[must_use]
    pub const fn policy(&self) -> EscapePolicy {
        self.policy
    }

    /// Decode raw path bytes into text.
    ///
    /// Total under [`EscapePolicy::Escape`]: undecodable bytes become
    /// reserved escape code points, one per byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndecodableBytes`] under
    /// [`EscapePolicy::Strict`] only.
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        decode::decode(bytes, self.encoding, self.policy)
    }

    /// Encode textual path data into raw bytes.
    ///
    /// Under [`EscapePolicy::Escape`], escape code points translate
    /// back to their original single byte. Under
    /// [`EscapePolicy::Strict`] the reserved block has no special
    /// meaning and every scalar encodes through the normal rules,
    /// mirroring strict decoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedEscapeSequence`] under
    /// [`EscapePolicy::Escape`] for a reserved code point that decoding
    /// cannot have produced, or [`Error::UnencodableText`] when the
    /// encoding cannot represent a character.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        encode::encode(text, self.encoding, self.policy)
    }

    /// Convert a path value to its textual variant.
    ///
    /// Identity when the value is already textual.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`EncodingContext::decode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrep::{EncodingContext, PathValue};
    ///
    /// let ctx = EncodingContext::default();
    /// let text = ctx.to_text(PathValue::bytes(b"/tmp".to_vec())).unwrap();
    /// assert_eq!(text, PathValue::text("/tmp"));
    /// ```
    pub fn to_text(&self, value: PathValue) -> Result<PathValue> {
        match value {
            PathValue::Text(_) => Ok(value),
            PathValue::Bytes(bytes) => self.decode(&bytes).map(PathValue::Text),
        }
    }

    /// Convert a path value to its raw byte variant.
    ///
    /// Identity when the value is already raw.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`EncodingContext::encode`].
    pub fn to_bytes(&self, value: PathValue) -> Result<PathValue> {
        match value {
            PathValue::Bytes(_) => Ok(value),
            PathValue::Text(text) => self.encode(&text).map(PathValue::Bytes),
        }
    }
}
