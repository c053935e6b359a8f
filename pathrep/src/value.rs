//! Core path representation types.
//!
//! This module defines the two-variant path value, its kind tag, and the
//! caller-declared constraint set used by the resolver. A path value is
//! either textual (Unicode scalar values) or raw (platform-native bytes);
//! exactly one of the two is the native variant for a platform family.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Result;

/// The concrete variant of a path value.
///
/// # Examples
///
/// ```
/// use pathrep::{PathKind, PathValue};
///
/// assert_eq!(PathValue::text("/tmp").kind(), PathKind::Text);
/// assert_eq!(PathValue::bytes(b"/tmp".to_vec()).kind(), PathKind::Bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathKind {
    /// A sequence of Unicode scalar values.
    Text,
    /// A sequence of platform-native bytes.
    Bytes,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Bytes => write!(f, "bytes"),
        }
    }
}

/// The set of path value variants a caller is willing to accept.
///
/// Only the three constants are constructible, so a constraint set is
/// never empty.
///
/// # Examples
///
/// ```
/// use pathrep::{KindSet, PathKind};
///
/// assert!(KindSet::ANY.contains(PathKind::Text));
/// assert!(KindSet::ANY.contains(PathKind::Bytes));
/// assert!(!KindSet::TEXT.contains(PathKind::Bytes));
/// assert_eq!(KindSet::ANY.to_string(), "text|bytes");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindSet {
    text: bool,
    bytes: bool,
}

impl KindSet {
    /// Accept only textual path values.
    pub const TEXT: Self = Self {
        text: true,
        bytes: false,
    };

    /// Accept only raw byte path values.
    pub const BYTES: Self = Self {
        text: false,
        bytes: true,
    };

    /// Accept either variant. This is the constraint used at the
    /// lowest-level boundary to an operating-system call.
    pub const ANY: Self = Self {
        text: true,
        bytes: true,
    };

    /// The singleton set for a given kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathrep::{KindSet, PathKind};
    ///
    /// assert_eq!(KindSet::single(PathKind::Text), KindSet::TEXT);
    /// ```
    #[must_use]
    pub const fn single(kind: PathKind) -> Self {
        match kind {
            PathKind::Text => Self::TEXT,
            PathKind::Bytes => Self::BYTES,
        }
    }

    /// Check whether a kind is a member of this set.
    #[must_use]
    pub const fn contains(self, kind: PathKind) -> bool {
        match kind {
            PathKind::Text => self.text,
            PathKind::Bytes => self.bytes,
        }
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.text, self.bytes) {
            (true, false) => write!(f, "text"),
            (false, true) => write!(f, "bytes"),
            _ => write!(f, "text|bytes"),
        }
    }
}

/// A normalized path representation: Unicode text or platform-native bytes.
///
/// Path values are immutable once produced; there is no mutating API, so
/// they may be freely shared across threads without synchronization.
///
/// `PathValue` deliberately does not implement [`std::fmt::Display`]:
/// a raw byte value has no faithful textual form without going through
/// the transcoder, and implicit stringification is exactly what this
/// library exists to prevent.
///
/// # Examples
///
/// ```
/// use pathrep::PathValue;
///
/// let text = PathValue::text("/srv/data");
/// assert_eq!(text.as_text(), Some("/srv/data"));
/// assert_eq!(text.as_raw_bytes(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathValue {
    /// The textual variant.
    Text(String),
    /// The raw byte variant.
    Bytes(Vec<u8>),
}

impl PathValue {
    /// Create a textual path value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw byte path value.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    /// The variant of this value.
    #[must_use]
    pub const fn kind(&self) -> PathKind {
        match self {
            Self::Text(_) => PathKind::Text,
            Self::Bytes(_) => PathKind::Bytes,
        }
    }

    /// Borrow the textual contents, if this is a textual value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes(_) => None,
        }
    }

    /// Borrow the raw bytes, if this is a raw byte value.
    #[must_use]
    pub fn as_raw_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Text(_) => None,
            Self::Bytes(bytes) => Some(bytes),
        }
    }

    /// The length of the underlying sequence: characters are counted as
    /// their encoded byte length for textual values, bytes directly for
    /// raw values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Bytes(bytes) => bytes.len(),
        }
    }

    /// Whether the underlying sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the platform's native variant from an OS string.
    ///
    /// On POSIX-like systems this yields a raw byte value carrying the
    /// exact platform bytes. Elsewhere, the native variant is textual and
    /// non-Unicode data is a typed error rather than a lossy conversion.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] on non-POSIX platforms if the OS
    /// string is not valid Unicode.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsStr;
    /// use pathrep::PathValue;
    ///
    /// let value = PathValue::from_os_str(OsStr::new("/tmp/demo")).unwrap();
    /// # #[cfg(unix)]
    /// assert_eq!(value, PathValue::bytes(b"/tmp/demo".to_vec()));
    /// ```
    pub fn from_os_str(os: &OsStr) -> Result<Self> {
        native_from_os(os)
    }

    /// Convert into an OS string for handing to a system call.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] on non-POSIX platforms if this is a
    /// raw byte value that is not valid Unicode.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ffi::OsString;
    /// use pathrep::PathValue;
    ///
    /// let os = PathValue::text("/tmp/demo").into_os_string().unwrap();
    /// assert_eq!(os, OsString::from("/tmp/demo"));
    /// ```
    pub fn into_os_string(self) -> Result<OsString> {
        match self {
            Self::Text(text) => Ok(OsString::from(text)),
            Self::Bytes(bytes) => bytes_to_os(bytes),
        }
    }

    /// Convert into a [`PathBuf`] for handing to a system call.
    ///
    /// # Errors
    ///
    /// Same failure surface as [`PathValue::into_os_string`].
    pub fn into_path_buf(self) -> Result<PathBuf> {
        self.into_os_string().map(PathBuf::from)
    }
}

impl Serialize for PathValue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("PathValue", 2)?;
        match self {
            Self::Text(text) => {
                state.serialize_field("kind", &PathKind::Text)?;
                state.serialize_field("value", text)?;
            }
            Self::Bytes(bytes) => {
                state.serialize_field("kind", &PathKind::Bytes)?;
                state.serialize_field("value", bytes)?;
            }
        }
        state.end()
    }
}

#[cfg(unix)]
fn native_from_os(os: &OsStr) -> Result<PathValue> {
    use std::os::unix::ffi::OsStrExt;
    Ok(PathValue::Bytes(os.as_bytes().to_vec()))
}

#[cfg(not(unix))]
fn native_from_os(os: &OsStr) -> Result<PathValue> {
    use crate::error::Error;
    match os.to_str() {
        Some(text) => Ok(PathValue::Text(text.to_owned())),
        None => Err(Error::Validation {
            field: "os string".to_string(),
            message: "not valid Unicode on a platform with textual native paths".to_string(),
        }),
    }
}

#[cfg(unix)]
fn bytes_to_os(bytes: Vec<u8>) -> Result<OsString> {
    use std::os::unix::ffi::OsStringExt;
    Ok(OsString::from_vec(bytes))
}

#[cfg(not(unix))]
fn bytes_to_os(bytes: Vec<u8>) -> Result<OsString> {
    use crate::error::Error;
    String::from_utf8(bytes)
        .map(OsString::from)
        .map_err(|_| Error::Validation {
            field: "raw bytes".to_string(),
            message: "not valid Unicode on a platform with textual native paths".to_string(),
        })
}
