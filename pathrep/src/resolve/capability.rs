//! The path-producing capability protocol.
//!
//! A path-capable value exposes a single nullary operation producing a
//! [`PathValue`]. The dispatcher checks for the capability as a trait
//! query with a typed negative result; there is no reflection and no
//! exception-as-control-flow, and a value without the capability is
//! never stringified as a fallback.

use std::any::Any;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::value::PathValue;

/// The capability to produce a path value on demand.
///
/// Implementations are read-only to this library: the single extraction
/// call never mutates or retains the value. The dispatcher performs no
/// caching either, so a capability backed by a live resource is
/// re-invoked on every call.
///
/// # Examples
///
/// ```
/// use pathrep::{PathCapable, PathValue, Result};
///
/// struct Workspace {
///     root: String,
/// }
///
/// impl PathCapable for Workspace {
///     fn fs_path(&self) -> Result<PathValue> {
///         Ok(PathValue::text(self.root.clone()))
///     }
/// }
///
/// let ws = Workspace { root: "/srv/ws".into() };
/// assert_eq!(ws.fs_path().unwrap(), PathValue::text("/srv/ws"));
/// ```
pub trait PathCapable {
    /// Produce the path value this object represents.
    ///
    /// # Errors
    ///
    /// Implementations may fail for externally defined reasons (for
    /// example a capability backed by a closed handle); such failures
    /// propagate to the resolver's caller unchanged.
    fn fs_path(&self) -> Result<PathValue>;
}

impl PathCapable for PathValue {
    fn fs_path(&self) -> Result<PathValue> {
        Ok(self.clone())
    }
}

impl PathCapable for OsStr {
    fn fs_path(&self) -> Result<PathValue> {
        PathValue::from_os_str(self)
    }
}

impl PathCapable for OsString {
    fn fs_path(&self) -> Result<PathValue> {
        PathValue::from_os_str(self)
    }
}

impl PathCapable for Path {
    fn fs_path(&self) -> Result<PathValue> {
        PathValue::from_os_str(self.as_os_str())
    }
}

impl PathCapable for PathBuf {
    fn fs_path(&self) -> Result<PathValue> {
        PathValue::from_os_str(self.as_os_str())
    }
}

impl<T: PathCapable + ?Sized> PathCapable for &T {
    fn fs_path(&self) -> Result<PathValue> {
        (**self).fs_path()
    }
}

/// An arbitrary input to the resolver.
///
/// This is the dispatcher's view of "any value": either a concrete path
/// value, a borrowed path-capable object, or an opaque value with no
/// declared capability. Opaque inputs carry only their type description;
/// the value itself can contribute nothing and is rejected with a typed
/// error rather than coerced.
///
/// # Examples
///
/// ```
/// use pathrep::{PathInput, PathValue};
///
/// let from_value: PathInput = PathValue::text("/etc").into();
/// let from_str: PathInput = "/etc".into();
/// let opaque = PathInput::opaque(&42);
/// # let _ = (from_value, from_str, opaque);
/// ```
pub enum PathInput<'a> {
    /// An already-concrete path value.
    Value(PathValue),
    /// A value declaring the path-producing capability.
    Capable {
        /// The capable object; invoked once per resolution.
        source: &'a dyn PathCapable,
        /// Descriptive name of the concrete type, for diagnostics.
        type_name: &'static str,
    },
    /// A value with no declared capability.
    Opaque {
        /// Descriptive name of the rejected type.
        type_name: &'static str,
    },
}

impl<'a> PathInput<'a> {
    /// Wrap a path-capable object.
    ///
    /// Unsized capable types such as [`OsStr`] and [`Path`] enter
    /// through a reference, which is itself path-capable.
    pub fn capable<T: PathCapable>(source: &'a T) -> Self {
        Self::Capable {
            source,
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Wrap a value that declares no path capability.
    ///
    /// Only the type description is retained; resolution of an opaque
    /// input always fails with
    /// [`Error::UnsupportedInputType`](crate::Error::UnsupportedInputType).
    pub fn opaque<T: Any + ?Sized>(_value: &T) -> Self {
        Self::Opaque {
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl From<PathValue> for PathInput<'_> {
    fn from(value: PathValue) -> Self {
        Self::Value(value)
    }
}

impl From<String> for PathInput<'_> {
    fn from(text: String) -> Self {
        Self::Value(PathValue::Text(text))
    }
}

impl From<&str> for PathInput<'_> {
    fn from(text: &str) -> Self {
        Self::Value(PathValue::text(text))
    }
}

impl From<Vec<u8>> for PathInput<'_> {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Value(PathValue::Bytes(bytes))
    }
}

impl From<&[u8]> for PathInput<'_> {
    fn from(bytes: &[u8]) -> Self {
        Self::Value(PathValue::bytes(bytes))
    }
}

/// A bridge for dynamically typed path producers.
///
/// Statically typed capabilities cannot return anything but a
/// [`PathValue`], so the invalid-capability-result case lives here: a
/// producer handing back a `Box<dyn Any>` (a plugin boundary, an
/// embedded interpreter) may return the wrong thing entirely. Results
/// are accepted as [`PathValue`], [`String`], `Vec<u8>` or [`PathBuf`];
/// anything else is reported as
/// [`Error::InvalidCapabilityResult`] with a best-effort description of
/// the offending type.
///
/// # Examples
///
/// ```
/// use std::any::Any;
/// use pathrep::{DynSource, PathCapable, PathValue};
///
/// let good = DynSource::new(|| Box::new(String::from("/opt")) as Box<dyn Any>);
/// assert_eq!(good.fs_path().unwrap(), PathValue::text("/opt"));
///
/// let bad = DynSource::new(|| Box::new(true) as Box<dyn Any>);
/// assert!(bad.fs_path().is_err());
/// ```
pub struct DynSource<F>
where
    F: Fn() -> Box<dyn Any>,
{
    produce: F,
}

impl<F> DynSource<F>
where
    F: Fn() -> Box<dyn Any>,
{
    /// Wrap a dynamically typed producer.
    pub fn new(produce: F) -> Self {
        Self { produce }
    }
}

impl<F> PathCapable for DynSource<F>
where
    F: Fn() -> Box<dyn Any>,
{
    fn fs_path(&self) -> Result<PathValue> {
        let produced = (self.produce)();
        let produced = match produced.downcast::<PathValue>() {
            Ok(value) => return Ok(*value),
            Err(other) => other,
        };
        let produced = match produced.downcast::<String>() {
            Ok(text) => return Ok(PathValue::Text(*text)),
            Err(other) => other,
        };
        let produced = match produced.downcast::<Vec<u8>>() {
            Ok(bytes) => return Ok(PathValue::Bytes(*bytes)),
            Err(other) => other,
        };
        let produced = match produced.downcast::<PathBuf>() {
            Ok(path) => return path.fs_path(),
            Err(other) => other,
        };
        Err(Error::InvalidCapabilityResult {
            type_name: describe_any(&*produced).to_string(),
        })
    }
}

/// Best-effort type description for an unexpected dynamic result.
fn describe_any(value: &dyn Any) -> &'static str {
    if value.is::<bool>() {
        "bool"
    } else if value.is::<i32>() {
        "i32"
    } else if value.is::<i64>() {
        "i64"
    } else if value.is::<u32>() {
        "u32"
    } else if value.is::<u64>() {
        "u64"
    } else if value.is::<f64>() {
        "f64"
    } else if value.is::<char>() {
        "char"
    } else if value.is::<()>() {
        "unit"
    } else {
        "an opaque non-path value"
    }
}

/// Internal dispatch failure; never surfaces past the resolver.
#[derive(Debug)]
pub(crate) enum DispatchError {
    /// The input declares no path-producing capability.
    NotCapable { type_name: &'static str },
    /// The capability produced something other than a path value.
    InvalidResult { type_name: String },
    /// The capability itself failed; propagated unchanged.
    Failed(Error),
}

/// Determine whether the input is path-capable and, if so, invoke the
/// capability. No caching: the underlying value may be time-varying, so
/// each call re-invokes.
pub(crate) fn dispatch(input: &PathInput<'_>) -> std::result::Result<PathValue, DispatchError> {
    match input {
        PathInput::Value(value) => Ok(value.clone()),
        PathInput::Capable { source, type_name } => {
            log::trace!("dispatching path capability on {type_name}");
            source.fs_path().map_err(|err| match err {
                Error::InvalidCapabilityResult { type_name } => {
                    DispatchError::InvalidResult { type_name }
                }
                other => DispatchError::Failed(other),
            })
        }
        PathInput::Opaque { type_name } => Err(DispatchError::NotCapable { type_name }),
    }
}
