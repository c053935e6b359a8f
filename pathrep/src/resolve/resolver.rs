//! The central resolution entry point.
//!
//! `resolve` turns an arbitrary input into a path value of an acceptable
//! kind, or fails with a typed error. It deliberately never transcodes:
//! a capability that produces the wrong variant for the caller's
//! constraint set is a hard failure, because silently transcoding could
//! mask encoding ambiguity the caller restricted the set to avoid.
//! Callers that want cross-variant coercion use the transcoder
//! explicitly and get the round-trip guarantee.

use crate::error::{Error, Result};
use crate::resolve::capability::{dispatch, DispatchError, PathInput};
use crate::value::{KindSet, PathValue};

/// Resolve an arbitrary input to a path value of an acceptable kind.
///
/// A concrete value whose variant is in `accepted` is returned
/// unchanged, without consulting the dispatcher. Anything else goes
/// through the capability protocol; the produced value's variant is
/// then checked against `accepted`.
///
/// # Errors
///
/// - [`Error::UnsupportedInputType`] if the input neither is an
///   acceptable path value nor produces one: it declares no capability,
///   or its capability returned a non-path result.
/// - [`Error::ConstraintViolation`] if the input was path-capable but
///   produced a variant outside `accepted`.
/// - Any error raised by the capability itself, propagated unchanged.
///
/// # Examples
///
/// ```
/// use pathrep::{resolve, KindSet, PathInput, PathValue};
///
/// // Identity: an acceptable concrete value passes through.
/// let value = resolve(PathValue::text("/etc/hosts"), KindSet::TEXT).unwrap();
/// assert_eq!(value, PathValue::text("/etc/hosts"));
///
/// // An opaque value is rejected, never stringified.
/// let err = resolve(PathInput::opaque(&42), KindSet::ANY).unwrap_err();
/// assert!(err.is_unsupported());
/// ```
pub fn resolve<'a>(input: impl Into<PathInput<'a>>, accepted: KindSet) -> Result<PathValue> {
    let input = match input.into() {
        // Identity short-circuit: no dispatch, no copy.
        PathInput::Value(value) if accepted.contains(value.kind()) => return Ok(value),
        other => other,
    };

    match dispatch(&input) {
        Ok(value) => {
            if accepted.contains(value.kind()) {
                Ok(value)
            } else {
                Err(Error::ConstraintViolation {
                    actual: value.kind(),
                    accepted,
                })
            }
        }
        Err(DispatchError::NotCapable { type_name }) => Err(Error::UnsupportedInputType {
            type_name: type_name.to_string(),
            accepted,
        }),
        Err(DispatchError::InvalidResult { type_name }) => Err(Error::UnsupportedInputType {
            type_name,
            accepted,
        }),
        Err(DispatchError::Failed(err)) => Err(err),
    }
}

/// Resolve for a native-call site that accepts either variant.
///
/// Exactly [`resolve`] with [`KindSet::ANY`]: the boundary operation for
/// the lowest-level hand-off to an operating-system call. There is no
/// implicit default variant; a capability polymorphic over both variants
/// yields whichever it produces.
///
/// # Errors
///
/// Same failure surface as [`resolve`], minus the constraint check that
/// [`KindSet::ANY`] makes vacuous.
///
/// # Examples
///
/// ```
/// use pathrep::{resolve_any, PathValue};
///
/// let value = resolve_any(PathValue::bytes(b"/dev/null".to_vec())).unwrap();
/// assert_eq!(value.as_raw_bytes(), Some(&b"/dev/null"[..]));
/// ```
pub fn resolve_any<'a>(input: impl Into<PathInput<'a>>) -> Result<PathValue> {
    resolve(input, KindSet::ANY)
}
