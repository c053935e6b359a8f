//! Integration tests for the resolution entry point.
//!
//! This test suite verifies that:
//! - Acceptable concrete values short-circuit without capability dispatch
//! - Path-capable objects resolve through the capability protocol
//! - Constraint sets are enforced with a hard failure, never an implicit
//!   transcode
//! - Values without the capability are rejected instead of stringified
//! - Capability failures reach the caller unchanged

use std::any::Any;
use std::cell::Cell;
use std::path::PathBuf;

use pathrep::{
    resolve, resolve_any, DynSource, Error, KindSet, PathCapable, PathInput, PathKind, PathValue,
    Result,
};

/// A capability whose invocations are observable, to prove the resolver
/// short-circuits on acceptable concrete values and re-invokes otherwise.
struct CountingSource {
    value: PathValue,
    calls: Cell<u32>,
}

impl CountingSource {
    fn new(value: PathValue) -> Self {
        Self {
            value,
            calls: Cell::new(0),
        }
    }
}

impl PathCapable for CountingSource {
    fn fs_path(&self) -> Result<PathValue> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.value.clone())
    }
}

#[test]
fn test_identity_short_circuit_returns_same_contents() {
    let text = resolve(PathValue::text("x"), KindSet::ANY).unwrap();
    assert_eq!(text, PathValue::text("x"));

    let raw = resolve(PathValue::bytes(vec![0x78, 0xFF]), KindSet::ANY).unwrap();
    assert_eq!(raw, PathValue::bytes(vec![0x78, 0xFF]));
}

#[test]
fn test_capability_returns_textual_value() {
    let source = CountingSource::new(PathValue::text("x"));
    let value = resolve(PathInput::capable(&source), KindSet::TEXT).unwrap();
    assert_eq!(value, PathValue::text("x"));
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_capability_wrong_variant_fails_without_transcoding() {
    let source = CountingSource::new(PathValue::text("x"));
    let err = resolve(PathInput::capable(&source), KindSet::BYTES).unwrap_err();
    match err {
        Error::ConstraintViolation { actual, accepted } => {
            assert_eq!(actual, PathKind::Text);
            assert_eq!(accepted, KindSet::BYTES);
        }
        other => panic!("unexpected error: {other}"),
    }
    // The capability WAS invoked; only its output failed the constraint.
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_no_caching_between_resolutions() {
    let source = CountingSource::new(PathValue::text("live"));
    let input = PathInput::capable(&source);
    resolve(input, KindSet::TEXT).unwrap();
    let input = PathInput::capable(&source);
    resolve(input, KindSet::TEXT).unwrap();
    assert_eq!(source.calls.get(), 2);
}

#[test]
fn test_integer_is_rejected_not_stringified() {
    let err = resolve(PathInput::opaque(&42), KindSet::ANY).unwrap_err();
    match err {
        Error::UnsupportedInputType {
            type_name,
            accepted,
        } => {
            assert_eq!(type_name, "i32");
            assert_eq!(accepted, KindSet::ANY);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_none_like_sentinel_is_rejected() {
    // The motivating bug class: a "no value present" sentinel must never
    // resolve to a textual path.
    let sentinel: Option<String> = None;
    let err = resolve_any(PathInput::opaque(&sentinel)).unwrap_err();
    assert!(err.is_unsupported());
}

#[test]
fn test_capability_returning_bool_is_unsupported_not_a_crash() {
    let source = DynSource::new(|| Box::new(true) as Box<dyn Any>);
    let err = resolve(PathInput::capable(&source), KindSet::ANY).unwrap_err();
    match err {
        Error::UnsupportedInputType { type_name, .. } => assert_eq!(type_name, "bool"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_dyn_source_with_path_result_resolves() {
    let source = DynSource::new(|| Box::new(PathValue::text("/plugin")) as Box<dyn Any>);
    let value = resolve(PathInput::capable(&source), KindSet::TEXT).unwrap();
    assert_eq!(value, PathValue::text("/plugin"));
}

#[test]
fn test_capability_error_propagates_unchanged() {
    struct Hung;

    impl PathCapable for Hung {
        fn fs_path(&self) -> Result<PathValue> {
            Err(Error::Capability {
                source: "backing handle revoked".into(),
            })
        }
    }

    let err = resolve_any(PathInput::capable(&Hung)).unwrap_err();
    match err {
        Error::Capability { source } => {
            assert!(source.to_string().contains("backing handle revoked"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[cfg(unix)]
fn test_std_path_resolves_to_native_variant() {
    let path = PathBuf::from("/usr/share");
    let value = resolve(PathInput::capable(&path), KindSet::BYTES).unwrap();
    assert_eq!(value, PathValue::bytes(b"/usr/share".to_vec()));

    // The same input under a text-only constraint is a violation, not a
    // conversion.
    let err = resolve(PathInput::capable(&path), KindSet::TEXT).unwrap_err();
    assert!(err.is_constraint_violation());
}

#[test]
#[cfg(unix)]
fn test_borrowed_os_str_resolves_through_reference() {
    use std::ffi::OsStr;

    let os: &OsStr = OsStr::new("/usr");
    let value = resolve_any(PathInput::capable(&os)).unwrap();
    assert_eq!(value, PathValue::bytes(b"/usr".to_vec()));
}

#[test]
fn test_resolve_any_is_unconstrained_boundary() {
    let text = resolve_any(PathValue::text("a")).unwrap();
    assert_eq!(text.kind(), PathKind::Text);

    let raw = resolve_any(vec![0xA0u8]).unwrap();
    assert_eq!(raw.kind(), PathKind::Bytes);
}
