//! Capability dispatch and the central resolution entry point.
//!
//! # The implicit-stringification problem
//!
//! The motivating risk of this whole layer: a value that merely *has* a
//! textual form (a sentinel, a number, a debug representation) must
//! never silently resolve to a textual path. Resolution therefore
//! accepts exactly two shapes of input: a concrete [`PathValue`], or an
//! object that declares the path-producing capability by implementing
//! [`PathCapable`]. Everything else is rejected with a typed error.
//!
//! # Dispatch
//!
//! The dispatcher checks the capability as a trait query over
//! [`PathInput`] with a typed negative result. Invoking the capability
//! may have externally defined side effects or failure modes; failures
//! propagate unchanged, and nothing is cached between calls.
//!
//! # No automatic transcoding
//!
//! A capability producing the wrong variant for the caller's constraint
//! set fails with a constraint violation instead of being converted.
//! This asymmetry with the transcoder is intentional: a caller with a
//! narrow constraint set is signaling "I require exactly this
//! representation, unconverted".
//!
//! [`PathValue`]: crate::value::PathValue

pub mod capability;
pub mod resolver;

pub use capability::{DynSource, PathCapable, PathInput};
pub use resolver::{resolve, resolve_any};
