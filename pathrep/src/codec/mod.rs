//! Transcoding between textual and raw byte path representations.
//!
//! The codec converts path values between their two variants under a
//! process-wide [`EncodingContext`], with a reversible escape mechanism
//! for bytes that are not valid under the configured encoding.
//!
//! # Round-trip escaping
//!
//! Decoding is total: any raw byte sequence has a textual form. Bytes
//! that standard decoding rejects are substituted, one code point per
//! byte, with a reserved code point from the private-use block
//! `U+F700..=U+F7FF` (`U+F700 + byte`). Encoding maps those code points
//! back to their original single byte, so for every raw value `r`:
//!
//! ```
//! use pathrep::{Encoding, EncodingContext, EscapePolicy};
//!
//! let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
//! let raw = b"caf\xC3\xA9/\xFF\xFEdata";
//! let text = ctx.decode(raw).unwrap();
//! assert_eq!(ctx.encode(&text).unwrap(), raw);
//! ```
//!
//! Standard decoding can only fail on bytes `0x80..=0xFF` under the
//! supported encodings, so only the upper half of the block is ever
//! produced. A validly decoded scalar that itself falls inside the
//! reserved block is re-escaped byte-by-byte, which keeps the block
//! collision-free: decoded output never contains a reserved scalar that
//! did not come from the escape mechanism, and the byte mapping stays a
//! bijection.
//!
//! # Identity on the requested variant
//!
//! The variant-aware entry points [`EncodingContext::to_text`] and
//! [`EncodingContext::to_bytes`] are the identity when the value already
//! has the requested variant, which makes them safe to call
//! unconditionally on values of unknown variant.

pub mod context;
pub mod decode;
pub mod encode;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use context::{Encoding, EncodingContext, EscapePolicy};

use crate::error::Result;

/// First code point of the reserved escape block.
///
/// A byte `b` that cannot be decoded is represented as the code point
/// `ESCAPE_BASE + b`. The block `U+F700..=U+F7FF` lies in the Unicode
/// private use area.
pub const ESCAPE_BASE: u32 = 0xF700;

/// Decode raw path bytes with the process-wide encoding context.
///
/// Convenience wrapper over [`EncodingContext::global`]; see
/// [`EncodingContext::decode`].
///
/// # Errors
///
/// Returns [`Error::UndecodableBytes`](crate::Error::UndecodableBytes)
/// only when the global context uses [`EscapePolicy::Strict`]. Under the
/// default escape policy this is total.
pub fn decode(bytes: &[u8]) -> Result<String> {
    EncodingContext::global().decode(bytes)
}

/// Encode textual path data with the process-wide encoding context.
///
/// Convenience wrapper over [`EncodingContext::global`]; see
/// [`EncodingContext::encode`].
///
/// # Errors
///
/// Returns
/// [`Error::MalformedEscapeSequence`](crate::Error::MalformedEscapeSequence)
/// under the escape policy on reserved code points not produced by
/// decoding, or
/// [`Error::UnencodableText`](crate::Error::UnencodableText) when the
/// configured encoding cannot represent a character.
pub fn encode(text: &str) -> Result<Vec<u8>> {
    EncodingContext::global().encode(text)
}

/// The escape code point for a byte.
pub(crate) fn escape_byte(byte: u8) -> char {
    // The block U+F700..=U+F7FF is valid Unicode throughout.
    match char::from_u32(ESCAPE_BASE + u32::from(byte)) {
        Some(ch) => ch,
        None => unreachable!(),
    }
}

/// The original byte for an escape code point produced by decoding.
///
/// Only the upper half of the block maps back: the lower half is
/// reserved but never produced, and its appearance in encode input is a
/// malformed escape.
pub(crate) fn unescape_byte(ch: char) -> Option<u8> {
    let cp = ch as u32;
    if (0xF780..=0xF7FF).contains(&cp) {
        // Truncation is exact: cp - ESCAPE_BASE is in 0x80..=0xFF.
        #[allow(clippy::cast_possible_truncation)]
        Some((cp - ESCAPE_BASE) as u8)
    } else {
        None
    }
}

/// Whether a character lies anywhere in the reserved block.
pub(crate) fn is_reserved(ch: char) -> bool {
    ('\u{F700}'..='\u{F7FF}').contains(&ch)
}
