//! Encoding of textual path data into raw bytes.
//!
//! Under the escape policy, escape code points produced by decoding
//! translate back to their original single byte instead of going
//! through the normal encoding rules; that is what makes
//! decode-then-encode reproduce the original bytes exactly. A reserved
//! code point that decoding cannot have produced is a hard error, never
//! silently mapped to an arbitrary byte.
//!
//! Under the strict policy the reserved block carries no special
//! meaning in either direction: strict decoding passes validly encoded
//! reserved scalars through as ordinary text, so strict encoding must
//! encode them back through the normal rules to stay byte-faithful.

use crate::codec::context::{Encoding, EscapePolicy};
use crate::codec::{is_reserved, unescape_byte};
use crate::error::{Error, Result};

/// Encode text under the given encoding and policy.
///
/// # Errors
///
/// Returns [`Error::MalformedEscapeSequence`] under
/// [`EscapePolicy::Escape`] for a reserved code point outside the range
/// decoding produces, or [`Error::UnencodableText`] when the encoding
/// cannot represent a character.
pub fn encode(text: &str, encoding: Encoding, policy: EscapePolicy) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(text.len());

    for (position, ch) in text.char_indices() {
        if policy == EscapePolicy::Escape {
            if let Some(byte) = unescape_byte(ch) {
                out.push(byte);
                continue;
            }
            if is_reserved(ch) {
                return Err(Error::MalformedEscapeSequence {
                    code_point: ch as u32,
                    position,
                });
            }
        }
        match encoding {
            Encoding::Utf8 => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            }
            Encoding::Ascii => match u8::try_from(u32::from(ch)) {
                Ok(byte) if byte.is_ascii() => out.push(byte),
                _ => {
                    return Err(Error::UnencodableText {
                        character: ch,
                        position,
                        encoding: Encoding::Ascii,
                    });
                }
            },
        }
    }

    Ok(out)
}
