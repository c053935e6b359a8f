//! Decoding of raw path bytes into text.
//!
//! Under the escape policy this is a total function: maximal valid
//! subsequences decode normally and each undecodable byte becomes one
//! reserved escape code point. Validly decoded scalars that land inside
//! the reserved block are themselves re-escaped byte-by-byte, so the
//! output never contains a reserved scalar the encoder would misread.

use crate::codec::context::{Encoding, EscapePolicy};
use crate::codec::{escape_byte, is_reserved};
use crate::error::{Error, Result};

/// Decode raw bytes under the given encoding and policy.
///
/// # Errors
///
/// Returns [`Error::UndecodableBytes`] under [`EscapePolicy::Strict`];
/// total under [`EscapePolicy::Escape`].
pub fn decode(bytes: &[u8], encoding: Encoding, policy: EscapePolicy) -> Result<String> {
    match encoding {
        Encoding::Utf8 => decode_utf8(bytes, policy),
        Encoding::Ascii => decode_ascii(bytes, policy),
    }
}

fn decode_utf8(bytes: &[u8], policy: EscapePolicy) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut escaped = 0usize;
    let mut offset = 0usize;

    for chunk in bytes.utf8_chunks() {
        let valid = chunk.valid();
        match policy {
            // Standard decoding: reserved scalars in the input pass
            // through untouched, like any other valid text.
            EscapePolicy::Strict => out.push_str(valid),
            EscapePolicy::Escape => push_valid(&mut out, valid, &mut escaped),
        }
        offset += valid.len();

        for &byte in chunk.invalid() {
            match policy {
                EscapePolicy::Strict => {
                    return Err(Error::UndecodableBytes {
                        byte,
                        position: offset,
                        encoding: Encoding::Utf8,
                    });
                }
                EscapePolicy::Escape => {
                    out.push(escape_byte(byte));
                    escaped += 1;
                }
            }
            offset += 1;
        }
    }

    if escaped > 0 {
        log::debug!("escaped {escaped} undecodable byte(s) while decoding {offset} byte(s)");
    }
    Ok(out)
}

/// Append a valid UTF-8 run, re-escaping any scalar that falls in the
/// reserved block so the block stays collision-free.
fn push_valid(out: &mut String, valid: &str, escaped: &mut usize) {
    if !valid.chars().any(is_reserved) {
        out.push_str(valid);
        return;
    }
    for ch in valid.chars() {
        if is_reserved(ch) {
            let mut buf = [0u8; 4];
            for &byte in ch.encode_utf8(&mut buf).as_bytes() {
                out.push(escape_byte(byte));
                *escaped += 1;
            }
        } else {
            out.push(ch);
        }
    }
}

fn decode_ascii(bytes: &[u8], policy: EscapePolicy) -> Result<String> {
    let mut out = String::with_capacity(bytes.len());
    let mut escaped = 0usize;

    for (position, &byte) in bytes.iter().enumerate() {
        if byte < 0x80 {
            out.push(char::from(byte));
        } else {
            match policy {
                EscapePolicy::Strict => {
                    return Err(Error::UndecodableBytes {
                        byte,
                        position,
                        encoding: Encoding::Ascii,
                    });
                }
                EscapePolicy::Escape => {
                    out.push(escape_byte(byte));
                    escaped += 1;
                }
            }
        }
    }

    if escaped > 0 {
        log::debug!(
            "escaped {escaped} undecodable byte(s) while decoding {} byte(s)",
            bytes.len()
        );
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escape_ctx(encoding: Encoding) -> impl Fn(&[u8]) -> String {
        move |bytes| decode(bytes, encoding, EscapePolicy::Escape).unwrap()
    }

    #[test]
    fn test_clean_utf8_decodes_without_escapes() {
        let decode = escape_ctx(Encoding::Utf8);
        let text = decode("caf\u{e9}/data".as_bytes());
        assert_eq!(text, "caf\u{e9}/data");
        assert!(!text.chars().any(is_reserved));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(escape_ctx(Encoding::Utf8)(b""), "");
        assert_eq!(escape_ctx(Encoding::Ascii)(b""), "");
    }

    #[test]
    fn test_single_invalid_byte_yields_single_escape() {
        let text = escape_ctx(Encoding::Utf8)(b"ab\xFFcd");
        let reserved: Vec<char> = text.chars().filter(|&c| is_reserved(c)).collect();
        assert_eq!(reserved, vec!['\u{F7FF}']);
        assert_eq!(text, "ab\u{F7FF}cd");
    }

    #[test]
    fn test_truncated_multibyte_sequence_at_end() {
        // First two bytes of a three-byte sequence.
        let text = escape_ctx(Encoding::Utf8)(b"x\xE2\x82");
        assert_eq!(text, "x\u{F7E2}\u{F782}");
    }

    #[test]
    fn test_overlong_encoding_escaped_per_byte() {
        // 0xC0 0xAF is an overlong encoding of '/'.
        let text = escape_ctx(Encoding::Utf8)(b"\xC0\xAF");
        assert_eq!(text, "\u{F7C0}\u{F7AF}");
    }

    #[test]
    fn test_lone_continuation_byte() {
        let text = escape_ctx(Encoding::Utf8)(b"\x80");
        assert_eq!(text, "\u{F780}");
    }

    #[test]
    fn test_embedded_nul_passes_through() {
        let text = escape_ctx(Encoding::Utf8)(b"a\x00b");
        assert_eq!(text, "a\u{0}b");
    }

    #[test]
    fn test_reserved_scalar_in_valid_input_is_re_escaped() {
        // The UTF-8 encoding of U+F741 is a validly decodable sequence
        // that would collide with the escape block if passed through.
        let bytes = "\u{F741}".as_bytes();
        let text = escape_ctx(Encoding::Utf8)(bytes);
        assert_eq!(text.chars().count(), bytes.len());
        assert!(text.chars().all(is_reserved));
    }

    #[test]
    fn test_strict_policy_reports_first_bad_byte() {
        let err = decode(b"ok\xFE\xFF", Encoding::Utf8, EscapePolicy::Strict).unwrap_err();
        match err {
            Error::UndecodableBytes {
                byte,
                position,
                encoding,
            } => {
                assert_eq!(byte, 0xFE);
                assert_eq!(position, 2);
                assert_eq!(encoding, Encoding::Utf8);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_policy_passes_reserved_scalars_through() {
        let bytes = "\u{F741}".as_bytes();
        let text = decode(bytes, Encoding::Utf8, EscapePolicy::Strict).unwrap();
        assert_eq!(text, "\u{F741}");
    }

    #[test]
    fn test_ascii_escapes_high_bytes() {
        let text = escape_ctx(Encoding::Ascii)(b"a\x80\xFFz");
        assert_eq!(text, "a\u{F780}\u{F7FF}z");
    }

    #[test]
    fn test_ascii_strict_rejects_high_byte() {
        let err = decode(b"abc\x9C", Encoding::Ascii, EscapePolicy::Strict).unwrap_err();
        match err {
            Error::UndecodableBytes { byte, position, .. } => {
                assert_eq!(byte, 0x9C);
                assert_eq!(position, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
