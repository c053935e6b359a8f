//! Property-based tests for the codec escape mechanism.
//!
//! The central property is the round trip: encoding the decoded form of
//! any raw byte sequence reproduces the original bytes exactly, over the
//! full byte alphabet.

use proptest::prelude::*;

use super::context::{Encoding, EncodingContext, EscapePolicy};
use super::is_reserved;

fn byte_sequence_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..4096)
}

fn plain_text_strategy() -> impl Strategy<Value = String> {
    // Printable ASCII: valid under every supported encoding and outside
    // the reserved block.
    "[ -~]{0,256}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // encode(decode(r)) == r for every byte sequence under UTF-8.
    #[test]
    fn utf8_round_trip(bytes in byte_sequence_strategy()) {
        let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
        let text = ctx.decode(&bytes).unwrap();
        prop_assert_eq!(ctx.encode(&text).unwrap(), bytes);
    }

    // Same round trip under ASCII, where every high byte is escaped.
    #[test]
    fn ascii_round_trip(bytes in byte_sequence_strategy()) {
        let ctx = EncodingContext::new(Encoding::Ascii, EscapePolicy::Escape);
        let text = ctx.decode(&bytes).unwrap();
        prop_assert_eq!(ctx.encode(&text).unwrap(), bytes);
    }

    // Decoding well-formed input produces no reserved code points.
    #[test]
    fn clean_input_decodes_without_escapes(text in plain_text_strategy()) {
        let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
        let decoded = ctx.decode(text.as_bytes()).unwrap();
        prop_assert_eq!(&decoded, &text);
        prop_assert!(!decoded.chars().any(is_reserved));
    }

    // One invalid byte among valid bytes produces exactly one escape
    // code point, in the corresponding position.
    #[test]
    fn single_invalid_byte_single_escape(
        prefix in "[a-z/._-]{0,32}",
        suffix in "[a-z/._-]{0,32}",
        byte in 0xF8u8..,
    ) {
        let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
        let mut bytes = prefix.clone().into_bytes();
        bytes.push(byte);
        bytes.extend_from_slice(suffix.as_bytes());

        let text = ctx.decode(&bytes).unwrap();
        let reserved: Vec<usize> = text
            .char_indices()
            .filter(|&(_, c)| is_reserved(c))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(reserved.len(), 1);
        prop_assert_eq!(reserved[0], prefix.len());
    }

    // Strict and escape policies agree wherever strict succeeds.
    #[test]
    fn strict_agrees_with_escape_on_valid_input(text in plain_text_strategy()) {
        let strict = EncodingContext::new(Encoding::Utf8, EscapePolicy::Strict);
        let escape = EncodingContext::new(Encoding::Utf8, EscapePolicy::Escape);
        prop_assert_eq!(
            strict.decode(text.as_bytes()).unwrap(),
            escape.decode(text.as_bytes()).unwrap()
        );
    }

    // Strict decode-then-encode is the identity on any valid UTF-8
    // input, reserved-block scalars included.
    #[test]
    fn strict_round_trip_is_identity_on_valid_utf8(text in any::<String>()) {
        let ctx = EncodingContext::new(Encoding::Utf8, EscapePolicy::Strict);
        let decoded = ctx.decode(text.as_bytes()).unwrap();
        prop_assert_eq!(&decoded, &text);
        prop_assert_eq!(ctx.encode(&decoded).unwrap(), text.as_bytes());
    }

    // Decoded output always re-encodes; encode never fails on text that
    // came out of decode.
    #[test]
    fn decode_output_is_always_encodable(bytes in byte_sequence_strategy()) {
        for encoding in [Encoding::Utf8, Encoding::Ascii] {
            let ctx = EncodingContext::new(encoding, EscapePolicy::Escape);
            let text = ctx.decode(&bytes).unwrap();
            prop_assert!(ctx.encode(&text).is_ok());
        }
    }
}
