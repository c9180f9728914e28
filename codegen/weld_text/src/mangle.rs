//! Identifier mangling.

/// Returns an identifier-safe copy of `input`: every byte that is not
/// ASCII alphanumeric is replaced with `_`.
///
/// Unlike the stream transforms, this is a 1:1 rewrite of an in-memory
/// copy -- output byte length always equals input byte length. Bytes of
/// multi-byte UTF-8 sequences are not alphanumeric under the classic
/// 8-bit classification, so each one becomes its own underscore.
pub fn mangle(input: &str) -> String {
    input
        .bytes()
        .map(|byte| {
            if byte.is_ascii_alphanumeric() {
                char::from(byte)
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::mangle;
    use pretty_assertions::assert_eq;

    #[test]
    fn alphanumerics_pass_through() {
        assert_eq!(mangle("abcXYZ019"), "abcXYZ019");
    }

    #[test]
    fn punctuation_becomes_underscore() {
        assert_eq!(mangle("std::vector<int>"), "std__vector_int_");
    }

    #[test]
    fn spaces_and_existing_underscores_both_mangle_to_underscore() {
        assert_eq!(mangle("a b_c"), "a_b_c");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(mangle(""), "");
    }

    #[test]
    fn multibyte_sequences_mangle_per_byte() {
        // U+00E9 is two bytes, so it yields two underscores.
        assert_eq!(mangle("caf\u{e9}"), "caf__");
    }

    // === Property tests ===

    mod properties {
        use super::super::mangle;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn byte_length_is_preserved(s in ".*") {
                prop_assert_eq!(mangle(&s).len(), s.len());
            }

            #[test]
            fn output_alphabet_is_alnum_or_underscore(s in ".*") {
                prop_assert!(mangle(&s)
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || b == b'_'));
            }

            #[test]
            fn mangle_is_idempotent(s in ".*") {
                let once = mangle(&s);
                prop_assert_eq!(mangle(&once), once);
            }
        }
    }
}
