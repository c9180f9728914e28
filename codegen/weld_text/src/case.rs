//! Case-folding transforms.
//!
//! Byte-wise ASCII folding only -- no Unicode case mapping, no locale.
//! Non-letter bytes (including every byte of a multi-byte UTF-8
//! sequence) pass through unchanged.

use crate::stream::{TextReader, TextSink};

/// Uppercase every letter.
pub fn upper(input: &str) -> String {
    let mut out = TextSink::new();
    for byte in TextReader::new(input) {
        out.put(byte.to_ascii_uppercase());
    }
    out.finish()
}

/// Lowercase every letter.
pub fn lower(input: &str) -> String {
    let mut out = TextSink::new();
    for byte in TextReader::new(input) {
        out.put(byte.to_ascii_lowercase());
    }
    out.finish()
}

/// Global sentence case: the first byte of the whole stream is
/// uppercased and every later byte is lowercased, including bytes
/// after interior separators. `"HELLO WORLD"` becomes
/// `"Hello world"`, not `"Hello World"` -- this is deliberately not a
/// per-word title case.
pub fn title(input: &str) -> String {
    let mut out = TextSink::new();
    let mut first = true;
    for byte in TextReader::new(input) {
        out.put(if first {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        });
        first = false;
    }
    out.finish()
}
