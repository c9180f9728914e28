//! Escape and unescape transforms for emitted string literals.
//!
//! [`escape`] rewrites a string so it can be embedded in generated
//! source: the usual C-style escapes for newline, carriage return, tab,
//! backslash and both quote characters, plus an octal form for any
//! byte that is not a graphic character.
//!
//! # Octal Form
//!
//! Non-graphic bytes become `\0` followed by the byte value in
//! *unpadded* octal: byte 7 escapes to the three characters `\07`, byte
//! 0x1B to `\033`. This is not the conventional zero-padded `\ooo`
//! escape -- downstream consumers depend on the exact byte sequence, so
//! it must not be "fixed" to a fixed-width form.

use crate::stream::{TextReader, TextSink};

/// Classic C-locale `isgraph`: printable and not a space-class
/// separator. Everything at or above 0x7F is non-graphic.
#[inline]
fn is_graph(byte: u8) -> bool {
    (0x21..=0x7E).contains(&byte)
}

/// Returns a copy of `input` with escape codes added.
///
/// Space is copied literally even though it fails the graphic test.
/// Empty input yields empty output; no input can fail.
pub fn escape(input: &str) -> String {
    let mut out = TextSink::new();
    for byte in TextReader::new(input) {
        match byte {
            b'\n' => out.put_str("\\n"),
            b'\r' => out.put_str("\\r"),
            b'\t' => out.put_str("\\t"),
            b'\\' => out.put_str("\\\\"),
            b'\'' => out.put_str("\\'"),
            b'"' => out.put_str("\\\""),
            b' ' => out.put(byte),
            _ if !is_graph(byte) => {
                out.put_str("\\0");
                out.put_str(&format!("{byte:o}"));
            }
            _ => out.put(byte),
        }
    }
    out.finish()
}

/// Inverse of [`escape`] over the defined escape set.
///
/// Decodes `\n`, `\r`, `\t`, `\\`, `\'`, `\"` and the unpadded octal
/// form `\0` + octal digits (a greedy run; the accumulated value wraps
/// at 8 bits). A trailing lone backslash and unrecognized escapes are
/// copied through verbatim.
///
/// Round-trip `unescape(escape(s)) == s` holds unless an escaped
/// non-graphic byte in `s` is immediately followed by an octal digit;
/// the unpadded octal form makes that boundary ambiguous.
pub fn unescape(input: &str) -> String {
    let mut out = TextSink::new();
    let mut reader = TextReader::new(input);
    while let Some(byte) = reader.next() {
        if byte != b'\\' {
            out.put(byte);
            continue;
        }
        match reader.next() {
            Some(b'n') => out.put(b'\n'),
            Some(b'r') => out.put(b'\r'),
            Some(b't') => out.put(b'\t'),
            Some(b'\\') => out.put(b'\\'),
            Some(b'\'') => out.put(b'\''),
            Some(b'"') => out.put(b'"'),
            Some(b'0') => {
                let mut value: u8 = 0;
                while let Some(digit @ b'0'..=b'7') = reader.peek() {
                    reader.next();
                    value = value.wrapping_mul(8).wrapping_add(digit - b'0');
                }
                out.put(value);
            }
            Some(other) => {
                out.put(b'\\');
                out.put(other);
            }
            None => out.put(b'\\'),
        }
    }
    out.finish()
}
