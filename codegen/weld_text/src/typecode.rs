//! Typecode placeholder substitution.
//!
//! Code-generation templates embed raw type expressions between
//! backticks (`` `sometype` ``). This transform replaces each
//! placeholder with its canonical rendering while leaving quoted
//! string and character literals untouched, even when they contain
//! backticks or quote-like noise.

use crate::stream::{TextReader, TextSink};

/// Canonical type-string formatter, supplied by the caller.
///
/// Given a raw type expression with no declarator name, returns its
/// canonical textual rendering. Malformed expressions are this
/// collaborator's concern; the transform passes the collected text
/// through unexamined.
pub trait TypeRenderer: Send + Sync {
    fn render_type(&self, raw: &str) -> String;
}

impl<F> TypeRenderer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn render_type(&self, raw: &str) -> String {
        self(raw)
    }
}

/// Replace each backtick-delimited placeholder in `input` with the
/// renderer's output for its contents.
///
/// The delimiting backticks are consumed and never emitted. Content
/// between single or double quotes is copied verbatim (with one level
/// of backslash passthrough: `\x` copies both bytes unconditionally),
/// so quoted literals never trigger expansion. An unterminated
/// placeholder or quote run simply stops at end-of-stream; whatever
/// was gathered is rendered (for backticks) or already copied (for
/// quotes).
pub fn substitute_typecodes(input: &str, renderer: &dyn TypeRenderer) -> String {
    let mut out = TextSink::new();
    let mut reader = TextReader::new(input);
    while let Some(byte) = reader.next() {
        if byte == b'`' {
            let mut raw = TextSink::new();
            for collected in reader.by_ref() {
                if collected == b'`' {
                    break;
                }
                raw.put(collected);
            }
            out.put_str(&renderer.render_type(&raw.finish()));
        } else {
            out.put(byte);
            if byte == b'\'' || byte == b'"' {
                copy_quoted(&mut reader, &mut out, byte);
            }
        }
    }
    out.finish()
}

/// Copy bytes verbatim up to and including the closing `delim`, or to
/// end-of-stream. A backslash copies itself and the byte after it
/// unconditionally, so an escaped delimiter does not close the run.
fn copy_quoted(reader: &mut TextReader<'_>, out: &mut TextSink, delim: u8) {
    while let Some(byte) = reader.next() {
        out.put(byte);
        if byte == delim {
            break;
        }
        if byte == b'\\' {
            if let Some(escaped) = reader.next() {
                out.put(escaped);
            }
        }
    }
}
