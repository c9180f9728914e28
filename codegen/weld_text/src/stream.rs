//! Forward-only character stream primitives.
//!
//! Every transform in this crate reads bytes one at a time from a
//! [`TextReader`] and appends to a [`TextSink`]. The reader has a
//! forward-only cursor and an explicit end-of-stream sentinel (`None`,
//! distinct from every valid byte); the sink is append-only. Neither
//! supports seeking or rewinding -- transforms are single-pass by
//! construction.
//!
//! # Byte Orientation
//!
//! Transforms use the classic 8-bit classification of printable and
//! alphanumeric characters, so the stream works in bytes, not `char`s.
//! Multi-byte UTF-8 sequences flow through byte-by-byte; a transform
//! either copies them verbatim or replaces them with ASCII output, so
//! sink contents stay valid UTF-8.

/// Forward-only read cursor over an input string.
///
/// Reading is destructive in the sense that the cursor never moves
/// backward; a transform that needs to re-examine input must buffer it
/// itself (see the typecode scanner's collection buffer).
#[derive(Clone, Debug)]
pub struct TextReader<'a> {
    /// Input bytes. Always originates from `&str`, so valid UTF-8.
    buf: &'a [u8],
    /// Current read position (byte index into `buf`).
    pos: usize,
}

impl<'a> TextReader<'a> {
    /// Create a reader positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            buf: input.as_bytes(),
            pos: 0,
        }
    }

    /// Returns the next byte without consuming it, or `None` at
    /// end-of-stream.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Number of bytes consumed so far.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl Iterator for TextReader<'_> {
    type Item = u8;

    /// Consume and return the next byte. `None` is the end-of-stream
    /// sentinel; once returned, every later call also returns `None`.
    #[inline]
    fn next(&mut self) -> Option<u8> {
        let byte = self.buf.get(self.pos).copied()?;
        self.pos += 1;
        Some(byte)
    }
}

/// Append-only output buffer for transform results.
///
/// # Invariant
///
/// Callers only ever append ASCII escape text or verbatim copies of
/// bytes read from a [`TextReader`] (which originated as `&str`), so
/// the buffer holds valid UTF-8 whenever a full input has been
/// consumed. [`finish`](Self::finish) still degrades gracefully if a
/// caller violates this (lossy conversion, never a panic).
#[derive(Clone, Debug, Default)]
pub struct TextSink {
    buf: Vec<u8>,
}

impl TextSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single byte.
    #[inline]
    pub fn put(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Append a string verbatim.
    #[inline]
    pub fn put_str(&mut self, s: &str) {
        self.buf.extend_from_slice(s.as_bytes());
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Consume the sink and return its contents as a `String`.
    pub fn finish(self) -> String {
        String::from_utf8(self.buf)
            .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::{TextReader, TextSink};
    use pretty_assertions::assert_eq;

    // === TextReader ===

    #[test]
    fn next_consumes_bytes_in_order() {
        let mut reader = TextReader::new("abc");
        assert_eq!(reader.next(), Some(b'a'));
        assert_eq!(reader.next(), Some(b'b'));
        assert_eq!(reader.next(), Some(b'c'));
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn next_after_eof_stays_none() {
        let mut reader = TextReader::new("x");
        assert_eq!(reader.next(), Some(b'x'));
        assert_eq!(reader.next(), None);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut reader = TextReader::new("ab");
        assert_eq!(reader.peek(), Some(b'a'));
        assert_eq!(reader.peek(), Some(b'a'));
        assert_eq!(reader.next(), Some(b'a'));
        assert_eq!(reader.peek(), Some(b'b'));
    }

    #[test]
    fn empty_input_is_immediately_eof() {
        let mut reader = TextReader::new("");
        assert!(reader.is_eof());
        assert_eq!(reader.peek(), None);
        assert_eq!(reader.next(), None);
    }

    #[test]
    fn pos_tracks_consumed_bytes() {
        let mut reader = TextReader::new("hello");
        assert_eq!(reader.pos(), 0);
        reader.next();
        reader.next();
        assert_eq!(reader.pos(), 2);
    }

    #[test]
    fn multibyte_input_flows_through_as_bytes() {
        // U+00E9 is two bytes in UTF-8 (0xC3 0xA9).
        let reader = TextReader::new("\u{e9}");
        let bytes: Vec<u8> = reader.collect();
        assert_eq!(bytes, vec![0xC3, 0xA9]);
    }

    // === TextSink ===

    #[test]
    fn put_and_finish_round_trip() {
        let mut sink = TextSink::new();
        sink.put(b'h');
        sink.put(b'i');
        assert_eq!(sink.finish(), "hi");
    }

    #[test]
    fn put_str_appends_verbatim() {
        let mut sink = TextSink::new();
        sink.put_str("\\n");
        sink.put(b'!');
        assert_eq!(sink.finish(), "\\n!");
    }

    #[test]
    fn empty_sink_finishes_to_empty_string() {
        let sink = TextSink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.finish(), "");
    }

    #[test]
    fn len_counts_bytes() {
        let mut sink = TextSink::new();
        sink.put_str("abc");
        assert_eq!(sink.len(), 3);
        assert!(!sink.is_empty());
    }

    #[test]
    fn copying_reader_to_sink_preserves_utf8() {
        let reader = TextReader::new("caf\u{e9} \u{1F600}");
        let mut sink = TextSink::new();
        for byte in reader {
            sink.put(byte);
        }
        assert_eq!(sink.finish(), "caf\u{e9} \u{1F600}");
    }
}
