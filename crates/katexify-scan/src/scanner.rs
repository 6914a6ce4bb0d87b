use crate::ir::{MathMode, Segment, Span};
use std::iter::FusedIterator;

/// A left-to-right scanner over a fully buffered input.
///
/// `Scanner` yields [`Segment`]s lazily, so a consumer can write each one out
/// (and render each expression) before the rest of the buffer is looked at.
/// It keeps two cursors into the buffer:
///
/// - `start`: where the next plain-text span begins
/// - `pos`: the current scan position
///
/// with `start <= pos <= input.len()` at every yield.
///
/// Matching works on a two-byte window. All markers are ASCII, so every slice
/// boundary falls either on a marker or on the end of the buffer and is
/// always a `char` boundary.
pub struct Scanner<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    /// Expression found after a non-empty text flush, yielded next.
    pending: Option<Segment<'a>>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            start: 0,
            pos: 0,
            pending: None,
        }
    }

    /// Text between the emission mark and the cursor, or `None` if empty.
    fn flush_text(&mut self) -> Option<Segment<'a>> {
        if self.pos <= self.start {
            return None;
        }
        let input = self.input;
        let span = Span::new(self.start, self.pos);
        self.start = self.pos;
        Some(Segment::Text {
            span,
            text: &input[span.start..span.end],
        })
    }

    /// Consumes an expression whose opening marker sits at the cursor.
    ///
    /// Only the closing marker of `mode` ends the body; opening markers
    /// inside it are ordinary text. Without a closing marker the body runs
    /// to the end of the buffer.
    fn take_expression(&mut self, mode: MathMode) -> Segment<'a> {
        let input = self.input;
        let bytes = input.as_bytes();
        let len = bytes.len();
        let close = mode.close().as_bytes();

        self.start = self.pos + mode.open().len();
        self.pos = self.start;
        while self.pos < len && !bytes[self.pos..].starts_with(close) {
            self.pos += 1;
        }

        let span = Span::new(self.start, self.pos);
        let terminated = self.pos < len;

        // Skip the closing marker; clamp when there was none.
        self.start = (self.pos + close.len()).min(len);
        self.pos = self.start;

        Segment::Math {
            span,
            mode,
            body: &input[span.start..span.end],
            terminated,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let input = self.input;
        let bytes = input.as_bytes();
        while self.pos < bytes.len() {
            let Some(mode) = MathMode::opened_by(&bytes[self.pos..]) else {
                self.pos += 1;
                continue;
            };

            let text = self.flush_text();
            let math = self.take_expression(mode);
            return match text {
                Some(text) => {
                    self.pending = Some(math);
                    Some(text)
                }
                None => Some(math),
            };
        }

        self.flush_text()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans `input` to completion and collects every segment.
pub fn scan(input: &str) -> Vec<Segment<'_>> {
    Scanner::new(input).collect()
}
