use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range into the scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Which delimiter pair opened an expression, and so how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MathMode {
    /// Block-level math, written `\[...\]`.
    Display,
    /// Inline math, written `\(...\)`.
    Inline,
}

impl MathMode {
    /// Both modes, in the order the scanner tests their opening markers.
    pub const ALL: [MathMode; 2] = [MathMode::Display, MathMode::Inline];

    /// The two-character marker that opens an expression in this mode.
    pub fn open(self) -> &'static str {
        match self {
            MathMode::Display => "\\[",
            MathMode::Inline => "\\(",
        }
    }

    /// The two-character marker that closes an expression in this mode.
    pub fn close(self) -> &'static str {
        match self {
            MathMode::Display => "\\]",
            MathMode::Inline => "\\)",
        }
    }

    /// Returns the mode whose opening marker starts `window`, if any.
    pub fn opened_by(window: &[u8]) -> Option<MathMode> {
        Self::ALL
            .into_iter()
            .find(|mode| window.starts_with(mode.open().as_bytes()))
    }

    pub fn is_display(self) -> bool {
        matches!(self, MathMode::Display)
    }
}

impl fmt::Display for MathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathMode::Display => f.write_str("display"),
            MathMode::Inline => f.write_str("inline"),
        }
    }
}

/// One piece of a scanned buffer.
///
/// Delimiter markers belong to no segment: concatenating every `Text`
/// segment with every rendered `Math` body, in order, is the program output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Segment<'a> {
    /// Plain text, emitted verbatim.
    Text { span: Span, text: &'a str },
    /// An expression body handed to the renderer.
    Math {
        span: Span,
        mode: MathMode,
        body: &'a str,
        /// `false` when the buffer ended before the closing marker.
        terminated: bool,
    },
}

impl Segment<'_> {
    pub fn span(&self) -> Span {
        match self {
            Segment::Text { span, .. } | Segment::Math { span, .. } => *span,
        }
    }

    pub fn is_math(&self) -> bool {
        matches!(self, Segment::Math { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_two_bytes() {
        for mode in MathMode::ALL {
            assert_eq!(mode.open().len(), 2);
            assert_eq!(mode.close().len(), 2);
        }
    }

    #[test]
    fn test_opened_by() {
        assert_eq!(MathMode::opened_by(b"\\[x"), Some(MathMode::Display));
        assert_eq!(MathMode::opened_by(b"\\(x"), Some(MathMode::Inline));
        assert_eq!(MathMode::opened_by(b"\\]"), None);
        assert_eq!(MathMode::opened_by(b"\\"), None);
        assert_eq!(MathMode::opened_by(b""), None);
    }

    #[test]
    fn test_mode_display_names() {
        assert_eq!(MathMode::Display.to_string(), "display");
        assert_eq!(MathMode::Inline.to_string(), "inline");
    }

    #[test]
    fn test_mode_serde_roundtrip() {
        let json = serde_json::to_string(&MathMode::Inline).unwrap();
        assert_eq!(json, "\"inline\"");
        let mode: MathMode = serde_json::from_str("\"display\"").unwrap();
        assert!(mode.is_display());
    }

    #[test]
    fn test_segment_span() {
        let segment = Segment::Math {
            span: Span::new(2, 5),
            mode: MathMode::Display,
            body: "abc",
            terminated: true,
        };
        assert!(segment.is_math());
        assert_eq!(segment.span().len(), 3);
        assert!(!segment.span().is_empty());
    }
}
