use crate::error::{DispatchError, Result};
use crate::ir::Segment;
use crate::render::MathRenderer;
use crate::scanner::Scanner;
use log::{debug, warn};
use serde::Serialize;
use std::io::{self, Write};

/// Counters for one [`Dispatcher::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    /// Plain-text segments written verbatim.
    pub text_segments: usize,
    /// Expressions handed to the renderer.
    pub expressions: usize,
    /// Expressions that ran off the end of the buffer.
    pub unterminated: usize,
}

/// Writes a scanned buffer to a writer, rendering math along the way.
///
/// Output happens segment by segment in scan order, each expression being
/// rendered right before it is written. A render failure stops the run: the
/// writer is flushed so everything before the failing expression stays
/// visible, and nothing is written in place of the expression.
///
/// ```
/// use katexify_scan::{Dispatcher, MarkerRenderer};
///
/// let mut out = Vec::new();
/// let stats = Dispatcher::new(MarkerRenderer).run(r"\(a\) \[b", &mut out)?;
/// assert_eq!(out, b"<inline>a</inline> <display>b</display>");
/// assert_eq!(stats.expressions, 2);
/// assert_eq!(stats.unterminated, 1);
/// # Ok::<(), katexify_scan::DispatchError>(())
/// ```
pub struct Dispatcher<R> {
    renderer: R,
}

impl<R: MathRenderer> Dispatcher<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Scans `input` and writes the result to `out`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::Render`] if the renderer rejects an expression
    /// - [`DispatchError::Io`] if `out` fails
    pub fn run<W: Write + ?Sized>(&self, input: &str, out: &mut W) -> Result<DispatchStats> {
        let mut stats = DispatchStats::default();

        for segment in Scanner::new(input) {
            match segment {
                Segment::Text { text, .. } => {
                    out.write_all(text.as_bytes())?;
                    stats.text_segments += 1;
                }
                Segment::Math {
                    span,
                    mode,
                    body,
                    terminated,
                } => {
                    if !terminated {
                        warn!(
                            "unterminated {} math at byte {}, rendering to end of input",
                            mode, span.start
                        );
                        stats.unterminated += 1;
                    }
                    debug!("rendering {} math at {}..{}", mode, span.start, span.end);

                    let html = match self.renderer.render(body, mode) {
                        Ok(html) => html,
                        Err(source) => {
                            out.flush()?;
                            return Err(DispatchError::Render {
                                offset: span.start,
                                source,
                            });
                        }
                    };
                    out.write_all(html.as_bytes())?;
                    stats.expressions += 1;
                }
            }
        }

        out.flush()?;
        Ok(stats)
    }
}

/// Renders `input` into a fresh `String`.
pub fn render_to_string<R: MathRenderer>(input: &str, renderer: R) -> Result<String> {
    let mut out = Vec::with_capacity(input.len());
    Dispatcher::new(renderer).run(input, &mut out)?;
    // Every write above came from a `&str`.
    String::from_utf8(out)
        .map_err(|e| DispatchError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
