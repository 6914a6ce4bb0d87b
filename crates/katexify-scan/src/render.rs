//! The renderer port.
//!
//! The scanner never looks inside an expression body. Turning a body into
//! HTML is the job of a [`MathRenderer`], which is the only seam between this
//! crate and a real typesetting engine:
//!
//! ```text
//! ┌─────────────┐
//! │ Dispatcher  │
//! └──────┬──────┘
//!        │ render(body, mode)
//!        ▼
//! ┌──────────────────┐
//! │  MathRenderer    │
//! │    (trait)       │
//! └──────┬───────────┘
//!        │
//!   ┌────┴──────────┬──────────────┐
//!   │               │              │
//! KatexRenderer  MarkerRenderer  FnRenderer
//! (other crate)
//! ```

use crate::error::RenderError;
use crate::ir::MathMode;

/// Turns one expression body into an HTML fragment.
///
/// Calls are synchronous; the dispatcher writes the returned fragment before
/// it looks at the next segment.
pub trait MathRenderer {
    /// Renders `expression` in the given `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Rejected`] for a body the engine will not accept.
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError>;
}

impl<R: MathRenderer + ?Sized> MathRenderer for &R {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        (**self).render(expression, mode)
    }
}

impl<R: MathRenderer + ?Sized> MathRenderer for Box<R> {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        (**self).render(expression, mode)
    }
}

/// Wraps the body in a tag named after the mode: `<display>x</display>`.
///
/// Deterministic and infallible, for tests and dry runs.
///
/// ```
/// use katexify_scan::{MarkerRenderer, MathMode, MathRenderer};
///
/// let html = MarkerRenderer.render("x^2", MathMode::Inline)?;
/// assert_eq!(html, "<inline>x^2</inline>");
/// # Ok::<(), katexify_scan::RenderError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerRenderer;

impl MathRenderer for MarkerRenderer {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        Ok(format!("<{mode}>{expression}</{mode}>"))
    }
}

/// Adapts a closure into a [`MathRenderer`].
pub struct FnRenderer<F>(pub F);

impl<F> MathRenderer for FnRenderer<F>
where
    F: Fn(&str, MathMode) -> Result<String, RenderError>,
{
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        (self.0)(expression, mode)
    }
}
