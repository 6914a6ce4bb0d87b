use crate::ir::MathMode;
use thiserror::Error;

/// Failure reported by a [`MathRenderer`](crate::render::MathRenderer).
#[derive(Debug, Error)]
pub enum RenderError {
    /// The renderer refused the expression body (bad syntax, unknown macro...).
    #[error("cannot render {mode} math `{expression}`: {message}")]
    Rejected {
        mode: MathMode,
        expression: String,
        message: String,
    },
    /// The renderer could not be set up at all.
    #[error("math renderer unavailable: {0}")]
    Backend(String),
}

impl RenderError {
    pub fn rejected(
        mode: MathMode,
        expression: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RenderError::Rejected {
            mode,
            expression: expression.into(),
            message: message.into(),
        }
    }
}

/// Failure while writing a scanned buffer out.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The expression body starting at byte `offset` was rejected.
    #[error("expression at byte {offset} failed to render")]
    Render {
        offset: usize,
        #[source]
        source: RenderError,
    },
    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = DispatchError> = std::result::Result<T, E>;
