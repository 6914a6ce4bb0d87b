use crate::config::KatexConfig;
use katexify_scan::{MathMode, MathRenderer, RenderError};
use log::trace;
use std::fmt;

/// [`MathRenderer`] that runs KaTeX in an embedded JavaScript engine.
///
/// Both option sets are built once up front. The engine itself is started
/// lazily by the `katex` crate on the first render of each thread.
pub struct KatexRenderer {
    config: KatexConfig,
    display: katex::Opts,
    inline: katex::Opts,
}

impl KatexRenderer {
    /// Builds a renderer for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if KaTeX rejects the option set.
    pub fn new(config: KatexConfig) -> Result<Self, RenderError> {
        let display = build_opts(&config, true)?;
        let inline = build_opts(&config, false)?;
        Ok(Self {
            config,
            display,
            inline,
        })
    }

    pub fn config(&self) -> &KatexConfig {
        &self.config
    }

    fn opts(&self, mode: MathMode) -> &katex::Opts {
        match mode {
            MathMode::Display => &self.display,
            MathMode::Inline => &self.inline,
        }
    }
}

impl fmt::Debug for KatexRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KatexRenderer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn build_opts(config: &KatexConfig, display_mode: bool) -> Result<katex::Opts, RenderError> {
    katex::Opts::builder()
        .display_mode(display_mode)
        .output_type(katex::OutputType::from(config.output))
        .throw_on_error(config.throw_on_error)
        .leqno(config.leqno)
        .fleqn(config.fleqn)
        .build()
        .map_err(|e| RenderError::Backend(format!("invalid KaTeX options: {}", e)))
}

impl MathRenderer for KatexRenderer {
    fn render(&self, expression: &str, mode: MathMode) -> Result<String, RenderError> {
        trace!("katex {} <- {:?}", mode, expression);
        katex::render_with_opts(expression, self.opts(mode))
            .map_err(|e| RenderError::rejected(mode, expression, e.to_string()))
    }
}
