use serde::{Deserialize, Serialize};

/// Markup KaTeX produces for each expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// HTML only; needs the KaTeX stylesheet to display.
    #[default]
    Html,
    /// MathML only.
    Mathml,
    /// HTML for display plus hidden MathML for accessibility.
    HtmlAndMathml,
}

impl From<OutputFormat> for katex::OutputType {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Html => katex::OutputType::Html,
            OutputFormat::Mathml => katex::OutputType::Mathml,
            OutputFormat::HtmlAndMathml => katex::OutputType::HtmlAndMathml,
        }
    }
}

/// Options shared by every expression of a run.
///
/// The default is what a plain `katexify` invocation uses: HTML output, and
/// a hard error on the first expression KaTeX cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatexConfig {
    pub output: OutputFormat,
    /// Fail on a parse error instead of rendering KaTeX's inline error markup.
    pub throw_on_error: bool,
    /// Put equation numbers on the left.
    pub leqno: bool,
    /// Left-align display math.
    pub fleqn: bool,
}

impl Default for KatexConfig {
    fn default() -> Self {
        Self {
            output: OutputFormat::Html,
            throw_on_error: true,
            leqno: false,
            fleqn: false,
        }
    }
}
