use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use katexify_katex::{KatexConfig, KatexRenderer, OutputFormat};
use katexify_scan::{Dispatcher, MarkerRenderer, MathRenderer, SCHEMA_VERSION, Segment, scan};
use log::{debug, info};
use serde::Serialize;
use std::io::{self, BufWriter, Read, Write};

/// Reads text on stdin and writes it to stdout with every `\[...\]` and
/// `\(...\)` expression replaced by KaTeX markup.
#[derive(Parser)]
#[command(name = "katexify", version)]
#[command(about = "Render \\[...\\] and \\(...\\) math on stdin with KaTeX", long_about = None)]
struct Cli {
    /// Markup produced for each expression
    #[arg(long, value_enum, default_value_t = Output::Html)]
    output: Output,

    /// Render KaTeX's error markup instead of failing on a bad expression
    #[arg(long)]
    no_throw: bool,

    /// Wrap expressions in <display>/<inline> tags instead of running KaTeX
    #[arg(long)]
    dry_run: bool,

    /// Print the scanned segments as JSON instead of rendering
    #[arg(long, conflicts_with_all = ["dry_run", "no_throw", "output"])]
    segments: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Output {
    Html,
    Mathml,
    HtmlAndMathml,
}

impl From<Output> for OutputFormat {
    fn from(output: Output) -> Self {
        match output {
            Output::Html => OutputFormat::Html,
            Output::Mathml => OutputFormat::Mathml,
            Output::HtmlAndMathml => OutputFormat::HtmlAndMathml,
        }
    }
}

impl Cli {
    fn katex_config(&self) -> KatexConfig {
        KatexConfig {
            output: self.output.into(),
            throw_on_error: !self.no_throw,
            ..KatexConfig::default()
        }
    }

    fn renderer(&self) -> Result<Box<dyn MathRenderer>> {
        if self.dry_run {
            return Ok(Box::new(MarkerRenderer));
        }
        let renderer = KatexRenderer::new(self.katex_config()).context("failed to set up KaTeX")?;
        debug!("KaTeX config: {:?}", renderer.config());
        Ok(Box::new(renderer))
    }
}

#[derive(Serialize)]
struct SegmentReport<'a> {
    schema_version: &'static str,
    segments: Vec<Segment<'a>>,
}

/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
fn read_stdin() -> Result<String> {
    let mut bytes = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut bytes)
        .context("failed to read stdin")?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let input = read_stdin()?;
    debug!("read {} bytes from stdin", input.len());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.segments {
        let report = SegmentReport {
            schema_version: SCHEMA_VERSION,
            segments: scan(&input),
        };
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    let renderer = cli.renderer()?;
    let stats = Dispatcher::new(renderer)
        .run(&input, &mut out)
        .context("failed to render math from stdin")?;
    info!(
        "wrote {} text segments and {} expressions ({} unterminated)",
        stats.text_segments, stats.expressions, stats.unterminated
    );
    Ok(())
}
