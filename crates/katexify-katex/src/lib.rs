//! # katexify KaTeX backend
//!
//! Implements the [`MathRenderer`](katexify_scan::MathRenderer) port with
//! [KaTeX](https://katex.org), executed in-process through the `katex` crate.
//!
//! ## Examples
//!
//! ```no_run
//! use katexify_katex::{KatexConfig, KatexRenderer};
//! use katexify_scan::render_to_string;
//!
//! let renderer = KatexRenderer::new(KatexConfig::default())?;
//! let html = render_to_string(r"The area is \(\pi r^2\).", &renderer)?;
//! assert!(html.contains("katex"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Renderer options.
pub mod config;
/// The KaTeX renderer.
pub mod renderer;

pub use config::{KatexConfig, OutputFormat};
pub use renderer::KatexRenderer;
