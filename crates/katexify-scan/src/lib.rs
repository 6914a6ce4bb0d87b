//! # katexify scanner
//!
//! Finds `\[...\]` (display) and `\(...\)` (inline) math spans in a text
//! buffer and hands each expression body to a [`MathRenderer`].
//!
//! ## Overview
//!
//! The crate is split the same way the work is:
//!
//! - [`ir`] - the [`Segment`](ir::Segment) stream a scan produces
//! - [`scanner`] - the left-to-right delimiter scan
//! - [`render`] - the single-method renderer port and test renderers
//! - [`dispatch`] - writes segments to an [`std::io::Write`], rendering math on the way
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   Scanner    ┌───────────┐   Dispatcher   ┌──────────┐
//! │ input buffer │ ───────────► │ Segment*  │ ─────────────► │  writer  │
//! └──────────────┘              └───────────┘       │        └──────────┘
//!                                                   │ render(body, mode)
//!                                                   ▼
//!                                            dyn MathRenderer
//! ```
//!
//! The scanner is deliberately dumb: delimiters never nest, there is no
//! escape syntax, and an unterminated expression swallows the rest of the
//! buffer. Whatever the renderer makes of the body is its own business.
//!
//! ## Examples
//!
//! ```
//! use katexify_scan::{MarkerRenderer, render_to_string};
//!
//! let out = render_to_string(r"a \[x\] b \(y\)", MarkerRenderer)?;
//! assert_eq!(out, "a <display>x</display> b <inline>y</inline>");
//! # Ok::<(), katexify_scan::DispatchError>(())
//! ```
//!
//! ### Inspecting segments
//!
//! ```
//! use katexify_scan::{Scanner, ir::{MathMode, Segment}};
//!
//! let modes: Vec<MathMode> = Scanner::new(r"\(a\) and \[b\]")
//!     .filter_map(|segment| match segment {
//!         Segment::Math { mode, .. } => Some(mode),
//!         Segment::Text { .. } => None,
//!     })
//!     .collect();
//! assert_eq!(modes, [MathMode::Inline, MathMode::Display]);
//! ```

/// Segment Intermediate Representation (IR).
pub mod ir;
/// Delimiter scanner.
pub mod scanner;
/// Renderer port.
pub mod render;
/// Segment-to-writer dispatch.
pub mod dispatch;
/// Error types.
pub mod error;


pub use dispatch::{DispatchStats, Dispatcher, render_to_string};
pub use error::{DispatchError, RenderError, Result};
pub use ir::{MathMode, Segment, Span};
pub use render::{FnRenderer, MarkerRenderer, MathRenderer};
pub use scanner::{Scanner, scan};

/// Schema version for the JSON form of the segment IR.
///
/// Bumped on the same rules as any semver'd schema: MAJOR for removed or
/// renamed fields, MINOR for additions, PATCH for scan fixes.
pub const SCHEMA_VERSION: &str = "1.0.0";
