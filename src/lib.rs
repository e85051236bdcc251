//! Lossless Go tokenizer and line formatter for syntax highlighting.
//!
//! Source text is scanned into tokens that carry their trailing
//! whitespace, regrouped into one [`Line`] per physical source line, and
//! each span is tagged with presentation classes. Concatenating every
//! token's text and whitespace reproduces the input exactly.
//!
//! # Quick start
//!
//! ## Tokenize a file
//!
//! ```
//! use goprint::{Source, TokenKind, tokenize};
//!
//! let source = Source::new("main.go", b"x := 1\n");
//! let tokens = tokenize(&source);
//! assert_eq!(tokens[0].text, "x");
//! assert_eq!(tokens[0].kind, TokenKind::Ident);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::LineTerminator));
//! ```
//!
//! ## Render highlighted HTML
//!
//! ```
//! use goprint::{Options, Source, render};
//!
//! let source = Source::new("main.go", b"package main\n");
//! let html = render(&source, Options::default()).unwrap();
//! assert!(html.contains(r#"<span class="keyword">package</span>"#));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::path::PathBuf;

pub mod classify;
pub mod config;
pub mod formatter;
pub mod html;
pub mod lexer;
pub mod pipeline;
pub mod source;
pub mod token;

pub use classify::{Class, TokenClass, classify, is_builtin};
pub use config::{Mode, Options};
pub use formatter::{Line, Lines, Span, format_lines};
pub use html::{RenderOptions, escape_html, render_lines};
pub use lexer::{Lexer, scan, tokenize};
pub use pipeline::{StagedPipeline, run_staged};
pub use source::Source;
pub use token::{Keyword, LiteralKind, Operator, Position, Token, TokenKind};

/// Unified error type. Malformed Go never produces one; only I/O and
/// worker threads can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A source file could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A pipeline thread could not be started.
    #[error("failed to start {stage} thread: {source}")]
    Spawn {
        stage: &'static str,
        #[source]
        source: std::io::Error,
    },
    /// A pipeline thread panicked.
    #[error("{stage} thread panicked")]
    Worker { stage: &'static str },
}

/// Scan and format `source` into lines using the configured mode.
pub fn highlight(source: &Source, options: Options) -> Result<Vec<Line>, Error> {
    match options.mode {
        Mode::Lazy => Ok(format_lines(scan(source)).collect()),
        Mode::Staged { capacity } => run_staged(source.clone(), capacity),
    }
}

/// Scan, format and render `source` as HTML rows.
pub fn render(source: &Source, options: Options) -> Result<String, Error> {
    let lines = highlight(source, options)?;
    Ok(render_lines(lines, options.render))
}
