//! HTML rendering of formatted lines.
//!
//! Produces the `<pre><code>` body only; the surrounding document and
//! its stylesheet belong to the caller. Each token becomes a
//! `<span class="...">` carrying its classifier tags.

use std::fmt::Write as _;

use crate::formatter::{Line, Span};

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Prefix every row with its source line number.
    pub line_numbers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { line_numbers: true }
    }
}

/// Escape the five characters that are special in HTML text and
/// attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Span {
    /// Spacing-only spans render as their bare whitespace.
    #[must_use]
    pub fn to_html(&self) -> String {
        match self.class() {
            Some(class) if !self.text.is_empty() => format!(
                r#"<span class="{class}">{}</span>{}"#,
                escape_html(&self.text),
                self.whitespace
            ),
            _ => self.whitespace.clone(),
        }
    }
}

impl Line {
    /// The line's spans as HTML, without a line break.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.iter().map(Span::to_html).collect()
    }
}

/// Render `lines` as newline-terminated HTML rows.
pub fn render_lines<I>(lines: I, options: RenderOptions) -> String
where
    I: IntoIterator<Item = Line>,
{
    let mut out = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        let number = index + 1;
        if options.line_numbers {
            if line.is_empty() {
                let _ = write!(out, r#"<span class="line empty">{number:3}</span>"#);
            } else {
                let _ = write!(out, r#"<span class="line">{number:3}</span> "#);
            }
        }
        out.push_str(&line.to_html());
        out.push('\n');
    }
    out
}
