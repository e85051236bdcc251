//! Regroups a token stream into visual lines of styleable spans.
//!
//! Works in two steps: tokens are first gathered into the lines their
//! whitespace delimits, then every span whose own text contains a
//! newline (general comments, raw strings) is split so that each output
//! line matches exactly one physical source line.

use std::collections::VecDeque;
use std::fmt;
use std::mem;

use crate::classify::{TokenClass, classify};
use crate::token::{Token, TokenKind};

/// A piece of one visual line: a token's text and the whitespace that
/// follows it on the same line.
///
/// `kind` is `None` for pure spacing (indentation, or whitespace at the
/// end of a line), in which case `text` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub kind: Option<TokenKind>,
    pub text: String,
    pub whitespace: String,
}

impl Span {
    fn spacing(whitespace: &str) -> Self {
        Self {
            kind: None,
            text: String::new(),
            whitespace: whitespace.to_string(),
        }
    }

    /// Presentation tags for the span, `None` for pure spacing.
    #[must_use]
    pub fn class(&self) -> Option<TokenClass> {
        self.kind.map(|kind| classify(kind, &self.text))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)?;
        f.write_str(&self.whitespace)
    }
}

/// One visual source line, without its line break. No spans means a
/// blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    #[must_use]
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Span> {
        self.spans.iter()
    }

    /// Append a span unless it would carry no text at all.
    fn push(&mut self, span: Span) {
        if !span.text.is_empty() || !span.whitespace.is_empty() {
            self.spans.push(span);
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.spans.iter().try_for_each(|span| span.fmt(f))
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Span;
    type IntoIter = std::slice::Iter<'a, Span>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.iter()
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        Self { spans }
    }
}

/// Group `tokens` into lines.
///
/// Joining the `Display` of every produced line with `\n` gives back the
/// text the tokens were scanned from.
pub fn format_lines<I>(tokens: I) -> Lines<I::IntoIter>
where
    I: IntoIterator<Item = Token>,
{
    Lines::new(tokens.into_iter())
}

/// Lazy line formatter over a token iterator.
#[derive(Debug)]
pub struct Lines<I> {
    tokens: I,
    current: Line,
    ready: VecDeque<Line>,
    finished: bool,
}

impl<I: Iterator<Item = Token>> Lines<I> {
    pub const fn new(tokens: I) -> Self {
        Self {
            tokens,
            current: Line::new(),
            ready: VecDeque::new(),
            finished: false,
        }
    }

    /// Feed one token; completed lines are queued in `ready`.
    fn accept(&mut self, token: Token) {
        let Token {
            kind,
            text,
            whitespace,
            ..
        } = token;
        // Zero-width terminators only ever contribute spacing.
        let kind = (!text.is_empty()).then_some(kind);

        let Some(eol) = whitespace.find('\n') else {
            self.current.push(Span {
                kind,
                text,
                whitespace,
            });
            return;
        };

        // The token ends its line. Anything before the first newline
        // stays on this line; the newline itself belongs to line
        // separation, not to span content.
        self.current.push(Span {
            kind,
            text,
            whitespace: whitespace[..eol].to_string(),
        });
        self.close_line();

        let mut segments = whitespace[eol + 1..].split('\n').peekable();
        while let Some(segment) = segments.next() {
            self.current.push(Span::spacing(segment));
            if segments.peek().is_some() {
                // A whole source line of nothing but whitespace.
                self.close_line();
            }
        }
    }

    fn close_line(&mut self) {
        let line = mem::take(&mut self.current);
        split_multiline(line, &mut self.ready);
    }
}

impl<I: Iterator<Item = Token>> Iterator for Lines<I> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Some(line);
            }
            if self.finished {
                return None;
            }
            if let Some(token) = self.tokens.next() {
                self.accept(token);
            } else {
                // The last line is emitted even when empty.
                self.finished = true;
                self.close_line();
            }
        }
    }
}

/// Split `line` at every span whose text contains a newline and queue
/// the resulting physical lines.
fn split_multiline(mut line: Line, out: &mut VecDeque<Line>) {
    loop {
        let found = line.spans.iter().position(|span| {
            span.kind.is_some_and(TokenKind::may_span_lines) && span.text.contains('\n')
        });
        let Some(index) = found else {
            out.push_back(line);
            return;
        };

        let mut tail = line.spans.split_off(index);
        let Span {
            kind,
            text,
            whitespace,
        } = tail.remove(0);

        let mut fragments: Vec<&str> = text.split('\n').collect();
        let last = fragments.pop().unwrap_or_default();
        let mut fragments = fragments.into_iter();

        // First fragment ends the current line.
        if let Some(first) = fragments.next() {
            line.spans.push(Span {
                kind,
                text: first.to_string(),
                whitespace: String::new(),
            });
        }
        out.push_back(line);

        // Inner fragments each fill a line of their own.
        for fragment in fragments {
            out.push_back(Line::from(vec![Span {
                kind,
                text: fragment.to_string(),
                whitespace: String::new(),
            }]));
        }

        // The last fragment opens the remainder, which may hold another
        // multi-line token.
        let mut rest = Vec::with_capacity(tail.len() + 1);
        rest.push(Span {
            kind,
            text: last.to_string(),
            whitespace,
        });
        rest.extend(tail);
        line = Line::from(rest);
    }
}
