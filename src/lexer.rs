use unicode_general_category::{GeneralCategory, get_general_category};

use crate::source::Source;
use crate::token::{Keyword, LiteralKind, Operator, Position, Token, TokenKind};

/// Tokenize a normalized Go source into a sequence of tokens.
///
/// Concatenating `text` and `whitespace` of the returned tokens gives
/// back `source.text()` exactly. Malformed input never fails: it shows
/// up as `TokenKind::Invalid` tokens.
#[must_use]
pub fn tokenize(source: &Source) -> Vec<Token> {
    let tokens: Vec<Token> = scan(source).collect();
    tracing::debug!(name = source.name(), tokens = tokens.len(), "tokenized source");
    tokens
}

/// Lazily scan a normalized Go source.
#[must_use]
pub fn scan(source: &Source) -> Lexer<'_> {
    Lexer::new(source.text())
}

/// What a scanned token does to the automatic line terminator rule.
enum Semi {
    /// Leave the rule as it was (comments, stray characters).
    Keep,
    /// A newline after this token does (or does not) end the statement.
    Set(bool),
}

/// Single-pass Go scanner yielding tokens with their trailing whitespace.
///
/// Expects text without carriage returns (see [`Source`]); any `\r` that
/// is still present lexes as an invalid character.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
    insert_semi: bool,
    pending_break: bool,
    started: bool,
    done: bool,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
            insert_semi: false,
            pending_break: false,
            started: false,
            done: false,
        }
    }

    const fn current_position(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn bump(&mut self, n: usize) {
        let end = (self.pos + n).min(self.input.len());
        for &b in &self.input.as_bytes()[self.pos..end] {
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos = end;
    }

    fn bump_char(&mut self) {
        let len = self.peek_char().map_or(0, char::len_utf8);
        self.bump(len);
    }

    fn bump_to_end(&mut self) {
        self.bump(self.input.len() - self.pos);
    }

    /// Consume the whitespace after a token. When the next newline will
    /// end the statement it is left for the line terminator; after a
    /// general comment that already did, the terminator is zero-width.
    fn skip_whitespace(&mut self) -> String {
        let start = self.pos;
        while let Some(b) = self.peek() {
            match b {
                b' ' | b'\t' => {}
                b'\n' if !self.insert_semi || self.pending_break => {}
                _ => break,
            }
            self.bump(1);
        }
        self.input[start..self.pos].to_string()
    }

    fn line_terminator(&mut self) -> Token {
        self.insert_semi = false;
        self.pending_break = false;
        let pos = self.current_position();
        let whitespace = self.skip_whitespace();
        Token {
            kind: TokenKind::LineTerminator,
            text: String::new(),
            whitespace,
            pos,
        }
    }

    fn scan_token(&mut self, ch: char) -> (TokenKind, Semi) {
        match ch {
            c if is_letter(c) => self.scan_identifier(),
            '0'..='9' => self.scan_number(),
            '.' if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) => self.scan_number(),
            '"' => self.scan_quoted(b'"', LiteralKind::String),
            '\'' => self.scan_quoted(b'\'', LiteralKind::Char),
            '`' => self.scan_raw_string(),
            '/' if self.peek_at(1) == Some(b'/') => self.scan_line_comment(),
            '/' if self.peek_at(1) == Some(b'*') => self.scan_general_comment(),
            _ => {
                if let Some(op) = Operator::longest_prefix(self.rest()) {
                    self.bump(op.as_str().len());
                    (TokenKind::Operator(op), Semi::Set(op.ends_statement()))
                } else {
                    self.bump_char();
                    (TokenKind::Invalid, Semi::Keep)
                }
            }
        }
    }

    fn scan_identifier(&mut self) -> (TokenKind, Semi) {
        let start = self.pos;
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !is_letter(c) && !is_digit(c))
            .map_or(self.input.len() - start, |(i, _)| i);
        self.bump(len);

        match Keyword::lookup(&self.input[start..self.pos]) {
            Some(keyword) => (
                TokenKind::Keyword(keyword),
                Semi::Set(keyword.ends_statement()),
            ),
            None => (TokenKind::Ident, Semi::Set(true)),
        }
    }

    fn scan_digits(&mut self, hex: bool) {
        while let Some(b) = self.peek() {
            let digit = if hex {
                b.is_ascii_hexdigit()
            } else {
                b.is_ascii_digit()
            };
            if !digit && b != b'_' {
                break;
            }
            self.bump(1);
        }
    }

    /// Numbers are scanned leniently: bad digits for the base or a
    /// missing exponent value still produce a literal of the best
    /// matching kind.
    fn scan_number(&mut self) -> (TokenKind, Semi) {
        let mut kind = LiteralKind::Int;
        let mut hex = false;

        if self.peek() != Some(b'.') {
            if self.peek() == Some(b'0') {
                match self.peek_at(1) {
                    Some(b'x' | b'X') => {
                        hex = true;
                        self.bump(2);
                    }
                    Some(b'o' | b'O' | b'b' | b'B') => self.bump(2),
                    _ => {}
                }
            }
            self.scan_digits(hex);
        }

        if self.peek() == Some(b'.') {
            kind = LiteralKind::Float;
            self.bump(1);
            self.scan_digits(hex);
        }

        let exponent = matches!(self.peek(), Some(b'p' | b'P'))
            || (!hex && matches!(self.peek(), Some(b'e' | b'E')));
        if exponent {
            kind = LiteralKind::Float;
            self.bump(1);
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump(1);
            }
            self.scan_digits(false);
        }

        if self.peek() == Some(b'i') {
            kind = LiteralKind::Imag;
            self.bump(1);
        }

        (TokenKind::Literal(kind), Semi::Set(true))
    }

    /// Rune and interpreted string literals. A newline or the end of
    /// input before the closing quote leaves an invalid token; the
    /// newline itself is not consumed.
    fn scan_quoted(&mut self, quote: u8, kind: LiteralKind) -> (TokenKind, Semi) {
        self.bump(1); // opening quote

        loop {
            match self.peek() {
                None | Some(b'\n') => return (TokenKind::Invalid, Semi::Set(true)),
                Some(b'\\') => {
                    self.bump(1);
                    if !matches!(self.peek(), None | Some(b'\n')) {
                        self.bump_char();
                    }
                }
                Some(b) if b == quote => {
                    self.bump(1);
                    return (TokenKind::Literal(kind), Semi::Set(true));
                }
                Some(_) => self.bump_char(),
            }
        }
    }

    fn scan_raw_string(&mut self) -> (TokenKind, Semi) {
        self.bump(1); // opening backtick

        if let Some(end) = self.rest().find('`') {
            self.bump(end + 1);
            (TokenKind::Literal(LiteralKind::String), Semi::Set(true))
        } else {
            self.bump_to_end();
            (TokenKind::Invalid, Semi::Set(true))
        }
    }

    fn scan_line_comment(&mut self) -> (TokenKind, Semi) {
        match self.rest().find('\n') {
            Some(end) => self.bump(end),
            None => self.bump_to_end(),
        }
        (TokenKind::Comment, Semi::Keep)
    }

    fn scan_general_comment(&mut self) -> (TokenKind, Semi) {
        let start = self.pos;
        self.bump(2); // `/*`

        let kind = if let Some(end) = self.rest().find("*/") {
            self.bump(end + 2);
            TokenKind::Comment
        } else {
            self.bump_to_end();
            TokenKind::Invalid
        };

        // A general comment spanning lines acts like a newline.
        if self.insert_semi && self.input[start..self.pos].contains('\n') {
            self.pending_break = true;
        }

        (kind, Semi::Keep)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            // Leading whitespace rides on a zero-width terminator so that
            // no byte of the input is left outside a token.
            if matches!(self.peek(), Some(b' ' | b'\t' | b'\n')) {
                return Some(self.line_terminator());
            }
        }

        if self.insert_semi && (self.pending_break || self.peek() == Some(b'\n')) {
            return Some(self.line_terminator());
        }

        let Some(ch) = self.peek_char() else {
            self.done = true;
            if self.insert_semi {
                return Some(self.line_terminator());
            }
            return None;
        };

        let pos = self.current_position();
        let (kind, semi) = self.scan_token(ch);
        if let Semi::Set(insert) = semi {
            self.insert_semi = insert;
        }
        let text = self.input[pos.offset..self.pos].to_string();
        let whitespace = self.skip_whitespace();

        Some(Token {
            kind,
            text,
            whitespace,
            pos,
        })
    }
}

/// Go letters: `_` and the Unicode `L` categories.
fn is_letter(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
        )
}

/// Go digits: Unicode `Nd` only.
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}
