//! Presentation classes for tokens.
//!
//! The tags double as CSS class names in the HTML renderer.

use std::fmt;

use crate::token::{LiteralKind, Token, TokenKind};

/// A single presentation tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Keyword,
    Ident,
    Builtin,
    Literal,
    Int,
    Float,
    Imag,
    Char,
    String,
    Operator,
    Comment,
    Invalid,
}

impl Class {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Ident => "ident",
            Self::Builtin => "builtin",
            Self::Literal => "literal",
            Self::Int => "int",
            Self::Float => "float",
            Self::Imag => "imag",
            Self::Char => "char",
            Self::String => "string",
            Self::Operator => "operator",
            Self::Comment => "comment",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of one or two tags describing a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenClass {
    primary: Class,
    secondary: Option<Class>,
}

impl TokenClass {
    const fn one(primary: Class) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    const fn two(primary: Class, secondary: Class) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    #[must_use]
    pub const fn primary(self) -> Class {
        self.primary
    }

    #[must_use]
    pub const fn secondary(self) -> Option<Class> {
        self.secondary
    }

    #[must_use]
    pub fn contains(self, class: Class) -> bool {
        self.primary == class || self.secondary == Some(class)
    }

    pub fn iter(self) -> impl Iterator<Item = Class> {
        std::iter::once(self.primary).chain(self.secondary)
    }

    /// The tags as strings, in order.
    #[must_use]
    pub fn tags(self) -> Vec<&'static str> {
        self.iter().map(Class::as_str).collect()
    }
}

/// Space-separated tags, ready for an HTML `class` attribute.
impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.primary.as_str())?;
        if let Some(secondary) = self.secondary {
            write!(f, " {secondary}")?;
        }
        Ok(())
    }
}

/// Classify a token given its kind and source text.
///
/// Identifiers spelled like a predeclared Go name are tagged `builtin`
/// even where a local declaration shadows them.
#[must_use]
pub fn classify(kind: TokenKind, text: &str) -> TokenClass {
    match kind {
        TokenKind::Keyword(_) => TokenClass::one(Class::Keyword),
        TokenKind::Ident if is_builtin(text) => TokenClass::two(Class::Ident, Class::Builtin),
        TokenKind::Ident => TokenClass::one(Class::Ident),
        TokenKind::Literal(literal) => {
            let sub = match literal {
                LiteralKind::Int => Class::Int,
                LiteralKind::Float => Class::Float,
                LiteralKind::Imag => Class::Imag,
                LiteralKind::Char => Class::Char,
                LiteralKind::String => Class::String,
            };
            TokenClass::two(Class::Literal, sub)
        }
        TokenKind::Operator(_) | TokenKind::LineTerminator => TokenClass::one(Class::Operator),
        TokenKind::Comment => TokenClass::one(Class::Comment),
        TokenKind::Invalid => TokenClass::one(Class::Invalid),
    }
}

impl Token {
    #[must_use]
    pub fn class(&self) -> TokenClass {
        classify(self.kind, &self.text)
    }
}

/// Whether `ident` is one of Go's predeclared identifiers.
#[must_use]
pub fn is_builtin(ident: &str) -> bool {
    matches!(
        ident,
        // constants
        "true" | "false" | "iota"
        // zero value
        | "nil"
        // functions
        | "append" | "cap" | "clear" | "close" | "complex" | "copy" | "delete" | "imag"
        | "len" | "make" | "max" | "min" | "new" | "panic" | "print" | "println" | "real"
        | "recover"
        // types
        | "any" | "bool" | "byte" | "comparable" | "complex64" | "complex128" | "error"
        | "float32" | "float64" | "int" | "int8" | "int16" | "int32" | "int64" | "rune"
        | "string" | "uint" | "uint8" | "uint16" | "uint32" | "uint64" | "uintptr"
    )
}
