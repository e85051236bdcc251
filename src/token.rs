use std::fmt;

/// Source location of a token start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// 0-based byte offset into the normalized source.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in bytes.
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Go keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Break,
    Case,
    Chan,
    Const,
    Continue,
    Default,
    Defer,
    Else,
    Fallthrough,
    For,
    Func,
    Go,
    Goto,
    If,
    Import,
    Interface,
    Map,
    Package,
    Range,
    Return,
    Select,
    Struct,
    Switch,
    Type,
    Var,
}

impl Keyword {
    /// Look up the keyword spelled by `ident`.
    #[must_use]
    pub fn lookup(ident: &str) -> Option<Self> {
        let keyword = match ident {
            "break" => Self::Break,
            "case" => Self::Case,
            "chan" => Self::Chan,
            "const" => Self::Const,
            "continue" => Self::Continue,
            "default" => Self::Default,
            "defer" => Self::Defer,
            "else" => Self::Else,
            "fallthrough" => Self::Fallthrough,
            "for" => Self::For,
            "func" => Self::Func,
            "go" => Self::Go,
            "goto" => Self::Goto,
            "if" => Self::If,
            "import" => Self::Import,
            "interface" => Self::Interface,
            "map" => Self::Map,
            "package" => Self::Package,
            "range" => Self::Range,
            "return" => Self::Return,
            "select" => Self::Select,
            "struct" => Self::Struct,
            "switch" => Self::Switch,
            "type" => Self::Type,
            "var" => Self::Var,
            _ => return None,
        };
        Some(keyword)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Break => "break",
            Self::Case => "case",
            Self::Chan => "chan",
            Self::Const => "const",
            Self::Continue => "continue",
            Self::Default => "default",
            Self::Defer => "defer",
            Self::Else => "else",
            Self::Fallthrough => "fallthrough",
            Self::For => "for",
            Self::Func => "func",
            Self::Go => "go",
            Self::Goto => "goto",
            Self::If => "if",
            Self::Import => "import",
            Self::Interface => "interface",
            Self::Map => "map",
            Self::Package => "package",
            Self::Range => "range",
            Self::Return => "return",
            Self::Select => "select",
            Self::Struct => "struct",
            Self::Switch => "switch",
            Self::Type => "type",
            Self::Var => "var",
        }
    }

    /// Keywords after which a newline terminates the statement.
    #[must_use]
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            Self::Break | Self::Continue | Self::Fallthrough | Self::Return
        )
    }
}

/// Operators and punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
    /// `&^`
    AndNot,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    QuoAssign,
    /// `%=`
    RemAssign,
    /// `&=`
    AndAssign,
    /// `|=`
    OrAssign,
    /// `^=`
    XorAssign,
    /// `<<=`
    ShlAssign,
    /// `>>=`
    ShrAssign,
    /// `&^=`
    AndNotAssign,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `<-`
    Arrow,
    /// `++`
    Inc,
    /// `--`
    Dec,
    /// `==`
    Eql,
    /// `<`
    Lss,
    /// `>`
    Gtr,
    /// `=`
    Assign,
    /// `!`
    Not,
    /// `~`
    Tilde,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `:=`
    Define,
    /// `...`
    Ellipsis,
    /// `(`
    LParen,
    /// `[`
    LBrack,
    /// `{`
    LBrace,
    /// `,`
    Comma,
    /// `.`
    Period,
    /// `)`
    RParen,
    /// `]`
    RBrack,
    /// `}`
    RBrace,
    /// `;` written in the source.
    Semicolon,
    /// `:`
    Colon,
}

impl Operator {
    /// Every operator, longest spellings first so that a linear scan
    /// implements maximal munch.
    pub const ALL: [Self; 48] = [
        Self::ShlAssign,
        Self::ShrAssign,
        Self::AndNotAssign,
        Self::Ellipsis,
        Self::Shl,
        Self::Shr,
        Self::AndNot,
        Self::AddAssign,
        Self::SubAssign,
        Self::MulAssign,
        Self::QuoAssign,
        Self::RemAssign,
        Self::AndAssign,
        Self::OrAssign,
        Self::XorAssign,
        Self::LogicalAnd,
        Self::LogicalOr,
        Self::Arrow,
        Self::Inc,
        Self::Dec,
        Self::Eql,
        Self::Neq,
        Self::Leq,
        Self::Geq,
        Self::Define,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Quo,
        Self::Rem,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Lss,
        Self::Gtr,
        Self::Assign,
        Self::Not,
        Self::Tilde,
        Self::LParen,
        Self::LBrack,
        Self::LBrace,
        Self::Comma,
        Self::Period,
        Self::RParen,
        Self::RBrack,
        Self::RBrace,
        Self::Semicolon,
        Self::Colon,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Quo => "/",
            Self::Rem => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::AndNot => "&^",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::QuoAssign => "/=",
            Self::RemAssign => "%=",
            Self::AndAssign => "&=",
            Self::OrAssign => "|=",
            Self::XorAssign => "^=",
            Self::ShlAssign => "<<=",
            Self::ShrAssign => ">>=",
            Self::AndNotAssign => "&^=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Arrow => "<-",
            Self::Inc => "++",
            Self::Dec => "--",
            Self::Eql => "==",
            Self::Lss => "<",
            Self::Gtr => ">",
            Self::Assign => "=",
            Self::Not => "!",
            Self::Tilde => "~",
            Self::Neq => "!=",
            Self::Leq => "<=",
            Self::Geq => ">=",
            Self::Define => ":=",
            Self::Ellipsis => "...",
            Self::LParen => "(",
            Self::LBrack => "[",
            Self::LBrace => "{",
            Self::Comma => ",",
            Self::Period => ".",
            Self::RParen => ")",
            Self::RBrack => "]",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Colon => ":",
        }
    }

    /// Longest operator spelled at the start of `rest`.
    #[must_use]
    pub fn longest_prefix(rest: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|op| rest.starts_with(op.as_str()))
    }

    /// Operators after which a newline terminates the statement.
    #[must_use]
    pub const fn ends_statement(self) -> bool {
        matches!(
            self,
            Self::Inc | Self::Dec | Self::RParen | Self::RBrack | Self::RBrace
        )
    }
}

/// Literal subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// `42`, `0x2a`, `0o52`, `0b101010`
    Int,
    /// `4.2`, `.5`, `1e9`, `0x1p-2`
    Float,
    /// `2i`, `1.5i`
    Imag,
    /// `'a'`, `'\n'`
    Char,
    /// `"text"` or `` `raw text` ``
    String,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Reserved word.
    Keyword(Keyword),
    /// Identifier, including predeclared names.
    Ident,
    /// Numeric, rune, or string literal.
    Literal(LiteralKind),
    /// Operator or punctuation.
    Operator(Operator),
    /// Statement terminator inserted at a newline (or at end of input).
    /// Its text is always empty; the newline is its whitespace.
    LineTerminator,
    /// Line (`// ...`) or general (`/* ... */`) comment.
    Comment,
    /// Unrecognized character or unterminated literal/comment.
    Invalid,
}

impl TokenKind {
    /// Kinds whose text may contain newlines: general comments, raw
    /// strings, and unterminated versions of both.
    #[must_use]
    pub const fn may_span_lines(self) -> bool {
        matches!(
            self,
            Self::Comment | Self::Literal(LiteralKind::String) | Self::Invalid
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyword(keyword) => write!(f, "keyword {}", keyword.as_str()),
            Self::Ident => f.write_str("identifier"),
            Self::Literal(LiteralKind::Int) => f.write_str("int literal"),
            Self::Literal(LiteralKind::Float) => f.write_str("float literal"),
            Self::Literal(LiteralKind::Imag) => f.write_str("imaginary literal"),
            Self::Literal(LiteralKind::Char) => f.write_str("char literal"),
            Self::Literal(LiteralKind::String) => f.write_str("string literal"),
            Self::Operator(op) => write!(f, "operator {}", op.as_str()),
            Self::LineTerminator => f.write_str("line terminator"),
            Self::Comment => f.write_str("comment"),
            Self::Invalid => f.write_str("invalid"),
        }
    }
}

/// A single token with its kind, exact source text, the whitespace that
/// follows it, and its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub whitespace: String,
    pub pos: Position,
}
