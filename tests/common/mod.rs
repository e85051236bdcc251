#![allow(dead_code)]

use goprint::{Line, Source, Token, format_lines, scan, tokenize};

/// Normalized source under a fixed display name.
pub fn source(input: &str) -> Source {
    Source::new("test.go", input.as_bytes())
}

pub fn tokens(input: &str) -> Vec<Token> {
    tokenize(&source(input))
}

pub fn lines(input: &str) -> Vec<Line> {
    let source = source(input);
    format_lines(scan(&source)).collect()
}

/// Concatenate every token's text and trailing whitespace.
pub fn rebuild_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}{}", t.text, t.whitespace))
        .collect()
}

/// Join rendered lines with `\n`.
pub fn rebuild_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that both the token stream and the line grouping of `input`
/// reproduce it byte for byte.
pub fn assert_lossless(input: &str) {
    let expected = source(input).text().to_string();

    let from_tokens = rebuild_tokens(&tokens(input));
    assert_eq!(
        from_tokens, expected,
        "token round-trip mismatch:\n--- expected ---\n{expected}\n--- got ---\n{from_tokens}"
    );

    let lines = lines(input);
    let from_lines = rebuild_lines(&lines);
    assert_eq!(
        from_lines, expected,
        "line round-trip mismatch:\n--- expected ---\n{expected}\n--- got ---\n{from_lines}"
    );
    assert_eq!(lines.len(), expected.matches('\n').count() + 1);
}

/// Span texts of a line, spacing included as empty strings.
pub fn texts(line: &Line) -> Vec<&str> {
    line.iter().map(|span| span.text.as_str()).collect()
}
