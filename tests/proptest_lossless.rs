//! Property-based tests with proptest.
//!
//! Inputs are built from Go-looking fragments mixed with arbitrary
//! characters, so both well-formed and malformed source are covered.

use goprint::{
    Line, Lexer, Source, Token, TokenKind, format_lines, run_staged, scan, tokenize,
};
use proptest::prelude::*;

// -- Strategies --

fn fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        2 => "[0-9]{1,4}(\\.[0-9]{0,3})?(e[+-]?[0-9])?i?",
        2 => prop::sample::select(vec![
            "+", "-", "*", "/", ":=", "=", "==", "<-", "&^=", "...", "(", ")", "[", "]",
            "{", "}", ",", ";", ".", "++", "--", "!", "~",
        ])
        .prop_map(str::to_string),
        2 => prop::sample::select(vec![
            "break", "continue", "return", "fallthrough", "func", "if", "for", "go",
        ])
        .prop_map(str::to_string),
        3 => prop::sample::select(vec![" ", "  ", "\t", "\n", "\n\n", "\n\t", "\r\n"])
            .prop_map(str::to_string),
        1 => "\"[a-z \\\\\"]{0,6}\"?",
        1 => "'[a-z\\\\']{0,2}'?",
        1 => "`[a-z\n]{0,6}`?",
        1 => "//[a-z ]{0,6}",
        1 => "/\\*[a-z \n*]{0,8}(\\*/)?",
        1 => any::<char>().prop_map(String::from),
    ]
}

fn go_like() -> impl Strategy<Value = String> {
    prop::collection::vec(fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn rebuild(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("{}{}", t.text, t.whitespace))
        .collect()
}

fn rebuild_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #[test]
    fn tokens_reproduce_source(input in go_like()) {
        let source = Source::new("p.go", input.as_bytes());
        prop_assert_eq!(rebuild(&tokenize(&source)), source.text());
    }

    #[test]
    fn tokens_reproduce_arbitrary_text(input in any::<String>()) {
        let tokens: Vec<Token> = Lexer::new(&input).collect();
        prop_assert_eq!(rebuild(&tokens), input);
    }

    #[test]
    fn lines_reproduce_source(input in go_like()) {
        let source = Source::new("p.go", input.as_bytes());
        let lines: Vec<Line> = format_lines(scan(&source)).collect();
        prop_assert_eq!(lines.len(), source.line_count());
        prop_assert_eq!(rebuild_lines(&lines), source.text());
        for line in &lines {
            for span in line {
                prop_assert!(!span.text.contains('\n'));
                prop_assert!(!span.whitespace.contains('\n'));
            }
        }
    }

    #[test]
    fn positions_match_prefix(input in go_like()) {
        let source = Source::new("p.go", input.as_bytes());
        let mut prefix = String::new();
        for token in scan(&source) {
            prop_assert_eq!(token.pos.offset, prefix.len());
            prop_assert_eq!(token.pos.line, prefix.matches('\n').count() + 1);
            let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
            prop_assert_eq!(token.pos.column, prefix.len() - line_start + 1);
            prefix.push_str(&token.text);
            prefix.push_str(&token.whitespace);
        }
    }

    #[test]
    fn terminators_are_zero_width(input in go_like()) {
        let source = Source::new("p.go", input.as_bytes());
        for token in scan(&source) {
            if token.kind == TokenKind::LineTerminator {
                prop_assert!(token.text.is_empty());
            } else {
                prop_assert!(!token.text.is_empty());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn staged_matches_lazy(input in go_like(), capacity in 0usize..4) {
        let source = Source::new("p.go", input.as_bytes());
        let lazy: Vec<Line> = format_lines(scan(&source)).collect();
        let staged = run_staged(source.clone(), capacity).expect("pipeline");
        prop_assert_eq!(staged, lazy);
    }
}
