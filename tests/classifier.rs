//! Presentation tags assigned to real Go tokens.

mod common;

use common::tokens;
use goprint::{Class, Token, TokenKind, is_builtin};

fn class_of(tokens: &[Token], text: &str) -> String {
    tokens
        .iter()
        .find(|t| t.text == text)
        .map(|t| t.class().to_string())
        .unwrap_or_else(|| panic!("no token {text:?}"))
}

#[test]
fn tags_for_a_statement() {
    let tokens = tokens("func f() { fmt.Println(len(xs), 1.5, 'c', \"s\", 0x10, 2i) } // done\n");
    assert_eq!(class_of(&tokens, "func"), "keyword");
    assert_eq!(class_of(&tokens, "f"), "ident");
    assert_eq!(class_of(&tokens, "fmt"), "ident");
    assert_eq!(class_of(&tokens, "len"), "ident builtin");
    assert_eq!(class_of(&tokens, "1.5"), "literal float");
    assert_eq!(class_of(&tokens, "'c'"), "literal char");
    assert_eq!(class_of(&tokens, "\"s\""), "literal string");
    assert_eq!(class_of(&tokens, "0x10"), "literal int");
    assert_eq!(class_of(&tokens, "2i"), "literal imag");
    assert_eq!(class_of(&tokens, "("), "operator");
    assert_eq!(class_of(&tokens, "// done"), "comment");
}

#[test]
fn raw_strings_are_strings() {
    let tokens = tokens("`raw`");
    assert_eq!(class_of(&tokens, "`raw`"), "literal string");
}

#[test]
fn invalid_tokens() {
    let tokens = tokens("a $ b");
    assert_eq!(class_of(&tokens, "$"), "invalid");
}

#[test]
fn terminators_classify_as_operators() {
    let tokens = tokens("x\n");
    let terminator = tokens
        .iter()
        .find(|t| t.kind == TokenKind::LineTerminator)
        .expect("terminator");
    assert_eq!(terminator.class().primary(), Class::Operator);
}

#[test]
fn predeclared_names() {
    for name in [
        "true", "false", "iota", "nil", "append", "cap", "close", "complex", "copy", "delete",
        "imag", "len", "make", "new", "panic", "print", "println", "real", "recover", "bool",
        "byte", "complex64", "complex128", "error", "float32", "float64", "int", "int8",
        "int16", "int32", "int64", "rune", "string", "uint", "uint8", "uint16", "uint32",
        "uint64", "uintptr", "any", "comparable", "clear", "min", "max",
    ] {
        assert!(is_builtin(name), "{name}");
    }
    for name in ["fmt", "Len", "str", "float", "func", "main"] {
        assert!(!is_builtin(name), "{name}");
    }
}

#[test]
fn shadowed_builtins_are_still_tagged() {
    let tokens = tokens("len := 3\n");
    assert!(tokens[0].class().contains(Class::Builtin));
}

#[test]
fn every_token_has_tags() {
    let tokens = tokens("package p\n\nvar _ = map[string]int{\"a\": 1} /* c */ @\n");
    for token in &tokens {
        let tags = token.class().tags();
        assert!(!tags.is_empty() && tags.len() <= 2, "{token:?}");
    }
}
