//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Number literals
//! - Punctuation and operator symbols
//! - Comments and whitespace
//! - Span tracking across lines

use super::{
    lexer::Lexer,
    source::Source,
    tokens::{Token, TokenKind},
};

fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(Source::new(source, None));
    let mut tokens = vec![];

    loop {
        let token = lexer.next();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("def extern if then else for in var binary unary");

    assert_eq!(tokens[0].kind, TokenKind::Def);
    assert_eq!(tokens[1].kind, TokenKind::Extern);
    assert_eq!(tokens[2].kind, TokenKind::If);
    assert_eq!(tokens[3].kind, TokenKind::Then);
    assert_eq!(tokens[4].kind, TokenKind::Else);
    assert_eq!(tokens[5].kind, TokenKind::For);
    assert_eq!(tokens[6].kind, TokenKind::In);
    assert_eq!(tokens[7].kind, TokenKind::Var);
    assert_eq!(tokens[8].kind, TokenKind::Binary);
    assert_eq!(tokens[9].kind, TokenKind::Unary);
    assert_eq!(tokens[10].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo fib2 tmp_1 definition");

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].value, "fib2");
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[2].value, "tmp_1");

    // A keyword prefix does not make an identifier a keyword.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "definition");
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].value, "0");
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].value, "100.5");
    assert_eq!(tokens[4].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_number_with_trailing_dot() {
    // A dot without following digits is not part of the literal.
    let tokens = tokenize("1.");

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "1");
    assert_eq!(tokens[1].kind, TokenKind::Op);
    assert_eq!(tokens[1].value, ".");
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("( ) ,");

    assert_eq!(tokens[0].kind, TokenKind::LeftParen);
    assert_eq!(tokens[1].kind, TokenKind::RightParen);
    assert_eq!(tokens[2].kind, TokenKind::Comma);
}

#[test]
fn test_tokenize_operator_symbols() {
    // Any other punctuation becomes a one-character operator symbol.
    let tokens = tokenize("+ - * < $ @ !");

    for token in &tokens[..7] {
        assert_eq!(token.kind, TokenKind::Op);
    }
    assert_eq!(tokens[0].value, "+");
    assert_eq!(tokens[4].value, "$");
    assert_eq!(tokens[5].value, "@");
    assert_eq!(tokens[6].value, "!");
}

#[test]
fn test_tokenize_adjacent_operators_split() {
    let tokens = tokenize("<=");

    assert_eq!(tokens[0].kind, TokenKind::Op);
    assert_eq!(tokens[0].value, "<");
    assert_eq!(tokens[1].kind, TokenKind::Op);
    assert_eq!(tokens[1].value, "=");
}

#[test]
fn test_tokenize_skips_comments() {
    let tokens = tokenize("x # a comment\ny");

    assert_eq!(tokens[0].value, "x");
    assert_eq!(tokens[1].value, "y");
    assert_eq!(tokens[1].span.start.line, 2);
    assert_eq!(tokens[1].span.start.column, 1);
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_token_spans_exclude_trivia() {
    let tokens = tokenize("def f");

    assert_eq!(tokens[0].span.to_string(), "1:1..1:4");
    assert_eq!(tokens[0].span.start.offset, 0);
    assert_eq!(tokens[0].span.end.offset, 3);
    assert_eq!(tokens[1].span.to_string(), "1:5..1:6");
    assert_eq!(tokens[1].span.start.offset, 4);
}

#[test]
fn test_eof_is_idempotent() {
    let mut lexer = Lexer::new(Source::new("x", None));

    assert_eq!(lexer.next().kind, TokenKind::Identifier);
    assert_eq!(lexer.next().kind, TokenKind::Eof);
    assert_eq!(lexer.next().kind, TokenKind::Eof);
}

#[test]
fn test_load_rewinds_to_start() {
    let mut lexer = Lexer::new(Source::new("x y", None));
    lexer.next();
    lexer.next();

    lexer.load("z");
    let token = lexer.next();
    assert_eq!(token.value, "z");
    assert_eq!(token.span.start.offset, 0);
    assert_eq!(token.span.start.column, 1);
}

#[test]
fn test_source_slice_clamps() {
    let source = Source::new("abc", None);

    assert_eq!(source.slice(0, 3), "abc");
    assert_eq!(source.slice(1, 100), "bc");
    assert_eq!(source.slice(50, 100), "");
}

#[test]
fn test_source_char_at_clamps() {
    let source = Source::new("abc", None);

    assert_eq!(source.char_at(1), 'b');
    assert_eq!(source.char_at(100), '\0');
}

#[test]
fn test_source_origin_defaults_to_input() {
    assert_eq!(Source::new("", None).origin(), "input");
    assert_eq!(
        Source::new("", Some(String::from("lib.kal"))).origin(),
        "lib.kal"
    );
}
