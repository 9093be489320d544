//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Decimal and hex literals
//! - Operators and maximal munch
//! - Comments, Unicode whitespace and the hash-bang line
//! - Error cases and positions

use crate::errors::errors::{ErrorImpl, ErrorKind};

use super::{
    lexer::tokenize,
    tokens::{Radix, TokenKind},
};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    let tokens = tokenize("let const var function async if else for return using").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Let);
    assert_eq!(tokens[1].kind, TokenKind::Const);
    assert_eq!(tokens[2].kind, TokenKind::Var);
    assert_eq!(tokens[3].kind, TokenKind::Function);
    assert_eq!(tokens[4].kind, TokenKind::Async);
    assert_eq!(tokens[5].kind, TokenKind::If);
    assert_eq!(tokens[6].kind, TokenKind::Else);
    assert_eq!(tokens[7].kind, TokenKind::For);
    assert_eq!(tokens[8].kind, TokenKind::Return);
    assert_eq!(tokens[9].kind, TokenKind::Using);
    assert_eq!(tokens[10].kind, TokenKind::EOF);
    assert!(tokens[0].kind.is_keyword());
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase lets number Promise").unwrap();

    let values: Vec<&str> = tokens[..7].iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        ["foo", "baz_123", "_underscore", "CamelCase", "lets", "number", "Promise"]
    );
    assert!(tokens[..7].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[7].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 0 0xFF 0Xab 007").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number(Radix::Decimal));
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Number(Radix::Decimal));
    assert_eq!(tokens[2].kind, TokenKind::Number(Radix::Hex));
    assert_eq!(tokens[2].value, "0xFF");
    assert_eq!(tokens[3].kind, TokenKind::Number(Radix::Hex));
    assert_eq!(tokens[3].value, "0Xab");
    assert_eq!(tokens[4].value, "007");
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_numbers_are_not_range_checked() {
    let tokens = tokenize("99999999999999999999999999 0xFFFFFFFFFFFFFFFFFFFFFFFF").unwrap();

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::Number(Radix::Decimal));
    assert_eq!(tokens[0].value, "99999999999999999999999999");
    assert_eq!(tokens[1].kind, TokenKind::Number(Radix::Hex));
    assert_eq!(tokens[1].value, "0xFFFFFFFFFFFFFFFFFFFFFFFF");
}

#[test]
fn test_tokenize_single_hex_token() {
    let tokens = tokenize("0xFF").unwrap();

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number(Radix::Hex));
}

#[test]
fn test_malformed_hex_fails_at_first_bad_digit() {
    let error = tokenize("0xGG").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(error.line(), 1);
    assert_eq!(error.column(), 3);
    assert_eq!(error.get_position().offset, 2);
}

#[test]
fn test_malformed_numbers() {
    let error = tokenize("let x = 12ab;").unwrap_err();
    assert!(matches!(error.get_internal_error(), ErrorImpl::MalformedNumber { token } if token == "12ab"));
    assert_eq!(error.column(), 11);

    let error = tokenize("0x").unwrap_err();
    assert_eq!(error.column(), 3);

    // No floating point in the lexical grammar
    let error = tokenize("1.5").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(error.column(), 2);
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / % ** ++ -- < <= > >= == === != !== = => : ; , ( ) { } ... ?"),
        vec![
            TokenKind::Plus,
            TokenKind::Dash,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::StarStar,
            TokenKind::PlusPlus,
            TokenKind::MinusMinus,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::StrictEquals,
            TokenKind::NotEquals,
            TokenKind::StrictNotEquals,
            TokenKind::Assignment,
            TokenKind::Arrow,
            TokenKind::Colon,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::Ellipsis,
            TokenKind::Question,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_maximal_munch() {
    assert_eq!(
        kinds("a***b"),
        vec![
            TokenKind::Identifier,
            TokenKind::StarStar,
            TokenKind::Star,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(
        kinds("a+++b"),
        vec![
            TokenKind::Identifier,
            TokenKind::PlusPlus,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
    assert_eq!(
        kinds("====!==="),
        vec![
            TokenKind::StrictEquals,
            TokenKind::Assignment,
            TokenKind::StrictNotEquals,
            TokenKind::Assignment,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_comments_are_trivia() {
    assert_eq!(
        kinds("a // line comment\n/* block\n * comment **/ b /**/ c"),
        vec![
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::Identifier,
            TokenKind::EOF
        ]
    );
}

#[test]
fn test_block_comment_stops_at_first_close() {
    // `/* a */ b /* c */` must not swallow `b`
    let tokens = tokenize("/* a */ b /* c */").unwrap();
    assert_eq!(tokens[0].value, "b");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_unterminated_block_comment() {
    let error = tokenize("a /* never closed").unwrap_err();

    assert!(matches!(error.get_internal_error(), ErrorImpl::UnterminatedComment));
    assert_eq!(error.column(), 3);
}

#[test]
fn test_unicode_whitespace_is_trivia() {
    let source = "a\u{00A0}b\u{FEFF}c\u{2028}d\u{2029}e\u{2060}f\u{200B}g\u{3000}h";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 9);
    assert!(tokens[..8].iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn test_hash_bang_first_line() {
    let tokens = tokenize("#!/usr/bin/env node\nlet x").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::HashBang);
    assert_eq!(tokens[0].value, "#!/usr/bin/env node");
    assert_eq!(tokens[1].kind, TokenKind::Let);
    assert_eq!(tokens[1].span.start.line, 2);
}

#[test]
fn test_hash_bang_elsewhere_fails() {
    let error = tokenize("let x\n#!/usr/bin/env node").unwrap_err();

    assert!(matches!(error.get_internal_error(), ErrorImpl::UnrecognisedToken { token } if token == "#"));
    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 1);

    // Leading whitespace disqualifies the hash-bang too
    assert!(tokenize(" #!x").is_err());
}

#[test]
fn test_unrecognised_token() {
    let error = tokenize("let a = @;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::LexError);
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.column(), 9);

    assert!(tokenize("!a").is_err());
    assert!(tokenize("a.b").is_err());
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("let x =\n  0x1F; /* é */ y").unwrap();

    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[0].span.end.column, 4);
    assert_eq!(tokens[3].value, "0x1F");
    assert_eq!(tokens[3].span.start.line, 2);
    assert_eq!(tokens[3].span.start.column, 3);
    assert_eq!(tokens[3].span.start.offset, 10);
    // Columns count characters, offsets count bytes
    assert_eq!(tokens[5].value, "y");
    assert_eq!(tokens[5].span.start.column, 17);
    assert_eq!(tokens[5].span.start.offset, 25);
}

#[test]
fn test_empty_source() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("  \n\t// only trivia"), vec![TokenKind::EOF]);
}
