use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("const", TokenKind::Const);
        map.insert("var", TokenKind::Var);
        map.insert("function", TokenKind::Function);
        map.insert("async", TokenKind::Async);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("using", TokenKind::Using);
        map
    };
}

/// Base of a numeric literal.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Radix {
    Decimal,
    Hex,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    HashBang,
    Number(Radix),
    Identifier,

    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment,      // =
    Equals,          // ==
    StrictEquals,    // ===
    NotEquals,       // !=
    StrictNotEquals, // !==

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Ellipsis,
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow, // =>

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,
    StarStar,
    Percent,

    // Reserved
    Let,
    Const,
    Var,
    Function,
    Async,
    If,
    Else,
    For,
    Return,
    Using,
}

impl TokenKind {
    /// Source text of fixed tokens, used in "expected ..." messages.
    pub fn symbol(&self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::HashBang => "#!",
            TokenKind::Number(_) => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::StrictEquals => "===",
            TokenKind::NotEquals => "!=",
            TokenKind::StrictNotEquals => "!==",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::Ellipsis => "...",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Question => "?",
            TokenKind::Comma => ",",
            TokenKind::Arrow => "=>",
            TokenKind::PlusPlus => "++",
            TokenKind::MinusMinus => "--",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::StarStar => "**",
            TokenKind::Percent => "%",
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Var => "var",
            TokenKind::Function => "function",
            TokenKind::Async => "async",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::For => "for",
            TokenKind::Return => "return",
            TokenKind::Using => "using",
        }
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    /// Text shown for this token in diagnostics.
    pub fn describe(&self) -> &str {
        if self.kind == TokenKind::EOF {
            self.kind.symbol()
        } else {
            &self.value
        }
    }
}
