use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Radix, Token, TokenKind, RESERVED_LOOKUP};

/// A pattern handler receives the text its regex matched at the cursor.
pub type RegexHandler = fn(&mut Lexer, &str) -> Result<(), Error>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(&format!("^(?:{})", regex)).expect("lexer pattern must compile"),
        handler,
    }
}

lazy_static! {
    static ref HASH_BANG: Regex = Regex::new("^#![^\n]*").expect("hash-bang pattern must compile");

    // Tried in order; multi-character operators come before their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("[\\s\\p{Zs}\\x{FEFF}\\x{2028}\\x{2029}\\x{2060}\\x{200B}]+", skip_handler),
        pattern("//.*", skip_handler),
        pattern("/\\*[^*]*\\*+(?:[^/*][^*]*\\*+)*/", skip_handler),
        pattern("/\\*", unterminated_comment_handler),
        pattern("[_a-zA-Z][_a-zA-Z0-9]*", symbol_handler),
        pattern("[0-9][_a-zA-Z0-9]*", number_handler),
        pattern("===", MK_DEFAULT_HANDLER!(TokenKind::StrictEquals, "===")),
        pattern("!==", MK_DEFAULT_HANDLER!(TokenKind::StrictNotEquals, "!==")),
        pattern("\\.\\.\\.", MK_DEFAULT_HANDLER!(TokenKind::Ellipsis, "...")),
        pattern("\\*\\*", MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")),
        pattern("\\+\\+", MK_DEFAULT_HANDLER!(TokenKind::PlusPlus, "++")),
        pattern("--", MK_DEFAULT_HANDLER!(TokenKind::MinusMinus, "--")),
        pattern("==", MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")),
        pattern("!=", MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=")),
        pattern("<=", MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=")),
        pattern(">=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=")),
        pattern("=>", MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>")),
        pattern("=", MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")),
        pattern("<", MK_DEFAULT_HANDLER!(TokenKind::Less, "<")),
        pattern(">", MK_DEFAULT_HANDLER!(TokenKind::Greater, ">")),
        pattern("\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("-", MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")),
        pattern("\\*", MK_DEFAULT_HANDLER!(TokenKind::Star, "*")),
        pattern("/", MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")),
        pattern("%", MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")),
        pattern("\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern(";", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern(":", MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")),
        pattern(",", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
        pattern("\\?", MK_DEFAULT_HANDLER!(TokenKind::Question, "?")),
    ];
}

pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    position: Position,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            position: Position::start(),
        }
    }

    /// Moves the cursor past `text`, which must be the text at the cursor.
    pub fn advance(&mut self, text: &str) {
        self.pos += text.len();
        self.position = self.position.advanced_by(text);
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    lexer.advance(matched);
    Ok(())
}

fn unterminated_comment_handler(lexer: &mut Lexer, _matched: &str) -> Result<(), Error> {
    Err(Error::new(ErrorImpl::UnterminatedComment, lexer.position()))
}

fn number_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    // `matched` is the whole alphanumeric run so that `0xGG` and `12ab` are
    // rejected here instead of splitting into a number and an identifier.
    let (radix, digits_start) = if matched.starts_with("0x") || matched.starts_with("0X") {
        (Radix::Hex, 2)
    } else {
        (Radix::Decimal, 0)
    };

    let is_digit = |c: char| match radix {
        Radix::Hex => c.is_ascii_hexdigit(),
        Radix::Decimal => c.is_ascii_digit(),
    };

    let digits = &matched[digits_start..];
    let bad_offset = match digits.find(|c: char| !is_digit(c)) {
        Some(offset) => Some(digits_start + offset),
        None if digits.is_empty() => Some(digits_start),
        None => None,
    };

    if let Some(offset) = bad_offset {
        return Err(Error::new(
            ErrorImpl::MalformedNumber {
                token: matched.to_string(),
            },
            lexer.position().advanced_by(&matched[..offset]),
        ));
    }

    let start = lexer.position();
    lexer.advance(matched);
    lexer.push(MK_TOKEN!(
        TokenKind::Number(radix),
        matched.to_string(),
        Span {
            start,
            end: lexer.position()
        }
    ));
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) -> Result<(), Error> {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let start = lexer.position();
    lexer.advance(matched);
    lexer.push(MK_TOKEN!(
        kind,
        matched.to_string(),
        Span {
            start,
            end: lexer.position()
        }
    ));
    Ok(())
}

/// Converts `source` into tokens, always terminated by a single `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source);

    // Only the very first line may be a hash-bang
    if let Some(hash_bang) = HASH_BANG.find(source) {
        let start = lex.position();
        lex.advance(hash_bang.as_str());
        lex.push(MK_TOKEN!(
            TokenKind::HashBang,
            hash_bang.as_str().to_string(),
            Span {
                start,
                end: lex.position()
            }
        ));
    }

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS
            .iter()
            .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.as_str())));

        match matched {
            Some((handler, text)) => handler(&mut lex, text)?,
            None => {
                let token = remaining.chars().next().map(String::from).unwrap_or_default();
                return Err(Error::new(
                    ErrorImpl::UnrecognisedToken { token },
                    lex.position(),
                ));
            }
        }
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span { start: end, end }
    ));

    debug!("tokenized {} bytes into {} tokens", source.len(), lex.tokens.len());
    Ok(lex.tokens)
}
