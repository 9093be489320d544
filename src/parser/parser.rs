//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Expressions use a Pratt parser driven by NUD/LED handlers and binding
//! powers; statements are dispatched on their first token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for primary and prefix expressions
//! - LED (left denotation) handlers for infix and postfix operators
//! - Binding powers for operator precedence

use std::collections::HashMap;

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// Deepest nesting of statements, expressions and types a parse accepts.
/// Past it the parse fails instead of exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 64;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream and the lookup tables for parsing
/// statements and expressions. The cursor is owned by a single parse.
pub struct Parser {
    /// The list of tokens to parse, always ending with `EOF`
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// End of the most recently consumed token
    last_end: Position,
    /// Number of nested productions currently being parsed
    depth: usize,
    /// For each token index, whether it is a `(` whose matching `)` is
    /// followed by `=>` or `:`
    arrow_opens: Vec<bool>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An `EOF` token is appended if the stream does not already end with
    /// one, so the cursor always has a token to look at.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span { start: end, end },
            });
        }

        let arrow_opens = find_arrow_opens(&tokens);

        Parser {
            tokens,
            pos: 0,
            last_end: Position::start(),
            depth: 0,
            arrow_opens,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the kind of the token `offset` places ahead of the cursor.
    pub fn peek_kind(&self, offset: usize) -> TokenKind {
        self.tokens[(self.pos + offset).min(self.tokens.len() - 1)].kind
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.last_end = self.tokens[index].span.end;
        &self.tokens[index]
    }

    /// Expects a token of the specified kind, with optional custom error.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise returns an Error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(Error::new(
                    ErrorImpl::ExpectedToken {
                        expected: expected_kind.symbol().to_string(),
                        found: token.describe().to_string(),
                    },
                    token.span.start,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.current_token_kind() == kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the optional `;` that may follow any statement.
    pub fn skip_terminator(&mut self) {
        self.eat(TokenKind::Semicolon);
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Builds an error for the current token.
    pub fn unexpected(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.get_position())
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix or postfix) handler for a token.
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (primary or prefix) handler for a token.
    ///
    /// NUD tokens get no binding power of their own, so a primary that
    /// follows a complete expression ends it instead of continuing it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start
    }

    /// Returns the end position of the last consumed token.
    pub fn last_end(&self) -> Position {
        self.last_end
    }

    /// Decides whether the `(` at the cursor opens an arrow function: its
    /// matching `)` must be followed by `=>` or by a `:` return type.
    pub fn is_arrow_function_ahead(&self) -> bool {
        self.arrow_opens.get(self.pos).copied().unwrap_or(false)
    }

    /// Splits a `>=` at the cursor into `>` and `=`, so that a type argument
    /// list can close right before an initializer (`Promise<number>= x`).
    pub fn split_greater_equals(&mut self) {
        let index = self.pos.min(self.tokens.len() - 1);
        let token = &self.tokens[index];
        if token.kind != TokenKind::GreaterEquals {
            return;
        }

        let Span { start, end } = token.span;
        let middle = start.advanced_by(">");
        self.tokens[index] = Token {
            kind: TokenKind::Greater,
            value: String::from(">"),
            span: Span { start, end: middle },
        };
        self.tokens.insert(
            index + 1,
            Token {
                kind: TokenKind::Assignment,
                value: String::from("="),
                span: Span { start: middle, end },
            },
        );
        self.arrow_opens.insert(index + 1, false);
    }

    /// Runs `parse` one nesting level deeper, failing with `NestingTooDeep`
    /// once `MAX_NESTING_DEPTH` levels are open.
    pub fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.unexpected(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            }));
        }

        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }
}

// One pass over the stream pairing parentheses, so arrow detection never
// rescans.
fn find_arrow_opens(tokens: &[Token]) -> Vec<bool> {
    let mut arrow_opens = vec![false; tokens.len()];
    let mut open_parens = vec![];

    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::OpenParen => open_parens.push(index),
            TokenKind::CloseParen => {
                if let Some(open) = open_parens.pop() {
                    arrow_opens[open] = matches!(
                        tokens.get(index + 1).map(|token| token.kind),
                        Some(TokenKind::Arrow | TokenKind::Colon)
                    );
                }
            }
            _ => {}
        }
    }

    arrow_opens
}

/// Parses a stream of tokens into a [`Program`].
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes the lookup tables, and parses statements until EOF. The first
/// error stops the parse.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let hash_bang = if parser.current_token_kind() == TokenKind::HashBang {
        Some(parser.advance().value.clone())
    } else {
        None
    };

    let mut body = vec![];
    while parser.has_tokens() {
        body.push(parse_stmt(&mut parser)?);
    }

    debug!("parsed {} top-level statements", body.len());

    Ok(Program {
        hash_bang,
        body,
        span: Span {
            start: Position::start(),
            end: parser.get_position(),
        },
    })
}
