//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of anchored regex patterns
//! - Recognition of keywords, identifiers, numbers and operators
//! - Position tracking (offset, line, column) for error reporting
//! - Comments, whitespace and the leading hash-bang line

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
