//! Error types and error handling for the parser.
//!
//! This module defines the single error value returned by lexing and
//! parsing. It includes:
//!
//! - The error structure with its source position
//! - Specific error variants for the lexer and the parser
//! - Error kinds (`LexError` / `SyntaxError`) and suggestion tips

pub mod errors;
