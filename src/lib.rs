#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorTip},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in the source text. `offset` is a byte offset, `line` and
/// `column` are 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the position reached after consuming `text` from here.
    pub fn advanced_by(&self, text: &str) -> Self {
        let mut next = *self;
        for c in text.chars() {
            if c == '\n' {
                next.line += 1;
                next.column = 1;
            } else {
                next.column += 1;
            }
        }
        next.offset += text.len();
        next
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` into a [`Program`].
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parse(tokens)
}

/// Returns the 1-based line number, the text of that line and the character
/// column (0-based) of `position` inside it.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            let line_pos = source[start..pos].chars().count();
            return (line_number, line.trim_end_matches(['\n', '\r']).to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line
    if source.is_empty() || source.ends_with('\n') {
        return (line_number, String::new(), 0);
    }

    let last = source.rsplit('\n').next().unwrap_or_default();
    (line_number - 1, last.to_string(), last.chars().count())
}

/// Renders `error` as a caret diagnostic pointing into `source`.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        error[SyntaxError]: message
         --> main.ts:20:9
          |
        20 | let a = #;
          |         ^
    */

    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.offset);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("error[{}]: {}\n", error.kind(), error.message()));
    } else {
        out.push_str(&format!(
            "error[{}]: {} ({})\n",
            error.kind(),
            error.message(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("{:>width$} {}:{}\n", "-->", file, position, width = padding));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:>arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use super::{get_line_at_position, parse_source, render_error, Position};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";
        let (line_number, line, line_pos) = get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = get_line_at_position("let a\nlet b", 11);
        assert_eq!(line_number, 2);
        assert_eq!(line, "let b");
        assert_eq!(line_pos, 5);
    }

    #[test]
    fn test_position_advanced_by() {
        let pos = Position::start().advanced_by("ab\ncd");
        assert_eq!(pos.offset, 5);
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 3);

        let pos = Position::start().advanced_by("é");
        assert_eq!(pos.offset, 2);
        assert_eq!(pos.column, 2);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_offsets_past_four_gib_do_not_wrap() {
        let far = Position {
            offset: u32::MAX as usize,
            line: 1,
            column: 1,
        };

        let pos = far.advanced_by("ab");
        assert_eq!(pos.offset, u32::MAX as usize + 2);
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_render_error() {
        let source = "let a = 1;\n    let b = );";
        let error = parse_source(source).unwrap_err();
        let rendered = render_error(&error, source, "main.ts");

        assert!(rendered.starts_with("error[SyntaxError]: unexpected token `)`"));
        assert!(rendered.contains("--> main.ts:2:13"));
        assert!(rendered.contains("2 | let b = );"));
        assert!(rendered.ends_with("  |         ^\n"));
    }
}
