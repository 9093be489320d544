use std::fmt::Display;

use crate::{
    lexer::tokens::{Radix, TokenKind},
    Span,
};

use super::{ast::Expr, statements::{BlockStmt, Parameter}, types::TypeAnnotation};

// LITERALS

/// Number Expression
/// Represents a numeric literal. Only the raw text is kept; the value is
/// never range checked.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub raw: String,
    pub radix: Radix,
    pub span: Span,
}

/// Symbol Expression
/// Represents an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponent,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    Equals,
    StrictEquals,
    NotEquals,
    StrictNotEquals,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => BinaryOperator::Add,
            TokenKind::Dash => BinaryOperator::Subtract,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Percent => BinaryOperator::Modulo,
            TokenKind::StarStar => BinaryOperator::Exponent,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEquals => BinaryOperator::LessEquals,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
            TokenKind::Equals => BinaryOperator::Equals,
            TokenKind::StrictEquals => BinaryOperator::StrictEquals,
            TokenKind::NotEquals => BinaryOperator::NotEquals,
            TokenKind::StrictNotEquals => BinaryOperator::StrictNotEquals,
            _ => return None,
        })
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponent => "**",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Equals => "==",
            BinaryOperator::StrictEquals => "===",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::StrictNotEquals => "!==",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::PlusPlus => Some(UpdateOperator::Increment),
            TokenKind::MinusMinus => Some(UpdateOperator::Decrement),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UpdateOperator::Increment => "++",
            UpdateOperator::Decrement => "--",
        }
    }
}

impl Display for UpdateOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic, relational or equality operation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Update Expression
/// `++x`, `x++`, `--x` or `x--`. The argument is always an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateExpr {
    pub argument: Box<Expr>,
    pub operator: UpdateOperator,
    pub is_prefix: bool,
    pub span: Span,
}

/// Assignment Expression
/// `[using] name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub uses_using: bool,
    pub assignee: SymbolExpr,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Expr(Box<Expr>),
    Block(BlockStmt),
}

/// Arrow Function Expression
/// `(params)[: type] => body`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunctionExpr {
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: ArrowBody,
    pub span: Span,
}
