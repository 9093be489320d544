use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{
    ast::{Expr, Stmt},
    types::TypeAnnotation,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Expr,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Let,
    Const,
    Var,
}

impl Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeclKind::Let => write!(f, "let"),
            DeclKind::Const => write!(f, "const"),
            DeclKind::Var => write!(f, "var"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub kind: DeclKind,
    pub identifier: String,
    pub explicit_type: Option<TypeAnnotation>,
    pub assigned_value: Option<Expr>,
    pub span: Span,
}

/// `else` binds to the nearest `if`, so `else_body` is always the
/// alternative of the innermost unmatched `if`.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Box<Stmt>,
    pub else_body: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VarDecl(VarDeclStmt),
    Expr(Expr),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Option<ForInit>,
    pub condition: Option<Expr>,
    pub update: Option<Expr>,
    pub body: Box<Stmt>,
    pub span: Span,
}

/// A formal parameter: `[...]name[?][: type][= default]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub is_rest: bool,
    pub is_optional: bool,
    pub explicit_type: Option<TypeAnnotation>,
    pub default_value: Option<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FnDeclStmt {
    pub is_async: bool,
    pub identifier: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeAnnotation>,
    pub body: BlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}
