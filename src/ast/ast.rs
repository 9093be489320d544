use crate::Span;

use super::{
    expressions::{ArrowFunctionExpr, AssignmentExpr, BinaryExpr, NumberExpr, SymbolExpr, UpdateExpr},
    statements::{BlockStmt, ExpressionStmt, FnDeclStmt, ForStmt, IfStmt, ReturnStmt, VarDeclStmt},
};

/// Root of every parse: an optional hash-bang line and the top-level
/// statements in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub hash_bang: Option<String>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Statement and declaration nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expression(ExpressionStmt),
    Block(BlockStmt),
    If(IfStmt),
    For(ForStmt),
    VarDecl(VarDeclStmt),
    FnDecl(FnDeclStmt),
    Return(ReturnStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::For(stmt) => &stmt.span,
            Stmt::VarDecl(stmt) => &stmt.span,
            Stmt::FnDecl(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
        }
    }

    /// Node kind name as used by the S-expression dump.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Expression(_) => "ExpressionStatement",
            Stmt::Block(_) => "Block",
            Stmt::If(_) => "IfStatement",
            Stmt::For(_) => "ForStatement",
            Stmt::VarDecl(_) => "VariableDeclaration",
            Stmt::FnDecl(_) => "FunctionDeclaration",
            Stmt::Return(_) => "ReturnStatement",
        }
    }
}

/// Expression nodes. Parenthesized expressions have no node of their own.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    Binary(BinaryExpr),
    Update(UpdateExpr),
    Assignment(AssignmentExpr),
    ArrowFunction(ArrowFunctionExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Symbol(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
            Expr::Binary(expr) => &expr.span,
            Expr::Update(expr) => &expr.span,
            Expr::Assignment(expr) => &expr.span,
            Expr::ArrowFunction(expr) => &expr.span,
        }
    }

    /// Node kind name as used by the S-expression dump.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Symbol(_) => "Identifier",
            Expr::Number(_) => "NumberLiteral",
            Expr::Binary(_) => "BinaryExpression",
            Expr::Update(_) => "UpdateExpression",
            Expr::Assignment(_) => "AssignmentExpression",
            Expr::ArrowFunction(_) => "ArrowFunction",
        }
    }

    /// Returns the identifier if this expression is a plain identifier.
    pub fn as_symbol(&self) -> Option<&SymbolExpr> {
        match self {
            Expr::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}
