/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Program` root and the `Stmt` / `Expr` node enums
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement and declaration node kinds
/// - types: Definitions for type annotations
/// - printer: Deterministic S-expression dump and canonical source printer
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;
pub mod types;

#[cfg(test)]
mod tests;
