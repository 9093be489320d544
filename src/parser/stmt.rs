use log::trace;

use crate::{
    ast::{
        ast::Stmt,
        statements::{
            BlockStmt, DeclKind, ExpressionStmt, FnDeclStmt, ForInit, ForStmt, IfStmt, ReturnStmt,
            VarDeclStmt,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{
    parser::Parser,
    types::{parse_parameters, parse_type_annotation},
};

/// Parses one statement. Every statement may be followed by a single `;`.
pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.nested(parse_any_stmt)
}

fn parse_any_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    trace!("parse_stmt {:?} at {}", parser.current_token_kind(), parser.get_position());

    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()) {
        let handler = *handler;
        return handler(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.skip_terminator();

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expr.get_span().start,
            end: parser.last_end(),
        },
        expression: expr,
    }))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut decl = parse_var_decl(parser)?;
    parser.skip_terminator();
    decl.span.end = parser.last_end();

    Ok(Stmt::VarDecl(decl))
}

/// `let|const|var name[: type][= value]` without its terminator, shared by
/// declaration statements and `for` initializers.
pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDeclStmt, Error> {
    let start_token = parser.advance().clone();
    let kind = match start_token.kind {
        TokenKind::Let => DeclKind::Let,
        TokenKind::Const => DeclKind::Const,
        TokenKind::Var => DeclKind::Var,
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: start_token.describe().to_string(),
                },
                start_token.span.start,
            ))
        }
    };

    let error = parser.unexpected(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe().to_string(),
        message: String::from("expected identifier during variable declaration"),
    });
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let explicit_type = if parser.eat(TokenKind::Colon) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let assigned_value = if parser.eat(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(VarDeclStmt {
        span: Span {
            start: start_token.span.start,
            end: parser.last_end(),
        },
        kind,
        identifier,
        explicit_type,
        assigned_value,
    })
}

/// `{ stmt* }` with no trailing terminator, used for function and arrow
/// bodies.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    parser.nested(parse_block_body)
}

fn parse_block_body(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut body = vec![];
    while !matches!(
        parser.current_token_kind(),
        TokenKind::CloseCurly | TokenKind::EOF
    ) {
        body.push(parse_stmt(parser)?);
    }

    let end = parser.expect(TokenKind::CloseCurly)?.span.end;

    Ok(BlockStmt {
        body,
        span: Span { start, end },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let mut block = parse_block(parser)?;
    parser.skip_terminator();
    block.span.end = parser.last_end();

    Ok(Stmt::Block(block))
}

/// `if (cond) stmt [else stmt]`. A dangling `else` attaches to the
/// innermost `if` because the nested statement is parsed first.
pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    parser.expect(TokenKind::OpenParen)?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    let then_body = parse_stmt(parser)?;
    let else_body = if parser.eat(TokenKind::Else) {
        Some(Box::new(parse_stmt(parser)?))
    } else {
        None
    };

    Ok(Stmt::If(IfStmt {
        span: Span {
            start,
            end: parser.last_end(),
        },
        condition,
        then_body: Box::new(then_body),
        else_body,
    }))
}

/// `for ([init]; [cond]; [update]) stmt`
pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;
    parser.expect(TokenKind::OpenParen)?;

    let init = match parser.current_token_kind() {
        TokenKind::Let | TokenKind::Const | TokenKind::Var => {
            Some(ForInit::VarDecl(parse_var_decl(parser)?))
        }
        TokenKind::Semicolon => None,
        _ => Some(ForInit::Expr(parse_expr(parser, BindingPower::Default)?)),
    };
    parser.expect(TokenKind::Semicolon)?;

    let condition = if parser.current_token_kind() != TokenKind::Semicolon {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::Semicolon)?;

    let update = if parser.current_token_kind() != TokenKind::CloseParen {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };
    parser.expect(TokenKind::CloseParen)?;

    let body = parse_stmt(parser)?;

    Ok(Stmt::For(ForStmt {
        span: Span {
            start,
            end: parser.last_end(),
        },
        init,
        condition,
        update,
        body: Box::new(body),
    }))
}

/// `[async] function name(params)[: type] { ... }`
pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.get_position();
    let is_async = parser.eat(TokenKind::Async);

    let error = parser.unexpected(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe().to_string(),
        message: String::from("expected `function` after `async`"),
    });
    parser.expect_error(TokenKind::Function, Some(error))?;

    let error = parser.unexpected(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe().to_string(),
        message: String::from("expected function name"),
    });
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let parameters = parse_parameters(parser)?;

    let return_type = if parser.eat(TokenKind::Colon) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let body = parse_block(parser)?;
    parser.skip_terminator();

    Ok(Stmt::FnDecl(FnDeclStmt {
        span: Span {
            start,
            end: parser.last_end(),
        },
        is_async,
        identifier,
        parameters,
        return_type,
        body,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start;

    let ends_here = parser.current_token().is_one_of_many(&[
        TokenKind::Semicolon,
        TokenKind::CloseCurly,
        TokenKind::EOF,
    ]);
    let value = if ends_here {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };
    parser.skip_terminator();

    Ok(Stmt::Return(ReturnStmt {
        span: Span {
            start,
            end: parser.last_end(),
        },
        value,
    }))
}
