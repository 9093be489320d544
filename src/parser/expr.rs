use log::trace;

use crate::{
    ast::{
        ast::Expr,
        expressions::{
            ArrowBody, ArrowFunctionExpr, AssignmentExpr, BinaryExpr, BinaryOperator, NumberExpr,
            SymbolExpr, UpdateExpr, UpdateOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::BindingPower,
    parser::Parser,
    stmt::parse_block,
    types::{parse_parameters, parse_type_annotation},
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    parser.nested(|parser| parse_expr_above(parser, bp))
}

fn parse_expr_above(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    trace!("parse_expr {:?} at {}", bp, parser.get_position());

    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(parser.unexpected(ErrorImpl::UnexpectedToken {
                token: parser.current_token().describe().to_string(),
            }))
        }
    };

    let mut left = nud(parser)?;

    // While the next operator binds tighter than the floor, keep extending lhs
    loop {
        let token_kind = parser.current_token_kind();
        let operator_bp = match parser.get_bp_lookup().get(&token_kind) {
            Some(operator_bp) if *operator_bp > bp => *operator_bp,
            _ => break,
        };
        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => break,
        };

        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number(radix) => {
            let token = parser.advance();
            Ok(Expr::Number(NumberExpr {
                raw: token.value.clone(),
                radix,
                span: token.span,
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance();
            Ok(Expr::Symbol(SymbolExpr {
                value: token.value.clone(),
                span: token.span,
            }))
        }
        _ => Err(parser.unexpected(ErrorImpl::UnexpectedToken {
            token: parser.current_token().describe().to_string(),
        })),
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    // Left associative: the right operand stops at operators of equal power
    binary_expr_with_floor(parser, left, bp)
}

pub fn parse_exponent_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    // Right associative: another `**` may continue the right operand
    binary_expr_with_floor(parser, left, BindingPower::Multiplicative)
}

fn binary_expr_with_floor(parser: &mut Parser, left: Expr, floor: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();
    let operator = BinaryOperator::from_token(operator_token.kind).ok_or_else(|| {
        Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value.clone(),
            },
            operator_token.span.start,
        )
    })?;

    let right = parse_expr(parser, floor)?;

    Ok(Expr::Binary(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

fn update_operator(parser: &Parser) -> Result<UpdateOperator, Error> {
    UpdateOperator::from_token(parser.current_token_kind()).ok_or_else(|| {
        parser.unexpected(ErrorImpl::UnexpectedToken {
            token: parser.current_token().describe().to_string(),
        })
    })
}

/// `++x` / `--x`. The operand is parsed above every binary operator and
/// must reduce to a plain identifier.
pub fn parse_prefix_update_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = update_operator(parser)?;
    let operator_token = parser.advance().clone();

    let argument_start = parser.get_position();
    let argument = parse_expr(parser, BindingPower::Update)?;
    if argument.as_symbol().is_none() {
        return Err(Error::new(ErrorImpl::InvalidUpdateTarget, argument_start));
    }

    Ok(Expr::Update(UpdateExpr {
        span: Span {
            start: operator_token.span.start,
            end: argument.get_span().end,
        },
        argument: Box::new(argument),
        operator,
        is_prefix: true,
    }))
}

/// `x++` / `x--`. Chains such as `i++++` fail because the inner update is
/// not an identifier.
pub fn parse_postfix_update_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let operator = update_operator(parser)?;
    if left.as_symbol().is_none() {
        return Err(parser.unexpected(ErrorImpl::InvalidUpdateTarget));
    }

    let operator_token = parser.advance().clone();

    Ok(Expr::Update(UpdateExpr {
        span: Span {
            start: left.get_span().start,
            end: operator_token.span.end,
        },
        argument: Box::new(left),
        operator,
        is_prefix: false,
    }))
}

pub fn parse_assignment_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let assignee = match left {
        Expr::Symbol(symbol) => symbol,
        other => {
            return Err(Error::new(
                ErrorImpl::InvalidAssignmentTarget,
                other.get_span().start,
            ))
        }
    };

    parser.advance();
    // Right associative: `a = b = c` assigns `b = c` to `a`
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: Span {
            start: assignee.span.start,
            end: value.get_span().end,
        },
        uses_using: false,
        assignee,
        value: Box::new(value),
    }))
}

/// `using name = value`
pub fn parse_using_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.advance().span.start;

    let error = parser.unexpected(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe().to_string(),
        message: String::from("expected identifier after `using`"),
    });
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Assignment(AssignmentExpr {
        span: Span {
            start,
            end: value.get_span().end,
        },
        uses_using: true,
        assignee: SymbolExpr {
            value: name.value,
            span: name.span,
        },
        value: Box::new(value),
    }))
}

/// `(` either opens an arrow function or groups an expression. Grouping
/// leaves no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.is_arrow_function_ahead() {
        return parse_arrow_function(parser);
    }

    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_arrow_function(parser: &mut Parser) -> Result<Expr, Error> {
    let start = parser.get_position();
    let parameters = parse_parameters(parser)?;

    let return_type = if parser.eat(TokenKind::Colon) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::Arrow)?;

    let body = if parser.current_token_kind() == TokenKind::OpenCurly {
        ArrowBody::Block(parse_block(parser)?)
    } else {
        ArrowBody::Expr(Box::new(parse_expr(parser, BindingPower::Default)?))
    };

    Ok(Expr::ArrowFunction(ArrowFunctionExpr {
        span: Span {
            start,
            end: parser.last_end(),
        },
        parameters,
        return_type,
        body,
    }))
}
