//! Type annotation and parameter list parsing.
//!
//! A type is either a primitive name or a generic reference such as
//! `Promise<number>`, recognised by an identifier immediately followed by
//! `<`. Type arguments nest.

use log::trace;

use crate::{
    ast::{
        statements::Parameter,
        types::{GenericType, Primitive, PrimitiveType, TypeAnnotation},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{expr::parse_expr, lookups::BindingPower, parser::Parser};

/// Parses the type that follows a `:`.
pub fn parse_type_annotation(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    parser.nested(parse_any_type)
}

fn parse_any_type(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    trace!("parse_type_annotation at {}", parser.get_position());

    if parser.current_token_kind() != TokenKind::Identifier {
        return Err(parser.unexpected(ErrorImpl::UnknownType {
            type_: parser.current_token().describe().to_string(),
        }));
    }

    if parser.peek_kind(1) == TokenKind::Less {
        return parse_generic_type(parser);
    }

    let token = parser.current_token().clone();
    let primitive = Primitive::from_name(&token.value).ok_or_else(|| {
        parser.unexpected(ErrorImpl::UnknownType {
            type_: token.value.clone(),
        })
    })?;
    parser.advance();

    Ok(TypeAnnotation::Primitive(PrimitiveType {
        primitive,
        span: token.span,
    }))
}

fn parse_generic_type(parser: &mut Parser) -> Result<TypeAnnotation, Error> {
    let name_token = parser.advance().clone();
    parser.expect(TokenKind::Less)?;

    if parser.current_token_kind() == TokenKind::Greater {
        return Err(parser.unexpected(ErrorImpl::EmptyTypeArguments {
            type_: name_token.value,
        }));
    }

    let mut type_arguments = vec![];
    loop {
        type_arguments.push(parse_type_annotation(parser)?);

        if !parser.eat(TokenKind::Comma) {
            break;
        }
        if parser.current_token_kind() == TokenKind::Greater {
            return Err(parser.unexpected(ErrorImpl::TrailingComma));
        }
    }

    // `Promise<number>= 1` lexes its closer as `>=`
    parser.split_greater_equals();
    let end = parser.expect(TokenKind::Greater)?.span.end;

    Ok(TypeAnnotation::Generic(GenericType {
        name: name_token.value,
        type_arguments,
        span: Span {
            start: name_token.span.start,
            end,
        },
    }))
}

/// Parses `( [param {, param}] )`. A trailing comma is rejected.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = vec![];
    if parser.eat(TokenKind::CloseParen) {
        return Ok(parameters);
    }

    loop {
        parameters.push(parse_parameter(parser)?);

        if !parser.eat(TokenKind::Comma) {
            break;
        }
        if parser.current_token_kind() == TokenKind::CloseParen {
            return Err(parser.unexpected(ErrorImpl::TrailingComma));
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(parameters)
}

/// `[...]name[?][: type][= default]`
fn parse_parameter(parser: &mut Parser) -> Result<Parameter, Error> {
    let start = parser.get_position();
    let is_rest = parser.eat(TokenKind::Ellipsis);

    let error = parser.unexpected(ErrorImpl::UnexpectedTokenDetailed {
        token: parser.current_token().describe().to_string(),
        message: String::from("expected parameter name"),
    });
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    let is_optional = parser.eat(TokenKind::Question);

    let explicit_type = if parser.eat(TokenKind::Colon) {
        Some(parse_type_annotation(parser)?)
    } else {
        None
    };

    let default_value = if parser.eat(TokenKind::Assignment) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Parameter {
        span: Span {
            start,
            end: parser.last_end(),
        },
        name,
        is_rest,
        is_optional,
        explicit_type,
        default_value,
    })
}
