use log::debug;

use crate::{
    ast::ast::{Function, Prototype, ANONYMOUS_FUNCTION},
    errors::errors::SyntaxErrorKind,
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    expr::{parse_expr, parse_number_value},
    lookups::DEFAULT_PRECEDENCE,
    parser::Parser,
};

/// Parses a function definition: `def <prototype> <body>`.
///
/// The body is parsed even when the prototype was malformed, so errors
/// in both are reported from a single call.
pub(super) fn parse_definition(parser: &mut Parser) -> Option<Function> {
    let start = parser.advance().span.start;
    let prototype = parse_prototype(parser);
    let body = parse_expr(parser);

    let (prototype, body) = (prototype?, body?);
    let span = Span {
        start,
        end: body.span().end.clone(),
    };

    Some(Function {
        prototype,
        body,
        span,
    })
}

/// Parses an externally-declared prototype: `extern <prototype>`.
pub(super) fn parse_extern(parser: &mut Parser) -> Option<Prototype> {
    parser.advance();
    parse_prototype(parser)
}

/// Parses a bare top-level expression, wrapped in a synthetic
/// zero-parameter function so the tree shape stays uniform downstream.
pub(super) fn parse_top_level_expr(parser: &mut Parser) -> Option<Function> {
    let body = parse_expr(parser)?;
    let span = body.span().clone();

    Some(Function {
        prototype: Prototype {
            name: String::from(ANONYMOUS_FUNCTION),
            params: vec![],
            is_op: false,
            precedence: 40,
            span: span.clone(),
        },
        body,
        span,
    })
}

/// Parses a function prototype.
///
/// Three shapes: a plain `name(params...)`, a binary operator
/// declaration `binary<op> [precedence] (a, b)`, and a unary operator
/// declaration `unary<op> (a)`. A binary declaration registers the
/// operator's precedence in the session table immediately, before the
/// body is parsed.
pub(super) fn parse_prototype(parser: &mut Parser) -> Option<Prototype> {
    let start = parser.current_token().span.clone();
    let mut precedence = DEFAULT_PRECEDENCE;

    let (name, operands) = match parser.current_token_kind() {
        TokenKind::Identifier => (parser.advance().value, 0),

        TokenKind::Binary => {
            parser.advance();
            let op = parser.consume(TokenKind::Op, SyntaxErrorKind::ExpectedBinaryOperator)?;

            if parser.current_token_kind() == TokenKind::Number {
                precedence = parse_number_value(parser)? as i32;
            }

            parser.precedence.register(&op.value, precedence);
            debug!(
                "registered binary operator '{}' at precedence {}",
                op.value, precedence
            );

            (format!("binary{}", op.value), 2)
        }

        TokenKind::Unary => {
            parser.advance();
            let op = parser.consume(TokenKind::Op, SyntaxErrorKind::ExpectedUnaryOperator)?;
            (format!("unary{}", op.value), 1)
        }

        _ => {
            let span = parser.current_token().span.clone();
            parser.diagnostics.emit(SyntaxErrorKind::ExpectedDeclaration, span);
            return None;
        }
    };

    let param_start = parser
        .consume(TokenKind::LeftParen, SyntaxErrorKind::ExpectedLeftParen)?
        .span
        .start;
    let params = parser.parse_list(parse_parameter, TokenKind::RightParen);

    let end = match parser.consume(TokenKind::RightParen, SyntaxErrorKind::ExpectedRightParen) {
        Some(token) => token.span.end,
        None => {
            // Skip to the closing paren so the body can still be parsed.
            parser.synchronize(&[TokenKind::RightParen]);
            if parser.current_token_kind() == TokenKind::RightParen {
                parser.advance().span.end
            } else {
                return None;
            }
        }
    };

    if operands != 0 && params.len() != operands {
        let span = Span {
            start: param_start,
            end,
        };
        parser
            .diagnostics
            .emit(SyntaxErrorKind::InvalidOperandCount, span);
        return None;
    }

    Some(Prototype {
        name,
        params,
        is_op: operands != 0,
        precedence,
        span: Span {
            start: start.start,
            end,
        },
    })
}

/// Parses a function parameter name.
fn parse_parameter(parser: &mut Parser) -> Option<String> {
    Some(
        parser
            .consume(TokenKind::Identifier, SyntaxErrorKind::ExpectedParameterName)?
            .value,
    )
}
