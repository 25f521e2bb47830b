use log::trace;

use crate::{
    ast::expressions::{
        BinaryExpr, CallExpr, Expr, ForExpr, IfExpr, NumberExpr, UnaryExpr, VarInExpr,
        VariableExpr,
    },
    errors::errors::SyntaxErrorKind,
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::NOT_AN_OPERATOR, parser::Parser};

/// Parses an expression.
pub(super) fn parse_expr(parser: &mut Parser) -> Option<Expr> {
    let lhs = parse_unary(parser)?;
    parse_binary(parser, lhs, 0)
}

/// Precedence climbing over the session's operator table.
///
/// Consumes operators binding at least as tightly as `min_precedence`.
/// When the operator after the right-hand side binds tighter than the
/// one just consumed, the right-hand side absorbs it first; ties stay
/// with the left-hand side, giving left associativity.
fn parse_binary(parser: &mut Parser, mut lhs: Expr, min_precedence: i32) -> Option<Expr> {
    loop {
        let op_precedence = next_precedence(parser);
        if op_precedence < min_precedence {
            return Some(lhs);
        }

        let op = parser.advance();
        trace!("binary operator '{}' binds at {}", op.value, op_precedence);
        let mut rhs = parse_unary(parser)?;

        if op_precedence < next_precedence(parser) {
            rhs = parse_binary(parser, rhs, op_precedence + 1)?;
        }

        let span = lhs.span().to(rhs.span());
        lhs = Expr::Binary(BinaryExpr {
            op: op.value,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
            span,
        });
    }
}

/// The binding power of the lookahead token, or the sentinel when it is
/// not an operator symbol with a binary entry.
fn next_precedence(parser: &mut Parser) -> i32 {
    if parser.current_token_kind() != TokenKind::Op {
        return NOT_AN_OPERATOR;
    }

    parser.precedence.lookup(&parser.current_token().value)
}

/// Parses a unary expression: any operator symbol prefixes the operand,
/// which is itself parsed at the unary level.
fn parse_unary(parser: &mut Parser) -> Option<Expr> {
    if parser.current_token_kind() != TokenKind::Op {
        return parse_primary(parser);
    }

    let op = parser.advance();
    let operand = parse_unary(parser)?;

    let span = Span {
        start: op.span.start,
        end: operand.span().end.clone(),
    };
    Some(Expr::Unary(UnaryExpr {
        op: op.value,
        operand: Box::new(operand),
        span,
    }))
}

/// Parses a primary expression.
fn parse_primary(parser: &mut Parser) -> Option<Expr> {
    match parser.current_token_kind() {
        TokenKind::If => {
            let if_start = parser.advance().span.start;
            let condition = parse_expr(parser)?;
            parser.consume(TokenKind::Then, SyntaxErrorKind::ExpectedThen)?;
            let then_branch = parse_expr(parser)?;
            parser.consume(TokenKind::Else, SyntaxErrorKind::ExpectedElse)?;
            let else_branch = parse_expr(parser)?;

            let span = Span {
                start: if_start,
                end: else_branch.span().end.clone(),
            };
            Some(Expr::If(IfExpr {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
                span,
            }))
        }

        TokenKind::For => {
            let for_start = parser.advance().span.start;
            let var_name = parser
                .consume(TokenKind::Identifier, SyntaxErrorKind::ExpectedVariableName)?
                .value;

            if !parser.current_token().is_op("=") {
                let span = parser.current_token().span.clone();
                parser.diagnostics.emit(SyntaxErrorKind::ExpectedEquals, span);
                return None;
            }
            parser.advance();

            let start = parse_expr(parser)?;
            parser.consume(TokenKind::Comma, SyntaxErrorKind::ExpectedComma)?;
            let end = parse_expr(parser)?;

            // The step is optional and defaults to a literal 1.
            let mut step = Expr::Number(NumberExpr {
                value: 1.0,
                span: parser.current_token().span.clone(),
            });
            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
                step = parse_expr(parser)?;
            }

            parser.consume(TokenKind::In, SyntaxErrorKind::ExpectedIn)?;
            let body = parse_expr(parser)?;

            let span = Span {
                start: for_start,
                end: body.span().end.clone(),
            };
            Some(Expr::For(ForExpr {
                var_name,
                start: Box::new(start),
                end: Box::new(end),
                step: Box::new(step),
                body: Box::new(body),
                span,
            }))
        }

        TokenKind::Var => {
            let var_start = parser.advance().span.start;
            let name = parser
                .consume(TokenKind::Identifier, SyntaxErrorKind::ExpectedVariableName)?
                .value;

            if !parser.current_token().is_op("=") {
                let span = parser.current_token().span.clone();
                parser.diagnostics.emit(SyntaxErrorKind::ExpectedEquals, span);
                return None;
            }
            parser.advance();

            let value = parse_expr(parser)?;
            parser.consume(TokenKind::In, SyntaxErrorKind::ExpectedIn)?;
            let body = parse_expr(parser)?;

            let span = Span {
                start: var_start,
                end: body.span().end.clone(),
            };
            Some(Expr::VarIn(VarInExpr {
                name,
                value: Box::new(value),
                body: Box::new(body),
                span,
            }))
        }

        TokenKind::Identifier => parse_identifier(parser),

        TokenKind::Number => {
            let span = parser.current_token().span.clone();
            let value = parse_number_value(parser)?;
            Some(Expr::Number(NumberExpr { value, span }))
        }

        TokenKind::LeftParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.consume(TokenKind::RightParen, SyntaxErrorKind::ExpectedRightParen)?;
            Some(expr)
        }

        _ => {
            let span = parser.current_token().span.clone();
            parser
                .diagnostics
                .emit(SyntaxErrorKind::ExpectedExpression, span);
            None
        }
    }
}

/// Parses a variable reference or, when a parenthesis follows the name
/// immediately, a call with a comma-separated argument list.
fn parse_identifier(parser: &mut Parser) -> Option<Expr> {
    let token = parser.advance();

    if parser.current_token_kind() != TokenKind::LeftParen {
        return Some(Expr::Variable(VariableExpr {
            name: token.value,
            span: token.span,
        }));
    }

    parser.advance();
    let args = parser.parse_list(parse_expr, TokenKind::RightParen);
    let end = parser
        .consume(TokenKind::RightParen, SyntaxErrorKind::ExpectedRightParen)?
        .span
        .end;

    Some(Expr::Call(CallExpr {
        callee: token.value,
        args,
        span: Span {
            start: token.span.start,
            end,
        },
    }))
}

/// Consumes a number token and parses its value.
pub(super) fn parse_number_value(parser: &mut Parser) -> Option<f64> {
    let token = parser.advance();

    match token.value.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            parser.diagnostics.emit(SyntaxErrorKind::InvalidNumber, token.span);
            None
        }
    }
}
