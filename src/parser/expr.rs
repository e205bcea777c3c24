use crate::{
    ast::ast::Expr,
    errors::errors::{ParseError, SubexprRole},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Top-level production dispatch.
///
/// The current token's kind selects exactly one production. Any other
/// leading token yields no node and records no error here; callers treat a
/// node-less result as the failure signal.
pub fn parse_expr(parser: &mut Parser) -> Option<Expr> {
    match parser.current_token_kind() {
        TokenKind::Let => parse_let_expr(parser),
        TokenKind::Identifier => Some(parse_identifier(parser)),
        TokenKind::Int => parse_int_literal(parser),
        TokenKind::Minus => parse_minus_expr(parser),
        TokenKind::IsZero => parse_is_zero_expr(parser),
        TokenKind::If => parse_if_expr(parser),
        _ => None,
    }
}

/// Advances past the current token and parses the required sub-expression
/// filling `role`. Records a `MissingSubexpression` error naming the role
/// when the recursive parse yields no node.
fn parse_subexpr(parser: &mut Parser, role: SubexprRole) -> Option<Expr> {
    parser.advance();
    let expr = parse_expr(parser);
    if expr.is_none() {
        parser.push_error(ParseError::MissingSubexpression { role });
    }
    expr
}

/// `let IDENT = expr in expr`
fn parse_let_expr(parser: &mut Parser) -> Option<Expr> {
    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = parser.current_token().text.clone();

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    let value = parse_subexpr(parser, SubexprRole::Value)?;

    if !parser.expect_peek(TokenKind::In) {
        return None;
    }
    let body = parse_subexpr(parser, SubexprRole::In)?;

    Some(Expr::Let {
        name,
        value: Box::new(value),
        body: Box::new(body),
    })
}

/// `minus ( expr , expr )`
fn parse_minus_expr(parser: &mut Parser) -> Option<Expr> {
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let lhs = parse_subexpr(parser, SubexprRole::Arg1)?;

    if !parser.expect_peek(TokenKind::Comma) {
        return None;
    }
    let rhs = parse_subexpr(parser, SubexprRole::Arg2)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(Expr::Minus {
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

/// `iszero ( expr )`
fn parse_is_zero_expr(parser: &mut Parser) -> Option<Expr> {
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let operand = parse_subexpr(parser, SubexprRole::Arg1)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(Expr::IsZero(Box::new(operand)))
}

/// `if expr then expr else expr`
fn parse_if_expr(parser: &mut Parser) -> Option<Expr> {
    let predicate = parse_subexpr(parser, SubexprRole::Predicate)?;

    if !parser.expect_peek(TokenKind::Then) {
        return None;
    }
    let then_branch = parse_subexpr(parser, SubexprRole::TrueBranch)?;

    if !parser.expect_peek(TokenKind::Else) {
        return None;
    }
    let else_branch = parse_subexpr(parser, SubexprRole::FalseBranch)?;

    Some(Expr::If {
        predicate: Box::new(predicate),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

fn parse_identifier(parser: &mut Parser) -> Expr {
    Expr::Identifier(parser.current_token().text.clone())
}

/// Converts the current token's text to an `i32`. A token whose text does
/// not fit (only possible if the token source mis-tags it, or the literal
/// exceeds the 32-bit range) records an `InvalidIntegerLiteral` error.
fn parse_int_literal(parser: &mut Parser) -> Option<Expr> {
    let text = parser.current_token().text.clone();
    match text.parse::<i32>() {
        Ok(value) => Some(Expr::IntLiteral(value)),
        Err(cause) => {
            parser.push_error(ParseError::InvalidIntegerLiteral { text, cause });
            None
        }
    }
}
