//! Unit tests for error handling.
//!
//! This module contains tests for error construction and display formatting.

use crate::errors::errors::{EvalError, ParseError, SubexprRole};
use crate::evaluator::environment::{Binding, Environment};
use crate::lexer::tokens::TokenKind;

#[test]
fn test_unexpected_token_display() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::Assign,
        actual: TokenKind::Int,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be `=`, got `int` instead"
    );
}

#[test]
fn test_unexpected_token_display_keyword() {
    let error = ParseError::UnexpectedToken {
        expected: TokenKind::In,
        actual: TokenKind::Eof,
    };

    assert_eq!(
        error.to_string(),
        "expected next token to be `in`, got `end of input` instead"
    );
}

#[test]
fn test_missing_subexpression_display() {
    let error = ParseError::MissingSubexpression {
        role: SubexprRole::TrueBranch,
    };

    assert_eq!(error.to_string(), "missing inner expression for TrueBranch");
}

#[test]
fn test_invalid_integer_literal_display() {
    let cause = "9999999999".parse::<i32>().unwrap_err();
    let error = ParseError::InvalidIntegerLiteral {
        text: "9999999999".to_string(),
        cause,
    };

    assert!(error
        .to_string()
        .starts_with("error parsing integer literal `9999999999`:"));
}

#[test]
fn test_undefined_variable_display() {
    let error = EvalError::UndefinedVariable {
        name: "x".to_string(),
        env: Environment::from_bindings(vec![Binding {
            name: "y".to_string(),
            value: 2,
        }]),
    };

    assert_eq!(
        error.to_string(),
        "could not find variable name `x` in environment [y = 2]"
    );
}

#[test]
fn test_undefined_variable_display_empty_env() {
    let error = EvalError::UndefinedVariable {
        name: "test".to_string(),
        env: Environment::empty(),
    };

    assert_eq!(
        error.to_string(),
        "could not find variable name `test` in environment []"
    );
}

#[test]
fn test_token_kind_surface_forms() {
    assert_eq!(TokenKind::Assign.to_string(), "=");
    assert_eq!(TokenKind::Comma.to_string(), ",");
    assert_eq!(TokenKind::OpenParen.to_string(), "(");
    assert_eq!(TokenKind::CloseParen.to_string(), ")");
    assert_eq!(TokenKind::Let.to_string(), "let");
    assert_eq!(TokenKind::IsZero.to_string(), "iszero");
}
