//! Integration tests for the end-to-end pipeline.
//!
//! These tests verify that the complete pipeline works correctly from
//! source text through tokenization, parsing and evaluation.

use interpreter::errors::errors::{EvalError, ParseError};
use interpreter::evaluator::evaluator::eval_program;
use interpreter::lexer::lexer::tokenize;
use interpreter::lexer::tokens::TokenKind;
use interpreter::parser::parser::parse;

fn run(source: &str) -> Result<i32, EvalError> {
    let tokens = tokenize(source.to_string());
    let (root, errors) = parse(tokens);
    assert!(errors.is_empty(), "unexpected parse errors: {:?}", errors);
    eval_program(&root.expect("expected a root expression"))
}

#[test]
fn test_eval_assignment_example() {
    let source =
        "let x = 7 in let y = 2 in let y = let x = minus(x, 1) in minus(x, y) in minus(minus(x, 8), y)";
    assert_eq!(run(source), Ok(-5));
}

#[test]
fn test_eval_assignment_example_two() {
    let source =
        "let x = 11 in let y = 20 in if iszero(minus(x, 11)) then minus(y, 2) else minus(y, 4)";
    assert_eq!(run(source), Ok(18));

    let source =
        "let x = 10 in let y = 20 in if iszero(minus(x, 11)) then minus(y, 2) else minus(y, 4)";
    assert_eq!(run(source), Ok(16));
}

#[test]
fn test_eval_shadowing() {
    assert_eq!(run("let x = 33 in let x = 22 in x"), Ok(22));
}

#[test]
fn test_eval_simple_forms() {
    assert_eq!(run("7"), Ok(7));
    assert_eq!(run("minus(1, 3)"), Ok(-2));
    assert_eq!(run("iszero(0)"), Ok(1));
    assert_eq!(run("iszero(7)"), Ok(0));
    assert_eq!(run("if 1 then 22 else 33"), Ok(22));
    assert_eq!(run("if 2 then 22 else 33"), Ok(33));
}

#[test]
fn test_parse_error_reported_without_root() {
    let tokens = tokenize("let x 8 in y".to_string());
    let (root, errors) = parse(tokens);

    assert!(root.is_none());
    assert_eq!(
        errors,
        vec![ParseError::UnexpectedToken {
            expected: TokenKind::Assign,
            actual: TokenKind::Int,
        }]
    );
}

#[test]
fn test_undefined_variable_after_successful_parse() {
    let tokens = tokenize("minus(x, 2)".to_string());
    let (root, errors) = parse(tokens);

    assert!(errors.is_empty());
    let root = root.expect("expected a root expression");

    match eval_program(&root) {
        Err(EvalError::UndefinedVariable { name, .. }) => assert_eq!(name, "x"),
        other => panic!("expected UndefinedVariable, got {:?}", other),
    }
}

#[test]
fn test_parsed_tree_renders_concrete_syntax() {
    let source = "if iszero(minus(x, 11)) then minus(y, 2) else minus(y, 4)";
    let tokens = tokenize(source.to_string());
    let (root, errors) = parse(tokens);

    assert!(errors.is_empty());
    assert_eq!(root.expect("expected a root expression").to_string(), source);
}
