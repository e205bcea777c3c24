use std::fmt::Display;
use std::num::ParseIntError;

use thiserror::Error;

use crate::evaluator::environment::Environment;
use crate::lexer::tokens::TokenKind;

/// The syntactic role a required sub-expression fills inside its enclosing
/// production. Named in `MissingSubexpression` diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubexprRole {
    Value,
    In,
    Arg1,
    Arg2,
    Predicate,
    TrueBranch,
    FalseBranch,
}

impl Display for SubexprRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Errors detected while parsing the token stream.
///
/// These are accumulated into an ordered list rather than raised as control
/// flow: a failing production yields no node and short-circuits every
/// enclosing production, but only the deepest detection point on a parse
/// path records a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected next token to be `{expected}`, got `{actual}` instead")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },
    #[error("missing inner expression for {role}")]
    MissingSubexpression { role: SubexprRole },
    #[error("error parsing integer literal `{text}`: {cause}")]
    InvalidIntegerLiteral { text: String, cause: ParseIntError },
}

/// Errors raised while evaluating a parsed expression.
///
/// Identifier lookup failure is the only runtime error: subtraction wraps
/// rather than failing and the conditional always terminates in one branch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("could not find variable name `{name}` in environment {env}")]
    UndefinedVariable { name: String, env: Environment },
}
