//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a single expression tree. It handles:
//!
//! - Top-level dispatch from the current token to exactly one production
//! - One-token lookahead with a synthesized end-of-input token
//! - Structured error accumulation without exceptions
//!
//! Each grammar rule lives in its own production function; required fixed
//! tokens are enforced with an expect-and-advance primitive and a failing
//! production short-circuits every enclosing one.

pub mod expr;
pub mod parser;
