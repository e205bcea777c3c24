//! Evaluation module for the interpreter.
//!
//! This module contains the tree-walking evaluator that reduces a parsed
//! expression to an integer. It handles:
//!
//! - Environment-based identifier resolution with lexical shadowing
//! - Wrapping 32-bit signed subtraction
//! - The 0/1 boolean encoding used by `iszero` and `if`
//! - Scoped binding introduction via `let`

pub mod environment;
pub mod evaluator;
