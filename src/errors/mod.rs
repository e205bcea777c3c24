//! Error types for the interpreter.
//!
//! This module defines the error types used by the parsing and evaluation
//! phases. It includes:
//!
//! - Parse-time error variants, accumulated by the parser into an ordered list
//! - The evaluation-time error raised on identifier lookup failure
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
