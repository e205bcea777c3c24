//! Lexical analysis module for the interpreter.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers and integer literals
//! - Whitespace handling
//! - Unrecognised characters (emitted as `Illegal` tokens)

pub mod lexer;
pub mod tokens;
