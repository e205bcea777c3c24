use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("in", TokenKind::In);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("minus", TokenKind::Minus);
        map.insert("iszero", TokenKind::IsZero);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    Identifier,
    Int,

    // Reserved
    Let,
    In,
    If,
    Then,
    Else,
    IsZero,
    Minus,

    Assign,
    Comma,
    OpenParen,
    CloseParen,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Keyword and punctuation kinds render as their source text so
        // diagnostics read the way the program was written.
        let text = match self {
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Int => "int",
            TokenKind::Let => "let",
            TokenKind::In => "in",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::IsZero => "iszero",
            TokenKind::Minus => "minus",
            TokenKind::Assign => "=",
            TokenKind::Comma => ",",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
        };
        write!(f, "{}", text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Int | TokenKind::Illegal => {
                write!(f, "{} ({})", self.kind, self.text)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}
