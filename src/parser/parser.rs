use crate::{
    ast::ast::Expr,
    errors::errors::ParseError,
    lexer::tokens::{Token, TokenKind},
};

use super::expr::parse_expr;

/// The main parser structure that maintains parsing state.
///
/// This struct holds the token stream, the current-token cursor and the
/// ordered list of accumulated errors. A dedicated end-of-input token is
/// synthesized once the cursor runs past the supplied sequence, so the
/// one-token lookahead is always well-defined.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Token returned for any position past the end of the stream
    eof: Token,
    /// Errors accumulated while parsing, in detection order
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new Parser instance over the given token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens,
            pos: 0,
            eof: Token {
                kind: TokenKind::Eof,
                text: String::new(),
            },
            errors: vec![],
        }
    }

    fn token_at(&self, pos: usize) -> &Token {
        self.tokens.get(pos).unwrap_or(&self.eof)
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the lookahead token without advancing.
    pub fn peek_token(&self) -> &Token {
        self.token_at(self.pos + 1)
    }

    /// Returns the kind of the lookahead token.
    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token().kind
    }

    /// Advances the cursor to the next token.
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// The expect-and-advance primitive used by every production.
    ///
    /// If the lookahead token has the expected kind, the cursor advances
    /// past it and the call succeeds. Otherwise an `UnexpectedToken` error
    /// is appended and the call fails; the caller is expected to abandon
    /// its production without recording a second message.
    pub fn expect_peek(&mut self, expected: TokenKind) -> bool {
        if self.peek_token_kind() == expected {
            self.advance();
            true
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected,
                actual: self.peek_token_kind(),
            });
            false
        }
    }

    /// Appends an error to the accumulated list.
    pub fn push_error(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    /// Returns the errors accumulated so far, in detection order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

/// Parses a token stream into a single root expression.
///
/// Returns the root node (if one could be built) together with the ordered
/// list of accumulated errors; callers must check the error list
/// independently of node presence. A non-empty list always means no usable
/// tree was produced for the failing path.
///
/// Known gap, kept for compatibility with the reference behaviour: a stream
/// whose first token maps to no production (e.g. a stray `then` or `)`)
/// yields `(None, [])` with no error recorded. Tokens after a complete root
/// expression are ignored.
pub fn parse(tokens: Vec<Token>) -> (Option<Expr>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let root = parse_expr(&mut parser);
    (root, parser.errors)
}
