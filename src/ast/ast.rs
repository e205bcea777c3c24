use std::fmt::Display;

/// The expression tree produced by the parser.
///
/// The variant set is fixed and closed, so both the parser dispatch and the
/// evaluator match on it exhaustively. Composite variants exclusively own
/// their children; nodes are built once by the parser and never mutated
/// afterwards. Evaluation state (the environment) is threaded through the
/// evaluator as a parameter and is never stored on a node, so the same tree
/// can be re-evaluated under any environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal, e.g. `42`. Numeric semantics are 32-bit signed.
    IntLiteral(i32),
    /// A variable reference, e.g. `x`.
    Identifier(String),
    /// `let <name> = <value> in <body>`. The binding is visible in `body`
    /// only; `value` is evaluated under the enclosing scope.
    Let {
        name: String,
        value: Box<Expr>,
        body: Box<Expr>,
    },
    /// `minus(<lhs>, <rhs>)`.
    Minus { lhs: Box<Expr>, rhs: Box<Expr> },
    /// `iszero(<operand>)`.
    IsZero(Box<Expr>),
    /// `if <predicate> then <then_branch> else <else_branch>`.
    If {
        predicate: Box<Expr>,
        then_branch: Box<Expr>,
        else_branch: Box<Expr>,
    },
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::IntLiteral(value) => write!(f, "{}", value),
            Expr::Identifier(name) => write!(f, "{}", name),
            Expr::Let { name, value, body } => {
                write!(f, "let {} = {} in {}", name, value, body)
            }
            Expr::Minus { lhs, rhs } => write!(f, "minus({}, {})", lhs, rhs),
            Expr::IsZero(operand) => write!(f, "iszero({})", operand),
            Expr::If {
                predicate,
                then_branch,
                else_branch,
            } => {
                write!(f, "if {} then {} else {}", predicate, then_branch, else_branch)
            }
        }
    }
}
