use crate::ast::ast::Expr;
use crate::errors::errors::EvalError;

use super::environment::Environment;

/// Evaluates a root expression under an empty initial environment.
///
/// This is the entry point callers use after parsing succeeds.
pub fn eval_program(root: &Expr) -> Result<i32, EvalError> {
    eval_expr(root, &Environment::empty())
}

/// Evaluates an expression under the given environment.
///
/// This is a pure function of the node and the environment: the tree is
/// never mutated and the caller's environment is never extended in place.
/// The first failing sub-evaluation aborts the whole containing node, so
/// `minus` does not touch its right argument once the left has failed.
///
/// Numeric semantics are 32-bit signed with wrapping subtraction. Booleans
/// are encoded as the integers 0 and 1: `iszero` yields 1 or 0, and `if`
/// takes the then-branch only when the predicate is exactly 1. Any other
/// predicate value, including negatives and values above 1, selects the
/// else-branch.
pub fn eval_expr(expr: &Expr, env: &Environment) -> Result<i32, EvalError> {
    match expr {
        Expr::IntLiteral(value) => Ok(*value),
        Expr::Identifier(name) => env.lookup(name).ok_or_else(|| EvalError::UndefinedVariable {
            name: name.clone(),
            env: env.clone(),
        }),
        Expr::Minus { lhs, rhs } => {
            let lhs_value = eval_expr(lhs, env)?;
            let rhs_value = eval_expr(rhs, env)?;
            Ok(lhs_value.wrapping_sub(rhs_value))
        }
        Expr::IsZero(operand) => {
            let value = eval_expr(operand, env)?;
            Ok(if value == 0 { 1 } else { 0 })
        }
        Expr::If {
            predicate,
            then_branch,
            else_branch,
        } => {
            if eval_expr(predicate, env)? == 1 {
                eval_expr(then_branch, env)
            } else {
                eval_expr(else_branch, env)
            }
        }
        Expr::Let { name, value, body } => {
            // The bound name is not in scope for its own value expression.
            let bound_value = eval_expr(value, env)?;
            let extended = env.extended(name.clone(), bound_value);
            eval_expr(body, &extended)
        }
    }
}
