use crate::ast::{BinaryOp, Expr, ExprKind, UnaryOp};
use crate::error::EvalError;

/// Computes the integer value of a validated expression tree.
///
/// The root must be valid; validity propagation guarantees every descendant
/// is then valid too. Handing an invalid tree to the evaluator is a contract
/// violation by the caller, not a recoverable condition.
///
/// Division truncates toward zero. All arithmetic is checked: division by
/// zero and `i64` overflow (including `i64::MIN / -1` and negating
/// `i64::MIN`) come back as errors instead of wrapping or trapping.
pub fn eval(expr: &Expr) -> Result<i64, EvalError> {
    assert!(expr.valid, "cannot evaluate an invalid expression");
    eval_expr(expr)
}

fn eval_expr(expr: &Expr) -> Result<i64, EvalError> {
    match &expr.kind {
        ExprKind::Number { value } => Ok(*value),
        ExprKind::Unary { op, operand } => eval_unary(*op, operand),
        ExprKind::Binary { op, lhs, rhs } => eval_binary(*op, lhs, rhs),
        ExprKind::Invalid => unreachable!("invalid node inside a validated tree"),
    }
}

fn eval_unary(op: UnaryOp, operand: &Expr) -> Result<i64, EvalError> {
    let value = eval_expr(operand)?;

    match op {
        UnaryOp::Plus => Ok(value),
        UnaryOp::Neg => value.checked_neg().ok_or(EvalError::Overflow),
    }
}

fn eval_binary(op: BinaryOp, lhs: &Expr, rhs: &Expr) -> Result<i64, EvalError> {
    let left = eval_expr(lhs)?;
    let right = eval_expr(rhs)?;

    match op {
        BinaryOp::Add => left.checked_add(right).ok_or(EvalError::Overflow),
        BinaryOp::Sub => left.checked_sub(right).ok_or(EvalError::Overflow),
        BinaryOp::Mul => left.checked_mul(right).ok_or(EvalError::Overflow),
        BinaryOp::Div => {
            if right == 0 {
                Err(EvalError::DivisionByZero)
            } else {
                left.checked_div(right).ok_or(EvalError::Overflow)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_truncates_toward_zero() {
        let expr = Expr::binary(
            BinaryOp::Div,
            Expr::unary(UnaryOp::Neg, Expr::number(7)),
            Expr::number(2),
        );
        assert_eq!(eval(&expr), Ok(-3));
    }

    #[test]
    fn division_by_zero_is_reported() {
        let expr = Expr::binary(BinaryOp::Div, Expr::number(1), Expr::number(0));
        assert_eq!(eval(&expr), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_is_reported() {
        let add = Expr::binary(BinaryOp::Add, Expr::number(i64::MAX), Expr::number(1));
        assert_eq!(eval(&add), Err(EvalError::Overflow));

        let neg = Expr::unary(UnaryOp::Neg, Expr::number(i64::MIN));
        assert_eq!(eval(&neg), Err(EvalError::Overflow));

        let div = Expr::binary(
            BinaryOp::Div,
            Expr::number(i64::MIN),
            Expr::unary(UnaryOp::Neg, Expr::number(1)),
        );
        assert_eq!(eval(&div), Err(EvalError::Overflow));
    }

    #[test]
    #[should_panic(expected = "cannot evaluate an invalid expression")]
    fn evaluating_an_invalid_tree_is_a_contract_violation() {
        let _ = eval(&Expr::invalid());
    }
}
