use crate::binder::{BoundBinaryOperatorKind, BoundExpression, BoundUnaryOperatorKind};
use crate::error::{RuntimeError, Span};

/// Walks a bound tree and computes its value. Arithmetic wraps on overflow;
/// only a zero divisor is an error.
pub fn evaluate(expr: &BoundExpression) -> Result<i32, RuntimeError> {
    match expr {
        BoundExpression::Literal { value, .. } => Ok(*value),
        BoundExpression::Unary {
            operator, operand, ..
        } => {
            let operand_val = evaluate(operand)?;
            Ok(evaluate_unary_op(*operator, operand_val))
        }
        BoundExpression::Binary {
            left,
            operator,
            right,
            span,
            ..
        } => {
            let left_val = evaluate(left)?;
            let right_val = evaluate(right)?;
            evaluate_binary_op(*operator, left_val, right_val, *span)
        }
    }
}

fn evaluate_unary_op(operator: BoundUnaryOperatorKind, operand: i32) -> i32 {
    match operator {
        BoundUnaryOperatorKind::Identity => operand,
        BoundUnaryOperatorKind::Negation => operand.wrapping_neg(),
    }
}

fn evaluate_binary_op(
    operator: BoundBinaryOperatorKind,
    left: i32,
    right: i32,
    span: Span,
) -> Result<i32, RuntimeError> {
    match operator {
        BoundBinaryOperatorKind::Addition => Ok(left.wrapping_add(right)),
        BoundBinaryOperatorKind::Subtraction => Ok(left.wrapping_sub(right)),
        BoundBinaryOperatorKind::Multiplication => Ok(left.wrapping_mul(right)),
        BoundBinaryOperatorKind::Division => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { span });
            }
            Ok(left.wrapping_div(right))
        }
    }
}
