use crate::{ast::BinaryOperator, error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Calculates the result of a binary operator.
///
/// Addition, subtraction and multiplication are plain `f64` arithmetic.
/// Division reports [`RuntimeError::DivisionByZero`] when the right operand
/// compares equal to zero; it never returns a silent zero or infinity.
///
/// Modulo is computed by repeated subtraction of the right operand until the
/// remainder is smaller than it, not by a library remainder. The right
/// operand must be greater than zero; the loop does not terminate otherwise.
/// The cost is proportional to the quotient magnitude.
///
/// The bitwise operators truncate both operands to integers, apply the
/// operation, and return the result as an `f64`.
///
/// # Parameters
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `op`: The operator to apply.
///
/// # Returns
/// The numeric result of the operation.
///
/// # Errors
/// [`RuntimeError::DivisionByZero`] for division by zero.
///
/// # Example
/// ```
/// use numeval::{ast::BinaryOperator, interpreter::evaluator::binary::calculate_operator};
///
/// assert_eq!(calculate_operator(1.0, 2.0, BinaryOperator::Add).unwrap(), 3.0);
/// assert_eq!(calculate_operator(7.0, 3.0, BinaryOperator::Mod).unwrap(), 1.0);
/// assert!(calculate_operator(1.0, 0.0, BinaryOperator::Div).is_err());
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_operator(left: f64, right: f64, op: BinaryOperator) -> EvalResult<f64> {
    let result = match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left / right
        },
        BinaryOperator::Mod => {
            let mut remainder = left;
            while remainder >= right {
                remainder -= right;
            }
            remainder
        },
        BinaryOperator::Or => ((left as i64) | (right as i64)) as f64,
        BinaryOperator::Xor => ((left as i64) ^ (right as i64)) as f64,
        BinaryOperator::And => ((left as i64) & (right as i64)) as f64,
    };

    Ok(result)
}
