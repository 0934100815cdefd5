use crate::{
    ast::Operator,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Applies `op` to two integer operands.
///
/// Division truncates toward zero, so `7 / 2` is `3` and `-7 / 2` is `-3`.
/// Every operation is checked; nothing wraps.
///
/// # Parameters
/// - `op`: The operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Divide` and `right` is zero.
/// - `Overflow` if the result does not fit into an `i64`, including
///   `i64::MIN / -1`.
/// - `UnknownOperator` for [`Operator::NoOp`].
///
/// # Example
/// ```
/// use exprtree::{
///     ast::Operator,
///     error::RuntimeError,
///     interpreter::evaluator::arithmetic::apply,
/// };
///
/// assert_eq!(apply(Operator::Divide, -7, 2), Ok(-3));
/// assert_eq!(apply(Operator::Divide, 1, 0), Err(RuntimeError::DivisionByZero { dividend: 1 }));
/// assert!(apply(Operator::Times, i64::MAX, 2).is_err());
/// ```
pub fn apply(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let overflow = || RuntimeError::Overflow { operator: op,
                                               left,
                                               right };

    match op {
        Operator::Plus => left.checked_add(right).ok_or_else(overflow),
        Operator::Minus => left.checked_sub(right).ok_or_else(overflow),
        Operator::Times => left.checked_mul(right).ok_or_else(overflow),
        Operator::Divide => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            left.checked_div(right).ok_or_else(overflow)
        },
        Operator::NoOp => Err(RuntimeError::UnknownOperator),
    }
}
