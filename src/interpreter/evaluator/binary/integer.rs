use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Object},
};

/// Applies an infix operator to two integers.
///
/// Division truncates toward zero.
///
/// # Errors
/// - `DivisionByZero` if the divisor of `/` is zero.
/// - `IntegerOverflow` if the result does not fit in 64 bits.
pub fn eval_integer_infix(operator: InfixOperator, left: i64, right: i64) -> EvalResult<Object> {
    let checked = match operator {
        InfixOperator::Plus => left.checked_add(right),
        InfixOperator::Minus => left.checked_sub(right),
        InfixOperator::Asterisk => left.checked_mul(right),
        InfixOperator::Slash => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero);
            }
            left.checked_div(right)
        },
        InfixOperator::Lt => return Ok(Object::from(left < right)),
        InfixOperator::Gt => return Ok(Object::from(left > right)),
        InfixOperator::Equal => return Ok(Object::from(left == right)),
        InfixOperator::NotEqual => return Ok(Object::from(left != right)),
    };

    checked.map(Object::Integer)
           .ok_or_else(|| RuntimeError::IntegerOverflow { operator: operator.to_string() })
}
