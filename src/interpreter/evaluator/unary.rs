use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Object,
    },
};

impl Evaluator {
    /// Evaluates a prefix operation on an already evaluated operand.
    ///
    /// Supported operators:
    /// - `!`: boolean negation of the operand's truthiness, defined for every
    ///   type.
    /// - `-`: integer negation.
    ///
    /// # Errors
    /// - `UnknownPrefixOperation` if `-` is applied to a non-integer.
    /// - `IntegerOverflow` when negating the smallest integer.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let negated = Evaluator::eval_prefix(PrefixOperator::Minus, &Object::from(5)).unwrap();
    /// assert_eq!(negated, Object::from(-5));
    ///
    /// let not_zero = Evaluator::eval_prefix(PrefixOperator::Bang, &Object::from(0)).unwrap();
    /// assert_eq!(not_zero, Object::from(true));
    ///
    /// let error = Evaluator::eval_prefix(PrefixOperator::Minus, &Object::from(true)).unwrap_err();
    /// assert_eq!(error.to_string(), "unknown operation: -BOOLEAN");
    /// ```
    pub fn eval_prefix(operator: PrefixOperator, right: &Object) -> EvalResult<Object> {
        match operator {
            PrefixOperator::Bang => Ok(Object::from(!right.is_truthy())),
            PrefixOperator::Minus => match right {
                Object::Integer(value) => value.checked_neg()
                                               .map(Object::Integer)
                                               .ok_or_else(|| RuntimeError::IntegerOverflow { operator: operator.to_string() }),
                other => Err(RuntimeError::UnknownPrefixOperation { operator,
                                                                    operand: other.object_type() }),
            },
        }
    }
}
