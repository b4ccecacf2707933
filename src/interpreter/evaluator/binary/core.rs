use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{integer::eval_integer_infix, string::eval_string_infix},
            core::{EvalResult, Evaluator},
        },
        value::core::Object,
    },
};

impl Evaluator {
    /// Evaluates an infix operation on two already evaluated operands.
    ///
    /// Dispatch depends only on the operand types:
    /// 1. Operands of different types are a type mismatch, whatever the
    ///    operator.
    /// 2. Two integers support arithmetic and all comparisons.
    /// 3. Two strings support only `+`.
    /// 4. Any other pair of equal types supports only `==` and `!=`, which
    ///    compare identity.
    ///
    /// # Errors
    /// - `TypeMismatch` for operands of different types.
    /// - `UnknownInfixOperation` for an operator the type does not support.
    /// - `DivisionByZero` and `IntegerOverflow` from integer arithmetic.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Object},
    /// };
    ///
    /// let sum = Evaluator::eval_infix(InfixOperator::Plus, &1.into(), &2.into()).unwrap();
    /// assert_eq!(sum, Object::from(3));
    ///
    /// let error = Evaluator::eval_infix(InfixOperator::Plus, &5.into(), &true.into()).unwrap_err();
    /// assert_eq!(error.to_string(), "type mismatch: INTEGER + BOOLEAN");
    /// ```
    pub fn eval_infix(operator: InfixOperator, left: &Object, right: &Object) -> EvalResult<Object> {
        if left.object_type() != right.object_type() {
            return Err(RuntimeError::TypeMismatch { left: left.object_type(),
                                                    operator,
                                                    right: right.object_type() });
        }

        match (left, right) {
            (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
            (Object::Str(l), Object::Str(r)) => eval_string_infix(operator, l, r),
            _ => match operator {
                InfixOperator::Equal => Ok(Object::from(left.is_identical(right))),
                InfixOperator::NotEqual => Ok(Object::from(!left.is_identical(right))),
                _ => Err(RuntimeError::UnknownInfixOperation { left: left.object_type(),
                                                               operator,
                                                               right: right.object_type() }),
            },
        }
    }
}
