use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Object, ObjectType},
    },
};

/// Applies an infix operator to two strings. Only concatenation is defined;
/// strings do not even support `==`.
pub fn eval_string_infix(operator: InfixOperator, left: &str, right: &str) -> EvalResult<Object> {
    if operator != InfixOperator::Plus {
        return Err(RuntimeError::UnknownInfixOperation { left: ObjectType::String,
                                                         operator,
                                                         right: ObjectType::String });
    }

    let mut joined = String::with_capacity(left.len() + right.len());
    joined.push_str(left);
    joined.push_str(right);
    Ok(Object::from(joined))
}
