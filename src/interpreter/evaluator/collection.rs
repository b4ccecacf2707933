use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::{EvalResult, Evaluator, Flow},
        value::{
            core::{NULL, Object},
            hash::HashObject,
        },
    },
    util::num::checked_index,
};

impl Evaluator {
    /// Evaluates the elements of an array literal left to right.
    pub(crate) fn eval_array_literal(&self, elements: &[Expression], env: &Env) -> Flow<Object> {
        let elements = self.eval_expressions(elements, env)?;
        Ok(Object::from(elements))
    }

    /// Evaluates a hash literal.
    ///
    /// Every key and value expression is evaluated, in source order, even
    /// when a key repeats. A repeated key keeps its first position and takes
    /// the last value. An unhashable key aborts the literal before its value
    /// is evaluated.
    pub(crate) fn eval_hash_literal(&self, pairs: &[(Expression, Expression)], env: &Env) -> Flow<Object> {
        let mut hash = HashObject::default();

        for (key, value) in pairs {
            let key = self.eval_expression(key, env)?;
            let hash_key = key.hash_key()
                              .ok_or(RuntimeError::UnusableHashKey { key: key.object_type() })?;
            let value = self.eval_expression(value, env)?;
            hash.insert_keyed(hash_key, key, value);
        }

        Ok(Object::from(hash))
    }

    /// Evaluates `left[index]` on already evaluated operands.
    ///
    /// Arrays take integer indices; any index outside `0..len`, negative ones
    /// included, yields `null`. Hashes take any hashable key and yield `null`
    /// for a missing one.
    ///
    /// # Errors
    /// - `UnusableHashKey` if a hash is indexed by an unhashable value.
    /// - `IndexNotSupported` for any other combination.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{
    ///     evaluator::core::Evaluator,
    ///     value::core::{NULL, Object},
    /// };
    ///
    /// let array = Object::from(vec![Object::from(1), Object::from(2)]);
    ///
    /// assert_eq!(Evaluator::eval_index(&array, &1.into()).unwrap(), Object::from(2));
    /// assert_eq!(Evaluator::eval_index(&array, &(-1).into()).unwrap(), NULL);
    /// ```
    pub fn eval_index(left: &Object, index: &Object) -> EvalResult<Object> {
        match (left, index) {
            (Object::Array(elements), Object::Integer(position)) => {
                let elements = elements.borrow();
                Ok(checked_index(*position, elements.len()).and_then(|position| elements.get(position))
                                                           .cloned()
                                                           .unwrap_or(NULL))
            },
            (Object::Hash(hash), key) => Ok(hash.get(key)?.cloned().unwrap_or(NULL)),
            _ => Err(RuntimeError::IndexNotSupported { target: left.object_type() }),
        }
    }
}
