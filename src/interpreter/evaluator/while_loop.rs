use crate::{
    ast::{BlockStatement, Expression},
    interpreter::{
        environment::Env,
        evaluator::core::{Evaluator, Flow},
        value::core::{NULL, Object},
    },
};

impl Evaluator {
    /// Evaluates a `while` expression.
    ///
    /// The condition is re-evaluated before every iteration and the body runs
    /// while it is truthy. The body runs in the loop's own environment, so
    /// a `var` in the body rebinds the enclosing name for the next iteration.
    ///
    /// The value of the last executed iteration is returned. If the body never
    /// runs, the result is `null`. A `return` or error inside the body ends
    /// the loop and propagates.
    pub(crate) fn eval_while(&self, condition: &Expression, body: &BlockStatement, env: &Env) -> Flow<Object> {
        let mut result = NULL;
        let mut iterations: usize = 0;

        while self.eval_expression(condition, env)?.is_truthy() {
            result = self.eval_block(body, env)?;
            iterations += 1;
        }

        tracing::trace!(iterations, "while loop finished");
        Ok(result)
    }
}
