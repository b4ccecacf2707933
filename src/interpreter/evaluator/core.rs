use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expression, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::function::core::Builtins,
        value::{
            core::{NULL, Object},
            function::Function,
        },
    },
};

/// Result type used by the evaluator.
///
/// All public evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A non-local exit travelling up through statement evaluation.
///
/// Both kinds stop the enclosing block. A `Return` is caught by the nearest
/// function call (or the program) and becomes that call's value; a `Raise`
/// passes through every boundary and ends evaluation.
#[derive(Debug)]
pub(crate) enum Unwind {
    /// A `return` statement was executed with this value.
    Return(Object),
    /// A runtime error was raised.
    Raise(RuntimeError),
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Raise(error)
    }
}

/// Result type of statement and expression evaluation, where `?` propagates
/// both `return` and errors.
pub(crate) type Flow<T> = Result<T, Unwind>;

/// Walks syntax trees and computes their values.
///
/// The evaluator itself holds no scope state: variables live in the
/// [`Env`] passed to each call, so one evaluator can serve any number of
/// environments. It does own the builtin registry consulted when a name is
/// not bound in scope.
///
/// ## Usage
///
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::core::Evaluator,
///     parser::core::Parser,
///     value::core::Object,
/// };
///
/// let mut parser = Parser::new("var double = fn(x) { x * 2 }; double(21)");
/// let program = parser.parse_program();
/// assert!(parser.errors().is_empty());
///
/// let evaluator = Evaluator::default();
/// let env = Environment::new();
///
/// assert_eq!(evaluator.eval_program(&program, &env).unwrap(), Object::from(42));
/// assert!(env.borrow().get("double").is_some());
/// ```
#[derive(Debug, Default)]
pub struct Evaluator {
    builtins: Builtins,
}

impl Evaluator {
    /// Creates an evaluator resolving unbound names against `builtins`.
    #[must_use]
    pub const fn new(builtins: Builtins) -> Self {
        Self { builtins }
    }

    /// Returns the builtin registry.
    #[must_use]
    pub const fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    /// Evaluates a program in `env` and returns the value of its last
    /// statement.
    ///
    /// A top-level `return` ends the program early with its value. An empty
    /// program yields `null`. Bindings made before a runtime error stay in
    /// `env`.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised by any statement.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn eval_program(&self, program: &Program, env: &Env) -> EvalResult<Object> {
        let mut result = NULL;

        for statement in &program.statements {
            match self.eval_statement(statement, env) {
                Ok(value) => result = value,
                Err(Unwind::Return(value)) => return Ok(value),
                Err(Unwind::Raise(error)) => {
                    tracing::debug!(%error, "evaluation failed");
                    return Err(error);
                },
            }
        }

        Ok(result)
    }

    /// Evaluates the statements of a block in order.
    ///
    /// Blocks do not open a scope of their own: a `var` inside an `if` or
    /// `while` body binds in `env`. The block's value is the value of its
    /// last statement, or `null` if it is empty.
    pub(crate) fn eval_block(&self, block: &BlockStatement, env: &Env) -> Flow<Object> {
        let mut result = NULL;
        for statement in &block.statements {
            result = self.eval_statement(statement, env)?;
        }
        Ok(result)
    }

    fn eval_statement(&self, statement: &Statement, env: &Env) -> Flow<Object> {
        match statement {
            Statement::Var { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.borrow_mut().set(name.name.clone(), value.clone());
                Ok(value)
            },
            Statement::Return { value } => Err(Unwind::Return(self.eval_expression(value, env)?)),
            Statement::Expression(expression) => self.eval_expression(expression, env),
        }
    }

    /// Evaluates an expression.
    ///
    /// This is the dispatcher for every expression form: literals,
    /// identifiers, prefix and infix operations, indexing, conditionals,
    /// loops, function literals and calls.
    pub(crate) fn eval_expression(&self, expression: &Expression, env: &Env) -> Flow<Object> {
        match expression {
            Expression::Identifier(identifier) => Ok(self.eval_identifier(&identifier.name, env)?),
            Expression::Integer(value) => Ok(Object::Integer(*value)),
            Expression::Boolean(value) => Ok(Object::from(*value)),
            Expression::Str(value) => Ok(Object::from(value.as_str())),
            Expression::Array(elements) => self.eval_array_literal(elements, env),
            Expression::Hash(pairs) => self.eval_hash_literal(pairs, env),
            Expression::Prefix { operator, right } => {
                let right = self.eval_expression(right, env)?;
                Ok(Self::eval_prefix(*operator, &right)?)
            },
            Expression::Infix { left,
                                operator,
                                right, } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(Self::eval_infix(*operator, &left, &right)?)
            },
            Expression::Index { left, index } => {
                let left = self.eval_expression(left, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(Self::eval_index(&left, &index)?)
            },
            Expression::If { condition,
                             consequence,
                             alternative, } => {
                self.eval_if(condition, consequence, alternative.as_ref(), env)
            },
            Expression::While { condition, body } => self.eval_while(condition, body, env),
            Expression::Function(literal) => {
                Ok(Object::Function(Rc::new(Function { literal: Rc::clone(literal),
                                                       env:     Rc::clone(env), })))
            },
            Expression::Call { function,
                               arguments, } => self.eval_call(function, arguments, env),
        }
    }

    /// Evaluates expressions left to right, stopping at the first failure.
    pub(crate) fn eval_expressions(&self, expressions: &[Expression], env: &Env) -> Flow<Vec<Object>> {
        expressions.iter()
                   .map(|expression| self.eval_expression(expression, env))
                   .collect()
    }

    /// Resolves a name against the scope chain, then the builtins.
    fn eval_identifier(&self, name: &str, env: &Env) -> EvalResult<Object> {
        let bound = env.borrow().get(name);

        bound.or_else(|| self.builtins.get(name))
             .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
    }

    fn eval_if(&self,
               condition: &Expression,
               consequence: &BlockStatement,
               alternative: Option<&BlockStatement>,
               env: &Env)
               -> Flow<Object> {
        if self.eval_expression(condition, env)?.is_truthy() {
            self.eval_block(consequence, env)
        } else {
            alternative.map_or(Ok(NULL), |block| self.eval_block(block, env))
        }
    }
}
