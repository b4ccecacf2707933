use crate::{
    error::Error,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{core::Evaluator, function::core::Builtins},
        parser::core::Parser,
        value::core::Object,
    },
};

/// A long-lived interpreter session.
///
/// The session keeps one top-level environment across calls to
/// [`Interpreter::run`], so later inputs see the bindings of earlier ones.
/// This is what an interactive prompt needs; [`crate::evaluate`] is the
/// one-shot equivalent.
///
/// # Example
/// ```
/// use monkey::interpreter::{session::Interpreter, value::core::Object};
///
/// let session = Interpreter::default();
/// session.run("var counter = [];").unwrap();
/// session.run("push(counter, 1); push(counter, 2);").unwrap();
///
/// assert_eq!(session.run("len(counter)").unwrap(), Object::from(2));
/// assert_eq!(session.run("counter[9] +").unwrap_err().to_string(),
///            "line 1: no prefix parse function for EOF found");
/// ```
#[derive(Debug)]
pub struct Interpreter {
    env:       Env,
    evaluator: Evaluator,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(Builtins::default())
    }
}

impl Interpreter {
    /// Creates a session with an empty top-level environment.
    #[must_use]
    pub fn new(builtins: Builtins) -> Self {
        Self { env:       Environment::new(),
               evaluator: Evaluator::new(builtins), }
    }

    /// Returns the session's top-level environment.
    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }

    /// Parses and evaluates `source` in the session's environment.
    ///
    /// Nothing is evaluated if the source has a syntax error. A runtime error
    /// stops evaluation, but bindings and mutations made before it are kept.
    ///
    /// # Errors
    /// - `Error::Parse` with every recorded syntax error.
    /// - `Error::Runtime` with the first runtime error.
    pub fn run(&self, source: &str) -> Result<Object, Error> {
        let mut parser = Parser::new(source);
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            return Err(Error::Parse(parser.take_errors()));
        }

        Ok(self.evaluator.eval_program(&program, &self.env)?)
    }
}
