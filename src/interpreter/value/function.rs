use std::{fmt, rc::Rc};

use crate::{
    ast::FunctionLiteral,
    error::RuntimeError,
    interpreter::{
        environment::Env,
        evaluator::core::EvalResult,
        value::core::Object,
    },
};

/// A user-defined function.
///
/// The function keeps a shared reference to the environment it was created
/// in, not a copy. Calls run in a fresh child of that environment, so the body
/// sees the defining scope as it is at call time.
pub struct Function {
    /// Parameters and body, shared with the literal the function came from.
    pub literal: Rc<FunctionLiteral>,
    /// The environment the literal was evaluated in.
    pub env:     Env,
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured environment may hold this function, so it is left out.
        f.debug_struct("Function")
         .field("literal", &self.literal)
         .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

/// Signature of native functions callable from scripts.
///
/// A builtin receives the evaluated arguments and returns a value or a
/// runtime error. Host builtins may be closures holding their own state.
pub type BuiltinFn = dyn Fn(&[Object]) -> EvalResult<Object>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// The builtin must receive exactly this many arguments.
    Exact(usize),
    /// The builtin accepts any number of arguments.
    Any,
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::Any => true,
        }
    }
}

/// A native function exposed to scripts under a fixed name.
pub struct Builtin {
    /// The name the builtin is registered under.
    pub name:  String,
    /// The accepted argument count.
    pub arity: Arity,
    func:      Box<BuiltinFn>,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builtin")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl Builtin {
    /// Creates a builtin from a name, an arity and an implementation.
    #[must_use]
    pub fn new(name: impl Into<String>,
               arity: Arity,
               func: impl Fn(&[Object]) -> EvalResult<Object> + 'static)
               -> Self {
        Self { name: name.into(),
               arity,
               func: Box::new(func) }
    }

    /// Invokes the builtin after checking the argument count.
    ///
    /// # Errors
    /// Returns `RuntimeError::WrongArgumentCount` on an arity mismatch, or
    /// whatever error the implementation raises.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::{
    ///     core::{NULL, Object},
    ///     function::{Arity, Builtin},
    /// };
    ///
    /// let identity = Builtin::new("identity", Arity::Exact(1), |args| Ok(args[0].clone()));
    ///
    /// assert_eq!(identity.call(&[Object::from(7)]).unwrap(), Object::from(7));
    /// assert!(identity.call(&[NULL, NULL]).is_err());
    /// ```
    pub fn call(&self, args: &[Object]) -> EvalResult<Object> {
        if let Arity::Exact(expected) = self.arity
           && !self.arity.check(args.len())
        {
            return Err(RuntimeError::WrongArgumentCount { received: args.len(),
                                                          expected });
        }

        tracing::trace!(builtin = %self.name, arguments = args.len(), "calling builtin");
        (self.func)(args)
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "builtin function")
    }
}
