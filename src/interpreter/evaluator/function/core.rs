use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{
            core::{EvalResult, Evaluator, Flow, Unwind},
            function::{builtin, print},
        },
        value::{
            core::Object,
            function::{Arity, Builtin},
        },
    },
};

/// Defines the default builtin functions by generating a lookup table and a
/// name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table the default registry is built from),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  fn(&[Object]) -> EvalResult<Object>,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of the builtins every default registry contains.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "rest"  => { arity: Arity::Exact(1), func: builtin::rest },
    "push"  => { arity: Arity::Exact(2), func: builtin::push },
    "puts"  => { arity: Arity::Any,      func: print::puts },
}

/// The native functions visible to scripts.
///
/// Builtins are consulted only after the scope chain, so a script binding
/// such as `var len = 1;` shadows the builtin of the same name. Each builtin
/// is allocated once per registry, which keeps `len == len` true.
///
/// # Example
/// ```
/// use monkey::{
///     evaluate_with_builtins,
///     interpreter::{
///         evaluator::function::core::Builtins,
///         value::{core::Object, function::Arity},
///     },
/// };
///
/// let builtins = Builtins::default().with("double", Arity::Exact(1), |args| match args {
///                                       [Object::Integer(n)] => Ok(Object::from(n * 2)),
///                                       _ => Ok(Object::Null),
///                                   });
///
/// assert_eq!(evaluate_with_builtins("double(len(\"four\"))", builtins).unwrap(),
///            Object::from(8));
/// ```
#[derive(Debug, Clone)]
pub struct Builtins {
    table: HashMap<String, Rc<Builtin>>,
}

impl Default for Builtins {
    fn default() -> Self {
        BUILTIN_TABLE.iter()
                     .fold(Self::empty(), |builtins, def| builtins.with(def.name, def.arity, def.func))
    }
}

impl Builtins {
    /// Creates a registry with no builtins at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// Adds a builtin, replacing any existing one with the same name.
    ///
    /// `func` may be a closure, so a host can give scripts access to its own
    /// state.
    #[must_use]
    pub fn with(mut self,
                name: impl Into<String>,
                arity: Arity,
                func: impl Fn(&[Object]) -> EvalResult<Object> + 'static)
                -> Self {
        let builtin = Builtin::new(name, arity, func);
        self.table.insert(builtin.name.clone(), Rc::new(builtin));
        self
    }

    /// Looks a builtin up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        self.table
            .get(name)
            .map(|builtin| Object::Builtin(Rc::clone(builtin)))
    }

    /// Returns `true` if a builtin with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }
}

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee and then each argument are evaluated left to right; the
    /// first failure aborts the call before anything is invoked.
    pub(crate) fn eval_call(&self, function: &Expression, arguments: &[Expression], env: &Env) -> Flow<Object> {
        let callee = self.eval_expression(function, env)?;
        let arguments = self.eval_expressions(arguments, env)?;

        Ok(self.apply_function(&callee, &arguments)?)
    }

    /// Invokes a callable value with evaluated arguments.
    ///
    /// A user-defined function runs its body in a fresh environment enclosed
    /// by the one it captured, with each parameter bound to its argument. A
    /// `return` in the body ends the call with its value; otherwise the value
    /// of the body's last statement is the result. Builtins check their arity
    /// and run natively.
    ///
    /// # Errors
    /// - `WrongArgumentCount` if the number of arguments does not match.
    /// - `NotAFunction` if `callee` is not callable.
    /// - Any error raised while running the body.
    pub fn apply_function(&self, callee: &Object, arguments: &[Object]) -> EvalResult<Object> {
        match callee {
            Object::Function(function) => {
                let parameters = &function.literal.parameters;
                if arguments.len() != parameters.len() {
                    return Err(RuntimeError::WrongArgumentCount { received: arguments.len(),
                                                                  expected: parameters.len(), });
                }

                let frame = Environment::enclosed(&function.env);
                {
                    let mut frame = frame.borrow_mut();
                    for (parameter, argument) in parameters.iter().zip(arguments) {
                        frame.set(parameter.name.clone(), argument.clone());
                    }
                }

                tracing::trace!(arguments = arguments.len(), "calling function");
                match self.eval_block(&function.literal.body, &frame) {
                    Ok(value) | Err(Unwind::Return(value)) => Ok(value),
                    Err(Unwind::Raise(error)) => Err(error),
                }
            },
            Object::Builtin(builtin) => builtin.call(arguments),
            other => Err(RuntimeError::NotAFunction { callee: other.object_type() }),
        }
    }
}
