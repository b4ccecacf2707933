//! # monkey
//!
//! monkey is a tree-walking interpreter for the Monkey scripting language,
//! written in Rust. It lexes, parses and evaluates programs with integers,
//! booleans, strings, arrays, hashes, first-class functions and closures.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::new_ret_no_self)]

pub use crate::error::Error;
use crate::interpreter::{evaluator::function::core::Builtins, session::Interpreter, value::core::Object};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expression` types
/// that represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator; its `Display` output is valid source again.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the errors that can be recorded while parsing and
/// raised while evaluating, and the combined error returned by the
/// top-level entry points.
///
/// # Responsibilities
/// - Defines error enums for parser and evaluator failures.
/// - Renders the exact messages users see.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, scopes and value
/// representations, and exposes the session type used by hosts.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and values.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Evaluates `source` in a fresh environment with the default builtins.
///
/// # Errors
/// Returns `Error::Parse` if the source does not parse, in which case nothing
/// is evaluated, or `Error::Runtime` for the first runtime error.
///
/// # Examples
/// ```
/// use monkey::{evaluate, interpreter::value::core::Object};
///
/// let source = "var newAdder = fn(x) { fn(y) { x + y } };
///               var addTwo = newAdder(2);
///               addTwo(3);";
/// assert_eq!(evaluate(source).unwrap(), Object::from(5));
///
/// // Example with an intentional error.
/// let res = evaluate("5 + true; 10");
/// assert_eq!(res.unwrap_err().to_string(), "ERROR: type mismatch: INTEGER + BOOLEAN");
/// ```
pub fn evaluate(source: &str) -> Result<Object, Error> {
    evaluate_with_builtins(source, Builtins::default())
}

/// Evaluates `source` in a fresh environment with a custom builtin registry.
///
/// Use [`Builtins::with`] on [`Builtins::default`] to add builtins or to
/// override default ones by name.
///
/// # Errors
/// Same as [`evaluate`].
pub fn evaluate_with_builtins(source: &str, builtins: Builtins) -> Result<Object, Error> {
    Interpreter::new(builtins).run(source)
}
