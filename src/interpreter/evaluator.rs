/// Core evaluation logic.
///
/// Contains the evaluator itself, the result types threaded through
/// evaluation, statement and block execution and the expression dispatcher.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements logical NOT over truthiness and integer negation.
pub mod unary;

/// Infix operator evaluation.
///
/// Handles integer arithmetic and comparison, string concatenation, type
/// checks and identity equality for every other type.
pub mod binary;

/// Evaluation of `while` loops.
pub mod while_loop;

/// Array, hash and index evaluation.
pub mod collection;

/// Function evaluation.
///
/// Handles calls to user-defined functions and builtins, argument checking,
/// and the builtin registry.
pub mod function;
