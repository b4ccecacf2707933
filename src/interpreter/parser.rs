/// Parser state and the Pratt expression loop.
///
/// Holds the one-token lookahead, the precedence table and the accumulated
/// error list.
pub mod core;

/// Prefix parse functions.
///
/// Parses everything that can start an expression: literals, identifiers,
/// prefix operators, grouping, `if`, `while`, function, array and hash
/// literals.
pub mod unary;

/// Infix parse functions.
///
/// Parses binary operators, calls and index expressions, each bound to the
/// precedence of the token that introduces it.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences used as bodies.
pub mod block;

/// Statement parsing.
///
/// Dispatches between `var`, `return` and expression statements.
pub mod statement;

/// Shared parsing helpers.
///
/// Token expectations and comma-separated lists.
pub mod utils;
