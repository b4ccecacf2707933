/// Token kinds and tokens.
///
/// Declares the closed set of token kinds, including the keyword table, and
/// the token type carrying kind, literal text and source line.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to an identifier, literal, operator, delimiter or keyword.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, literal and
///   source line.
/// - Skips whitespace and tracks line numbers.
/// - Turns unrecognized characters into illegal tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a Pratt parser: every token kind that can start an
/// expression has a prefix parse function, every operator has an infix parse
/// function and a precedence.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Records syntax errors and keeps parsing after them.
pub mod parser;
/// Lexical scopes.
///
/// Defines the chained environment frames that map names to values.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a program can produce: integers,
/// booleans, null, strings, arrays, hashes, functions and builtins.
///
/// # Responsibilities
/// - Defines the `Object` enum and its type tags.
/// - Implements truthiness, identity and hash keys.
/// - Renders values the way a prompt displays them.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs operations, manages bindings and produces values.
///
/// # Responsibilities
/// - Evaluates every statement and expression form.
/// - Implements closures, `return` and `while`.
/// - Reports runtime errors such as type mismatches or bad calls.
pub mod evaluator;
/// Interpreter sessions.
///
/// Ties parsing and evaluation to one persistent environment.
pub mod session;
