/// Parsing errors.
///
/// Defines all error types that the parser records while building the syntax
/// tree. Parse errors are collected rather than returned one at a time, so a
/// whole batch can be reported for a single source text.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unknown identifiers, bad calls and invalid hash keys.
pub mod runtime_error;

use std::fmt;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;

/// Any failure produced while running source text.
#[derive(Debug)]
pub enum Error {
    /// The source did not parse. Nothing was evaluated.
    Parse(ParseErrors),
    /// Evaluation stopped at a runtime error. Side effects that happened
    /// before the error are kept.
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(errors) => write!(f, "{errors}"),
            Self::Runtime(error) => write!(f, "ERROR: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(errors) => Some(errors),
            Self::Runtime(error) => Some(error),
        }
    }
}

impl From<ParseErrors> for Error {
    fn from(errors: ParseErrors) -> Self {
        Self::Parse(errors)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}
