use std::io::{self, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NULL, Object},
    },
};

/// Prints each argument on its own line and returns `null`.
///
/// Accepts any number of arguments. Values are formatted using their
/// `Display` implementation, so strings are printed without quotes.
///
/// # Errors
/// Returns `RuntimeError::Other` if standard output cannot be written.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::function::print::puts,
///     value::core::{NULL, Object},
/// };
///
/// // The function prints to stdout, but the doctest only checks the result.
/// assert_eq!(puts(&[Object::from("hello"), Object::from(42)]).unwrap(), NULL);
/// ```
pub fn puts(args: &[Object]) -> EvalResult<Object> {
    let mut stdout = io::stdout().lock();

    for arg in args {
        writeln!(stdout, "{arg}").map_err(|error| RuntimeError::Other { message: format!("puts: {error}") })?;
    }

    Ok(NULL)
}
