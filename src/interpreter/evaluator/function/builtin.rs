use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{NULL, Object},
    },
    util::num::usize_to_i64_checked,
};

fn unsupported(function: &str, argument: &Object) -> RuntimeError {
    RuntimeError::UnsupportedArgument { function: function.to_string(),
                                        argument: argument.object_type() }
}

fn wrong_count(args: &[Object], expected: usize) -> RuntimeError {
    RuntimeError::WrongArgumentCount { received: args.len(),
                                       expected }
}

/// Returns the length of a string in characters, or of an array in elements.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::len, value::core::Object};
///
/// assert_eq!(len(&["héllo".into()]).unwrap(), Object::from(5));
/// assert_eq!(len(&[vec![Object::from(1)].into()]).unwrap(), Object::from(1));
/// assert!(len(&[Object::from(1)]).is_err());
/// ```
pub fn len(args: &[Object]) -> EvalResult<Object> {
    match args {
        [Object::Str(text)] => usize_to_i64_checked(text.chars().count()).map(Object::Integer),
        [Object::Array(elements)] => usize_to_i64_checked(elements.borrow().len()).map(Object::Integer),
        [other] => Err(unsupported("len", other)),
        _ => Err(wrong_count(args, 1)),
    }
}

/// Generates a builtin that picks one element of an array, or `null` when
/// the array is empty.
///
/// Non-array arguments produce an `UnsupportedArgument` error naming the
/// builtin.
macro_rules! array_element_builtin {
    ($fname:ident, $pick:ident) => {
        #[doc = concat!("Returns the ", stringify!($pick), " element of an array, or `null` if it is empty.")]
        pub fn $fname(args: &[Object]) -> EvalResult<Object> {
            match args {
                [Object::Array(elements)] => Ok(elements.borrow().$pick().cloned().unwrap_or(NULL)),
                [other] => Err(unsupported(stringify!($fname), other)),
                _ => Err(wrong_count(args, 1)),
            }
        }
    };
}

array_element_builtin!(first, first);
array_element_builtin!(last, last);

/// Returns a new array holding every element but the first, or `null` for an
/// empty array. The argument is not modified.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::function::builtin::rest,
///     value::core::{NULL, Object},
/// };
///
/// let array = Object::from(vec![Object::from(1), Object::from(2), Object::from(3)]);
///
/// assert_eq!(rest(&[array.clone()]).unwrap().to_string(), "[2, 3]");
/// assert_eq!(array.to_string(), "[1, 2, 3]");
/// assert_eq!(rest(&[Object::from(Vec::new())]).unwrap(), NULL);
/// ```
pub fn rest(args: &[Object]) -> EvalResult<Object> {
    match args {
        [Object::Array(elements)] => Ok(elements.borrow()
                                                .split_first()
                                                .map_or(NULL, |(_, tail)| Object::from(tail.to_vec()))),
        [other] => Err(unsupported("rest", other)),
        _ => Err(wrong_count(args, 1)),
    }
}

/// Appends a value to an array in place and returns that same array.
///
/// Every binding of the array observes the new element.
///
/// # Example
/// ```
/// use monkey::interpreter::{evaluator::function::builtin::push, value::core::Object};
///
/// let array = Object::from(Vec::new());
/// let pushed = push(&[array.clone(), Object::from(1)]).unwrap();
///
/// assert!(pushed.is_identical(&array));
/// assert_eq!(array.to_string(), "[1]");
/// ```
pub fn push(args: &[Object]) -> EvalResult<Object> {
    match args {
        [Object::Array(elements), value] => {
            elements.borrow_mut().push(value.clone());
            Ok(Object::Array(Rc::clone(elements)))
        },
        [other, _] => Err(unsupported("push", other)),
        _ => Err(wrong_count(args, 2)),
    }
}
