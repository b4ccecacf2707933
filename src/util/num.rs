use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a `usize` to an `i64`.
///
/// Collection lengths are reported to scripts as integers, so they must fit in
/// the interpreter's integer range.
///
/// ## Errors
/// Returns `RuntimeError::IntegerOverflow` if the value exceeds `i64::MAX`.
///
/// ## Example
/// ```
/// use monkey::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::IntegerOverflow { operator: "len".to_string() })
}

/// Converts an integer index into a position inside a collection of `len`
/// elements.
///
/// Returns `None` for negative indices and indices at or past `len`; the
/// caller decides what an out-of-range index means.
///
/// ## Example
/// ```
/// use monkey::util::num::checked_index;
///
/// assert_eq!(checked_index(2, 3), Some(2));
/// assert_eq!(checked_index(3, 3), None);
/// assert_eq!(checked_index(-1, 3), None);
/// ```
#[must_use]
pub fn checked_index(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&position| position < len)
}
