/// Hash support.
///
/// Defines the `HashKey` computed for hashable values and the `HashObject`
/// stored inside `Object::Hash`. Only integers, booleans and strings can be
/// used as keys.
pub mod hash;
/// Callable values.
///
/// Defines user-defined functions (closures over their defining environment)
/// and native builtin functions.
pub mod function;

pub mod core;
