/// Built-in collection and string functions.
///
/// Contains `len`, `first`, `last`, `rest` and `push`.
pub mod builtin;
/// The `puts` function implementation.
///
/// Writes values to standard output.
pub mod print;

pub mod core;
