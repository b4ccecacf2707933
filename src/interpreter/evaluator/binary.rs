/// Infix dispatch on operand types.
pub mod core;

/// Integer arithmetic and comparison.
///
/// All arithmetic is checked; overflow and division by zero are runtime
/// errors.
pub mod integer;

/// String operators.
pub mod string;
