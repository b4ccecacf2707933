/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the host's
/// size types and the interpreter's 64-bit integers without risking silent
/// truncation.
pub mod num;
