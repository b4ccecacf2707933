use std::fmt;

use crate::{
    ast::{InfixOperator, PrefixOperator},
    interpreter::value::core::ObjectType,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// The `Display` text of each variant is the message shown to users; hosts
/// usually prefix it with `ERROR: `.
pub enum RuntimeError {
    /// A prefix operator was applied to an operand it does not support.
    UnknownPrefixOperation {
        /// The operator.
        operator: PrefixOperator,
        /// The type of the operand.
        operand:  ObjectType,
    },
    /// An infix operator was applied to two operands of the same type that do
    /// not support it.
    UnknownInfixOperation {
        /// The type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// The type of the right operand.
        right:    ObjectType,
    },
    /// An infix operator was applied to operands of different types.
    TypeMismatch {
        /// The type of the left operand.
        left:     ObjectType,
        /// The operator.
        operator: InfixOperator,
        /// The type of the right operand.
        right:    ObjectType,
    },
    /// A name is bound neither in scope nor as a builtin.
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// Something other than a function was called.
    NotAFunction {
        /// The type of the callee.
        callee: ObjectType,
    },
    /// A function was called with the wrong number of arguments.
    WrongArgumentCount {
        /// The number of arguments supplied.
        received: usize,
        /// The number of parameters expected.
        expected: usize,
    },
    /// A value without a hash key was used as a hash key.
    UnusableHashKey {
        /// The type of the offending key.
        key: ObjectType,
    },
    /// The index operator was applied to a value that does not support it.
    IndexNotSupported {
        /// The type of the indexed value.
        target: ObjectType,
    },
    /// A builtin function received an argument of a type it cannot handle.
    UnsupportedArgument {
        /// The name of the builtin.
        function: String,
        /// The type of the offending argument.
        argument: ObjectType,
    },
    /// Integer division by zero.
    DivisionByZero,
    /// Integer arithmetic left the 64-bit signed range.
    IntegerOverflow {
        /// The operator that overflowed.
        operator: String,
    },
    /// Any other failure, raised by host-provided builtins.
    Other {
        /// Details about the failure.
        message: String,
    },
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPrefixOperation { operator, operand } => {
                write!(f, "unknown operation: {operator}{operand}")
            },
            Self::UnknownInfixOperation { left,
                                          operator,
                                          right, } => {
                write!(f, "unknown operation: {left} {operator} {right}")
            },
            Self::TypeMismatch { left,
                                 operator,
                                 right, } => write!(f, "type mismatch: {left} {operator} {right}"),
            Self::IdentifierNotFound { name } => write!(f, "identifier not found: {name}"),
            Self::NotAFunction { callee } => write!(f, "not a function: {callee}"),
            Self::WrongArgumentCount { received, expected } => write!(f,
                                                                      "wrong arguments amount: received {received}, expected {expected}"),
            Self::UnusableHashKey { key } => write!(f, "unusable as hash key: {key}"),
            Self::IndexNotSupported { target } => {
                write!(f, "index operator not supported: {target}")
            },
            Self::UnsupportedArgument { function, argument } => write!(f,
                                                                       "unsupported argument type for builtin function {function}: {argument}"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::IntegerOverflow { operator } => {
                write!(f, "integer overflow in operation {operator}")
            },
            Self::Other { message } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RuntimeError {}
