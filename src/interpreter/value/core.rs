use std::{cell::RefCell, fmt, rc::Rc};

use crate::interpreter::value::{
    function::{Builtin, Function},
    hash::{HashKey, HashObject},
};

/// The `true` value.
pub const TRUE: Object = Object::Boolean(true);
/// The `false` value.
pub const FALSE: Object = Object::Boolean(false);
/// The `null` value, produced by anything that has no better result.
pub const NULL: Object = Object::Null;

/// Represents a runtime value in the interpreter.
///
/// Scalars (`Integer`, `Boolean`, `Null`, `Str`) are plain values. Arrays,
/// hashes and callables are reference-counted, so copies of an `Object`
/// share them: pushing onto an array through one binding is visible through
/// every other binding of the same array.
#[derive(Debug, Clone)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean. Only `TRUE` and `FALSE` exist.
    Boolean(bool),
    /// The absence of a value.
    Null,
    /// An immutable string.
    Str(Rc<str>),
    /// A mutable, shared sequence of values.
    Array(Rc<RefCell<Vec<Self>>>),
    /// A mapping from hashable keys to values.
    Hash(Rc<HashObject>),
    /// A user-defined function together with its defining environment.
    Function(Rc<Function>),
    /// A native function.
    Builtin(Rc<Builtin>),
}

/// The type tag of an [`Object`], as it appears in error messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// `INTEGER`
    Integer,
    /// `BOOLEAN`
    Boolean,
    /// `NULL`
    Null,
    /// `STRING`
    String,
    /// `ARRAY`
    Array,
    /// `HASH`
    Hash,
    /// `FUNCTION`
    Function,
    /// `BUILTIN`
    Builtin,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
        };
        write!(f, "{tag}")
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Object {
    fn from(v: bool) -> Self {
        if v { TRUE } else { FALSE }
    }
}

impl From<&str> for Object {
    fn from(v: &str) -> Self {
        Self::Str(v.into())
    }
}

impl From<String> for Object {
    fn from(v: String) -> Self {
        Self::Str(v.into())
    }
}

impl From<Vec<Self>> for Object {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(RefCell::new(v)))
    }
}

impl From<HashObject> for Object {
    fn from(v: HashObject) -> Self {
        Self::Hash(Rc::new(v))
    }
}

impl Object {
    /// Returns the type tag of the value.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::{NULL, Object, ObjectType};
    ///
    /// assert_eq!(Object::from(5).object_type(), ObjectType::Integer);
    /// assert_eq!(NULL.object_type().to_string(), "NULL");
    /// ```
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::Str(_) => ObjectType::String,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
        }
    }

    /// Decides whether the value counts as true in a condition.
    ///
    /// `null`, `false` and the integer `0` are falsy; everything else,
    /// including empty strings and empty arrays, is truthy.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::{FALSE, NULL, Object};
    ///
    /// assert!(!NULL.is_truthy());
    /// assert!(!FALSE.is_truthy());
    /// assert!(!Object::from(0).is_truthy());
    /// assert!(Object::from(-1).is_truthy());
    /// assert!(Object::from("").is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Null | Self::Boolean(false) | Self::Integer(0))
    }

    /// Compares two values by identity.
    ///
    /// Booleans and `null` are singletons, so their identity is their value.
    /// Arrays, hashes and functions are identical only when both sides refer
    /// to the same allocation; two separately built `[1]` arrays are not.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Computes the key under which the value is stored in a hash, or `None`
    /// when the type is not hashable.
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(n) => Some(HashKey::Integer(*n)),
            Self::Boolean(b) => Some(HashKey::Boolean(*b)),
            Self::Str(s) => Some(HashKey::Str(Rc::clone(s))),
            _ => None,
        }
    }

    /// Returns `true` if the value is `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Address of an array's storage, used to detect arrays that contain
/// themselves.
pub(in crate::interpreter::value) type ArrayPtr = *const RefCell<Vec<Object>>;

impl Object {
    /// Writes the value, printing `[...]` for an array already on `path`.
    pub(in crate::interpreter::value) fn write_nested(&self,
                                                      f: &mut fmt::Formatter<'_>,
                                                      path: &mut Vec<ArrayPtr>)
                                                      -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Array(a) => {
                let ptr = Rc::as_ptr(a);
                if path.contains(&ptr) {
                    return write!(f, "[...]");
                }

                path.push(ptr);
                write!(f, "[")?;

                for (index, value) in a.borrow().iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    value.write_nested(f, path)?;
                }

                path.pop();
                write!(f, "]")
            },
            Self::Hash(h) => h.write_nested(f, path),
            Self::Function(func) => write!(f, "{func}"),
            Self::Builtin(builtin) => write!(f, "{builtin}"),
        }
    }

    /// Structural comparison. A pair of arrays met again on `path` compares
    /// equal, so self-containing arrays terminate.
    pub(in crate::interpreter::value) fn eq_nested(&self,
                                                   other: &Self,
                                                   path: &mut Vec<(ArrayPtr, ArrayPtr)>)
                                                   -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => {
                let pair = (Rc::as_ptr(a), Rc::as_ptr(b));
                if Rc::ptr_eq(a, b) || path.contains(&pair) {
                    return true;
                }

                path.push(pair);
                let (left, right) = (a.borrow(), b.borrow());
                let equal = left.len() == right.len()
                            && left.iter().zip(right.iter()).all(|(l, r)| l.eq_nested(r, path));
                path.pop();
                equal
            },
            (Self::Hash(a), Self::Hash(b)) => Rc::ptr_eq(a, b) || a.eq_nested(b, path),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Structural equality, used by hosts and tests to inspect results.
///
/// This is not the language's `==`, which compares non-scalar values by
/// identity (see [`Object::is_identical`]).
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.eq_nested(other, &mut Vec::new())
    }
}

/// Renders the value the way the REPL prints it.
///
/// An array that contains itself is printed as `[...]` where it recurs.
///
/// # Example
/// ```
/// use monkey::evaluate;
///
/// let looped = evaluate("var a = [1]; push(a, a)").unwrap();
/// assert_eq!(looped.to_string(), "[1, [...]]");
/// ```
impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, &mut Vec::new())
    }
}
