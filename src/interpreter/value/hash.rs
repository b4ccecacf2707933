use std::{collections::HashMap, fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{ArrayPtr, Object},
    },
};

/// The key a hashable value is stored under.
///
/// The variant records the type and the payload of the value, so `1`, `true` and
/// `"1"` are three distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    /// Key of an integer value.
    Integer(i64),
    /// Key of a boolean value.
    Boolean(bool),
    /// Key of a string value.
    Str(Rc<str>),
}

/// A stored entry: the original key object next to its value.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    /// The key as it was written, kept for display.
    pub key:   Object,
    /// The associated value.
    pub value: Object,
}

/// The contents of a hash value.
///
/// Pairs are kept in first-insertion order. Inserting an existing key
/// replaces its value in place without moving it to the end.
///
/// # Example
/// ```
/// use monkey::interpreter::value::{core::Object, hash::HashObject};
///
/// let mut hash = HashObject::default();
/// hash.insert("one".into(), 1.into()).unwrap();
/// hash.insert("two".into(), 2.into()).unwrap();
/// hash.insert("one".into(), 10.into()).unwrap();
///
/// assert_eq!(hash.len(), 2);
/// assert_eq!(hash.get(&"one".into()).unwrap(), Some(&Object::Integer(10)));
/// assert_eq!(hash.to_string(), "{one: 10, two: 2}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct HashObject {
    pairs: Vec<HashPair>,
    slots: HashMap<HashKey, usize>,
}

impl HashObject {
    /// Stores `value` under `key`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` if `key` is not hashable.
    pub fn insert(&mut self, key: Object, value: Object) -> EvalResult<()> {
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { key: key.object_type() })?;

        self.insert_keyed(hash_key, key, value);
        Ok(())
    }

    /// Stores `value` under a key whose hash key was already computed.
    pub(crate) fn insert_keyed(&mut self, hash_key: HashKey, key: Object, value: Object) {
        if let Some(&slot) = self.slots.get(&hash_key) {
            self.pairs[slot].value = value;
        } else {
            self.slots.insert(hash_key, self.pairs.len());
            self.pairs.push(HashPair { key, value });
        }
    }

    /// Looks up the value stored under `key`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnusableHashKey` if `key` is not hashable.
    pub fn get(&self, key: &Object) -> EvalResult<Option<&Object>> {
        let hash_key = key.hash_key()
                          .ok_or(RuntimeError::UnusableHashKey { key: key.object_type() })?;

        Ok(self.slots
               .get(&hash_key)
               .map(|&slot| &self.pairs[slot].value))
    }

    /// Iterates over the stored pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HashPair> {
        self.pairs.iter()
    }

    /// Returns the number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if no pairs are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl HashObject {
    pub(in crate::interpreter::value) fn write_nested(&self,
                                                      f: &mut fmt::Formatter<'_>,
                                                      path: &mut Vec<ArrayPtr>)
                                                      -> fmt::Result {
        write!(f, "{{")?;
        for (index, pair) in self.pairs.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            pair.key.write_nested(f, path)?;
            write!(f, ": ")?;
            pair.value.write_nested(f, path)?;
        }
        write!(f, "}}")
    }

    /// Pairs compare in insertion order.
    pub(in crate::interpreter::value) fn eq_nested(&self,
                                                   other: &Self,
                                                   path: &mut Vec<(ArrayPtr, ArrayPtr)>)
                                                   -> bool {
        self.pairs.len() == other.pairs.len()
        && self.pairs
               .iter()
               .zip(&other.pairs)
               .all(|(l, r)| l.key.eq_nested(&r.key, path) && l.value.eq_nested(&r.value, path))
    }
}

impl PartialEq for HashObject {
    fn eq(&self, other: &Self) -> bool {
        self.eq_nested(other, &mut Vec::new())
    }
}

impl fmt::Display for HashObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_nested(f, &mut Vec::new())
    }
}
