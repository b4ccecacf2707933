use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Object;

/// Shared handle to an environment frame.
///
/// Function values hold one of these for their defining scope, which keeps the
/// frame alive for as long as any closure can still reach it.
pub type Env = Rc<RefCell<Environment>>;

/// One frame of the lexical scope chain.
///
/// Lookups walk outward through the chain; definitions always write to the
/// frame they are made in, so an inner `var` shadows an outer binding instead
/// of changing it.
///
/// # Example
/// ```
/// use monkey::interpreter::{environment::Environment, value::core::Object};
///
/// let global = Environment::new();
/// global.borrow_mut().set("x", Object::from(1));
///
/// let local = Environment::enclosed(&global);
/// local.borrow_mut().set("x", Object::from(2));
///
/// assert_eq!(local.borrow().get("x"), Some(Object::from(2)));
/// assert_eq!(global.borrow().get("x"), Some(Object::from(1)));
/// ```
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Object>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates an empty top-level frame.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty frame whose lookups fall back to `outer`.
    #[must_use]
    pub fn enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up in this frame, then in each enclosing frame.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Object> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this frame, replacing any binding of the same name in
    /// this frame only.
    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.store.insert(name.into(), value);
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.store.keys().collect();
        names.sort();

        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_outer", &self.outer.is_some())
         .finish()
    }
}
