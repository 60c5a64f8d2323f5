//! Lexically-scoped variable bindings.

use crate::object::Object;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A scope: local bindings plus an optional link to the enclosing
/// scope. `get` walks outward through `outer`; `set` always writes into
/// the local bindings, overwriting a prior binding of the same name.
#[derive(Default)]
pub struct Environment {
    bindings: HashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment::default()))
    }

    /// A child scope whose lookups fall back to `outer` — used when
    /// invoking a function, with `outer` set to the function's captured
    /// environment.
    pub fn enclosed(outer: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            bindings: HashMap::new(),
            outer: Some(outer),
        }))
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref()?.borrow().get(name)
    }

    pub fn set(&mut self, name: impl Into<String>, value: Object) {
        self.bindings.insert(name.into(), value);
    }
}
