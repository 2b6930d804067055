//! Symbol environment.
//!
//! A flat table from symbol name to value. There is a single scope: builtins
//! are registered into it at startup and every `def` writes into it for the
//! rest of the session.
//!
//! Both directions copy. `put` stores a clone of the caller's value and
//! `get` hands back a clone of the stored one, so a value inside the table
//! and a value being evaluated never share a subtree.
//!
//! The environment is not synchronised. Evaluation borrows it mutably for
//! its whole duration; a concurrent host must serialise access around it.

use plisp_value::{unbound_symbol, Builtin, Value};

/// Name-to-value bindings, in first-definition order.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: Vec<(String, Value)>,
}

impl Environment {
    /// Create an empty environment with no builtins.
    pub fn new() -> Self {
        Environment {
            bindings: Vec::new(),
        }
    }

    /// Create an environment with every builtin registered.
    pub fn with_builtins() -> Self {
        let mut env = Self::new();
        env.register_builtins();
        env
    }

    /// Look up `name`, returning a copy of its value.
    ///
    /// An unbound name yields an `Error` value rather than failing.
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name)
            .cloned()
            .unwrap_or_else(|| Value::from(unbound_symbol(name)))
    }

    /// Borrow the value bound to `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Bind `name` to a copy of `value`, replacing any previous binding.
    pub fn put(&mut self, name: &str, value: &Value) {
        tracing::trace!(name, kind = %value.kind(), "bind");
        if let Some((_, slot)) = self.bindings.iter_mut().find(|(key, _)| key == name) {
            *slot = value.clone();
        } else {
            self.bindings.push((name.to_string(), value.clone()));
        }
    }

    /// Bind `name` to the function value for `builtin`.
    pub fn register_builtin(&mut self, name: &str, builtin: Builtin) {
        self.put(name, &Value::function(builtin));
    }

    /// Register every builtin under its name and alias.
    pub fn register_builtins(&mut self) {
        for (name, builtin) in Builtin::bindings() {
            self.register_builtin(name, builtin);
        }
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names, in first-definition order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(name, _)| name.as_str())
    }
}
