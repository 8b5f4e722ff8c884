//! Lexical environments.
//!
//! An environment is a chain of scopes. Function calls push a scope whose
//! parent is the closure's captured environment, so lookups follow lexical
//! nesting rather than the call stack.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Single-threaded shared, mutable cell.
///
/// Every scope allocation goes through [`LocalScope::new`]. Closures and
/// the interpreter hold clones of the same scope, so a binding added after
/// a closure was created is still visible to it.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

/// One level of bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }
}

/// Handle to a scope chain.
///
/// Cloning is cheap and shares the scope; use [`Environment::new_enclosed`]
/// for a fresh child scope.
#[derive(Clone, Default)]
pub struct Environment(LocalScope<Scope>);

impl Environment {
    /// An empty top-level environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh scope whose lookups fall back to `parent`.
    #[must_use]
    pub fn new_enclosed(parent: &Environment) -> Self {
        Environment(LocalScope::new(Scope::with_parent(parent.0.clone())))
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.0.borrow().lookup(name)
    }

    /// Bind `name` in the innermost scope. Outer bindings are shadowed,
    /// never modified.
    #[inline]
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().define(name.into(), value);
    }

    /// Whether both handles refer to the same innermost scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.0.ptr_eq(&other.0)
    }

    /// Names bound in the innermost scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

// Values may hold closures that capture this environment, so only the
// names are printed.
impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.0.borrow();
        f.debug_struct("Environment")
            .field("names", &self.local_names())
            .field("enclosed", &scope.parent.is_some())
            .finish()
    }
}
