use std::collections::HashMap;

use crate::interpreter::value::core::Number;

/// A stored variable.
///
/// The value and the function-handle flag are always replaced together, so
/// a variable can only claim to be callable while holding a real handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Variable {
    /// The stored integer.
    pub value:              i64,
    /// Whether `value` is a function handle.
    pub is_function_handle: bool,
}

impl Variable {
    /// A variable bound to a function handle.
    #[must_use]
    pub const fn function(handle: i64) -> Self {
        Self { value:              handle,
               is_function_handle: true, }
    }
}

impl From<Number> for Variable {
    fn from(number: Number) -> Self {
        Self { value:              number.value,
               is_function_handle: number.is_function_handle, }
    }
}

impl From<Variable> for Number {
    fn from(variable: Variable) -> Self {
        Self { value:              variable.value,
               is_function_handle: variable.is_function_handle, }
    }
}

/// The flat, global variable namespace of one program run.
///
/// # Example
/// ```
/// use falsey::interpreter::value::variable::{Variable, VariableStore};
///
/// let mut store = VariableStore::default();
/// assert_eq!(store.fetch("x"), Variable::default());
///
/// store.store("x", Variable::function(3));
/// assert_eq!(store.fetch("x"), Variable::function(3));
/// assert_eq!(store.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VariableStore {
    variables: HashMap<String, Variable>,
}

impl VariableStore {
    /// Reads a variable, creating it as `{0, false}` if it does not exist.
    pub fn fetch(&mut self, key: &str) -> Variable {
        if let Some(variable) = self.variables.get(key) {
            return *variable;
        }

        let variable = Variable::default();
        self.variables.insert(key.to_owned(), variable);
        variable
    }

    /// Overwrites (or creates) a variable.
    pub fn store(&mut self, key: impl Into<String>, variable: Variable) {
        self.variables.insert(key.into(), variable);
    }

    /// Looks a variable up without creating it.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Variable> {
        self.variables.get(key)
    }

    /// Number of variables that exist.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been created yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
