use std::fmt;

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Number, StackValue, ValueKind},
    },
    util::num::usize_to_i64_saturating,
};

/// The operand stack of one program run.
///
/// Values are tagged, so every typed pop checks the tag of the top value
/// before removing it. A failed pop leaves the stack untouched.
///
/// # Example
/// ```
/// use falsey::interpreter::{stack::EvaluationStack, value::core::StackValue};
///
/// let mut stack = EvaluationStack::default();
/// stack.push_number(1, false);
/// stack.push_reference("x");
///
/// assert!(stack.pop_number().is_err());
/// assert_eq!(stack.pop_reference().unwrap(), "x");
/// assert_eq!(stack.pop_number().unwrap().value, 1);
/// assert!(stack.pop_any().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EvaluationStack {
    values: Vec<StackValue>,
}

impl EvaluationStack {
    /// Pushes a number, optionally flagged as a function handle.
    pub fn push_number(&mut self, value: i64, is_function_handle: bool) {
        self.values.push(StackValue::Number(Number { value,
                                                     is_function_handle }));
    }

    /// Pushes a reference to the variable named `key`.
    pub fn push_reference(&mut self, key: impl Into<String>) {
        self.values.push(StackValue::Reference(key.into()));
    }

    /// Pushes any value.
    pub fn push_any(&mut self, value: StackValue) {
        self.values.push(value);
    }

    /// Pops the top value whatever its tag.
    ///
    /// # Errors
    /// `StackUnderflow` if the stack is empty.
    pub fn pop_any(&mut self) -> EvalResult<StackValue> {
        self.values
            .pop()
            .ok_or_else(|| RuntimeErrorKind::StackUnderflow.into())
    }

    /// Pops the top value, which must be a number.
    ///
    /// # Errors
    /// `StackUnderflow` if the stack is empty, `TypeMismatch` if the top is a
    /// reference.
    pub fn pop_number(&mut self) -> EvalResult<Number> {
        self.expect_top(ValueKind::Number)?;
        match self.values.pop() {
            Some(StackValue::Number(number)) => Ok(number),
            _ => Err(RuntimeErrorKind::StackUnderflow.into()),
        }
    }

    /// Pops the top value, which must be a reference, and returns its key.
    ///
    /// # Errors
    /// `StackUnderflow` if the stack is empty, `TypeMismatch` if the top is a
    /// number.
    pub fn pop_reference(&mut self) -> EvalResult<String> {
        self.expect_top(ValueKind::Reference)?;
        match self.values.pop() {
            Some(StackValue::Reference(key)) => Ok(key),
            _ => Err(RuntimeErrorKind::StackUnderflow.into()),
        }
    }

    /// Returns the value `index` places below the top (0 is the top) without
    /// removing it.
    ///
    /// # Errors
    /// `IndexOutOfRange` if `index` is not less than the depth.
    ///
    /// # Example
    /// ```
    /// use falsey::interpreter::{stack::EvaluationStack, value::core::StackValue};
    ///
    /// let mut stack = EvaluationStack::default();
    /// stack.push_number(10, false);
    /// stack.push_number(20, false);
    ///
    /// assert_eq!(stack.peek_any(1).unwrap(), &StackValue::number(10));
    /// assert!(stack.peek_any(2).is_err());
    /// assert_eq!(stack.depth(), 2);
    /// ```
    pub fn peek_any(&self, index: usize) -> EvalResult<&StackValue> {
        let depth = self.values.len();
        if index >= depth {
            return Err(RuntimeErrorKind::IndexOutOfRange { index: usize_to_i64_saturating(index),
                                                           depth }.into());
        }

        Ok(&self.values[depth - 1 - index])
    }

    /// Number of values on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> impl Iterator<Item = &StackValue> {
        self.values.iter()
    }

    fn expect_top(&self, expected: ValueKind) -> EvalResult<()> {
        let actual = self.values
                         .last()
                         .ok_or(RuntimeErrorKind::StackUnderflow)?
                         .kind();

        if actual == expected {
            Ok(())
        } else {
            Err(RuntimeErrorKind::TypeMismatch { expected, actual }.into())
        }
    }
}

/// Renders the whole stack, bottom first, without modifying it.
impl fmt::Display for EvaluationStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
