use std::fmt;

/// The integer that encodes boolean true.
pub const TRUE: i64 = -1;
/// The integer that encodes boolean false.
pub const FALSE: i64 = 0;

/// Encodes a Rust `bool` as `TRUE` or `FALSE`.
///
/// # Example
/// ```
/// use falsey::interpreter::value::core::{FALSE, TRUE, encode_bool};
///
/// assert_eq!(encode_bool(true), TRUE);
/// assert_eq!(encode_bool(false), FALSE);
/// ```
#[must_use]
pub const fn encode_bool(value: bool) -> i64 {
    if value { TRUE } else { FALSE }
}

/// A number on the stack, possibly flagged as a function handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Number {
    /// The integer value.
    pub value:              i64,
    /// Whether `value` names a stored function body.
    pub is_function_handle: bool,
}

impl Number {
    /// A plain number.
    #[must_use]
    pub const fn plain(value: i64) -> Self {
        Self { value,
               is_function_handle: false }
    }

    /// A callable function handle.
    #[must_use]
    pub const fn handle(handle: i64) -> Self {
        Self { value:              handle,
               is_function_handle: true, }
    }
}

/// Represents a value on the evaluation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackValue {
    /// A number. Only numbers take part in arithmetic and comparison, and
    /// only numbers flagged as function handles can be invoked.
    Number(Number),
    /// A reference to a variable by name. Only references can be the target
    /// of a store or fetch.
    Reference(String),
}

/// The tag of a [`StackValue`], used when reporting type mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A number or function handle.
    Number,
    /// A variable reference.
    Reference,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => write!(f, "Number"),
            Self::Reference => write!(f, "Reference"),
        }
    }
}

impl StackValue {
    /// A plain number.
    #[must_use]
    pub const fn number(value: i64) -> Self {
        Self::Number(Number::plain(value))
    }

    /// A boolean encoded as `TRUE` or `FALSE`.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::number(encode_bool(value))
    }

    /// Returns the tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Number,
            Self::Reference(_) => ValueKind::Reference,
        }
    }
}

impl From<Number> for StackValue {
    fn from(number: Number) -> Self {
        Self::Number(number)
    }
}

impl fmt::Display for StackValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(Number { value,
                                  is_function_handle: true, }) => write!(f, "fn#{value}"),
            Self::Number(Number { value, .. }) => write!(f, "{value}"),
            Self::Reference(key) => write!(f, "'{key}"),
        }
    }
}
