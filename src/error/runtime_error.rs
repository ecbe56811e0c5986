use std::fmt;

use crate::{
    error::Location,
    interpreter::{lexer::TokenKind, value::core::ValueKind},
};

#[derive(Debug)]
/// Represents all errors that can occur while hoisting and executing tokens.
pub enum RuntimeErrorKind {
    /// Tried to pop from an empty stack.
    StackUnderflow,
    /// The top of the stack held the wrong kind of value.
    TypeMismatch {
        /// The kind the operator needed.
        expected: ValueKind,
        /// The kind that was actually on top.
        actual:   ValueKind,
    },
    /// A pick reached below the bottom of the stack.
    IndexOutOfRange {
        /// The requested depth.
        index: i64,
        /// The stack depth at the time of the pick.
        depth: usize,
    },
    /// A function handle with no stored body.
    UndefinedFunction {
        /// The handle that was invoked.
        handle: i64,
    },
    /// Tried to invoke a number that is not flagged as a function handle.
    NotCallable {
        /// The plain number that was invoked.
        value: i64,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Arithmetic overflowed 64 bits.
    Overflow,
    /// A number literal does not fit in a signed 64-bit integer.
    NumberOutOfRange {
        /// The literal as written in the source.
        literal: String,
    },
    /// A value passed to `,` is not a Unicode scalar value.
    InvalidCharacter {
        /// The offending value.
        value: i64,
    },
    /// Function calls nested deeper than the configured limit.
    StackOverflow {
        /// The configured maximum call depth.
        limit: usize,
    },
    /// A `]` with no open function block.
    UnmatchedFunctionClose,
    /// A `[` whose block is never closed.
    UnclosedFunction,
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// A token kind that has no meaning at execution time.
    Unsupported {
        /// The token kind that reached the evaluator.
        kind: TokenKind,
    },
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackUnderflow => write!(f, "Runtime stack is empty."),
            Self::TypeMismatch { expected, actual } => {
                write!(f, "Expected '{expected}' on stack. Got '{actual}'.")
            },
            Self::IndexOutOfRange { index, depth } => write!(f,
                                                             "Pick index {index} is out of range for a stack of depth {depth}."),
            Self::UndefinedFunction { handle } => write!(f, "Function {handle} is undefined."),
            Self::NotCallable { value } => write!(f, "Value {value} is not a function handle."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow => write!(f, "Integer overflow while computing result."),
            Self::NumberOutOfRange { literal } => write!(f,
                                                         "Number literal '{literal}' does not fit in a 64-bit integer."),
            Self::InvalidCharacter { value } => {
                write!(f, "Value {value} is not a printable character.")
            },
            Self::StackOverflow { limit } => {
                write!(f, "Call depth exceeded the limit of {limit}.")
            },
            Self::UnmatchedFunctionClose => write!(f, "Unmatched function close bracket ']'."),
            Self::UnclosedFunction => write!(f, "Unclosed function bracket '['."),
            Self::Io(e) => write!(f, "I/O error: {e}."),
            Self::Unsupported { kind } => write!(f, "Unsupported token type '{kind:?}'."),
        }
    }
}

#[derive(Debug)]
/// A runtime error together with the position of the token that raised it.
///
/// Errors start out unpositioned and are annotated once by the execution
/// loop. Annotation is first-wins, so an error raised deep inside nested
/// calls keeps the position of the innermost token.
pub struct RuntimeError {
    /// What went wrong.
    pub kind:     RuntimeErrorKind,
    /// The originating token, once known.
    pub location: Option<Location>,
}

impl RuntimeError {
    /// Annotates the error with a token position unless it already has one.
    ///
    /// # Example
    /// ```
    /// use falsey::error::{Location, RuntimeError, RuntimeErrorKind};
    ///
    /// let error = RuntimeError::from(RuntimeErrorKind::DivisionByZero).at(1, 4).at(1, 9);
    /// assert_eq!(error.location, Some(Location::new(1, 4)));
    /// assert_eq!(error.to_string(), "Division by zero. @ line 1, column 4");
    /// ```
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        if self.location.is_none() {
            self.location = Some(Location::new(line, column));
        }
        self
    }
}

impl From<RuntimeErrorKind> for RuntimeError {
    fn from(kind: RuntimeErrorKind) -> Self {
        Self { kind,
               location: None }
    }
}

impl From<std::io::Error> for RuntimeError {
    fn from(error: std::io::Error) -> Self {
        RuntimeErrorKind::Io(error).into()
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} @ {location}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            RuntimeErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}
