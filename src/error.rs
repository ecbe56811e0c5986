use std::fmt;

/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: stray
/// comment terminators and comments or string literals that are still open
/// when the input runs out.
pub mod lex_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while hoisting functions and
/// executing tokens. Runtime errors include stack underflow, operand type
/// mismatches, calls through values that are not function handles and
/// division by zero.
pub mod runtime_error;

pub use lex_error::{LexError, LexErrorKind};
pub use runtime_error::{RuntimeError, RuntimeErrorKind};

/// A position in the source text.
///
/// Lines and columns are both 1-based. Every error that reaches the caller
/// carries exactly one location: the token or character that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// The 1-based source line.
    pub line:   u32,
    /// The 1-based column within `line`.
    pub column: u32,
}

impl Location {
    /// Creates a location from a line and column pair.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Any failure surfaced by a program run.
///
/// Lexing errors are always reported before execution starts; runtime errors
/// stop the run at the first failing token.
#[derive(Debug)]
pub enum Error {
    /// The source text could not be tokenized.
    Lex(LexError),
    /// Hoisting or execution failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
