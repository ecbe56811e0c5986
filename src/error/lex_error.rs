use std::fmt;

use crate::error::Location;

/// The reasons tokenizing can fail.
///
/// `UnrecognizedCharacter` is the lexer's fallback for characters outside the
/// token alphabet. Those characters are skipped, so this kind never reaches a
/// caller of [`crate::interpreter::lexer::lex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character outside the token alphabet.
    #[default]
    UnrecognizedCharacter,
    /// A `}` with no open comment to close.
    UnmatchedCommentClose,
    /// A `{` whose comment is still open at the end of the input.
    UnterminatedComment,
    /// A `"` whose literal is still open at the end of the input.
    UnterminatedLiteral,
}

impl LexErrorKind {
    /// Returns the human readable description of this error kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnrecognizedCharacter => "Unrecognized character.",
            Self::UnmatchedCommentClose => "Unmatched comment close bracket '}'.",
            Self::UnterminatedComment => "Unclosed comment.",
            Self::UnterminatedLiteral => "Unclosed double-quoted string literal.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An error raised while tokenizing, positioned at the offending character
/// (for `}`) or at the opening character of the unterminated construct.
pub struct LexError {
    /// What went wrong.
    pub kind:     LexErrorKind,
    /// Where it went wrong.
    pub location: Location,
}

impl LexError {
    /// Creates a lexing error at the given line and column.
    #[must_use]
    pub const fn new(kind: LexErrorKind, line: u32, column: u32) -> Self {
        Self { kind,
               location: Location::new(line, column) }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.kind.message(), self.location)
    }
}

impl std::error::Error for LexError {}
