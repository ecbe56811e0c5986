use std::ops::Range;

use crate::interpreter::lexer::TokenKind;

/// A single token produced by the lexer or synthesized during hoisting.
///
/// Span-backed tokens (literals, numbers, identifiers) do not own their
/// text; `start` and `length` are byte offsets into the source the token was
/// lexed from. Tokens synthesized by the function hoisting pass have no
/// source span and carry their text in `text` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// Byte offset of the first character of the span.
    pub start:  usize,
    /// Length of the span in bytes.
    pub length: usize,
    /// The 1-based line the token starts on.
    pub line:   u32,
    /// The 1-based column the token starts at.
    pub column: u32,
    /// Resolved text for synthesized tokens.
    pub text:   Option<String>,
}

impl Token {
    /// Builds a token from a lexer span.
    ///
    /// Literal spans include both quotes when they come out of the lexer;
    /// the stored span covers only the interior.
    #[must_use]
    pub fn from_span(kind: TokenKind, span: Range<usize>, line: u32, column: u32) -> Self {
        let (start, length) = match kind {
            TokenKind::Literal => (span.start + 1, span.len().saturating_sub(2)),
            _ => (span.start, span.len()),
        };

        Self { kind,
               start,
               length,
               line,
               column,
               text: None }
    }

    /// Builds a token that has no source span.
    ///
    /// # Example
    /// ```
    /// use falsey::interpreter::{lexer::TokenKind, token::Token};
    ///
    /// let token = Token::synthetic(TokenKind::Identifier, "f", 3, 7);
    /// assert_eq!(token.lexeme("unrelated source"), "f");
    /// ```
    #[must_use]
    pub fn synthetic(kind: TokenKind, text: impl Into<String>, line: u32, column: u32) -> Self {
        Self { kind,
               start: 0,
               length: 0,
               line,
               column,
               text: Some(text.into()) }
    }

    /// Returns the token's text: the synthesized text if present, otherwise
    /// the slice of `source` its span covers.
    #[must_use]
    pub fn lexeme<'a>(&'a self, source: &'a str) -> &'a str {
        match &self.text {
            Some(text) => text,
            None => source.get(self.start..self.start + self.length)
                          .unwrap_or_default(),
        }
    }

    /// Renders the token for the `--tokens` listing.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        format!("{:>4}:{:<4} {:<14} {}",
                self.line,
                self.column,
                format!("{:?}", self.kind),
                self.lexeme(source))
    }
}
