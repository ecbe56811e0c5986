use logos::{FilterResult, Logos};

use crate::{
    error::{LexError, LexErrorKind},
    interpreter::{cursor::Cursor, token::Token},
};

/// Represents the kind of a lexical token.
///
/// Every operator is a single character. Literals, numbers and identifiers
/// are variable-length runs whose text stays in the source; the [`Token`]
/// produced for them only records a span.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Bar,
    /// `$`
    #[token("$")]
    Dollar,
    /// `%`
    #[token("%")]
    Percent,
    /// `\`
    #[token("\\")]
    Backslash,
    /// `@`
    #[token("@")]
    At,
    /// `?`
    #[token("?")]
    Question,
    /// `!`
    #[token("!")]
    Exclamation,
    /// `~`
    #[token("~")]
    Tilde,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `_`
    #[token("_")]
    Underscore,
    /// `#`
    #[token("#")]
    Hash,
    /// `^`
    #[token("^")]
    Caret,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `ø`
    #[token("ø")]
    Pick,
    /// `§`
    #[token("§")]
    SectionDump,
    /// A `"`-delimited string. The token span covers the interior only.
    #[token("\"", scan_literal)]
    Literal,
    /// A run of decimal digits such as `42`.
    #[regex(r"[0-9]+")]
    Number,
    /// A variable name such as `x`, `count2` or `é`.
    ///
    /// Any Unicode letter starts a name and letters or decimal digits
    /// continue it. `ø` is a letter but always lexes as [`TokenKind::Pick`].
    #[regex(r"[\p{L}&&[^ø]][\p{L}\p{Nd}&&[^ø]]*")]
    Identifier,
    /// `{ comments { nest } }`. Comments are skipped, so this kind is never
    /// yielded.
    #[token("{", skip_comment)]
    #[token("}", reject_comment_close)]
    CommentBegin,
}

/// Consumes a string literal through the next `"`.
///
/// There is no escape processing; the literal may span lines.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer positioned on the opening quote.
///
/// # Returns
/// - `Ok(())` after bumping past the closing quote.
/// - `Err(LexErrorKind::UnterminatedLiteral)` if no closing quote exists.
fn scan_literal(lex: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    let mut cursor = Cursor::new(lex.remainder());

    while cursor.advance() {
        if cursor.peek() == Some('"') {
            lex.bump(cursor.consumed());
            return Ok(());
        }
    }

    Err(LexErrorKind::UnterminatedLiteral)
}

/// Skips a possibly nested comment.
///
/// Everything except `{` and `}` is discarded while the nesting depth is
/// positive. The error, if any, is reported at the outermost opening brace.
fn skip_comment(lex: &mut logos::Lexer<TokenKind>) -> FilterResult<(), LexErrorKind> {
    let mut cursor = Cursor::new(lex.remainder());
    let mut depth = 1_usize;

    while cursor.advance() {
        match cursor.peek() {
            Some('{') => depth += 1,
            Some('}') => {
                depth -= 1;
                if depth == 0 {
                    lex.bump(cursor.consumed());
                    return FilterResult::Skip;
                }
            },
            _ => {},
        }
    }

    FilterResult::Error(LexErrorKind::UnterminatedComment)
}

/// A `}` outside of any comment.
fn reject_comment_close(_: &mut logos::Lexer<TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::UnmatchedCommentClose)
}

/// A lazy token producer over one source string.
///
/// Tokens are yielded one at a time as the iterator is driven. The first
/// error ends the sequence, so callers that must not act on a program with a
/// lexing error further down have to drain the iterator first (see
/// [`tokenize`]).
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, TokenKind>,
    cursor:   Cursor<'src>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    TokenKind::lexer(source),
               cursor:   Cursor::new(source),
               finished: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(result) = self.inner.next() else {
                self.finished = true;
                return None;
            };

            let span = self.inner.span();
            self.cursor.seek(span.start);
            let (line, column) = (self.cursor.line(), self.cursor.column());

            match result {
                Ok(kind) => return Some(Ok(Token::from_span(kind, span, line, column))),
                Err(LexErrorKind::UnrecognizedCharacter) => {},
                Err(kind) => {
                    self.finished = true;
                    return Some(Err(LexError::new(kind, line, column)));
                },
            }
        }
    }
}

/// Returns a lazy token stream over `source`.
///
/// # Example
/// ```
/// use falsey::interpreter::lexer::{TokenKind, lex};
///
/// let kinds: Vec<_> = lex("1 2+.").map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Number, TokenKind::Plus, TokenKind::Dot]);
/// ```
#[must_use]
pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// Tokenizes the whole of `source` before returning anything.
///
/// Draining the stream up front guarantees that a lexing error anywhere in
/// the program is reported before any token is executed.
///
/// # Errors
/// Returns the first [`LexError`] in the source.
///
/// # Example
/// ```
/// use falsey::{error::LexErrorKind, interpreter::lexer::tokenize};
///
/// let tokens = tokenize("\"hi\" { a { nested } comment } 42").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!((tokens[0].start, tokens[0].length), (1, 2));
///
/// let err = tokenize("1 2 }").unwrap_err();
/// assert_eq!(err.kind, LexErrorKind::UnmatchedCommentClose);
/// assert_eq!((err.location.line, err.location.column), (1, 5));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    lex(source).collect()
}
