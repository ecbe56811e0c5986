use std::str::CharIndices;

/// A forward-only scanning position over immutable source text.
///
/// The cursor starts *before* the first character. Each call to
/// [`Cursor::advance`] consumes one code point and updates the line and
/// column as a side effect, so after a successful advance the position always
/// describes the most recently consumed character.
///
/// Lines and columns are 1-based. A `'\n'` belongs to the line it
/// terminates; the character after it is on the next line, column 1.
///
/// # Example
/// ```
/// use falsey::interpreter::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab\nc");
/// assert_eq!(cursor.peek(), None);
///
/// assert!(cursor.advance());
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.peek_next(), Some('b'));
/// assert_eq!((cursor.line(), cursor.column()), (1, 1));
///
/// cursor.seek(3);
/// assert_eq!(cursor.peek(), Some('c'));
/// assert_eq!((cursor.line(), cursor.column()), (2, 1));
///
/// assert!(!cursor.advance());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    text:    &'src str,
    chars:   CharIndices<'src>,
    current: Option<(usize, char)>,
    offset:  usize,
    line:    u32,
    column:  u32,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor positioned before the first character of `text`.
    #[must_use]
    pub fn new(text: &'src str) -> Self {
        Self { text,
               chars: text.char_indices(),
               current: None,
               offset: 0,
               line: 1,
               column: 0 }
    }

    /// Consumes the next character.
    ///
    /// Returns `false` once the input is exhausted; line and column then keep
    /// describing the last character that was consumed.
    pub fn advance(&mut self) -> bool {
        let Some(next) = self.chars.next() else {
            self.current = None;
            self.offset = self.text.len();
            return false;
        };

        if let Some((_, '\n')) = self.current {
            self.line += 1;
            self.column = 0;
        }

        self.column += 1;
        self.offset = next.0;
        self.current = Some(next);
        true
    }

    /// Returns the most recently consumed character, or `None` before the
    /// first advance and after the end of the input.
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.current.map(|(_, c)| c)
    }

    /// Inspects the character after the current one without consuming it.
    #[must_use]
    pub fn peek_next(&self) -> Option<char> {
        self.chars.clone().next().map(|(_, c)| c)
    }

    /// Advances until the current character starts at byte `offset` or the
    /// input ends. Never moves backwards.
    pub fn seek(&mut self, offset: usize) {
        while self.current.is_none_or(|(start, _)| start < offset) {
            if !self.advance() {
                break;
            }
        }
    }

    /// Byte offset of the current character (the text length once exhausted).
    #[must_use]
    pub const fn position(&self) -> usize {
        self.offset
    }

    /// Number of bytes consumed so far, including the current character.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.current
            .map_or(self.offset, |(start, c)| start + c.len_utf8())
    }

    /// The 1-based line of the current character.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// The 1-based column of the current character.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}
