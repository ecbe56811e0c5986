use std::{
    collections::VecDeque,
    io::{BufRead, Write},
};

use crate::{
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::Token,
    },
    util::num::i64_to_char_checked,
};

/// The value `^` pushes once the input is exhausted.
pub const END_OF_INPUT: i64 = -1;

/// A line-buffered character source.
///
/// Characters are handed out one at a time. When the buffer runs dry a
/// whole line is read from the underlying reader; its line terminator is
/// normalized to a single `'\n'`, which is always appended, even to a last
/// line that had none.
///
/// # Example
/// ```
/// use falsey::interpreter::evaluator::io::InputBuffer;
///
/// let mut input = InputBuffer::new("ab\r\nc".as_bytes());
/// let mut read = String::new();
/// while let Some(c) = input.read_char().unwrap() {
///     read.push(c);
/// }
/// assert_eq!(read, "ab\nc\n");
/// ```
#[derive(Debug)]
pub struct InputBuffer<I> {
    reader:  I,
    pending: VecDeque<char>,
}

impl<I: BufRead> InputBuffer<I> {
    /// Wraps a reader.
    pub const fn new(reader: I) -> Self {
        Self { reader,
               pending: VecDeque::new() }
    }

    /// Returns the next character, or `None` at end of input.
    ///
    /// # Errors
    /// Any error reported by the underlying reader.
    pub fn read_char(&mut self) -> std::io::Result<Option<char>> {
        if self.pending.is_empty() {
            self.refill()?;
        }
        Ok(self.pending.pop_front())
    }

    fn refill(&mut self) -> std::io::Result<()> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let content = line.strip_suffix('\n')
                          .map_or(line.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
        self.pending.extend(content.chars());
        self.pending.push_back('\n');
        Ok(())
    }
}

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// `.` pops a number and writes it in decimal.
    pub(crate) fn print_number(&mut self) -> EvalResult<()> {
        let value = self.stack.pop_number()?.value;
        write!(self.output, "{value}")?;
        Ok(())
    }

    /// `,` pops a number and writes the character it encodes.
    ///
    /// The value is not truncated to a byte: anything that is not a Unicode
    /// scalar value (negative numbers, surrogates, values past `char::MAX`)
    /// fails with `InvalidCharacter` instead of printing a wrapped character.
    pub(crate) fn print_character(&mut self) -> EvalResult<()> {
        let value = self.stack.pop_number()?.value;
        let c = i64_to_char_checked(value)?;
        write!(self.output, "{c}")?;
        Ok(())
    }

    /// A string literal writes its text verbatim.
    pub(crate) fn print_literal(&mut self, token: &Token) -> EvalResult<()> {
        self.output
            .write_all(token.lexeme(self.source).as_bytes())?;
        Ok(())
    }

    /// `^` reads one character and pushes its code, or `END_OF_INPUT`.
    ///
    /// Pending output is flushed first so a prompt is visible before the
    /// read blocks.
    pub(crate) fn read_character(&mut self) -> EvalResult<()> {
        self.output.flush()?;
        let value = self.input
                        .read_char()?
                        .map_or(END_OF_INPUT, |c| i64::from(u32::from(c)));
        self.stack.push_number(value, false);
        Ok(())
    }
}
