use std::io::{BufRead, Write};

use crate::{
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        token::Token,
        value::{core::StackValue, variable::Variable},
    },
    util::num::parse_number_literal,
};

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// Parses a number token and pushes it as a plain number.
    ///
    /// # Errors
    /// `NumberOutOfRange` if the literal does not fit in an `i64`.
    pub(crate) fn push_number_literal(&mut self, token: &Token) -> EvalResult<()> {
        let value = parse_number_literal(token.lexeme(self.source))?;
        self.stack.push_number(value, false);
        Ok(())
    }

    /// Pushes a reference to the variable an identifier names.
    pub(crate) fn push_reference(&mut self, token: &Token) {
        let name = token.lexeme(self.source).to_owned();
        self.stack.push_reference(name);
    }

    /// `:` pops a reference, then a number, and overwrites the variable with
    /// the number and its function-handle flag.
    pub(crate) fn assign(&mut self) -> EvalResult<()> {
        let key = self.stack.pop_reference()?;
        let value = self.stack.pop_number()?;
        self.variables.store(key, Variable::from(value));
        Ok(())
    }

    /// `;` pops a reference and pushes the variable's value, creating the
    /// variable as zero if it was never assigned.
    pub(crate) fn fetch(&mut self) -> EvalResult<()> {
        let key = self.stack.pop_reference()?;
        let variable = self.variables.fetch(&key);
        self.stack.push_any(StackValue::Number(variable.into()));
        Ok(())
    }
}
