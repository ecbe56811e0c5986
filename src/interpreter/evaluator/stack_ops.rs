use std::io::{BufRead, Write};

use log::debug;

use crate::{
    error::RuntimeErrorKind,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    util::num::i64_to_usize_checked,
};

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// `$` duplicates the top value, keeping its tag and handle flag.
    pub(crate) fn duplicate(&mut self) -> EvalResult<()> {
        let a = self.stack.pop_any()?;
        self.stack.push_any(a.clone());
        self.stack.push_any(a);
        Ok(())
    }

    /// `%` drops the top value.
    pub(crate) fn discard(&mut self) -> EvalResult<()> {
        self.stack.pop_any()?;
        Ok(())
    }

    /// `\` exchanges the top two values.
    pub(crate) fn swap(&mut self) -> EvalResult<()> {
        let b = self.stack.pop_any()?;
        let a = self.stack.pop_any()?;
        self.stack.push_any(b);
        self.stack.push_any(a);
        Ok(())
    }

    /// `@` moves the third value from the top to the top: `a b c -- b c a`.
    pub(crate) fn rotate(&mut self) -> EvalResult<()> {
        let c = self.stack.pop_any()?;
        let b = self.stack.pop_any()?;
        let a = self.stack.pop_any()?;
        self.stack.push_any(b);
        self.stack.push_any(c);
        self.stack.push_any(a);
        Ok(())
    }

    /// `ø` pops an index `n` and pushes a copy of the value `n` places below
    /// the new top.
    pub(crate) fn pick(&mut self) -> EvalResult<()> {
        let n = self.stack.pop_number()?.value;
        let depth = self.stack.depth();
        let index = i64_to_usize_checked(n, RuntimeErrorKind::IndexOutOfRange { index: n, depth })?;
        let value = self.stack.peek_any(index)?.clone();
        self.stack.push_any(value);
        Ok(())
    }

    /// `§` renders the stack to the debug log without touching it.
    pub(crate) fn dump_stack(&self) {
        debug!("stack dump (depth {}): {}", self.stack.depth(), self.stack);
    }
}
