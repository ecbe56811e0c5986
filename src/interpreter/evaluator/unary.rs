use std::io::{BufRead, Write};

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::{FALSE, StackValue},
    },
};

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// `~` pushes true for false and false for anything else.
    pub(crate) fn eval_not(&mut self) -> EvalResult<()> {
        let a = self.stack.pop_number()?.value;
        self.stack.push_any(StackValue::boolean(a == FALSE));
        Ok(())
    }

    /// `_` negates the top number.
    pub(crate) fn eval_negate(&mut self) -> EvalResult<()> {
        let a = self.stack.pop_number()?.value;
        let negated = a.checked_neg().ok_or(RuntimeErrorKind::Overflow)?;
        self.stack.push_number(negated, false);
        Ok(())
    }
}
