use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    value::core::{FALSE, TRUE},
};

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// `!` pops a function handle and calls it.
    pub(crate) fn call(&mut self) -> EvalResult<()> {
        let function = self.stack.pop_number()?;
        self.call_function(function)
    }

    /// `?` pops a function handle and a condition, and calls the function
    /// only when the condition is exactly `TRUE`.
    pub(crate) fn call_if(&mut self) -> EvalResult<()> {
        let function = self.stack.pop_number()?;
        let condition = self.stack.pop_number()?;

        if condition.value == TRUE {
            self.call_function(function)?;
        }
        Ok(())
    }

    /// `#` pops a body handle and a condition handle, then alternates
    /// between calling the condition and the body.
    ///
    /// The condition runs before every iteration and its result is popped;
    /// the loop ends as soon as that result is `FALSE`.
    pub(crate) fn call_while(&mut self) -> EvalResult<()> {
        let body = self.stack.pop_number()?;
        let condition = self.stack.pop_number()?;

        loop {
            self.call_function(condition)?;
            if self.stack.pop_number()?.value == FALSE {
                return Ok(());
            }
            self.call_function(body)?;
        }
    }
}
