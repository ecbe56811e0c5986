use std::io::{BufRead, Write};

use crate::{
    error::RuntimeErrorKind,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        lexer::TokenKind,
        value::core::{StackValue, TRUE},
    },
};

/// Applies an arithmetic operator to two integers.
///
/// `a` is the operand that was pushed first. Division truncates toward zero.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Slash` and `b` is zero.
/// - `Overflow` if the result does not fit in an `i64`.
///
/// # Example
/// ```
/// use falsey::interpreter::{evaluator::binary::arithmetic, lexer::TokenKind};
///
/// assert_eq!(arithmetic(TokenKind::Minus, 2, 5).unwrap(), -3);
/// assert_eq!(arithmetic(TokenKind::Slash, -7, 2).unwrap(), -3);
/// assert!(arithmetic(TokenKind::Slash, 1, 0).is_err());
/// assert!(arithmetic(TokenKind::Plus, i64::MAX, 1).is_err());
/// ```
pub fn arithmetic(op: TokenKind, a: i64, b: i64) -> EvalResult<i64> {
    let result = match op {
        TokenKind::Plus => a.checked_add(b),
        TokenKind::Minus => a.checked_sub(b),
        TokenKind::Asterisk => a.checked_mul(b),
        TokenKind::Slash => {
            if b == 0 {
                return Err(RuntimeErrorKind::DivisionByZero.into());
            }
            a.checked_div(b)
        },
        kind => return Err(RuntimeErrorKind::Unsupported { kind }.into()),
    };

    result.ok_or_else(|| RuntimeErrorKind::Overflow.into())
}

/// Applies a comparison operator to two integers.
#[must_use]
pub fn comparison(op: TokenKind, a: i64, b: i64) -> bool {
    match op {
        TokenKind::GreaterThan => a > b,
        _ => a == b,
    }
}

/// Applies a logic operator to two encoded booleans.
///
/// Operands are not coerced: only `TRUE` (−1) counts as true, so `1 1&`
/// is false.
#[must_use]
pub fn logic(op: TokenKind, a: i64, b: i64) -> bool {
    match op {
        TokenKind::Bar => a == TRUE || b == TRUE,
        _ => a == TRUE && b == TRUE,
    }
}

impl<I: BufRead, O: Write> Evaluator<'_, I, O> {
    /// Pops two numbers and pushes the result of `+`, `-`, `*` or `/`.
    pub(crate) fn eval_arithmetic(&mut self, op: TokenKind) -> EvalResult<()> {
        let (a, b) = self.pop_operands()?;
        self.stack.push_number(arithmetic(op, a, b)?, false);
        Ok(())
    }

    /// Pops two numbers and pushes the boolean result of `=` or `>`.
    pub(crate) fn eval_comparison(&mut self, op: TokenKind) -> EvalResult<()> {
        let (a, b) = self.pop_operands()?;
        self.stack.push_any(StackValue::boolean(comparison(op, a, b)));
        Ok(())
    }

    /// Pops two booleans and pushes the result of `&` or `|`.
    pub(crate) fn eval_logic(&mut self, op: TokenKind) -> EvalResult<()> {
        let (a, b) = self.pop_operands()?;
        self.stack.push_any(StackValue::boolean(logic(op, a, b)));
        Ok(())
    }

    /// Pops `b` and then `a`, returning them in push order.
    fn pop_operands(&mut self) -> EvalResult<(i64, i64)> {
        let b = self.stack.pop_number()?.value;
        let a = self.stack.pop_number()?.value;
        Ok((a, b))
    }
}
