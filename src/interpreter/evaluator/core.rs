use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::{
            compile::{FunctionTable, hoist},
            io::InputBuffer,
        },
        lexer::TokenKind,
        stack::EvaluationStack,
        token::Token,
        value::{
            core::Number,
            variable::{Variable, VariableStore},
        },
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default bound on nested function calls and loop iterations in flight.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Settings for one program run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// How deep function calls may nest before the run fails with
    /// `StackOverflow` instead of exhausting the native stack.
    pub max_call_depth: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { max_call_depth: DEFAULT_MAX_CALL_DEPTH }
    }
}

/// Stores the runtime state of one program run.
///
/// The evaluator exclusively owns the evaluation stack, the variable store
/// and the function table. Nested calls and loops re-enter the same
/// evaluator, so all three are shared by every function: there is no local
/// scope. Concurrent runs need one evaluator each.
///
/// ## Usage
///
/// Create one with [`Evaluator::new_run`], then either call
/// [`Evaluator::run`] with the full token sequence, or [`Evaluator::compile`]
/// followed by [`Evaluator::execute`].
pub struct Evaluator<'src, I, O> {
    pub(crate) source:    &'src str,
    pub(crate) stack:     EvaluationStack,
    pub(crate) variables: VariableStore,
    pub(crate) functions: FunctionTable,
    pub(crate) input:     InputBuffer<I>,
    pub(crate) output:    O,
    options:              RunOptions,
    depth:                usize,
}

impl<'src, I: BufRead, O: Write> Evaluator<'src, I, O> {
    /// Creates an evaluator with an empty stack, no variables and no
    /// functions.
    ///
    /// # Parameters
    /// - `source`: The text the tokens were lexed from; spans resolve
    ///   against it.
    /// - `input`: Where `^` reads characters from.
    /// - `output`: Where `.`, `,` and string literals write.
    /// - `options`: Run settings.
    ///
    /// # Example
    /// ```
    /// use falsey::interpreter::{
    ///     evaluator::core::{Evaluator, RunOptions},
    ///     lexer::tokenize,
    /// };
    ///
    /// let source = "[$1+]s: 41s;!.";
    /// let mut evaluator = Evaluator::new_run(source, "".as_bytes(), Vec::new(), RunOptions::default());
    ///
    /// evaluator.run(tokenize(source).unwrap()).unwrap();
    /// assert_eq!(evaluator.stack().depth(), 1);
    /// assert_eq!(evaluator.into_output(), b"42");
    /// ```
    pub fn new_run(source: &'src str, input: I, output: O, options: RunOptions) -> Self {
        Self { source,
               stack: EvaluationStack::default(),
               variables: VariableStore::default(),
               functions: FunctionTable::default(),
               input: InputBuffer::new(input),
               output,
               options,
               depth: 0 }
    }

    /// Hoists every function block out of `tokens` and binds the anonymous
    /// variables that hold their handles.
    ///
    /// # Returns
    /// The flattened top-level token sequence, ready for
    /// [`Evaluator::execute`].
    pub fn compile(&mut self, tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
        let program = hoist(tokens)?;

        for (name, handle) in program.anonymous {
            self.variables.store(name, Variable::function(handle));
        }
        self.functions = program.functions;

        Ok(program.main)
    }

    /// Hoists and executes a whole program, then flushes the output.
    ///
    /// Output written before a failure is still flushed.
    pub fn run(&mut self, tokens: Vec<Token>) -> EvalResult<()> {
        let result = self.compile(tokens)
                         .and_then(|main| self.execute(&main));
        self.output.flush()?;

        match &result {
            Ok(()) => debug!("run finished with stack {}", self.stack),
            Err(e) => debug!("run failed: {e}"),
        }
        result
    }

    /// Executes a token sequence against the shared stores.
    ///
    /// Any error is annotated with the position of the token being executed,
    /// unless an inner token already claimed it.
    pub fn execute(&mut self, tokens: &[Token]) -> EvalResult<()> {
        for token in tokens {
            self.step(token)
                .map_err(|e| e.at(token.line, token.column))?;
        }
        Ok(())
    }

    /// Runs the body of a stored function.
    ///
    /// # Errors
    /// - `NotCallable` if `function` is not flagged as a handle.
    /// - `UndefinedFunction` if no body is stored under the handle.
    /// - `StackOverflow` if the call would exceed the configured depth.
    pub fn call_function(&mut self, function: Number) -> EvalResult<()> {
        if !function.is_function_handle {
            return Err(RuntimeErrorKind::NotCallable { value: function.value }.into());
        }

        let body = self.functions
                       .get(function.value)
                       .ok_or(RuntimeErrorKind::UndefinedFunction { handle: function.value })?;

        if self.depth >= self.options.max_call_depth {
            return Err(RuntimeErrorKind::StackOverflow { limit: self.options.max_call_depth }.into());
        }

        self.depth += 1;
        trace!("enter fn#{} at depth {}", function.value, self.depth);
        let result = self.execute(&body);
        self.depth -= 1;
        result
    }

    /// Executes a single token.
    fn step(&mut self, token: &Token) -> EvalResult<()> {
        match token.kind {
            TokenKind::Number => self.push_number_literal(token),
            TokenKind::Identifier => {
                self.push_reference(token);
                Ok(())
            },
            TokenKind::Colon => self.assign(),
            TokenKind::Semicolon => self.fetch(),
            TokenKind::Exclamation => self.call(),
            TokenKind::Question => self.call_if(),
            TokenKind::Hash => self.call_while(),
            TokenKind::Plus | TokenKind::Minus | TokenKind::Asterisk | TokenKind::Slash => {
                self.eval_arithmetic(token.kind)
            },
            TokenKind::Equals | TokenKind::GreaterThan => self.eval_comparison(token.kind),
            TokenKind::Ampersand | TokenKind::Bar => self.eval_logic(token.kind),
            TokenKind::Tilde => self.eval_not(),
            TokenKind::Underscore => self.eval_negate(),
            TokenKind::Dollar => self.duplicate(),
            TokenKind::Percent => self.discard(),
            TokenKind::Backslash => self.swap(),
            TokenKind::At => self.rotate(),
            TokenKind::Pick => self.pick(),
            TokenKind::Dot => self.print_number(),
            TokenKind::Comma => self.print_character(),
            TokenKind::Literal => self.print_literal(token),
            TokenKind::SectionDump => {
                self.dump_stack();
                Ok(())
            },
            TokenKind::Caret => self.read_character(),
            TokenKind::OpenBracket | TokenKind::CloseBracket | TokenKind::CommentBegin => {
                Err(RuntimeErrorKind::Unsupported { kind: token.kind }.into())
            },
        }
    }

    /// The evaluation stack.
    #[must_use]
    pub const fn stack(&self) -> &EvaluationStack {
        &self.stack
    }

    /// The variable store.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.variables
    }

    /// The function table.
    #[must_use]
    pub const fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    /// Consumes the evaluator and hands back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}
