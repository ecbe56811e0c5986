use std::rc::Rc;

use log::debug;

use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, lexer::TokenKind, token::Token},
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

/// Prefix of the variables that hold hoisted function handles.
///
/// Identifiers in source text are made of letters and digits, so a name
/// starting with `[` can never be written by a program and never collides
/// with a user variable.
pub const ANONYMOUS_PREFIX: &str = "[]";

/// Returns the name of the variable that holds the handle of function
/// `handle`.
#[must_use]
pub fn anonymous_name(handle: i64) -> String {
    format!("{ANONYMOUS_PREFIX}{handle}")
}

/// Stored function bodies, indexed by handle.
///
/// Handles are assigned in the order the opening brackets appear, so a
/// table built by [`hoist`] is dense. Bodies are shared rather than copied
/// when a function is entered.
#[derive(Debug, Clone, Default)]
pub struct FunctionTable {
    bodies: Vec<Rc<[Token]>>,
}

impl FunctionTable {
    /// Looks up the body of function `handle`.
    #[must_use]
    pub fn get(&self, handle: i64) -> Option<Rc<[Token]>> {
        let index = i64_to_usize_checked(handle, ()).ok()?;
        self.bodies.get(index).cloned()
    }

    /// Number of stored functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether no functions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl From<Vec<Vec<Token>>> for FunctionTable {
    fn from(bodies: Vec<Vec<Token>>) -> Self {
        Self { bodies: bodies.into_iter().map(Rc::from).collect() }
    }
}

/// The output of the hoisting pass.
#[derive(Debug, Clone, Default)]
pub struct CompiledProgram {
    /// The flattened top-level token sequence.
    pub main:      Vec<Token>,
    /// Every bracketed block, indexed by handle.
    pub functions: FunctionTable,
    /// The anonymous variables to bind before running: name and handle.
    pub anonymous: Vec<(String, i64)>,
}

/// Extracts every `[...]` block into a function table.
///
/// Each block is replaced, in its enclosing sequence, by an identifier
/// naming an anonymous variable followed by a fetch. Once that variable is
/// bound to the block's handle, running the replacement leaves the callable
/// handle on the stack, exactly where the block stood. Blocks nested inside
/// another block are replaced inside the enclosing body, so their handle is
/// fetched each time the outer function runs.
///
/// This is a pure transform: it does not touch any runtime state.
///
/// # Errors
/// - `UnmatchedFunctionClose` at a `]` with no open block.
/// - `UnclosedFunction` at the innermost `[` still open at the end.
///
/// # Example
/// ```
/// use falsey::interpreter::{
///     evaluator::compile::{anonymous_name, hoist},
///     lexer::{TokenKind, tokenize},
/// };
///
/// let source = "[1[2]]!";
/// let program = hoist(tokenize(source).unwrap()).unwrap();
///
/// assert_eq!(program.functions.len(), 2);
/// assert_eq!(program.anonymous,
///            vec![(anonymous_name(1), 1), (anonymous_name(0), 0)]);
///
/// let kinds: Vec<_> = program.main.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Identifier, TokenKind::Semicolon, TokenKind::Exclamation]);
/// assert_eq!(program.main[0].lexeme(source), anonymous_name(0));
///
/// // The inner block's load and fetch live inside the outer body.
/// let outer = program.functions.get(0).unwrap();
/// assert_eq!(outer.len(), 3);
/// assert_eq!(outer[1].lexeme(source), anonymous_name(1));
/// ```
pub fn hoist(tokens: Vec<Token>) -> EvalResult<CompiledProgram> {
    let mut main = Vec::new();
    let mut bodies: Vec<Vec<Token>> = Vec::new();
    let mut open: Vec<(usize, Token)> = Vec::new();
    let mut anonymous = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::OpenBracket => {
                open.push((bodies.len(), token));
                bodies.push(Vec::new());
            },
            TokenKind::CloseBracket => {
                let Some((index, _)) = open.pop() else {
                    return Err(RuntimeError::from(RuntimeErrorKind::UnmatchedFunctionClose).at(token.line,
                                                                                                token.column));
                };

                let handle = usize_to_i64_checked(index, RuntimeErrorKind::Overflow)?;
                let name = anonymous_name(handle);
                let target = match open.last() {
                    Some(&(outer, _)) => &mut bodies[outer],
                    None => &mut main,
                };

                target.push(Token::synthetic(TokenKind::Identifier,
                                             name.clone(),
                                             token.line,
                                             token.column));
                target.push(Token::synthetic(TokenKind::Semicolon, ";", token.line, token.column));
                anonymous.push((name, handle));
            },
            _ => match open.last() {
                Some(&(index, _)) => bodies[index].push(token),
                None => main.push(token),
            },
        }
    }

    if let Some((_, token)) = open.last() {
        return Err(RuntimeError::from(RuntimeErrorKind::UnclosedFunction).at(token.line,
                                                                             token.column));
    }

    debug!("hoisted {} function(s), {} top-level token(s)",
           bodies.len(),
           main.len());

    Ok(CompiledProgram { main,
                         functions: FunctionTable::from(bodies),
                         anonymous })
}
