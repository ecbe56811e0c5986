//! # falsey
//!
//! falsey is an interpreter for a minimal, concatenative, stack-based
//! language written in Rust. Programs are strings of single-character
//! operators evaluated in postfix order against one operand stack, with
//! first-class anonymous functions and a flat global variable namespace.
//!
//! ```text
//! [$1=$[\%1\]?~[$1-f;!*]?]f:   { factorial }
//! 6f;!.                        { prints 720 }
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::{Evaluator, RunOptions},
        lexer::tokenize,
    },
};

/// Provides unified error types for lexing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// hoisting or executing a program. Every error that reaches the caller
/// carries the line and column of the character or token that caused it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Renders errors as `"{message} @ line {line}, column {column}"`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the cursor, lexer, token and value types, the
/// evaluation stack and the evaluator. It exposes the public API for
/// tokenizing and executing programs step by step.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, hoisting pass and evaluator.
/// - Provides entry points for tokenizing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Stack values are `i64`; depths, handles and characters are not. The
/// helpers here convert between them without silent truncation.
pub mod util;

/// Runs a program to completion.
///
/// The whole source is tokenized before anything executes, so a lexing error
/// anywhere in the program is reported without any output being produced.
/// Output written before a runtime error is flushed and kept.
///
/// # Parameters
/// - `source`: The program text.
/// - `input`: Where `^` reads characters from.
/// - `output`: Where the program writes.
/// - `options`: Run settings.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Runtime` describing the first failure.
///
/// # Examples
/// ```
/// use falsey::{interpreter::evaluator::core::RunOptions, run};
///
/// let mut output = Vec::new();
/// run("1 2+.", "".as_bytes(), &mut output, RunOptions::default()).unwrap();
/// assert_eq!(output, b"3");
///
/// // Nothing runs if the program does not lex.
/// let mut output = Vec::new();
/// assert!(run("\"hi\" }", "".as_bytes(), &mut output, RunOptions::default()).is_err());
/// assert!(output.is_empty());
/// ```
pub fn run<I: BufRead, O: Write>(source: &str,
                                 input: I,
                                 output: O,
                                 options: RunOptions)
                                 -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let mut evaluator = Evaluator::new_run(source, input, output, options);
    evaluator.run(tokens)?;
    Ok(())
}

/// Runs a program with the given input and returns everything it printed.
///
/// # Errors
/// Returns the first lexing or runtime error. Partial output is discarded;
/// use [`run`] to keep it.
///
/// # Examples
/// ```
/// use falsey::run_to_string;
///
/// assert_eq!(run_to_string("5$*.", "").unwrap(), "25");
/// assert_eq!(run_to_string("^^,,", "ab").unwrap(), "ba");
///
/// let err = run_to_string("1 0/", "").unwrap_err();
/// assert_eq!(err.to_string(), "Division by zero. @ line 1, column 4");
/// ```
pub fn run_to_string(source: &str, input: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    run(source, input.as_bytes(), &mut output, RunOptions::default())?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
