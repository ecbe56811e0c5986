/// Arithmetic, comparison and logic operators.
///
/// Implements the two-operand operators. All of them pop `b`, then `a`, and
/// push a single number.
pub mod binary;

/// Function calls, conditionals and loops.
///
/// Every way of running a stored function body goes through
/// `Evaluator::call_function`, which also enforces the call depth limit.
pub mod control;

/// Function hoisting.
///
/// Turns every bracketed block into an entry of the function table before
/// anything runs, leaving a load-and-fetch of an anonymous variable in its
/// place.
pub mod compile;

/// Core evaluation logic and run state.
///
/// Contains the evaluator, run options, the per-token dispatch and error
/// position annotation.
pub mod core;

/// Character input and output.
pub mod io;

/// Stack manipulation operators: duplicate, drop, swap, rotate, pick and the
/// diagnostic dump.
pub mod stack_ops;

/// Negation and boolean not.
pub mod unary;

/// Number literals, variable references, stores and fetches.
pub mod variables;
