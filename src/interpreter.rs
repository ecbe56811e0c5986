/// The cursor module tracks a scanning position in source text.
///
/// A cursor walks the source one code point at a time and keeps the line and
/// column of the last consumed character. The lexer uses it both to scan
/// comments and string literals and to locate every token it produces.
pub mod cursor;
/// The evaluator module hoists functions and executes tokens.
///
/// The evaluator first extracts every bracketed block into a function table,
/// then interprets the remaining tokens against the evaluation stack, the
/// variable store and character-oriented input and output. Function calls
/// and loops re-enter the same evaluator.
///
/// # Responsibilities
/// - Rewrites `[...]` blocks into callable function handles.
/// - Executes every operator, validating operand kinds.
/// - Reports runtime errors annotated with the position of the failing
///   token.
pub mod evaluator;
/// The lexer module tokenizes source code.
///
/// The lexer reads the raw source text and lazily produces tokens: single
/// character operators, numbers, identifiers and string literals. Nested
/// comments are skipped and literal text is never copied; tokens reference
/// it by span.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with spans and
///   positions.
/// - Skips comments, whitespace and unrecognized characters.
/// - Reports unmatched or unterminated comments and literals.
pub mod lexer;
/// The evaluation stack.
///
/// A LIFO of tagged values with typed pops, indexed peeks and a
/// non-mutating rendering used for diagnostics.
pub mod stack;
/// The token type shared by the lexer and the evaluator.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values that live on the evaluation stack and in
/// the variable store, along with the integer encoding of booleans.
pub mod value;
