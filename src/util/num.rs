use crate::{
    error::RuntimeErrorKind,
    interpreter::evaluator::core::EvalResult,
};

/// Safely converts an `i64` to `usize` if it is non-negative and in range.
///
/// ## Errors
/// Returns `Err(error)` for negative values and values above `usize::MAX`.
///
/// ## Example
/// ```
/// use falsey::util::num::i64_to_usize_checked;
///
/// assert_eq!(i64_to_usize_checked(42, "negative!"), Ok(42));
/// assert_eq!(i64_to_usize_checked(-1, "negative!"), Err("negative!"));
/// ```
pub fn i64_to_usize_checked<E>(value: i64, error: E) -> Result<usize, E> {
    usize::try_from(value).map_err(|_| error)
}

/// Safely converts a `usize` to `i64`.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `i64::MAX`.
pub fn usize_to_i64_checked<E>(value: usize, error: E) -> Result<i64, E> {
    i64::try_from(value).map_err(|_| error)
}

/// Converts a `usize` to `i64`, clamping at `i64::MAX`.
///
/// Only used to report sizes in error messages, where an exact value past
/// `i64::MAX` carries no extra information.
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Converts a stack value to the character it encodes.
///
/// ## Errors
/// Returns `RuntimeErrorKind::InvalidCharacter` for negative values,
/// surrogates and values past `char::MAX`.
///
/// ## Example
/// ```
/// use falsey::util::num::i64_to_char_checked;
///
/// assert_eq!(i64_to_char_checked(72).unwrap(), 'H');
/// assert!(i64_to_char_checked(-1).is_err());
/// assert!(i64_to_char_checked(0xD800).is_err());
/// ```
pub fn i64_to_char_checked(value: i64) -> EvalResult<char> {
    u32::try_from(value).ok()
                        .and_then(char::from_u32)
                        .ok_or_else(|| RuntimeErrorKind::InvalidCharacter { value }.into())
}

/// Parses the text of a number token.
///
/// ## Errors
/// Returns `RuntimeErrorKind::NumberOutOfRange` if the digits do not fit in
/// an `i64`.
///
/// ## Example
/// ```
/// use falsey::util::num::parse_number_literal;
///
/// assert_eq!(parse_number_literal("0042").unwrap(), 42);
/// assert!(parse_number_literal("99999999999999999999").is_err());
/// ```
pub fn parse_number_literal(literal: &str) -> EvalResult<i64> {
    literal.parse()
           .map_err(|_| RuntimeErrorKind::NumberOutOfRange { literal: literal.to_owned() }.into())
}
