/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64`, `usize`
/// and `char` without risking silent truncation. Stack values are signed
/// 64-bit integers while stack depths, function handles and character codes
/// each have their own domain; every crossing between them goes through one
/// of these helpers.
pub mod num;
