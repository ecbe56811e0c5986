/// Stack values.
///
/// Defines `StackValue`, the tagged union held by the evaluation stack, and
/// the boolean encoding shared by every comparison and logic operator.
pub mod core;
/// Variables and the variable store.
///
/// Variables live in one flat, global namespace. They are created on first
/// read and always overwritten as a whole.
pub mod variable;
