/// Tree construction errors.
///
/// Defines all error types that can occur while turning a token sequence into
/// an expression tree: unrecognized tokens in strict mode, operators without
/// enough operands, leftover operands and oversized literals.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a finished
/// tree, such as division by zero or integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
