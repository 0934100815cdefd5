/// Core evaluation logic.
///
/// Walks the tree recursively, evaluating the left subtree before the right
/// one, and propagates the first failure to the caller.
pub mod core;

/// Integer arithmetic.
///
/// Applies a single operator to two evaluated operands with overflow and
/// division-by-zero checks.
pub mod arithmetic;
