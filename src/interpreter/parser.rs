/// Tree construction entry points.
///
/// Holds the [`core::TreeBuilder`] and the operator-precedence loop that turns
/// a token sequence into an expression tree.
pub mod core;

/// Operand and operator stacks used during construction.
///
/// Provides the fold step that pops an operator together with its two
/// operands and pushes the completed subtree back as a single operand.
pub mod stack;
