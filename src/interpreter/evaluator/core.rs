use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    interpreter::evaluator::arithmetic::apply,
    tree::ExprTree,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A pending unit of work for [`evaluate_node`].
enum Step<'a> {
    /// Evaluate a subtree and push its value.
    Visit(&'a Node),
    /// Pop two values and combine them.
    Apply(Operator),
}

/// Evaluates the subtree rooted at `node`.
///
/// Leaves yield their value. Operator nodes evaluate their left child, then
/// their right child, and combine both with [`apply`]. The first error
/// encountered in that order is returned.
///
/// The walk keeps its own stack, so a left spine millions of operators deep
/// evaluates without exhausting the thread's stack.
///
/// # Errors
/// - `MissingOperand` if an operator node lacks a child.
/// - Any error produced by [`apply`].
pub fn evaluate_node(node: &Node) -> EvalResult<i64> {
    let mut steps = vec![Step::Visit(node)];
    let mut values: Vec<i64> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Visit(Node::Leaf(value)) => values.push(*value),
            Step::Visit(Node::Operator { op, left, right }) => {
                let (Some(left), Some(right)) = (left, right) else {
                    return Err(RuntimeError::MissingOperand { operator: *op });
                };

                steps.push(Step::Apply(*op));
                steps.push(Step::Visit(right));
                steps.push(Step::Visit(left));
            },
            Step::Apply(op) => {
                let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                    return Err(RuntimeError::MissingOperand { operator: op });
                };
                values.push(apply(op, left, right)?);
            },
        }
    }

    values.pop()
          .ok_or(RuntimeError::MissingOperand { operator: node.operator_tag() })
}

/// Evaluates a whole tree; an empty tree yields `0`.
///
/// # Errors
/// See [`evaluate_node`].
pub fn evaluate(tree: &ExprTree) -> EvalResult<i64> {
    tree.evaluate()
}
