use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{EvalResult, evaluate_node},
        traversal::{infix, postfix, prefix},
    },
};

/// A binary expression tree.
///
/// The tree owns its root node, and each node owns its children. It is built
/// once by the [`TreeBuilder`](crate::interpreter::parser::core::TreeBuilder)
/// and never modified afterwards.
///
/// An empty tree has no root and a size of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExprTree {
    root: Option<Node>,
    size: usize,
}

impl ExprTree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None,
               size: 0 }
    }

    /// Creates a tree rooted at `root`; the size is counted from the nodes.
    #[must_use]
    pub fn from_root(root: Node) -> Self {
        let size = root.count();
        Self { root: Some(root),
               size }
    }

    pub(crate) fn from_parts(root: Option<Node>, size: usize) -> Self {
        debug_assert_eq!(root.as_ref().map_or(0, Node::count), size);
        Self { root, size }
    }

    /// Returns the root node, or `None` for an empty tree.
    #[must_use]
    pub const fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Returns the number of nodes in the tree.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the tree contains no nodes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Evaluates the whole tree.
    ///
    /// An empty tree evaluates to `0`.
    ///
    /// # Errors
    /// Returns a `RuntimeError` on division by zero or integer overflow.
    ///
    /// # Example
    /// ```
    /// use exprtree::{interpreter::parser::core::build, error::RuntimeError};
    ///
    /// let tree = build(&["3", "+", "4", "*", "2"]).unwrap();
    /// assert_eq!(tree.evaluate(), Ok(14));
    ///
    /// let tree = build(&["10", "/", "0", "+", "1"]).unwrap();
    /// assert_eq!(tree.evaluate(), Err(RuntimeError::DivisionByZero { dividend: 10 }));
    /// ```
    pub fn evaluate(&self) -> EvalResult<i64> {
        self.root.as_ref().map_or(Ok(0), evaluate_node)
    }

    /// Renders the tree in prefix order, e.g. `+23`.
    #[must_use]
    pub fn prefix_order(&self) -> String {
        prefix(self.root.as_ref())
    }

    /// Renders the tree in infix order, e.g. `2+3`.
    #[must_use]
    pub fn infix_order(&self) -> String {
        infix(self.root.as_ref())
    }

    /// Renders the tree in postfix order, e.g. `23+`.
    #[must_use]
    pub fn postfix_order(&self) -> String {
        postfix(self.root.as_ref())
    }
}

impl From<Node> for ExprTree {
    fn from(root: Node) -> Self {
        Self::from_root(root)
    }
}
