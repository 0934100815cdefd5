use crate::{ast::Node, tree::ExprTree};

/// Position of a node's own label relative to its children.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Order {
    /// Label, left subtree, right subtree.
    Prefix,
    /// Left subtree, label, right subtree.
    Infix,
    /// Left subtree, right subtree, label.
    Postfix,
}

/// Renders the subtree rooted at `node` in the given order.
///
/// Labels are concatenated without separators. A missing node contributes
/// nothing, so `None` renders as the empty string.
///
/// # Example
/// ```
/// use exprtree::{
///     ast::Node,
///     interpreter::traversal::{Order, render},
/// };
///
/// let mut plus = Node::operator("+");
/// plus.set_left_child(Node::leaf(2));
/// plus.set_right_child(Node::leaf(3));
///
/// assert_eq!(render(Some(&plus), Order::Prefix), "+23");
/// assert_eq!(render(Some(&plus), Order::Infix), "2+3");
/// assert_eq!(render(Some(&plus), Order::Postfix), "23+");
/// assert_eq!(render(None, Order::Infix), "");
/// ```
#[must_use]
pub fn render(node: Option<&Node>, order: Order) -> String {
    let mut out = String::new();
    walk(node, order, &mut out);
    out
}

enum Step<'a> {
    Visit(&'a Node),
    Emit(&'a Node),
}

fn walk(node: Option<&Node>, order: Order, out: &mut String) {
    let mut steps: Vec<Step<'_>> = node.map(Step::Visit).into_iter().collect();

    while let Some(step) = steps.pop() {
        let node = match step {
            Step::Emit(node) => {
                out.push_str(&node.to_string());
                continue;
            },
            Step::Visit(node) => node,
        };

        // Pushed in reverse: the last step pushed runs first.
        if order == Order::Postfix {
            steps.push(Step::Emit(node));
        }
        steps.extend(node.right_child().map(Step::Visit));
        if order == Order::Infix {
            steps.push(Step::Emit(node));
        }
        steps.extend(node.left_child().map(Step::Visit));
        if order == Order::Prefix {
            steps.push(Step::Emit(node));
        }
    }
}

/// Renders the subtree rooted at `node` in prefix order.
#[must_use]
pub fn prefix(node: Option<&Node>) -> String {
    render(node, Order::Prefix)
}

/// Renders the subtree rooted at `node` in infix order.
#[must_use]
pub fn infix(node: Option<&Node>) -> String {
    render(node, Order::Infix)
}

/// Renders the subtree rooted at `node` in postfix order.
#[must_use]
pub fn postfix(node: Option<&Node>) -> String {
    render(node, Order::Postfix)
}

/// Renders a whole tree in prefix order.
#[must_use]
pub fn prefix_order(tree: &ExprTree) -> String {
    prefix(tree.root())
}

/// Renders a whole tree in infix order.
#[must_use]
pub fn infix_order(tree: &ExprTree) -> String {
    infix(tree.root())
}

/// Renders a whole tree in postfix order.
#[must_use]
pub fn postfix_order(tree: &ExprTree) -> String {
    postfix(tree.root())
}
