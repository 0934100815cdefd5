/// Represents an arithmetic operator tag carried by an operator node.
///
/// `NoOp` stands in for any symbol that is not one of the four supported
/// operators. It never comes out of the tree builder, but a node created by
/// hand from an unknown symbol carries it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unrecognized symbol.
    NoOp,
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Times,
    /// Integer division (`/`)
    Divide,
}

impl Operator {
    /// Maps an operator symbol to its tag.
    ///
    /// Anything other than `+`, `-`, `*` or `/` maps to [`Operator::NoOp`].
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("*"), Operator::Times);
    /// assert_eq!(Operator::from_symbol("%"), Operator::NoOp);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Self {
        match symbol {
            "+" => Self::Plus,
            "-" => Self::Minus,
            "*" => Self::Times,
            "/" => Self::Divide,
            _ => Self::NoOp,
        }
    }

    /// Returns the symbol used when rendering the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::NoOp => "",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Times => "*",
            Self::Divide => "/",
        }
    }

    /// Returns the precedence rank used during tree construction.
    ///
    /// All operators share one rank. Combined with the `<=` comparison in the
    /// builder, every incoming operator folds the pending one, so `3 + 4 * 2`
    /// groups as `(3 + 4) * 2`.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::NoOp | Self::Plus | Self::Minus | Self::Times | Self::Divide => 1,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of a binary expression tree.
///
/// A node is either a leaf holding an integer literal, or an operator owning
/// its two children. Children are optional so that they can be attached one
/// at a time; in a tree produced by the builder every operator node has both.
///
/// Trees built from long expressions are deep left spines, so cloning,
/// comparing and dropping walk the nodes with an explicit stack.
#[derive(Debug)]
pub enum Node {
    /// An integer literal.
    Leaf(i64),
    /// An arithmetic operation.
    Operator {
        /// The operator tag.
        op:    Operator,
        /// Left operand.
        left:  Option<Box<Self>>,
        /// Right operand.
        right: Option<Box<Self>>,
    },
}

impl Node {
    /// Creates a leaf node holding `value`.
    #[must_use]
    pub const fn leaf(value: i64) -> Self {
        Self::Leaf(value)
    }

    /// Creates a childless operator node for `symbol`.
    ///
    /// # Example
    /// ```
    /// use exprtree::ast::{Node, Operator};
    ///
    /// let node = Node::operator("-");
    /// assert_eq!(node.operator_tag(), Operator::Minus);
    /// assert!(node.left_child().is_none());
    /// ```
    #[must_use]
    pub fn operator(symbol: &str) -> Self {
        Self::from_operator(Operator::from_symbol(symbol))
    }

    /// Creates a childless operator node from an existing tag.
    #[must_use]
    pub const fn from_operator(op: Operator) -> Self {
        Self::Operator { op,
                         left: None,
                         right: None }
    }

    /// Attaches `child` as the left child, replacing any previous one.
    ///
    /// Leaves have no children; the call is ignored for them.
    pub fn set_left_child(&mut self, child: Self) {
        if let Self::Operator { left, .. } = self {
            *left = Some(Box::new(child));
        }
    }

    /// Attaches `child` as the right child, replacing any previous one.
    ///
    /// Leaves have no children; the call is ignored for them.
    pub fn set_right_child(&mut self, child: Self) {
        if let Self::Operator { right, .. } = self {
            *right = Some(Box::new(child));
        }
    }

    /// Returns the left child, if any.
    #[must_use]
    pub fn left_child(&self) -> Option<&Self> {
        match self {
            Self::Operator { left, .. } => left.as_deref(),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the right child, if any.
    #[must_use]
    pub fn right_child(&self) -> Option<&Self> {
        match self {
            Self::Operator { right, .. } => right.as_deref(),
            Self::Leaf(_) => None,
        }
    }

    /// Returns the operator tag; leaves report [`Operator::NoOp`].
    #[must_use]
    pub const fn operator_tag(&self) -> Operator {
        match self {
            Self::Operator { op, .. } => *op,
            Self::Leaf(_) => Operator::NoOp,
        }
    }

    /// Returns the stored literal; operator nodes report `0`.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            Self::Leaf(value) => *value,
            Self::Operator { .. } => 0,
        }
    }

    /// Returns `true` for leaf nodes.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Counts the nodes of the subtree rooted here, this node included.
    #[must_use]
    pub fn count(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;

        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.left_child());
            pending.extend(node.right_child());
        }

        count
    }

    fn take_children(&mut self) -> impl Iterator<Item = Box<Self>> + use<> {
        let (left, right) = match self {
            Self::Operator { left, right, .. } => (left.take(), right.take()),
            Self::Leaf(_) => (None, None),
        };
        left.into_iter().chain(right)
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Self>> = self.take_children().collect();

        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        enum Step<'a> {
            Visit(&'a Node),
            Assemble {
                op:        Operator,
                has_left:  bool,
                has_right: bool,
            },
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<Self> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Self::Leaf(value)) => built.push(Self::Leaf(*value)),
                Step::Visit(Self::Operator { op, left, right }) => {
                    steps.push(Step::Assemble { op:        *op,
                                                has_left:  left.is_some(),
                                                has_right: right.is_some(), });
                    if let Some(right) = right {
                        steps.push(Step::Visit(right));
                    }
                    if let Some(left) = left {
                        steps.push(Step::Visit(left));
                    }
                },
                Step::Assemble { op, has_left, has_right } => {
                    let right = if has_right { built.pop() } else { None };
                    let left = if has_left { built.pop() } else { None };
                    built.push(Self::Operator { op,
                                                left: left.map(Box::new),
                                                right: right.map(Box::new) });
                },
            }
        }

        built.pop().unwrap_or_else(|| unreachable!("every visit assembles one node"))
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Self::Leaf(a), Self::Leaf(b)) if a == b => {},
                (Self::Operator { op: a_op,
                                  left: a_left,
                                  right: a_right, },
                 Self::Operator { op: b_op,
                                  left: b_left,
                                  right: b_right, }) if a_op == b_op => {
                    for children in [(a_left, b_left), (a_right, b_right)] {
                        match children {
                            (Some(a), Some(b)) => pending.push((&**a, &**b)),
                            (None, None) => {},
                            _ => return false,
                        }
                    }
                },
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Node {}

impl std::fmt::Display for Node {
    /// Writes the node's own label: its operator symbol, or the decimal
    /// digits of its value.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(value) => write!(f, "{value}"),
            Self::Operator { op, .. } => write!(f, "{op}"),
        }
    }
}
