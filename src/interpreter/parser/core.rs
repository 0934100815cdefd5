use tracing::{debug, trace};

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Token, classify},
        parser::stack::{OperandStack, OperatorStack},
    },
    tree::ExprTree,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Builds expression trees from token sequences.
///
/// The builder runs a two-stack operator-precedence construction. Integer
/// literals are pushed onto an operand stack. Each operator first folds the
/// operator pending on top of the operator stack, if its rank is less than or
/// equal to that one's, and is then pushed itself. Because all operators share
/// one rank, every operator folds its predecessor and the resulting tree groups
/// strictly left to right.
///
/// A lenient builder (the default) skips words that are neither integers nor
/// operators. A strict builder rejects them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    strict: bool,
}

impl TreeBuilder {
    /// Creates a lenient builder that skips unrecognized tokens.
    #[must_use]
    pub const fn new() -> Self {
        Self { strict: false }
    }

    /// Creates a builder that fails with `MalformedInput` on unrecognized
    /// tokens.
    #[must_use]
    pub const fn strict() -> Self {
        Self { strict: true }
    }

    /// Returns `true` if this builder rejects unrecognized tokens.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Builds a tree from an ordered token sequence.
    ///
    /// # Parameters
    /// - `tokens`: Words as produced by
    ///   [`tokenize`](crate::interpreter::lexer::tokenize).
    ///
    /// # Returns
    /// The finished tree. An empty sequence, or one without any valid token,
    /// yields an empty tree.
    ///
    /// # Errors
    /// - `StackUnderflow` if an operator lacks an operand, e.g. `+ 3` or
    ///   `3 + + 4`.
    /// - `TrailingOperands` if operands are left without an operator, e.g.
    ///   `3 4`.
    /// - `LiteralTooLarge` if a literal does not fit into an `i64`.
    /// - `MalformedInput` for unrecognized tokens, in strict mode only.
    ///
    /// # Example
    /// ```
    /// use exprtree::interpreter::parser::core::TreeBuilder;
    ///
    /// let tree = TreeBuilder::new().build(&["3", "+", "4", "*", "2"]).unwrap();
    /// assert_eq!(tree.size(), 5);
    /// assert_eq!(tree.prefix_order(), "*+342");
    ///
    /// assert!(TreeBuilder::strict().build(&["3", "+", "x"]).is_err());
    /// ```
    pub fn build<S: AsRef<str>>(&self, tokens: &[S]) -> ParseResult<ExprTree> {
        let mut operands = OperandStack::new();
        let mut operators = OperatorStack::new();
        let mut size = 0;

        for (position, word) in tokens.iter().map(AsRef::as_ref).enumerate() {
            match classify(word) {
                Some(Token::Number(digits)) => {
                    let value =
                        digits.parse::<i64>()
                              .map_err(|_| ParseError::LiteralTooLarge { token: digits.clone(),
                                                                         position })?;
                    trace!(position, value, "pushing operand");
                    operands.push(Node::leaf(value));
                    size += 1;
                },
                Some(token) if token.is_operator() => {
                    let incoming = Node::operator(word);

                    if let Some(pending) = operators.pop_if_outranked(incoming.operator_tag()) {
                        trace!(position, pending = %pending, incoming = %incoming, "folding pending operator");
                        operands.fold(pending, position)?;
                    }

                    operators.push(incoming);
                    size += 1;
                },
                _ if self.strict => {
                    return Err(ParseError::MalformedInput { token: word.to_string(),
                                                            position });
                },
                _ => debug!(position, token = word, "skipping unrecognized token"),
            }
        }

        while let Some(pending) = operators.pop() {
            trace!(pending = %pending, "folding remaining operator");
            operands.fold(pending, tokens.len())?;
        }

        let root = operands.into_root()?;
        debug!(size, "built expression tree");

        Ok(ExprTree::from_parts(root, size))
    }
}

/// Builds a tree with a lenient [`TreeBuilder`].
///
/// # Errors
/// See [`TreeBuilder::build`].
///
/// # Example
/// ```
/// use exprtree::interpreter::parser::core::build;
///
/// let tree = build(&["5"]).unwrap();
/// assert_eq!(tree.size(), 1);
/// assert_eq!(tree.infix_order(), "5");
///
/// let empty = build::<&str>(&[]).unwrap();
/// assert!(empty.is_empty());
/// ```
pub fn build<S: AsRef<str>>(tokens: &[S]) -> ParseResult<ExprTree> {
    TreeBuilder::new().build(tokens)
}
