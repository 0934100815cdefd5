use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building an expression tree.
pub enum ParseError {
    /// Found a token that is neither an integer literal nor an operator.
    ///
    /// Only raised by a strict builder; the default builder skips such tokens.
    MalformedInput {
        /// The token encountered.
        token:    String,
        /// Index of the token in the input sequence.
        position: usize,
    },
    /// An operator was folded while fewer than two operands were available.
    StackUnderflow {
        /// The operator that could not be completed.
        operator: Operator,
        /// Index of the token that triggered the fold, or the sequence length
        /// if the fold happened after the last token.
        position: usize,
    },
    /// More than one operand was left over once every operator was folded.
    TrailingOperands {
        /// The number of operands left on the stack.
        count: usize,
    },
    /// An integer literal does not fit into an `i64`.
    LiteralTooLarge {
        /// The offending literal.
        token:    String,
        /// Index of the token in the input sequence.
        position: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedInput { token, position } => {
                write!(f, "Error at token {position}: Unrecognized token '{token}'.")
            },
            Self::StackUnderflow { operator, position } => write!(f,
                                                                  "Error at token {position}: Operator '{operator}' is missing an operand."),
            Self::TrailingOperands { count } => write!(f,
                                                       "Error: {count} operands are left without an operator joining them."),
            Self::LiteralTooLarge { token, position } => {
                write!(f, "Error at token {position}: Literal '{token}' is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
