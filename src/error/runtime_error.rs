use crate::ast::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression tree.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The dividend of the failed division.
        dividend: i64,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The operator whose result did not fit.
        operator: Operator,
        /// Left operand.
        left:     i64,
        /// Right operand.
        right:    i64,
    },
    /// An operator node is missing one of its children.
    MissingOperand {
        /// The incomplete operator.
        operator: Operator,
    },
    /// An operator node carries the no-operation tag.
    UnknownOperator,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Error: Division by zero while dividing {dividend}.")
            },
            Self::Overflow { operator, left, right } => write!(f,
                                                               "Error: Integer overflow while computing {left} {operator} {right}."),
            Self::MissingOperand { operator } => {
                write!(f, "Error: Operator '{operator}' is missing an operand.")
            },
            Self::UnknownOperator => write!(f, "Error: Cannot evaluate an unknown operator."),
        }
    }
}

impl std::error::Error for RuntimeError {}
