use crate::{
    ast::{Node, Operator},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Completed subtrees waiting to become the operand of an operator.
#[derive(Debug, Default)]
pub(in crate::interpreter::parser) struct OperandStack {
    inner: Vec<Node>,
}

impl OperandStack {
    pub(in crate::interpreter::parser) const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub(in crate::interpreter::parser) fn push(&mut self, node: Node) {
        self.inner.push(node);
    }

    /// Pops `top` and then `bottom`, attaches them to `operator` as
    /// `bottom op top`, and pushes the result.
    ///
    /// # Errors
    /// Returns `StackUnderflow` if fewer than two operands are available.
    pub(in crate::interpreter::parser) fn fold(&mut self,
                                               mut operator: Node,
                                               position: usize)
                                               -> ParseResult<()> {
        let underflow = || ParseError::StackUnderflow { operator: operator.operator_tag(),
                                                        position };

        let Some(top) = self.inner.pop() else {
            return Err(underflow());
        };
        let Some(bottom) = self.inner.pop() else {
            return Err(underflow());
        };

        operator.set_left_child(bottom);
        operator.set_right_child(top);
        self.inner.push(operator);

        Ok(())
    }

    /// Consumes the stack and returns the finished root.
    ///
    /// # Errors
    /// Returns `TrailingOperands` if more than one operand is left.
    pub(in crate::interpreter::parser) fn into_root(mut self) -> ParseResult<Option<Node>> {
        match self.inner.len() {
            0 | 1 => Ok(self.inner.pop()),
            count => Err(ParseError::TrailingOperands { count }),
        }
    }
}

/// Operators whose right operand has not been read yet.
#[derive(Debug, Default)]
pub(in crate::interpreter::parser) struct OperatorStack {
    inner: Vec<Node>,
}

impl OperatorStack {
    pub(in crate::interpreter::parser) const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    pub(in crate::interpreter::parser) fn push(&mut self, node: Node) {
        self.inner.push(node);
    }

    pub(in crate::interpreter::parser) fn pop(&mut self) -> Option<Node> {
        self.inner.pop()
    }

    /// Pops the top operator if `incoming` ranks less than or equal to it.
    ///
    /// Only the top is inspected; at most one operator is popped per call.
    pub(in crate::interpreter::parser) fn pop_if_outranked(&mut self,
                                                           incoming: Operator)
                                                           -> Option<Node> {
        match self.inner.last() {
            Some(pending) if incoming.rank() <= pending.operator_tag().rank() => self.inner.pop(),
            _ => None,
        }
    }
}
