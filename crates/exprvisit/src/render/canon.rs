//! Fully-parenthesized canonical rendering

use crate::{BinaryExpr, Dispatch, Literal, UnaryExpr, Variable, Visitor};

/// Renders an expression with one pair of parentheses per operation.
///
/// Unary operators precede their operand, binary operators sit between
/// theirs. Parenthesization follows the tree shape, not precedence.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanonVisitor;

impl CanonVisitor {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Visitor for CanonVisitor {
    type Output = String;

    fn visit_literal(&mut self, lit: &Literal) -> String {
        super::render_literal(lit)
    }

    fn visit_variable(&mut self, var: &Variable) -> String {
        super::render_variable(var)
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("({} {})", expr.op, expr.operand.dispatch(self))
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        let left = expr.left.dispatch(self);
        let right = expr.right.dispatch(self);
        format!("({} {} {})", left, expr.op, right)
    }
}
