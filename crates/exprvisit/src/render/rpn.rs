//! Postfix (reverse Polish) rendering

use crate::{BinaryExpr, Dispatch, Literal, UnaryExpr, Variable, Visitor};

/// Renders an expression in postfix order.
///
/// Operands come first (left before right) and the operator last, each token
/// separated by a single space. No parentheses are emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct RpnVisitor;

impl RpnVisitor {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Visitor for RpnVisitor {
    type Output = String;

    fn visit_literal(&mut self, lit: &Literal) -> String {
        super::render_literal(lit)
    }

    fn visit_variable(&mut self, var: &Variable) -> String {
        super::render_variable(var)
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> String {
        format!("{} {}", expr.operand.dispatch(self), expr.op)
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> String {
        let left = expr.left.dispatch(self);
        let right = expr.right.dispatch(self);
        format!("{} {} {}", left, right, expr.op)
    }
}
