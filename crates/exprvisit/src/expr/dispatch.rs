//! Double dispatch from nodes to visitors

use super::{BinaryExpr, Expr, Literal, UnaryExpr, Variable};
use crate::Visitor;

/// Hand a node to the visitor method matching its variant.
///
/// Implementations do nothing but the redirection: they call exactly one
/// `visit_*` method with `self` and return its result unchanged.
pub trait Dispatch {
    /// Invoke the visitor operation for this node.
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output;
}

impl Dispatch for Literal {
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_literal(self)
    }
}

impl Dispatch for Variable {
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_variable(self)
    }
}

impl Dispatch for UnaryExpr {
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_unary(self)
    }
}

impl Dispatch for BinaryExpr {
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        visitor.visit_binary(self)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Dispatch for Expr {
    fn dispatch<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Expr::Literal(node) => node.dispatch(visitor),
            Expr::Variable(node) => node.dispatch(visitor),
            Expr::Unary(node) => node.dispatch(visitor),
            Expr::Binary(node) => node.dispatch(visitor),
        }
    }
}
