//! Structural statistics of an expression tree

use crate::{BinaryExpr, Dispatch, Literal, UnaryExpr, Variable, Visitor};

/// Counts gathered by [`ShapeVisitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Shape {
    /// Literals and variables
    pub leaves: usize,
    /// Unary and binary operations
    pub composites: usize,
    /// Nodes on the longest root-to-leaf path
    pub depth: usize,
}

impl Shape {
    /// Total number of nodes.
    pub fn nodes(&self) -> usize {
        self.leaves + self.composites
    }

    fn leaf() -> Self {
        Shape {
            leaves: 1,
            composites: 0,
            depth: 1,
        }
    }

    fn parent_of(children: &[Shape]) -> Self {
        children.iter().fold(
            Shape {
                leaves: 0,
                composites: 1,
                depth: 1,
            },
            |acc, child| Shape {
                leaves: acc.leaves + child.leaves,
                composites: acc.composites + child.composites,
                depth: acc.depth.max(child.depth + 1),
            },
        )
    }
}

/// Walks the whole tree and reports its [`Shape`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ShapeVisitor;

impl Visitor for ShapeVisitor {
    type Output = Shape;

    fn visit_literal(&mut self, _lit: &Literal) -> Shape {
        Shape::leaf()
    }

    fn visit_variable(&mut self, _var: &Variable) -> Shape {
        Shape::leaf()
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> Shape {
        Shape::parent_of(&[expr.operand.dispatch(self)])
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Shape {
        let left = expr.left.dispatch(self);
        let right = expr.right.dispatch(self);
        Shape::parent_of(&[left, right])
    }
}
