//! Expression tree
//!
//! Nodes are built bottom-up and never mutated afterwards. Composite nodes
//! own their children through `Box`, so every subtree has exactly one owner
//! and a tree can be walked by any number of visitors.

mod dispatch;

pub use dispatch::Dispatch;

use crate::error::Result;
use crate::{CanonVisitor, EvalContext, RpnVisitor, Shape, ShapeVisitor, Value};

/// A scalar constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The constant; its kind is fixed at construction
    pub value: Value,
}

/// A symbolic reference with no bound value.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// Name of the referenced variable
    pub name: String,
}

/// An operator applied to one operand.
///
/// `op` is an opaque tag: renderers print it as given, the evaluator
/// accepts only `-` and `not`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    /// Operator tag
    pub op: String,
    /// The operand
    pub operand: Box<Expr>,
}

/// An operator applied to two operands.
///
/// The evaluator accepts `+ - * / and or`; any other tag still renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Operator tag
    pub op: String,
    /// Left operand
    pub left: Box<Expr>,
    /// Right operand
    pub right: Box<Expr>,
}

/// Any expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Scalar constant
    Literal(Literal),
    /// Variable reference
    Variable(Variable),
    /// Unary operation
    Unary(UnaryExpr),
    /// Binary operation
    Binary(BinaryExpr),
}

// ═══════════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// Build a literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(Literal {
            value: value.into(),
        })
    }

    /// Build a variable reference.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable { name: name.into() })
    }

    /// Build a unary operation. Any operator tag is accepted.
    pub fn unary(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary(UnaryExpr {
            op: op.into(),
            operand: Box::new(operand),
        })
    }

    /// Build a binary operation. Any operator tag is accepted.
    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            op: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Whether this node has children.
    pub fn is_composite(&self) -> bool {
        matches!(self, Expr::Unary(_) | Expr::Binary(_))
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Visitor Shortcuts
// ═══════════════════════════════════════════════════════════════════════

impl Expr {
    /// Postfix rendering, see [`RpnVisitor`].
    pub fn to_rpn(&self) -> String {
        self.dispatch(&mut RpnVisitor::new())
    }

    /// Fully-parenthesized rendering, see [`CanonVisitor`].
    pub fn to_canonical(&self) -> String {
        self.dispatch(&mut CanonVisitor::new())
    }

    /// Evaluate with default settings, see [`EvalVisitor`](crate::EvalVisitor).
    pub fn evaluate(&self) -> Result<Value> {
        crate::eval::eval_expr(self)
    }

    /// Evaluate with the given context.
    pub fn evaluate_with(&self, ctx: &EvalContext) -> Result<Value> {
        crate::eval::eval_expr_with(self, ctx)
    }

    /// Leaf, composite and depth counts, see [`ShapeVisitor`].
    pub fn shape(&self) -> Shape {
        self.dispatch(&mut ShapeVisitor)
    }
}
