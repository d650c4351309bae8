//! The visitor contract
//!
//! A [`Visitor`] supplies one operation per node variant. Nodes pick the
//! operation through [`Dispatch`](crate::Dispatch), and composite operations
//! recurse by dispatching their children with the same visitor. New
//! algorithms are added by implementing this trait; node code never changes.

use crate::{BinaryExpr, Literal, UnaryExpr, Variable};

/// One operation per expression variant.
///
/// # Example
/// ```
/// use exprvisit::{BinaryExpr, Dispatch, Expr, Literal, UnaryExpr, Variable, Visitor};
///
/// /// Counts variable references.
/// struct VarCounter;
///
/// impl Visitor for VarCounter {
///     type Output = usize;
///
///     fn visit_literal(&mut self, _lit: &Literal) -> usize { 0 }
///     fn visit_variable(&mut self, _var: &Variable) -> usize { 1 }
///     fn visit_unary(&mut self, expr: &UnaryExpr) -> usize {
///         expr.operand.dispatch(self)
///     }
///     fn visit_binary(&mut self, expr: &BinaryExpr) -> usize {
///         expr.left.dispatch(self) + expr.right.dispatch(self)
///     }
/// }
///
/// let expr = Expr::binary("+", Expr::variable("a"), Expr::variable("b"));
/// assert_eq!(expr.dispatch(&mut VarCounter), 2);
/// ```
pub trait Visitor {
    /// Result produced for every node
    type Output;

    /// Visit a literal
    fn visit_literal(&mut self, lit: &Literal) -> Self::Output;

    /// Visit a variable reference
    fn visit_variable(&mut self, var: &Variable) -> Self::Output;

    /// Visit a unary operation; responsible for dispatching the operand
    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output;

    /// Visit a binary operation; responsible for dispatching the operands
    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output;
}
