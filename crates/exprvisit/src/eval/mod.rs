//! Expression evaluation

pub mod binary;
pub mod unary;

pub use binary::BinaryOp;
pub use unary::UnaryOp;

use crate::error::Unsupported;
use crate::{
    BinaryExpr, Dispatch, EvalContext, EvalError, Expr, Literal, UnaryExpr, Value, Variable,
    Visitor,
};

/// Evaluates an expression to a [`Value`].
///
/// Operands are evaluated eagerly, left before right, except for `and` and
/// `or`, which stop after the left operand when it decides the result.
/// Variables always fail: there is no environment to look them up in.
///
/// The only state is the current nesting depth, which is restored on the way
/// back up, so one evaluator can be reused for any number of trees.
#[derive(Debug, Clone, Default)]
pub struct EvalVisitor {
    ctx: EvalContext,
    depth: usize,
}

impl EvalVisitor {
    /// Create an evaluator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with the given context.
    pub fn with_context(ctx: EvalContext) -> Self {
        Self { ctx, depth: 0 }
    }

    /// The context this evaluator runs with.
    pub fn context(&self) -> &EvalContext {
        &self.ctx
    }

    /// Evaluate a child node one level deeper.
    fn eval_child(&mut self, child: &Expr) -> Result<Value, EvalError> {
        if self.depth >= self.ctx.max_depth {
            return Err(EvalError::RecursionLimit {
                limit: self.ctx.max_depth,
            });
        }

        self.depth += 1;
        let result = child.dispatch(self);
        self.depth -= 1;
        result
    }

    fn trace_node(&self, node: &str, detail: &str) {
        if self.ctx.trace {
            tracing::trace!(depth = self.depth, node, detail, "eval");
        }
    }
}

impl Visitor for EvalVisitor {
    type Output = Result<Value, EvalError>;

    fn visit_literal(&mut self, lit: &Literal) -> Self::Output {
        self.trace_node("literal", &lit.value.to_string());
        Ok(lit.value)
    }

    fn visit_variable(&mut self, var: &Variable) -> Self::Output {
        self.trace_node("variable", &var.name);
        tracing::debug!(name = %var.name, "variable evaluation is not supported");
        Err(Unsupported::Variable {
            name: var.name.clone(),
        }
        .into())
    }

    fn visit_unary(&mut self, expr: &UnaryExpr) -> Self::Output {
        self.trace_node("unary", &expr.op);
        let result = self.eval_unary(expr);
        if let Err(err) = &result {
            tracing::debug!(op = %expr.op, error = %err, "unary evaluation failed");
        }
        result
    }

    fn visit_binary(&mut self, expr: &BinaryExpr) -> Self::Output {
        self.trace_node("binary", &expr.op);
        let result = self.eval_binary(expr);
        if let Err(err) = &result {
            tracing::debug!(op = %expr.op, error = %err, "binary evaluation failed");
        }
        result
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression with default settings.
#[tracing::instrument(level = "debug", skip_all)]
pub fn eval_expr(expr: &Expr) -> Result<Value, EvalError> {
    expr.dispatch(&mut EvalVisitor::new())
}

/// Evaluate an expression with the given context.
#[tracing::instrument(level = "debug", skip_all, fields(max_depth = ctx.max_depth))]
pub fn eval_expr_with(expr: &Expr, ctx: &EvalContext) -> Result<Value, EvalError> {
    expr.dispatch(&mut EvalVisitor::with_context(ctx.clone()))
}
