//! Unary operation evaluation

use crate::error::Unsupported;
use crate::{EvalError, UnaryExpr, Value};

use super::EvalVisitor;

/// Unary operators the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// Arithmetic negation, `-`
    Neg,
    /// Logical negation, `not`
    Not,
}

impl UnaryOp {
    /// Recognize an operator tag. Matching is exact and case-sensitive.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "-" => Some(UnaryOp::Neg),
            "not" => Some(UnaryOp::Not),
            _ => None,
        }
    }

    /// The operator tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
        }
    }
}

impl EvalVisitor {
    pub(super) fn eval_unary(&mut self, expr: &UnaryExpr) -> Result<Value, EvalError> {
        let op = UnaryOp::parse(&expr.op)
            .ok_or_else(|| Unsupported::UnaryOperator(expr.op.clone()))?;
        let operand = self.eval_child(&expr.operand)?;

        match op {
            UnaryOp::Neg => eval_neg(operand),
            UnaryOp::Not => Ok(eval_not(operand)),
        }
    }
}

/// Evaluate arithmetic negation (`-x`).
pub(crate) fn eval_neg(operand: Value) -> Result<Value, EvalError> {
    match operand {
        Value::Int(n) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| EvalError::IntegerOverflow { op: "-".to_string() }),

        // Floats (no overflow for negation)
        Value::Float(x) => Ok(Value::Float(-x)),

        other => Err(EvalError::unary_operand("-", &other)),
    }
}

/// Evaluate logical negation (`not x`). Always yields a boolean.
pub(crate) fn eval_not(operand: Value) -> Value {
    Value::Bool(!operand.is_truthy())
}
