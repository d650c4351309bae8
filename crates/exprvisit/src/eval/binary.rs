//! Binary operation evaluation

use crate::error::Unsupported;
use crate::{BinaryExpr, EvalError, Expr, Value};

use super::EvalVisitor;

/// Binary operators the evaluator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// Short-circuit `and`
    And,
    /// Short-circuit `or`
    Or,
}

impl BinaryOp {
    /// Recognize an operator tag. Matching is exact and case-sensitive.
    pub fn parse(op: &str) -> Option<Self> {
        match op {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "and" => Some(BinaryOp::And),
            "or" => Some(BinaryOp::Or),
            _ => None,
        }
    }

    /// The operator tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl EvalVisitor {
    pub(super) fn eval_binary(&mut self, expr: &BinaryExpr) -> Result<Value, EvalError> {
        // The operator decides how many operands get evaluated
        let op = BinaryOp::parse(&expr.op)
            .ok_or_else(|| Unsupported::BinaryOperator(expr.op.clone()))?;

        match op {
            BinaryOp::And => self.eval_and(&expr.left, &expr.right),
            BinaryOp::Or => self.eval_or(&expr.left, &expr.right),
            _ => {
                let left = self.eval_child(&expr.left)?;
                let right = self.eval_child(&expr.right)?;
                eval_arith(op, left, right)
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Short-Circuit Logical Operators
    // ═══════════════════════════════════════════════════════════════════

    fn eval_and(&mut self, left: &Expr, right: &Expr) -> Result<Value, EvalError> {
        let left_val = self.eval_child(left)?;
        if !left_val.is_truthy() {
            return Ok(left_val); // Short-circuit
        }
        self.eval_child(right)
    }

    fn eval_or(&mut self, left: &Expr, right: &Expr) -> Result<Value, EvalError> {
        let left_val = self.eval_child(left)?;
        if left_val.is_truthy() {
            return Ok(left_val); // Short-circuit
        }
        self.eval_child(right)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

/// Apply an arithmetic operator, promoting mixed int/float operands to float.
pub(crate) fn eval_arith(op: BinaryOp, left: Value, right: Value) -> Result<Value, EvalError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int(op, a, b),
        (Value::Float(a), Value::Float(b)) => eval_float(op, a, b),
        (Value::Int(a), Value::Float(b)) => eval_float(op, a as f64, b),
        (Value::Float(a), Value::Int(b)) => eval_float(op, a, b as f64),
        (left, right) => Err(EvalError::binary_operands(op.as_str(), &left, &right)),
    }
}

fn eval_int(op: BinaryOp, a: i64, b: i64) -> Result<Value, EvalError> {
    let result = match op {
        BinaryOp::Add => a.checked_add(b),
        BinaryOp::Sub => a.checked_sub(b),
        BinaryOp::Mul => a.checked_mul(b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero(op));
            }
            // `/` is true division even between integers
            return Ok(Value::Float(a as f64 / b as f64));
        }
        BinaryOp::And | BinaryOp::Or => {
            return Err(EvalError::binary_operands(
                op.as_str(),
                &Value::Int(a),
                &Value::Int(b),
            ));
        }
    };

    result.map(Value::Int).ok_or_else(|| EvalError::IntegerOverflow {
        op: op.as_str().to_string(),
    })
}

fn eval_float(op: BinaryOp, a: f64, b: f64) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Add => Ok(Value::Float(a + b)),
        BinaryOp::Sub => Ok(Value::Float(a - b)),
        BinaryOp::Mul => Ok(Value::Float(a * b)),
        BinaryOp::Div if b == 0.0 => Err(division_by_zero(op)),
        BinaryOp::Div => Ok(Value::Float(a / b)),
        BinaryOp::And | BinaryOp::Or => Err(EvalError::binary_operands(
            op.as_str(),
            &Value::Float(a),
            &Value::Float(b),
        )),
    }
}

fn division_by_zero(op: BinaryOp) -> EvalError {
    EvalError::DivisionByZero {
        op: op.as_str().to_string(),
    }
}
