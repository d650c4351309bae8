//! Error types for expression evaluation

use thiserror::Error;

use crate::Value;

/// Main error type for evaluation.
///
/// Only the evaluator produces these; the renderers are total.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A node or operator the evaluator does not handle
    #[error(transparent)]
    UnsupportedFeature(#[from] Unsupported),

    /// Division with a zero divisor
    #[error("Arithmetic error: division by zero in `{op}`")]
    DivisionByZero {
        /// Operator that was applied
        op: String,
    },

    /// Integer result out of range
    #[error("Arithmetic error: integer overflow in `{op}`")]
    IntegerOverflow {
        /// Operator that overflowed
        op: String,
    },

    /// Unary operator applied to an operand of the wrong kind
    #[error("Type error: cannot apply `{op}` to {operand_type}")]
    InvalidUnaryOperand {
        /// Operator
        op: String,
        /// Kind of the operand
        operand_type: String,
    },

    /// Binary operator applied to operands of the wrong kinds
    #[error("Type error: cannot apply `{op}` to {left_type} and {right_type}")]
    InvalidBinaryOperands {
        /// Operator
        op: String,
        /// Kind of the left operand
        left_type: String,
        /// Kind of the right operand
        right_type: String,
    },

    /// Tree nested deeper than the configured limit
    #[error("Recursion limit of {limit} exceeded")]
    RecursionLimit {
        /// Configured maximum depth
        limit: usize,
    },
}

/// Features the evaluator rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// Variable lookup; there is no environment to bind names in.
    #[error("not supported yet")]
    Variable {
        /// Name of the variable that was dispatched
        name: String,
    },

    /// Unary operator tag outside `-` and `not`
    #[error("unsupported unary operator: {0}")]
    UnaryOperator(String),

    /// Binary operator tag outside `+ - * / and or`
    #[error("unsupported binary operator: {0}")]
    BinaryOperator(String),
}

/// Coarse classification of an [`EvalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Variables and unknown operators
    UnsupportedFeature,
    /// Division by zero and overflow
    Arithmetic,
    /// Operand kinds incompatible with the operator
    TypeMismatch,
    /// Evaluation limits from [`crate::EvalContext`]
    ResourceLimit,
}

impl EvalError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvalError::UnsupportedFeature(_) => ErrorKind::UnsupportedFeature,
            EvalError::DivisionByZero { .. } | EvalError::IntegerOverflow { .. } => {
                ErrorKind::Arithmetic
            }
            EvalError::InvalidUnaryOperand { .. } | EvalError::InvalidBinaryOperands { .. } => {
                ErrorKind::TypeMismatch
            }
            EvalError::RecursionLimit { .. } => ErrorKind::ResourceLimit,
        }
    }

    pub(crate) fn unary_operand(op: &str, operand: &Value) -> Self {
        EvalError::InvalidUnaryOperand {
            op: op.to_string(),
            operand_type: type_name(operand).to_string(),
        }
    }

    pub(crate) fn binary_operands(op: &str, left: &Value, right: &Value) -> Self {
        EvalError::InvalidBinaryOperands {
            op: op.to_string(),
            left_type: type_name(left).to_string(),
            right_type: type_name(right).to_string(),
        }
    }
}

/// Result type alias for evaluation
pub type Result<T> = std::result::Result<T, EvalError>;

/// Human-readable name of a value's kind, used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Bool(_) => "bool",
    }
}
