//! Value representation for literals and evaluation results

mod display;
mod impls;

/// Dynamic scalar carried by literals and produced by evaluation.
///
/// The kind is fixed when the value is built; arithmetic between an
/// [`Value::Int`] and a [`Value::Float`] promotes to `Float`, and booleans
/// never take part in arithmetic.
#[derive(Clone, Copy, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),

    /// 64-bit floating point
    Float(f64),

    /// Boolean: `true` or `false`
    Bool(bool),
}
