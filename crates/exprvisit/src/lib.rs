//! # exprvisit
//!
//! Immutable expression trees walked by interchangeable visitors.
//!
//! A tree is built from four node kinds ([`Literal`], [`Variable`],
//! [`UnaryExpr`], [`BinaryExpr`]) and handed to a [`Visitor`] through
//! [`Dispatch`]. The node picks the visitor operation for its own kind and
//! the visitor recurses into children the same way, so algorithms can be
//! added without touching node code.
//!
//! ## Visitors
//!
//! - [`RpnVisitor`]: postfix rendering, `1 2 3 * + 4 +`
//! - [`CanonVisitor`]: fully-parenthesized rendering, `((1 + (2 * 3)) + 4)`
//! - [`EvalVisitor`]: evaluation to a [`Value`], `11`
//! - [`ShapeVisitor`]: leaf, composite and depth counts
//!
//! ```
//! use exprvisit::{Dispatch, EvalVisitor, Expr, Value};
//!
//! let expr = Expr::binary(
//!     "+",
//!     Expr::binary(
//!         "+",
//!         Expr::literal(1),
//!         Expr::binary("*", Expr::literal(2), Expr::literal(3)),
//!     ),
//!     Expr::literal(4),
//! );
//!
//! assert_eq!(expr.to_canonical(), "((1 + (2 * 3)) + 4)");
//! assert_eq!(expr.dispatch(&mut EvalVisitor::new()).unwrap(), Value::Int(11));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod error;
pub mod eval;
pub mod expr;
pub mod render;
pub mod samples;
pub mod shape;
pub mod value;
pub mod visitor;

// Re-export main types
pub use context::EvalContext;
pub use error::{ErrorKind, EvalError, Result, Unsupported};
pub use eval::{eval_expr, eval_expr_with, BinaryOp, EvalVisitor, UnaryOp};
pub use expr::{BinaryExpr, Dispatch, Expr, Literal, UnaryExpr, Variable};
pub use render::{CanonVisitor, RpnVisitor};
pub use shape::{Shape, ShapeVisitor};
pub use value::Value;
pub use visitor::Visitor;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
