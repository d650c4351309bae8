//! String renderers
//!
//! Both renderers are total: any operator tag and any literal render, and
//! neither can fail. Leaves render the same way in both forms.

mod canon;
mod rpn;

pub use canon::CanonVisitor;
pub use rpn::RpnVisitor;

use crate::{Literal, Variable};

fn render_literal(lit: &Literal) -> String {
    lit.value.to_string()
}

fn render_variable(var: &Variable) -> String {
    var.name.clone()
}
