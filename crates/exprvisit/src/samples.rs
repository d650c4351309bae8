//! Literal sample trees used by the demo binary

use crate::Expr;

/// A named sample tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Short label printed by the demo
    pub name: &'static str,
    /// The tree
    pub expr: Expr,
}

/// `(1 + 2 * 3) + 4`, evaluates to 11.
pub fn arithmetic() -> Expr {
    Expr::binary(
        "+",
        Expr::binary(
            "+",
            Expr::literal(1),
            Expr::binary("*", Expr::literal(2), Expr::literal(3)),
        ),
        Expr::literal(4),
    )
}

/// A condition over variables with upper-case operator tags.
///
/// Renders fine; evaluation is rejected.
pub fn condition() -> Expr {
    Expr::binary(
        "AND",
        Expr::binary(
            "OR",
            Expr::binary(">", Expr::variable("a"), Expr::literal(0)),
            Expr::binary("!=", Expr::variable("b"), Expr::literal(1)),
        ),
        Expr::unary("NOT", Expr::variable("c")),
    )
}

/// `-(2 + 3)`
pub fn negated_sum() -> Expr {
    Expr::unary("-", Expr::binary("+", Expr::literal(2), Expr::literal(3)))
}

/// `1 / 0`, fails with division by zero.
pub fn division_by_zero() -> Expr {
    Expr::binary("/", Expr::literal(1), Expr::literal(0))
}

/// Every sample, in demo order.
pub fn all() -> Vec<Sample> {
    vec![
        Sample {
            name: "arithmetic",
            expr: arithmetic(),
        },
        Sample {
            name: "condition",
            expr: condition(),
        },
        Sample {
            name: "negated-sum",
            expr: negated_sum(),
        },
        Sample {
            name: "division-by-zero",
            expr: division_by_zero(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_names_are_unique() {
        let samples = all();
        let mut names: Vec<_> = samples.iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), samples.len());
    }

    #[test]
    fn test_negated_sum() {
        assert_eq!(negated_sum().evaluate().unwrap(), Value::Int(-5));
        assert_eq!(negated_sum().to_canonical(), "(- (2 + 3))");
    }
}
