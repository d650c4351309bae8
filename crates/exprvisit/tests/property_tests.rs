//! Property-based tests for the visitors.
//!
//! Trees are generated with proptest and checked for:
//! 1. Canonical output has one balanced parenthesis pair per operation
//! 2. RPN output has no parentheses and one token per node
//! 3. Rendering is repeatable with fresh visitors
//! 4. Any variable reachable by evaluation makes it fail as unsupported
//! 5. `false and X` never touches X

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(clippy::redundant_closure, reason = "Constructors take impl Into")]

use exprvisit::*;
use proptest::prelude::*;

// -- Tree Generation Strategies --

/// Operator tags without whitespace or parentheses, evaluable or not.
fn op_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("and".to_string()),
        Just("or".to_string()),
        Just("not".to_string()),
        prop::string::string_regex("[A-Z!<>=]{1,3}").expect("valid regex"),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<i64>().prop_map(|n| Expr::literal(n)),
        (-1.0e6..1.0e6f64).prop_map(|x| Expr::literal(x)),
        any::<bool>().prop_map(|b| Expr::literal(b)),
        prop::string::string_regex("[a-z][a-z0-9_]{0,7}")
            .expect("valid regex")
            .prop_map(|name| Expr::variable(name)),
    ]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    leaf_strategy().prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (op_strategy(), inner.clone()).prop_map(|(op, e)| Expr::unary(op, e)),
            (op_strategy(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::binary(op, l, r)),
        ]
    })
}

/// Trees of integer literals and `+ - *` only, with no variables.
fn arith_strategy() -> impl Strategy<Value = Expr> {
    (-1000i64..1000).prop_map(|n| Expr::literal(n)).prop_recursive(5, 32, 2, |inner| {
        (
            prop_oneof![Just("+"), Just("-"), Just("*")],
            inner.clone(),
            inner,
        )
            .prop_map(|(op, l, r)| Expr::binary(op, l, r))
    })
}

fn is_balanced(s: &str) -> bool {
    let mut open = 0usize;
    for c in s.chars() {
        match c {
            '(' => open += 1,
            ')' => {
                if open == 0 {
                    return false;
                }
                open -= 1;
            }
            _ => {}
        }
    }
    open == 0
}

fn contains_variable(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(_) => false,
        Expr::Variable(_) => true,
        Expr::Unary(u) => contains_variable(&u.operand),
        Expr::Binary(b) => contains_variable(&b.left) || contains_variable(&b.right),
    }
}

proptest! {
    #[test]
    fn canonical_has_one_pair_per_composite(expr in expr_strategy()) {
        let out = expr.dispatch(&mut CanonVisitor::new());
        let shape = expr.shape();
        prop_assert!(is_balanced(&out));
        prop_assert_eq!(out.matches('(').count(), shape.composites);
        prop_assert_eq!(out.matches(')').count(), shape.composites);
    }

    #[test]
    fn rpn_has_one_token_per_node(expr in expr_strategy()) {
        let out = expr.dispatch(&mut RpnVisitor::new());
        prop_assert!(!out.contains('(') && !out.contains(')'));
        prop_assert_eq!(out.split(' ').count(), expr.shape().nodes());
    }

    #[test]
    fn rendering_is_repeatable(expr in expr_strategy()) {
        prop_assert_eq!(
            expr.dispatch(&mut RpnVisitor::new()),
            expr.dispatch(&mut RpnVisitor::new())
        );
        prop_assert_eq!(
            expr.dispatch(&mut CanonVisitor::new()),
            expr.dispatch(&mut CanonVisitor::new())
        );
    }

    #[test]
    fn variables_are_never_evaluated(name in "[a-z]{1,6}", tree in arith_strategy()) {
        // Left operands are evaluated first, so the variable is always reached
        let expr = Expr::binary("*", Expr::variable(name), tree);
        let err = expr.evaluate().unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::UnsupportedFeature);
    }

    #[test]
    fn variable_errors_need_a_variable(expr in expr_strategy()) {
        let first = expr.evaluate();
        let second = expr.evaluate();
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if !contains_variable(&expr) {
            if let Err(err) = first {
                let from_variable =
                    matches!(err, EvalError::UnsupportedFeature(Unsupported::Variable { .. }));
                prop_assert!(!from_variable);
            }
        }
    }

    #[test]
    fn false_and_anything_is_false(right in expr_strategy()) {
        let expr = Expr::binary("and", Expr::literal(false), right);
        prop_assert_eq!(expr.evaluate().unwrap(), Value::Bool(false));
    }

    #[test]
    fn integer_trees_evaluate_without_type_errors(tree in arith_strategy()) {
        match tree.evaluate() {
            Ok(value) => prop_assert!(value.is_integer()),
            Err(err) => prop_assert_eq!(err.kind(), ErrorKind::Arithmetic),
        }
    }
}
