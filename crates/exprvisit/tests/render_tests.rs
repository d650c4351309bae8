use exprvisit::*;
use pretty_assertions::assert_eq;

fn rpn(expr: &Expr) -> String {
    expr.dispatch(&mut RpnVisitor::new())
}

fn canon(expr: &Expr) -> String {
    expr.dispatch(&mut CanonVisitor::new())
}

// ═══════════════════════════════════════════════════════════════════════
// Leaves
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_literal_rendering() {
    assert_eq!(rpn(&Expr::literal(0)), "0");
    assert_eq!(rpn(&Expr::literal(-12)), "-12");
    assert_eq!(rpn(&Expr::literal(2.0)), "2.0");
    assert_eq!(rpn(&Expr::literal(0.1)), "0.1");
    assert_eq!(rpn(&Expr::literal(true)), "true");
    assert_eq!(rpn(&Expr::literal(false)), "false");
}

#[test]
fn test_leaves_render_the_same_in_both_forms() {
    for leaf in [
        Expr::literal(3),
        Expr::literal(4.5),
        Expr::literal(true),
        Expr::variable("alpha"),
    ] {
        assert_eq!(rpn(&leaf), canon(&leaf));
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Sample
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_arithmetic_canonical() {
    assert_eq!(canon(&samples::arithmetic()), "((1 + (2 * 3)) + 4)");
}

#[test]
fn test_arithmetic_rpn() {
    assert_eq!(rpn(&samples::arithmetic()), "1 2 3 * + 4 +");
}

// ═══════════════════════════════════════════════════════════════════════
// Opaque Operator Tags
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_condition_rpn() {
    assert_eq!(rpn(&samples::condition()), "a 0 > b 1 != OR c NOT AND");
}

#[test]
fn test_condition_canonical() {
    assert_eq!(
        canon(&samples::condition()),
        "(((a > 0) OR (b != 1)) AND (NOT c))"
    );
}

#[test]
fn test_any_operator_renders() {
    let expr = Expr::binary("<=>", Expr::unary("~~", Expr::variable("x")), Expr::literal(1));
    assert_eq!(rpn(&expr), "x ~~ 1 <=>");
    assert_eq!(canon(&expr), "((~~ x) <=> 1)");
}

// ═══════════════════════════════════════════════════════════════════════
// Unary
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_negation() {
    let expr = Expr::unary("-", Expr::literal(5));
    assert_eq!(canon(&expr), "(- 5)");
    assert_eq!(rpn(&expr), "5 -");
}

#[test]
fn test_nested_unary() {
    let expr = Expr::unary("not", Expr::unary("not", Expr::literal(true)));
    assert_eq!(canon(&expr), "(not (not true))");
    assert_eq!(rpn(&expr), "true not not");
}

// ═══════════════════════════════════════════════════════════════════════
// Reuse
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_rendering_is_repeatable() {
    let expr = samples::condition();
    assert_eq!(rpn(&expr), rpn(&expr));
    assert_eq!(canon(&expr), canon(&expr));

    // Same visitor instance, several trees
    let mut visitor = CanonVisitor::new();
    let first = samples::arithmetic().dispatch(&mut visitor);
    let _ = samples::condition().dispatch(&mut visitor);
    assert_eq!(samples::arithmetic().dispatch(&mut visitor), first);
}

#[test]
fn test_shortcuts_match_visitors() {
    let expr = samples::negated_sum();
    assert_eq!(expr.to_rpn(), rpn(&expr));
    assert_eq!(expr.to_canonical(), canon(&expr));
}
