use pretty_assertions::assert_eq;
use steps_simplify::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    simplify::{explain, rules::fractions, simplify, Outcome},
};

fn c(n: i64) -> Expr {
    Expr::constant(n)
}

fn s(name: &str) -> Expr {
    Expr::symbol(name)
}

fn frac(numerator: i64, denominator: i64) -> Expr {
    Expr::div(c(numerator), c(denominator))
}

fn trace(steps: &[ChangeRecord]) -> Vec<(ChangeType, String)> {
    steps.iter()
        .map(|record| (record.change_type, record.new_node.to_string()))
        .collect()
}

/// Inputs that exercise most rule families.
fn samples() -> Vec<Expr> {
    vec![
        c(2) * s("x") + c(4) * Expr::pow(s("x"), c(2)) + c(5) * s("x"),
        frac(2, 3) + frac(5, 6),
        Expr::pow(s("x"), c(0)),
        c(2) * Expr::div(s("x"), frac(3, 4)),
        c(5) + c(0),
        s("x") + s("y"),
        c(2) * Expr::paren(s("x") + c(3)) + s("x"),
        Expr::div(s("x") + c(2), c(4)),
        frac(4, -6),
        Expr::call("sqrt", vec![frac(4, 9)]) + c(1),
        Expr::neg(Expr::paren(s("x") + c(2))) + s("x"),
        c(3) - frac(1, 2),
        frac(2, 3) - frac(1, 6),
    ]
}

#[test_log::test]
fn collect_and_combine_polynomial_terms() {
    let expr = c(2) * s("x") + c(4) * Expr::pow(s("x"), c(2)) + c(5) * s("x");
    let steps = simplify(&expr);
    assert_eq!(trace(&steps), vec![
        (ChangeType::CollectAndCombineLikeTerms, "4x^2 + 7x".to_string()),
    ]);
    assert_eq!(trace(&steps[0].substeps), vec![
        (ChangeType::CollectLikeTerms, "4x^2 + (2x + 5x)".to_string()),
        (ChangeType::AddPolynomialTerms, "4x^2 + 7x".to_string()),
    ]);
}

#[test_log::test]
fn add_fractions_with_different_denominators() {
    let steps = simplify(&(frac(2, 3) + frac(5, 6)));
    assert_eq!(trace(&steps), vec![(ChangeType::AddFractions, "3/2".to_string())]);
    assert_eq!(trace(&steps[0].substeps), vec![
        (ChangeType::CommonDenominator, "(2 * 2)/(3 * 2) + 5/6".to_string()),
        (ChangeType::MultiplyDenominators, "(2 * 2)/6 + 5/6".to_string()),
        (ChangeType::MultiplyNumerators, "4/6 + 5/6".to_string()),
        (ChangeType::CombineNumerators, "(4 + 5)/6".to_string()),
        (ChangeType::AddNumerators, "9/6".to_string()),
        (ChangeType::SimplifyFraction, "3/2".to_string()),
    ]);
}

#[test_log::test]
fn subtract_fraction_from_integer() {
    let steps = simplify(&(c(3) - frac(1, 2)));
    assert_eq!(trace(&steps), vec![(ChangeType::AddFractions, "5/2".to_string())]);
    assert_eq!(trace(&steps[0].substeps), vec![
        (ChangeType::ConvertIntegerToFraction, "6/2 - 1/2".to_string()),
        (ChangeType::CombineNumerators, "(6 - 1)/2".to_string()),
        (ChangeType::AddNumerators, "5/2".to_string()),
    ]);
}

#[test_log::test]
fn subtract_fractions() {
    let steps = simplify(&(frac(2, 3) - frac(1, 6)));
    assert_eq!(trace(&steps), vec![(ChangeType::AddFractions, "1/2".to_string())]);
    assert_eq!(trace(&steps[0].substeps), vec![
        (ChangeType::CommonDenominator, "(2 * 2)/(3 * 2) - 1/6".to_string()),
        (ChangeType::MultiplyDenominators, "(2 * 2)/6 - 1/6".to_string()),
        (ChangeType::MultiplyNumerators, "4/6 - 1/6".to_string()),
        (ChangeType::CombineNumerators, "(4 - 1)/6".to_string()),
        (ChangeType::AddNumerators, "3/6".to_string()),
        (ChangeType::SimplifyFraction, "1/2".to_string()),
    ]);
}

#[test_log::test]
fn exponent_of_zero() {
    let steps = simplify(&Expr::pow(s("x"), c(0)));
    assert_eq!(trace(&steps), vec![(ChangeType::ReduceExponentByZero, "1".to_string())]);
}

#[test_log::test]
fn division_by_fraction_comes_first() {
    let expr = c(2) * Expr::div(s("x"), frac(3, 4));
    let steps = simplify(&expr);
    let first = steps.first().unwrap();
    assert_eq!(first.change_type, ChangeType::MultiplyByInverse);
    assert_eq!(first.new_node, Expr::mul(vec![c(2), s("x"), frac(4, 3)]));

    // no division by a fraction is left
    let result = &steps.last().unwrap().new_node;
    assert!(result.post_order_iter().all(|node| match &node.kind {
        ExprKind::Div(_, denominator) => !denominator.unparen().is_div(),
        _ => true,
    }));
}

#[test_log::test]
fn adding_zero() {
    let steps = simplify(&(c(5) + c(0)));
    assert_eq!(trace(&steps), vec![(ChangeType::RemoveAddingZero, "5".to_string())]);
}

#[test_log::test]
fn nothing_to_simplify() {
    let expr = s("x") + s("y");
    let explained = explain(&expr);
    assert!(explained.steps.is_empty());
    assert_eq!(explained.outcome, Outcome::AlreadySimplified);
    assert_eq!(explained.result(), &expr);
}

#[test_log::test]
fn simplifying_the_result_again_does_nothing() {
    for expr in samples() {
        let explained = explain(&expr);
        assert_ne!(explained.outcome, Outcome::GaveUp, "gave up on {}", expr);
        assert!(simplify(explained.result()).is_empty(), "{} is not fully simplified", explained.result());
    }
}

#[test_log::test]
fn steps_stay_flat() {
    for expr in samples() {
        for record in simplify(&expr) {
            let flat = record.new_node.post_order_iter().all(|node| {
                node.children().all(|child| {
                    !(node.is_add() && child.is_add()) && !(node.is_mul() && child.is_mul())
                })
            });
            assert!(flat, "{} -> {} left a nested sum or product", record.change_type, record.new_node);
        }
    }
}

#[test_log::test]
fn steps_chain_together() {
    for expr in samples() {
        let steps = simplify(&expr);
        for pair in steps.windows(2) {
            assert_eq!(pair[0].new_node, pair[1].old_node);
        }
    }
}

#[test_log::test]
fn denominators_end_up_positive() {
    let inputs = vec![
        frac(4, -6),
        frac(-5, -10),
        Expr::div(s("x"), c(-3)),
        Expr::div(Expr::neg(s("x")), Expr::neg(s("y"))),
    ];

    for expr in inputs {
        // a single pass of the fraction rules fixes the sign of the outermost fraction
        let record = fractions::search(&expr).unwrap();
        let ExprKind::Div(_, denominator) = &record.new_node.kind else {
            panic!("{} is no longer a fraction", record.new_node);
        };
        assert!(!denominator.is_negative());

        let explained = explain(&expr);
        assert!(explained.result().post_order_iter().all(|node| match &node.kind {
            ExprKind::Div(_, denominator) => !denominator.is_negative(),
            _ => true,
        }));
    }
}

#[test_log::test]
fn malformed_trees_are_rejected() {
    let expr = Expr::mul(vec![c(2)]) + s("x");
    let explained = explain(&expr);
    assert!(explained.steps.is_empty());
    assert_eq!(explained.outcome, Outcome::GaveUp);
}
