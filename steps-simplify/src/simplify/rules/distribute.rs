//! Simplification rules related to the distributive property.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    simplify::search::post_order,
};
use super::{do_multiply, do_negate, product};

/// Returns the terms of a sum, possibly inside parentheses.
fn sum_terms(expr: &Expr) -> Option<&[Expr]> {
    match &expr.unparen().kind {
        ExprKind::Add(terms) => Some(terms),
        _ => None,
    }
}

/// `-(a + b) = (-a + -b)`
pub fn distribute_negative_one(expr: &Expr) -> Option<ChangeRecord> {
    do_negate(expr, |inner| {
        let terms = sum_terms(inner)?;
        let negated = terms.iter().map(Expr::negate).collect();
        Some(ChangeRecord::node_changed(ChangeType::DistributeNegativeOne, expr, Expr::paren(Expr::add(negated))))
    })
}

/// `a(b + c) = (ab + ac)`, `(a + b)(c + d) = (ac + ad + bc + bd)`
///
/// The first sum in the product is distributed with its neighbor: the factor before it, or the
/// factor after it if the sum comes first.
pub fn distribute(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let sum_index = factors.iter().position(|factor| sum_terms(factor).is_some())?;
        let other_index = if sum_index > 0 { sum_index - 1 } else { 1 };
        let other = factors.get(other_index)?;
        let (left, right) = if other_index < sum_index {
            (other, &factors[sum_index])
        } else {
            (&factors[sum_index], other)
        };

        // keep each product in the same left-to-right order as the factors it came from
        let terms = match (sum_terms(left), sum_terms(right)) {
            (Some(left_terms), Some(right_terms)) => left_terms.iter()
                .flat_map(|a| right_terms.iter().map(move |b| product(a, b)))
                .collect(),
            (Some(left_terms), None) => left_terms.iter().map(|a| product(a, right)).collect(),
            (None, Some(right_terms)) => right_terms.iter().map(|b| product(left, b)).collect(),
            (None, None) => return None,
        };

        let first = other_index.min(sum_index);
        let mut new_factors = factors.to_vec();
        new_factors[first] = Expr::paren(Expr::add(terms));
        new_factors.remove(first + 1);
        Some(ChangeRecord::node_changed(ChangeType::Distribute, expr, Expr::mul(new_factors).downgrade()))
    })
}

/// Applies all distribution rules.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    distribute_negative_one(expr)
        .or_else(|| distribute(expr))
}

/// Searches the tree bottom-up for a product to distribute.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    fn apply(expr: Expr) -> Option<(ChangeType, String)> {
        search(&expr).map(|record| (record.change_type, record.new_node.to_string()))
    }

    #[test]
    fn negative_one() {
        let expr = Expr::neg(Expr::paren(s("x") + c(2)));
        assert_eq!(apply(expr), Some((ChangeType::DistributeNegativeOne, "(-x - 2)".to_string())));
    }

    #[test]
    fn constant_over_sum() {
        let expr = c(3) * Expr::paren(s("x") + c(1));
        assert_eq!(apply(expr), Some((ChangeType::Distribute, "(3x + 3 * 1)".to_string())));

        let expr = Expr::paren(s("x") + c(1)) * s("y");
        assert_eq!(apply(expr), Some((ChangeType::Distribute, "(x * y + 1y)".to_string())));
    }

    #[test]
    fn sum_over_sum() {
        let expr = Expr::paren(s("x") + c(1)) * Expr::paren(s("x") - c(2));
        assert_eq!(
            apply(expr),
            Some((ChangeType::Distribute, "(x * x - x * 2 + 1x - 1 * 2)".to_string())),
        );
    }

    #[test]
    fn remaining_factors_stay() {
        let expr = Expr::mul(vec![c(2), Expr::paren(s("x") + c(1)), s("y")]);
        let record = search(&expr).unwrap();
        assert_eq!(record.new_node, Expr::mul(vec![Expr::paren(c(2) * s("x") + c(2) * c(1)), s("y")]));
    }

    #[test]
    fn nothing_to_distribute() {
        assert_eq!(apply(c(2) * s("x")), None);
        assert_eq!(apply(Expr::neg(s("x"))), None);
    }
}
