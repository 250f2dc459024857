//! Multiplying a product of fractions into a single fraction.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::Expr,
    simplify::search::post_order,
};
use super::do_multiply;

/// `a/b * c/d = (a * c)/(b * d)`, `a * c/d = (a * c)/d`
///
/// A product like `2/3 x` is a polynomial term, and is left alone unless one of the fractions has
/// a symbol in its denominator.
pub fn multiply_fractions(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        if !factors.iter().any(|factor| factor.as_fraction().is_some()) {
            return None;
        }

        let has_polynomial_term = factors.iter()
            .any(|factor| factor.as_fraction().is_none() && factor.is_poly_term());
        let has_symbolic_denominator = factors.iter()
            .filter_map(Expr::as_fraction)
            .any(|(_, denominator)| denominator.contains_symbol());
        if has_polynomial_term && !has_symbolic_denominator {
            return None;
        }

        let mut numerators = Vec::new();
        let mut denominators = Vec::new();
        for factor in factors {
            match factor.as_fraction() {
                Some((numerator, denominator)) => {
                    numerators.push(numerator.clone());
                    denominators.push(denominator.clone());
                },
                None => numerators.push(factor.clone()),
            }
        }

        let new_expr = Expr::div(Expr::mul(numerators).downgrade(), Expr::mul(denominators).downgrade());
        Some(ChangeRecord::node_changed(ChangeType::MultiplyFractions, expr, new_expr))
    })
}

/// Searches the tree bottom-up for a product of fractions.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, multiply_fractions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fractions() {
        let expr = Expr::div(s("x"), c(2)) * Expr::div(c(3), s("y"));
        let record = search(&expr).unwrap();
        assert_eq!(record.change_type, ChangeType::MultiplyFractions);
        assert_eq!(record.new_node, Expr::div(s("x") * c(3), c(2) * s("y")));
    }

    #[test]
    fn symbol_in_denominator() {
        let expr = s("x") * Expr::div(c(1), s("y"));
        let record = search(&expr).unwrap();
        assert_eq!(record.new_node, Expr::div(s("x") * c(1), s("y")));
    }

    #[test]
    fn polynomial_terms_are_left_alone() {
        assert_eq!(search(&(frac(2, 3) * s("x"))), None);
        assert_eq!(search(&(s("x") * s("y"))), None);
    }
}
