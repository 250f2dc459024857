//! Breaking a fraction with a sum in its numerator into a sum of fractions.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    simplify::search::post_order,
};
use super::do_divide;

/// `(a + b) / c = (a/c + b/c)`
pub fn break_up_numerator(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let ExprKind::Add(terms) = &numerator.unparen().kind else {
            return None;
        };

        let fractions = terms.iter()
            .map(|term| Expr::div(term.clone(), denominator.clone()))
            .collect();
        Some(ChangeRecord::node_changed(ChangeType::BreakUpFraction, expr, Expr::paren(Expr::add(fractions))))
    })
}

/// Searches the tree bottom-up for a numerator to break up.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, break_up_numerator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn break_up() {
        let expr = Expr::div(Expr::paren(s("x") + c(1)), c(2));
        let record = search(&expr).unwrap();
        assert_eq!(record.change_type, ChangeType::BreakUpFraction);
        assert_eq!(record.new_node, Expr::paren(Expr::div(s("x"), c(2)) + frac(1, 2)));
        assert_eq!(record.new_node.to_string(), "(x/2 + 1/2)");
    }

    #[test]
    fn inside_a_sum() {
        let expr = s("y") + Expr::div(s("x") - c(3), s("y"));
        let record = search(&expr).unwrap();
        assert_eq!(record.new_node.to_string(), "y + (x/y - 3/y)");
    }

    #[test]
    fn nothing_to_break_up() {
        assert_eq!(search(&Expr::div(c(2) * s("x"), c(3))), None);
    }
}
