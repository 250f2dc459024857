//! Rules that rewrite chains of divisions into a single division or product.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::Expr,
    simplify::search::pre_order,
};
use super::do_divide;

/// `a / (b / c) = a * (c / b)`
pub fn multiply_by_inverse(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let (inner_numerator, inner_denominator) = denominator.as_fraction()?;
        let inverse = Expr::div(inner_denominator.clone(), inner_numerator.clone());
        let new_expr = Expr::mul(vec![numerator.clone(), inverse]);
        Some(ChangeRecord::node_changed(ChangeType::MultiplyByInverse, expr, new_expr))
    })
}

/// `(a / b) / c = a / (b * c)`
pub fn simplify_division_chain(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let (inner_numerator, inner_denominator) = numerator.as_fraction()?;
        let new_denominator = inner_denominator.clone() * denominator.clone();
        let new_expr = Expr::div(inner_numerator.clone(), new_denominator);
        Some(ChangeRecord::node_changed(ChangeType::SimplifyDivision, expr, new_expr))
    })
}

/// Applies the first division rule that matches the node itself.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    multiply_by_inverse(expr)
        .or_else(|| simplify_division_chain(expr))
}

/// Searches the tree top-down for a chain of divisions.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    pre_order(expr, all)
}
