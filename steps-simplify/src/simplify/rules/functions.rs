//! Evaluation of simple functions of constants.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    primitive::rational_root,
    simplify::search::post_order,
};
use super::{do_call, numeric_value, value_expr};

/// `abs(-3) = 3`, `abs(-1/2) = 1/2`
pub fn absolute_value(expr: &Expr) -> Option<ChangeRecord> {
    do_call(expr, "abs", |args| {
        let [arg] = args else {
            return None;
        };
        let value = numeric_value(arg)?.abs();
        Some(ChangeRecord::node_changed(ChangeType::AbsoluteValue, expr, value_expr(value, arg.is_div())))
    })
}

/// `sqrt(16) = 4`, `cbrt(-8) = -2`, `nthRoot(16, 4) = 2`, `sqrt(4/9) = 2/3`
///
/// Only exact roots are evaluated. `nthRoot` with a single argument is a square root.
pub fn nth_root(expr: &Expr) -> Option<ChangeRecord> {
    let ExprKind::Call(name, args) = &expr.kind else {
        return None;
    };

    let (radicand, degree) = match (name.as_str(), args.as_slice()) {
        ("sqrt", [radicand]) | ("nthRoot", [radicand]) => (radicand, 2),
        ("cbrt", [radicand]) => (radicand, 3),
        ("nthRoot", [radicand, degree]) => (radicand, degree.as_integer()?.to_u32()?),
        _ => return None,
    };

    let root = rational_root(&numeric_value(radicand)?, degree)?;
    Some(ChangeRecord::node_changed(ChangeType::NthRoot, expr, value_expr(root, radicand.is_div())))
}

/// Applies the first function rule that matches the node itself.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    absolute_value(expr)
        .or_else(|| nth_root(expr))
}

/// Searches the tree bottom-up for a function to evaluate.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    fn apply(expr: Expr) -> Option<(ChangeType, Expr)> {
        search(&expr).map(|record| (record.change_type, record.new_node))
    }

    #[test]
    fn absolute_values() {
        assert_eq!(apply(Expr::call("abs", vec![c(-3)])), Some((ChangeType::AbsoluteValue, c(3))));
        assert_eq!(apply(Expr::call("abs", vec![frac(-1, 2)])), Some((ChangeType::AbsoluteValue, frac(1, 2))));
        assert_eq!(apply(Expr::call("abs", vec![s("x")])), None);
    }

    #[test]
    fn roots() {
        assert_eq!(apply(Expr::call("sqrt", vec![c(16)])), Some((ChangeType::NthRoot, c(4))));
        assert_eq!(apply(Expr::call("cbrt", vec![c(-8)])), Some((ChangeType::NthRoot, c(-2))));
        assert_eq!(apply(Expr::call("nthRoot", vec![c(16), c(4)])), Some((ChangeType::NthRoot, c(2))));
        assert_eq!(apply(Expr::call("sqrt", vec![frac(4, 9)])), Some((ChangeType::NthRoot, frac(2, 3))));
        assert_eq!(apply(Expr::call("sqrt", vec![c(2)])), None);
        assert_eq!(apply(Expr::call("sqrt", vec![c(-4)])), None);
        assert_eq!(apply(Expr::call("nthRoot", vec![c(8), c(0)])), None);
    }

    #[test]
    fn unknown_functions() {
        assert_eq!(apply(Expr::call("sin", vec![c(0)])), None);
    }
}
