//! Strategies for finding the first subtree a rule applies to.

use crate::{change::ChangeRecord, expr::Expr};

/// Tries the rule on each child of `expr` from left to right, lifting the first change into
/// `expr`.
fn search_children(
    expr: &Expr,
    f: impl Fn(&Expr) -> Option<ChangeRecord>,
) -> Option<ChangeRecord> {
    expr.children()
        .enumerate()
        .find_map(|(index, child)| f(child).map(|record| ChangeRecord::child_changed(expr, record, index)))
}

/// Tries the rule on a node before its children.
pub fn pre_order(
    expr: &Expr,
    rule: impl Copy + Fn(&Expr) -> Option<ChangeRecord>,
) -> Option<ChangeRecord> {
    rule(expr).or_else(|| search_children(expr, |child| pre_order(child, rule)))
}

/// Tries the rule on every child of a node before the node itself.
pub fn post_order(
    expr: &Expr,
    rule: impl Copy + Fn(&Expr) -> Option<ChangeRecord>,
) -> Option<ChangeRecord> {
    search_children(expr, |child| post_order(child, rule)).or_else(|| rule(expr))
}
