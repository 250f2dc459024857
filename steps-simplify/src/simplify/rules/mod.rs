//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes the subtree to simplify and returns `Some(record)`
//! describing the rewrite if the rule applies, or `None` if it does not. Rules never modify their
//! input; the record's `old_node` is a copy of it.
//!
//! Rules are grouped into families. Each family module has a `search` function that finds the
//! first subtree any of its rules applies to, in the order the dispatcher needs.

pub mod arithmetic;
pub mod basic;
pub mod break_up;
pub mod collect;
pub mod distribute;
pub mod division;
pub mod fractions;
pub mod functions;
pub mod multiply_fractions;

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
};
use rug::Rational;
use std::cmp::Ordering;

/// If the expression is a call to the function with the given name, calls the given
/// transformation function with the arguments.
pub(crate) fn do_call<T>(expr: &Expr, name: &str, f: impl FnOnce(&[Expr]) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Call(target_name, args) if target_name == name => f(args),
        _ => None,
    }
}

/// If the expression is a sum, calls the given transformation function with the terms.
pub(crate) fn do_add<T>(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Add(terms) => f(terms),
        _ => None,
    }
}

/// If the expression is a product, calls the given transformation function with the factors.
pub(crate) fn do_multiply<T>(expr: &Expr, f: impl FnOnce(&[Expr]) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Mul(factors) => f(factors),
        _ => None,
    }
}

/// If the expression is a division, calls the given transformation function with the numerator
/// and denominator.
pub(crate) fn do_divide<T>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Div(numerator, denominator) => f(numerator, denominator),
        _ => None,
    }
}

/// If the expression is a power, calls the given transformation function with the base and
/// exponent.
pub(crate) fn do_power<T>(expr: &Expr, f: impl FnOnce(&Expr, &Expr) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Exp(base, exponent) => f(base, exponent),
        _ => None,
    }
}

/// If the expression is a unary minus, calls the given transformation function with its operand.
pub(crate) fn do_negate<T>(expr: &Expr, f: impl FnOnce(&Expr) -> Option<T>) -> Option<T> {
    match &expr.kind {
        ExprKind::Neg(inner) => f(inner),
        _ => None,
    }
}

/// Builds a record for a sum where only some terms changed. Each changed term is tagged with its
/// own change group, counting from `1`, in both the old and the new sum.
pub(crate) fn terms_changed(change_type: ChangeType, old_terms: &[Expr], new_terms: Vec<Expr>, changed: &[bool]) -> ChangeRecord {
    let mut group = 0;
    let mut old = Vec::with_capacity(old_terms.len());
    let mut new = Vec::with_capacity(new_terms.len());
    for ((old_term, new_term), &changed) in old_terms.iter().zip(new_terms).zip(changed) {
        if changed {
            group += 1;
            old.push(old_term.clone().with_group(group));
            new.push(new_term.with_group(group));
        } else {
            old.push(old_term.clone());
            new.push(new_term);
        }
    }
    ChangeRecord::tagged(change_type, Expr::add(old), Expr::add(new))
}

/// Returns the value of a constant, or of a division of two constants with a non-zero
/// denominator.
pub(crate) fn numeric_value(expr: &Expr) -> Option<Rational> {
    if let Some(value) = expr.constant_value() {
        return Some(value);
    }

    let (numerator, denominator) = match &expr.kind {
        ExprKind::Div(numerator, denominator) => (numerator.constant_value()?, denominator.constant_value()?),
        _ => return None,
    };
    if denominator.cmp0() == Ordering::Equal {
        return None;
    }
    Some(numerator / denominator)
}

/// Builds the tree for a computed value. Values computed from fractions are written as integer
/// fractions; other values are written as a single constant.
pub(crate) fn value_expr(value: Rational, from_fractions: bool) -> Expr {
    if from_fractions {
        Expr::rational(value)
    } else {
        Expr::constant(value)
    }
}

/// Multiplies two expressions, moving any unary minus to the front of the product.
pub(crate) fn product(lhs: &Expr, rhs: &Expr) -> Expr {
    let (lhs, lhs_negated) = strip_neg(lhs);
    let (rhs, rhs_negated) = strip_neg(rhs);
    let product = lhs.clone() * rhs.clone();
    if lhs_negated != rhs_negated {
        Expr::neg(product)
    } else {
        product
    }
}

/// Removes a unary minus, returning whether there was one.
fn strip_neg(expr: &Expr) -> (&Expr, bool) {
    match &expr.kind {
        ExprKind::Neg(inner) => (inner, true),
        _ => (expr, false),
    }
}
