//! Rules that evaluate operations on constants.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    primitive::rational,
    simplify::search::post_order,
};
use rug::{ops::Pow, Rational};
use std::cmp::Ordering;
use super::{do_add, do_divide, do_multiply, do_negate, do_power};

/// The largest exponent a power of a constant is evaluated for.
pub const MAX_POWER_EXPONENT: u32 = 256;

fn evaluated(expr: &Expr, value: Rational) -> ChangeRecord {
    ChangeRecord::node_changed(ChangeType::SimplifyArithmetic, expr, Expr::constant(value))
}

/// `2 + 3 + -1 = 4`
pub fn add_constants(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        let values = terms.iter().map(Expr::constant_value).collect::<Option<Vec<_>>>()?;
        let sum = values.into_iter().fold(rational(0), |acc, value| acc + value);
        Some(evaluated(expr, sum))
    })
}

/// `2 * 3 * 0.5 = 3`
pub fn multiply_constants(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let values = factors.iter().map(Expr::constant_value).collect::<Option<Vec<_>>>()?;
        let product = values.into_iter().fold(rational(1), |acc, value| acc * value);
        Some(evaluated(expr, product))
    })
}

/// `2^3 = 8`, `(-0.5)^2 = 0.25`
pub fn evaluate_power(expr: &Expr) -> Option<ChangeRecord> {
    do_power(expr, |base, exponent| {
        let base = base.constant_value()?;
        let exponent = exponent.as_integer()?
            .to_u32()
            .filter(|&n| n <= MAX_POWER_EXPONENT)?;
        Some(evaluated(expr, base.pow(exponent)))
    })
}

/// `6 / 3 = 2`, `1.5 / 3 = 0.5`
///
/// A division of two integers is only evaluated if it is exact; `2 / 3` stays a fraction.
pub fn divide_constants(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let numerator = numerator.constant_value()?;
        let denominator = denominator.constant_value()?;
        if denominator.cmp0() == Ordering::Equal {
            return None;
        }

        let both_integers = numerator.is_integer() && denominator.is_integer();
        let quotient = numerator / denominator;
        if both_integers && !quotient.is_integer() {
            return None;
        }
        Some(evaluated(expr, quotient))
    })
}

/// `-(3) = -3`
pub fn negate_constant(expr: &Expr) -> Option<ChangeRecord> {
    do_negate(expr, |inner| match &inner.kind {
        ExprKind::Constant(value) => Some(evaluated(expr, rational(-value))),
        _ => None,
    })
}

/// Applies the first arithmetic rule that matches the node itself.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    add_constants(expr)
        .or_else(|| multiply_constants(expr))
        .or_else(|| evaluate_power(expr))
        .or_else(|| divide_constants(expr))
        .or_else(|| negate_constant(expr))
}

/// Searches the tree bottom-up for an operation on constants.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    fn apply(expr: Expr) -> Option<Expr> {
        search(&expr).map(|record| record.new_node)
    }

    #[test]
    fn sums_and_products() {
        assert_eq!(apply(c(2) + c(3) + c(-1)), Some(c(4)));
        assert_eq!(apply(c(2) * c(3) * Expr::constant((1, 2))), Some(c(3)));
        assert_eq!(apply(c(2) + Expr::neg(c(3))), Some(c(2) + c(-3)));
        assert_eq!(apply(c(2) + s("x")), None);
    }

    #[test]
    fn powers() {
        assert_eq!(apply(Expr::pow(c(2), c(3))), Some(c(8)));
        assert_eq!(apply(Expr::pow(Expr::constant((-1, 2)), c(2))), Some(Expr::constant((1, 4))));
        assert_eq!(apply(Expr::pow(c(2), c(-1))), None);
        assert_eq!(apply(Expr::pow(c(2), c(257))), None);
        assert_eq!(apply(Expr::pow(c(2), s("n"))), None);
    }

    #[test]
    fn divisions() {
        assert_eq!(apply(frac(6, 3)), Some(c(2)));
        assert_eq!(apply(frac(2, 3)), None);
        assert_eq!(apply(frac(2, 0)), None);
        assert_eq!(apply(Expr::div(Expr::constant((3, 2)), c(3))), Some(Expr::constant((1, 2))));
    }

    #[test]
    fn innermost_first() {
        let expr = Expr::pow(c(1) + c(1), c(3));
        let record = search(&expr).unwrap();
        assert_eq!(record.change_type, ChangeType::SimplifyArithmetic);
        assert_eq!(record.new_node, Expr::pow(c(2), c(3)));
        assert_eq!(apply(Expr::neg(c(3))), Some(c(-3)));
    }
}
