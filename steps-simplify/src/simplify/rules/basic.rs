//! Rules for identities that remove an operation without computing anything, such as `x + 0` or
//! `x^1`.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    simplify::search::pre_order,
};
use std::cmp::Ordering;
use super::{do_add, do_divide, do_multiply, do_negate, do_power};

/// `x * 0 = 0`
pub fn multiply_by_zero(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        factors.iter()
            .any(|factor| factor.is_value(0))
            .then(|| ChangeRecord::node_changed(ChangeType::MultiplyByZero, expr, Expr::constant(0)))
    })
}

/// `0 / x = 0`, when `x` is not zero
pub fn reduce_zero_numerator(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        (numerator.is_value(0) && !denominator.is_value(0))
            .then(|| ChangeRecord::node_changed(ChangeType::ReduceZeroNumerator, expr, Expr::constant(0)))
    })
}

/// `x^0 = 1`
pub fn reduce_exponent_by_zero(expr: &Expr) -> Option<ChangeRecord> {
    do_power(expr, |_, exponent| {
        exponent.is_value(0)
            .then(|| ChangeRecord::node_changed(ChangeType::ReduceExponentByZero, expr, Expr::constant(1)))
    })
}

/// `x^1 = x`
pub fn remove_exponent_by_one(expr: &Expr) -> Option<ChangeRecord> {
    do_power(expr, |base, exponent| {
        exponent.is_value(1)
            .then(|| ChangeRecord::node_changed(ChangeType::RemoveExponentByOne, expr, base.clone()))
    })
}

/// `1^x = 1`
pub fn remove_exponent_base_one(expr: &Expr) -> Option<ChangeRecord> {
    do_power(expr, |base, _| {
        base.is_value(1)
            .then(|| ChangeRecord::node_changed(ChangeType::RemoveExponentBaseOne, expr, Expr::constant(1)))
    })
}

/// `--x = x`, `-(-4) = 4`, `-((-x)) = (x)`
pub fn resolve_double_minus(expr: &Expr) -> Option<ChangeRecord> {
    do_negate(expr, |inner| {
        let new_expr = match &inner.kind {
            ExprKind::Neg(operand) => (**operand).clone(),
            ExprKind::Constant(value) if value.cmp0() == Ordering::Less => Expr::constant(-value.clone()),
            ExprKind::Paren(content) => match &content.kind {
                ExprKind::Neg(operand) => Expr::paren((**operand).clone()),
                _ => return None,
            },
            _ => return None,
        };
        Some(ChangeRecord::node_changed(ChangeType::ResolveDoubleMinus, expr, new_expr))
    })
}

/// `x + 0 = x`
pub fn remove_adding_zero(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        let index = terms.iter().position(|term| term.is_value(0))?;
        let mut new_terms = terms.to_vec();
        new_terms.remove(index);
        Some(ChangeRecord::node_changed(ChangeType::RemoveAddingZero, expr, Expr::add(new_terms).downgrade()))
    })
}

/// `x * 1 = x`
pub fn remove_multiplying_by_one(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let index = factors.iter().position(|factor| factor.is_value(1))?;
        let mut new_factors = factors.to_vec();
        new_factors.remove(index);
        Some(ChangeRecord::node_changed(ChangeType::RemoveMultiplyingByOne, expr, Expr::mul(new_factors).downgrade()))
    })
}

/// `x * -1 = -x`
///
/// The minus sign is merged into the nearest factor that is not a constant. Products with other
/// constant factors are left for like-term collection, which multiplies the constants together.
pub fn remove_multiplying_by_negative_one(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let index = factors.iter().position(|factor| factor.is_value(-1))?;
        let other_constants = factors.iter()
            .enumerate()
            .any(|(i, factor)| i != index && factor.constant_value().is_some());
        if other_constants {
            return None;
        }

        // prefer the factor right after the -1, then the one before it
        let target = if index + 1 < factors.len() { index + 1 } else { index.checked_sub(1)? };
        let mut new_factors = factors.to_vec();
        new_factors[target] = factors[target].negate();
        new_factors.remove(index);

        Some(ChangeRecord::node_changed(
            ChangeType::RemoveMultiplyingByNegativeOne,
            expr,
            Expr::mul(new_factors).downgrade(),
        ))
    })
}

/// `x / 1 = x`, `x / -1 = -x`
pub fn remove_division_by_one(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        if denominator.is_value(1) {
            Some(ChangeRecord::node_changed(ChangeType::DivisionByOne, expr, numerator.clone()))
        } else if denominator.is_value(-1) {
            Some(ChangeRecord::node_changed(ChangeType::DivisionByNegativeOne, expr, numerator.negate()))
        } else {
            None
        }
    })
}

/// `x * 5 = 5x`, `x^2 * (2/3) = 2/3 x^2`
pub fn rearrange_coefficient(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let [base, coefficient] = factors else {
            return None;
        };

        let is_coefficient = coefficient.is_constant() || coefficient.is_integer_fraction();
        let is_bare_power = matches!(base.kind, ExprKind::Symbol(_) | ExprKind::Exp(..))
            && base.is_poly_term();
        if !is_coefficient || !is_bare_power {
            return None;
        }

        let new_expr = Expr::mul(vec![coefficient.clone(), base.clone()]);
        Some(ChangeRecord::node_changed(ChangeType::RearrangeCoeff, expr, new_expr))
    })
}

/// Applies the first basic identity that matches the node itself.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    multiply_by_zero(expr)
        .or_else(|| reduce_zero_numerator(expr))
        .or_else(|| reduce_exponent_by_zero(expr))
        .or_else(|| remove_exponent_by_one(expr))
        .or_else(|| remove_exponent_base_one(expr))
        .or_else(|| resolve_double_minus(expr))
        .or_else(|| remove_adding_zero(expr))
        .or_else(|| remove_multiplying_by_one(expr))
        .or_else(|| remove_multiplying_by_negative_one(expr))
        .or_else(|| remove_division_by_one(expr))
        .or_else(|| rearrange_coefficient(expr))
}

/// Searches the tree top-down for a basic identity.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    pre_order(expr, all)
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
    fn zero_and_one() {
        assert_eq!(apply(c(3) * s("x") * c(0)), Some((ChangeType::MultiplyByZero, c(0))));
        assert_eq!(apply(Expr::div(c(0), s("x"))), Some((ChangeType::ReduceZeroNumerator, c(0))));
        assert_eq!(apply(Expr::div(c(0), c(0))), None);
        assert_eq!(apply(Expr::pow(s("x"), c(0))), Some((ChangeType::ReduceExponentByZero, c(1))));
        assert_eq!(apply(Expr::pow(s("x"), c(1))), Some((ChangeType::RemoveExponentByOne, s("x"))));
        assert_eq!(apply(Expr::pow(c(1), s("x"))), Some((ChangeType::RemoveExponentBaseOne, c(1))));
        assert_eq!(apply(c(5) + c(0)), Some((ChangeType::RemoveAddingZero, c(5))));
        assert_eq!(apply(s("x") + c(0) + s("y")), Some((ChangeType::RemoveAddingZero, s("x") + s("y"))));
        assert_eq!(apply(s("x") * c(1)), Some((ChangeType::RemoveMultiplyingByOne, s("x"))));
    }

    #[test]
    fn double_minus() {
        assert_eq!(apply(Expr::neg(Expr::neg(s("x")))), Some((ChangeType::ResolveDoubleMinus, s("x"))));
        assert_eq!(apply(Expr::neg(c(-4))), Some((ChangeType::ResolveDoubleMinus, c(4))));
        assert_eq!(
            apply(Expr::neg(Expr::paren(Expr::neg(s("x") + c(1))))),
            Some((ChangeType::ResolveDoubleMinus, Expr::paren(s("x") + c(1)))),
        );
        assert_eq!(apply(Expr::neg(c(4))), None);
    }

    #[test]
    fn negative_one() {
        assert_eq!(
            apply(s("x") * c(-1)),
            Some((ChangeType::RemoveMultiplyingByNegativeOne, Expr::neg(s("x")))),
        );
        assert_eq!(
            apply(c(-1) * s("x") * s("y")),
            Some((ChangeType::RemoveMultiplyingByNegativeOne, Expr::neg(s("x")) * s("y"))),
        );
        assert_eq!(apply(c(-1) * c(2) * s("x")), None);
    }

    #[test]
    fn division_by_one() {
        assert_eq!(apply(Expr::div(s("x"), c(1))), Some((ChangeType::DivisionByOne, s("x"))));
        assert_eq!(apply(Expr::div(s("x"), c(-1))), Some((ChangeType::DivisionByNegativeOne, Expr::neg(s("x")))));
    }

    #[test]
    fn coefficient_goes_first() {
        assert_eq!(apply(s("x") * c(5)), Some((ChangeType::RearrangeCoeff, term(5, "x", 1))));
        assert_eq!(
            apply(Expr::pow(s("x"), c(2)) * frac(2, 3)),
            Some((ChangeType::RearrangeCoeff, frac(2, 3) * Expr::pow(s("x"), c(2)))),
        );
        assert_eq!(apply(s("x") * s("y")), None);
    }

    #[test]
    fn searches_top_down() {
        let record = search(&(s("y") + Expr::pow(s("x"), c(1)))).unwrap();
        assert_eq!(record.change_type, ChangeType::RemoveExponentByOne);
        assert_eq!(record.new_node, s("y") + s("x"));
        assert_eq!(record.new_node.child(1).and_then(|child| child.change_group), Some(1));
    }
}
