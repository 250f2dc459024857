//! Rules for adding, reducing and normalizing fractions.
//!
//! Adding fractions is broken into the substeps a learner would write out by hand. For
//! `2/3 + 5/6`:
//!
//! 1. rewrite each fraction over the common denominator: `(2 * 2)/(3 * 2) + 5/6`
//! 2. multiply out the denominators: `(2 * 2)/6 + 5/6`
//! 3. multiply out the numerators: `4/6 + 5/6`
//! 4. combine the numerators: `(4 + 5)/6`
//! 5. add the numerators: `9/6`
//! 6. reduce a zero numerator to `0`, if the sum is zero
//! 7. divide by the greatest common divisor: `3/2`
//!
//! Steps 1 to 3 are skipped when every denominator is already the same.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind},
    primitive::{int, lcm, reducing_divisor},
    simplify::search::pre_order,
};
use rug::{Integer, Rational};
use std::cmp::Ordering;
use super::{do_add, do_divide, terms_changed};

/// Builds the integer fraction `numerator / denominator`.
fn integer_fraction(numerator: Integer, denominator: Integer) -> Expr {
    Expr::div(Expr::constant(numerator), Expr::constant(denominator))
}

/// `a/b + c/d = (ad + cb)/bd`, for integer fractions, with substeps.
pub fn add_constant_fractions(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        let fractions = terms.iter()
            .map(Expr::as_integer_fraction)
            .collect::<Option<Vec<_>>>()?;
        if fractions.iter().any(|(_, denominator)| denominator.cmp0() == Ordering::Equal) {
            return None;
        }

        let mut substeps = Vec::new();
        let mut current_terms = terms.to_vec();

        let (_, first_denominator) = fractions.first()?;
        let (numerators, common_denominator) = if fractions.iter().all(|(_, d)| d == first_denominator) {
            let numerators = fractions.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>();
            (numerators, first_denominator.clone())
        } else {
            let common_denominator = fractions.iter().fold(int(1), |acc, (_, d)| lcm(&acc, d));
            let multipliers = fractions.iter()
                .map(|(_, d)| Integer::from(&common_denominator / d))
                .collect::<Vec<_>>();
            let changed = multipliers.iter().map(|m| *m != 1).collect::<Vec<_>>();

            // scale each fraction to the common denominator
            let scaled = fractions.iter()
                .zip(&multipliers)
                .zip(&current_terms)
                .map(|(((n, d), m), term)| if *m == 1 {
                    term.clone()
                } else {
                    Expr::div(
                        Expr::paren(Expr::constant(n.clone()) * Expr::constant(m.clone())),
                        Expr::paren(Expr::constant(d.clone()) * Expr::constant(m.clone())),
                    )
                })
                .collect::<Vec<_>>();
            substeps.push(terms_changed(ChangeType::CommonDenominator, &current_terms, scaled.clone(), &changed));
            current_terms = scaled;

            // multiply out the denominators
            let denominators_done = fractions.iter()
                .zip(&multipliers)
                .zip(&current_terms)
                .map(|(((n, _), m), term)| if *m == 1 {
                    term.clone()
                } else {
                    Expr::div(
                        Expr::paren(Expr::constant(n.clone()) * Expr::constant(m.clone())),
                        Expr::constant(common_denominator.clone()),
                    )
                })
                .collect::<Vec<_>>();
            substeps.push(terms_changed(ChangeType::MultiplyDenominators, &current_terms, denominators_done.clone(), &changed));
            current_terms = denominators_done;

            // multiply out the numerators
            let numerators = fractions.iter()
                .zip(&multipliers)
                .map(|((n, _), m)| Integer::from(n * m))
                .collect::<Vec<_>>();
            let numerators_done = numerators.iter()
                .map(|n| integer_fraction(n.clone(), common_denominator.clone()))
                .collect::<Vec<_>>();
            substeps.push(terms_changed(ChangeType::MultiplyNumerators, &current_terms, numerators_done.clone(), &changed));
            current_terms = numerators_done;

            (numerators, common_denominator)
        };

        // combine the numerators over the common denominator
        let current = Expr::add(current_terms);
        let combined = Expr::div(
            Expr::paren(Expr::add(numerators.iter().cloned().map(Expr::constant).collect())),
            Expr::constant(common_denominator.clone()),
        );
        substeps.push(ChangeRecord::node_changed(ChangeType::CombineNumerators, &current, combined.clone()));

        // add the numerators
        let sum = numerators.iter().fold(int(0), |acc, n| acc + n);
        let added = integer_fraction(sum.clone(), common_denominator);
        substeps.push(ChangeRecord::node_changed(ChangeType::AddNumerators, &combined, added.clone()));

        let mut result = added;
        if sum.cmp0() == Ordering::Equal {
            let zero = Expr::constant(0);
            substeps.push(ChangeRecord::node_changed(ChangeType::ReduceZeroNumerator, &result, zero.clone()));
            result = zero;
        } else if let Some(reduced) = divide_by_gcd(&result) {
            result = reduced.new_node.clone();
            result.clear_change_groups();
            substeps.push(reduced);
        }

        Some(ChangeRecord::node_changed(ChangeType::AddFractions, expr, result).with_substeps(substeps))
    })
}

/// `2 + 1/3 = 6/3 + 1/3 = 7/3`, `0.5 + 1/4 = 0.5 + 0.25 = 0.75`
///
/// An integer is first rewritten as a fraction over the same denominator, and the fractions are
/// then added. Any other constant is added to the value of the fraction instead.
pub fn add_constant_and_fraction(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        if terms.len() != 2 {
            return None;
        }

        let (constant_index, value) = terms.iter()
            .enumerate()
            .find_map(|(i, term)| term.constant_value().map(|value| (i, value)))?;
        let fraction_index = 1 - constant_index;
        let (numerator, denominator) = terms[fraction_index].as_integer_fraction()?;
        if denominator.cmp0() == Ordering::Equal {
            return None;
        }

        let mut changed = [false; 2];
        if value.is_integer() {
            changed[constant_index] = true;
            let mut as_fractions = terms.to_vec();
            let scaled = Integer::from(value.numer() * &denominator);
            as_fractions[constant_index] = integer_fraction(scaled, denominator);

            let convert = terms_changed(ChangeType::ConvertIntegerToFraction, terms, as_fractions.clone(), &changed);
            let added = add_constant_fractions(&Expr::add(as_fractions))?;

            let mut substeps = vec![convert];
            substeps.extend(added.substeps);
            let mut result = added.new_node;
            result.clear_change_groups();
            Some(ChangeRecord::node_changed(ChangeType::AddFractions, expr, result).with_substeps(substeps))
        } else {
            changed[fraction_index] = true;
            let fraction_value = Rational::from((numerator, denominator));
            let mut evaluated = terms.to_vec();
            evaluated[fraction_index] = Expr::constant(fraction_value.clone());

            let divide = terms_changed(ChangeType::DivideFractionForAddition, terms, evaluated.clone(), &changed);
            let result = Expr::constant(value + fraction_value);
            let add = ChangeRecord::node_changed(ChangeType::SimplifyArithmetic, &Expr::add(evaluated), result.clone());
            Some(ChangeRecord::node_changed(ChangeType::AddFractions, expr, result).with_substeps(vec![divide, add]))
        }
    })
}

/// `-a/-b = a/b`, `a/-b = -a/b`
pub fn simplify_fraction_signs(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        if !denominator.is_negative() {
            return None;
        }

        let change_type = if numerator.is_negative() {
            ChangeType::CancelMinuses
        } else {
            ChangeType::SimplifySigns
        };
        let new_expr = Expr::div(numerator.negate(), denominator.negate());
        Some(ChangeRecord::node_changed(change_type, expr, new_expr))
    })
}

/// `6/4 = (3 * 2)/(2 * 2) = 3/2`
///
/// The divisor takes the sign of the denominator, so the reduced denominator is positive.
pub fn divide_by_gcd(expr: &Expr) -> Option<ChangeRecord> {
    if !expr.is_div() {
        return None;
    }
    let (numerator, denominator) = expr.as_integer_fraction()?;
    if numerator.cmp0() == Ordering::Equal || denominator.cmp0() == Ordering::Equal {
        return None;
    }

    let divisor = reducing_divisor(&numerator, &denominator);
    if divisor == 1 || divisor == -1 {
        return None;
    }

    let new_numerator = numerator / &divisor;
    let new_denominator = denominator / &divisor;

    let found = Expr::div(
        Expr::paren(Expr::constant(new_numerator.clone()) * Expr::constant(divisor.clone())),
        Expr::paren(Expr::constant(new_denominator.clone()) * Expr::constant(divisor)),
    );
    let result = if new_denominator == 1 {
        Expr::constant(new_numerator)
    } else {
        integer_fraction(new_numerator, new_denominator)
    };

    let substeps = vec![
        ChangeRecord::node_changed(ChangeType::FindGcd, expr, found.clone()),
        ChangeRecord::node_changed(ChangeType::CancelGcd, &found, result.clone()),
    ];
    Some(ChangeRecord::node_changed(ChangeType::SimplifyFraction, expr, result).with_substeps(substeps))
}

/// `2x/4 = x/2`, `6x^2/3 = 2x^2`
pub fn simplify_polynomial_fraction(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let term = numerator.as_poly_term()?;
        if numerator.is_div() || !term.coefficient.is_integer() {
            return None;
        }
        let denominator = denominator.as_integer()?;
        if denominator.cmp0() == Ordering::Equal {
            return None;
        }

        let coefficient = term.coefficient.numer().clone();
        let divisor = reducing_divisor(&coefficient, &denominator);
        if divisor == 1 || divisor == -1 {
            return None;
        }

        let new_coefficient = coefficient / &divisor;
        let new_denominator = denominator / &divisor;
        let new_numerator = Expr::poly_term(term.symbol, term.exponent.clone(), new_coefficient.into(), false);
        let new_expr = if new_denominator == 1 {
            new_numerator
        } else {
            Expr::div(new_numerator, Expr::constant(new_denominator))
        };
        Some(ChangeRecord::node_changed(ChangeType::SimplifyFraction, expr, new_expr))
    })
}

/// Returns the factors of a product, or the expression itself.
fn factors_of(expr: &Expr) -> Vec<&Expr> {
    match &expr.kind {
        ExprKind::Mul(factors) => factors.iter().collect(),
        _ => vec![expr],
    }
}

/// Builds a product of the factors, or `1` if there are none.
fn product_of(factors: Vec<&Expr>) -> Expr {
    Expr::mul(factors.into_iter().cloned().collect()).downgrade()
}

/// `(2 * x)/(y * x) = 2/y`, `(x * y)/x = y`
pub fn cancel_like_terms(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        let mut numerator_factors = factors_of(numerator);
        let mut denominator_factors = factors_of(denominator);

        let (i, j) = numerator_factors.iter()
            .enumerate()
            .filter(|(_, factor)| !factor.is_value(0))
            .find_map(|(i, factor)| {
                denominator_factors.iter().position(|other| other == factor).map(|j| (i, j))
            })?;
        numerator_factors.remove(i);
        denominator_factors.remove(j);

        let new_numerator = product_of(numerator_factors);
        let new_expr = if denominator_factors.is_empty() {
            new_numerator
        } else {
            Expr::div(new_numerator, product_of(denominator_factors))
        };
        Some(ChangeRecord::node_changed(ChangeType::CancelTerms, expr, new_expr))
    })
}

/// Returns the base and integer exponent of a power, treating anything else as a power of `1`.
fn power_parts(expr: &Expr) -> Option<(&Expr, Integer)> {
    match &expr.kind {
        ExprKind::Exp(base, exponent) => Some((base, exponent.as_integer()?)),
        _ => Some((expr, int(1))),
    }
}

/// `x^5/x^2 = x^(5 - 2) = x^3`, `x/x^3 = 1/x^(3 - 1) = 1/x^2`
pub fn simplify_like_base_division(expr: &Expr) -> Option<ChangeRecord> {
    do_divide(expr, |numerator, denominator| {
        if !numerator.is_exp() && !denominator.is_exp() {
            return None;
        }

        let (base, numerator_exponent) = power_parts(numerator)?;
        let (other_base, denominator_exponent) = power_parts(denominator)?;
        if base != other_base || base.constant_value().is_some() {
            return None;
        }

        let difference = Integer::from(&numerator_exponent - &denominator_exponent);
        let (subtracted, evaluated) = if difference.cmp0() == Ordering::Less {
            let exponents = Expr::add(vec![
                Expr::constant(denominator_exponent),
                Expr::constant(-numerator_exponent),
            ]);
            (
                Expr::div(Expr::constant(1), Expr::pow(base.clone(), Expr::paren(exponents))),
                Expr::div(Expr::constant(1), Expr::pow(base.clone(), Expr::constant(-difference))),
            )
        } else {
            let exponents = Expr::add(vec![
                Expr::constant(numerator_exponent),
                Expr::constant(-denominator_exponent),
            ]);
            (
                Expr::pow(base.clone(), Expr::paren(exponents)),
                Expr::pow(base.clone(), Expr::constant(difference)),
            )
        };

        let substeps = vec![
            ChangeRecord::node_changed(ChangeType::SimplifyLikeBaseDivision, expr, subtracted.clone()),
            ChangeRecord::node_changed(ChangeType::SimplifyArithmetic, &subtracted, evaluated.clone()),
        ];
        Some(ChangeRecord::node_changed(ChangeType::SimplifyLikeBaseDivision, expr, evaluated).with_substeps(substeps))
    })
}

/// Applies the first fraction rule that matches the node itself.
pub fn all(expr: &Expr) -> Option<ChangeRecord> {
    add_constant_fractions(expr)
        .or_else(|| add_constant_and_fraction(expr))
        .or_else(|| simplify_fraction_signs(expr))
        .or_else(|| divide_by_gcd(expr))
        .or_else(|| simplify_polynomial_fraction(expr))
        .or_else(|| cancel_like_terms(expr))
        .or_else(|| simplify_like_base_division(expr))
}

/// Searches the tree top-down for a fraction to add, reduce or normalize.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    pre_order(expr, all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::build::*;
    use pretty_assertions::assert_eq;

    fn trace(record: &ChangeRecord) -> Vec<(ChangeType, String)> {
        record.substeps.iter()
            .map(|step| (step.change_type, step.new_node.to_string()))
            .collect()
    }

    #[test]
    fn add_fractions_with_different_denominators() {
        let record = add_constant_fractions(&(frac(2, 3) + frac(5, 6))).unwrap();
        assert_eq!(record.change_type, ChangeType::AddFractions);
        assert_eq!(record.new_node, frac(3, 2));
        assert_eq!(trace(&record), vec![
            (ChangeType::CommonDenominator, "(2 * 2)/(3 * 2) + 5/6".to_string()),
            (ChangeType::MultiplyDenominators, "(2 * 2)/6 + 5/6".to_string()),
            (ChangeType::MultiplyNumerators, "4/6 + 5/6".to_string()),
            (ChangeType::CombineNumerators, "(4 + 5)/6".to_string()),
            (ChangeType::AddNumerators, "9/6".to_string()),
            (ChangeType::SimplifyFraction, "3/2".to_string()),
        ]);

        // only the rescaled fraction is tagged
        let common = &record.substeps[0];
        assert_eq!(common.new_node.child(0).and_then(|child| child.change_group), Some(1));
        assert_eq!(common.new_node.child(1).and_then(|child| child.change_group), None);
    }

    #[test]
    fn add_fractions_with_same_denominator() {
        let record = add_constant_fractions(&(frac(1, 4) + frac(1, 4))).unwrap();
        assert_eq!(record.new_node, frac(1, 2));
        assert_eq!(
            record.substeps.iter().map(|step| step.change_type).collect::<Vec<_>>(),
            vec![ChangeType::CombineNumerators, ChangeType::AddNumerators, ChangeType::SimplifyFraction],
        );
    }

    #[test]
    fn add_fractions_to_zero() {
        let record = add_constant_fractions(&(frac(1, 2) + frac(-1, 2))).unwrap();
        assert_eq!(record.new_node, c(0));
        assert_eq!(record.substeps.last().map(|step| step.change_type), Some(ChangeType::ReduceZeroNumerator));
    }

    #[test]
    fn empty_sum() {
        assert_eq!(add_constant_fractions(&Expr::add(vec![])), None);
        assert_eq!(search(&Expr::add(vec![])), None);
    }

    #[test]
    fn add_integer_and_fraction() {
        let record = add_constant_and_fraction(&(c(2) + frac(1, 3))).unwrap();
        assert_eq!(record.new_node, frac(7, 3));
        assert_eq!(trace(&record), vec![
            (ChangeType::ConvertIntegerToFraction, "6/3 + 1/3".to_string()),
            (ChangeType::CombineNumerators, "(6 + 1)/3".to_string()),
            (ChangeType::AddNumerators, "7/3".to_string()),
        ]);
    }

    #[test]
    fn add_decimal_and_fraction() {
        let record = add_constant_and_fraction(&(Expr::constant((1, 2)) + frac(1, 4))).unwrap();
        assert_eq!(record.new_node, Expr::constant((3, 4)));
        assert_eq!(record.substeps[0].change_type, ChangeType::DivideFractionForAddition);
        assert_eq!(record.substeps[0].new_node.to_string(), "0.5 + 0.25");
    }

    #[test]
    fn signs() {
        let record = search(&frac(2, -3)).unwrap();
        assert_eq!((record.change_type, record.new_node), (ChangeType::SimplifySigns, frac(-2, 3)));

        let record = search(&Expr::div(Expr::neg(s("x")), c(-3))).unwrap();
        assert_eq!((record.change_type, record.new_node), (ChangeType::CancelMinuses, Expr::div(s("x"), c(3))));

        assert_eq!(simplify_fraction_signs(&frac(-2, 3)), None);
    }

    #[test]
    fn gcd() {
        let record = divide_by_gcd(&frac(6, 4)).unwrap();
        assert_eq!(record.new_node, frac(3, 2));
        assert_eq!(trace(&record), vec![
            (ChangeType::FindGcd, "(3 * 2)/(2 * 2)".to_string()),
            (ChangeType::CancelGcd, "3/2".to_string()),
        ]);

        assert_eq!(divide_by_gcd(&frac(8, 4)).map(|r| r.new_node), Some(c(2)));
        assert_eq!(divide_by_gcd(&frac(2, -4)).map(|r| r.new_node), Some(frac(-1, 2)));
        assert_eq!(divide_by_gcd(&frac(2, 3)), None);
        assert_eq!(divide_by_gcd(&frac(0, 3)), None);
    }

    #[test]
    fn polynomial_fraction() {
        let record = search(&Expr::div(term(2, "x", 1), c(4))).unwrap();
        assert_eq!(record.new_node, Expr::div(s("x"), c(2)));

        let record = search(&Expr::div(term(6, "x", 2), c(3))).unwrap();
        assert_eq!(record.new_node, term(2, "x", 2));

        assert_eq!(search(&Expr::div(s("x"), c(4))), None);
    }

    #[test]
    fn cancel_terms() {
        let record = search(&Expr::div(c(2) * s("x"), s("y") * s("x"))).unwrap();
        assert_eq!(record.change_type, ChangeType::CancelTerms);
        assert_eq!(record.new_node, Expr::div(c(2), s("y")));

        let record = search(&Expr::div(s("x") * s("y"), s("x"))).unwrap();
        assert_eq!(record.new_node, s("y"));
    }

    #[test]
    fn like_base_division() {
        let record = search(&Expr::div(Expr::pow(s("x"), c(5)), Expr::pow(s("x"), c(2)))).unwrap();
        assert_eq!(record.change_type, ChangeType::SimplifyLikeBaseDivision);
        assert_eq!(record.new_node, Expr::pow(s("x"), c(3)));
        assert_eq!(record.substeps[0].new_node.to_string(), "x^(5 - 2)");

        let record = search(&Expr::div(s("x"), Expr::pow(s("x"), c(3)))).unwrap();
        assert_eq!(record.new_node, Expr::div(c(1), Expr::pow(s("x"), c(2))));
    }
}
