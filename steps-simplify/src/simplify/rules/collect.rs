//! Collecting like terms of a sum or product into groups, and combining each group.
//!
//! The operands of a sum or product are sorted into buckets by [`TermKind`]. Buckets with more
//! than one member are wrapped in parentheses, and then each parenthesized group is combined
//! into a single term:
//!
//! ```text
//! 2x + 4x^2 + 5x
//! = 4x^2 + (2x + 5x)    collect like terms
//! = 4x^2 + 7x           add polynomial terms
//! ```
//!
//! Both rewrites are reported as substeps of one [`ChangeType::CollectAndCombineLikeTerms`]
//! record.

use crate::{
    change::{ChangeRecord, ChangeType},
    expr::{Expr, ExprKind, GroupKind, PolyTerm},
    primitive::{int, rational},
    simplify::search::post_order,
};
use rug::Integer;
use std::cmp::Ordering;
use super::{
    do_add,
    do_multiply,
    fractions::{add_constant_and_fraction, add_constant_fractions},
    numeric_value,
    terms_changed,
    value_expr,
};

/// The bucket an operand of a sum or product is collected into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// A polynomial term. Under a product, the exponent is ignored, since powers of the same
    /// symbol multiply together regardless of exponent.
    Polynomial {
        symbol: String,
        exponent: Option<Integer>,
    },

    /// A constant.
    Constant,

    /// A division of two integers. Under a product, these are collected with the constants.
    ConstantFraction,

    /// Anything else. These are never grouped.
    Other,
}

impl TermKind {
    /// The position of the bucket when reassembling a sum or product.
    fn rank(&self, parent: GroupKind) -> u8 {
        match (self, parent) {
            (TermKind::Polynomial { .. }, GroupKind::Add) | (TermKind::Constant, GroupKind::Mul) => 0,
            (TermKind::Constant, GroupKind::Add) | (TermKind::Polynomial { .. }, GroupKind::Mul) => 1,
            (TermKind::ConstantFraction, _) => 2,
            (TermKind::Other, _) => 3,
        }
    }

    /// Compares two buckets of the same sum or product. Polynomial buckets are ordered by symbol,
    /// then by exponent, highest first.
    pub fn cmp_within(&self, other: &Self, parent: GroupKind) -> Ordering {
        self.rank(parent).cmp(&other.rank(parent)).then_with(|| match (self, other) {
            (
                TermKind::Polynomial { symbol, exponent },
                TermKind::Polynomial { symbol: other_symbol, exponent: other_exponent },
            ) => symbol.cmp(other_symbol).then_with(|| other_exponent.cmp(exponent)),
            _ => Ordering::Equal,
        })
    }
}

/// Returns true if the expression is a division of two integers with a non-zero denominator.
fn is_proper_integer_fraction(expr: &Expr) -> bool {
    expr.as_integer_fraction()
        .map_or(false, |(_, denominator)| denominator.cmp0() != Ordering::Equal)
}

/// Classifies a term of a sum.
fn classify_term(term: &Expr) -> TermKind {
    if let Some(view) = term.as_poly_term() {
        TermKind::Polynomial {
            symbol: view.symbol.to_string(),
            exponent: Some(view.exponent),
        }
    } else if term.constant_value().is_some() {
        TermKind::Constant
    } else if is_proper_integer_fraction(term) {
        TermKind::ConstantFraction
    } else {
        TermKind::Other
    }
}

/// Classifies a factor of a product, splitting coefficients and minus signs out of polynomial
/// terms.
fn classify_factor(factor: &Expr, members: &mut Vec<(TermKind, Expr)>) {
    if let Some(view) = factor.as_poly_term() {
        let kind = TermKind::Polynomial {
            symbol: view.symbol.to_string(),
            exponent: None,
        };
        if view.has_implicit_unit_coefficient() {
            members.push((kind, factor.clone()));
        } else {
            members.push((TermKind::Constant, Expr::rational(view.coefficient.clone())));
            members.push((kind, view.base()));
        }
    } else if factor.constant_value().is_some() || is_proper_integer_fraction(factor) {
        members.push((TermKind::Constant, factor.clone()));
    } else if let ExprKind::Neg(inner) = &factor.kind {
        members.push((TermKind::Constant, Expr::constant(-1)));
        classify_factor(inner, members);
    } else {
        members.push((TermKind::Other, factor.clone()));
    }
}

/// The members of one bucket, and the operands they came from.
#[derive(Debug)]
struct Bucket {
    kind: TermKind,
    members: Vec<Expr>,
    sources: Vec<usize>,
}

/// Sorts the operands into buckets, in order of first appearance.
fn fill_buckets(parent: GroupKind, operands: &[Expr]) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();
    for (index, operand) in operands.iter().enumerate() {
        let mut members = Vec::new();
        match parent {
            GroupKind::Add => members.push((classify_term(operand), operand.clone())),
            GroupKind::Mul => classify_factor(operand, &mut members),
        }

        for (kind, member) in members {
            match buckets.iter_mut().find(|bucket| bucket.kind == kind) {
                Some(bucket) => {
                    bucket.members.push(member);
                    bucket.sources.push(index);
                },
                None => buckets.push(Bucket { kind, members: vec![member], sources: vec![index] }),
            }
        }
    }
    buckets
}

fn build(parent: GroupKind, operands: Vec<Expr>) -> Expr {
    match parent {
        GroupKind::Add => Expr::add(operands),
        GroupKind::Mul => Expr::mul(operands),
    }
}

/// `2x + 4x^2 + 5x = 4x^2 + (2x + 5x) = 4x^2 + 7x`
pub fn collect_and_combine_like_terms(expr: &Expr) -> Option<ChangeRecord> {
    let (parent, operands) = match &expr.kind {
        ExprKind::Add(terms) => (GroupKind::Add, terms),
        ExprKind::Mul(factors) => (GroupKind::Mul, factors),
        _ => return None,
    };

    let mut buckets = fill_buckets(parent, operands);
    let collectable = buckets.len() >= 2
        && buckets.iter().any(|bucket| bucket.kind != TermKind::Other && bucket.members.len() >= 2);
    if !collectable {
        return match parent {
            GroupKind::Add => add_like_polynomial_terms(expr),
            GroupKind::Mul => multiply_like_terms(expr),
        };
    }
    buckets.sort_by(|a, b| a.kind.cmp_within(&b.kind, parent));

    let mut old_groups = vec![0; operands.len()];
    let mut new_operands = Vec::new();
    let mut group_positions = Vec::new();
    for (bucket, group) in buckets.into_iter().zip(1..) {
        for &index in &bucket.sources {
            if old_groups[index] == 0 {
                old_groups[index] = group;
            }
        }

        if bucket.kind == TermKind::Other || bucket.members.len() == 1 {
            new_operands.extend(bucket.members.into_iter().map(|member| member.with_group(group)));
        } else {
            group_positions.push(new_operands.len());
            new_operands.push(Expr::grouped(parent, bucket.members).with_group(group));
        }
    }

    let old = build(parent, operands.iter()
        .zip(old_groups)
        .map(|(operand, group)| operand.clone().with_group(group))
        .collect());
    let collected = build(parent, new_operands);
    let mut substeps = vec![ChangeRecord::tagged(ChangeType::CollectLikeTerms, old, collected.clone())];

    let mut current = collected;
    current.clear_change_groups();
    for index in group_positions {
        let group = current.child(index)?;
        let record = combine_group(group.unparen())?;
        let old_node = current.with_child(index, group.clone().with_group(1));

        let mut lifted = ChangeRecord::child_changed(&current, record, index);
        lifted.old_node = old_node;
        current = lifted.new_node.clone();
        current.clear_change_groups();
        substeps.push(lifted);
    }

    Some(ChangeRecord::node_changed(ChangeType::CollectAndCombineLikeTerms, expr, current).with_substeps(substeps))
}

/// Combines the contents of a group created by collecting like terms.
fn combine_group(group: &Expr) -> Option<ChangeRecord> {
    match &group.kind {
        ExprKind::Add(_) => evaluate_constant_sum(group).or_else(|| add_like_polynomial_terms(group)),
        ExprKind::Mul(_) => evaluate_constant_product(group).or_else(|| multiply_like_terms(group)),
        _ => None,
    }
}

/// Adds a sum of constants and fractions.
///
/// Sums of fractions, or of an integer and a fraction, are added with their substeps. Any other
/// sum of constants is evaluated in one step.
pub fn evaluate_constant_sum(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        let values = terms.iter().map(numeric_value).collect::<Option<Vec<_>>>()?;

        if terms.iter().all(Expr::is_integer_fraction) {
            if let Some(record) = add_constant_fractions(expr) {
                return Some(record);
            }
        }
        if let Some(record) = add_constant_and_fraction(expr) {
            return Some(record);
        }

        let from_fractions = terms.iter().any(Expr::is_div);
        let sum = values.into_iter().fold(rational(0), |acc, value| acc + value);
        Some(ChangeRecord::node_changed(ChangeType::SimplifyArithmetic, expr, value_expr(sum, from_fractions)))
    })
}

/// Multiplies a product of constants and fractions.
pub fn evaluate_constant_product(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        let values = factors.iter().map(numeric_value).collect::<Option<Vec<_>>>()?;

        let from_fractions = factors.iter().any(Expr::is_div);
        let change_type = if from_fractions {
            ChangeType::MultiplyFractions
        } else {
            ChangeType::SimplifyArithmetic
        };
        let product = values.into_iter().fold(rational(1), |acc, value| acc * value);
        Some(ChangeRecord::node_changed(change_type, expr, value_expr(product, from_fractions)))
    })
}

/// `x + 2x - x = 1x + 2x - 1x = (1 + 2 - 1)x = 2x`
pub fn add_like_polynomial_terms(expr: &Expr) -> Option<ChangeRecord> {
    do_add(expr, |terms| {
        let views = terms.iter().map(Expr::as_poly_term).collect::<Option<Vec<_>>>()?;
        let first = views.first()?;
        if views.len() < 2 || views.iter().any(|view| !view.is_like(first)) {
            return None;
        }

        let mut substeps = Vec::new();
        let mut current = terms.to_vec();

        // write out implicit coefficients, first `1`, then `-1`
        let rewrites: [(ChangeType, fn(&PolyTerm) -> bool); 2] = [
            (ChangeType::AddCoefficientOfOne, |view| view.has_implicit_unit_coefficient()),
            (ChangeType::UnaryMinusToNegativeOne, |view| view.coefficient == -1 && !view.explicit),
        ];
        for (change_type, applies) in rewrites {
            let changed = views.iter().map(applies).collect::<Vec<_>>();
            if !changed.contains(&true) {
                continue;
            }

            let next = views.iter()
                .zip(&current)
                .zip(&changed)
                .map(|((view, term), &changed)| if changed {
                    Expr::poly_term(view.symbol, view.exponent.clone(), view.coefficient.clone(), true)
                } else {
                    term.clone()
                })
                .collect::<Vec<_>>();
            substeps.push(terms_changed(change_type, &current, next.clone(), &changed));
            current = next;
        }

        let coefficients = views.iter()
            .map(|view| Expr::rational(view.coefficient.clone()))
            .collect();
        let grouped = Expr::mul(vec![Expr::paren(Expr::add(coefficients)), first.base()]);
        substeps.push(ChangeRecord::node_changed(ChangeType::GroupCoefficients, &Expr::add(current), grouped.clone()));

        let sum = views.iter().fold(rational(0), |acc, view| acc + &view.coefficient);
        let result = Expr::poly_term(first.symbol, first.exponent.clone(), sum, false);
        substeps.push(ChangeRecord::node_changed(ChangeType::SimplifyArithmetic, &grouped, result.clone()));

        Some(ChangeRecord::node_changed(ChangeType::AddPolynomialTerms, expr, result).with_substeps(substeps))
    })
}

/// `2x * 3x^2 = 6 * x * x^2 = 6x^1 * x^2 = 6x^(1 + 2) = 6x^3`, `10^3 * 10^2 = 10^(3 + 2)`
pub fn multiply_like_terms(expr: &Expr) -> Option<ChangeRecord> {
    do_multiply(expr, |factors| {
        multiply_polynomial_terms(expr, factors)
            .or_else(|| collect_constant_exponents(expr, factors))
    })
}

/// Multiplies polynomial terms in the same symbol.
fn multiply_polynomial_terms(expr: &Expr, factors: &[Expr]) -> Option<ChangeRecord> {
    let views = factors.iter().map(Expr::as_poly_term).collect::<Option<Vec<_>>>()?;
    let symbol = views.first()?.symbol;
    if views.len() < 2 || views.iter().any(|view| view.symbol != symbol) {
        return None;
    }

    let coefficient = views.iter().fold(rational(1), |acc, view| acc * &view.coefficient);
    let prefix = if coefficient == 1 {
        Vec::new()
    } else {
        vec![Expr::rational(coefficient.clone())]
    };
    let with_coefficient = |rest: Vec<Expr>| {
        let mut factors = prefix.clone();
        factors.extend(rest);
        Expr::mul(factors).downgrade()
    };

    let mut substeps = Vec::new();
    let mut current = expr.clone();

    if views.iter().any(|view| !view.has_implicit_unit_coefficient()) {
        let next = with_coefficient(views.iter().map(PolyTerm::base).collect());
        substeps.push(ChangeRecord::node_changed(ChangeType::MultiplyCoefficients, &current, next.clone()));
        current = next;
    }

    if views.iter().any(|view| view.exponent == 1) {
        let next = with_coefficient(views.iter()
            .map(|view| Expr::pow(Expr::symbol(symbol), Expr::constant(view.exponent.clone())))
            .collect());
        substeps.push(ChangeRecord::node_changed(ChangeType::AddExponentOfOne, &current, next.clone()));
        current = next;
    }

    let exponents = Expr::add(views.iter().map(|view| Expr::constant(view.exponent.clone())).collect());
    let collected = with_coefficient(vec![Expr::pow(Expr::symbol(symbol), Expr::paren(exponents))]);
    substeps.push(ChangeRecord::node_changed(ChangeType::CollectPolynomialExponents, &current, collected.clone()));

    let exponent = views.iter().fold(int(0), |acc, view| acc + &view.exponent);
    let result = Expr::poly_term(symbol, exponent, coefficient, false);
    substeps.push(ChangeRecord::node_changed(ChangeType::AddExponents, &collected, result.clone()));

    Some(ChangeRecord::node_changed(ChangeType::MultiplyPolynomialTerms, expr, result).with_substeps(substeps))
}

/// Collects the exponents of powers of the same constant base.
fn collect_constant_exponents(expr: &Expr, factors: &[Expr]) -> Option<ChangeRecord> {
    let powers = factors.iter()
        .map(|factor| match &factor.kind {
            ExprKind::Exp(base, exponent) => Some((&**base, &**exponent)),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()?;
    let (base, _) = powers.first()?;
    base.constant_value()?;
    if powers.len() < 2 || powers.iter().any(|(other, _)| other != base) {
        return None;
    }

    let exponents = Expr::add(powers.iter().map(|(_, exponent)| (*exponent).clone()).collect());
    let new_expr = Expr::pow((*base).clone(), Expr::paren(exponents));
    Some(ChangeRecord::node_changed(ChangeType::CollectConstantExponents, expr, new_expr))
}

/// Searches the tree bottom-up for a sum or product with like terms.
pub fn search(expr: &Expr) -> Option<ChangeRecord> {
    post_order(expr, collect_and_combine_like_terms)
}
