use crate::primitive::{int, rational};
use rug::{Integer, Rational};
use std::cmp::Ordering;
use super::{Expr, ExprKind};

/// A view of a polynomial term: `coefficient * symbol^exponent`.
///
/// The following shapes are recognized, where `s` is a symbol, `n` a non-negative integer
/// constant, `c` a constant or integer fraction, and `d` a non-zero integer constant:
///
/// - `s`, `s^n`
/// - `c * s`, `c * s^n` (exactly two factors, coefficient first)
/// - `-term`
/// - `term / d`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyTerm<'a> {
    /// The symbol of the term.
    pub symbol: &'a str,

    /// The exponent of the symbol.
    pub exponent: Integer,

    /// The coefficient of the term, with every sign and denominator folded in.
    pub coefficient: Rational,

    /// Whether the coefficient is written out.
    pub explicit: bool,
}

impl<'a> PolyTerm<'a> {
    /// Returns the term view of the expression, if it is a polynomial term.
    pub fn from_expr(expr: &'a Expr) -> Option<Self> {
        match &expr.kind {
            ExprKind::Symbol(_) | ExprKind::Exp(..) => Self::from_base(expr, rational(1), false),
            ExprKind::Mul(factors) => match factors.as_slice() {
                [coefficient, base] => {
                    let coefficient = coefficient_value(coefficient)?;
                    Self::from_base(base, coefficient, expr.explicit_coefficient)
                },
                _ => None,
            },
            ExprKind::Neg(inner) => {
                let mut term = Self::from_expr(inner)?;
                term.coefficient = -term.coefficient;
                Some(term)
            },
            ExprKind::Div(numerator, denominator) if !numerator.is_div() => {
                let denominator = denominator.as_integer().filter(|d| d.cmp0() != Ordering::Equal)?;
                let mut term = Self::from_expr(numerator)?;
                term.coefficient /= Rational::from(denominator);
                Some(term)
            },
            _ => None,
        }
    }

    /// Builds the view for a bare symbol or power of a symbol.
    fn from_base(base: &'a Expr, coefficient: Rational, explicit: bool) -> Option<Self> {
        match &base.kind {
            ExprKind::Symbol(symbol) => Some(Self { symbol, exponent: int(1), coefficient, explicit }),
            ExprKind::Exp(lhs, rhs) => {
                let ExprKind::Symbol(symbol) = &lhs.kind else {
                    return None;
                };
                let exponent = rhs.as_constant()
                    .filter(|value| value.is_integer() && value.cmp0() != Ordering::Less)?
                    .numer()
                    .clone();
                Some(Self { symbol, exponent, coefficient, explicit })
            },
            _ => None,
        }
    }

    /// Returns true if the coefficient is exactly `1` and not written out.
    pub fn has_implicit_unit_coefficient(&self) -> bool {
        self.coefficient == 1 && !self.explicit
    }

    /// Returns true if this term has the same symbol and exponent as the other.
    pub fn is_like(&self, other: &PolyTerm) -> bool {
        self.symbol == other.symbol && self.exponent == other.exponent
    }

    /// Builds the term `symbol^exponent`, without a coefficient.
    pub fn base(&self) -> Expr {
        Expr::poly_term(self.symbol, self.exponent.clone(), rational(1), false)
    }

    /// Builds the tree for this term.
    pub fn to_expr(&self) -> Expr {
        Expr::poly_term(self.symbol, self.exponent.clone(), self.coefficient.clone(), self.explicit)
    }
}

/// Returns the value of a coefficient: a constant or an integer fraction.
fn coefficient_value(expr: &Expr) -> Option<Rational> {
    if let Some(value) = expr.constant_value() {
        return Some(value);
    }

    let (numerator, denominator) = expr.as_integer_fraction()?;
    if denominator.cmp0() == Ordering::Equal {
        return None;
    }
    Some(Rational::from((numerator, denominator)))
}
