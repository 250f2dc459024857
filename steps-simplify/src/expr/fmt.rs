use crate::primitive::terminating_decimal;
use rug::Rational;
use std::{cmp::Ordering, fmt, ops::Range};
use super::{Expr, ExprKind};

/// Renders an expression to a string, optionally recording where one of its subtrees was
/// written.
struct Printer<'t> {
    out: String,
    target: Option<&'t Expr>,
    span: Option<Range<usize>>,
}

impl<'t> Printer<'t> {
    fn new(target: Option<&'t Expr>) -> Self {
        Self { out: String::new(), target, span: None }
    }

    /// Records the span of `expr` if it is the target.
    fn mark(&mut self, expr: &Expr, start: usize) {
        if self.span.is_some() {
            return;
        }
        if let Some(target) = self.target {
            if std::ptr::eq(target, expr) {
                self.span = Some(start..self.out.len());
            }
        }
    }

    fn print(&mut self, expr: &Expr) {
        let start = self.out.len();
        self.print_kind(expr);
        self.mark(expr, start);
    }

    fn print_grouped(&mut self, expr: &Expr, group: bool) {
        if group {
            self.out.push('(');
            self.print(expr);
            self.out.push(')');
        } else {
            self.print(expr);
        }
    }

    fn print_constant(&mut self, value: &Rational) {
        match terminating_decimal(value) {
            Some(decimal) => self.out.push_str(&decimal),
            None => self.out.push_str(&format!("({}/{})", value.numer(), value.denom())),
        }
    }

    fn print_kind(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Constant(value) => self.print_constant(value),
            ExprKind::Symbol(name) => self.out.push_str(name),
            ExprKind::Neg(inner) => {
                self.out.push('-');
                self.print_grouped(inner, needs_group_after_minus(inner));
            },
            ExprKind::Paren(inner) => self.print_grouped(inner, true),
            ExprKind::Add(terms) => {
                for (i, term) in terms.iter().enumerate() {
                    if i == 0 {
                        self.print(term);
                    } else {
                        self.print_addend(term);
                    }
                }
            },
            ExprKind::Mul(factors) => self.print_product(factors, false),
            ExprKind::Div(numerator, denominator) => self.print_fraction(numerator, denominator),
            ExprKind::Exp(base, exponent) => {
                self.print_grouped(base, !is_atomic(base));
                self.out.push('^');
                self.print_grouped(exponent, !is_atomic(exponent));
            },
            ExprKind::Call(name, args) => {
                self.out.push_str(name);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.print(arg);
                }
                self.out.push(')');
            },
        }
    }

    /// Prints a term after the first one in a sum, turning a leading minus sign into `-`.
    fn print_addend(&mut self, term: &Expr) {
        self.out.push(' ');
        let start = self.out.len();
        match &term.kind {
            ExprKind::Neg(inner) => {
                self.out.push_str("- ");
                self.print_grouped(inner, matches!(inner.kind, ExprKind::Add(_) | ExprKind::Neg(_)));
            },
            ExprKind::Constant(value) if value.cmp0() == Ordering::Less => {
                self.out.push_str("- ");
                self.print_constant(&Rational::from(-value));
            },
            ExprKind::Div(numerator, denominator) if numerator.is_negative() => {
                self.out.push_str("- ");
                self.print_fraction(&numerator.negate(), denominator);
            },
            ExprKind::Mul(factors) if factors.first().map_or(false, |first| {
                first.as_constant().map_or(false, |value| value.cmp0() == Ordering::Less)
            }) => {
                self.out.push_str("- ");
                self.print_product(factors, true);
            },
            _ => {
                self.out.push_str("+ ");
                self.print(term);
            },
        }
        self.mark(term, start);
    }

    fn print_fraction(&mut self, numerator: &Expr, denominator: &Expr) {
        self.print_grouped(numerator, matches!(numerator.kind, ExprKind::Add(_) | ExprKind::Div(..)));
        self.out.push('/');
        self.print_grouped(
            denominator,
            matches!(denominator.kind, ExprKind::Add(_) | ExprKind::Mul(_) | ExprKind::Div(..)),
        );
    }

    /// Prints a product. Polynomial terms and a constant times a group use implicit
    /// multiplication, such as `2x` or `3(x + 1)`.
    ///
    /// If `negate_first` is set, the first factor must be a constant, and it is printed negated.
    fn print_product(&mut self, factors: &[Expr], negate_first: bool) {
        let implicit = match factors {
            [coefficient, rest] if coefficient.is_constant() || is_plain_fraction(coefficient) => {
                match &rest.kind {
                    ExprKind::Symbol(_) | ExprKind::Paren(_) | ExprKind::Call(..) => true,
                    ExprKind::Exp(base, _) => base.is_symbol(),
                    _ => false,
                }
            },
            // grouped coefficients, such as `(2 + 5)x`
            [coefficient, rest] if coefficient.is_paren() => match &rest.kind {
                ExprKind::Symbol(_) => true,
                ExprKind::Exp(base, _) => base.is_symbol(),
                _ => false,
            },
            _ => false,
        };

        for (i, factor) in factors.iter().enumerate() {
            if i > 0 {
                if !implicit {
                    self.out.push_str(" * ");
                } else if is_plain_fraction(&factors[0]) {
                    self.out.push(' ');
                }
            }

            match (i, factor.as_constant()) {
                (0, Some(value)) if negate_first => {
                    let start = self.out.len();
                    self.print_constant(&Rational::from(-value));
                    self.mark(factor, start);
                },
                _ => self.print_grouped(factor, matches!(factor.kind, ExprKind::Add(_))),
            }
        }
    }
}

/// Returns true if the expression is a division of two constants without any other decoration.
fn is_plain_fraction(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Div(numerator, denominator) => numerator.is_constant() && denominator.is_constant(),
        _ => false,
    }
}

/// Returns true if the expression needs no parentheses as a base or exponent.
fn is_atomic(expr: &Expr) -> bool {
    match &expr.kind {
        ExprKind::Constant(value) => value.is_integer() && value.cmp0() != Ordering::Less,
        ExprKind::Symbol(_) | ExprKind::Paren(_) | ExprKind::Call(..) => true,
        _ => false,
    }
}

fn needs_group_after_minus(inner: &Expr) -> bool {
    match &inner.kind {
        ExprKind::Add(_) | ExprKind::Neg(_) => true,
        ExprKind::Constant(value) => value.cmp0() == Ordering::Less,
        _ => false,
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut printer = Printer::new(None);
        printer.print(self);
        f.write_str(&printer.out)
    }
}

impl Expr {
    /// Renders the expression, and returns the rendering together with the range of it where
    /// `subtree` was written.
    ///
    /// `subtree` is found by identity, so it must be a reference into this tree. If it is not,
    /// the range covers the whole rendering.
    pub fn locate(&self, subtree: &Expr) -> (String, Range<usize>) {
        let mut printer = Printer::new(Some(subtree));
        printer.print(self);
        let span = printer.span.unwrap_or(0..printer.out.len());
        (printer.out, span)
    }
}

#[cfg(test)]
mod tests {
    use super::super::build::*;
    use super::*;
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;

    #[test]
    fn polynomial_terms() {
        assert_eq!(term(2, "x", 1).to_string(), "2x");
        assert_eq!(term(4, "x", 2).to_string(), "4x^2");
        assert_eq!(term(-1, "x", 1).to_string(), "-x");
        assert_eq!(Expr::poly_term("x", 1.into(), rational(1), true).to_string(), "1x");
        assert_eq!(Expr::poly_term("x", 1.into(), rational((2, 3)), false).to_string(), "2/3 x");
    }

    #[test]
    fn sums_with_negative_terms() {
        let expr = Expr::add(vec![term(4, "x", 2), Expr::neg(s("y")), c(-3), term(-7, "x", 1)]);
        assert_eq!(expr.to_string(), "4x^2 - y - 3 - 7x");
        assert_eq!(Expr::add(vec![c(3), frac(-1, 2)]).to_string(), "3 - 1/2");
    }

    #[test]
    fn precedence() {
        assert_eq!(Expr::mul(vec![c(2), Expr::paren(s("x") + c(1))]).to_string(), "2(x + 1)");
        assert_eq!(Expr::mul(vec![s("x"), s("y"), c(2)]).to_string(), "x * y * 2");
        assert_eq!(Expr::mul(vec![Expr::paren(c(2) + c(5)), s("x")]).to_string(), "(2 + 5)x");
        assert_eq!(Expr::div(c(1) + s("x"), c(2) * s("y")).to_string(), "(1 + x)/(2y)");
        assert_eq!(Expr::pow(c(-2), c(2)).to_string(), "(-2)^2");
        assert_eq!(Expr::neg(s("x") + c(1)).to_string(), "-(x + 1)");
        assert_eq!(Expr::call("nthRoot", vec![c(8), c(3)]).to_string(), "nthRoot(8, 3)");
    }

    #[test]
    fn constants() {
        assert_eq!(Expr::constant((1, 4)).to_string(), "0.25");
        assert_eq!(Expr::constant((1, 3)).to_string(), "(1/3)");
        assert_eq!(frac(-2, 9).to_string(), "-2/9");
    }

    #[test]
    fn locate_subtree() {
        let expr = s("x") + Expr::neg(s("y")) + c(2);
        let (rendered, span) = expr.locate(expr.child(1).unwrap());
        assert_eq!(rendered, "x - y + 2");
        assert_eq!(&rendered[span], "- y");

        let (_, span) = expr.locate(&s("x"));
        assert_eq!(span, 0..9);
    }
}
