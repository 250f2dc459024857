//! The expression tree that every rule rewrites.
//!
//! An [`Expr`] is an owned tree of [`ExprKind`] nodes, each carrying two pieces of metadata that
//! only exist for the benefit of the step trace:
//!
//! - a [`change_group`](Expr::change_group) tag, which correlates the subtrees of an old tree with
//!   the subtrees of the new tree that replaced them, so that a caller can highlight them;
//! - an [`explicit_coefficient`](Expr::explicit_coefficient) flag, which marks a polynomial term
//!   whose coefficient of `1` or `-1` is written out (`1x`) so a learner can see where it came
//!   from.
//!
//! Unlike a syntax tree, [`ExprKind::Add`] and [`ExprKind::Mul`] are n-ary, and nested operations
//! of the same kind are merged by [`Expr::flatten`]. Parentheses are kept as
//! [`ExprKind::Paren`] nodes: they are meaningless to the value of the expression, but the rules
//! use them to mark groups of terms that a learner should see grouped.
//!
//! # Strict equality
//!
//! The [`PartialEq`] implementation for [`Expr`] compares the shape of two trees, node by node
//! and in order, ignoring the metadata. `x + 2` and `2 + x` are **not** equal under this
//! definition, and neither are `x` and `(x)`. Rules only ever use equality to find factors or
//! terms that are written identically, so this never reports a false positive.

mod flatten;
mod fmt;
mod iter;
mod term;

pub use iter::ExprIter;
pub use term::PolyTerm;

use crate::{
    error::{EmptyName, MalformedOperator},
    primitive::{int, rational},
};
use rug::{Integer, Rational};
use std::{cmp::Ordering, ops::{Add, Div, Mul, Neg, Sub}};
use steps_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of a node in the expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExprKind {
    /// An exact rational constant, such as `2`, `-3` or `0.5`.
    Constant(Rational),

    /// A variable, such as `x`.
    Symbol(String),

    /// Unary minus.
    Neg(Box<Expr>),

    /// Explicit grouping.
    Paren(Box<Expr>),

    /// Two or more terms added together.
    Add(Vec<Expr>),

    /// Two or more factors multiplied together.
    Mul(Vec<Expr>),

    /// A numerator divided by a denominator.
    Div(Box<Expr>, Box<Expr>),

    /// A base raised to an exponent.
    Exp(Box<Expr>, Box<Expr>),

    /// A function call, such as `abs(x)` or `nthRoot(8, 3)`.
    Call(String, Vec<Expr>),
}

/// A node in the expression tree.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expr {
    /// What this node is.
    pub kind: ExprKind,

    /// Tag shared by the old and new subtrees of a single rewrite.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub change_group: Option<u32>,

    /// Whether a coefficient of `1` or `-1` on this polynomial term is written out.
    #[cfg_attr(feature = "serde", serde(default))]
    pub explicit_coefficient: bool,
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Expr {}

impl From<ExprKind> for Expr {
    fn from(kind: ExprKind) -> Self {
        Self::new(kind)
    }
}

/// The kind of group created by [`Expr::grouped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Add,
    Mul,
}

/// Constructors.
impl Expr {
    /// Creates a node with no metadata.
    pub fn new(kind: ExprKind) -> Self {
        Self {
            kind,
            change_group: None,
            explicit_coefficient: false,
        }
    }

    /// Creates a constant with the given value.
    pub fn constant<T>(value: T) -> Self
    where
        Rational: From<T>,
    {
        Self::new(ExprKind::Constant(rational(value)))
    }

    /// Creates the tree for an exact rational: a constant if it is an integer, otherwise a
    /// division of two integer constants.
    pub fn rational(value: Rational) -> Self {
        if value.is_integer() {
            Self::constant(value)
        } else {
            let (numer, denom) = value.into_numer_denom();
            Self::div(Self::constant(numer), Self::constant(denom))
        }
    }

    /// Creates a symbol.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Symbol(name.into()))
    }

    /// Wraps the expression in a unary minus.
    pub fn neg(inner: Expr) -> Self {
        Self::new(ExprKind::Neg(Box::new(inner)))
    }

    /// Wraps the expression in parentheses.
    pub fn paren(inner: Expr) -> Self {
        Self::new(ExprKind::Paren(Box::new(inner)))
    }

    /// Creates a sum of the given terms.
    pub fn add(terms: Vec<Expr>) -> Self {
        Self::new(ExprKind::Add(terms))
    }

    /// Creates a product of the given factors.
    pub fn mul(factors: Vec<Expr>) -> Self {
        Self::new(ExprKind::Mul(factors))
    }

    /// Creates a division.
    pub fn div(numerator: Expr, denominator: Expr) -> Self {
        Self::new(ExprKind::Div(Box::new(numerator), Box::new(denominator)))
    }

    /// Creates a power.
    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::new(ExprKind::Exp(Box::new(base), Box::new(exponent)))
    }

    /// Creates a function call.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Self::new(ExprKind::Call(name.into(), args))
    }

    /// Creates a sum or product of the operands, wrapped in parentheses.
    pub fn grouped(kind: GroupKind, operands: Vec<Expr>) -> Self {
        let inner = match kind {
            GroupKind::Add => Self::add(operands),
            GroupKind::Mul => Self::mul(operands),
        };
        Self::paren(inner)
    }

    /// Creates the polynomial term `coefficient * symbol^exponent`.
    ///
    /// A coefficient of `1` or `-1` is left implicit unless `explicit` is set. Other integer
    /// coefficients are written as a leading constant factor, and fractional coefficients as a
    /// leading integer fraction.
    pub fn poly_term(symbol: &str, exponent: Integer, coefficient: Rational, explicit: bool) -> Self {
        let base = if exponent == 1 {
            Self::symbol(symbol)
        } else {
            Self::pow(Self::symbol(symbol), Self::constant(exponent))
        };

        if !explicit {
            if coefficient == 1 {
                return base;
            } else if coefficient == -1 {
                return Self::neg(base);
            }
        }

        let mut term = Self::mul(vec![Self::rational(coefficient), base]);
        term.explicit_coefficient = explicit;
        term
    }

    /// Returns this node with the given change group.
    pub fn with_group(mut self, group: u32) -> Self {
        self.change_group = Some(group);
        self
    }
}

/// Structure.
impl Expr {
    /// Returns the number of direct children of this node.
    pub fn child_count(&self) -> usize {
        match &self.kind {
            ExprKind::Constant(_) | ExprKind::Symbol(_) => 0,
            ExprKind::Neg(_) | ExprKind::Paren(_) => 1,
            ExprKind::Add(operands) | ExprKind::Mul(operands) | ExprKind::Call(_, operands) => operands.len(),
            ExprKind::Div(..) | ExprKind::Exp(..) => 2,
        }
    }

    /// Returns the child at the given index.
    pub fn child(&self, index: usize) -> Option<&Expr> {
        match &self.kind {
            ExprKind::Constant(_) | ExprKind::Symbol(_) => None,
            ExprKind::Neg(inner) | ExprKind::Paren(inner) => (index == 0).then_some(&**inner),
            ExprKind::Add(operands) | ExprKind::Mul(operands) | ExprKind::Call(_, operands) => operands.get(index),
            ExprKind::Div(lhs, rhs) | ExprKind::Exp(lhs, rhs) => match index {
                0 => Some(&**lhs),
                1 => Some(&**rhs),
                _ => None,
            },
        }
    }

    /// Returns a mutable reference to the child at the given index.
    pub fn child_mut(&mut self, index: usize) -> Option<&mut Expr> {
        match &mut self.kind {
            ExprKind::Constant(_) | ExprKind::Symbol(_) => None,
            ExprKind::Neg(inner) | ExprKind::Paren(inner) => (index == 0).then_some(&mut **inner),
            ExprKind::Add(operands) | ExprKind::Mul(operands) | ExprKind::Call(_, operands) => operands.get_mut(index),
            ExprKind::Div(lhs, rhs) | ExprKind::Exp(lhs, rhs) => match index {
                0 => Some(&mut **lhs),
                1 => Some(&mut **rhs),
                _ => None,
            },
        }
    }

    /// Returns an iterator over the direct children of this node, left to right.
    pub fn children(&self) -> impl Iterator<Item = &Expr> + '_ {
        (0..self.child_count()).filter_map(move |index| self.child(index))
    }

    /// Replaces the child at the given index. Does nothing if there is no such child.
    pub fn set_child(&mut self, index: usize, node: Expr) {
        if let Some(child) = self.child_mut(index) {
            *child = node;
        }
    }

    /// Returns a copy of this node with the child at the given index replaced.
    pub fn with_child(&self, index: usize, node: Expr) -> Expr {
        let mut copy = self.clone();
        copy.set_child(index, node);
        copy
    }

    /// Removes and returns the operand at the given index of an n-ary node.
    ///
    /// The node may be left with fewer than two operands; see [`Expr::downgrade`].
    pub fn remove_child(&mut self, index: usize) -> Option<Expr> {
        match &mut self.kind {
            ExprKind::Add(operands) | ExprKind::Mul(operands) | ExprKind::Call(_, operands) => {
                (index < operands.len()).then(|| operands.remove(index))
            },
            _ => None,
        }
    }

    /// Collapses an [`ExprKind::Add`] or [`ExprKind::Mul`] with fewer than two operands: an empty
    /// sum becomes `0`, an empty product becomes `1`, and a single operand replaces its parent.
    pub fn downgrade(self) -> Expr {
        let Expr { kind, change_group, explicit_coefficient } = self;
        match kind {
            ExprKind::Add(terms) if terms.len() < 2 => {
                terms.into_iter().next().unwrap_or_else(|| Expr::constant(0))
            },
            ExprKind::Mul(factors) if factors.len() < 2 => {
                factors.into_iter().next().unwrap_or_else(|| Expr::constant(1))
            },
            kind => Expr { kind, change_group, explicit_coefficient },
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Unsets the change group of every node in the tree.
    pub fn clear_change_groups(&mut self) {
        self.change_group = None;
        for index in 0..self.child_count() {
            if let Some(child) = self.child_mut(index) {
                child.clear_change_groups();
            }
        }
    }

    /// Checks that every operator has enough operands and that every name is non-empty.
    pub fn validate(&self) -> Result<(), Error> {
        for node in self.post_order_iter() {
            let (operator, operands, minimum) = match &node.kind {
                ExprKind::Symbol(name) | ExprKind::Call(name, _) if name.is_empty() => {
                    let (_, span) = self.locate(node);
                    return Err(Error::new(vec![span], EmptyName));
                },
                ExprKind::Add(terms) => ("+".to_string(), terms.len(), 2),
                ExprKind::Mul(factors) => ("*".to_string(), factors.len(), 2),
                ExprKind::Call(name, args) => (name.clone(), args.len(), 1),
                _ => continue,
            };

            if operands < minimum {
                let (_, span) = self.locate(node);
                return Err(Error::new(vec![span], MalformedOperator { operator, operands, minimum }));
            }
        }

        Ok(())
    }
}

/// Queries.
impl Expr {
    pub fn is_add(&self) -> bool {
        matches!(self.kind, ExprKind::Add(_))
    }

    pub fn is_mul(&self) -> bool {
        matches!(self.kind, ExprKind::Mul(_))
    }

    pub fn is_div(&self) -> bool {
        matches!(self.kind, ExprKind::Div(..))
    }

    pub fn is_exp(&self) -> bool {
        matches!(self.kind, ExprKind::Exp(..))
    }

    pub fn is_neg(&self) -> bool {
        matches!(self.kind, ExprKind::Neg(_))
    }

    pub fn is_paren(&self) -> bool {
        matches!(self.kind, ExprKind::Paren(_))
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self.kind, ExprKind::Symbol(_))
    }

    /// Returns true if this node is an [`ExprKind::Constant`].
    pub fn is_constant(&self) -> bool {
        matches!(self.kind, ExprKind::Constant(_))
    }

    /// Returns the value of an [`ExprKind::Constant`].
    pub fn as_constant(&self) -> Option<&Rational> {
        match &self.kind {
            ExprKind::Constant(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a constant, allowing any number of unary minuses around it.
    pub fn constant_value(&self) -> Option<Rational> {
        match &self.kind {
            ExprKind::Constant(value) => Some(value.clone()),
            ExprKind::Neg(inner) => inner.constant_value().map(|value| -value),
            _ => None,
        }
    }

    /// Returns the value of an integer constant, allowing unary minuses around it.
    pub fn as_integer(&self) -> Option<Integer> {
        self.constant_value()
            .filter(|value| value.is_integer())
            .map(|value| value.into_numer_denom().0)
    }

    pub fn is_integer(&self) -> bool {
        self.as_integer().is_some()
    }

    /// Returns true if the constant value of this node equals `n`.
    pub fn is_value(&self, n: i32) -> bool {
        self.constant_value().map_or(false, |value| value == n)
    }

    /// If this node is a division of two integer constants, returns them.
    pub fn as_integer_fraction(&self) -> Option<(Integer, Integer)> {
        match &self.kind {
            ExprKind::Div(numerator, denominator) => Some((numerator.as_integer()?, denominator.as_integer()?)),
            _ => None,
        }
    }

    pub fn is_integer_fraction(&self) -> bool {
        self.as_integer_fraction().is_some()
    }

    /// Returns true if this node is a division of two constants.
    pub fn is_constant_fraction(&self) -> bool {
        match &self.kind {
            ExprKind::Div(numerator, denominator) => {
                numerator.constant_value().is_some() && denominator.constant_value().is_some()
            },
            _ => false,
        }
    }

    /// If this node is a division, possibly inside parentheses, returns its numerator and
    /// denominator.
    pub fn as_fraction(&self) -> Option<(&Expr, &Expr)> {
        match &self.kind {
            ExprKind::Div(numerator, denominator) => Some((numerator, denominator)),
            ExprKind::Paren(inner) => match &inner.kind {
                ExprKind::Div(numerator, denominator) => Some((numerator, denominator)),
                _ => None,
            },
            _ => None,
        }
    }

    /// Returns the polynomial term view of this node, if it is one.
    pub fn as_poly_term(&self) -> Option<PolyTerm<'_>> {
        PolyTerm::from_expr(self)
    }

    pub fn is_poly_term(&self) -> bool {
        self.as_poly_term().is_some()
    }

    /// Returns true if this node is written with a leading minus sign.
    pub fn is_negative(&self) -> bool {
        match &self.kind {
            ExprKind::Constant(value) => value.cmp0() == Ordering::Less,
            ExprKind::Neg(_) => true,
            ExprKind::Mul(factors) => factors.first().map_or(false, Expr::is_negative),
            ExprKind::Div(numerator, _) => numerator.is_negative(),
            _ => false,
        }
    }

    /// Returns true if a symbol appears anywhere in the tree.
    pub fn contains_symbol(&self) -> bool {
        self.post_order_iter().any(Expr::is_symbol)
    }

    /// Returns the expression inside any number of parentheses.
    pub fn unparen(&self) -> &Expr {
        match &self.kind {
            ExprKind::Paren(inner) => inner.unparen(),
            _ => self,
        }
    }

    /// Returns the negation of this expression, written as simply as its shape allows.
    pub fn negate(&self) -> Expr {
        if let Some(value) = self.constant_value() {
            return Expr::constant(-value);
        }

        if let Some(term) = self.as_poly_term() {
            return Expr::poly_term(term.symbol, term.exponent, -term.coefficient, term.explicit);
        }

        match &self.kind {
            ExprKind::Neg(inner) => (**inner).clone(),
            ExprKind::Paren(inner) if !inner.is_add() => Expr::paren(inner.negate()),
            ExprKind::Div(numerator, denominator) => {
                Expr::div(numerator.negate(), (**denominator).clone())
            },
            ExprKind::Mul(factors) if factors.first().map_or(false, Expr::is_constant) => {
                let mut factors = factors.clone();
                let negated = factors[0].negate();
                if negated.is_value(1) {
                    factors.remove(0);
                    Expr::mul(factors).downgrade()
                } else {
                    factors[0] = negated;
                    Expr::mul(factors)
                }
            },
            _ => Expr::neg(self.clone()),
        }
    }
}

/// Pushes `expr` onto `operands`, splicing in its operands instead if it is the same kind of
/// n-ary operation.
fn push_flat(operands: &mut Vec<Expr>, expr: Expr, kind: GroupKind) {
    match (expr.kind, kind) {
        (ExprKind::Add(inner), GroupKind::Add) | (ExprKind::Mul(inner), GroupKind::Mul) => {
            operands.extend(inner);
        },
        (other, _) => operands.push(Expr {
            kind: other,
            change_group: expr.change_group,
            explicit_coefficient: expr.explicit_coefficient,
        }),
    }
}

/// Adds two expressions, merging existing sums.
impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Self) -> Self::Output {
        let mut terms = Vec::new();
        push_flat(&mut terms, self, GroupKind::Add);
        push_flat(&mut terms, rhs, GroupKind::Add);
        Expr::add(terms)
    }
}

/// Adds the negation of the right-hand side.
impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Self) -> Self::Output {
        self + Expr::neg(rhs)
    }
}

/// Multiplies two expressions, merging existing products.
impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut factors = Vec::new();
        push_flat(&mut factors, self, GroupKind::Mul);
        push_flat(&mut factors, rhs, GroupKind::Mul);
        Expr::mul(factors)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::div(self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        Expr::neg(self)
    }
}

/// Shorthand for building trees in tests.
#[cfg(test)]
pub(crate) mod build {
    use super::*;

    pub fn c(n: i64) -> Expr {
        Expr::constant(n)
    }

    pub fn s(name: &str) -> Expr {
        Expr::symbol(name)
    }

    pub fn frac(numerator: i64, denominator: i64) -> Expr {
        Expr::div(c(numerator), c(denominator))
    }

    pub fn term(coefficient: i64, symbol: &str, exponent: i64) -> Expr {
        Expr::poly_term(symbol, int(exponent), rational(coefficient), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::build::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn equality_ignores_metadata() {
        let mut tagged = s("x").with_group(3);
        tagged.explicit_coefficient = true;
        assert_eq!(tagged, s("x"));
        assert_ne!(s("x") + c(2), c(2) + s("x"));
    }

    #[test]
    fn operators_merge_sums_and_products() {
        let sum = s("x") + c(2) + s("y");
        assert_eq!(sum, Expr::add(vec![s("x"), c(2), s("y")]));

        let product = c(2) * s("x") * s("y");
        assert_eq!(product, Expr::mul(vec![c(2), s("x"), s("y")]));

        let difference = s("x") - c(1);
        assert_eq!(difference, Expr::add(vec![s("x"), Expr::neg(c(1))]));
    }

    #[test]
    fn child_access() {
        let mut expr = Expr::div(s("x"), c(2));
        assert_eq!(expr.child_count(), 2);
        assert_eq!(expr.child(1), Some(&c(2)));
        assert_eq!(expr.child(2), None);

        expr.set_child(1, c(3));
        assert_eq!(expr, Expr::div(s("x"), c(3)));

        let mut sum = s("x") + c(2) + s("y");
        assert_eq!(sum.remove_child(1), Some(c(2)));
        assert_eq!(sum.children().cloned().collect::<Vec<_>>(), vec![s("x"), s("y")]);
        assert_eq!(s("x").remove_child(0), None);
    }

    #[test]
    fn downgrade_collapses_small_operations() {
        assert_eq!(Expr::add(vec![]).downgrade(), c(0));
        assert_eq!(Expr::mul(vec![]).downgrade(), c(1));
        assert_eq!(Expr::mul(vec![s("x")]).downgrade(), s("x"));
        assert_eq!((s("x") + s("y")).downgrade(), s("x") + s("y"));
    }

    #[test]
    fn constant_queries() {
        assert_eq!(Expr::neg(Expr::neg(c(-4))).constant_value(), Some(rational(-4)));
        assert_eq!(Expr::neg(c(4)).as_integer(), Some(int(-4)));
        assert_eq!(Expr::constant((1, 2)).as_integer(), None);
        assert_eq!(frac(2, -3).as_integer_fraction(), Some((int(2), int(-3))));
        assert!(Expr::div(Expr::constant((1, 2)), c(3)).is_constant_fraction());
        assert!(!Expr::div(s("x"), c(3)).is_constant_fraction());
        assert!(Expr::paren(frac(1, 2)).as_fraction().is_some());
    }

    #[test]
    fn rational_constructor() {
        assert_eq!(Expr::rational(rational(4)), c(4));
        assert_eq!(Expr::rational(rational((-6, 4))), frac(-3, 2));
    }

    #[test]
    fn poly_term_constructor() {
        assert_eq!(term(1, "x", 1), s("x"));
        assert_eq!(term(-1, "x", 2), Expr::neg(Expr::pow(s("x"), c(2))));
        assert_eq!(term(3, "x", 1), Expr::mul(vec![c(3), s("x")]));

        let explicit = Expr::poly_term("x", int(1), rational(1), true);
        assert_eq!(explicit, Expr::mul(vec![c(1), s("x")]));
        assert!(explicit.explicit_coefficient);

        let fractional = Expr::poly_term("x", int(1), rational((2, 3)), false);
        assert_eq!(fractional, Expr::mul(vec![frac(2, 3), s("x")]));
    }

    #[test]
    fn negative_shapes() {
        assert!(c(-2).is_negative());
        assert!(Expr::neg(s("x")).is_negative());
        assert!(term(-2, "x", 1).is_negative());
        assert!(frac(-1, 2).is_negative());
        assert!(!frac(1, -2).is_negative());
        assert!(!s("x").is_negative());
    }

    #[test]
    fn negation() {
        assert_eq!(c(3).negate(), c(-3));
        assert_eq!(Expr::neg(s("y") + c(1)).negate(), s("y") + c(1));
        assert_eq!(term(2, "x", 2).negate(), term(-2, "x", 2));
        assert_eq!(s("x").negate(), Expr::neg(s("x")));
        assert_eq!(frac(1, 2).negate(), frac(-1, 2));
        assert_eq!(Expr::mul(vec![c(-1), s("x"), s("y")]).negate(), Expr::mul(vec![s("x"), s("y")]));
    }

    #[test]
    fn clearing_change_groups() {
        let mut expr = (s("x").with_group(1) + c(2).with_group(2)).with_group(1);
        expr.clear_change_groups();
        assert!(expr.post_order_iter().all(|node| node.change_group.is_none()));
    }

    #[test]
    fn validation() {
        assert!((s("x") + c(1)).validate().is_ok());

        let err = (s("x") * Expr::add(vec![s("y")])).validate().unwrap_err();
        let kind = err.downcast_ref::<MalformedOperator>().unwrap();
        assert_eq!(kind.operands, 1);
        assert_eq!(kind.minimum, 2);

        let err = Expr::call("abs", vec![]).validate().unwrap_err();
        assert!(err.downcast_ref::<MalformedOperator>().is_some());

        let err = Expr::symbol("").validate().unwrap_err();
        assert!(err.downcast_ref::<EmptyName>().is_some());
    }

    #[test]
    fn contains_symbol() {
        assert!(Expr::pow(c(2), s("n")).contains_symbol());
        assert!(!frac(1, 2).contains_symbol());
    }
}
