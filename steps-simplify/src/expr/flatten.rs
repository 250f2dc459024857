use super::{Expr, ExprKind, GroupKind};

/// The operation a node is an operand of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Root,
    Add,
    Mul,
    Other,
}

impl Expr {
    /// Merges nested sums and products, and removes parentheses that do not affect how the
    /// expression reads.
    ///
    /// A sum inside a sum (or a product inside a product) is spliced into its parent, even when
    /// the inner operation is wrapped in parentheses. Parentheses are removed when they surround
    /// a constant, symbol, function call or other parentheses, when they surround the whole
    /// tree, and when they surround an operation that binds tighter than the sum or product they
    /// sit in. A unary minus around a fraction, with or without parentheses, is moved into its
    /// numerator, so `-(1/2)` becomes `-1/2`.
    ///
    /// Change groups survive: a node spliced out of a tagged parent inherits the parent's tag
    /// unless it has one of its own.
    pub fn flatten(self) -> Expr {
        flatten_node(self, Parent::Root)
    }
}

/// Gives the node the change group if it has none.
fn inherit(mut expr: Expr, change_group: Option<u32>) -> Expr {
    if expr.change_group.is_none() {
        expr.change_group = change_group;
    }
    expr
}

/// Returns true if parentheses around a node of this kind can be removed.
fn is_redundant_paren(inner: &ExprKind, parent: Parent) -> bool {
    match inner {
        ExprKind::Constant(_) | ExprKind::Symbol(_) | ExprKind::Call(..) | ExprKind::Paren(_) => true,
        _ if parent == Parent::Root => true,
        ExprKind::Mul(_) | ExprKind::Div(..) | ExprKind::Exp(..) | ExprKind::Neg(_) => parent == Parent::Add,
        ExprKind::Add(_) => false,
    }
}

fn flatten_node(expr: Expr, parent: Parent) -> Expr {
    let Expr { kind, change_group, explicit_coefficient } = expr;
    let kind = match kind {
        ExprKind::Add(terms) => ExprKind::Add(merge(terms, GroupKind::Add)),
        ExprKind::Mul(factors) => ExprKind::Mul(merge(factors, GroupKind::Mul)),
        ExprKind::Paren(inner) => {
            let inner = flatten_node(*inner, Parent::Other);
            if is_redundant_paren(&inner.kind, parent) {
                let inner = inherit(inner, change_group);
                return if inner.is_paren() {
                    flatten_node(inner, parent)
                } else {
                    inner
                };
            }
            ExprKind::Paren(Box::new(inner))
        },
        ExprKind::Neg(inner) => {
            let inner = flatten_node(*inner, Parent::Other);
            let inner = match inner.kind {
                ExprKind::Paren(content) if content.is_div() => inherit(*content, inner.change_group),
                kind => Expr { kind, ..inner },
            };
            match inner.kind {
                // the sign of a fraction is kept in its numerator
                ExprKind::Div(numerator, denominator) => {
                    let numerator = flatten_node(numerator.negate(), Parent::Other);
                    return Expr {
                        kind: ExprKind::Div(Box::new(numerator), denominator),
                        change_group: change_group.or(inner.change_group),
                        explicit_coefficient: false,
                    };
                },
                kind => ExprKind::Neg(Box::new(Expr { kind, ..inner })),
            }
        },
        ExprKind::Div(lhs, rhs) => ExprKind::Div(
            Box::new(flatten_node(*lhs, Parent::Other)),
            Box::new(flatten_node(*rhs, Parent::Other)),
        ),
        ExprKind::Exp(lhs, rhs) => ExprKind::Exp(
            Box::new(flatten_node(*lhs, Parent::Other)),
            Box::new(flatten_node(*rhs, Parent::Other)),
        ),
        ExprKind::Call(name, args) => ExprKind::Call(
            name,
            args.into_iter().map(|arg| flatten_node(arg, Parent::Other)).collect(),
        ),
        leaf @ (ExprKind::Constant(_) | ExprKind::Symbol(_)) => leaf,
    };

    Expr { kind, change_group, explicit_coefficient }
}

/// Flattens each operand of an n-ary operation, splicing in operands of the same kind.
fn merge(operands: Vec<Expr>, kind: GroupKind) -> Vec<Expr> {
    let parent = match kind {
        GroupKind::Add => Parent::Add,
        GroupKind::Mul => Parent::Mul,
    };

    let mut merged = Vec::with_capacity(operands.len());
    for operand in operands {
        let operand = flatten_node(operand, parent);
        let change_group = operand.change_group;
        let operand = match operand.kind {
            ExprKind::Paren(inner) if is_same_kind(&inner.kind, kind) => inherit(*inner, change_group),
            other => Expr { kind: other, ..operand },
        };

        match (operand.kind, kind) {
            (ExprKind::Add(inner), GroupKind::Add) | (ExprKind::Mul(inner), GroupKind::Mul) => {
                let change_group = operand.change_group;
                merged.extend(inner.into_iter().map(|expr| inherit(expr, change_group)));
            },
            (other, _) => merged.push(Expr { kind: other, ..operand }),
        }
    }
    merged
}

fn is_same_kind(kind: &ExprKind, group: GroupKind) -> bool {
    matches!(
        (kind, group),
        (ExprKind::Add(_), GroupKind::Add) | (ExprKind::Mul(_), GroupKind::Mul)
    )
}
