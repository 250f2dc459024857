//! A single simplification step.

use crate::{change::ChangeRecord, expr::Expr};
use log::trace;
use super::rules::{
    arithmetic,
    basic,
    break_up,
    collect,
    distribute,
    division,
    fractions,
    functions,
    multiply_fractions,
};

/// A family of rules, together with the search that finds the first subtree one of its rules
/// applies to.
pub type Family = (&'static str, fn(&Expr) -> Option<ChangeRecord>);

/// The rule families, in the order they are tried.
///
/// Identities and fraction normalization come first so that the later families see as simple a
/// tree as possible; distribution comes late, since it makes the tree bigger.
pub const FAMILIES: [Family; 9] = [
    ("basic", basic::search),
    ("division", division::search),
    ("fractions", fractions::search),
    ("collect_and_combine", collect::search),
    ("arithmetic", arithmetic::search),
    ("break_up_numerator", break_up::search),
    ("multiply_fractions", multiply_fractions::search),
    ("distribute", distribute::search),
    ("functions", functions::search),
];

/// Applies the first family of rules that changes the expression.
///
/// The expression is flattened before any rule sees it, and the tree in the returned record is
/// flattened again. If no rule applies, the returned record reports no change.
pub fn step(expr: &Expr) -> ChangeRecord {
    let expr = expr.clone().flatten();

    for (name, search) in FAMILIES {
        match search(&expr) {
            Some(mut record) => {
                trace!("{}: {}", name, record.change_type.id());
                record.new_node = record.new_node.flatten();
                return record;
            },
            None => trace!("{}: no change", name),
        }
    }

    ChangeRecord::no_change(&expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{change::ChangeType, expr::build::*};
    use pretty_assertions::assert_eq;

    #[test]
    fn first_family_wins() {
        // both a basic identity and arithmetic apply; the identity comes first
        let record = step(&(Expr::pow(s("x"), c(1)) + (c(2) + c(3))));
        assert_eq!(record.change_type, ChangeType::RemoveExponentByOne);
        assert_eq!(record.new_node, s("x") + c(2) + c(3));
    }

    #[test]
    fn output_is_flattened() {
        let record = step(&Expr::mul(vec![c(2), Expr::paren(s("x") + c(1)) * s("y")]));
        assert_eq!(record.change_type, ChangeType::Distribute);
        assert!(record.new_node.post_order_iter().all(|node| {
            node.children().all(|child| !(node.is_mul() && child.is_mul()))
        }));
    }

    #[test]
    fn no_change() {
        let record = step(&(s("x") + s("y")));
        assert!(!record.has_changed());
        assert_eq!(record.old_node, record.new_node);
    }
}
