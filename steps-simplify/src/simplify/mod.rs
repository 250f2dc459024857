//! Stepwise simplification of expressions.
//!
//! [`simplify`] repeatedly applies [`step`](step::step) to an expression until no rule changes
//! it, and returns the record of every step taken. Replaying the records in order walks a learner
//! from the original expression to its simplest form:
//!
//! ```
//! use steps_simplify::{change::ChangeType, expr::Expr, simplify::simplify};
//!
//! let expr = Expr::pow(Expr::symbol("x"), Expr::constant(0));
//! let steps = simplify(&expr);
//! assert_eq!(steps.len(), 1);
//! assert_eq!(steps[0].change_type, ChangeType::ReduceExponentByZero);
//! assert_eq!(steps[0].new_node, Expr::constant(1));
//! ```
//!
//! The rules are grouped into families and tried in a fixed order; see [`step::FAMILIES`]. Each
//! step applies exactly one rule, possibly with substeps that break it down further.

pub mod rules;
pub mod search;
pub mod step;

use crate::{change::ChangeRecord, error::RuleCycle, expr::Expr};
use log::{debug, warn};
use steps_error::Error;

/// The maximum number of steps recorded before the simplifier gives up.
pub const MAX_STEP_COUNT: usize = 20;

/// Simplifies the expression, returning every step taken.
///
/// The expression is validated first; see [`Expr::validate`]. If the rules are still changing the
/// expression after [`MAX_STEP_COUNT`] steps, the steps are discarded and a [`RuleCycle`] error is
/// returned.
pub fn try_simplify(expr: &Expr) -> Result<Vec<ChangeRecord>, Error> {
    expr.validate()?;

    let mut current = expr.clone().flatten();
    let mut steps = Vec::new();

    loop {
        let record = step::step(&current);
        if !record.has_changed() {
            return Ok(steps);
        }

        if steps.len() == MAX_STEP_COUNT {
            warn!(
                "giving up on `{}` after {} steps; last change was {}",
                expr,
                MAX_STEP_COUNT,
                record.change_type.id(),
            );
            let rendered = expr.to_string();
            return Err(Error::new(vec![0..rendered.len()], RuleCycle { steps: MAX_STEP_COUNT }));
        }

        debug!("step {}: {} -> {}", steps.len() + 1, record.change_type.id(), record.new_node);
        log_substeps(&record, 1);

        current = record.new_node.clone();
        current.clear_change_groups();
        current = current.flatten();
        steps.push(record);
    }
}

/// Logs the substeps of a record, indented by depth.
fn log_substeps(record: &ChangeRecord, depth: usize) {
    for substep in &record.substeps {
        debug!("{:indent$}{} -> {}", "", substep.change_type.id(), substep.new_node, indent = depth * 2);
        log_substeps(substep, depth + 1);
    }
}

/// Simplifies the expression, returning every step taken.
///
/// This is the same as [`try_simplify`], except that errors are logged and reported as an empty
/// list of steps.
pub fn simplify(expr: &Expr) -> Vec<ChangeRecord> {
    try_simplify(expr).unwrap_or_else(|err| {
        warn!("could not simplify `{}`: {:?}", expr, err.kind);
        Vec::new()
    })
}

/// How a simplification ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No rule applied to the expression.
    AlreadySimplified,

    /// At least one rule applied, and the expression reached a form no rule applies to.
    Simplified,

    /// The expression was malformed, or the rules did not settle within [`MAX_STEP_COUNT`]
    /// steps.
    GaveUp,
}

/// The result of [`explain`]: the expression, the steps taken, and how they ended.
#[derive(Debug, Clone)]
pub struct Simplification {
    pub input: Expr,
    pub steps: Vec<ChangeRecord>,
    pub outcome: Outcome,
}

impl Simplification {
    /// Returns the simplified expression, or the input if there were no steps.
    pub fn result(&self) -> &Expr {
        self.steps.last().map_or(&self.input, |step| &step.new_node)
    }
}

/// Simplifies the expression, telling apart an expression that was already simple from one the
/// simplifier gave up on.
pub fn explain(expr: &Expr) -> Simplification {
    let (steps, outcome) = match try_simplify(expr) {
        Ok(steps) if steps.is_empty() => (steps, Outcome::AlreadySimplified),
        Ok(steps) => (steps, Outcome::Simplified),
        Err(err) => {
            warn!("could not simplify `{}`: {:?}", expr, err.kind);
            (Vec::new(), Outcome::GaveUp)
        },
    };

    Simplification {
        input: expr.clone(),
        steps,
        outcome,
    }
}
