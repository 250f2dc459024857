//! The kinds of errors the simplifier can report.

use steps_attrs::ErrorKind;
use steps_error::ErrorKind;

/// An n-ary operator or function call has too few operands.
#[derive(Debug, Clone, PartialEq, Eq, ErrorKind)]
#[error(
    message = format!("`{}` needs at least {} operand(s), but has {}", self.operator, self.minimum, self.operands),
    labels = ["this operation"],
    help = "the tree given to the simplifier was built incorrectly",
)]
pub struct MalformedOperator {
    /// The operator or function name.
    pub operator: String,

    /// The number of operands it has.
    pub operands: usize,

    /// The number of operands it needs.
    pub minimum: usize,
}

/// A symbol or function call has an empty name.
#[derive(Debug, Clone, PartialEq, Eq, ErrorKind)]
#[error(
    message = "found a symbol or function call without a name",
    labels = ["here"],
)]
pub struct EmptyName;

/// The simplifier kept finding changes to make after the maximum number of steps.
#[derive(Debug, Clone, PartialEq, Eq, ErrorKind)]
#[error(
    message = format!("could not finish simplifying within {} steps", self.steps),
    labels = ["while simplifying this expression"],
    help = "some rules are probably undoing each other's work; no steps were kept",
)]
pub struct RuleCycle {
    /// The number of steps taken before giving up.
    pub steps: usize,
}
