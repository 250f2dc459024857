//! Stepwise simplification of algebraic expressions.
//!
//! This crate rewrites an expression tree one rule at a time, recording each rewrite as a
//! [`ChangeRecord`] so that a tutoring interface can walk a learner through how the expression
//! was simplified. It does not parse or solve anything; callers build an [`Expr`] directly.
//!
//! ```
//! use steps_simplify::{expr::Expr, simplify};
//!
//! let expr = Expr::constant(5) + Expr::constant(0);
//! let steps = simplify(&expr);
//! assert_eq!(steps.len(), 1);
//! assert_eq!(steps[0].new_node, Expr::constant(5));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expr`] and [`ChangeRecord`], so that
//! traces can be sent to a front end.

pub mod change;
pub mod error;
pub mod expr;
pub mod primitive;
pub mod simplify;

pub use change::{ChangeRecord, ChangeType};
pub use expr::Expr;
pub use simplify::{explain, simplify, step::step, try_simplify, Outcome, Simplification, MAX_STEP_COUNT};
