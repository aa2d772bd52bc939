//! Contingent Plans
//!
//! The solution representation produced by AND-OR search. A plan is an
//! ordered sequence of steps where each step is either an action (an OR node
//! contributes exactly one) or a conditional that names a continuation plan
//! for every outcome of the preceding nondeterministic action (an AND node).
//!
//! Plans are built bottom-up during the search recursion: the terminal case
//! is an empty plan, an OR step prepends its chosen action, and an AND step
//! packages one continuation per outcome into a single conditional.
//!
//! # Example
//!
//! ```
//! use andor_core::plan::{Conditional, Plan, PlanStep};
//!
//! let cond = Conditional::new()
//!     .when("o1", Plan::with_step(PlanStep::action("a2")))
//!     .when("o2", Plan::new());
//! let plan = Plan::with_step(cond).with_prepended(PlanStep::action("a1"));
//!
//! assert_eq!(plan.to_string(), "[a1, if s==o1 then [a2] else if s==o2 then []]");
//! ```

pub mod cursor;
mod sequence;
mod step;

pub use cursor::PlanCursor;
pub use sequence::Plan;
pub use step::{Branch, Conditional, PlanStep};

/// State variable used by the default text form of conditionals
pub const DEFAULT_STATE_VAR: &str = "s";
