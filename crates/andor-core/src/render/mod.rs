//! Plan Rendering Module
//!
//! Text forms of contingent plans for logs and test assertions.
//!
//! # Features
//!
//! - **Inline Rendering**: The bracketed `[a1, if s==o1 then [a2] else if s==o2 then []]`
//!   form, with a configurable state variable name
//! - **Tree Rendering**: Indented outline of steps and branches with Unicode or ASCII connectors
//! - **Statistics**: Action, conditional and branch counts, nesting depth and execution paths
//!
//! # Example
//!
//! ```
//! use andor_core::plan::{Conditional, Plan, PlanStep};
//! use andor_core::render::{PlanRenderer, RenderOptions};
//!
//! let cond = Conditional::new()
//!     .when("clean", Plan::new())
//!     .when("dirty", Plan::with_step(PlanStep::action("suck")));
//! let plan = Plan::with_step(cond).with_prepended(PlanStep::action("suck"));
//!
//! let renderer = PlanRenderer::new(RenderOptions::ascii().with_state_var("state"));
//! assert_eq!(
//!     renderer.render_inline(&plan),
//!     "[suck, if state==clean then [] else if state==dirty then [suck]]"
//! );
//! println!("{}", renderer.render_with_summary(&plan));
//! ```

mod stats;
mod tree;

pub use stats::PlanStats;
pub use tree::{NodeStyle, PlanRenderer, RenderOptions};
