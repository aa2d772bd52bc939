//! Plan validators
//!
//! Structural checks a search procedure or executor can run on a finished
//! plan. The plan types themselves are passive and never reject a step.

pub mod plan_validator;

pub use plan_validator::PlanValidator;
