//! Andor Core Library
//!
//! This crate provides the solution representation for AND-OR search over
//! nondeterministic environments, including:
//! - Contingent plans (action steps and conditional branch steps)
//! - A cursor that walks a finished plan against observed outcomes
//! - Text and tree rendering for logging and assertions
//! - Structural validation for plans handed over by a search procedure
//! - The problem interface shared by search procedures and tests
//! - TOML configuration for rendering and validation defaults

pub mod config;
pub mod error;
pub mod plan;
pub mod problem;
pub mod render;
pub mod validation;

pub use error::{Error, Result};
pub use plan::{Branch, Conditional, Plan, PlanCursor, PlanStep};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::plan::{Branch, Conditional, Plan, PlanCursor, PlanStep};
    pub use crate::problem::NondeterministicProblem;
    pub use crate::render::{NodeStyle, PlanRenderer, PlanStats, RenderOptions};
    pub use crate::validation::PlanValidator;
}
