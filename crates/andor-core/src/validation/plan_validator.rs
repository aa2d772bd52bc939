//! Plan validation
//!
//! Validates contingent plans handed over by a search procedure.

use std::fmt;

use tracing::warn;

use crate::config::ValidationConfig;
use crate::error::{Error, Result};
use crate::plan::{Conditional, Plan, PlanStep};
use crate::render::PlanStats;

/// Validator for contingent plans
pub struct PlanValidator;

impl PlanValidator {
    /// Validate that every conditional, at any depth, has at least one branch
    pub fn validate_conditionals_not_empty<A, S>(plan: &Plan<A, S>) -> Result<()> {
        for conditional in plan.conditionals() {
            if conditional.is_empty() {
                warn!("Plan contains a conditional with no branches");
                return Err(Error::EmptyConditional);
            }
            for branch in conditional.branches() {
                Self::validate_conditionals_not_empty(&branch.plan)?;
            }
        }
        Ok(())
    }

    /// Validate that each conditional covers every outcome of its action
    ///
    /// `expected` receives the action immediately preceding a conditional
    /// (`None` when the conditional opens its plan) and returns the outcomes
    /// that action can produce. Extra branches are allowed.
    pub fn validate_outcome_coverage<A, S, F>(plan: &Plan<A, S>, expected: &F) -> Result<()>
    where
        A: fmt::Display,
        S: PartialEq + fmt::Display,
        F: Fn(Option<&A>) -> Vec<S>,
    {
        let mut previous: Option<&A> = None;
        for step in plan {
            match step {
                PlanStep::Action(action) => previous = Some(action),
                PlanStep::Conditional(conditional) => {
                    Self::check_coverage(conditional, previous, expected)?;
                    for branch in conditional.branches() {
                        Self::validate_outcome_coverage(&branch.plan, expected)?;
                    }
                    previous = None;
                }
            }
        }
        Ok(())
    }

    fn check_coverage<A, S, F>(
        conditional: &Conditional<A, S>,
        action: Option<&A>,
        expected: &F,
    ) -> Result<()>
    where
        A: fmt::Display,
        S: PartialEq + fmt::Display,
        F: Fn(Option<&A>) -> Vec<S>,
    {
        let missing: Vec<String> = expected(action)
            .iter()
            .filter(|outcome| !conditional.contains_outcome(outcome))
            .map(|outcome| outcome.to_string())
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let after = match action {
            Some(action) => format!("after '{}'", action),
            None => "at plan start".to_string(),
        };
        warn!(missing = missing.len(), "Conditional does not cover every outcome");
        Err(Error::validation(
            "outcomes",
            format!("Conditional {} is missing outcomes: {}", after, missing.join(", ")),
        ))
    }

    /// Validate conditional nesting depth
    pub fn validate_depth<A, S>(plan: &Plan<A, S>, max_depth: usize) -> Result<()> {
        let depth = PlanStats::of(plan).depth;
        if depth > max_depth {
            warn!(depth, max_depth, "Plan nesting exceeds limit");
            return Err(Error::validation(
                "depth",
                format!("Plan nests {} conditionals deep; the limit is {}", depth, max_depth),
            ));
        }
        Ok(())
    }

    /// Validate a complete plan with the configured checks
    pub fn validate_plan<A, S>(plan: &Plan<A, S>, config: &ValidationConfig) -> Result<()> {
        if config.require_non_empty_conditionals {
            Self::validate_conditionals_not_empty(plan)?;
        }
        Self::validate_depth(plan, config.max_depth)?;
        Ok(())
    }
}
