//! Structural summary of a plan

use serde::Serialize;

use crate::plan::{Plan, PlanStep};

/// Counts gathered over every step of a plan, at every depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PlanStats {
    /// Top-level steps
    pub steps: usize,
    /// Action steps at any depth
    pub actions: usize,
    /// Conditional steps at any depth
    pub conditionals: usize,
    /// Branches across all conditionals
    pub branches: usize,
    /// Deepest conditional nesting (0 = no conditionals)
    pub depth: usize,
    /// Distinct ways the plan can play out; 0 if some conditional has no branches
    pub execution_paths: usize,
    /// Terminal leaves: empty branch continuations, or 1 for an empty plan
    pub goals: usize,
}

impl PlanStats {
    /// Collect statistics for `plan`
    pub fn of<A, S>(plan: &Plan<A, S>) -> Self {
        let mut stats = Self {
            steps: plan.len(),
            ..Self::default()
        };
        stats.depth = stats.walk(plan);
        if plan.is_empty() {
            stats.goals = 1;
        }
        stats.execution_paths = paths(plan);
        stats
    }

    /// Accumulate counts and return nesting depth of `plan`
    fn walk<A, S>(&mut self, plan: &Plan<A, S>) -> usize {
        let mut depth = 0;
        for step in plan {
            match step {
                PlanStep::Action(_) => self.actions += 1,
                PlanStep::Conditional(conditional) => {
                    self.conditionals += 1;
                    self.branches += conditional.len();
                    self.goals += conditional
                        .branches()
                        .iter()
                        .filter(|b| b.plan.is_empty())
                        .count();
                    let deepest = conditional
                        .branches()
                        .iter()
                        .map(|b| self.walk(&b.plan))
                        .max()
                        .unwrap_or(0);
                    depth = depth.max(deepest + 1);
                }
            }
        }
        depth
    }

    pub fn is_contingent(&self) -> bool {
        self.conditionals > 0
    }
}

fn paths<A, S>(plan: &Plan<A, S>) -> usize {
    plan.conditionals()
        .map(|c| c.branches().iter().map(|b| paths(&b.plan)).sum::<usize>())
        .fold(1, usize::saturating_mul)
}
