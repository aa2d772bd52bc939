//! The plan container
//!
//! An ordered, exclusively owned sequence of steps. Order is execution
//! order: the first step executes first.

use std::collections::VecDeque;
use std::collections::vec_deque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::DEFAULT_STATE_VAR;
use super::step::{Conditional, PlanStep};

/// A contingent plan
///
/// Empty means the goal has been reached and nothing is left to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    transparent,
    bound(deserialize = "A: Deserialize<'de>, S: Deserialize<'de> + PartialEq")
)]
pub struct Plan<A, S> {
    steps: VecDeque<PlanStep<A, S>>,
}

impl<A, S> Default for Plan<A, S> {
    fn default() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }
}

impl<A, S> Plan<A, S> {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a plan containing exactly `step`
    pub fn with_step(step: impl Into<PlanStep<A, S>>) -> Self {
        let mut plan = Self::new();
        plan.steps.push_back(step.into());
        plan
    }

    /// Add `step` after all existing steps
    pub fn append(&mut self, step: impl Into<PlanStep<A, S>>) -> &mut Self {
        self.steps.push_back(step.into());
        trace!(len = self.steps.len(), "Step appended to plan");
        self
    }

    /// Add `step` before all existing steps
    pub fn prepend(&mut self, step: impl Into<PlanStep<A, S>>) -> &mut Self {
        self.steps.push_front(step.into());
        trace!(len = self.steps.len(), "Step prepended to plan");
        self
    }

    /// Append an action step
    pub fn append_action(&mut self, action: A) -> &mut Self {
        self.append(PlanStep::Action(action))
    }

    /// Prepend an action step
    pub fn prepend_action(&mut self, action: A) -> &mut Self {
        self.prepend(PlanStep::Action(action))
    }

    /// Builder: append and return the owned plan
    pub fn with_appended(mut self, step: impl Into<PlanStep<A, S>>) -> Self {
        self.append(step);
        self
    }

    /// Builder: prepend and return the owned plan
    pub fn with_prepended(mut self, step: impl Into<PlanStep<A, S>>) -> Self {
        self.prepend(step);
        self
    }

    /// True when there are no steps left (goal reached)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// The underlying step sequence, front first
    pub fn steps(&self) -> &VecDeque<PlanStep<A, S>> {
        &self.steps
    }

    /// Steps in execution order
    pub fn iter(&self) -> vec_deque::Iter<'_, PlanStep<A, S>> {
        self.steps.iter()
    }

    pub fn first(&self) -> Option<&PlanStep<A, S>> {
        self.steps.front()
    }

    pub fn last(&self) -> Option<&PlanStep<A, S>> {
        self.steps.back()
    }

    pub fn get(&self, index: usize) -> Option<&PlanStep<A, S>> {
        self.steps.get(index)
    }

    /// Top-level actions in execution order, skipping conditionals
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().filter_map(PlanStep::as_action)
    }

    /// Top-level conditionals in execution order
    pub fn conditionals(&self) -> impl Iterator<Item = &Conditional<A, S>> {
        self.steps.iter().filter_map(PlanStep::as_conditional)
    }

    /// Whether execution depends on an observed outcome
    pub fn is_contingent(&self) -> bool {
        self.conditionals().next().is_some()
    }
}

impl<A: PartialEq, S: PartialEq> Plan<A, S> {
    /// Linear membership test over the top-level steps
    pub fn contains(&self, step: &PlanStep<A, S>) -> bool {
        self.steps.contains(step)
    }

    /// Whether `action` is one of the top-level action steps
    pub fn contains_action(&self, action: &A) -> bool {
        self.actions().any(|a| a == action)
    }
}

impl<A: fmt::Display, S: fmt::Display> Plan<A, S> {
    pub(crate) fn write_inline<W: fmt::Write>(&self, out: &mut W, state_var: &str) -> fmt::Result {
        out.write_char('[')?;
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            step.write_inline(out, state_var)?;
        }
        out.write_char(']')
    }
}

impl<A: fmt::Display, S: fmt::Display> fmt::Display for Plan<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_inline(f, DEFAULT_STATE_VAR)
    }
}

impl<A, S> From<PlanStep<A, S>> for Plan<A, S> {
    fn from(step: PlanStep<A, S>) -> Self {
        Self::with_step(step)
    }
}

impl<A, S> FromIterator<PlanStep<A, S>> for Plan<A, S> {
    fn from_iter<I: IntoIterator<Item = PlanStep<A, S>>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

impl<A, S> IntoIterator for Plan<A, S> {
    type Item = PlanStep<A, S>;
    type IntoIter = vec_deque::IntoIter<PlanStep<A, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a, A, S> IntoIterator for &'a Plan<A, S> {
    type Item = &'a PlanStep<A, S>;
    type IntoIter = vec_deque::Iter<'a, PlanStep<A, S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
