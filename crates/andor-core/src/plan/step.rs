//! Plan steps
//!
//! A step is either an opaque action or a conditional dispatch on the
//! outcome observed after the preceding action.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::DEFAULT_STATE_VAR;
use super::sequence::Plan;
use crate::error::Error;

/// A single step of a contingent plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    content = "value",
    rename_all = "snake_case",
    bound(deserialize = "A: Deserialize<'de>, S: Deserialize<'de> + PartialEq")
)]
pub enum PlanStep<A, S> {
    /// Perform an action (OR node)
    Action(A),
    /// Branch on the observed outcome (AND node)
    Conditional(Conditional<A, S>),
}

impl<A, S> PlanStep<A, S> {
    /// Create an action step
    pub fn action(action: A) -> Self {
        Self::Action(action)
    }

    /// Create a conditional step
    pub fn conditional(conditional: Conditional<A, S>) -> Self {
        Self::Conditional(conditional)
    }

    pub fn is_action(&self) -> bool {
        matches!(self, Self::Action(_))
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Self::Conditional(_))
    }

    /// The wrapped action, if this is an action step
    pub fn as_action(&self) -> Option<&A> {
        match self {
            Self::Action(action) => Some(action),
            Self::Conditional(_) => None,
        }
    }

    /// The wrapped conditional, if this is a conditional step
    pub fn as_conditional(&self) -> Option<&Conditional<A, S>> {
        match self {
            Self::Action(_) => None,
            Self::Conditional(conditional) => Some(conditional),
        }
    }
}

impl<A: fmt::Display, S: fmt::Display> PlanStep<A, S> {
    pub(crate) fn write_inline<W: fmt::Write>(&self, out: &mut W, state_var: &str) -> fmt::Result {
        match self {
            Self::Action(action) => write!(out, "{}", action),
            Self::Conditional(conditional) => conditional.write_inline(out, state_var),
        }
    }
}

impl<A, S> From<Conditional<A, S>> for PlanStep<A, S> {
    fn from(conditional: Conditional<A, S>) -> Self {
        Self::Conditional(conditional)
    }
}

impl<A: fmt::Display, S: fmt::Display> fmt::Display for PlanStep<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_inline(f, DEFAULT_STATE_VAR)
    }
}

/// One arm of a conditional: the continuation to follow after `outcome`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>, S: Deserialize<'de> + PartialEq"))]
pub struct Branch<A, S> {
    pub outcome: S,
    pub plan: Plan<A, S>,
}

impl<A, S> Branch<A, S> {
    pub fn new(outcome: S, plan: Plan<A, S>) -> Self {
        Self { outcome, plan }
    }
}

/// Outcome-to-continuation dispatch table of an AND node
///
/// Branches keep insertion order, which is also the order of the rendered
/// if/else-if chain. Each outcome appears at most once; inserting a known
/// outcome replaces its continuation and keeps its position.
///
/// Serialized as a plain array of branches. Deserializing an array that
/// lists the same outcome twice fails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "Vec<Branch<A, S>>",
    bound(deserialize = "A: Deserialize<'de>, S: Deserialize<'de> + PartialEq")
)]
pub struct Conditional<A, S> {
    branches: Vec<Branch<A, S>>,
}

impl<A, S> Default for Conditional<A, S> {
    fn default() -> Self {
        Self {
            branches: Vec::new(),
        }
    }
}

impl<A, S> Conditional<A, S> {
    /// Create a conditional with no branches
    pub fn new() -> Self {
        Self::default()
    }

    /// Branches in insertion order
    pub fn branches(&self) -> &[Branch<A, S>] {
        &self.branches
    }

    /// Outcomes in insertion order
    pub fn outcomes(&self) -> impl Iterator<Item = &S> {
        self.branches.iter().map(|b| &b.outcome)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    /// True when no outcome has a continuation; not a usable plan fragment
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn into_branches(self) -> Vec<Branch<A, S>> {
        self.branches
    }
}

impl<A, S: PartialEq> Conditional<A, S> {
    /// Builder: add the continuation for `outcome`
    pub fn when(mut self, outcome: S, plan: Plan<A, S>) -> Self {
        self.insert(outcome, plan);
        self
    }

    /// Set the continuation for `outcome`, returning the one it replaced
    pub fn insert(&mut self, outcome: S, plan: Plan<A, S>) -> Option<Plan<A, S>> {
        match self.branches.iter_mut().find(|b| b.outcome == outcome) {
            Some(branch) => Some(std::mem::replace(&mut branch.plan, plan)),
            None => {
                self.branches.push(Branch::new(outcome, plan));
                None
            }
        }
    }

    /// Continuation to execute after observing `outcome`
    pub fn continuation_for(&self, outcome: &S) -> Option<&Plan<A, S>> {
        self.branches
            .iter()
            .find(|b| b.outcome == *outcome)
            .map(|b| &b.plan)
    }

    pub fn contains_outcome(&self, outcome: &S) -> bool {
        self.branches.iter().any(|b| b.outcome == *outcome)
    }
}

impl<A: fmt::Display, S: fmt::Display> Conditional<A, S> {
    pub(crate) fn write_inline<W: fmt::Write>(&self, out: &mut W, state_var: &str) -> fmt::Result {
        for (i, branch) in self.branches.iter().enumerate() {
            if i > 0 {
                out.write_str(" else ")?;
            }
            write!(out, "if {}=={} then ", state_var, branch.outcome)?;
            branch.plan.write_inline(out, state_var)?;
        }
        Ok(())
    }
}

impl<A: fmt::Display, S: fmt::Display> fmt::Display for Conditional<A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_inline(f, DEFAULT_STATE_VAR)
    }
}

impl<A: Serialize, S: Serialize> Serialize for Conditional<A, S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.branches.serialize(serializer)
    }
}

impl<A, S: PartialEq> TryFrom<Vec<Branch<A, S>>> for Conditional<A, S> {
    type Error = Error;

    fn try_from(branches: Vec<Branch<A, S>>) -> crate::Result<Self> {
        let mut conditional = Self::new();
        for (index, Branch { outcome, plan }) in branches.into_iter().enumerate() {
            if conditional.insert(outcome, plan).is_some() {
                return Err(Error::validation(
                    "outcomes",
                    format!("branch {} repeats an earlier outcome", index),
                ));
            }
        }
        Ok(conditional)
    }
}

impl<A, S: PartialEq> FromIterator<(S, Plan<A, S>)> for Conditional<A, S> {
    fn from_iter<I: IntoIterator<Item = (S, Plan<A, S>)>>(iter: I) -> Self {
        let mut conditional = Self::new();
        for (outcome, plan) in iter {
            conditional.insert(outcome, plan);
        }
        conditional
    }
}
