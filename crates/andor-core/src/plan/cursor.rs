//! Plan cursor
//!
//! Walks a finished plan the way an executor consumes it: actions are handed
//! out in order, and at a conditional step the cursor stops until the
//! outcome that actually occurred is observed. The cursor never performs an
//! action itself.
//!
//! When a continuation runs out, the cursor resumes with the steps that
//! follow the conditional in the enclosing plan.

use std::fmt;

use tracing::{debug, warn};

use super::sequence::Plan;
use super::step::{Conditional, PlanStep};
use crate::error::{Error, Result};

#[derive(Debug)]
struct Frame<'a, A, S> {
    plan: &'a Plan<A, S>,
    next: usize,
}

/// Read-only walker over a contingent plan
#[derive(Debug)]
pub struct PlanCursor<'a, A, S> {
    frames: Vec<Frame<'a, A, S>>,
    actions_taken: usize,
    outcomes_observed: usize,
}

impl<'a, A, S> PlanCursor<'a, A, S> {
    /// Start at the first step of `plan`
    pub fn new(plan: &'a Plan<A, S>) -> Self {
        Self {
            frames: vec![Frame { plan, next: 0 }],
            actions_taken: 0,
            outcomes_observed: 0,
        }
    }

    /// The step the cursor is positioned on, unwinding finished continuations
    pub fn current(&mut self) -> Option<&'a PlanStep<A, S>> {
        while let Some(frame) = self.frames.last() {
            let plan: &'a Plan<A, S> = frame.plan;
            if let Some(step) = plan.get(frame.next) {
                return Some(step);
            }
            self.frames.pop();
        }
        None
    }

    /// The conditional waiting for an outcome, if any
    pub fn pending_conditional(&mut self) -> Option<&'a Conditional<A, S>> {
        self.current().and_then(PlanStep::as_conditional)
    }

    /// True when every step on the taken path has been consumed
    pub fn is_finished(&mut self) -> bool {
        self.current().is_none()
    }

    /// Nesting level of the continuation being walked (0 = top-level plan)
    pub fn depth(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn actions_taken(&self) -> usize {
        self.actions_taken
    }

    pub fn outcomes_observed(&self) -> usize {
        self.outcomes_observed
    }

    /// Next action to perform, or `None` once the plan is exhausted
    ///
    /// Fails with [`Error::AwaitingOutcome`] while positioned on a
    /// conditional step.
    pub fn next_action(&mut self) -> Result<Option<&'a A>> {
        match self.current() {
            None => Ok(None),
            Some(PlanStep::Action(action)) => {
                self.advance();
                self.actions_taken += 1;
                Ok(Some(action))
            }
            Some(PlanStep::Conditional(_)) => Err(Error::AwaitingOutcome),
        }
    }

    fn advance(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.next += 1;
        }
    }
}

impl<'a, A, S: PartialEq + fmt::Display> PlanCursor<'a, A, S> {
    /// Dispatch the pending conditional on the outcome that occurred
    pub fn observe(&mut self, outcome: &S) -> Result<()> {
        let conditional = match self.current() {
            Some(PlanStep::Conditional(conditional)) => conditional,
            _ => return Err(Error::NoPendingConditional),
        };

        let Some(continuation) = conditional.continuation_for(outcome) else {
            warn!(
                outcome = %outcome,
                branches = conditional.len(),
                "Observed outcome has no branch"
            );
            return Err(Error::UnmatchedOutcome(outcome.to_string()));
        };

        self.advance();
        self.frames.push(Frame {
            plan: continuation,
            next: 0,
        });
        self.outcomes_observed += 1;
        debug!(
            outcome = %outcome,
            depth = self.depth(),
            steps = continuation.len(),
            "Entered continuation"
        );
        Ok(())
    }
}
