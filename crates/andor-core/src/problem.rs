//! Nondeterministic problem interface
//!
//! The vocabulary shared by AND-OR search procedures and the plans they
//! produce. Nothing in this crate calls it; a search procedure uses it to
//! decide which steps go into a [`Plan`](crate::plan::Plan).

/// A search problem whose actions may have several outcomes
///
/// An AND-OR search over this problem builds plans bottom-up: a goal state
/// yields an empty plan, an OR node prepends the chosen action, and an AND
/// node turns the continuation of every element of `results` into one
/// conditional step.
pub trait NondeterministicProblem {
    /// Opaque action value stored in plan steps
    type Action: Clone;
    /// Opaque state value, used as the outcome key of conditional steps
    type State: Clone + PartialEq;

    /// State the agent starts in
    fn initial_state(&self) -> Self::State;

    /// Actions applicable in `state`, in the order they should be tried
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Every state `action` may lead to from `state`
    fn results(&self, state: &Self::State, action: &Self::Action) -> Vec<Self::State>;

    fn is_goal(&self, state: &Self::State) -> bool;
}
