//! Property-based tests for plan construction and rendering.
//!
//! Validates:
//! 1. append/prepend sequences match a reference deque simulation
//! 2. any insert makes a plan non-empty
//! 3. contains() agrees with membership in the inserted values
//! 4. inline rendering is order-preserving with no trailing separator
//! 5. conditional branch order survives rendering

use std::collections::VecDeque;

use andor_core::plan::{Conditional, Plan, PlanStep};
use proptest::prelude::*;

type NumPlan = Plan<u16, u16>;

#[derive(Debug, Clone, Copy)]
enum Op {
    Append(u16),
    Prepend(u16),
}

// =============================================================================
// Strategies
// =============================================================================

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u16..500).prop_map(Op::Append),
        (0u16..500).prop_map(Op::Prepend),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(arb_op(), 0..40)
}

fn build(ops: &[Op]) -> (NumPlan, VecDeque<u16>) {
    let mut plan = NumPlan::new();
    let mut reference = VecDeque::new();
    for op in ops {
        match *op {
            Op::Append(a) => {
                plan.append(PlanStep::action(a));
                reference.push_back(a);
            }
            Op::Prepend(a) => {
                plan.prepend(PlanStep::action(a));
                reference.push_front(a);
            }
        }
    }
    (plan, reference)
}

proptest! {
    #[test]
    fn prop_order_matches_reference(ops in arb_ops()) {
        let (plan, reference) = build(&ops);

        prop_assert_eq!(plan.len(), ops.len());
        let actual: Vec<u16> = plan.actions().copied().collect();
        let expected: Vec<u16> = reference.into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_insert_makes_non_empty(ops in arb_ops(), extra in arb_op()) {
        let (mut plan, _) = build(&ops);
        match extra {
            Op::Append(a) => { plan.append(PlanStep::action(a)); }
            Op::Prepend(a) => { plan.prepend(PlanStep::action(a)); }
        }
        prop_assert!(!plan.is_empty());
    }

    #[test]
    fn prop_contains_iff_inserted(ops in arb_ops(), candidate in 0u16..1000) {
        let (plan, reference) = build(&ops);
        prop_assert_eq!(
            plan.contains(&PlanStep::action(candidate)),
            reference.contains(&candidate)
        );
        prop_assert!(!NumPlan::new().contains(&PlanStep::action(candidate)));
    }

    #[test]
    fn prop_render_is_joined_list(ops in arb_ops()) {
        let (plan, reference) = build(&ops);
        let items: Vec<String> = reference.iter().map(u16::to_string).collect();
        let expected = format!("[{}]", items.join(", "));

        let rendered = plan.to_string();
        prop_assert_eq!(&rendered, &expected);
        prop_assert!(!rendered.contains(", ]"));
    }

    #[test]
    fn prop_conditional_branch_order(outcomes in prop::collection::hash_set(0u16..1000, 1..8)) {
        let outcomes: Vec<u16> = outcomes.into_iter().collect();
        let cond: Conditional<u16, u16> = outcomes
            .iter()
            .map(|o| (*o, NumPlan::new()))
            .collect();
        let rendered = cond.to_string();

        let parsed: Vec<u16> = rendered
            .split(" else ")
            .filter_map(|arm| {
                arm.strip_prefix("if s==")
                    .and_then(|rest| rest.split(" then ").next())
                    .and_then(|o| o.parse().ok())
            })
            .collect();
        prop_assert_eq!(parsed, outcomes);
    }
}
