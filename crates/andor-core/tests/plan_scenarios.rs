//! Plan construction and rendering scenarios

use andor_core::prelude::*;
use tracing_subscriber::EnvFilter;

type StrPlan = Plan<&'static str, &'static str>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn act(name: &'static str) -> PlanStep<&'static str, &'static str> {
    PlanStep::action(name)
}

#[test]
fn test_empty_plan() {
    init_tracing();
    let plan = StrPlan::new();
    assert!(plan.is_empty());
    assert_eq!(plan.to_string(), "[]");
}

#[test]
fn test_any_insert_makes_plan_non_empty() {
    init_tracing();
    let mut appended = StrPlan::new();
    appended.append(act("a"));
    assert!(!appended.is_empty());

    let mut prepended = StrPlan::new();
    prepended.prepend(act("a"));
    assert!(!prepended.is_empty());
}

#[test]
fn test_prepend_prepend_append() {
    init_tracing();
    let mut plan = StrPlan::new();
    plan.prepend(act("a1"));
    plan.prepend(act("a2"));
    plan.append(act("a3"));

    assert_eq!(plan.len(), 3);
    assert_eq!(plan.to_string(), "[a2, a1, a3]");
}

#[test]
fn test_three_step_render() {
    init_tracing();
    let plan = StrPlan::with_step(act("a"))
        .with_appended(act("b"))
        .with_appended(act("c"));
    assert_eq!(plan.to_string(), "[a, b, c]");
}

#[test]
fn test_conditional_scenario() {
    init_tracing();
    let p1 = StrPlan::with_step(act("a2"));
    let p2 = StrPlan::new();
    let cond = Conditional::new().when("o1", p1).when("o2", p2);
    let plan = StrPlan::with_step(cond).with_prepended(act("a1"));

    assert_eq!(
        plan.to_string(),
        "[a1, if s==o1 then [a2] else if s==o2 then []]"
    );
    assert!(plan.contains(&act("a1")));
    assert!(!plan.contains(&act("a_unrelated")));
}

#[test]
fn test_conditional_render_recovers_branch_order() {
    init_tracing();
    let cond = Conditional::new()
        .when("north", StrPlan::with_step(act("x")))
        .when("east", StrPlan::new())
        .when("south", StrPlan::with_step(act("y")).with_appended(act("z")));
    let text = PlanStep::conditional(cond).to_string();

    let outcomes: Vec<&str> = text
        .split(" else ")
        .map(|arm| {
            arm.trim_start_matches("if s==")
                .split(" then ")
                .next()
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(outcomes, vec!["north", "east", "south"]);
}

#[test]
fn test_nested_conditionals_render() {
    init_tracing();
    let inner = Conditional::new()
        .when("x", StrPlan::new())
        .when("y", StrPlan::with_step(act("c")));
    let outer = Conditional::new()
        .when("o1", StrPlan::with_step(act("b")).with_appended(inner))
        .when("o2", StrPlan::new());
    let plan = StrPlan::with_step(outer).with_prepended(act("a"));

    assert_eq!(
        plan.to_string(),
        "[a, if s==o1 then [b, if s==x then [] else if s==y then [c]] else if s==o2 then []]"
    );
}

#[test]
fn test_json_roundtrip_preserves_structure() {
    init_tracing();
    let cond = Conditional::new()
        .when("o1".to_string(), Plan::with_step(PlanStep::action("a2".to_string())))
        .when("o2".to_string(), Plan::new());
    let plan: Plan<String, String> =
        Plan::with_step(cond).with_prepended(PlanStep::action("a1".to_string()));

    let json = serde_json::to_string_pretty(&plan).unwrap();
    let restored: Plan<String, String> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, plan);
    assert_eq!(restored.to_string(), plan.to_string());
}

#[test]
fn test_render_with_loaded_config() {
    init_tracing();
    let config = Config::from_toml_str(
        r#"
        [render]
        state_var = "obs"
        style = "ascii"
        "#,
    )
    .unwrap();
    let renderer = PlanRenderer::new(RenderOptions::from_config(&config.render));
    let plan = StrPlan::with_step(Conditional::new().when("o1", StrPlan::new()))
        .with_prepended(act("a1"));

    assert_eq!(renderer.render_inline(&plan), "[a1, if obs==o1 then []]");
    assert!(renderer.render_tree(&plan).contains("`-- obs==o1"));
}
