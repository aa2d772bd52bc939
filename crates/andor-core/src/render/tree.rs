//! Text rendering for contingent plans
//!
//! This module provides:
//! - RenderOptions: Style, state variable name, indentation and depth limit
//! - PlanRenderer: Renders plans inline or as an indented tree for CLI/log output

use std::fmt;

use serde::{Deserialize, Serialize};

use super::stats::PlanStats;
use crate::config::RenderConfig;
use crate::plan::{Conditional, DEFAULT_STATE_VAR, Plan, PlanStep};

const ROOT_LABEL: &str = "plan";
const GOAL_LABEL: &str = "(goal)";
const ELIDED_LABEL: &str = "...";

/// Style configuration for tree rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStyle {
    /// ASCII characters only (works everywhere)
    Ascii,
    /// Unicode box-drawing characters
    #[default]
    Unicode,
    /// Unicode with a rounded last-child corner
    Rounded,
}

impl NodeStyle {
    /// Connector for a child line and the continuation for lines below it
    fn connectors(self, is_last: bool, width: usize) -> (String, String) {
        let (corner, tee, dash, bar) = match self {
            NodeStyle::Ascii => ('`', '+', '-', '|'),
            NodeStyle::Unicode => ('└', '├', '─', '│'),
            NodeStyle::Rounded => ('╰', '├', '─', '│'),
        };
        let width = width.max(2);
        let run: String = std::iter::repeat_n(dash, width - 2).collect();
        let pad = " ".repeat(width - 1);

        if is_last {
            (format!("{}{} ", corner, run), format!(" {}", pad))
        } else {
            (format!("{}{} ", tee, run), format!("{}{}", bar, pad))
        }
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascii => write!(f, "ascii"),
            Self::Unicode => write!(f, "unicode"),
            Self::Rounded => write!(f, "rounded"),
        }
    }
}

/// Options for rendering plans
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Visual style for tree characters
    pub style: NodeStyle,
    /// Name of the observed state in `if s==o then ...`
    pub state_var: String,
    /// Indentation width per level
    pub indent_width: usize,
    /// Maximum conditional nesting to render (-1 for unlimited)
    pub max_depth: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            style: NodeStyle::Unicode,
            state_var: DEFAULT_STATE_VAR.to_string(),
            indent_width: 4,
            max_depth: -1,
        }
    }
}

impl RenderOptions {
    /// Create ASCII-only options for basic terminals
    pub fn ascii() -> Self {
        Self {
            style: NodeStyle::Ascii,
            ..Default::default()
        }
    }

    /// Options matching a loaded configuration
    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            style: config.style,
            state_var: config.state_var.clone(),
            indent_width: config.indent_width,
            max_depth: config.max_depth,
        }
    }

    /// Builder: set style
    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }

    /// Builder: set state variable name
    pub fn with_state_var(mut self, state_var: impl Into<String>) -> Self {
        self.state_var = state_var.into();
        self
    }

    /// Builder: set max depth
    pub fn with_max_depth(mut self, depth: i32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Builder: set indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    fn is_elided(&self, nesting: usize) -> bool {
        self.max_depth >= 0 && nesting as i64 > self.max_depth as i64
    }
}

/// Inline form with a custom state variable
struct Inline<'a, A, S> {
    plan: &'a Plan<A, S>,
    state_var: &'a str,
}

impl<A: fmt::Display, S: fmt::Display> fmt::Display for Inline<'_, A, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.plan.write_inline(f, self.state_var)
    }
}

/// Renders plans as text
#[derive(Debug, Clone, Default)]
pub struct PlanRenderer {
    options: RenderOptions,
}

impl PlanRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render the bracketed single-line form
    pub fn render_inline<A: fmt::Display, S: fmt::Display>(&self, plan: &Plan<A, S>) -> String {
        Inline {
            plan,
            state_var: &self.options.state_var,
        }
        .to_string()
    }

    /// Render an indented tree of steps and branches
    pub fn render_tree<A: fmt::Display, S: fmt::Display>(&self, plan: &Plan<A, S>) -> String {
        let mut output = String::new();
        output.push_str(ROOT_LABEL);
        output.push('\n');

        if plan.is_empty() {
            self.push_line(&mut output, "", true, GOAL_LABEL);
        } else {
            self.render_steps(plan, &mut output, "", 0);
        }
        output
    }

    /// Render with a summary header
    pub fn render_with_summary<A: fmt::Display, S: fmt::Display>(
        &self,
        plan: &Plan<A, S>,
    ) -> String {
        let mut output = String::new();
        output.push_str(&Self::render_header(&PlanStats::of(plan)));
        output.push('\n');
        output.push_str(&self.render_tree(plan));
        output
    }

    /// Render a compact single-line status
    pub fn render_compact<A, S>(&self, plan: &Plan<A, S>) -> String {
        let stats = PlanStats::of(plan);
        format!(
            "[plan] Steps:{} Actions:{} Conditionals:{} Depth:{} Paths:{}",
            stats.steps, stats.actions, stats.conditionals, stats.depth, stats.execution_paths
        )
    }

    fn render_header(stats: &PlanStats) -> String {
        format!(
            "Plan ({} actions, {} conditionals, {} branches, depth {})",
            stats.actions, stats.conditionals, stats.branches, stats.depth
        )
    }

    fn render_steps<A: fmt::Display, S: fmt::Display>(
        &self,
        plan: &Plan<A, S>,
        output: &mut String,
        prefix: &str,
        nesting: usize,
    ) {
        let step_count = plan.len();
        for (i, step) in plan.iter().enumerate() {
            let is_last = i == step_count - 1;
            match step {
                PlanStep::Action(action) => {
                    self.push_line(output, prefix, is_last, &action.to_string());
                }
                PlanStep::Conditional(conditional) => {
                    self.render_conditional(conditional, output, prefix, is_last, nesting);
                }
            }
        }
    }

    fn render_conditional<A: fmt::Display, S: fmt::Display>(
        &self,
        conditional: &Conditional<A, S>,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        nesting: usize,
    ) {
        let label = if conditional.is_empty() {
            format!("branch on {} (no outcomes)", self.options.state_var)
        } else {
            format!("branch on {}", self.options.state_var)
        };
        let child_prefix = self.push_line(output, prefix, is_last, &label);

        if self.options.is_elided(nesting + 1) {
            self.push_line(output, &child_prefix, true, ELIDED_LABEL);
            return;
        }

        let branch_count = conditional.len();
        for (i, branch) in conditional.branches().iter().enumerate() {
            let is_last_branch = i == branch_count - 1;
            let outcome = format!("{}=={}", self.options.state_var, branch.outcome);
            let branch_prefix = self.push_line(output, &child_prefix, is_last_branch, &outcome);

            if branch.plan.is_empty() {
                self.push_line(output, &branch_prefix, true, GOAL_LABEL);
            } else {
                self.render_steps(&branch.plan, output, &branch_prefix, nesting + 1);
            }
        }
    }

    /// Push one child line and return the prefix for its own children
    fn push_line(&self, output: &mut String, prefix: &str, is_last: bool, label: &str) -> String {
        let (branch, vertical) = self
            .options
            .style
            .connectors(is_last, self.options.indent_width);

        output.push_str(prefix);
        output.push_str(&branch);
        output.push_str(label);
        output.push('\n');

        format!("{}{}", prefix, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestPlan = Plan<&'static str, &'static str>;

    fn scenario_plan() -> TestPlan {
        let cond = Conditional::new()
            .when("o1", TestPlan::with_step(PlanStep::action("a2")))
            .when("o2", TestPlan::new());
        TestPlan::with_step(cond).with_prepended(PlanStep::action("a1"))
    }

    #[test]
    fn test_render_inline_default_matches_display() {
        let plan = scenario_plan();
        let renderer = PlanRenderer::default();
        assert_eq!(renderer.render_inline(&plan), plan.to_string());
    }

    #[test]
    fn test_render_inline_custom_state_var() {
        let renderer = PlanRenderer::new(RenderOptions::default().with_state_var("obs"));
        assert_eq!(
            renderer.render_inline(&scenario_plan()),
            "[a1, if obs==o1 then [a2] else if obs==o2 then []]"
        );
    }

    #[test]
    fn test_render_tree_unicode() {
        let renderer = PlanRenderer::default();
        let expected = "\
plan
├── a1
└── branch on s
    ├── s==o1
    │   └── a2
    └── s==o2
        └── (goal)
";
        assert_eq!(renderer.render_tree(&scenario_plan()), expected);
    }

    #[test]
    fn test_render_tree_ascii() {
        let renderer = PlanRenderer::new(RenderOptions::ascii());
        let expected = "\
plan
+-- a1
`-- branch on s
    +-- s==o1
    |   `-- a2
    `-- s==o2
        `-- (goal)
";
        assert_eq!(renderer.render_tree(&scenario_plan()), expected);
    }

    #[test]
    fn test_render_tree_narrow_indent() {
        let renderer = PlanRenderer::new(RenderOptions::ascii().with_indent_width(2));
        let expected = "\
plan
+ a1
` branch on s
  + s==o1
  | ` a2
  ` s==o2
    ` (goal)
";
        assert_eq!(renderer.render_tree(&scenario_plan()), expected);
    }

    #[test]
    fn test_render_tree_empty_plan() {
        let renderer = PlanRenderer::new(RenderOptions::ascii());
        assert_eq!(renderer.render_tree(&TestPlan::new()), "plan\n`-- (goal)\n");
    }

    #[test]
    fn test_render_tree_max_depth() {
        let renderer = PlanRenderer::new(RenderOptions::ascii().with_max_depth(0));
        let expected = "\
plan
+-- a1
`-- branch on s
    `-- ...
";
        assert_eq!(renderer.render_tree(&scenario_plan()), expected);
    }

    #[test]
    fn test_render_tree_empty_conditional() {
        let renderer = PlanRenderer::new(RenderOptions::ascii());
        let plan = TestPlan::with_step(Conditional::<&str, &str>::new());
        assert_eq!(renderer.render_tree(&plan), "plan\n`-- branch on s (no outcomes)\n");
    }

    #[test]
    fn test_render_with_summary() {
        let renderer = PlanRenderer::default();
        let output = renderer.render_with_summary(&scenario_plan());
        assert!(output.starts_with("Plan (2 actions, 1 conditionals, 2 branches, depth 1)\n"));
        assert!(output.contains("branch on s"));
    }

    #[test]
    fn test_render_compact() {
        let renderer = PlanRenderer::default();
        assert_eq!(
            renderer.render_compact(&scenario_plan()),
            "[plan] Steps:2 Actions:2 Conditionals:1 Depth:1 Paths:2"
        );
    }

    #[test]
    fn test_options_from_config() {
        let config = RenderConfig {
            state_var: "state".to_string(),
            style: NodeStyle::Rounded,
            indent_width: 3,
            max_depth: 2,
        };
        let options = RenderOptions::from_config(&config);
        assert_eq!(options.style, NodeStyle::Rounded);
        assert_eq!(options.state_var, "state");
        assert_eq!(options.indent_width, 3);
        assert_eq!(options.max_depth, 2);
    }

    #[test]
    fn test_node_style_display() {
        assert_eq!(NodeStyle::Ascii.to_string(), "ascii");
        assert_eq!(NodeStyle::default(), NodeStyle::Unicode);
    }
}
