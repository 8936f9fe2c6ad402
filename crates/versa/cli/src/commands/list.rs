//! List command

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use versa_conformance::{Priority, Scenario, ScenarioCategory};

use crate::error::CliResult;
use crate::output::{render_rows, OutputFormat};
use crate::Verdict;

/// Arguments for `list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only list scenarios in this category
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<ScenarioCategory>,

    /// Only list scenarios with this priority (must, should, may)
    #[arg(long, value_name = "PRIORITY")]
    pub priority: Option<Priority>,

    /// Output format (table, markdown, json, yaml)
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Registry entry for listing
#[derive(Serialize, Tabled)]
struct ScenarioSummary {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: ScenarioCategory,
    #[tabled(rename = "Priority")]
    priority: Priority,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(skip)]
    description: String,
    #[tabled(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    spec_ref: Option<String>,
}

impl From<&Scenario> for ScenarioSummary {
    fn from(scenario: &Scenario) -> Self {
        Self {
            id: scenario.id.to_string(),
            category: scenario.category,
            priority: scenario.priority,
            name: scenario.name.clone(),
            description: scenario.description.clone(),
            spec_ref: scenario.spec_ref.clone(),
        }
    }
}

fn summarize(
    registry: &[Scenario],
    category: Option<ScenarioCategory>,
    priority: Option<Priority>,
) -> Vec<ScenarioSummary> {
    registry
        .iter()
        .filter(|s| category.map_or(true, |c| s.category == c))
        .filter(|s| priority.map_or(true, |p| s.priority == p))
        .map(Into::into)
        .collect()
}

/// Execute the list command
pub fn execute(args: ListArgs) -> CliResult<Verdict> {
    let registry = super::registry()?;
    let rows = summarize(&registry, args.category, args.priority);
    println!("{}", render_rows(&rows, args.format)?);
    Ok(Verdict::Pass)
}
