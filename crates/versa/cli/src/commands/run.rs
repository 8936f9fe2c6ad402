//! Run command

use clap::Args;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::Tabled;
use versa_conformance::{
    ConformanceConfig, ConformanceLevel, ConformanceReport, ReportFormat, ScenarioCategory,
    ScenarioRecord, SuiteRunner,
};

use crate::error::CliResult;
use crate::output::{print_error, print_success, print_warning, render_rows, OutputFormat};
use crate::Verdict;

/// Arguments for `run`
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Only run scenarios in this category (repeatable)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Vec<ScenarioCategory>,

    /// Only run the scenario with this id (repeatable, overrides --category)
    #[arg(long, value_name = "ID")]
    pub id: Vec<String>,

    /// Report format (markdown, table, json, yaml)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Lowest level that counts as success (none, partial, basic, high, full)
    #[arg(long, value_name = "LEVEL")]
    pub min_level: Option<ConformanceLevel>,
}

impl RunArgs {
    /// Command-line flags take precedence over the config file.
    fn apply(&self, config: &mut ConformanceConfig) {
        if !self.category.is_empty() {
            config.categories = self.category.clone();
        }
        if !self.id.is_empty() {
            config.scenario_ids = self.id.clone();
        }
        if let Some(level) = self.min_level {
            config.min_level = level;
        }
    }
}

/// One scenario in table output
#[derive(Serialize, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Error")]
    error: String,
}

impl From<&ScenarioRecord> for ScenarioRow {
    fn from(record: &ScenarioRecord) -> Self {
        Self {
            id: record.id.to_string(),
            category: record.category.to_string(),
            priority: record.priority.label().to_string(),
            status: if record.result.passed { "PASS" } else { "FAIL" }.to_string(),
            duration: record
                .result
                .duration_ms
                .map(|ms| format!("{ms:.2} ms"))
                .unwrap_or_else(|| "-".to_string()),
            error: record.result.error.clone().unwrap_or_default(),
        }
    }
}

fn render(report: &ConformanceReport, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Markdown => Ok(report.render_as(ReportFormat::Markdown)?),
        OutputFormat::Json => Ok(report.render_as(ReportFormat::Json)?),
        OutputFormat::Yaml => Ok(report.render_as(ReportFormat::Yaml)?),
        OutputFormat::Table => {
            let rows: Vec<ScenarioRow> = report.suite.scenarios.iter().map(Into::into).collect();
            Ok(format!("{report}\n{}", render_rows(&rows, OutputFormat::Table)?))
        }
    }
}

/// Execute the run command
pub async fn execute(args: RunArgs, config_path: Option<&Path>) -> CliResult<Verdict> {
    let mut config = super::load_config(config_path)?;
    args.apply(&mut config);
    let format = args.format.unwrap_or_else(|| config.format.into());

    let registry = super::registry()?;
    let report = SuiteRunner::new().run_config(&registry, &config).await?;
    if report.suite.total == 0 {
        print_warning("No scenarios matched the selection");
    }
    let rendered = render(&report, format)?;

    match &args.out {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            print_success(&format!("Report written to {}", path.display()));
        }
        None => println!("{rendered}"),
    }

    let passes = report.passes(config.min_level);
    if !passes {
        print_error(&format!(
            "Conformance level {} is below the required {}",
            report.level.as_upper(),
            config.min_level.as_upper()
        ));
    }

    Ok(Verdict::from_bool(passes))
}
