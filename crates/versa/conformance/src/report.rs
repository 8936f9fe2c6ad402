//! Conformance report generation.
//!
//! [`render`] produces the Markdown document for a finished run:
//! title and level, summary, per-category table, per-priority table, and a
//! failure section that only appears when something failed.
//! [`ConformanceReport`] bundles the run with its derived level for the
//! machine-readable outputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConformanceResult;
use crate::level::{classify, ConformanceLevel, PassRates};
use crate::types::{percentage, Priority, SuiteResult};

pub const REPORT_TITLE: &str = "VERSA 1.0 Conformance Report";

/// Counts for one priority, recomputed from the scenario records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityStats {
    pub priority: Priority,
    pub total: usize,
    pub passed: usize,
}

impl PriorityStats {
    pub fn failed(&self) -> usize {
        self.total - self.passed
    }

    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total)
    }
}

/// Per-priority counts in MUST, SHOULD, MAY order, including empty groups.
pub fn priority_stats(result: &SuiteResult) -> Vec<PriorityStats> {
    Priority::all()
        .iter()
        .map(|priority| {
            let matching = result.scenarios.iter().filter(|s| s.priority == *priority);
            let (total, passed) = matching.fold((0, 0), |(total, passed), s| {
                (total + 1, passed + usize::from(s.result.passed))
            });
            PriorityStats {
                priority: *priority,
                total,
                passed,
            }
        })
        .collect()
}

fn one_decimal(rate: f64) -> String {
    format!("{:.1}", (rate * 10.0).round() / 10.0)
}

fn whole(rate: f64) -> String {
    format!("{:.0}", rate.round())
}

/// Render a finished run as a Markdown report.
pub fn render(result: &SuiteResult) -> String {
    let level = classify(result);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {REPORT_TITLE}"));
    lines.push(String::new());
    lines.push(format!("**Conformance Level:** {}", level.as_upper()));
    lines.push(String::new());

    lines.push("## Summary".into());
    lines.push(String::new());
    lines.push(format!("- Total Scenarios: {}", result.total));
    lines.push(format!("- Passed: {}", result.passed));
    lines.push(format!("- Failed: {}", result.failed));
    lines.push(format!("- Pass Rate: {}%", one_decimal(result.pass_rate())));
    lines.push(String::new());

    lines.push("## By Category".into());
    lines.push(String::new());
    lines.push("| Category | Total | Passed | Failed | Rate |".into());
    lines.push("|----------|-------|--------|--------|------|".into());
    for (category, tally) in &result.by_category {
        if tally.total == 0 {
            continue;
        }
        lines.push(format!(
            "| {} | {} | {} | {} | {}% |",
            category,
            tally.total,
            tally.passed,
            tally.failed,
            whole(tally.pass_rate())
        ));
    }
    lines.push(String::new());

    lines.push("## By Priority".into());
    lines.push(String::new());
    lines.push("| Priority | Total | Passed | Rate |".into());
    lines.push("|----------|-------|--------|------|".into());
    for stats in priority_stats(result) {
        if stats.total == 0 {
            continue;
        }
        lines.push(format!(
            "| {} | {} | {} | {}% |",
            stats.priority.label(),
            stats.total,
            stats.passed,
            whole(stats.pass_rate())
        ));
    }
    lines.push(String::new());

    let failed: Vec<_> = result.failures().collect();
    if !failed.is_empty() {
        lines.push("## Failed Scenarios".into());
        lines.push(String::new());

        for scenario in failed {
            lines.push(format!("### {}: {}", scenario.id, scenario.name));
            lines.push(String::new());
            lines.push(format!("**Category:** {}", scenario.category));
            lines.push(format!("**Priority:** {}", scenario.priority.label()));

            if let Some(error) = scenario.result.error.as_deref().filter(|e| !e.is_empty()) {
                lines.push(String::new());
                lines.push(format!("**Error:** {error}"));
            }

            lines.push(String::new());
        }
    }

    lines.join("\n")
}

/// A finished run together with everything derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub level: ConformanceLevel,
    pub pass_rates: PassRates,
    pub priorities: Vec<PriorityStats>,
    pub suite: SuiteResult,
}

impl ConformanceReport {
    pub fn from_suite(suite: SuiteResult) -> Self {
        Self {
            level: classify(&suite),
            pass_rates: PassRates::from_records(&suite.scenarios),
            priorities: priority_stats(&suite),
            suite,
        }
    }

    /// Whether the run reached at least `minimum`.
    pub fn passes(&self, minimum: ConformanceLevel) -> bool {
        self.level >= minimum
    }

    pub fn to_markdown(&self) -> String {
        render(&self.suite)
    }

    pub fn to_json(&self) -> ConformanceResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_yaml(&self) -> ConformanceResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl fmt::Display for ConformanceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{REPORT_TITLE}")?;
        writeln!(f, "{}", "=".repeat(REPORT_TITLE.len()))?;
        writeln!(
            f,
            "Level: {} ({})",
            self.level.as_upper(),
            self.level.description()
        )?;
        writeln!(
            f,
            "Total: {}  Passed: {}  Failed: {}  Skipped: {}",
            self.suite.total, self.suite.passed, self.suite.failed, self.suite.skipped
        )?;
        writeln!(f, "Pass Rate: {}%", one_decimal(self.suite.pass_rate()))?;
        for stats in self.priorities.iter().filter(|s| s.total > 0) {
            writeln!(
                f,
                "  {:<6} {}/{} ({}%)",
                stats.priority.label(),
                stats.passed,
                stats.total,
                whole(stats.pass_rate())
            )?;
        }
        Ok(())
    }
}
