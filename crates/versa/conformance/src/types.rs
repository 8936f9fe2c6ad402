//! Core types for VERSA conformance runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConformanceError;

/// Identifies one scenario in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(pub String);

impl ScenarioId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of scenario categories.
///
/// Declaration order is the canonical order used for aggregation buckets and
/// report rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioCategory {
    Schema,
    Context,
    Profile,
    Agent,
    Rules,
    Permissions,
    Merge,
    Discovery,
    Cli,
}

impl ScenarioCategory {
    /// All categories in canonical order.
    pub fn all() -> &'static [ScenarioCategory] {
        &[
            Self::Schema,
            Self::Context,
            Self::Profile,
            Self::Agent,
            Self::Rules,
            Self::Permissions,
            Self::Merge,
            Self::Discovery,
            Self::Cli,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schema => "schema",
            Self::Context => "context",
            Self::Profile => "profile",
            Self::Agent => "agent",
            Self::Rules => "rules",
            Self::Permissions => "permissions",
            Self::Merge => "merge",
            Self::Discovery => "discovery",
            Self::Cli => "cli",
        }
    }
}

impl fmt::Display for ScenarioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScenarioCategory {
    type Err = ConformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConformanceError::InvalidConfiguration(format!("unknown category: {s}")))
    }
}

/// RFC 2119 obligation strength of a scenario's requirement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Must,
    Should,
    May,
}

impl Priority {
    pub fn all() -> &'static [Priority] {
        &[Self::Must, Self::Should, Self::May]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Must => "must",
            Self::Should => "should",
            Self::May => "may",
        }
    }

    /// Upper-case label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Must => "MUST",
            Self::Should => "SHOULD",
            Self::May => "MAY",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ConformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConformanceError::InvalidConfiguration(format!("unknown priority: {s}")))
    }
}

/// Outcome of evaluating one scenario.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub passed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Wall-clock time in milliseconds. Absent when the check faulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

impl ScenarioOutcome {
    pub fn pass() -> Self {
        Self {
            passed: true,
            ..Self::default()
        }
    }

    pub fn fail(error: impl Into<String>) -> Self {
        Self {
            passed: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    /// Outcome of a check that yields a verdict and an optional reason.
    pub fn from_check(passed: bool, error: Option<String>) -> Self {
        Self {
            passed,
            error,
            ..Self::default()
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Per-category counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CategoryTally {
    pub(crate) fn record(&mut self, passed: bool) {
        self.total += 1;
        if passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Pass rate as a percentage, 0 when empty.
    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total)
    }
}

/// One executed scenario as captured by the runner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRecord {
    pub id: ScenarioId,
    pub name: String,
    pub category: ScenarioCategory,
    pub priority: Priority,
    pub result: ScenarioOutcome,
}

/// Aggregate snapshot of one suite run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteResult {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Always zero: scenarios have no skip mechanism.
    pub skipped: usize,
    pub by_category: BTreeMap<ScenarioCategory, CategoryTally>,
    pub scenarios: Vec<ScenarioRecord>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SuiteResult {
    /// An empty result with every category bucket seeded at zero.
    pub fn empty(started_at: DateTime<Utc>) -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            by_category: ScenarioCategory::all()
                .iter()
                .map(|c| (*c, CategoryTally::default()))
                .collect(),
            scenarios: Vec::new(),
            started_at,
            completed_at: started_at,
        }
    }

    /// Overall pass rate as a percentage, 0 when nothing ran.
    pub fn pass_rate(&self) -> f64 {
        percentage(self.passed, self.total)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioRecord> {
        self.scenarios.iter().filter(|s| !s.result.passed)
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn category(&self, category: ScenarioCategory) -> CategoryTally {
        self.by_category.get(&category).copied().unwrap_or_default()
    }

    /// Check the aggregate counting invariants, returning the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.total != self.passed + self.failed + self.skipped {
            return Err(format!(
                "total {} != passed {} + failed {} + skipped {}",
                self.total, self.passed, self.failed, self.skipped
            ));
        }
        if self.scenarios.len() != self.passed + self.failed {
            return Err(format!(
                "{} scenario records for {} executed scenarios",
                self.scenarios.len(),
                self.passed + self.failed
            ));
        }
        for category in ScenarioCategory::all() {
            let tally = self
                .by_category
                .get(category)
                .ok_or_else(|| format!("missing category bucket: {category}"))?;
            if tally.total != tally.passed + tally.failed {
                return Err(format!(
                    "category {category}: total {} != passed {} + failed {}",
                    tally.total, tally.passed, tally.failed
                ));
            }
        }
        let bucketed: usize = self.by_category.values().map(|t| t.total).sum();
        if bucketed != self.total - self.skipped {
            return Err(format!(
                "category totals sum to {bucketed}, expected {}",
                self.total - self.skipped
            ));
        }
        Ok(())
    }
}

pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64) * 100.0
}
