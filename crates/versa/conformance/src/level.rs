//! Conformance level classification.
//!
//! The level is derived from pass rates split by priority. MUST scenarios
//! decide the two lowest bands, SHOULD scenarios separate the upper three,
//! and MAY scenarios never influence the result.
//!
//! | Condition (first match) | Level |
//! |-------------------------|-------|
//! | must < 0.80 | none |
//! | must < 1.00 | partial |
//! | should < 0.70 | basic |
//! | should < 0.90 | high |
//! | otherwise | full |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConformanceError;
use crate::types::{Priority, ScenarioRecord, SuiteResult};

const MUST_PARTIAL_THRESHOLD: f64 = 0.80;
const MUST_FULL_THRESHOLD: f64 = 1.00;
const SHOULD_HIGH_THRESHOLD: f64 = 0.70;
const SHOULD_FULL_THRESHOLD: f64 = 0.90;

/// Ordinal conformance level, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ConformanceLevel {
    None,
    Partial,
    Basic,
    High,
    Full,
}

impl ConformanceLevel {
    pub fn all() -> &'static [ConformanceLevel] {
        &[
            Self::None,
            Self::Partial,
            Self::Basic,
            Self::High,
            Self::Full,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Partial => "partial",
            Self::Basic => "basic",
            Self::High => "high",
            Self::Full => "full",
        }
    }

    pub fn as_upper(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Partial => "PARTIAL",
            Self::Basic => "BASIC",
            Self::High => "HIGH",
            Self::Full => "FULL",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "Many MUST requirements fail",
            Self::Partial => "Some MUST requirements fail",
            Self::Basic => "All MUST requirements pass",
            Self::High => "All MUST pass, most SHOULD pass",
            Self::Full => "All MUST pass, all SHOULD pass",
        }
    }
}

impl fmt::Display for ConformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConformanceLevel {
    type Err = ConformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConformanceError::InvalidConfiguration(format!("unknown level: {s}")))
    }
}

/// Pass rates (0.0 ..= 1.0) feeding the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassRates {
    pub must: f64,
    pub should: f64,
}

impl PassRates {
    /// Compute rates from scenario records. An empty priority group counts as
    /// fully compliant.
    pub fn from_records(records: &[ScenarioRecord]) -> Self {
        Self {
            must: rate_for(records, Priority::Must),
            should: rate_for(records, Priority::Should),
        }
    }

    pub fn level(&self) -> ConformanceLevel {
        if self.must < MUST_PARTIAL_THRESHOLD {
            ConformanceLevel::None
        } else if self.must < MUST_FULL_THRESHOLD {
            ConformanceLevel::Partial
        } else if self.should < SHOULD_HIGH_THRESHOLD {
            ConformanceLevel::Basic
        } else if self.should < SHOULD_FULL_THRESHOLD {
            ConformanceLevel::High
        } else {
            ConformanceLevel::Full
        }
    }
}

fn rate_for(records: &[ScenarioRecord], priority: Priority) -> f64 {
    let (total, passed) = records
        .iter()
        .filter(|r| r.priority == priority)
        .fold((0usize, 0usize), |(total, passed), r| {
            (total + 1, passed + usize::from(r.result.passed))
        });

    if total == 0 {
        1.0
    } else {
        passed as f64 / total as f64
    }
}

/// Derive the conformance level of a finished run.
pub fn classify(result: &SuiteResult) -> ConformanceLevel {
    PassRates::from_records(&result.scenarios).level()
}
