//! Suite runner.
//!
//! Executes scenarios strictly one at a time, in input order, and folds each
//! outcome into a [`SuiteResult`]. A check that returns a fault or panics is
//! recorded as a failed scenario; it never stops the run.

use chrono::Utc;
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::time::Instant;

use crate::config::{select, ConformanceConfig};
use crate::error::ConformanceResult;
use crate::report::ConformanceReport;
use crate::scenario::Scenario;
use crate::types::{ScenarioOutcome, ScenarioRecord, SuiteResult};

/// Runs scenario sets and aggregates their outcomes.
#[derive(Debug, Clone, Default)]
pub struct SuiteRunner;

impl SuiteRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run every scenario in order and return the aggregate.
    pub async fn run(&self, scenarios: &[Scenario]) -> SuiteResult {
        let mut result = SuiteResult::empty(Utc::now());

        tracing::info!(scenarios = scenarios.len(), "starting conformance run");

        for scenario in scenarios {
            let outcome = Self::execute(scenario).await;
            Self::record(&mut result, scenario, outcome);
        }

        result.completed_at = Utc::now();

        tracing::info!(
            total = result.total,
            passed = result.passed,
            failed = result.failed,
            skipped = result.skipped,
            "conformance run complete"
        );

        result
    }

    /// Select from `registry` per `config`, run, and classify.
    pub async fn run_config(
        &self,
        registry: &[Scenario],
        config: &ConformanceConfig,
    ) -> ConformanceResult<ConformanceReport> {
        let selected = select(registry, config)?;
        let report = ConformanceReport::from_suite(self.run(&selected).await);

        tracing::info!(
            level = %report.level,
            min_level = %config.min_level,
            passes = report.passes(config.min_level),
            "conformance level derived"
        );

        Ok(report)
    }

    async fn execute(scenario: &Scenario) -> ScenarioOutcome {
        let start = Instant::now();
        let attempt = AssertUnwindSafe(scenario.evaluate()).catch_unwind().await;

        match attempt {
            Ok(Ok(mut outcome)) => {
                outcome.duration_ms = Some(start.elapsed().as_secs_f64() * 1000.0);
                tracing::debug!(
                    id = %scenario.id,
                    passed = outcome.passed,
                    duration_ms = outcome.duration_ms,
                    "scenario evaluated"
                );
                outcome
            }
            Ok(Err(fault)) => {
                tracing::warn!(id = %scenario.id, error = %fault, "scenario raised a fault");
                ScenarioOutcome::fail(fault.to_string())
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(id = %scenario.id, error = %message, "scenario panicked");
                ScenarioOutcome::fail(message)
            }
        }
    }

    fn record(result: &mut SuiteResult, scenario: &Scenario, outcome: ScenarioOutcome) {
        let passed = outcome.passed;

        result.total += 1;
        if passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
        result
            .by_category
            .entry(scenario.category)
            .or_default()
            .record(passed);

        result.scenarios.push(ScenarioRecord {
            id: scenario.id.clone(),
            name: scenario.name.clone(),
            category: scenario.category,
            priority: scenario.priority,
            result: outcome,
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "scenario panicked".to_string()
    }
}
