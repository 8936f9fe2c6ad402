//! End-to-end runs of the registered VERSA scenario suite.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use versa_conformance::*;
use versa_schemas::VersaSchemas;

fn registry() -> Vec<Scenario> {
    all_scenarios(Arc::new(VersaSchemas::new().unwrap()))
}

#[tokio::test]
async fn test_full_suite_reaches_full_conformance() {
    let result = SuiteRunner::new().run(&registry()).await;

    assert_eq!(result.total, 70);
    assert_eq!(result.passed, 70, "failures: {:?}", result.failures().collect::<Vec<_>>());
    assert_eq!(result.skipped, 0);
    assert!(result.check_invariants().is_ok());
    assert_eq!(classify(&result), ConformanceLevel::Full);

    for category in [
        ScenarioCategory::Schema,
        ScenarioCategory::Merge,
        ScenarioCategory::Context,
        ScenarioCategory::Profile,
        ScenarioCategory::Rules,
        ScenarioCategory::Cli,
        ScenarioCategory::Permissions,
    ] {
        assert_eq!(result.category(category).total, 10, "category {category}");
    }
    assert_eq!(result.category(ScenarioCategory::Agent).total, 0);
    assert_eq!(result.category(ScenarioCategory::Discovery).total, 0);
}

#[tokio::test]
async fn test_full_suite_report() {
    let report = ConformanceReport::from_suite(SuiteRunner::new().run(&registry()).await);
    let markdown = report.to_markdown();

    assert!(markdown.contains("**Conformance Level:** FULL"));
    assert!(markdown.contains("- Total Scenarios: 70"));
    assert!(markdown.contains("- Pass Rate: 100.0%"));
    assert!(markdown.contains("| schema | 10 | 10 | 0 | 100% |"));
    assert!(!markdown.contains("| agent |"));
    assert!(!markdown.contains("## Failed Scenarios"));

    let must = report.priorities.iter().find(|p| p.priority == Priority::Must).unwrap();
    let total: usize = report.priorities.iter().map(|p| p.total).sum();
    assert_eq!(total, 70);
    assert!(must.total > 0);
}

#[tokio::test]
async fn test_runs_are_deterministic() {
    let registry = registry();
    let runner = SuiteRunner::new();
    let first = runner.run(&registry).await;
    let second = runner.run(&registry).await;

    let summary = |r: &SuiteResult| {
        r.scenarios
            .iter()
            .map(|s| (s.id.clone(), s.result.passed, s.result.error.clone()))
            .collect::<Vec<_>>()
    };
    assert_eq!(summary(&first), summary(&second));
    assert_eq!(first.by_category, second.by_category);
    assert_eq!(classify(&first), classify(&second));
}

#[tokio::test]
async fn test_injected_failure_appears_in_report() {
    let mut scenarios = registry();
    scenarios.push(Scenario::from_fn(
        "fail-1",
        "Always fails",
        "injected failure",
        ScenarioCategory::Discovery,
        Priority::Must,
        || Ok(ScenarioOutcome::fail("X")),
    ));

    let result = SuiteRunner::new().run(&scenarios).await;
    assert_eq!(result.failed, 1);
    assert_eq!(classify(&result), ConformanceLevel::Partial);

    let markdown = render(&result);
    assert!(markdown.contains("## Failed Scenarios"));
    assert!(markdown.contains("### fail-1: Always fails"));
    assert!(markdown.contains("**Category:** discovery"));
    assert!(markdown.contains("**Error:** X"));
}

#[tokio::test]
async fn test_async_scenarios_run_in_order() {
    let scenarios = vec![
        Scenario::from_async_fn(
            "slow",
            "Slow check",
            "sleeps before passing",
            ScenarioCategory::Discovery,
            Priority::Should,
            || async {
                tokio::time::sleep(Duration::from_millis(5)).await;
                Ok(ScenarioOutcome::pass())
            },
        ),
        Scenario::from_fn(
            "fast",
            "Fast check",
            "passes immediately",
            ScenarioCategory::Discovery,
            Priority::Should,
            || Ok(ScenarioOutcome::pass()),
        ),
    ];

    let result = SuiteRunner::new().run(&scenarios).await;
    assert_eq!(result.scenarios[0].id.as_str(), "slow");
    assert!(result.scenarios[0].result.duration_ms.unwrap() >= 5.0);
    assert_eq!(result.category(ScenarioCategory::Discovery).passed, 2);
}

#[tokio::test]
async fn test_config_driven_run() {
    let registry = registry();
    let config = ConformanceConfig::from_toml(
        r#"
        categories = ["rules", "permissions"]
        min_level = "full"
        "#,
    )
    .unwrap();

    let report = SuiteRunner::new().run_config(&registry, &config).await.unwrap();
    assert_eq!(report.suite.total, 20);
    assert!(report.passes(config.min_level));

    let ids: HashSet<_> = report.suite.scenarios.iter().map(|s| s.id.as_str()).collect();
    assert!(ids.contains("rules-001") && ids.contains("perm-010"));
}

#[tokio::test]
async fn test_unknown_scenario_id_rejected() {
    let config = ConformanceConfig {
        scenario_ids: vec!["schema-042".into()],
        ..ConformanceConfig::default()
    };
    let err = SuiteRunner::new().run_config(&registry(), &config).await.unwrap_err();
    assert!(matches!(err, ConformanceError::UnknownScenario(_)));
}
