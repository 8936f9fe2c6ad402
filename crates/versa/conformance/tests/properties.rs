//! Property tests: aggregation invariants and classifier behavior.

use proptest::prelude::*;
use versa_conformance::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
enum Behavior {
    Pass,
    Fail,
    Fault,
    Panic,
}

fn arb_behavior() -> impl Strategy<Value = Behavior> {
    prop_oneof![
        4 => Just(Behavior::Pass),
        2 => Just(Behavior::Fail),
        1 => Just(Behavior::Fault),
        1 => Just(Behavior::Panic),
    ]
}

fn arb_category() -> impl Strategy<Value = ScenarioCategory> {
    prop::sample::select(ScenarioCategory::all().to_vec())
}

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::all().to_vec())
}

fn arb_specs() -> impl Strategy<Value = Vec<(ScenarioCategory, Priority, Behavior)>> {
    prop::collection::vec((arb_category(), arb_priority(), arb_behavior()), 0..40)
}

fn build(specs: &[(ScenarioCategory, Priority, Behavior)]) -> Vec<Scenario> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (category, priority, behavior))| {
            let behavior = *behavior;
            let id = format!("gen-{i:03}");
            Scenario::from_fn(&id, &id, "generated", *category, *priority, move || match behavior {
                Behavior::Pass => Ok(ScenarioOutcome::pass()),
                Behavior::Fail => Ok(ScenarioOutcome::fail("failed")),
                Behavior::Fault => Err(ScenarioFault::assertion("fault")),
                Behavior::Panic => panic!("panicked"),
            })
        })
        .collect()
}

fn run(scenarios: &[Scenario]) -> SuiteResult {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(SuiteRunner::new().run(scenarios))
}

fn expected_rate(specs: &[(ScenarioCategory, Priority, Behavior)], priority: Priority) -> f64 {
    let group: Vec<_> = specs.iter().filter(|(_, p, _)| *p == priority).collect();
    if group.is_empty() {
        return 1.0;
    }
    let passed = group.iter().filter(|(_, _, b)| matches!(b, Behavior::Pass)).count();
    passed as f64 / group.len() as f64
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn aggregation_invariants_hold(specs in arb_specs()) {
        let result = run(&build(&specs));

        prop_assert!(result.check_invariants().is_ok(), "{:?}", result.check_invariants());
        prop_assert_eq!(result.total, specs.len());
        prop_assert_eq!(result.scenarios.len(), specs.len());
        prop_assert_eq!(result.by_category.len(), ScenarioCategory::all().len());

        let expected_passed = specs.iter().filter(|(_, _, b)| matches!(b, Behavior::Pass)).count();
        prop_assert_eq!(result.passed, expected_passed);

        for (record, (category, priority, _)) in result.scenarios.iter().zip(&specs) {
            prop_assert_eq!(record.category, *category);
            prop_assert_eq!(record.priority, *priority);
            if !record.result.passed {
                prop_assert!(record.result.error.is_some());
            }
        }
    }

    #[test]
    fn classification_follows_priority_rates(specs in arb_specs()) {
        let result = run(&build(&specs));
        let rates = PassRates {
            must: expected_rate(&specs, Priority::Must),
            should: expected_rate(&specs, Priority::Should),
        };
        prop_assert_eq!(classify(&result), rates.level());
    }

    #[test]
    fn classification_ignores_category(
        specs in arb_specs(),
        category in arb_category(),
    ) {
        let moved: Vec<_> = specs.iter().map(|(_, p, b)| (category, *p, *b)).collect();
        prop_assert_eq!(classify(&run(&build(&specs))), classify(&run(&build(&moved))));
    }

    #[test]
    fn may_outcomes_never_change_level(
        specs in arb_specs(),
        extra in prop::collection::vec(arb_behavior(), 1..10),
    ) {
        let mut with_may = specs.clone();
        with_may.extend(extra.into_iter().map(|b| (ScenarioCategory::Discovery, Priority::May, b)));
        prop_assert_eq!(classify(&run(&build(&specs))), classify(&run(&build(&with_may))));
    }

    #[test]
    fn fixing_a_failure_never_lowers_level(specs in arb_specs(), index in any::<prop::sample::Index>()) {
        prop_assume!(!specs.is_empty());
        let i = index.index(specs.len());
        let mut fixed = specs.clone();
        fixed[i].2 = Behavior::Pass;
        prop_assert!(classify(&run(&build(&fixed))) >= classify(&run(&build(&specs))));
    }
}
