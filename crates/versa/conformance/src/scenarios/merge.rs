//! Merge-strategy scenarios for profile overlays.

use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn merge_scenarios() -> Vec<Scenario> {
    let mut scenarios = requirements(
        ScenarioCategory::Merge,
        [
            Requirement {
                id: "merge-001",
                name: "Deep merge concatenates arrays",
                description: "Deep merge must concatenate arrays from base and profile",
                priority: Priority::Must,
                details: "base.rules + profile.rules = merged.rules",
            },
            Requirement {
                id: "merge-002",
                name: "Deep merge recurses objects",
                description: "Deep merge must recursively merge nested objects",
                priority: Priority::Must,
                details: "base.settings.x + profile.settings.y = merged.settings.{x,y}",
            },
            Requirement {
                id: "merge-003",
                name: "Deep merge profile overrides primitives",
                description: "Profile primitive values override base values",
                priority: Priority::Must,
                details: "profile values win for primitives",
            },
            Requirement {
                id: "merge-004",
                name: "Deep merge null removes field",
                description: "null in profile removes field from merged config",
                priority: Priority::Must,
                details: "profile.field = null removes base.field",
            },
            Requirement {
                id: "merge-005",
                name: "Deep merge undefined preserves",
                description: "undefined in profile preserves base value",
                priority: Priority::Must,
                details: "an absent profile.field keeps base.field",
            },
            Requirement {
                id: "merge-006",
                name: "Shallow merge replaces arrays",
                description: "Shallow merge replaces entire arrays",
                priority: Priority::Must,
                details: "profile.array fully replaces base.array",
            },
            Requirement {
                id: "merge-007",
                name: "Shallow merge top-level only",
                description: "Shallow merge only merges top-level properties",
                priority: Priority::Must,
                details: "no recursion into nested objects",
            },
            Requirement {
                id: "merge-008",
                name: "Replace ignores base",
                description: "Replace mode ignores base configuration entirely",
                priority: Priority::Must,
                details: "only profile used, base discarded",
            },
            Requirement {
                id: "merge-009",
                name: "Invalid merge strategy fails",
                description: "Unknown merge strategy must cause error",
                priority: Priority::Must,
                details: "only deep/shallow/replace allowed",
            },
            Requirement {
                id: "merge-010",
                name: "Merge preserves version",
                description: "Merged config keeps version 1.0",
                priority: Priority::Must,
                details: "version field maintained after merge",
            },
        ],
    );
    if let Some(first) = scenarios.first_mut() {
        first.spec_ref = Some("SPEC.md#deep-merge".to_string());
    }
    scenarios
}
