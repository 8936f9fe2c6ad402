//! The VERSA 1.0 scenario registry.
//!
//! Seventy scenarios in seven sets of ten. The schema set exercises a
//! [`DocumentValidator`]; the other sets are static requirement checks that
//! document an obligation and always pass.

mod cli;
mod context;
mod merge;
mod permissions;
mod profile;
mod rules;
mod schema;

use std::sync::Arc;
use versa_schemas::DocumentValidator;

use crate::scenario::{RequirementCheck, Scenario};
use crate::types::{Priority, ScenarioCategory};

pub use cli::cli_scenarios;
pub use context::context_scenarios;
pub use merge::merge_scenarios;
pub use permissions::permissions_scenarios;
pub use profile::profile_scenarios;
pub use rules::rules_scenarios;
pub use schema::schema_scenarios;

/// Every registered scenario: schema, merge, context, profile, rules, cli,
/// permissions.
pub fn all_scenarios(validator: Arc<dyn DocumentValidator>) -> Vec<Scenario> {
    let mut scenarios = schema_scenarios(validator);
    scenarios.extend(merge_scenarios());
    scenarios.extend(context_scenarios());
    scenarios.extend(profile_scenarios());
    scenarios.extend(rules_scenarios());
    scenarios.extend(cli_scenarios());
    scenarios.extend(permissions_scenarios());
    scenarios
}

/// Look up a scenario by id.
pub fn find<'a>(registry: &'a [Scenario], id: &str) -> Option<&'a Scenario> {
    registry.iter().find(|s| s.id.as_str() == id)
}

/// Static description of a requirement-style scenario.
pub(crate) struct Requirement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub priority: Priority,
    pub details: &'static str,
}

impl Requirement {
    fn into_scenario(self, category: ScenarioCategory) -> Scenario {
        let verb = match self.priority {
            Priority::Must => "requires",
            Priority::Should => "recommends",
            Priority::May => "allows",
        };
        Scenario::new(
            self.id,
            self.name,
            self.description,
            category,
            self.priority,
            RequirementCheck::new(format!("VERSA 1.0 {verb}: {}", self.details)),
        )
    }
}

pub(crate) fn requirements(
    category: ScenarioCategory,
    table: impl IntoIterator<Item = Requirement>,
) -> Vec<Scenario> {
    table
        .into_iter()
        .map(|requirement| requirement.into_scenario(category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use versa_schemas::VersaSchemas;

    fn registry() -> Vec<Scenario> {
        all_scenarios(Arc::new(VersaSchemas::new().unwrap()))
    }

    #[test]
    fn test_registry_size_and_unique_ids() {
        let registry = registry();
        assert_eq!(registry.len(), 70);
        let ids: HashSet<_> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), 70);
    }

    #[test]
    fn test_registry_order() {
        let registry = registry();
        let prefixes: Vec<_> = registry
            .chunks(10)
            .map(|chunk| chunk[0].id.as_str().split('-').next().unwrap_or_default())
            .collect();
        assert_eq!(prefixes, ["schema", "merge", "context", "profile", "rules", "cli", "perm"]);
    }

    #[test]
    fn test_sets_share_a_category() {
        for chunk in registry().chunks(10) {
            assert!(chunk.iter().all(|s| s.category == chunk[0].category));
        }
    }

    #[test]
    fn test_find() {
        let registry = registry();
        let scenario = find(&registry, "perm-007").unwrap();
        assert_eq!(scenario.priority, Priority::Must);
        assert_eq!(scenario.category, ScenarioCategory::Permissions);
        assert!(find(&registry, "perm-011").is_none());
    }

    #[test]
    fn test_spec_refs() {
        let registry = registry();
        assert_eq!(
            find(&registry, "schema-001").unwrap().spec_ref.as_deref(),
            Some("SPEC.md#context-json")
        );
        assert_eq!(
            find(&registry, "merge-001").unwrap().spec_ref.as_deref(),
            Some("SPEC.md#deep-merge")
        );
    }

    #[tokio::test]
    async fn test_requirement_details_follow_priority() {
        let registry = registry();
        let details = |id: &str| {
            let scenario = find(&registry, id).unwrap().clone();
            async move { scenario.evaluate().await.unwrap().details.unwrap_or_default() }
        };
        assert!(details("rules-001").await.starts_with("VERSA 1.0 requires:"));
        assert!(details("rules-004").await.starts_with("VERSA 1.0 recommends:"));
        assert!(details("perm-006").await.starts_with("VERSA 1.0 allows:"));
    }
}
