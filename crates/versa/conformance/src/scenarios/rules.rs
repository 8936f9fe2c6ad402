use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn rules_scenarios() -> Vec<Scenario> {
    requirements(
        ScenarioCategory::Rules,
        [
            Requirement {
                id: "rules-001",
                name: "Rules are markdown",
                description: "Rule files must be markdown (.md) format",
                priority: Priority::Must,
                details: ".md extension",
            },
            Requirement {
                id: "rules-002",
                name: "Rules in rules folder",
                description: "Rules must be in .ai/rules/ folder",
                priority: Priority::Must,
                details: ".ai/rules/ location",
            },
            Requirement {
                id: "rules-003",
                name: "Rule front matter optional",
                description: "YAML front matter is optional",
                priority: Priority::Must,
                details: "front matter optional",
            },
            Requirement {
                id: "rules-004",
                name: "Front matter structure",
                description: "Front matter must use ai:meta format",
                priority: Priority::Should,
                details: "ai:meta YAML block",
            },
            Requirement {
                id: "rules-005",
                name: "Priority levels",
                description: "Priority can be critical, high, medium, low",
                priority: Priority::Should,
                details: "4 priority levels",
            },
            Requirement {
                id: "rules-006",
                name: "Attach modes",
                description: "Attach can be always, on-demand, never",
                priority: Priority::Should,
                details: "3 attach modes",
            },
            Requirement {
                id: "rules-007",
                name: "Scope options",
                description: "Scope can be global, file, function",
                priority: Priority::Should,
                details: "3 scope levels",
            },
            Requirement {
                id: "rules-008",
                name: "Applies_to array",
                description: "applies_to can filter by language/framework",
                priority: Priority::Should,
                details: "language filters",
            },
            Requirement {
                id: "rules-009",
                name: "Rule content",
                description: "Rule body is plain markdown",
                priority: Priority::Must,
                details: "markdown content",
            },
            Requirement {
                id: "rules-010",
                name: "Rule UTF-8",
                description: "Rule files must be UTF-8 encoded",
                priority: Priority::Must,
                details: "UTF-8 encoding",
            },
        ],
    )
}
