//! Behavior expected from a VERSA command-line tool.

use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn cli_scenarios() -> Vec<Scenario> {
    requirements(
        ScenarioCategory::Cli,
        [
            Requirement {
                id: "cli-001",
                name: "Init command exists",
                description: "CLI must provide init command",
                priority: Priority::Must,
                details: "init command",
            },
            Requirement {
                id: "cli-002",
                name: "Init creates .ai folder",
                description: "Init must create .ai/ directory",
                priority: Priority::Must,
                details: "scaffold .ai/",
            },
            Requirement {
                id: "cli-003",
                name: "Init creates context.json",
                description: "Init must create valid context.json",
                priority: Priority::Must,
                details: "create context.json",
            },
            Requirement {
                id: "cli-004",
                name: "Lint command exists",
                description: "CLI should provide lint/validate command",
                priority: Priority::Should,
                details: "lint command",
            },
            Requirement {
                id: "cli-005",
                name: "Lint validates schema",
                description: "Lint must validate against JSON schemas",
                priority: Priority::Must,
                details: "schema validation",
            },
            Requirement {
                id: "cli-006",
                name: "Lint checks file references",
                description: "Lint should verify referenced files exist",
                priority: Priority::Should,
                details: "file reference checks",
            },
            Requirement {
                id: "cli-007",
                name: "Print/export command",
                description: "CLI should provide print/export command",
                priority: Priority::Should,
                details: "print command",
            },
            Requirement {
                id: "cli-008",
                name: "Profile selection",
                description: "CLI should support --profile option",
                priority: Priority::Should,
                details: "--profile flag",
            },
            Requirement {
                id: "cli-009",
                name: "Exit codes",
                description: "CLI must use proper exit codes (0 success, 1 error)",
                priority: Priority::Must,
                details: "standard exit codes",
            },
            Requirement {
                id: "cli-010",
                name: "Help text",
                description: "CLI should provide --help for all commands",
                priority: Priority::Should,
                details: "help documentation",
            },
        ],
    )
}
