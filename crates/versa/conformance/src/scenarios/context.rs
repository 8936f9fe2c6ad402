//! Structure and content requirements for `.ai/context.json`.

use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn context_scenarios() -> Vec<Scenario> {
    requirements(
        ScenarioCategory::Context,
        [
            Requirement {
                id: "context-001",
                name: "Context file location",
                description: ".ai/context.json must be in .ai folder at project root",
                priority: Priority::Must,
                details: ".ai/context.json path",
            },
            Requirement {
                id: "context-002",
                name: "Context is JSON",
                description: "context.json must be valid JSON",
                priority: Priority::Must,
                details: "valid JSON format",
            },
            Requirement {
                id: "context-003",
                name: "Rules are file paths",
                description: "Rules array contains relative paths to markdown files",
                priority: Priority::Must,
                details: "rules/filename.md paths",
            },
            Requirement {
                id: "context-004",
                name: "Context patterns",
                description: "Context array contains glob patterns",
                priority: Priority::Should,
                details: "glob patterns like src/**/*.ts",
            },
            Requirement {
                id: "context-005",
                name: "Agents are file paths",
                description: "Agents array contains paths to agent JSON files",
                priority: Priority::Should,
                details: "agents/name.json paths",
            },
            Requirement {
                id: "context-006",
                name: "Settings are optional",
                description: "Settings object is optional in context",
                priority: Priority::Must,
                details: "settings not required",
            },
            Requirement {
                id: "context-007",
                name: "Metadata is optional",
                description: "Metadata object is optional",
                priority: Priority::Must,
                details: "metadata not required",
            },
            Requirement {
                id: "context-008",
                name: "Permissions are optional",
                description: "Permissions object is optional",
                priority: Priority::Must,
                details: "permissions not required",
            },
            Requirement {
                id: "context-009",
                name: "Unknown fields ignored",
                description: "Additional properties should be ignored gracefully",
                priority: Priority::Should,
                details: "forward compatibility",
            },
            Requirement {
                id: "context-010",
                name: "UTF-8 encoding",
                description: "context.json must be UTF-8 encoded",
                priority: Priority::Must,
                details: "UTF-8 encoding",
            },
        ],
    )
}
