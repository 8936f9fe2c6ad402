//! Access-control requirements. Mostly advisory.

use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn permissions_scenarios() -> Vec<Scenario> {
    requirements(
        ScenarioCategory::Permissions,
        [
            Requirement {
                id: "perm-001",
                name: "File permissions",
                description: "Permissions can specify file read/write/deny",
                priority: Priority::Should,
                details: "file access control",
            },
            Requirement {
                id: "perm-002",
                name: "Network permissions",
                description: "Permissions can specify network allow/deny",
                priority: Priority::Should,
                details: "network access control",
            },
            Requirement {
                id: "perm-003",
                name: "Command permissions",
                description: "Permissions can specify command allow/deny",
                priority: Priority::Should,
                details: "command restrictions",
            },
            Requirement {
                id: "perm-004",
                name: "Deny takes precedence",
                description: "Deny rules should override allow rules",
                priority: Priority::Should,
                details: "deny wins conflicts",
            },
            Requirement {
                id: "perm-005",
                name: "Glob patterns in permissions",
                description: "Permissions can use glob patterns",
                priority: Priority::Should,
                details: "glob support",
            },
            Requirement {
                id: "perm-006",
                name: "Default deny",
                description: "Implementations may default to deny-all",
                priority: Priority::May,
                details: "default deny policy",
            },
            Requirement {
                id: "perm-007",
                name: "Permissions optional",
                description: "Permissions object is optional",
                priority: Priority::Must,
                details: "permissions not required",
            },
            Requirement {
                id: "perm-008",
                name: "Tool interpretation",
                description: "Tools may interpret permissions differently",
                priority: Priority::May,
                details: "tool-specific interpretation",
            },
            Requirement {
                id: "perm-009",
                name: "Permissions merge",
                description: "Profile permissions merge with base",
                priority: Priority::Should,
                details: "merge permissions",
            },
            Requirement {
                id: "perm-010",
                name: "Permissions validation",
                description: "Invalid permission syntax should error",
                priority: Priority::Should,
                details: "validate permissions",
            },
        ],
    )
}
