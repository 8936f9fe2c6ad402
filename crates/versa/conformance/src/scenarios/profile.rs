//! Profile file requirements.

use super::{requirements, Requirement};
use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory};

pub fn profile_scenarios() -> Vec<Scenario> {
    requirements(
        ScenarioCategory::Profile,
        [
            Requirement {
                id: "profile-001",
                name: "Profile location",
                description: "Profiles must be in .ai/profiles/ folder",
                priority: Priority::Must,
                details: ".ai/profiles/*.json",
            },
            Requirement {
                id: "profile-002",
                name: "Profile naming",
                description: "Profile filename determines profile name",
                priority: Priority::Must,
                details: "cursor.json → cursor profile",
            },
            Requirement {
                id: "profile-003",
                name: "Profile has version",
                description: "Profile must have version field",
                priority: Priority::Must,
                details: "version: \"1.0\"",
            },
            Requirement {
                id: "profile-004",
                name: "Profile has merge",
                description: "Profile must have merge strategy",
                priority: Priority::Must,
                details: "merge: deep|shallow|replace",
            },
            Requirement {
                id: "profile-005",
                name: "Profile can override any field",
                description: "Profile can override any context field",
                priority: Priority::Must,
                details: "full override capability",
            },
            Requirement {
                id: "profile-006",
                name: "Profile metadata optional",
                description: "Profile metadata is optional",
                priority: Priority::Must,
                details: "metadata not required",
            },
            Requirement {
                id: "profile-007",
                name: "Multiple profiles allowed",
                description: "Project can have multiple profiles",
                priority: Priority::Must,
                details: "unlimited profiles",
            },
            Requirement {
                id: "profile-008",
                name: "Profile defaults",
                description: "Implementation can set default merge strategy",
                priority: Priority::May,
                details: "default merge strategy",
            },
            Requirement {
                id: "profile-009",
                name: "Profile validation",
                description: "Invalid profile must cause error",
                priority: Priority::Must,
                details: "validate profiles",
            },
            Requirement {
                id: "profile-010",
                name: "Profile UTF-8",
                description: "Profile files must be UTF-8 encoded",
                priority: Priority::Must,
                details: "UTF-8 encoding",
            },
        ],
    )
}
