//! VERSA 1.0 Conformance Suite
//!
//! Runs a registry of conformance scenarios against a VERSA implementation,
//! aggregates the outcomes, derives a conformance level, and renders a
//! Markdown report.
//!
//! # Scenario Sets
//!
//! | Set | Category | IDs | Check |
//! |-----|----------|-----|-------|
//! | Schema | schema | schema-001 … schema-010 | validator |
//! | Merge | merge | merge-001 … merge-010 | requirement |
//! | Context | context | context-001 … context-010 | requirement |
//! | Profile | profile | profile-001 … profile-010 | requirement |
//! | Rules | rules | rules-001 … rules-010 | requirement |
//! | CLI | cli | cli-001 … cli-010 | requirement |
//! | Permissions | permissions | perm-001 … perm-010 | requirement |
//!
//! # Conformance Levels
//!
//! | Level | Meaning |
//! |-------|---------|
//! | full | All MUST pass, SHOULD ≥ 90% |
//! | high | All MUST pass, SHOULD ≥ 70% |
//! | basic | All MUST pass |
//! | partial | MUST ≥ 80% |
//! | none | MUST < 80% |
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use versa_conformance::{all_scenarios, classify, ConformanceLevel, SuiteRunner};
//! use versa_schemas::VersaSchemas;
//!
//! # tokio_test_block(async {
//! let registry = all_scenarios(Arc::new(VersaSchemas::new().unwrap()));
//! let result = SuiteRunner::new().run(&registry).await;
//! assert_eq!(result.total, 70);
//! assert_eq!(classify(&result), ConformanceLevel::Full);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod level;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod scenarios;
pub mod types;

// Re-export key types at crate root.
pub use config::{select, ConformanceConfig, ReportFormat};
pub use error::{ConformanceError, ConformanceResult, ScenarioFault};
pub use level::{classify, ConformanceLevel, PassRates};
pub use report::{priority_stats, render, ConformanceReport, PriorityStats};
pub use runner::SuiteRunner;
pub use scenario::{AsyncFnCheck, FnCheck, RequirementCheck, Scenario, ScenarioCheck};
pub use scenarios::{
    all_scenarios, cli_scenarios, context_scenarios, find, merge_scenarios,
    permissions_scenarios, profile_scenarios, rules_scenarios, schema_scenarios,
};
pub use types::{
    CategoryTally, Priority, ScenarioCategory, ScenarioId, ScenarioOutcome, ScenarioRecord,
    SuiteResult,
};
