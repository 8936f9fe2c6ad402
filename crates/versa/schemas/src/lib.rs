//! VERSA 1.0 document schemas
//!
//! Embeds the JSON Schemas for the three VERSA document kinds and exposes
//! them behind a small validation contract:
//!
//! | Kind | File | Required fields |
//! |------|------|-----------------|
//! | Context | `.ai/context.json` | `version` |
//! | Profile | `.ai/profiles/*.json` | `version`, `merge` |
//! | Agent | `.ai/agents/*.json` | `version` |
//!
//! Consumers depend on [`DocumentValidator`] rather than on the schemas
//! directly, so conformance checks can run against any validator that honors
//! the boolean-plus-diagnostics contract.
//!
//! # Example
//!
//! ```rust
//! use versa_schemas::{DocumentKind, DocumentValidator, VersaSchemas};
//!
//! let schemas = VersaSchemas::new().unwrap();
//! let report = schemas.validate(DocumentKind::Context, &serde_json::json!({ "version": "1.0" }));
//! assert!(report.valid);
//! ```

#![deny(unsafe_code)]

pub mod error;
pub mod validator;

pub use error::{SchemaError, SchemaResult};
pub use validator::{
    DocumentKind, DocumentValidator, ValidationIssue, ValidationReport, VersaSchemas,
    VERSA_VERSION,
};
