//! Document validation against the embedded VERSA schemas

use crate::error::{SchemaError, SchemaResult};
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The only document version accepted by VERSA 1.0.
pub const VERSA_VERSION: &str = "1.0";

const CONTEXT_SCHEMA: &str = include_str!("../schemas/context.schema.json");
const PROFILE_SCHEMA: &str = include_str!("../schemas/profile.schema.json");
const AGENT_SCHEMA: &str = include_str!("../schemas/agent.schema.json");

/// The three VERSA document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Context,
    Profile,
    Agent,
}

impl DocumentKind {
    /// All kinds in canonical order.
    pub fn all() -> &'static [DocumentKind] {
        &[Self::Context, Self::Profile, Self::Agent]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Context => "context",
            Self::Profile => "profile",
            Self::Agent => "agent",
        }
    }

    fn schema_source(&self) -> &'static str {
        match self {
            Self::Context => CONTEXT_SCHEMA,
            Self::Profile => PROFILE_SCHEMA,
            Self::Agent => AGENT_SCHEMA,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "context" => Ok(Self::Context),
            "profile" => Ok(Self::Profile),
            "agent" => Ok(Self::Agent),
            other => Err(SchemaError::UnknownKind(other.to_string())),
        }
    }
}

/// A single validation diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub message: String,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// A report with no diagnostics.
    pub fn ok() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing report carrying the given messages.
    pub fn invalid<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            valid: false,
            errors: messages
                .into_iter()
                .map(|message| ValidationIssue {
                    message: message.into(),
                })
                .collect(),
        }
    }

    /// Message of the first diagnostic, if any.
    pub fn first_message(&self) -> Option<&str> {
        self.errors.first().map(|issue| issue.message.as_str())
    }
}

/// Boolean-plus-diagnostics validation contract.
pub trait DocumentValidator: Send + Sync {
    fn validate(&self, kind: DocumentKind, document: &Value) -> ValidationReport;
}

/// Validator backed by the embedded draft-07 schemas.
pub struct VersaSchemas {
    context: Validator,
    profile: Validator,
    agent: Validator,
}

impl VersaSchemas {
    /// Compile all three schemas.
    pub fn new() -> SchemaResult<Self> {
        Ok(Self {
            context: compile(DocumentKind::Context)?,
            profile: compile(DocumentKind::Profile)?,
            agent: compile(DocumentKind::Agent)?,
        })
    }

    /// Raw schema document for a kind.
    pub fn schema(kind: DocumentKind) -> SchemaResult<Value> {
        serde_json::from_str(kind.schema_source()).map_err(|source| SchemaError::Parse {
            kind: kind.as_str(),
            source,
        })
    }

    fn validator(&self, kind: DocumentKind) -> &Validator {
        match kind {
            DocumentKind::Context => &self.context,
            DocumentKind::Profile => &self.profile,
            DocumentKind::Agent => &self.agent,
        }
    }
}

impl DocumentValidator for VersaSchemas {
    fn validate(&self, kind: DocumentKind, document: &Value) -> ValidationReport {
        let messages: Vec<String> = self
            .validator(kind)
            .iter_errors(document)
            .map(|err| err.to_string())
            .collect();

        if messages.is_empty() {
            ValidationReport::ok()
        } else {
            tracing::debug!(%kind, errors = messages.len(), "document rejected");
            ValidationReport::invalid(messages)
        }
    }
}

impl fmt::Debug for VersaSchemas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersaSchemas")
            .field("kinds", &DocumentKind::all())
            .finish()
    }
}

fn compile(kind: DocumentKind) -> SchemaResult<Validator> {
    let schema = VersaSchemas::schema(kind)?;
    jsonschema::draft7::options()
        .build(&schema)
        .map_err(|err| SchemaError::Compile {
            kind: kind.as_str(),
            reason: err.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schemas() -> VersaSchemas {
        VersaSchemas::new().expect("embedded schemas compile")
    }

    #[test]
    fn test_kind_round_trip_from_str() {
        for kind in DocumentKind::all() {
            assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), *kind);
        }
        assert!("workspace".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_minimal_context_is_valid() {
        let report = schemas().validate(DocumentKind::Context, &json!({ "version": "1.0" }));
        assert!(report.valid);
        assert!(report.first_message().is_none());
    }

    #[test]
    fn test_context_requires_version() {
        let report = schemas().validate(DocumentKind::Context, &json!({}));
        assert!(!report.valid);
        assert!(report.first_message().is_some());
    }

    #[test]
    fn test_only_version_one_accepted() {
        let s = schemas();
        assert!(!s.validate(DocumentKind::Context, &json!({ "version": "2.0" })).valid);
        assert!(!s.validate(DocumentKind::Agent, &json!({ "version": 1.0 })).valid);
    }

    #[test]
    fn test_temperature_bounds() {
        let s = schemas();
        let doc = |t: f64| json!({ "version": "1.0", "settings": { "temperature": t } });
        assert!(s.validate(DocumentKind::Context, &doc(0.0)).valid);
        assert!(s.validate(DocumentKind::Context, &doc(2.0)).valid);
        assert!(!s.validate(DocumentKind::Context, &doc(-0.1)).valid);
        assert!(!s.validate(DocumentKind::Context, &doc(2.1)).valid);
    }

    #[test]
    fn test_profile_merge_strategy() {
        let s = schemas();
        assert!(!s.validate(DocumentKind::Profile, &json!({ "version": "1.0" })).valid);
        for merge in ["deep", "shallow", "replace"] {
            let report = s.validate(DocumentKind::Profile, &json!({ "version": "1.0", "merge": merge }));
            assert!(report.valid, "{merge} should be accepted");
        }
        assert!(
            !s.validate(DocumentKind::Profile, &json!({ "version": "1.0", "merge": "union" }))
                .valid
        );
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let report = schemas().validate(
            DocumentKind::Context,
            &json!({ "version": "1.0", "x-vendor": { "enabled": true } }),
        );
        assert!(report.valid);
    }

    #[test]
    fn test_report_constructors() {
        let report = ValidationReport::invalid(["first", "second"]);
        assert!(!report.valid);
        assert_eq!(report.first_message(), Some("first"));
        assert_eq!(report.errors.len(), 2);
        assert!(ValidationReport::ok().valid);
    }
}
