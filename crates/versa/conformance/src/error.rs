//! Error types for the conformance suite.

use thiserror::Error;
use versa_schemas::SchemaError;

/// A fault raised by a scenario check instead of returning an outcome.
///
/// The runner records the fault's message as the scenario's error and counts
/// the scenario as failed.
#[derive(Debug, Error)]
pub enum ScenarioFault {
    #[error("{0}")]
    Assertion(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("{0}")]
    Other(String),
}

impl ScenarioFault {
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::Assertion(message.into())
    }
}

impl From<String> for ScenarioFault {
    fn from(message: String) -> Self {
        Self::Other(message)
    }
}

impl From<&str> for ScenarioFault {
    fn from(message: &str) -> Self {
        Self::Other(message.to_string())
    }
}

/// Errors raised while configuring or reporting a conformance run.
#[derive(Debug, Error)]
pub enum ConformanceError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience result type for conformance operations.
pub type ConformanceResult<T> = Result<T, ConformanceError>;
