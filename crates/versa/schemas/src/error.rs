//! Schema error types

use thiserror::Error;

/// Errors raised while loading or compiling the embedded schemas.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema for {kind} is not valid JSON: {source}")]
    Parse {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema for {kind} failed to compile: {reason}")]
    Compile { kind: &'static str, reason: String },

    #[error("Unknown document kind: {0}")]
    UnknownKind(String),
}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
