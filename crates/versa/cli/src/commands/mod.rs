//! Subcommand implementations

pub mod list;
pub mod run;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use versa_conformance::{all_scenarios, ConformanceConfig, Scenario};
use versa_schemas::VersaSchemas;

use crate::error::CliResult;

/// The full scenario registry backed by the embedded schemas.
fn registry() -> CliResult<Vec<Scenario>> {
    Ok(all_scenarios(Arc::new(VersaSchemas::new()?)))
}

/// Load the run configuration from `path`, or from the user config directory.
fn load_config(path: Option<&Path>) -> CliResult<ConformanceConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => return Ok(ConformanceConfig::default()),
        },
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    Ok(ConformanceConfig::load(&path)?)
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("versa").join("conformance.toml"))
}
