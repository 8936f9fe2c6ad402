//! Run configuration and scenario selection.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ConformanceError, ConformanceResult};
use crate::level::ConformanceLevel;
use crate::report::ConformanceReport;
use crate::scenario::Scenario;
use crate::types::ScenarioCategory;

/// Serialization of a finished report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Yaml,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportFormat {
    type Err = ConformanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(ConformanceError::InvalidConfiguration(format!(
                "unknown report format: {other}"
            ))),
        }
    }
}

impl ConformanceReport {
    pub fn render_as(&self, format: ReportFormat) -> ConformanceResult<String> {
        match format {
            ReportFormat::Markdown => Ok(self.to_markdown()),
            ReportFormat::Json => self.to_json(),
            ReportFormat::Yaml => self.to_yaml(),
        }
    }
}

/// Settings for one conformance run.
///
/// ```toml
/// categories = ["schema", "merge"]
/// min_level = "high"
/// format = "json"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConformanceConfig {
    /// Restrict the run to these categories. Empty means all.
    pub categories: Vec<ScenarioCategory>,

    /// Run exactly these scenarios. Takes precedence over `categories`.
    pub scenario_ids: Vec<String>,

    /// Lowest level that counts as a passing run.
    pub min_level: ConformanceLevel,

    pub format: ReportFormat,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            scenario_ids: Vec::new(),
            min_level: ConformanceLevel::Basic,
            format: ReportFormat::default(),
        }
    }
}

impl ConformanceConfig {
    pub fn from_toml(contents: &str) -> ConformanceResult<Self> {
        toml::from_str(contents).map_err(|e| ConformanceError::ConfigParse(e.to_string()))
    }

    /// Load from a TOML file, falling back to defaults when it does not exist.
    pub fn load(path: impl AsRef<Path>) -> ConformanceResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn to_toml(&self) -> ConformanceResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConformanceError::ConfigParse(e.to_string()))
    }
}

/// Pick the scenarios a config asks for, preserving registry order.
pub fn select(registry: &[Scenario], config: &ConformanceConfig) -> ConformanceResult<Vec<Scenario>> {
    if !config.scenario_ids.is_empty() {
        let wanted: HashSet<&str> = config.scenario_ids.iter().map(String::as_str).collect();

        if let Some(unknown) = config
            .scenario_ids
            .iter()
            .find(|id| !registry.iter().any(|s| s.id.as_str() == id.as_str()))
        {
            return Err(ConformanceError::UnknownScenario(unknown.clone()));
        }

        return Ok(registry
            .iter()
            .filter(|s| wanted.contains(s.id.as_str()))
            .cloned()
            .collect());
    }

    if config.categories.is_empty() {
        return Ok(registry.to_vec());
    }

    Ok(registry
        .iter()
        .filter(|s| config.categories.contains(&s.category))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::RequirementCheck;
    use crate::types::Priority;

    fn registry() -> Vec<Scenario> {
        [
            ("schema-001", ScenarioCategory::Schema),
            ("merge-001", ScenarioCategory::Merge),
            ("schema-002", ScenarioCategory::Schema),
            ("cli-001", ScenarioCategory::Cli),
        ]
        .into_iter()
        .map(|(id, category)| {
            Scenario::new(id, id, "", category, Priority::Must, RequirementCheck::new("ok"))
        })
        .collect()
    }

    fn ids(scenarios: &[Scenario]) -> Vec<&str> {
        scenarios.iter().map(|s| s.id.as_str()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = ConformanceConfig::default();
        assert!(config.categories.is_empty());
        assert_eq!(config.min_level, ConformanceLevel::Basic);
        assert_eq!(config.format, ReportFormat::Markdown);
    }

    #[test]
    fn test_parse_toml() {
        let config = ConformanceConfig::from_toml(
            r#"
            categories = ["schema", "cli"]
            min_level = "high"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.categories, vec![ScenarioCategory::Schema, ScenarioCategory::Cli]);
        assert_eq!(config.min_level, ConformanceLevel::High);
        assert_eq!(config.format, ReportFormat::Json);
        assert!(config.scenario_ids.is_empty());
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let err = ConformanceConfig::from_toml(r#"categories = ["network"]"#).unwrap_err();
        assert!(matches!(err, ConformanceError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_config() {
        let config = ConformanceConfig::load("/nonexistent/path/versa.toml").unwrap();
        assert_eq!(config, ConformanceConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versa.toml");
        std::fs::write(&path, "scenario_ids = [\"cli-001\"]\n").unwrap();
        let config = ConformanceConfig::load(&path).unwrap();
        assert_eq!(config.scenario_ids, vec!["cli-001".to_string()]);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ConformanceConfig {
            categories: vec![ScenarioCategory::Merge],
            min_level: ConformanceLevel::Full,
            ..ConformanceConfig::default()
        };
        let back = ConformanceConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_select_all_by_default() {
        let selected = select(&registry(), &ConformanceConfig::default()).unwrap();
        assert_eq!(selected.len(), 4);
    }

    #[test]
    fn test_select_by_category_keeps_order() {
        let config = ConformanceConfig {
            categories: vec![ScenarioCategory::Schema],
            ..ConformanceConfig::default()
        };
        let registry = registry();
        let selected = select(&registry, &config).unwrap();
        assert_eq!(ids(&selected), ["schema-001", "schema-002"]);
    }

    #[test]
    fn test_ids_take_precedence() {
        let config = ConformanceConfig {
            categories: vec![ScenarioCategory::Schema],
            scenario_ids: vec!["cli-001".into(), "merge-001".into()],
            ..ConformanceConfig::default()
        };
        let registry = registry();
        let selected = select(&registry, &config).unwrap();
        assert_eq!(ids(&selected), ["merge-001", "cli-001"]);
    }

    #[test]
    fn test_unknown_id_is_error() {
        let config = ConformanceConfig {
            scenario_ids: vec!["schema-999".into()],
            ..ConformanceConfig::default()
        };
        let err = select(&registry(), &config).unwrap_err();
        assert!(matches!(err, ConformanceError::UnknownScenario(id) if id == "schema-999"));
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("YML".parse::<ReportFormat>().unwrap(), ReportFormat::Yaml);
        assert!("html".parse::<ReportFormat>().is_err());
    }
}
