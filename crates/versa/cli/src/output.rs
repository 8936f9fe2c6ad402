//! Output formatting utilities

use colored::*;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use versa_conformance::ReportFormat;

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown document or table
    Markdown,
    /// Pretty-printed table format
    Table,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Markdown => Self::Markdown,
            ReportFormat::Json => Self::Json,
            ReportFormat::Yaml => Self::Yaml,
        }
    }
}

/// Render rows in the requested format.
pub fn render_rows<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        OutputFormat::Markdown => Table::new(rows).with(Style::markdown()).to_string(),
        OutputFormat::Json => serde_json::to_string_pretty(rows)?,
        OutputFormat::Yaml => serde_yaml::to_string(rows)?,
    })
}

/// Render a single value as JSON or YAML. Table formats fall back to JSON.
pub fn render_single<T: Serialize>(data: &T, format: OutputFormat) -> CliResult<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(data)?,
        OutputFormat::Json | OutputFormat::Table | OutputFormat::Markdown => {
            serde_json::to_string_pretty(data)?
        }
    })
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Tabled)]
    struct Row {
        id: &'static str,
        count: usize,
    }

    #[test]
    fn test_report_format_maps_to_output() {
        assert_eq!(OutputFormat::from(ReportFormat::Yaml), OutputFormat::Yaml);
        assert_eq!(OutputFormat::from(ReportFormat::Markdown), OutputFormat::Markdown);
    }

    #[test]
    fn test_render_rows_markdown() {
        let rows = [Row { id: "a", count: 1 }];
        let text = render_rows(&rows, OutputFormat::Markdown).unwrap();
        assert!(text.contains("| id"));
        assert!(text.contains("| a"));
    }

    #[test]
    fn test_render_rows_json() {
        let rows = [Row { id: "a", count: 1 }];
        let text = render_rows(&rows, OutputFormat::Json).unwrap();
        assert!(text.contains("\"count\": 1"));
    }
}
