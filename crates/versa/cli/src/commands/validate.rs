//! Validate command

use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use versa_schemas::{DocumentKind, DocumentValidator, VersaSchemas};

use crate::error::{CliError, CliResult};
use crate::output::{print_error, print_success, render_single, OutputFormat};
use crate::Verdict;

/// Arguments for `validate`
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document kind (context, profile, agent)
    pub kind: DocumentKind,

    /// Path to the JSON document
    pub file: PathBuf,

    /// Output format (table, json, yaml)
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs) -> CliResult<Verdict> {
    let contents = std::fs::read_to_string(&args.file)?;
    let document: serde_json::Value = serde_json::from_str(&contents).map_err(|e| {
        CliError::InvalidArgument(format!("{} is not valid JSON: {e}", args.file.display()))
    })?;

    let schemas = VersaSchemas::new()?;
    let report = schemas.validate(args.kind, &document);

    match args.format {
        OutputFormat::Json | OutputFormat::Yaml => {
            println!("{}", render_single(&report, args.format)?);
        }
        OutputFormat::Table | OutputFormat::Markdown => {
            if report.valid {
                print_success(&format!(
                    "{} is a valid VERSA {} document",
                    args.file.display(),
                    args.kind
                ));
            } else {
                print_error(&format!(
                    "{} is not a valid VERSA {} document",
                    args.file.display(),
                    args.kind
                ));
                for issue in &report.errors {
                    println!("  {} {}", "-".red(), issue.message);
                }
            }
        }
    }

    Ok(Verdict::from_bool(report.valid))
}
