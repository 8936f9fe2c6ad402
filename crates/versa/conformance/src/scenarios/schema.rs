//! Schema scenarios: documents run through the validator.

use serde_json::{json, Value};
use std::sync::Arc;
use versa_schemas::{DocumentKind, DocumentValidator, ValidationReport};

use crate::scenario::Scenario;
use crate::types::{Priority, ScenarioCategory, ScenarioOutcome};

type Validator = Arc<dyn DocumentValidator>;

fn schema_scenario<F>(
    validator: &Validator,
    id: &str,
    name: &str,
    description: &str,
    check: F,
) -> Scenario
where
    F: Fn(&dyn DocumentValidator) -> ScenarioOutcome + Send + Sync + 'static,
{
    let validator = Arc::clone(validator);
    Scenario::from_fn(
        id,
        name,
        description,
        ScenarioCategory::Schema,
        Priority::Must,
        move || Ok(check(validator.as_ref())),
    )
}

/// Pass when the document is accepted, reporting the first diagnostic otherwise.
fn accepts(report: ValidationReport) -> ScenarioOutcome {
    ScenarioOutcome::from_check(report.valid, report.first_message().map(str::to_string))
}

/// Pass when no expectation is violated; the first violation becomes the error.
fn expect_all(violations: &[(bool, &str)]) -> ScenarioOutcome {
    match violations.iter().find(|(violated, _)| *violated) {
        Some((_, message)) => ScenarioOutcome::fail(*message),
        None => ScenarioOutcome::pass(),
    }
}

fn context(v: &dyn DocumentValidator, document: Value) -> ValidationReport {
    v.validate(DocumentKind::Context, &document)
}

fn profile(v: &dyn DocumentValidator, document: Value) -> ValidationReport {
    v.validate(DocumentKind::Profile, &document)
}

pub fn schema_scenarios(validator: Validator) -> Vec<Scenario> {
    vec![
        schema_scenario(
            &validator,
            "schema-001",
            "Minimal context validates",
            "A context with only version field must validate",
            |v| accepts(context(v, json!({ "version": "1.0" }))),
        )
        .with_spec_ref("SPEC.md#context-json"),
        schema_scenario(
            &validator,
            "schema-002",
            "Context requires version",
            "Context without version field must fail validation",
            |v| {
                let missing = context(v, json!({}));
                expect_all(&[(missing.valid, "Should have failed validation")])
            },
        ),
        schema_scenario(
            &validator,
            "schema-003",
            "Version must be 1.0",
            "Only version \"1.0\" is valid for VERSA 1.0",
            |v| {
                let v10 = context(v, json!({ "version": "1.0" }));
                let v20 = context(v, json!({ "version": "2.0" }));
                expect_all(&[
                    (!v10.valid, "v1.0 should be valid"),
                    (v20.valid, "v2.0 should be invalid"),
                ])
            },
        ),
        schema_scenario(
            &validator,
            "schema-004",
            "Context accepts optional metadata",
            "Metadata object with name, description, tags is valid",
            |v| {
                accepts(context(
                    v,
                    json!({
                        "version": "1.0",
                        "metadata": {
                            "name": "Test Project",
                            "description": "A test",
                            "tags": ["typescript", "backend"]
                        }
                    }),
                ))
            },
        ),
        schema_scenario(
            &validator,
            "schema-005",
            "Rules array contains strings",
            "Rules field must be array of strings",
            |v| {
                let valid = context(
                    v,
                    json!({ "version": "1.0", "rules": ["rules/style.md", "rules/testing.md"] }),
                );
                let invalid = context(v, json!({ "version": "1.0", "rules": [123, true] }));
                expect_all(&[
                    (!valid.valid, "Valid rules failed"),
                    (invalid.valid, "Invalid rules passed"),
                ])
            },
        ),
        schema_scenario(
            &validator,
            "schema-006",
            "Settings temperature range",
            "Temperature must be between 0 and 2",
            |v| {
                let valid = context(v, json!({ "version": "1.0", "settings": { "temperature": 0.7 } }));
                let too_low =
                    context(v, json!({ "version": "1.0", "settings": { "temperature": -0.1 } }));
                let too_high =
                    context(v, json!({ "version": "1.0", "settings": { "temperature": 2.1 } }));
                expect_all(&[
                    (!valid.valid, "0.7 should be valid"),
                    (too_low.valid, "-0.1 should be invalid"),
                    (too_high.valid, "2.1 should be invalid"),
                ])
            },
        ),
        schema_scenario(
            &validator,
            "schema-007",
            "Profile requires merge strategy",
            "Profile must have merge field with deep/shallow/replace",
            |v| {
                let no_merge = profile(v, json!({ "version": "1.0" }));
                let with_merge = profile(v, json!({ "version": "1.0", "merge": "deep" }));
                expect_all(&[
                    (no_merge.valid, "Should require merge"),
                    (!with_merge.valid, "Valid merge failed"),
                ])
            },
        ),
        schema_scenario(
            &validator,
            "schema-008",
            "Profile merge strategy enum",
            "Merge must be one of deep, shallow, replace",
            |v| {
                let merge = |strategy: &str| {
                    profile(v, json!({ "version": "1.0", "merge": strategy })).valid
                };
                expect_all(&[
                    (!merge("deep"), "deep invalid"),
                    (!merge("shallow"), "shallow invalid"),
                    (!merge("replace"), "replace invalid"),
                    (merge("invalid"), "invalid passed"),
                ])
            },
        ),
        schema_scenario(
            &validator,
            "schema-009",
            "Agent optional fields",
            "Agent can have name, description, model, rules",
            |v| {
                accepts(v.validate(
                    DocumentKind::Agent,
                    &json!({
                        "version": "1.0",
                        "name": "Code Reviewer",
                        "description": "Reviews code",
                        "model": "claude-sonnet-4",
                        "temperature": 0.3,
                        "rules": ["rules/review.md"]
                    }),
                ))
            },
        ),
        schema_scenario(
            &validator,
            "schema-010",
            "Permissions structure",
            "Permissions can specify files, network, commands",
            |v| {
                accepts(context(
                    v,
                    json!({
                        "version": "1.0",
                        "permissions": {
                            "files": {
                                "read": ["src/**"],
                                "write": ["src/**"],
                                "deny": [".env*"]
                            },
                            "network": {
                                "allow": ["https://api.example.com"],
                                "deny": ["*"]
                            },
                            "commands": {
                                "allow": ["npm test"],
                                "deny": ["rm -rf"]
                            }
                        }
                    }),
                ))
            },
        ),
    ]
}
