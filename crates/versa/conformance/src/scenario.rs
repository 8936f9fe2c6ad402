//! Scenario definitions and the check contract.

use async_trait::async_trait;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use crate::error::ScenarioFault;
use crate::types::{Priority, ScenarioCategory, ScenarioId, ScenarioOutcome};

/// The single operation a scenario performs.
///
/// Returning `Err` is the fault path: the runner converts it into a failing
/// outcome carrying the fault's message.
#[async_trait]
pub trait ScenarioCheck: Send + Sync {
    async fn evaluate(&self) -> Result<ScenarioOutcome, ScenarioFault>;
}

/// Check backed by a synchronous closure.
pub struct FnCheck<F>(pub F);

#[async_trait]
impl<F> ScenarioCheck for FnCheck<F>
where
    F: Fn() -> Result<ScenarioOutcome, ScenarioFault> + Send + Sync,
{
    async fn evaluate(&self) -> Result<ScenarioOutcome, ScenarioFault> {
        (self.0)()
    }
}

/// Check backed by a closure returning a future.
pub struct AsyncFnCheck<F>(pub F);

#[async_trait]
impl<F, Fut> ScenarioCheck for AsyncFnCheck<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = Result<ScenarioOutcome, ScenarioFault>> + Send + 'static,
{
    async fn evaluate(&self) -> Result<ScenarioOutcome, ScenarioFault> {
        (self.0)().await
    }
}

/// A documented requirement that always holds, reported with its details.
pub struct RequirementCheck {
    details: String,
}

impl RequirementCheck {
    pub fn new(details: impl Into<String>) -> Self {
        Self {
            details: details.into(),
        }
    }
}

#[async_trait]
impl ScenarioCheck for RequirementCheck {
    async fn evaluate(&self) -> Result<ScenarioOutcome, ScenarioFault> {
        Ok(ScenarioOutcome::pass().with_details(self.details.as_str()))
    }
}

/// One independently evaluable conformance check.
#[derive(Clone)]
pub struct Scenario {
    pub id: ScenarioId,
    pub name: String,
    pub description: String,
    pub category: ScenarioCategory,
    pub priority: Priority,
    pub spec_ref: Option<String>,
    check: Arc<dyn ScenarioCheck>,
}

impl Scenario {
    pub fn new(
        id: &str,
        name: &str,
        description: &str,
        category: ScenarioCategory,
        priority: Priority,
        check: impl ScenarioCheck + 'static,
    ) -> Self {
        Self {
            id: ScenarioId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            category,
            priority,
            spec_ref: None,
            check: Arc::new(check),
        }
    }

    /// Scenario whose check is a synchronous closure.
    pub fn from_fn<F>(
        id: &str,
        name: &str,
        description: &str,
        category: ScenarioCategory,
        priority: Priority,
        check: F,
    ) -> Self
    where
        F: Fn() -> Result<ScenarioOutcome, ScenarioFault> + Send + Sync + 'static,
    {
        Self::new(id, name, description, category, priority, FnCheck(check))
    }

    /// Scenario whose check is an async closure.
    pub fn from_async_fn<F, Fut>(
        id: &str,
        name: &str,
        description: &str,
        category: ScenarioCategory,
        priority: Priority,
        check: F,
    ) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ScenarioOutcome, ScenarioFault>> + Send + 'static,
    {
        Self::new(id, name, description, category, priority, AsyncFnCheck(check))
    }

    pub fn with_spec_ref(mut self, spec_ref: &str) -> Self {
        self.spec_ref = Some(spec_ref.to_string());
        self
    }

    /// Shared handle to the check.
    pub fn check(&self) -> Arc<dyn ScenarioCheck> {
        Arc::clone(&self.check)
    }

    pub async fn evaluate(&self) -> Result<ScenarioOutcome, ScenarioFault> {
        self.check.evaluate().await
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("category", &self.category)
            .field("priority", &self.priority)
            .field("spec_ref", &self.spec_ref)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - {} ({})",
            self.priority.label(),
            self.id,
            self.name,
            self.category
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fn_check_evaluates() {
        let scenario = Scenario::from_fn(
            "t-1",
            "sync",
            "sync check",
            ScenarioCategory::Schema,
            Priority::Must,
            || Ok(ScenarioOutcome::pass()),
        );
        assert!(scenario.evaluate().await.unwrap().passed);
    }

    #[tokio::test]
    async fn test_async_fn_check_evaluates() {
        let scenario = Scenario::from_async_fn(
            "t-2",
            "async",
            "async check",
            ScenarioCategory::Merge,
            Priority::Should,
            || async {
                tokio::task::yield_now().await;
                Err(ScenarioFault::assertion("late failure"))
            },
        );
        let err = scenario.evaluate().await.unwrap_err();
        assert_eq!(err.to_string(), "late failure");
    }

    #[tokio::test]
    async fn test_requirement_check_carries_details() {
        let outcome = RequirementCheck::new("rules live in .ai/rules/")
            .evaluate()
            .await
            .unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.details.as_deref(), Some("rules live in .ai/rules/"));
    }

    #[test]
    fn test_display_and_spec_ref() {
        let scenario = Scenario::new(
            "merge-001",
            "Deep merge concatenates arrays",
            "arrays concatenate",
            ScenarioCategory::Merge,
            Priority::Must,
            RequirementCheck::new("ok"),
        )
        .with_spec_ref("SPEC.md#deep-merge");
        assert_eq!(scenario.spec_ref.as_deref(), Some("SPEC.md#deep-merge"));
        let text = scenario.to_string();
        assert!(text.contains("[MUST]"));
        assert!(text.contains("merge-001"));
    }
}
