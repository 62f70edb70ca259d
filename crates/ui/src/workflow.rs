//! Multi-step mutation workflows
//!
//! Some screens chain dependent mutations: creating a user, then
//! attaching the chosen membership plan, then optionally sending the
//! welcome message. A [`Workflow`] runs its steps in order, feeding each
//! step the previous step's response. The first failure stops the chain;
//! the outcome reports which steps completed so the toast can say exactly
//! how far the flow got. There is no rollback of completed steps.

use std::future::Future;
use std::pin::Pin;

use esp_core::{AppError, AppResult};
use serde_json::Value;

type StepFuture = Pin<Box<dyn Future<Output = AppResult<Value>>>>;
type StepFn = Box<dyn FnOnce(Value) -> StepFuture>;

pub struct WorkflowStep {
    name: &'static str,
    run: StepFn,
}

#[derive(Default)]
pub struct Workflow {
    steps: Vec<WorkflowStep>,
}

/// Where a workflow stopped and why.
#[derive(Debug)]
pub struct WorkflowFailure {
    pub step: &'static str,
    pub error: AppError,
}

/// Result of running a workflow to completion or first failure.
#[derive(Debug, Default)]
pub struct WorkflowOutcome {
    /// Steps that finished, in order
    pub completed: Vec<&'static str>,
    pub failure: Option<WorkflowFailure>,
    /// Response of the last completed step
    pub last_response: Value,
}

impl WorkflowOutcome {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    /// One-line progress summary for toasts and logs.
    pub fn summary(&self) -> String {
        match &self.failure {
            None => "All steps completed".to_string(),
            Some(failure) if self.completed.is_empty() => {
                format!("{} failed", failure.step)
            }
            Some(failure) => format!(
                "{} failed (completed: {})",
                failure.step,
                self.completed.join(", ")
            ),
        }
    }
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a named step. The closure receives the previous step's
    /// response (`Value::Null` for the first step).
    pub fn step<F, Fut>(mut self, name: &'static str, run: F) -> Self
    where
        F: FnOnce(Value) -> Fut + 'static,
        Fut: Future<Output = AppResult<Value>> + 'static,
    {
        self.steps.push(WorkflowStep {
            name,
            run: Box::new(move |input| Box::pin(run(input))),
        });
        self
    }

    /// Run the steps in order, stopping at the first failure.
    pub async fn run(self) -> WorkflowOutcome {
        let mut outcome = WorkflowOutcome::default();
        let mut carry = Value::Null;
        for step in self.steps {
            tracing::debug!(step = step.name, "workflow step");
            match (step.run)(carry).await {
                Ok(response) => {
                    outcome.completed.push(step.name);
                    carry = response.clone();
                    outcome.last_response = response;
                }
                Err(error) => {
                    tracing::warn!(step = step.name, %error, "workflow stopped");
                    outcome.failure = Some(WorkflowFailure {
                        step: step.name,
                        error,
                    });
                    return outcome;
                }
            }
        }
        outcome
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_steps_run_in_order_and_carry_responses() {
        let outcome = block_on(
            Workflow::new()
                .step("create user", |_| async {
                    Ok(json!({ "userId": 11 }))
                })
                .step("attach plan", |previous| async move {
                    let user_id = previous["userId"].as_i64().unwrap_or_default();
                    Ok(json!({ "userId": user_id, "planId": 3 }))
                })
                .run(),
        );

        assert!(outcome.is_success());
        assert_eq!(outcome.completed, vec!["create user", "attach plan"]);
        assert_eq!(outcome.last_response["planId"], 3);
    }

    #[test]
    fn test_first_failure_stops_the_chain() {
        let outcome = block_on(
            Workflow::new()
                .step("create user", |_| async { Ok(json!({ "userId": 11 })) })
                .step("attach plan", |_| async {
                    Err(AppError::server("Plan not found", 404, None))
                })
                .step("send welcome message", |_| async {
                    Ok(json!({ "ran": "must not happen" }))
                })
                .run(),
        );

        assert!(!outcome.is_success());
        assert_eq!(outcome.completed, vec!["create user"]);
        assert_eq!(outcome.last_response["ran"], Value::Null);
        assert!(outcome.summary().contains("create user"));
        let failure = outcome.failure.unwrap();
        assert_eq!(failure.step, "attach plan");
        assert_eq!(failure.error.status(), Some(404));
    }
}
