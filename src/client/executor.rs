use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::transport::Transport;
use crate::constants::{DEFAULT_INITIAL_DELAY_MS, DEFAULT_RETRIES};
use crate::error::{MondayError, MondayResult};
use crate::logging::log_debug;
use crate::models::{ApiOutcome, GraphQLError, RawResponse};

/// Retry budget for one `execute` call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecuteOptions {
    /// Retries after the first attempt, so up to `retries + 1` calls.
    pub retries: u32,
    /// Delay before the first retry; doubles on each following retry.
    pub initial_delay: Duration,
}

impl ExecuteOptions {
    pub fn new(retries: u32, initial_delay: Duration) -> Self {
        Self {
            retries,
            initial_delay,
        }
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self::new(DEFAULT_RETRIES, Duration::from_millis(DEFAULT_INITIAL_DELAY_MS))
    }
}

/// Decides whether a server reported error is transient.
pub trait RetryClassifier: Send + Sync {
    fn is_retryable(&self, error: &GraphQLError) -> bool;
}

/// Treats complexity budget errors as transient: any message containing
/// "complexity", case-insensitively.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComplexityClassifier;

impl RetryClassifier for ComplexityClassifier {
    fn is_retryable(&self, error: &GraphQLError) -> bool {
        error.message.to_lowercase().contains("complexity")
    }
}

impl<F> RetryClassifier for F
where
    F: Fn(&GraphQLError) -> bool + Send + Sync,
{
    fn is_retryable(&self, error: &GraphQLError) -> bool {
        self(error)
    }
}

/// `initial_delay * 2^attempt`, with `attempt` 0 for the first retry.
pub fn backoff_delay(initial_delay: Duration, attempt: u32) -> Duration {
    initial_delay.saturating_mul(2u32.saturating_pow(attempt))
}

struct ExecutionAttempt {
    index: u32,
    max_retries: u32,
    base_delay: Duration,
}

impl ExecutionAttempt {
    fn new(options: &ExecuteOptions) -> Self {
        Self {
            index: 0,
            max_retries: options.retries,
            base_delay: options.initial_delay,
        }
    }

    fn can_retry(&self) -> bool {
        self.index < self.max_retries
    }

    fn delay(&self) -> Duration {
        backoff_delay(self.base_delay, self.index)
    }
}

enum Attempt {
    Success(Value),
    Retry { reason: String },
    Fail(MondayError),
}

/// Runs GraphQL calls through a `Transport`, retrying transient failures
/// with exponential backoff.
///
/// Server reported errors are retried only when the classifier accepts one
/// of them; any other server error fails at once. Transport faults are
/// retried until the budget runs out, then reported as
/// `MondayError::RetriesExhausted`. The executor keeps no state between
/// calls.
pub struct Executor<T, C = ComplexityClassifier> {
    transport: T,
    classifier: C,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T) -> Self {
        Self::with_classifier(transport, ComplexityClassifier)
    }
}

impl<T: Transport, C: RetryClassifier> Executor<T, C> {
    pub fn with_classifier(transport: T, classifier: C) -> Self {
        Self {
            transport,
            classifier,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute and decode the `data` payload into `D`.
    pub async fn execute<D: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
        options: &ExecuteOptions,
    ) -> MondayResult<D> {
        let data = self.execute_raw(query, variables.as_ref(), options).await?;
        Ok(serde_json::from_value(data)?)
    }

    pub async fn execute_raw(
        &self,
        query: &str,
        variables: Option<&Value>,
        options: &ExecuteOptions,
    ) -> MondayResult<Value> {
        let mut attempt = ExecutionAttempt::new(options);

        loop {
            let result = self.transport.execute(query, variables).await;

            match self.classify(result, &attempt) {
                Attempt::Success(data) => return Ok(data),
                Attempt::Retry { reason } => {
                    let delay = attempt.delay();
                    log_debug(&format!(
                        "Monday API attempt {} failed ({}). Retrying in {}ms",
                        attempt.index + 1,
                        reason,
                        delay.as_millis()
                    ));
                    tokio::time::sleep(delay).await;
                    attempt.index += 1;
                }
                Attempt::Fail(error) => return Err(error),
            }
        }
    }

    fn classify(&self, result: MondayResult<RawResponse>, attempt: &ExecutionAttempt) -> Attempt {
        match result {
            Ok(response) => match response.into_outcome() {
                ApiOutcome::Data(data) => Attempt::Success(data),
                ApiOutcome::Errors { errors, account_id } => {
                    let retryable = errors.iter().any(|e| self.classifier.is_retryable(e));
                    if retryable && attempt.can_retry() {
                        Attempt::Retry {
                            reason: join_messages(&errors),
                        }
                    } else {
                        Attempt::Fail(MondayError::api(errors, account_id))
                    }
                }
            },
            // Already classified server failure: never retried here.
            Err(error @ MondayError::Api { .. }) => Attempt::Fail(error),
            Err(error) if attempt.can_retry() => Attempt::Retry {
                reason: error.to_string(),
            },
            Err(error) => Attempt::Fail(MondayError::RetriesExhausted {
                retries: attempt.max_retries,
                message: error.to_string(),
            }),
        }
    }
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
