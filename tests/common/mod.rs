#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use monday_cli::client::Transport;
use monday_cli::error::{MondayError, MondayResult};
use monday_cli::models::{GraphQLError, RawResponse};
use serde_json::Value;
use tokio::time::Instant;

/// Transport that replays queued results and records every call.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<MondayResult<RawResponse>>>,
    fallback: fn() -> MondayResult<RawResponse>,
    calls: Mutex<Vec<Call>>,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub query: String,
    pub variables: Option<Value>,
    pub at: Instant,
}

impl ScriptedTransport {
    pub fn new(script: Vec<MondayResult<RawResponse>>) -> Self {
        Self::with_fallback(script, || {
            Err(MondayError::Unknown("script exhausted".to_string()))
        })
    }

    /// Once the script runs out, every call returns `fallback()`.
    pub fn with_fallback(
        script: Vec<MondayResult<RawResponse>>,
        fallback: fn() -> MondayResult<RawResponse>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Time between consecutive calls, in milliseconds.
    pub fn gaps_ms(&self) -> Vec<u128> {
        let calls = self.calls();
        calls
            .windows(2)
            .map(|pair| (pair[1].at - pair[0].at).as_millis())
            .collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(&self, query: &str, variables: Option<&Value>) -> MondayResult<RawResponse> {
        self.calls.lock().unwrap().push(Call {
            query: query.to_string(),
            variables: variables.cloned(),
            at: Instant::now(),
        });

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(self.fallback)
    }
}

pub fn data(value: Value) -> MondayResult<RawResponse> {
    Ok(RawResponse::with_data(value))
}

pub fn server_errors(messages: &[&str]) -> MondayResult<RawResponse> {
    Ok(RawResponse::with_errors(
        messages.iter().map(|m| GraphQLError::new(*m)).collect(),
        Some("9876".to_string()),
    ))
}

pub fn complexity_error() -> MondayResult<RawResponse> {
    server_errors(&["Complexity budget exhausted, query cost 30001 budget remaining 100"])
}

pub fn network_fault() -> MondayResult<RawResponse> {
    Err(MondayError::Http {
        status: 503,
        body: "upstream unavailable".to_string(),
    })
}
