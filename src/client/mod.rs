//! Submit/poll protocol against the host's HTTP API.
//!
//! `POST {base}/prompt` queues an execution document and answers with a `prompt_id`. The
//! client then polls `GET {base}/history/{prompt_id}` every `poll_interval` until the entry
//! reports `status.completed == true`, or fails with `SubmitError::Timeout` once the total
//! budget measured from submission start is spent. Each request only gets what is left of the
//! budget, so a hung request ends in `Timeout` too. The host-side job is not cancelled.

mod blocking;
mod config;
mod host;

pub use blocking::BlockingHostClient;
pub use config::*;
pub use host::HostClient;

use crate::error::SubmitError;
use crate::graph::Workflow;
use serde_json::Value;
use std::future::Future;
use std::time::{Duration, Instant};

/// Prompt id reported by a `Timeout` raised before the host assigned one.
pub const UNQUEUED_PROMPT_ID: &str = "<unqueued>";

pub(crate) fn parse_prompt_id(body: &Value) -> Result<String, SubmitError> {
    match body.get("prompt_id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        _ => Err(SubmitError::MissingPromptId(body.to_string())),
    }
}

/// What is left of the submission budget counted from `started`.
pub(crate) fn remaining(config: &HostConfig, started: Instant) -> Duration {
    config.timeout.saturating_sub(started.elapsed())
}

/// Turns a request cut off by its share of the budget into `SubmitError::Timeout`.
pub(crate) fn over_budget(
    error: SubmitError,
    prompt_id: &str,
    config: &HostConfig,
    started: Instant,
) -> SubmitError {
    match error {
        SubmitError::Http(e) if e.is_timeout() => SubmitError::Timeout {
            prompt_id: prompt_id.to_string(),
            elapsed: started.elapsed(),
            timeout: config.timeout,
        },
        other => other,
    }
}

/// Whether a history response reports the prompt as finished.
///
/// The host nests the entry under the prompt id. A bare entry is accepted too.
pub(crate) fn is_completed(body: &Value, prompt_id: &str) -> bool {
    let entry = body.get(prompt_id).unwrap_or(body);
    entry
        .pointer("/status/completed")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

impl Workflow {
    /// Validates, submits and blocks the calling thread until the host reports completion.
    ///
    /// Returns the history response verbatim.
    pub fn submit(&self, config: &HostConfig) -> Result<Value, SubmitError> {
        let request = self.prepare_request()?;
        BlockingHostClient::new(config.clone())?.submit(&request)
    }

    /// Non-blocking variant of [`submit`](Self::submit) with the same cadence and budget.
    ///
    /// The graph is validated and serialized before the returned future first runs, so the
    /// future owns its request and may be moved to another thread.
    pub fn submit_async(
        &self,
        config: &HostConfig,
    ) -> impl Future<Output = Result<Value, SubmitError>> + Send + 'static + use<> {
        let request = self.prepare_request();
        let config = config.clone();
        async move {
            let request = request?;
            HostClient::new(config)?.submit(&request).await
        }
    }
}
