use super::{
    HostConfig, UNQUEUED_PROMPT_ID, is_completed, over_budget, parse_prompt_id, remaining,
};
use crate::definition::HostRegistry;
use crate::error::SubmitError;
use crate::graph::ExecutionRequest;
use serde_json::Value;
use std::time::Instant;

/// Cooperative client: every wait is a `tokio` sleep, never a blocked worker thread.
#[derive(Debug, Clone)]
pub struct HostClient {
    http: reqwest::Client,
    config: HostConfig,
}

impl HostClient {
    pub fn new(config: HostConfig) -> Result<Self, SubmitError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    async fn read_body(url: &str, response: reqwest::Response) -> Result<String, SubmitError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    async fn read_json(url: &str, response: reqwest::Response) -> Result<Value, SubmitError> {
        let body = Self::read_body(url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_json(url: &str, request: reqwest::RequestBuilder) -> Result<Value, SubmitError> {
        let response = request.send().await?;
        Self::read_json(url, response).await
    }

    /// Queues a request and returns the host's prompt id.
    pub async fn queue(&self, request: &ExecutionRequest) -> Result<String, SubmitError> {
        self.queue_within(request, Instant::now()).await
    }

    async fn queue_within(
        &self,
        request: &ExecutionRequest,
        started: Instant,
    ) -> Result<String, SubmitError> {
        let url = self.config.endpoint("prompt");
        let post = self
            .http
            .post(&url)
            .timeout(remaining(&self.config, started))
            .json(request);
        let body = Self::send_json(&url, post)
            .await
            .map_err(|e| over_budget(e, UNQUEUED_PROMPT_ID, &self.config, started))?;
        parse_prompt_id(&body)
    }

    pub async fn history(&self, prompt_id: &str) -> Result<Value, SubmitError> {
        self.history_within(prompt_id, Instant::now()).await
    }

    /// One history request, cut off when the budget counted from `started` runs out.
    async fn history_within(&self, prompt_id: &str, started: Instant) -> Result<Value, SubmitError> {
        let url = self.config.endpoint(&format!("history/{}", prompt_id));
        let get = self
            .http
            .get(&url)
            .timeout(remaining(&self.config, started));
        Self::send_json(&url, get)
            .await
            .map_err(|e| over_budget(e, prompt_id, &self.config, started))
    }

    /// Polls until the prompt completes or the budget counted from `started` runs out.
    pub async fn wait_for(&self, prompt_id: &str, started: Instant) -> Result<Value, SubmitError> {
        let mut polls = 0usize;
        loop {
            let body = self.history_within(prompt_id, started).await?;
            polls += 1;
            if is_completed(&body, prompt_id) {
                log::info!(
                    "Prompt {} completed after {} polls in {:?}",
                    prompt_id,
                    polls,
                    started.elapsed()
                );
                return Ok(body);
            }

            let elapsed = started.elapsed();
            if elapsed >= self.config.timeout {
                return Err(SubmitError::Timeout {
                    prompt_id: prompt_id.to_string(),
                    elapsed,
                    timeout: self.config.timeout,
                });
            }
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    pub async fn submit(&self, request: &ExecutionRequest) -> Result<Value, SubmitError> {
        let started = Instant::now();
        let prompt_id = self.queue_within(request, started).await?;
        log::info!(
            "Queued {} nodes on {} as prompt {}",
            request.prompt.len(),
            self.config.base_url,
            prompt_id
        );
        self.wait_for(&prompt_id, started).await
    }

    /// Fetches the host registry from `GET {base}/object_info`, keeping document order.
    pub async fn object_info(&self) -> Result<HostRegistry, SubmitError> {
        let url = self.config.endpoint("object_info");
        let response = self.http.get(&url).send().await?;
        let body = Self::read_body(&url, response).await?;
        Ok(serde_json::from_str(&body)?)
    }
}
