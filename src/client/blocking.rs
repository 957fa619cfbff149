use super::{
    HostConfig, UNQUEUED_PROMPT_ID, is_completed, over_budget, parse_prompt_id, remaining,
};
use crate::definition::HostRegistry;
use crate::error::SubmitError;
use crate::graph::ExecutionRequest;
use serde_json::Value;
use std::thread;
use std::time::Instant;

/// Blocking client. Must not be created or dropped inside an async runtime.
#[derive(Debug, Clone)]
pub struct BlockingHostClient {
    http: reqwest::blocking::Client,
    config: HostConfig,
}

impl BlockingHostClient {
    pub fn new(config: HostConfig) -> Result<Self, SubmitError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    fn read_body(url: &str, response: reqwest::blocking::Response) -> Result<String, SubmitError> {
        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }

    fn read_json(url: &str, response: reqwest::blocking::Response) -> Result<Value, SubmitError> {
        Ok(serde_json::from_str(&Self::read_body(url, response)?)?)
    }

    fn send_json(url: &str, request: reqwest::blocking::RequestBuilder) -> Result<Value, SubmitError> {
        Self::read_json(url, request.send()?)
    }

    pub fn queue(&self, request: &ExecutionRequest) -> Result<String, SubmitError> {
        self.queue_within(request, Instant::now())
    }

    fn queue_within(&self, request: &ExecutionRequest, started: Instant) -> Result<String, SubmitError> {
        let url = self.config.endpoint("prompt");
        let post = self
            .http
            .post(&url)
            .timeout(remaining(&self.config, started))
            .json(request);
        let body = Self::send_json(&url, post)
            .map_err(|e| over_budget(e, UNQUEUED_PROMPT_ID, &self.config, started))?;
        parse_prompt_id(&body)
    }

    pub fn history(&self, prompt_id: &str) -> Result<Value, SubmitError> {
        self.history_within(prompt_id, Instant::now())
    }

    fn history_within(&self, prompt_id: &str, started: Instant) -> Result<Value, SubmitError> {
        let url = self.config.endpoint(&format!("history/{}", prompt_id));
        let get = self
            .http
            .get(&url)
            .timeout(remaining(&self.config, started));
        Self::send_json(&url, get).map_err(|e| over_budget(e, prompt_id, &self.config, started))
    }

    pub fn wait_for(&self, prompt_id: &str, started: Instant) -> Result<Value, SubmitError> {
        loop {
            let body = self.history_within(prompt_id, started)?;
            if is_completed(&body, prompt_id) {
                log::info!("Prompt {} completed in {:?}", prompt_id, started.elapsed());
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
            thread::sleep(self.config.poll_interval);
        }
    }

    pub fn submit(&self, request: &ExecutionRequest) -> Result<Value, SubmitError> {
        let started = Instant::now();
        let prompt_id = self.queue_within(request, started)?;
        log::info!("Queued prompt {} on {}", prompt_id, self.config.base_url);
        self.wait_for(&prompt_id, started)
    }

    pub fn object_info(&self) -> Result<HostRegistry, SubmitError> {
        let url = self.config.endpoint("object_info");
        let response = self.http.get(&url).send()?;
        Ok(serde_json::from_str(&Self::read_body(&url, response)?)?)
    }
}
