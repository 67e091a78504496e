// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the hosted agent service.
//!
//! Provides [`AgentClient`] which conducts one complete utterance exchange:
//! create a thread, append the user message, start a run, poll the run to a
//! terminal state, and fetch the latest assistant reply.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use voxlog_config::model::AiConfig;
use voxlog_core::{RunId, RunStatus, ThreadId, VoxlogError};

use crate::types::{
    ApiErrorResponse, CreatedResource, MessageListResponse, NewMessageRequest, NewRunRequest,
    RunStatusResponse,
};

/// Per-request timeout. Polling waits happen between requests, so a single
/// status check never needs more than this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client driving the agent service's thread/run protocol.
///
/// One instance serves many exchanges; each exchange creates a fresh thread
/// that is never reused. The caller supplies a bearer token valid at call
/// time -- acquisition and refresh live behind the `TokenProvider` seam, not
/// here.
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    assistant_id: String,
    api_version: String,
    poll_interval: Duration,
    max_poll_attempts: u32,
}

impl AgentClient {
    /// Creates a new agent service client from the given configuration.
    ///
    /// Fails with `Config` when the endpoint, project id, or assistant id
    /// is missing.
    pub fn new(config: &AiConfig) -> Result<Self, VoxlogError> {
        for (key, value) in [
            ("ai.endpoint", &config.endpoint),
            ("ai.project_id", &config.project_id),
            ("ai.assistant_id", &config.assistant_id),
        ] {
            if value.trim().is_empty() {
                return Err(VoxlogError::Config(format!(
                    "{key} is required for the agent service"
                )));
            }
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxlogError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.endpoint.trim().trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            assistant_id: config.assistant_id.clone(),
            api_version: config.api_version.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            max_poll_attempts: config.max_poll_attempts,
        })
    }

    /// Overrides the polling cadence (for tests that simulate the budget
    /// without real delay).
    #[cfg(test)]
    fn with_polling(mut self, interval: Duration, attempts: u32) -> Self {
        self.poll_interval = interval;
        self.max_poll_attempts = attempts;
        self
    }

    /// Conducts one complete exchange: the utterance goes in, the
    /// assistant's raw reply text comes back.
    ///
    /// Returns the empty string when the run completes without an
    /// assistant reply ("no response", not an error). The cancellation
    /// token is honored at every suspension point; pass a fresh token to
    /// run to completion.
    pub async fn exchange(
        &self,
        token: &str,
        utterance: &str,
        cancel: &CancellationToken,
    ) -> Result<String, VoxlogError> {
        let thread_id = with_cancel(cancel, self.create_thread(token)).await?;
        debug!(thread_id = %thread_id.0, "thread created");

        with_cancel(cancel, self.append_user_message(token, &thread_id, utterance)).await?;

        let run_id = with_cancel(cancel, self.create_run(token, &thread_id)).await?;
        debug!(run_id = %run_id.0, "run created");

        self.wait_for_run(token, &thread_id, &run_id, cancel).await?;

        with_cancel(cancel, self.latest_assistant_text(token, &thread_id)).await
    }

    /// Creates a new conversation thread and returns its id.
    async fn create_thread(&self, token: &str) -> Result<ThreadId, VoxlogError> {
        let url = format!(
            "{}/api/projects/{}/threads?api-version={}",
            self.base_url, self.project_id, self.api_version
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| transport_error("thread creation", e))?;
        let created: CreatedResource = check(response, "thread creation")
            .await?
            .json()
            .await
            .map_err(|e| transport_error("thread creation", e))?;
        Ok(ThreadId(created.id))
    }

    /// Appends the utterance as a user message to the thread.
    async fn append_user_message(
        &self,
        token: &str,
        thread_id: &ThreadId,
        utterance: &str,
    ) -> Result<(), VoxlogError> {
        let url = format!(
            "{}/api/projects/{}/threads/{}/messages?api-version={}",
            self.base_url, self.project_id, thread_id.0, self.api_version
        );
        let body = NewMessageRequest {
            role: "user",
            content: utterance,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("message creation", e))?;
        check(response, "message creation").await?;
        Ok(())
    }

    /// Starts a run of the pre-configured assistant against the thread.
    async fn create_run(&self, token: &str, thread_id: &ThreadId) -> Result<RunId, VoxlogError> {
        let url = format!(
            "{}/api/projects/{}/threads/{}/runs?api-version={}",
            self.base_url, self.project_id, thread_id.0, self.api_version
        );
        let body = NewRunRequest {
            assistant_id: &self.assistant_id,
        };
        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| transport_error("run creation", e))?;
        let created: CreatedResource = check(response, "run creation")
            .await?
            .json()
            .await
            .map_err(|e| transport_error("run creation", e))?;
        Ok(RunId(created.id))
    }

    /// Fetches the run's current status.
    async fn run_status(
        &self,
        token: &str,
        thread_id: &ThreadId,
        run_id: &RunId,
    ) -> Result<RunStatus, VoxlogError> {
        let url = format!(
            "{}/api/projects/{}/threads/{}/runs/{}?api-version={}",
            self.base_url, self.project_id, thread_id.0, run_id.0, self.api_version
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| transport_error("run status check", e))?;
        let status: RunStatusResponse = check(response, "run status check")
            .await?
            .json()
            .await
            .map_err(|e| transport_error("run status check", e))?;
        Ok(status.status)
    }

    /// Polls the run until it completes.
    ///
    /// Sleeps the configured interval before every check. `completed`
    /// succeeds; `failed`/`cancelled`/`expired` abort immediately with
    /// `RunFailed`; exhausting the attempt budget without a terminal state
    /// yields `RunTimeout`. Every other status keeps polling.
    async fn wait_for_run(
        &self,
        token: &str,
        thread_id: &ThreadId,
        run_id: &RunId,
        cancel: &CancellationToken,
    ) -> Result<(), VoxlogError> {
        for attempt in 1..=self.max_poll_attempts {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(VoxlogError::Cancelled),
                _ = tokio::time::sleep(self.poll_interval) => {}
            }

            let status =
                with_cancel(cancel, self.run_status(token, thread_id, run_id)).await?;
            debug!(attempt, %status, "run status");

            if status == RunStatus::Completed {
                return Ok(());
            }
            if status.is_terminal_failure() {
                warn!(%status, "run ended in terminal failure");
                return Err(VoxlogError::RunFailed { status });
            }
        }

        Err(VoxlogError::RunTimeout {
            attempts: self.max_poll_attempts,
        })
    }

    /// Fetches the latest assistant reply text from the thread.
    ///
    /// The messages endpoint lists newest first, so the first entry with
    /// role `assistant` is the reply to the run that just completed.
    /// Returns the empty string when there is no assistant message or it
    /// carries no text content.
    async fn latest_assistant_text(
        &self,
        token: &str,
        thread_id: &ThreadId,
    ) -> Result<String, VoxlogError> {
        let url = format!(
            "{}/api/projects/{}/threads/{}/messages?api-version={}",
            self.base_url, self.project_id, thread_id.0, self.api_version
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| transport_error("message listing", e))?;
        let list: MessageListResponse = check(response, "message listing")
            .await?
            .json()
            .await
            .map_err(|e| transport_error("message listing", e))?;

        let reply = list
            .data
            .iter()
            .find(|m| m.role == "assistant")
            .and_then(|m| m.first_text())
            .unwrap_or_default()
            .to_string();

        if reply.is_empty() {
            debug!(thread_id = %thread_id.0, "run completed without assistant text");
        }
        Ok(reply)
    }
}

/// Races a protocol step against cancellation.
async fn with_cancel<T>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, VoxlogError>>,
) -> Result<T, VoxlogError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(VoxlogError::Cancelled),
        result = fut => result,
    }
}

/// Maps a non-2xx response to `AgentUnavailable`, preferring the vendor's
/// error message over the raw body.
async fn check(
    response: reqwest::Response,
    context: &str,
) -> Result<reqwest::Response, VoxlogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<ApiErrorResponse>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(VoxlogError::AgentUnavailable {
        message: format!("{context} returned {status}: {detail}"),
        source: None,
    })
}

/// Maps a reqwest transport error to `AgentUnavailable`.
fn transport_error(context: &str, e: reqwest::Error) -> VoxlogError {
    VoxlogError::AgentUnavailable {
        message: format!("{context} failed: {e}"),
        source: Some(Box::new(e)),
    }
}
