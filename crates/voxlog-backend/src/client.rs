// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the time-registration backend API.
//!
//! Implements [`ProjectDirectory`] and [`ActivitySink`] over the backend's
//! REST endpoints. Every request acquires a fresh bearer token from the
//! [`TokenProvider`] and identifies the user via `X-User-Email` when an
//! identity is known.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use voxlog_config::model::BackendConfig;
use voxlog_core::{ActivityRecord, ActivitySink, Project, ProjectDirectory, TokenProvider, VoxlogError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the backend's project directory and activity endpoints.
#[derive(Debug)]
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
    scope: Option<String>,
    tokens: Arc<dyn TokenProvider>,
}

impl BackendClient {
    /// Creates a new backend client from the given configuration.
    ///
    /// Fails with `Config` when the base URL is missing.
    pub fn new(config: &BackendConfig, tokens: Arc<dyn TokenProvider>) -> Result<Self, VoxlogError> {
        if config.base_url.trim().is_empty() {
            return Err(VoxlogError::Config(
                "backend.base_url is required for the backend API".into(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxlogError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            scope: config.scope.clone(),
            tokens,
        })
    }

    /// Builds a request with the bearer token and user identity headers.
    async fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, VoxlogError> {
        let scopes: Vec<&str> = self.scope.as_deref().into_iter().collect();
        let token = self.tokens.access_token(&scopes).await?;
        let mut builder = builder.bearer_auth(token);
        if let Some(email) = self.tokens.user_email() {
            builder = builder.header("X-User-Email", email);
        }
        Ok(builder)
    }
}

#[async_trait]
impl ProjectDirectory for BackendClient {
    async fn list_projects(&self) -> Result<Vec<Project>, VoxlogError> {
        let url = format!("{}/api/Proyectos/GetAllProyectos", self.base_url);
        let request = self.authorized(self.client.get(&url)).await?;
        let response = request.send().await.map_err(|e| VoxlogError::Directory {
            message: format!("project list fetch failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxlogError::Directory {
                message: format!("project list fetch returned {status}: {body}"),
                source: None,
            });
        }

        let projects: Vec<Project> =
            response.json().await.map_err(|e| VoxlogError::Directory {
                message: format!("project list response is malformed: {e}"),
                source: Some(Box::new(e)),
            })?;
        debug!(count = projects.len(), "project directory fetched");
        Ok(projects)
    }
}

#[async_trait]
impl ActivitySink for BackendClient {
    async fn submit(&self, record: &ActivityRecord) -> Result<(), VoxlogError> {
        let url = format!("{}/api/Actividad/createActivity", self.base_url);
        let request = self.authorized(self.client.post(&url)).await?;
        let response = request
            .json(record)
            .send()
            .await
            .map_err(|e| VoxlogError::Submission {
                message: format!("activity submission failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxlogError::Submission {
                message: format!("activity submission returned {status}: {body}"),
                source: None,
            });
        }

        info!(guid = record.guid.as_str(), "activity record submitted");
        Ok(())
    }
}
