// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration of one utterance's flow.
//!
//! Sequences token acquisition, the agent exchange, reply interpretation,
//! reconciliation, the user confirmation gate, and submission. Any failure
//! aborts the remainder of the utterance; nothing partial is persisted.
//! User interaction sits behind [`Prompter`] so the flow runs end-to-end in
//! tests.

use std::sync::Arc;

use chrono::Local;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use voxlog_agent::{AgentClient, interpret_reply};
use voxlog_core::{
    ActivityDraft, ActivitySink, Project, ProjectDirectory, TokenProvider, VoxlogError,
};
use voxlog_match::{Reconciliation, preferred_candidate, reconcile};

/// What the user decided at the confirmation gate.
pub enum ConfirmDecision {
    /// Register the (possibly edited) draft.
    Submit(ActivityDraft),
    /// Discard the draft.
    Cancel,
}

/// User interaction surface for the flow.
///
/// The confirmation gate is always passed through, even on a unique match.
pub trait Prompter {
    /// Asks the user to pick a project. `default` indexes the provisional
    /// selection within `choices`. `None` abandons the utterance.
    fn choose_project(
        &mut self,
        title: &str,
        choices: &[Project],
        default: usize,
    ) -> Result<Option<Project>, VoxlogError>;

    /// Final gate before submission; the user may edit hours, date, and
    /// note, or cancel.
    fn confirm(&mut self, draft: ActivityDraft) -> Result<ConfirmDecision, VoxlogError>;
}

/// How one utterance ended, short of an error.
#[derive(Debug, PartialEq, Eq)]
pub enum UtteranceOutcome {
    /// The record was submitted; carries the client-generated guid.
    Submitted { guid: String },
    /// The agent completed without a reply ("no response", not an error).
    NoReply,
    /// The user cancelled at selection or confirmation.
    Abandoned,
}

/// The assembled collaborators one utterance flow runs against.
pub struct Flow {
    agent: AgentClient,
    tokens: Arc<dyn TokenProvider>,
    directory: Arc<dyn ProjectDirectory>,
    sink: Arc<dyn ActivitySink>,
    ai_scope: String,
}

impl Flow {
    pub fn new(
        agent: AgentClient,
        tokens: Arc<dyn TokenProvider>,
        directory: Arc<dyn ProjectDirectory>,
        sink: Arc<dyn ActivitySink>,
        ai_scope: String,
    ) -> Self {
        Self {
            agent,
            tokens,
            directory,
            sink,
            ai_scope,
        }
    }

    /// Runs one utterance to submission, abandonment, or failure.
    ///
    /// Utterances are processed one at a time; the caller does not start a
    /// second flow while one is in flight.
    pub async fn process_utterance(
        &self,
        utterance: &str,
        prompter: &mut dyn Prompter,
        cancel: &CancellationToken,
    ) -> Result<UtteranceOutcome, VoxlogError> {
        let token = self.tokens.access_token(&[self.ai_scope.as_str()]).await?;

        let raw = self.agent.exchange(&token, utterance, cancel).await?;
        if raw.is_empty() {
            return Ok(UtteranceOutcome::NoReply);
        }

        let mut draft = interpret_reply(&raw, Local::now().date_naive())?;
        debug!(title = draft.title.as_str(), hours = draft.hours, "draft interpreted");

        // Fresh snapshot per utterance; the directory may have changed.
        let projects = self.directory.list_projects().await?;

        match reconcile(&draft.title, &projects) {
            Reconciliation::Unique(project) => {
                debug!(project = project.name.as_str(), "unique match");
                draft.apply_project(&project);
            }
            Reconciliation::Ambiguous(candidates) | Reconciliation::NoMatch(candidates) => {
                let default = preferred_candidate(&draft.title, &candidates)
                    .and_then(|p| candidates.iter().position(|c| c == p))
                    .unwrap_or(0);
                match prompter.choose_project(&draft.title, &candidates, default)? {
                    Some(project) => draft.apply_project(&project),
                    None => return Ok(UtteranceOutcome::Abandoned),
                }
            }
        }

        // Manual gate, always -- even a unique match is confirmed.
        let confirmed = match prompter.confirm(draft)? {
            ConfirmDecision::Submit(draft) => draft,
            ConfirmDecision::Cancel => return Ok(UtteranceOutcome::Abandoned),
        };

        let record = confirmed.into_record();
        let guid = record.guid.clone();
        self.sink.submit(&record).await?;
        info!(guid = guid.as_str(), "utterance registered");

        Ok(UtteranceOutcome::Submitted { guid })
    }
}
