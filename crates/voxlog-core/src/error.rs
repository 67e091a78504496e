// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Voxlog assistant.

use thiserror::Error;

use crate::types::RunStatus;

/// The primary error type used across all Voxlog collaborator traits and
/// core operations.
///
/// Every stage of an utterance's flow fails fast with one of these; none
/// are retried automatically. The message is suitable for a short user
/// notification; the `source` chain carries the technical detail for logs.
#[derive(Debug, Error)]
pub enum VoxlogError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// The agent service was unreachable or returned a non-success status.
    #[error("agent service error: {message}")]
    AgentUnavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The agent run reached a terminal non-success state.
    #[error("agent run ended in state `{status}`")]
    RunFailed { status: RunStatus },

    /// The poll attempt budget was exhausted without a terminal state.
    #[error("agent run did not finish within {attempts} status checks")]
    RunTimeout { attempts: u32 },

    /// The assistant reply was not valid JSON after fence stripping.
    #[error("could not interpret assistant reply: {message}")]
    Parse { message: String },

    /// The project directory could not be fetched.
    #[error("project directory error: {message}")]
    Directory {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The activity record could not be persisted.
    #[error("activity submission error: {message}")]
    Submission {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Token acquisition needs interactive re-authentication.
    #[error("authentication required: {message}")]
    AuthRequired { message: String },

    /// Token acquisition failed for a non-interactive reason.
    #[error("authentication error: {message}")]
    Auth {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The in-flight exchange was cancelled by the caller.
    #[error("operation cancelled")]
    Cancelled,

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VoxlogError {
    /// True when the user can recover by re-authenticating interactively.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, VoxlogError::AuthRequired { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_failed_message_names_the_status() {
        let err = VoxlogError::RunFailed {
            status: RunStatus::Expired,
        };
        assert_eq!(err.to_string(), "agent run ended in state `expired`");
    }

    #[test]
    fn auth_required_is_distinguished() {
        let interactive = VoxlogError::AuthRequired {
            message: "sign in again".into(),
        };
        let transport = VoxlogError::Auth {
            message: "token endpoint unreachable".into(),
            source: None,
        };
        assert!(interactive.is_auth_required());
        assert!(!transport.is_auth_required());
    }
}
