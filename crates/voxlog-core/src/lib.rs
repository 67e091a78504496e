// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Voxlog voice time-registration assistant.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Voxlog workspace. The protocol, auth,
//! and backend crates implement traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VoxlogError;
pub use types::{ActivityDraft, ActivityRecord, Project, RunId, RunStatus, ThreadId};

// Re-export all collaborator traits at crate root.
pub use traits::{ActivitySink, ProjectDirectory, TokenProvider};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voxlog_error_covers_the_taxonomy() {
        // Verify every stage's failure can be constructed.
        let _config = VoxlogError::Config("test".into());
        let _agent = VoxlogError::AgentUnavailable {
            message: "test".into(),
            source: None,
        };
        let _run_failed = VoxlogError::RunFailed {
            status: RunStatus::Failed,
        };
        let _run_timeout = VoxlogError::RunTimeout { attempts: 60 };
        let _parse = VoxlogError::Parse {
            message: "test".into(),
        };
        let _directory = VoxlogError::Directory {
            message: "test".into(),
            source: None,
        };
        let _submission = VoxlogError::Submission {
            message: "test".into(),
            source: None,
        };
        let _auth_required = VoxlogError::AuthRequired {
            message: "test".into(),
        };
        let _auth = VoxlogError::Auth {
            message: "test".into(),
            source: None,
        };
        let _cancelled = VoxlogError::Cancelled;
        let _internal = VoxlogError::Internal("test".into());
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // If any trait module is missing or broken, this won't compile.
        fn _assert_token_provider<T: TokenProvider>() {}
        fn _assert_project_directory<T: ProjectDirectory>() {}
        fn _assert_activity_sink<T: ActivitySink>() {}
    }
}
