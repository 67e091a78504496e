// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Project directory trait for the canonical project list.

use async_trait::async_trait;

use crate::error::VoxlogError;
use crate::types::Project;

/// Source of the canonical project list.
///
/// Reconciliation fetches a fresh snapshot per utterance; implementations
/// must not cache across calls.
#[async_trait]
pub trait ProjectDirectory: Send + Sync + 'static {
    /// Fetches the current list of known projects.
    async fn list_projects(&self) -> Result<Vec<Project>, VoxlogError>;
}
