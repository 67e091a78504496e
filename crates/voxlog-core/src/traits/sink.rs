// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Activity submission trait for the persistence backend.

use async_trait::async_trait;

use crate::error::VoxlogError;
use crate::types::ActivityRecord;

/// Sink that persists confirmed activity records.
///
/// Submission is all-or-nothing: a failure surfaces as
/// [`VoxlogError::Submission`] and nothing partial is stored.
#[async_trait]
pub trait ActivitySink: Send + Sync + 'static {
    /// Persists one confirmed activity record.
    async fn submit(&self, record: &ActivityRecord) -> Result<(), VoxlogError>;
}
