// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator trait definitions for the Voxlog assistant.
//!
//! These traits are the seams to the external systems an utterance flow
//! touches; all use `#[async_trait]` for dynamic dispatch compatibility.

pub mod auth;
pub mod directory;
pub mod sink;

// Re-export all traits at the traits module level for convenience.
pub use auth::TokenProvider;
pub use directory::ProjectDirectory;
pub use sink::ActivitySink;
