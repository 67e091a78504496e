// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Token provider trait for bearer token acquisition.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::VoxlogError;

/// Supplies bearer tokens and a user identity on demand.
///
/// Implementations own the acquisition lifecycle (caching, refresh,
/// initialize-once state). Callers receive a token valid at call time and
/// never retry acquisition themselves. When acquisition needs the user to
/// sign in interactively, implementations fail with
/// [`VoxlogError::AuthRequired`].
#[async_trait]
pub trait TokenProvider: Debug + Send + Sync + 'static {
    /// Returns a bearer token valid for the given scopes.
    async fn access_token(&self, scopes: &[&str]) -> Result<String, VoxlogError>;

    /// Identity of the signed-in user, when known.
    ///
    /// Sent to the backend as the `X-User-Email` header.
    fn user_email(&self) -> Option<String>;
}
