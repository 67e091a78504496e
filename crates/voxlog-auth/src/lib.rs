// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer token providers for the Voxlog assistant.
//!
//! Implements the [`voxlog_core::TokenProvider`] collaborator trait:
//! [`EntraTokenProvider`] for the Entra ID client-credential flow and
//! [`StaticTokenProvider`] for pre-acquired tokens.

pub mod entra;
pub mod static_token;

use std::sync::Arc;

pub use entra::EntraTokenProvider;
pub use static_token::StaticTokenProvider;

use voxlog_config::model::AuthConfig;
use voxlog_core::{TokenProvider, VoxlogError};

/// Builds the token provider the configuration asks for.
///
/// A pre-acquired `auth.access_token` wins over client credentials. With
/// neither configured, fails with `Config` naming both options.
pub fn provider_from_config(config: &AuthConfig) -> Result<Arc<dyn TokenProvider>, VoxlogError> {
    if let Some(token) = config.access_token.as_deref().map(str::trim)
        && !token.is_empty()
    {
        return Ok(Arc::new(StaticTokenProvider::new(
            token,
            config.user_email.clone(),
        )));
    }

    if config.tenant_id.is_some() || config.client_id.is_some() || config.client_secret.is_some() {
        return Ok(Arc::new(EntraTokenProvider::new(config)?));
    }

    Err(VoxlogError::Config(
        "no authentication configured; set auth.access_token or the \
         auth.tenant_id/client_id/client_secret triple"
            .into(),
    ))
}
