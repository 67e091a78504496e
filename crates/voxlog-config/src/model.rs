// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Voxlog assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Voxlog configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values;
/// required service identifiers are checked where the clients are built.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VoxlogConfig {
    /// Assistant identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Hosted AI agent service settings.
    #[serde(default)]
    pub ai: AiConfig,

    /// Time-registration backend API settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Microsoft Entra ID authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Assistant identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "voxlog".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Hosted AI agent service configuration.
///
/// The endpoint hosts the thread/run conversation API; one pre-configured
/// assistant extracts activity data from utterances.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AiConfig {
    /// Base URL of the agent service, e.g. `https://example.services.ai.azure.com`.
    #[serde(default)]
    pub endpoint: String,

    /// Agent service project identifier.
    #[serde(default)]
    pub project_id: String,

    /// Identifier of the assistant that runs against each thread.
    #[serde(default)]
    pub assistant_id: String,

    /// API version query parameter sent on every call.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// OAuth scope requested for agent service tokens.
    #[serde(default = "default_ai_scope")]
    pub scope: String,

    /// Seconds to wait between run status checks.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Maximum number of run status checks before giving up.
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            project_id: String::new(),
            assistant_id: String::new(),
            api_version: default_api_version(),
            scope: default_ai_scope(),
            poll_interval_secs: default_poll_interval_secs(),
            max_poll_attempts: default_max_poll_attempts(),
        }
    }
}

fn default_api_version() -> String {
    "2025-05-01".to_string()
}

fn default_ai_scope() -> String {
    "https://cognitiveservices.azure.com/.default".to_string()
}

fn default_poll_interval_secs() -> u64 {
    1
}

fn default_max_poll_attempts() -> u32 {
    60
}

/// Time-registration backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the backend API.
    #[serde(default)]
    pub base_url: String,

    /// OAuth scope requested for backend tokens. `None` reuses the
    /// default sign-in scopes.
    #[serde(default)]
    pub scope: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            scope: None,
        }
    }
}

/// Microsoft Entra ID authentication configuration.
///
/// With tenant/client credentials set, tokens are acquired via the
/// client-credential flow. `access_token` bypasses acquisition entirely
/// (useful for pre-acquired tokens and tests).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Entra ID tenant identifier.
    #[serde(default)]
    pub tenant_id: Option<String>,

    /// Application (client) identifier.
    #[serde(default)]
    pub client_id: Option<String>,

    /// Client secret. Prefer the `VOXLOG_AUTH_CLIENT_SECRET` environment
    /// variable over storing this in a file.
    #[serde(default)]
    pub client_secret: Option<String>,

    /// Pre-acquired bearer token; skips the token endpoint when set.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Identity sent to the backend as `X-User-Email`.
    #[serde(default)]
    pub user_email: Option<String>,
}
