// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./voxlog.toml` > `~/.config/voxlog/voxlog.toml` >
//! `/etc/voxlog/voxlog.toml` with environment variable overrides via the
//! `VOXLOG_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VoxlogConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/voxlog/voxlog.toml` (system-wide)
/// 3. `~/.config/voxlog/voxlog.toml` (user XDG config)
/// 4. `./voxlog.toml` (local directory)
/// 5. `VOXLOG_*` environment variables
pub fn load_config() -> Result<VoxlogConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<VoxlogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VoxlogConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<VoxlogConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(VoxlogConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for
/// diagnostic use so callers can inspect metadata before extraction).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(VoxlogConfig::default()))
        .merge(Toml::file("/etc/voxlog/voxlog.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("voxlog/voxlog.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("voxlog.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `VOXLOG_AI_PROJECT_ID` must map to
/// `ai.project_id`, not `ai.project.id`.
fn env_provider() -> Env {
    Env::prefixed("VOXLOG_").map(|key| {
        // `key` is the lowercased env var name with the prefix stripped.
        // Example: VOXLOG_AUTH_CLIENT_SECRET -> "auth_client_secret"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("ai_", "ai.", 1)
            .replacen("backend_", "backend.", 1)
            .replacen("auth_", "auth.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_without_any_file() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.agent.name, "voxlog");
        assert_eq!(config.ai.api_version, "2025-05-01");
        assert_eq!(config.ai.poll_interval_secs, 1);
        assert_eq!(config.ai.max_poll_attempts, 60);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [ai]
            endpoint = "https://agents.example.com"
            project_id = "proj-1"
            assistant_id = "asst-1"
            max_poll_attempts = 10
        "#,
        )
        .unwrap();
        assert_eq!(config.ai.endpoint, "https://agents.example.com");
        assert_eq!(config.ai.max_poll_attempts, 10);
        // Untouched keys keep their defaults.
        assert_eq!(config.ai.poll_interval_secs, 1);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
            [agent]
            naem = "typo"
        "#,
        );
        assert!(result.is_err());
    }
}
