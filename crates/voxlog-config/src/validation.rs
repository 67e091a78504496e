// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as URL shapes and positive polling bounds.

use crate::diagnostic::ConfigError;
use crate::model::VoxlogConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &VoxlogConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Endpoint and base_url must be http(s) URLs when set. Empty values are
    // allowed here; the clients report missing identifiers when built.
    for (key, value) in [
        ("ai.endpoint", &config.ai.endpoint),
        ("backend.base_url", &config.backend.base_url),
    ] {
        let trimmed = value.trim();
        if !trimmed.is_empty() && !trimmed.starts_with("http://") && !trimmed.starts_with("https://")
        {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be an http(s) URL, got `{trimmed}`"),
            });
        }
    }

    if config.ai.api_version.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "ai.api_version must not be empty".to_string(),
        });
    }

    if config.ai.poll_interval_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "ai.poll_interval_secs must be at least 1".to_string(),
        });
    }

    if config.ai.max_poll_attempts == 0 {
        errors.push(ConfigError::Validation {
            message: "ai.max_poll_attempts must be at least 1".to_string(),
        });
    }

    // Client-credential auth needs all three identifiers together.
    let auth = &config.auth;
    let credential_parts = [
        ("auth.tenant_id", auth.tenant_id.as_deref()),
        ("auth.client_id", auth.client_id.as_deref()),
        ("auth.client_secret", auth.client_secret.as_deref()),
    ];
    let set_count = credential_parts
        .iter()
        .filter(|(_, v)| v.is_some_and(|s| !s.trim().is_empty()))
        .count();
    if set_count > 0 && set_count < credential_parts.len() {
        let missing: Vec<&str> = credential_parts
            .iter()
            .filter(|(_, v)| v.is_none_or(|s| s.trim().is_empty()))
            .map(|(k, _)| *k)
            .collect();
        errors.push(ConfigError::Validation {
            message: format!(
                "client-credential auth needs tenant_id, client_id and client_secret; missing {}",
                missing.join(", ")
            ),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_config_from_str;

    #[test]
    fn default_config_is_valid() {
        let config = VoxlogConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn rejects_non_url_endpoint() {
        let config = load_config_from_str("[ai]\nendpoint = \"not a url\"\n").unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.iter().any(|e| e.to_string().contains("ai.endpoint")));
    }

    #[test]
    fn rejects_zero_poll_bounds() {
        let config =
            load_config_from_str("[ai]\npoll_interval_secs = 0\nmax_poll_attempts = 0\n").unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn rejects_partial_client_credentials() {
        let config = load_config_from_str("[auth]\ntenant_id = \"t-1\"\n").unwrap();
        let errors = validate_config(&config).unwrap_err();
        assert!(
            errors
                .iter()
                .any(|e| e.to_string().contains("client_secret"))
        );
    }

    #[test]
    fn accepts_complete_client_credentials() {
        let config = load_config_from_str(
            "[auth]\ntenant_id = \"t-1\"\nclient_id = \"c-1\"\nclient_secret = \"s-1\"\n",
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
    }
}
