// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Microsoft Entra ID client-credential token provider.
//!
//! Acquires bearer tokens from the tenant's v2.0 token endpoint and caches
//! them per scope until shortly before expiry. The provider is an
//! initialize-once lifecycle object: construct it at startup, share it, and
//! let it refresh on demand -- there is no global "is initialized" state.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use voxlog_config::model::AuthConfig;
use voxlog_core::{TokenProvider, VoxlogError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Tokens are refreshed this many seconds before their reported expiry.
const REFRESH_MARGIN_SECS: i64 = 60;

/// Error codes from the token endpoint that require interactive sign-in
/// rather than a retry.
const INTERACTION_ERRORS: &[&str] = &[
    "interaction_required",
    "login_required",
    "consent_required",
    "invalid_grant",
];

/// Token provider backed by the Entra ID client-credential flow.
#[derive(Debug)]
pub struct EntraTokenProvider {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: SecretString,
    user_email: Option<String>,
    cache: Mutex<HashMap<String, CachedToken>>,
}

#[derive(Clone, Debug)]
struct CachedToken {
    secret: String,
    expires_at: DateTime<Utc>,
}

/// Successful token endpoint response.
#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// Error token endpoint response.
#[derive(serde::Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl EntraTokenProvider {
    /// Creates a provider from the auth configuration.
    ///
    /// Fails with `Config` when tenant id, client id, or client secret is
    /// missing -- validation reports the same condition earlier with a
    /// richer diagnostic.
    pub fn new(config: &AuthConfig) -> Result<Self, VoxlogError> {
        let tenant_id = required(&config.tenant_id, "auth.tenant_id")?;
        let client_id = required(&config.client_id, "auth.client_id")?;
        let client_secret = required(&config.client_secret, "auth.client_secret")?;

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxlogError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            token_url: format!(
                "https://login.microsoftonline.com/{tenant_id}/oauth2/v2.0/token"
            ),
            client_id,
            client_secret: SecretString::from(client_secret),
            user_email: config.user_email.clone(),
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Overrides the token endpoint (for tests with wiremock).
    #[cfg(test)]
    fn with_token_url(mut self, url: String) -> Self {
        self.token_url = url;
        self
    }

    /// Requests a fresh token for the scope from the token endpoint.
    async fn request_token(&self, scope: &str) -> Result<CachedToken, VoxlogError> {
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("scope", scope),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(|e| VoxlogError::Auth {
                message: format!("token endpoint unreachable: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            if let Ok(err) = serde_json::from_str::<TokenErrorResponse>(&body) {
                let description = err.error_description.unwrap_or_else(|| err.error.clone());
                if INTERACTION_ERRORS.contains(&err.error.as_str()) {
                    warn!(error = err.error.as_str(), "token endpoint requires interaction");
                    return Err(VoxlogError::AuthRequired {
                        message: description,
                    });
                }
                return Err(VoxlogError::Auth {
                    message: format!("token endpoint returned {status}: {description}"),
                    source: None,
                });
            }
            return Err(VoxlogError::Auth {
                message: format!("token endpoint returned {status}: {body}"),
                source: None,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body).map_err(|e| VoxlogError::Auth {
            message: format!("token endpoint response is malformed: {e}"),
            source: Some(Box::new(e)),
        })?;

        debug!(scope, expires_in = token.expires_in, "token acquired");
        Ok(CachedToken {
            secret: token.access_token,
            expires_at: Utc::now() + chrono::Duration::seconds(token.expires_in),
        })
    }
}

#[async_trait]
impl TokenProvider for EntraTokenProvider {
    async fn access_token(&self, scopes: &[&str]) -> Result<String, VoxlogError> {
        let scope = scopes.join(" ");
        if scope.trim().is_empty() {
            return Err(VoxlogError::Auth {
                message: "no scope requested for token acquisition".into(),
                source: None,
            });
        }

        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache.get(&scope)
            && cached.expires_at - chrono::Duration::seconds(REFRESH_MARGIN_SECS) > Utc::now()
        {
            return Ok(cached.secret.clone());
        }

        let fresh = self.request_token(&scope).await?;
        let secret = fresh.secret.clone();
        cache.insert(scope, fresh);
        Ok(secret)
    }

    fn user_email(&self) -> Option<String> {
        self.user_email.clone()
    }
}

fn required(value: &Option<String>, key: &str) -> Result<String, VoxlogError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| VoxlogError::Config(format!("{key} is required for client-credential auth")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_provider(server: &MockServer) -> EntraTokenProvider {
        let config = AuthConfig {
            tenant_id: Some("tenant-1".into()),
            client_id: Some("client-1".into()),
            client_secret: Some("secret-1".into()),
            access_token: None,
            user_email: Some("ana@example.com".into()),
        };
        EntraTokenProvider::new(&config)
            .unwrap()
            .with_token_url(format!("{}/tenant-1/oauth2/v2.0/token", server.uri()))
    }

    fn token_body(token: &str, expires_in: i64) -> serde_json::Value {
        serde_json::json!({
            "token_type": "Bearer",
            "access_token": token,
            "expires_in": expires_in
        })
    }

    #[tokio::test]
    async fn acquires_and_caches_per_scope() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tenant-1/oauth2/v2.0/token"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=client-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-1", 3600)))
            .expect(1)
            .mount(&server)
            .await;

        let provider = test_provider(&server);
        let scopes = ["https://cognitiveservices.azure.com/.default"];
        let first = provider.access_token(&scopes).await.unwrap();
        let second = provider.access_token(&scopes).await.unwrap();
        assert_eq!(first, "tok-1");
        assert_eq!(second, "tok-1");
        server.verify().await;
    }

    #[tokio::test]
    async fn near_expiry_token_is_refreshed() {
        let server = MockServer::start().await;

        // expires_in below the refresh margin: the second call must hit the
        // endpoint again.
        Mock::given(method("POST"))
            .and(path("/tenant-1/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("tok-short", 30)))
            .expect(2)
            .mount(&server)
            .await;

        let provider = test_provider(&server);
        let scopes = ["api://backend/.default"];
        provider.access_token(&scopes).await.unwrap();
        provider.access_token(&scopes).await.unwrap();
        server.verify().await;
    }

    #[tokio::test]
    async fn interaction_required_maps_to_auth_required() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tenant-1/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "interaction_required",
                "error_description": "AADSTS50076: sign in again"
            })))
            .mount(&server)
            .await;

        let provider = test_provider(&server);
        let err = provider
            .access_token(&["api://backend/.default"])
            .await
            .unwrap_err();
        assert!(err.is_auth_required());
    }

    #[tokio::test]
    async fn other_endpoint_errors_are_auth_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tenant-1/oauth2/v2.0/token"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "error": "invalid_client",
                "error_description": "AADSTS7000215: invalid client secret"
            })))
            .mount(&server)
            .await;

        let provider = test_provider(&server);
        let err = provider
            .access_token(&["api://backend/.default"])
            .await
            .unwrap_err();
        match err {
            VoxlogError::Auth { message, .. } => {
                assert!(message.contains("invalid client secret"), "got: {message}");
            }
            other => panic!("expected Auth, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_scope_is_rejected() {
        let server = MockServer::start().await;
        let provider = test_provider(&server);
        let err = provider.access_token(&[]).await.unwrap_err();
        assert!(matches!(err, VoxlogError::Auth { .. }));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[test]
    fn missing_credentials_are_config_errors() {
        let config = AuthConfig {
            tenant_id: Some("tenant-1".into()),
            ..AuthConfig::default()
        };
        let err = EntraTokenProvider::new(&config).unwrap_err();
        assert!(matches!(err, VoxlogError::Config(_)));
    }
}
