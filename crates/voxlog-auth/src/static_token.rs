// SPDX-FileCopyrightText: 2026 Voxlog Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed-token provider for pre-acquired tokens and tests.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

use voxlog_core::{TokenProvider, VoxlogError};

/// Token provider that hands out one pre-acquired bearer token.
///
/// Used when the operator supplies `auth.access_token` directly (the token
/// was acquired elsewhere) and throughout the test suites.
#[derive(Debug)]
pub struct StaticTokenProvider {
    token: SecretString,
    user_email: Option<String>,
}

impl StaticTokenProvider {
    /// Creates a provider around a pre-acquired token.
    pub fn new(token: impl Into<String>, user_email: Option<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            user_email,
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self, _scopes: &[&str]) -> Result<String, VoxlogError> {
        Ok(self.token.expose_secret().to_string())
    }

    fn user_email(&self) -> Option<String> {
        self.user_email.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hands_out_the_same_token_for_any_scope() {
        let provider = StaticTokenProvider::new("tok-static", Some("ana@example.com".into()));
        let a = provider.access_token(&["scope-a"]).await.unwrap();
        let b = provider.access_token(&[]).await.unwrap();
        assert_eq!(a, "tok-static");
        assert_eq!(b, "tok-static");
        assert_eq!(provider.user_email().as_deref(), Some("ana@example.com"));
    }
}
