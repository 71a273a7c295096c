use std::env;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::error::AuthError;

/// Tokens for a signed-in user.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

impl std::fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSession")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Hosted identity backend used for password recovery.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Email a reset link that lands on `redirect_to`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the request is rejected or fails.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str)
    -> Result<(), AuthError>;

    /// Adopt the tokens carried by a reset link as the current session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the tokens are invalid or expired.
    async fn set_session(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<AuthSession, AuthError>;

    /// The current session, if any.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if the provider cannot be queried.
    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Set a new password for the current session's user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidSession` without a session, or the
    /// provider's error.
    async fn update_password(&self, password: &str) -> Result<(), AuthError>;
}

#[derive(Clone)]
pub struct AuthConfig {
    /// Root of the auth REST API, e.g. `https://project.example.co/auth/v1`.
    pub base_url: String,
    /// Public API key sent as the `apikey` header.
    pub api_key: String,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl AuthConfig {
    /// Reads `EAGLE_AUTH_URL` and `EAGLE_AUTH_KEY`. Returns `None` unless both
    /// are set and non-empty.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let base_url = env::var("EAGLE_AUTH_URL").ok()?;
        let api_key = env::var("EAGLE_AUTH_KEY").ok()?;
        if base_url.trim().is_empty() || api_key.trim().is_empty() {
            return None;
        }
        Some(Self { base_url, api_key })
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        Ok(Url::parse(&base)?.join(path)?)
    }
}

/// `AuthProvider` over a GoTrue-compatible REST API.
pub struct HttpAuthProvider {
    client: Client,
    config: Option<AuthConfig>,
    session: RwLock<Option<AuthSession>>,
}

impl HttpAuthProvider {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(AuthConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<AuthConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    fn config(&self) -> Result<&AuthConfig, AuthError> {
        self.config.as_ref().ok_or(AuthError::Disabled)
    }

    fn request(&self, builder: RequestBuilder, config: &AuthConfig) -> RequestBuilder {
        builder.header("apikey", &config.api_key)
    }

    fn store(&self, session: Option<AuthSession>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = session;
    }

    fn current(&self) -> Option<AuthSession> {
        self.session
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn fetch_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError> {
        let config = self.config()?;
        let response = self
            .request(self.client.get(config.endpoint("user")?), config)
            .bearer_auth(access_token)
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => Ok(Some(response.json().await?)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(AuthError::HttpStatus(status)),
        }
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        let config = self.config()?;
        let mut url = config.endpoint("token")?;
        url.query_pairs_mut()
            .append_pair("grant_type", "refresh_token");
        let response = self
            .request(self.client.post(url), config)
            .json(&json!({ "refresh_token": refresh_token }))
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => Ok(response.json().await?),
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => Err(AuthError::InvalidSession),
            status => Err(AuthError::HttpStatus(status)),
        }
    }
}

#[async_trait]
impl AuthProvider for HttpAuthProvider {
    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), AuthError> {
        let config = self.config()?;
        let mut url = config.endpoint("recover")?;
        url.query_pairs_mut().append_pair("redirect_to", redirect_to);
        let response = self
            .request(self.client.post(url), config)
            .json(&json!({ "email": email }))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AuthError::HttpStatus(response.status()));
        }
        Ok(())
    }

    async fn set_session(
        &self,
        access_token: &str,
        refresh_token: &str,
    ) -> Result<AuthSession, AuthError> {
        let session = match self.fetch_user(access_token).await? {
            Some(user) => AuthSession {
                access_token: access_token.to_string(),
                refresh_token: refresh_token.to_string(),
                user: Some(user),
            },
            // Access token expired; the refresh token may still be good.
            None => self.refresh(refresh_token).await?,
        };
        self.store(Some(session.clone()));
        Ok(session)
    }

    async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
        Ok(self.current())
    }

    async fn update_password(&self, password: &str) -> Result<(), AuthError> {
        let config = self.config()?;
        let session = self.current().ok_or(AuthError::InvalidSession)?;
        let response = self
            .request(self.client.put(config.endpoint("user")?), config)
            .bearer_auth(&session.access_token)
            .json(&json!({ "password": password }))
            .send()
            .await?;
        match response.status() {
            status if status.is_success() => Ok(()),
            StatusCode::UNAUTHORIZED => {
                self.store(None);
                Err(AuthError::InvalidSession)
            }
            status => Err(AuthError::HttpStatus(status)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_under_the_base_path() {
        let config = AuthConfig {
            base_url: "https://auth.example.com/auth/v1/".into(),
            api_key: "anon".into(),
        };
        assert_eq!(
            config.endpoint("recover").unwrap().as_str(),
            "https://auth.example.com/auth/v1/recover"
        );
    }

    #[tokio::test]
    async fn unconfigured_provider_is_disabled() {
        let provider = HttpAuthProvider::new(None);
        assert!(!provider.enabled());
        assert!(matches!(
            provider.reset_password_for_email("a@b.c", "http://localhost/reset").await,
            Err(AuthError::Disabled)
        ));
        assert!(provider.get_session().await.unwrap().is_none());
    }

    #[test]
    fn session_debug_hides_tokens() {
        let session = AuthSession {
            access_token: "secret-access".into(),
            refresh_token: "secret-refresh".into(),
            user: None,
        };
        let printed = format!("{session:?}");
        assert!(!printed.contains("secret"));
    }
}
