use std::sync::Arc;

use url::Url;

use super::provider::AuthProvider;
use crate::error::AuthError;

/// Whether the reset screen may accept a new password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionValidity {
    Valid,
    /// Shown as "invalid or expired link"; the learner must request a new one.
    Invalid,
}

/// Tokens carried by a reset link, in its query string or fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetLinkTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl ResetLinkTokens {
    /// # Errors
    ///
    /// Returns `AuthError::Url` if `link` is not an absolute URL.
    pub fn from_link(link: &str) -> Result<Self, AuthError> {
        let url = Url::parse(link)?;
        let mut tokens = Self::default();
        let fragment_pairs = url
            .fragment()
            .map(|f| url::form_urlencoded::parse(f.as_bytes()).into_owned().collect::<Vec<_>>())
            .unwrap_or_default();
        for (key, value) in url.query_pairs().into_owned().chain(fragment_pairs) {
            match key.as_str() {
                "access_token" if !value.is_empty() => tokens.access_token = Some(value),
                "refresh_token" if !value.is_empty() => tokens.refresh_token = Some(value),
                _ => {}
            }
        }
        Ok(tokens)
    }
}

/// Forgot-password request and the reset screen that follows the email link.
pub struct PasswordResetFlow {
    provider: Arc<dyn AuthProvider>,
    validity: Option<SessionValidity>,
}

impl PasswordResetFlow {
    #[must_use]
    pub fn new(provider: Arc<dyn AuthProvider>) -> Self {
        Self {
            provider,
            validity: None,
        }
    }

    /// `None` until `check_session` has run.
    #[must_use]
    pub fn validity(&self) -> Option<SessionValidity> {
        self.validity
    }

    /// Send the reset email.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmptyEmail` for a blank address, otherwise the
    /// provider's error.
    pub async fn request_reset(&self, email: &str, redirect_to: &str) -> Result<(), AuthError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        self.provider
            .reset_password_for_email(email, redirect_to)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "password reset request failed"))?;
        tracing::info!("password reset email requested");
        Ok(())
    }

    /// An existing session wins. Otherwise both link tokens must be present
    /// and accepted by the provider. Failures are never retried.
    pub async fn check_session(
        &mut self,
        access_token: Option<&str>,
        refresh_token: Option<&str>,
    ) -> SessionValidity {
        let validity = match self.provider.get_session().await {
            Ok(Some(_)) => SessionValidity::Valid,
            Ok(None) | Err(_) => match (access_token, refresh_token) {
                (Some(access), Some(refresh)) => {
                    match self.provider.set_session(access, refresh).await {
                        Ok(_) => SessionValidity::Valid,
                        Err(e) => {
                            tracing::warn!(error = %e, "reset link rejected");
                            SessionValidity::Invalid
                        }
                    }
                }
                _ => SessionValidity::Invalid,
            },
        };
        self.validity = Some(validity);
        validity
    }

    /// Convenience over `check_session` for a full reset link.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Url` if `link` does not parse.
    pub async fn check_link(&mut self, link: &str) -> Result<SessionValidity, AuthError> {
        let tokens = ResetLinkTokens::from_link(link)?;
        Ok(self
            .check_session(tokens.access_token.as_deref(), tokens.refresh_token.as_deref())
            .await)
    }

    /// # Errors
    ///
    /// Returns `AuthError::PasswordMismatch` or `AuthError::EmptyPassword`
    /// before contacting the provider, `AuthError::InvalidSession` unless
    /// `check_session` found a valid session, or the provider's error.
    pub async fn update_password(&self, password: &str, confirm: &str) -> Result<(), AuthError> {
        if password != confirm {
            return Err(AuthError::PasswordMismatch);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        if self.validity != Some(SessionValidity::Valid) {
            return Err(AuthError::InvalidSession);
        }
        self.provider.update_password(password).await?;
        tracing::info!("password updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthSession;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeProvider {
        session: Mutex<Option<AuthSession>>,
        accept_tokens: bool,
        updated: Mutex<Vec<String>>,
        emails: Mutex<Vec<String>>,
    }

    fn session(token: &str) -> AuthSession {
        AuthSession {
            access_token: token.into(),
            refresh_token: "r".into(),
            user: None,
        }
    }

    #[async_trait]
    impl AuthProvider for FakeProvider {
        async fn reset_password_for_email(&self, email: &str, _: &str) -> Result<(), AuthError> {
            self.emails.lock().unwrap().push(email.to_string());
            Ok(())
        }

        async fn set_session(&self, access: &str, _: &str) -> Result<AuthSession, AuthError> {
            if !self.accept_tokens {
                return Err(AuthError::InvalidSession);
            }
            let s = session(access);
            *self.session.lock().unwrap() = Some(s.clone());
            Ok(s)
        }

        async fn get_session(&self) -> Result<Option<AuthSession>, AuthError> {
            Ok(self.session.lock().unwrap().clone())
        }

        async fn update_password(&self, password: &str) -> Result<(), AuthError> {
            if self.session.lock().unwrap().is_none() {
                return Err(AuthError::InvalidSession);
            }
            self.updated.lock().unwrap().push(password.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn existing_session_is_valid() {
        let provider = Arc::new(FakeProvider {
            session: Mutex::new(Some(session("a"))),
            ..FakeProvider::default()
        });
        let mut flow = PasswordResetFlow::new(provider);
        assert_eq!(flow.check_session(None, None).await, SessionValidity::Valid);
    }

    #[tokio::test]
    async fn link_tokens_establish_a_session() {
        let provider = Arc::new(FakeProvider {
            accept_tokens: true,
            ..FakeProvider::default()
        });
        let mut flow = PasswordResetFlow::new(provider.clone());
        let validity = flow
            .check_link("https://app.example.com/reset-password#access_token=abc&refresh_token=def&type=recovery")
            .await
            .unwrap();
        assert_eq!(validity, SessionValidity::Valid);

        flow.update_password("hunter22", "hunter22").await.unwrap();
        assert_eq!(provider.updated.lock().unwrap().as_slice(), ["hunter22"]);
    }

    #[tokio::test]
    async fn missing_or_rejected_tokens_are_invalid() {
        let provider = Arc::new(FakeProvider::default());
        let mut flow = PasswordResetFlow::new(provider);
        assert_eq!(flow.check_session(Some("a"), None).await, SessionValidity::Invalid);
        assert_eq!(flow.check_session(Some("a"), Some("b")).await, SessionValidity::Invalid);
        assert!(matches!(
            flow.update_password("x", "x").await,
            Err(AuthError::InvalidSession)
        ));
    }

    #[tokio::test]
    async fn mismatched_passwords_never_reach_the_provider() {
        let provider = Arc::new(FakeProvider {
            session: Mutex::new(Some(session("a"))),
            ..FakeProvider::default()
        });
        let mut flow = PasswordResetFlow::new(provider.clone());
        flow.check_session(None, None).await;
        assert!(matches!(
            flow.update_password("one", "two").await,
            Err(AuthError::PasswordMismatch)
        ));
        assert!(provider.updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_email_is_rejected() {
        let provider = Arc::new(FakeProvider::default());
        let flow = PasswordResetFlow::new(provider.clone());
        assert!(matches!(
            flow.request_reset("  ", "http://localhost/reset-password").await,
            Err(AuthError::EmptyEmail)
        ));
        flow.request_reset(" pm@example.com ", "http://localhost/reset-password")
            .await
            .unwrap();
        assert_eq!(provider.emails.lock().unwrap().as_slice(), ["pm@example.com"]);
    }

    #[test]
    fn tokens_parse_from_query_string() {
        let tokens =
            ResetLinkTokens::from_link("http://localhost/reset-password?access_token=a&refresh_token=b")
                .unwrap();
        assert_eq!(tokens.access_token.as_deref(), Some("a"));
        assert_eq!(tokens.refresh_token.as_deref(), Some("b"));
    }
}
